use crate::bot::PriceBot;
use crate::config::TelegramConfig;
use crate::error::Result;
use log::{debug, error, info, warn};
use std::time::Duration;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;
use teloxide::utils::command::BotCommands;

/// Command menu registered with Telegram. Parsing of incoming text is done by
/// [`parse_command`] so that unknown commands still get the help reply.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "display help message")]
    H,
    #[command(description = "info about coin price")]
    P(String),
    #[command(description = "info about supply")]
    S(String),
    #[command(description = "info about price change")]
    C(String),
    #[command(description = "info about ATH")]
    A(String),
}

/// A `/keyword[@bot] argument` message split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub keyword: &'a str,
    pub mention: Option<&'a str>,
    pub argument: &'a str,
}

impl ParsedCommand<'_> {
    /// Commands without a mention are for every bot in the chat.
    pub fn is_addressed_to(&self, username: &str) -> bool {
        self.mention
            .map_or(true, |mention| mention.eq_ignore_ascii_case(username))
    }
}

pub fn parse_command(text: &str) -> Option<ParsedCommand<'_>> {
    let rest = text.strip_prefix('/')?;
    let (head, argument) = match rest.split_once(char::is_whitespace) {
        Some((head, argument)) => (head, argument.trim()),
        None => (rest, ""),
    };
    let (keyword, mention) = match head.split_once('@') {
        Some((keyword, mention)) => (keyword, Some(mention)),
        None => (head, None),
    };
    if keyword.is_empty() {
        return None;
    }

    Some(ParsedCommand {
        keyword,
        mention,
        argument,
    })
}

pub struct TelegramBot {
    bot: Bot,
    price_bot: PriceBot,
    updates_timeout: Duration,
}

impl TelegramBot {
    pub fn new(config: &TelegramConfig, price_bot: PriceBot) -> Self {
        Self {
            bot: Bot::new(&config.bot_token),
            price_bot,
            updates_timeout: Duration::from_secs(u64::from(config.updates_timeout_secs)),
        }
    }

    /// Long-polls for updates until the process is stopped.
    pub async fn start(self) -> Result<()> {
        let me = self.bot.get_me().await?;
        let username = me.username().to_string();
        info!("Telegram bot authorized as @{}", username);

        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!("Failed to register command menu: {}", e);
        }

        let listener = Polling::builder(self.bot.clone())
            .timeout(self.updates_timeout)
            .delete_webhook()
            .await
            .build();

        let price_bot = self.price_bot.clone();
        teloxide::repl_with_listener(
            self.bot.clone(),
            move |bot: Bot, msg: Message| {
                let price_bot = price_bot.clone();
                let username = username.clone();
                async move {
                    if let Err(e) = reply(&bot, &msg, &price_bot, &username).await {
                        error!("Failed to answer message {}: {}", msg.id.0, e);
                    }
                    respond(())
                }
            },
            listener,
        )
        .await;

        Ok(())
    }
}

async fn reply(bot: &Bot, msg: &Message, price_bot: &PriceBot, username: &str) -> Result<()> {
    debug!("Got message {} in chat {}", msg.id.0, msg.chat.id);

    let Some(command) = msg.text().and_then(parse_command) else {
        debug!("Received non-message or non-command");
        return Ok(());
    };
    if !command.is_addressed_to(username) {
        debug!("Ignoring command for @{:?}", command.mention);
        return Ok(());
    }

    let text = price_bot
        .handle_command(command.keyword, command.argument)
        .await;

    bot.send_message(msg.chat.id, text)
        .reply_to_message_id(msg.id)
        .await?;

    Ok(())
}
