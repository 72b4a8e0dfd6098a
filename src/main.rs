use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use prometheus::Registry;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use coinpaprika_bot::api::CoinPaprikaClient;
use coinpaprika_bot::bot::PriceBot;
use coinpaprika_bot::cli::Cli;
use coinpaprika_bot::config::{Config, TOKEN_ENV_VAR};
use coinpaprika_bot::logging;
use coinpaprika_bot::metrics::{CommandReporter, NoopReporter, PrometheusReporter};
use coinpaprika_bot::telegram::TelegramBot;
use coinpaprika_bot::web;

const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path)),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                Config::load(&default_path)
                    .with_context(|| format!("Failed to load configuration from {:?}", default_path))
            } else {
                Ok(Config::default())
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.debug)?;

    debug!("starting telegram-bot");

    let config = load_config(cli.config.as_deref())?.with_overrides(
        cli.token.clone(),
        env::var(TOKEN_ENV_VAR).ok(),
        cli.metrics,
    );
    config.validate()?;
    info!("Configuration loaded successfully.");

    let registry = Registry::new();
    let reporter: Arc<dyn CommandReporter> = if config.monitoring.enable_prometheus {
        Arc::new(PrometheusReporter::new(&registry)?)
    } else {
        Arc::new(NoopReporter)
    };

    let client = Arc::new(CoinPaprikaClient::new(&config.api)?);
    let price_bot = PriceBot::new(client.clone(), client, reporter);

    if config.monitoring.enable_prometheus {
        tokio::spawn(web::serve_metrics(registry, config.monitoring.prometheus_port));
    }

    TelegramBot::new(&config.telegram, price_bot).start().await?;
    Ok(())
}
