use crate::api::{QuoteService, SearchService};
use crate::error::Result;
use crate::metrics::CommandReporter;
use crate::report::{self, Report};
use crate::services::{IdentifierResolver, QuoteFetcher};
use log::{debug, error};
use std::sync::Arc;

pub const INVALID_QUERY_MESSAGE: &str = "invalid coin name|ticker|symbol, please try again";

pub const HELP_TEXT: &str = "Please use one of the commands:

/h or /help    display help message
/p <symbol>    info about coin price
/s <symbol>    info about supply
/c <symbol>    info about price change
/a <symbol>    info about ATH";

/// Stateless command handler: resolve, fetch, then render the requested report.
///
/// Failures of any kind turn into [`INVALID_QUERY_MESSAGE`]; the cause is only
/// logged.
#[derive(Clone)]
pub struct PriceBot {
    resolver: IdentifierResolver,
    fetcher: QuoteFetcher,
    reporter: Arc<dyn CommandReporter>,
}

impl PriceBot {
    pub fn new(
        search: Arc<dyn SearchService>,
        quotes: Arc<dyn QuoteService>,
        reporter: Arc<dyn CommandReporter>,
    ) -> Self {
        Self {
            resolver: IdentifierResolver::new(search),
            fetcher: QuoteFetcher::new(quotes),
            reporter,
        }
    }

    pub async fn handle_command(&self, keyword: &str, argument: &str) -> String {
        self.reporter.command_processed(keyword);
        debug!("received command: {}", keyword);

        let Some(report) = report::lookup(keyword) else {
            return HELP_TEXT.to_string();
        };

        match self.run(report, argument).await {
            Ok(text) => text,
            Err(e) => {
                error!("{:?} report for /{} {:?} failed: {}", report.kind, keyword, argument, e);
                self.reporter.command_failed(keyword, e.kind());
                INVALID_QUERY_MESSAGE.to_string()
            }
        }
    }

    async fn run(&self, report: &Report, argument: &str) -> Result<String> {
        debug!("processing command /{} with argument: {}", report.keyword, argument);
        let id = self.resolver.resolve(argument).await?;
        let ticker = self.fetcher.fetch_quotes(&id).await?;
        report.render(&ticker)
    }
}
