use crate::api::QuoteService;
use crate::error::Result;
use crate::models::market::{BTC, USD};
use crate::models::{AssetIdentifier, Ticker};
use log::debug;
use std::sync::Arc;

/// Quote currencies requested for every ticker. Nothing else is ever asked for.
pub const QUOTE_CURRENCIES: [&str; 2] = [USD, BTC];

#[derive(Clone)]
pub struct QuoteFetcher {
    quotes: Arc<dyn QuoteService>,
}

impl QuoteFetcher {
    pub fn new(quotes: Arc<dyn QuoteService>) -> Self {
        Self { quotes }
    }

    /// Returns the ticker exactly as upstream sent it; missing fields stay missing.
    pub async fn fetch_quotes(&self, id: &AssetIdentifier) -> Result<Ticker> {
        let ticker = self.quotes.get_by_identifier(id, &QUOTE_CURRENCIES).await?;
        debug!(
            "fetched ticker {} with quotes {:?}",
            id,
            ticker.quotes.keys().collect::<Vec<_>>()
        );
        Ok(ticker)
    }
}
