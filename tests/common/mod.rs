#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use coinpaprika_bot::api::{QuoteService, SearchCategory, SearchCurrency, SearchModifier, SearchService};
use coinpaprika_bot::error::{Error, Result};
use coinpaprika_bot::metrics::CommandReporter;
use coinpaprika_bot::models::{AssetIdentifier, Quote, Ticker};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Search fake keyed by (query, symbol search?). Records every call.
#[derive(Default)]
pub struct FakeSearch {
    pub by_symbol: HashMap<String, Vec<SearchCurrency>>,
    pub by_name: HashMap<String, Vec<SearchCurrency>>,
    pub fail: bool,
    pub calls: Mutex<Vec<(String, Option<SearchModifier>)>>,
}

impl FakeSearch {
    pub fn with_symbol(mut self, query: &str, ids: &[Option<&str>]) -> Self {
        self.by_symbol.insert(query.to_string(), candidates(ids));
        self
    }

    pub fn with_name(mut self, query: &str, ids: &[Option<&str>]) -> Self {
        self.by_name.insert(query.to_string(), candidates(ids));
        self
    }

    pub fn recorded(&self) -> Vec<(String, Option<SearchModifier>)> {
        self.calls.lock().unwrap().clone()
    }
}

fn candidates(ids: &[Option<&str>]) -> Vec<SearchCurrency> {
    ids.iter()
        .map(|id| SearchCurrency {
            id: id.map(str::to_string),
            ..Default::default()
        })
        .collect()
}

#[async_trait]
impl SearchService for FakeSearch {
    async fn search(
        &self,
        query: &str,
        category: SearchCategory,
        modifier: Option<SearchModifier>,
    ) -> Result<Vec<SearchCurrency>> {
        assert_eq!(category, SearchCategory::Currencies);
        self.calls.lock().unwrap().push((query.to_string(), modifier));
        if self.fail {
            return Err(Error::ApiConnectionFailed("search unavailable".to_string()));
        }

        let index = match modifier {
            Some(SearchModifier::SymbolSearch) => &self.by_symbol,
            None => &self.by_name,
        };
        Ok(index.get(query).cloned().unwrap_or_default())
    }
}

/// Quote fake returning canned tickers per identifier.
#[derive(Default)]
pub struct FakeQuotes {
    tickers: HashMap<String, Ticker>,
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeQuotes {
    pub fn with_ticker(mut self, id: &str, ticker: Ticker) -> Self {
        self.tickers.insert(id.to_string(), ticker);
        self
    }
}

#[async_trait]
impl QuoteService for FakeQuotes {
    async fn get_by_identifier(
        &self,
        id: &AssetIdentifier,
        currencies: &[&'static str],
    ) -> Result<Ticker> {
        self.calls.lock().unwrap().push((
            id.as_str().to_string(),
            currencies.iter().map(|c| c.to_string()).collect(),
        ));
        self.tickers
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| Error::ApiError(format!("tickers/{} failed with status 404", id)))
    }
}

#[derive(Default)]
pub struct CountingReporter {
    pub processed: AtomicUsize,
    pub failed: Mutex<Vec<&'static str>>,
}

impl CommandReporter for CountingReporter {
    fn command_processed(&self, _keyword: &str) {
        self.processed.fetch_add(1, Ordering::SeqCst);
    }

    fn command_failed(&self, _keyword: &str, kind: &'static str) {
        self.failed.lock().unwrap().push(kind);
    }
}

pub fn create_bitcoin_ticker() -> Ticker {
    let mut quotes = HashMap::new();
    quotes.insert(
        "USD".to_string(),
        Quote {
            price: Some(1.0),
            volume_24h: Some(25_000_000_000.0),
            market_cap: Some(1_234_567.8),
            ath_price: Some(68692.1),
            ath_date: Some(Utc.with_ymd_and_hms(2021, 11, 10, 16, 51, 15).unwrap()),
            percent_from_price_ath: Some(-10.0),
            percent_change_1h: Some(0.5),
            percent_change_12h: Some(1.0),
            percent_change_24h: Some(-3.456),
            ..Default::default()
        },
    );
    quotes.insert(
        "BTC".to_string(),
        Quote {
            price: Some(0.00000001),
            market_cap: Some(19_500_000.0),
            ath_price: Some(1.0),
            ..Default::default()
        },
    );

    Ticker {
        id: Some("btc-bitcoin".to_string()),
        name: Some("Bitcoin".to_string()),
        symbol: Some("BTC".to_string()),
        rank: Some(1),
        circulating_supply: Some(19_500_000.0),
        total_supply: Some(19_500_000.0),
        max_supply: Some(21_000_000.0),
        quotes,
    }
}
