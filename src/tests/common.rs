use crate::models::{Quote, Ticker};
use chrono::{TimeZone, Utc};
use std::collections::HashMap;

// Fully populated ticker, every report can render it
pub fn create_test_ticker() -> Ticker {
    let mut quotes = HashMap::new();
    quotes.insert(
        "USD".to_string(),
        Quote {
            price: Some(42000.123456),
            volume_24h: Some(15_000_000_000.4),
            market_cap: Some(1_234_567.8),
            ath_price: Some(68692.137),
            ath_date: Some(Utc.with_ymd_and_hms(2021, 11, 10, 16, 51, 15).unwrap()),
            percent_from_price_ath: Some(-38.864),
            percent_change_1h: Some(0.1234),
            percent_change_12h: Some(-1.5),
            percent_change_24h: Some(-3.456),
            percent_change_7d: Some(5.0),
            percent_change_30d: Some(12.3456),
            percent_change_1y: Some(150.0),
        },
    );
    quotes.insert(
        "BTC".to_string(),
        Quote {
            price: Some(1.0),
            market_cap: Some(19_500_000.4),
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

// Mutable access to one quote of the fixture
pub fn quote_mut<'a>(ticker: &'a mut Ticker, currency: &str) -> &'a mut Quote {
    ticker.quotes.entry(currency.to_string()).or_default()
}
