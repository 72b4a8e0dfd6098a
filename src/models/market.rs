use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

pub const USD: &str = "USD";
pub const BTC: &str = "BTC";

/// Ticker record as returned by `/tickers/{id}`: asset attributes plus one
/// quote per requested currency. Every field may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ticker {
    pub id: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub rank: Option<u32>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub quotes: HashMap<String, Quote>,
}

impl Ticker {
    pub fn quote(&self, currency: &str) -> Option<&Quote> {
        self.quotes.get(currency)
    }

    pub fn usd(&self) -> Option<&Quote> {
        self.quote(USD)
    }

    pub fn btc(&self) -> Option<&Quote> {
        self.quote(BTC)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Quote {
    pub price: Option<f64>,
    pub volume_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub ath_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub ath_date: Option<DateTime<Utc>>,
    pub percent_from_price_ath: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_12h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub percent_change_30d: Option<f64>,
    pub percent_change_1y: Option<f64>,
}

/// An unparseable timestamp reads as absent instead of failing the whole ticker;
/// only the ATH report needs the date.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|date| date.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const TICKER_JSON: &str = r#"
    {
        "id": "btc-bitcoin",
        "name": "Bitcoin",
        "symbol": "BTC",
        "rank": 1,
        "circulating_supply": 19500000,
        "total_supply": 19500000,
        "max_supply": 21000000,
        "beta_value": 0.93,
        "first_data_at": "2010-07-17T00:00:00Z",
        "last_updated": "2024-01-01T12:00:00Z",
        "quotes": {
            "USD": {
                "price": 42000.5,
                "volume_24h": 15000000000.4,
                "volume_24h_change_24h": -3.1,
                "market_cap": 820000000000,
                "percent_change_15m": 0.01,
                "percent_change_1h": 0.12,
                "percent_change_12h": -1.5,
                "percent_change_24h": 2.25,
                "percent_change_7d": 5.0,
                "percent_change_30d": null,
                "ath_price": 68692.13,
                "ath_date": "2021-11-10T16:51:15Z",
                "percent_from_price_ath": -38.86
            },
            "BTC": {
                "price": 1,
                "market_cap": 19500000
            }
        }
    }
    "#;

    #[test]
    fn test_ticker_deserialization_keeps_absent_fields_absent() {
        let ticker: Ticker = serde_json::from_str(TICKER_JSON).unwrap();
        assert_eq!(ticker.id.as_deref(), Some("btc-bitcoin"));
        assert_eq!(ticker.max_supply, Some(21_000_000.0));

        let usd = ticker.usd().unwrap();
        assert_eq!(usd.price, Some(42000.5));
        assert_eq!(usd.percent_change_30d, None);
        assert_eq!(usd.percent_change_1y, None);
        assert_eq!(
            usd.ath_date,
            Some(Utc.with_ymd_and_hms(2021, 11, 10, 16, 51, 15).unwrap())
        );

        let btc = ticker.btc().unwrap();
        assert_eq!(btc.price, Some(1.0));
        assert_eq!(btc.volume_24h, None);
    }

    #[test]
    fn test_malformed_ath_date_reads_as_absent() {
        let json = r#"
        {
            "id": "btc-bitcoin",
            "name": "Bitcoin",
            "last_updated": "yesterday",
            "quotes": {
                "USD": {"price": 42000.5, "ath_price": 68692.13, "ath_date": "10/11/2021"},
                "BTC": {"price": 1, "ath_date": 1636563075}
            }
        }
        "#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.usd().unwrap().price, Some(42000.5));
        assert_eq!(ticker.usd().unwrap().ath_date, None);
        assert_eq!(ticker.btc().unwrap().ath_date, None);
    }

    #[test]
    fn test_null_ath_date() {
        let quote: Quote = serde_json::from_str(r#"{"ath_date": null}"#).unwrap();
        assert_eq!(quote.ath_date, None);
    }

    #[test]
    fn test_ticker_without_quotes() {
        let ticker: Ticker = serde_json::from_str(r#"{"id": "xyz-coin"}"#).unwrap();
        assert!(ticker.quotes.is_empty());
        assert!(ticker.usd().is_none());
        assert!(ticker.name.is_none());
    }
}
