use super::{percent, RequiredFields};
use crate::error::Result;
use crate::models::Ticker;

// Only 1h/12h/24h are required; the longer windows are printed when present.
pub(super) fn render(ticker: &Ticker) -> Result<String> {
    let usd = ticker.usd();

    let mut required = RequiredFields::default();
    let fields = (
        required.require("name", ticker.name.as_deref()),
        required.require("USD.percent_change_1h", usd.and_then(|q| q.percent_change_1h)),
        required.require("USD.percent_change_12h", usd.and_then(|q| q.percent_change_12h)),
        required.require("USD.percent_change_24h", usd.and_then(|q| q.percent_change_24h)),
    );

    let (Some(name), Some(change_1h), Some(change_12h), Some(change_24h)) = fields else {
        return Err(required.into_error());
    };

    let windows = [
        ("1h", Some(change_1h)),
        ("12h", Some(change_12h)),
        ("24h", Some(change_24h)),
        ("7d", usd.and_then(|q| q.percent_change_7d)),
        ("30d", usd.and_then(|q| q.percent_change_30d)),
        ("1y", usd.and_then(|q| q.percent_change_1y)),
    ];
    let lines: Vec<String> = windows
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| format!("    {}: {} %", label, percent(v))))
        .collect();

    Ok(format!("{name} price change:\n{}", lines.join("\n")))
}
