use super::{btc_price, percent, usd_price, RequiredFields};
use crate::error::Result;
use crate::models::Ticker;
use chrono::SecondsFormat;

pub(super) fn render(ticker: &Ticker) -> Result<String> {
    let usd = ticker.usd();
    let btc = ticker.btc();

    let mut required = RequiredFields::default();
    let fields = (
        required.require("name", ticker.name.as_deref()),
        required.require("USD.ath_price", usd.and_then(|q| q.ath_price)),
        required.require("BTC.ath_price", btc.and_then(|q| q.ath_price)),
        required.require("USD.ath_date", usd.and_then(|q| q.ath_date)),
        required.require("USD.percent_from_price_ath", usd.and_then(|q| q.percent_from_price_ath)),
    );

    match fields {
        (Some(name), Some(ath_usd), Some(ath_btc), Some(ath_date), Some(from_ath)) => Ok(format!(
            "{name} ATH info:\n    {} $\n    {} ₿\n    {}\n    Down since ATH {} %",
            usd_price(ath_usd),
            btc_price(ath_btc),
            ath_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            percent(from_ath),
        )),
        _ => Err(required.into_error()),
    }
}
