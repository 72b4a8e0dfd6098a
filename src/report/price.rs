use super::{btc_price, usd_price, whole, RequiredFields, COIN_URL};
use crate::error::Result;
use crate::models::Ticker;

pub(super) fn render(ticker: &Ticker) -> Result<String> {
    let usd = ticker.usd();
    let btc = ticker.btc();

    let mut required = RequiredFields::default();
    let fields = (
        required.require("name", ticker.name.as_deref()),
        required.require("symbol", ticker.symbol.as_deref()),
        required.require("id", ticker.id.as_deref()),
        required.require("USD.price", usd.and_then(|q| q.price)),
        required.require("BTC.price", btc.and_then(|q| q.price)),
        required.require("USD.volume_24h", usd.and_then(|q| q.volume_24h)),
        required.require("USD.market_cap", usd.and_then(|q| q.market_cap)),
        required.require("BTC.market_cap", btc.and_then(|q| q.market_cap)),
    );

    match fields {
        (
            Some(name),
            Some(symbol),
            Some(id),
            Some(price_usd),
            Some(price_btc),
            Some(volume_usd),
            Some(market_cap_usd),
            Some(market_cap_btc),
        ) => Ok(format!(
            "{name} price:\n    {} $\n    {} ₿\n\
             {symbol} marketcap:\n    {} $\n    {} ₿\n\
             {symbol} volume:\n    {} $\n\
             {COIN_URL}{id}",
            usd_price(price_usd),
            btc_price(price_btc),
            whole(market_cap_usd),
            whole(market_cap_btc),
            whole(volume_usd),
        )),
        _ => Err(required.into_error()),
    }
}
