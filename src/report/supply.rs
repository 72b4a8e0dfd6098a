use super::{whole, RequiredFields};
use crate::error::Result;
use crate::models::Ticker;

pub(super) fn render(ticker: &Ticker) -> Result<String> {
    let mut required = RequiredFields::default();
    let fields = (
        required.require("name", ticker.name.as_deref()),
        required.require("symbol", ticker.symbol.as_deref()),
        required.require("max_supply", ticker.max_supply),
        required.require("total_supply", ticker.total_supply),
        required.require("circulating_supply", ticker.circulating_supply),
    );

    match fields {
        (Some(name), Some(symbol), Some(max), Some(total), Some(circulating)) => Ok(format!(
            "{name} supply info:\n    \
             max supply: {} {symbol}\n    \
             total supply: {} {symbol}\n    \
             circ. supply: {} {symbol}",
            whole(max),
            whole(total),
            whole(circulating),
        )),
        _ => Err(required.into_error()),
    }
}
