//! Fixed-format text reports rendered from a coinpaprika ticker.
//!
//! Every report declares the fields it needs. A report either renders with all
//! of them present or fails with [`Error::IncompleteData`](crate::error::Error);
//! partial text is never produced.

use crate::error::{Error, Result};
use crate::models::Ticker;
use std::fmt;

mod ath;
mod change;
mod price;
mod supply;

pub const COIN_URL: &str = "https://coinpaprika.com/coin/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Price,
    Supply,
    AllTimeHigh,
    PriceChange,
}

/// Command keyword, report kind and the renderer that validates and formats it.
pub struct Report {
    pub keyword: &'static str,
    pub kind: ReportKind,
    render: fn(&Ticker) -> Result<String>,
}

impl Report {
    pub fn render(&self, ticker: &Ticker) -> Result<String> {
        (self.render)(ticker)
    }
}

impl fmt::Debug for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Report")
            .field("keyword", &self.keyword)
            .field("kind", &self.kind)
            .finish()
    }
}

pub static REPORTS: [Report; 4] = [
    Report {
        keyword: "p",
        kind: ReportKind::Price,
        render: price::render,
    },
    Report {
        keyword: "s",
        kind: ReportKind::Supply,
        render: supply::render,
    },
    Report {
        keyword: "a",
        kind: ReportKind::AllTimeHigh,
        render: ath::render,
    },
    Report {
        keyword: "c",
        kind: ReportKind::PriceChange,
        render: change::render,
    },
];

/// Keywords are matched exactly; Telegram commands are case sensitive.
pub fn lookup(keyword: &str) -> Option<&'static Report> {
    REPORTS.iter().find(|report| report.keyword == keyword)
}

/// Collects the names of absent required fields while a report pulls its inputs.
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub(crate) fn require<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(field);
        }
        value
    }

    pub(crate) fn into_error(self) -> Error {
        Error::IncompleteData(self.missing.join(", "))
    }
}

pub(crate) fn usd_price(value: f64) -> String {
    format!("{:.4}", value)
}

pub(crate) fn btc_price(value: f64) -> String {
    format!("{:.8}", value)
}

/// Volumes, market caps and supplies are shown as whole units.
pub(crate) fn whole(value: f64) -> String {
    format!("{:.0}", value)
}

pub(crate) fn percent(value: f64) -> String {
    format!("{:.2}", value)
}
