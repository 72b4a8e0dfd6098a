use std::fmt;

pub mod market;

pub use market::{Quote, Ticker};

/// Canonical coinpaprika key for one asset, e.g. `btc-bitcoin`.
///
/// Only the resolver hands these out; callers never build one from user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetIdentifier(String);

impl AssetIdentifier {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
