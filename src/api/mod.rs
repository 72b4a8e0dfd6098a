use crate::error::Result;
use crate::models::{AssetIdentifier, Ticker};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

pub mod coinpaprika;
pub mod types;

pub use coinpaprika::CoinPaprikaClient;
pub use types::{SearchCategory, SearchCurrency, SearchModifier};

/// Free-text lookup of assets, returned in upstream relevance order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(
        &self,
        query: &str,
        category: SearchCategory,
        modifier: Option<SearchModifier>,
    ) -> Result<Vec<SearchCurrency>>;
}

/// Ticker lookup for a resolved asset in the given quote currencies.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn get_by_identifier(
        &self,
        id: &AssetIdentifier,
        currencies: &[&'static str],
    ) -> Result<Ticker>;
}
