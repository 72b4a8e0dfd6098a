use crate::api::{SearchCategory, SearchModifier, SearchService};
use crate::error::{Error, Result};
use crate::models::AssetIdentifier;
use crate::validation::normalize_query;
use log::debug;
use std::sync::Arc;

/// Turns a ticker, short name or full name into a coinpaprika identifier.
///
/// Searches currencies by symbol first and falls back to a name search only
/// when the symbol search is empty. The first hit in upstream order wins.
#[derive(Clone)]
pub struct IdentifierResolver {
    search: Arc<dyn SearchService>,
}

impl IdentifierResolver {
    pub fn new(search: Arc<dyn SearchService>) -> Self {
        Self { search }
    }

    pub async fn resolve(&self, raw_query: &str) -> Result<AssetIdentifier> {
        let query = normalize_query(raw_query)?;

        let mut candidates = self
            .search
            .search(query, SearchCategory::Currencies, Some(SearchModifier::SymbolSearch))
            .await?;
        debug!("found {} results for query by symbol: {}", candidates.len(), query);

        if candidates.is_empty() {
            candidates = self
                .search
                .search(query, SearchCategory::Currencies, None)
                .await?;
            debug!("found {} results for query by name: {}", candidates.len(), query);
        }

        let best = candidates
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(query.to_string()))?;

        let id = best
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::MissingId(query.to_string()))?;

        debug!("best match for query {} is: {}", query, id);
        Ok(AssetIdentifier::new(id))
    }
}
