use serde::Deserialize;

/// Result categories accepted by the `/search` endpoint's `c` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    Currencies,
}

impl SearchCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchCategory::Currencies => "currencies",
        }
    }
}

/// Narrows a search; without one the query is matched against names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchModifier {
    SymbolSearch,
}

impl SearchModifier {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchModifier::SymbolSearch => "symbol_search",
        }
    }
}

/// One `currencies` hit. Upstream relevance order is preserved by the caller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchCurrency {
    pub id: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub rank: Option<u32>,
    pub is_new: Option<bool>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub currencies: Vec<SearchCurrency>,
}
