use crate::error::{Error, Result};

pub const MAX_QUERY_LENGTH: usize = 64;

/// Trims a raw command argument into a search query. Empty or oversized input
/// cannot match a coin, so it is rejected before any request is made.
pub fn normalize_query(raw: &str) -> Result<&str> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(Error::NotFound("empty query".to_string()));
    }
    if query.chars().count() > MAX_QUERY_LENGTH {
        return Err(Error::NotFound(format!(
            "query longer than {} characters",
            MAX_QUERY_LENGTH
        )));
    }
    Ok(query)
}
