use crate::api::types::{SearchCategory, SearchCurrency, SearchModifier, SearchResponse};
use crate::api::{QuoteService, SearchService};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::{AssetIdentifier, Ticker};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const API_BASE_URL: &str = "https://api.coinpaprika.com/v1";
const USER_AGENT: &str = concat!("coinpaprika-bot/", env!("CARGO_PKG_VERSION"));

/// Thin coinpaprika REST client. One request per call: no retries, no cache.
#[derive(Debug, Clone)]
pub struct CoinPaprikaClient {
    client: Client,
    base_url: String,
}

impl CoinPaprikaClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn make_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| Error::ApiConnectionFailed(format!("{}: {}", endpoint, e)))?;

        match response.status() {
            status if status.is_success() => response.json::<T>().await.map_err(|e| {
                error!("Failed to parse {} response: {}", endpoint, e);
                Error::ApiInvalidFormat(format!("{}: {}", endpoint, e))
            }),
            StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimitExceeded(format!(
                "coinpaprika rejected {}",
                endpoint
            ))),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::ApiError(format!(
                    "{} failed with status {}: {}",
                    endpoint, status, body
                )))
            }
        }
    }
}

#[async_trait]
impl SearchService for CoinPaprikaClient {
    async fn search(
        &self,
        query: &str,
        category: SearchCategory,
        modifier: Option<SearchModifier>,
    ) -> Result<Vec<SearchCurrency>> {
        let mut params = vec![("q", query), ("c", category.as_str())];
        if let Some(modifier) = modifier {
            params.push(("modifier", modifier.as_str()));
        }

        let response: SearchResponse = self.make_request("search", &params).await?;
        Ok(response.currencies)
    }
}

#[async_trait]
impl QuoteService for CoinPaprikaClient {
    async fn get_by_identifier(
        &self,
        id: &AssetIdentifier,
        currencies: &[&'static str],
    ) -> Result<Ticker> {
        let quotes = currencies.join(",");
        self.make_request(&format!("tickers/{}", id), &[("quotes", quotes.as_str())])
            .await
    }
}
