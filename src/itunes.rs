use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::data_models::{SearchRequest, SearchResponse};
use crate::error::SearchError;
use crate::search::SearchProvider;

pub const ITUNES_API_URL: &str = "https://itunes.apple.com/search";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ItunesClient {
    base_url: String,
    client: reqwest::Client,
}

impl ItunesClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(ItunesClient {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url.clone(), config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        log::debug!(
            "GET {} term={:?} entity={} limit={}",
            self.base_url,
            request.term(),
            request.entity(),
            request.limit()
        );

        let res = self
            .client
            .get(&self.base_url)
            .query(&request.query_params())
            .send()
            .await?
            .error_for_status()?;

        let response: SearchResponse = res.json().await?;
        log::info!(
            "search {:?} returned {} results",
            request.term(),
            response.result_count
        );
        Ok(response)
    }
}

impl SearchProvider for ItunesClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.fetch(request).await.inspect_err(|e| {
            log::error!("search {:?} failed, error: {:#}", request.term(), e);
        })
    }
}
