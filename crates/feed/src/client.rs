use async_trait::async_trait;
use catalog_core::ExternalProduct;
use catalog_ports::ExternalCatalog;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Connection settings for the feed
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub base_url: String,
    /// Bound on every request, connect included
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the external product feed
#[derive(Clone)]
pub struct FakeStoreClient {
    client: Client,
    base_url: String,
}

impl FakeStoreClient {
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(FakeStoreClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full feed listing
    ///
    /// Records are decoded one at a time; an undecodable record is skipped
    /// and its siblings are kept.
    pub async fn fetch_all(&self) -> Result<Vec<ExternalProduct>, FeedError> {
        let records: Vec<Value> = self.get("/products").await?.unwrap_or_default();
        Ok(records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| decode_record(index, record))
            .collect())
    }

    /// One record; `None` when the feed does not know the id
    pub async fn fetch_one(&self, remote_id: i64) -> Result<Option<ExternalProduct>, FeedError> {
        let path = format!("/products/{}", remote_id);
        self.get(&path).await
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, FeedError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        let text = resp.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        // The feed answers unknown ids with 200 and an empty body
        if text.trim().is_empty() || text.trim() == "null" {
            return Ok(None);
        }

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| FeedError::Parse(e.to_string()))
    }
}

fn decode_record(index: usize, record: Value) -> Option<ExternalProduct> {
    let remote_id = record.get("id").and_then(Value::as_i64);
    match serde_json::from_value(record) {
        Ok(product) => Some(product),
        Err(e) => {
            tracing::warn!(index, ?remote_id, error = %e, "Skipping undecodable feed record");
            None
        }
    }
}

/// Implement the catalog's feed port, absorbing every failure
#[async_trait]
impl ExternalCatalog for FakeStoreClient {
    async fn list_products(&self) -> Vec<ExternalProduct> {
        match self.fetch_all().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "Fetched products from external feed");
                products
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %self.base_url, "External feed listing failed");
                Vec::new()
            }
        }
    }

    async fn get_product(&self, remote_id: i64) -> Option<ExternalProduct> {
        match self.fetch_one(remote_id).await {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!(error = %e, remote_id, "External feed lookup failed");
                None
            }
        }
    }
}
