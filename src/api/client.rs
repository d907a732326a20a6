//! HTTP client for the NASA Image and Video Library.
//!
//! Implements [`MediaSource`] against three endpoints:
//!
//! - `GET {base}/search?q=..&media_type=..`: keyword search
//! - `GET {base}/search?nasa_id=..`: metadata for one asset
//! - `GET {base}/asset/{id}`: file manifest for one asset
//!
//! Requests are not retried. The timeout is off unless configured.

use async_trait::async_trait;
use nasaview_core::{Error, MediaTypeSet, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::source::MediaSource;
use super::types::{AssetMetadata, CollectionResponse, ManifestEntry, MediaItem, SearchItem};
use crate::config::ApiConfig;

pub struct NasaClient {
    http: Client,
    base_url: String,
}

impl NasaClient {
    pub fn new(config: &ApiConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().unwrap_or_else(|e| {
            tracing::warn!("Failed to build HTTP client with timeout: {}", e);
            Client::new()
        });

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with `params` and decode the collection envelope.
    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<Vec<T>> {
        let url = self.url(path);
        debug!(url = %url, ?params, "NASA API request");

        let resp = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| Error::Network(format!("GET {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::upstream_status(
                status.as_u16(),
                format!("GET {url}: {}", body.trim()),
            ));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("reading body of {url} failed: {e}")))?;

        let envelope: CollectionResponse<T> = serde_json::from_slice(&body)
            .map_err(|e| Error::malformed(format!("unexpected response from {url}: {e}")))?;

        Ok(envelope.collection.items)
    }
}

#[async_trait]
impl MediaSource for NasaClient {
    async fn search(&self, query: &str, media_types: &MediaTypeSet) -> Result<Vec<MediaItem>> {
        let filter = media_types.to_query_value();
        let items: Vec<SearchItem> = self
            .get("/search", &[("q", query), ("media_type", filter.as_str())])
            .await?;

        debug!(query, filter = %filter, count = items.len(), "search returned");
        Ok(items.into_iter().map(MediaItem::from).collect())
    }

    async fn metadata(&self, nasa_id: &str) -> Result<AssetMetadata> {
        let items: Vec<SearchItem> = self.get("/search", &[("nasa_id", nasa_id)]).await?;

        items
            .into_iter()
            .next()
            .and_then(|item| item.data.into_iter().next())
            .map(AssetMetadata::from)
            .ok_or_else(|| Error::not_found("asset", nasa_id))
    }

    async fn manifest(&self, nasa_id: &str) -> Result<Vec<String>> {
        let entries: Vec<ManifestEntry> = self.get(&format!("/asset/{nasa_id}"), &[]).await?;
        Ok(entries.into_iter().map(|e| e.href).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "https://images-api.nasa.gov/".into(),
            ..ApiConfig::default()
        };
        let client = NasaClient::new(&config);
        assert_eq!(client.base_url(), "https://images-api.nasa.gov");
        assert_eq!(client.url("/asset/x"), "https://images-api.nasa.gov/asset/x");
    }

    #[test]
    fn builds_with_timeout() {
        let config = ApiConfig {
            timeout_secs: 5,
            ..ApiConfig::default()
        };
        let client = NasaClient::new(&config);
        assert_eq!(client.base_url(), "https://images-api.nasa.gov");
    }
}
