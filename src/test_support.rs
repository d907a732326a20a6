//! In-memory [`MediaSource`] for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use nasaview_core::{Error, MediaType, MediaTypeSet, Result};

use crate::api::{AssetMetadata, MediaItem, MediaSource};

/// Failure injected into every call of a [`StubSource`].
#[derive(Debug, Clone, Copy)]
pub enum FailKind {
    Network,
    Upstream,
}

impl FailKind {
    fn to_error(self) -> Error {
        match self {
            FailKind::Network => Error::Network("connection refused".into()),
            FailKind::Upstream => Error::upstream_status(500, "internal server error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search { query: String, filter: String },
    Metadata(String),
    Manifest(String),
}

/// Canned answers keyed by id, with a log of every call made.
#[derive(Default)]
pub struct StubSource {
    search: Vec<MediaItem>,
    metadata: HashMap<String, AssetMetadata>,
    manifests: HashMap<String, Vec<String>>,
    fail: Option<FailKind>,
    calls: Mutex<Vec<Call>>,
}

impl StubSource {
    pub fn item(id: &str, media_type: MediaType) -> MediaItem {
        MediaItem {
            id: Some(id.to_string()),
            title: Some(format!("Title {id}")),
            media_type: Some(media_type),
            thumbnail_url: Some(format!("https://example.test/{id}~thumb.jpg")),
        }
    }

    pub fn with_search(mut self, items: Vec<MediaItem>) -> Self {
        self.search = items;
        self
    }

    pub fn with_asset(mut self, id: &str, metadata: AssetMetadata, manifest: &[&str]) -> Self {
        self.metadata.insert(id.to_string(), metadata);
        self.manifests.insert(
            id.to_string(),
            manifest.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn failing(mut self, kind: FailKind) -> Self {
        self.fail = Some(kind);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Search { query, filter } => Some((query, filter)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail {
            Some(kind) => Err(kind.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MediaSource for StubSource {
    async fn search(&self, query: &str, media_types: &MediaTypeSet) -> Result<Vec<MediaItem>> {
        self.record(Call::Search {
            query: query.to_string(),
            filter: media_types.to_query_value(),
        })?;
        Ok(self.search.clone())
    }

    async fn metadata(&self, nasa_id: &str) -> Result<AssetMetadata> {
        self.record(Call::Metadata(nasa_id.to_string()))?;
        self.metadata
            .get(nasa_id)
            .cloned()
            .ok_or_else(|| Error::not_found("asset", nasa_id))
    }

    async fn manifest(&self, nasa_id: &str) -> Result<Vec<String>> {
        self.record(Call::Manifest(nasa_id.to_string()))?;
        self.manifests
            .get(nasa_id)
            .cloned()
            .ok_or_else(|| Error::upstream_status(404, format!("no manifest for {nasa_id}")))
    }
}
