use std::sync::Arc;

use nasaview_core::{MediaTypeSet, Result};
use tracing::debug;

use crate::api::{MediaItem, MediaSource};

/// Runs keyword searches for the list view.
#[derive(Clone)]
pub struct SearchFetcher {
    source: Arc<dyn MediaSource>,
}

impl SearchFetcher {
    pub fn new(source: Arc<dyn MediaSource>) -> Self {
        Self { source }
    }

    /// Search for `query` restricted to `media_types`.
    ///
    /// Results come back in upstream order and are never filtered here, not
    /// even when `media_types` is empty.
    pub async fn search(&self, query: &str, media_types: &MediaTypeSet) -> Result<Vec<MediaItem>> {
        debug!(query, media_types = %media_types.to_query_value(), "searching");
        self.source.search(query, media_types).await
    }
}
