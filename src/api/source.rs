//! The seam between the views and the network.
//!
//! [`MediaSource`] exposes the three reads the application needs. The
//! production implementation is [`NasaClient`](super::NasaClient); tests
//! substitute in-memory sources.

use async_trait::async_trait;
use nasaview_core::{MediaTypeSet, Result};

use super::types::{AssetMetadata, MediaItem};

#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Keyword search filtered by media type.
    ///
    /// An empty `media_types` set is passed through as an empty filter and
    /// means "all types"; implementations must not filter locally.
    async fn search(&self, query: &str, media_types: &MediaTypeSet) -> Result<Vec<MediaItem>>;

    /// Descriptive metadata for a single `nasa_id`.
    ///
    /// Fails with [`Error::NotFound`](nasaview_core::Error::NotFound) when the
    /// lookup returns no items.
    async fn metadata(&self, nasa_id: &str) -> Result<AssetMetadata>;

    /// Every file URL the library holds for `nasa_id`, unfiltered.
    async fn manifest(&self, nasa_id: &str) -> Result<Vec<String>>;
}
