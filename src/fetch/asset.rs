use std::sync::Arc;

use nasaview_core::{classify, AudioTrack, Error, Result};
use serde::Serialize;
use tracing::debug;

use crate::api::{AssetMetadata, MediaSource};
use crate::config::LookupMode;

/// Everything the detail view shows for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetDetail {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_created: Option<String>,
    /// Original-resolution images, in manifest order.
    pub images: Vec<String>,
    /// Original-resolution videos, in manifest order.
    pub videos: Vec<String>,
    /// First audio file of the manifest, if any.
    pub primary_audio: Option<AudioTrack>,
}

/// Resolves an asset id into an [`AssetDetail`].
///
/// Two reads are involved: metadata by `nasa_id` and the file manifest. They
/// are independent, so [`LookupMode::Parallel`] issues them together; the
/// outcome is the same either way.
#[derive(Clone)]
pub struct AssetFetcher {
    source: Arc<dyn MediaSource>,
    mode: LookupMode,
}

impl AssetFetcher {
    pub fn new(source: Arc<dyn MediaSource>, mode: LookupMode) -> Self {
        Self { source, mode }
    }

    pub async fn fetch_asset(&self, id: &str) -> Result<AssetDetail> {
        let (metadata, manifest) = match self.mode {
            LookupMode::Sequential => {
                let metadata = self.source.metadata(id).await?;
                let manifest = self.source.manifest(id).await?;
                (metadata, manifest)
            }
            LookupMode::Parallel => {
                futures::future::try_join(self.source.metadata(id), self.source.manifest(id))
                    .await?
            }
        };

        merge(id, metadata, manifest)
    }
}

/// Combine metadata with the classified manifest.
///
/// A manifest with nothing displayable counts as a missing asset, even when
/// the metadata resolved.
fn merge(id: &str, metadata: AssetMetadata, manifest: Vec<String>) -> Result<AssetDetail> {
    let total = manifest.len();
    let media = classify(manifest);
    debug!(id, total, kept = media.len(), "classified manifest");

    if media.is_empty() {
        return Err(Error::not_found("asset", id));
    }

    Ok(AssetDetail {
        id: id.to_string(),
        title: metadata.title,
        description: metadata.description,
        date_created: metadata.date_created,
        images: media.images,
        videos: media.videos,
        primary_audio: media.audio,
    })
}
