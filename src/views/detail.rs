//! Single-asset view.
//!
//! A `DetailView` belongs to exactly one asset id. Moving to another id
//! resets it to `Loading` with the metadata panel collapsed.

use serde::Serialize;
use tracing::{info, warn};

use nasaview_core::{Error, Result};

use super::{RequestSeq, Ticket};
use crate::fetch::{AssetDetail, AssetFetcher};

pub const TITLE_FALLBACK: &str = "Asset Title";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_ASSET: &str = "No asset found";
pub const VIDEO_MIME: &str = "video/mp4";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Ready(Box<AssetDetail>),
    NotFound,
    /// Terminal; carries the error text for the notice line.
    Failed(String),
}

/// Placeholder rows shown while an asset loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkeletonPart {
    Title,
    Media,
    AudioControls,
    Metadata,
    AssetId,
}

/// One element of the rendered detail view, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Skeleton(SkeletonPart),
    Title(String),
    Image { url: String, alt: String },
    Video { url: String, mime: &'static str },
    Audio { url: String, mime: &'static str },
    /// Clickable "Show Metadata" / "Hide Metadata" line.
    MetadataToggle { expanded: bool },
    /// Expanded metadata panel under the audio player.
    Metadata {
        date_created: Option<String>,
        description: String,
    },
    /// Bare description paragraph, only when there is no audio.
    Description(String),
    AssetId(String),
    Message(String),
    ErrorNotice(String),
}

#[derive(Debug)]
pub struct DetailView {
    id: String,
    state: DetailState,
    metadata_visible: bool,
    seq: RequestSeq,
}

impl DetailView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: DetailState::Loading,
            metadata_visible: false,
            seq: RequestSeq::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn metadata_visible(&self) -> bool {
        self.metadata_visible
    }

    /// Point the view at another asset. Returns `false` if `id` is unchanged.
    pub fn set_id(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if id == self.id {
            return false;
        }
        self.id = id;
        self.state = DetailState::Loading;
        self.metadata_visible = false;
        // Invalidate anything still in flight for the previous id.
        self.seq.next();
        true
    }

    pub fn toggle_metadata(&mut self) -> bool {
        self.metadata_visible = !self.metadata_visible;
        self.metadata_visible
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.state = DetailState::Loading;
        self.seq.next()
    }

    /// Apply the outcome of the load behind `ticket`; stale outcomes are dropped.
    pub fn complete_load(&mut self, ticket: Ticket, result: Result<AssetDetail>) -> bool {
        if !self.seq.is_current(ticket) {
            tracing::debug!(id = %self.id, ?ticket, "discarding stale asset response");
            return false;
        }

        self.state = match result {
            Ok(detail) => {
                info!(id = %self.id, "asset ready");
                DetailState::Ready(Box::new(detail))
            }
            Err(Error::NotFound { .. }) => {
                info!(id = %self.id, "no asset found");
                DetailState::NotFound
            }
            Err(e) => {
                warn!(id = %self.id, "Error fetching asset: {}", e);
                DetailState::Failed(e.to_string())
            }
        };
        true
    }

    pub async fn load(&mut self, fetcher: &AssetFetcher) {
        let ticket = self.begin_load();
        let result = fetcher.fetch_asset(&self.id).await;
        self.complete_load(ticket, result);
    }

    pub fn render(&self) -> Vec<Block> {
        match &self.state {
            DetailState::Loading => [
                SkeletonPart::Title,
                SkeletonPart::Media,
                SkeletonPart::AudioControls,
                SkeletonPart::Metadata,
                SkeletonPart::AssetId,
            ]
            .into_iter()
            .map(Block::Skeleton)
            .collect(),
            DetailState::NotFound => vec![Block::Message(NO_ASSET.to_string())],
            DetailState::Failed(message) => vec![
                Block::Message(NO_ASSET.to_string()),
                Block::ErrorNotice(message.clone()),
            ],
            DetailState::Ready(detail) => self.render_ready(detail),
        }
    }

    fn render_ready(&self, detail: &AssetDetail) -> Vec<Block> {
        let title = detail
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| TITLE_FALLBACK.to_string());
        let description = detail
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let mut blocks = vec![Block::Title(title.clone())];

        blocks.extend(detail.images.iter().map(|url| Block::Image {
            url: url.clone(),
            alt: format!("Visual representation of {title}"),
        }));
        blocks.extend(detail.videos.iter().map(|url| Block::Video {
            url: url.clone(),
            mime: VIDEO_MIME,
        }));

        match &detail.primary_audio {
            Some(audio) => {
                blocks.push(Block::Audio {
                    url: audio.url.clone(),
                    mime: audio.mime(),
                });
                blocks.push(Block::MetadataToggle {
                    expanded: self.metadata_visible,
                });
                if self.metadata_visible {
                    blocks.push(Block::Metadata {
                        date_created: detail.date_created.clone(),
                        description,
                    });
                }
            }
            None => blocks.push(Block::Description(description)),
        }

        blocks.push(Block::AssetId(self.id.clone()));
        blocks
    }
}
