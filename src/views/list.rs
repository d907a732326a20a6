//! Search form and result grid.
//!
//! ```text
//! Idle ──search──▶ Loading ──ok──▶ Loaded
//!                     │  ▲            │
//!                    err └──search────┤
//!                     ▼               │
//!                  Failed ◀───────────┘ (next search may fail)
//! ```
//!
//! Results are bucketed by each item's own `media_type` and every bucket is
//! capped at [`MAX_PER_BUCKET`] entries.

use std::time::Duration;

use nasaview_core::{MediaType, MediaTypeSet, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{RequestSeq, Ticket};
use crate::api::MediaItem;
use crate::fetch::SearchFetcher;
use crate::shell::Route;

/// Cards rendered per media-type region, and placeholders shown while loading.
pub const MAX_PER_BUCKET: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

// ---------------------------------------------------------------------------
// Render tree
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRender {
    pub regions: Vec<Region>,
    /// Set a short while after results land; drives the fade-in.
    pub settled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub media_type: MediaType,
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Slot {
    Placeholder,
    Card(Card),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: Option<String>,
    pub title: String,
    pub thumbnail_url: Option<String>,
}

impl From<&MediaItem> for Card {
    fn from(item: &MediaItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.display_title().to_string(),
            thumbnail_url: item.thumbnail_url.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
struct Buckets {
    image: Vec<MediaItem>,
    video: Vec<MediaItem>,
    audio: Vec<MediaItem>,
}

impl Buckets {
    fn partition(items: Vec<MediaItem>) -> Self {
        let mut buckets = Self::default();
        for item in items {
            match item.media_type {
                Some(MediaType::Image) => buckets.image.push(item),
                Some(MediaType::Video) => buckets.video.push(item),
                Some(MediaType::Audio) => buckets.audio.push(item),
                None => debug!(id = ?item.id, "dropping item without a known media type"),
            }
        }
        buckets
    }

    /// The rendered part of one bucket.
    fn visible(&self, media_type: MediaType) -> &[MediaItem] {
        let bucket = match media_type {
            MediaType::Image => &self.image,
            MediaType::Video => &self.video,
            MediaType::Audio => &self.audio,
        };
        &bucket[..bucket.len().min(MAX_PER_BUCKET)]
    }
}

// ---------------------------------------------------------------------------
// ListView
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ListView {
    query: String,
    media_types: MediaTypeSet,
    state: ListState,
    buckets: Buckets,
    settled: bool,
    seq: RequestSeq,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            media_types: MediaTypeSet::new(),
            state: ListState::Idle,
            buckets: Buckets::default(),
            settled: false,
            seq: RequestSeq::default(),
        }
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn media_types(&self) -> &MediaTypeSet {
        &self.media_types
    }

    /// Check or uncheck a media-type box, returning whether it is now checked.
    pub fn toggle_media_type(&mut self, media_type: MediaType) -> bool {
        self.media_types.toggle(media_type)
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Enter `Loading` for a new request.
    pub fn begin_search(&mut self) -> Ticket {
        self.state = ListState::Loading;
        self.settled = false;
        self.seq.next()
    }

    /// Apply the outcome of the request behind `ticket`.
    ///
    /// Returns `false` when a newer search has started since, in which case
    /// the outcome is dropped. A failure keeps the previous results on screen.
    pub fn complete_search(&mut self, ticket: Ticket, result: Result<Vec<MediaItem>>) -> bool {
        if !self.seq.is_current(ticket) {
            debug!(?ticket, "discarding stale search response");
            return false;
        }

        match result {
            Ok(items) => {
                info!(query = %self.query, count = items.len(), "search loaded");
                self.buckets = Buckets::partition(items);
                self.state = ListState::Loaded;
            }
            Err(e) => {
                warn!(query = %self.query, "Error fetching media: {}", e);
                self.state = ListState::Failed;
            }
        }
        true
    }

    /// Run a search for the current query and media-type selection.
    pub async fn search(&mut self, fetcher: &SearchFetcher) -> Ticket {
        let ticket = self.begin_search();
        let result = fetcher.search(&self.query, &self.media_types).await;
        self.complete_search(ticket, result);
        ticket
    }

    /// Mark the results of `ticket` as settled, if they are still the ones shown.
    pub fn mark_settled(&mut self, ticket: Ticket) {
        if self.seq.is_current(ticket) && self.state == ListState::Loaded {
            self.settled = true;
        }
    }

    /// Wait out the settle delay, then mark `ticket`'s results settled.
    pub async fn settle(&mut self, ticket: Ticket, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.mark_settled(ticket);
    }

    pub fn render(&self) -> ListRender {
        let regions = match self.state {
            ListState::Idle => Vec::new(),
            ListState::Loading => MediaType::ALL
                .into_iter()
                .map(|media_type| Region {
                    media_type,
                    slots: vec![Slot::Placeholder; MAX_PER_BUCKET],
                })
                .collect(),
            ListState::Loaded | ListState::Failed => MediaType::ALL
                .into_iter()
                .filter_map(|media_type| {
                    let visible = self.buckets.visible(media_type);
                    (!visible.is_empty()).then(|| Region {
                        media_type,
                        slots: visible.iter().map(|i| Slot::Card(Card::from(i))).collect(),
                    })
                })
                .collect(),
        };

        ListRender {
            regions,
            settled: self.settled,
        }
    }

    /// Rendered cards in screen order: image region first, then video, then audio.
    pub fn cards(&self) -> Vec<&MediaItem> {
        if self.state == ListState::Loading {
            return Vec::new();
        }
        MediaType::ALL
            .into_iter()
            .flat_map(|t| self.buckets.visible(t))
            .collect()
    }

    /// Route for clicking the `n`th card, counting as [`cards`](Self::cards) does.
    ///
    /// `None` when there is no such card or the card has no id.
    pub fn select_nth(&self, n: usize) -> Option<Route> {
        let cards = self.cards();
        route_for(cards.get(n)?)
    }
}

fn route_for(item: &MediaItem) -> Option<Route> {
    match item.id.as_deref() {
        Some(id) if !id.is_empty() => Some(Route::Asset(id.to_string())),
        _ => {
            debug!(title = %item.display_title(), "ignoring click on item without an id");
            None
        }
    }
}
