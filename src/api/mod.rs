//! Access to the NASA Image and Video Library.
//!
//! - [`source`]: the [`MediaSource`] trait the fetchers are written against.
//! - [`client`]: [`NasaClient`], the reqwest-backed implementation.
//! - [`types`]: wire types and the view-facing [`MediaItem`].

pub mod client;
pub mod source;
pub mod types;

pub use client::NasaClient;
pub use source::MediaSource;
pub use types::{AssetMetadata, ItemData, ItemLink, MediaItem, SearchItem, UNTITLED};
