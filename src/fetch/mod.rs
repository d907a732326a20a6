//! Fetch boundaries between the views and the [`MediaSource`](crate::api::MediaSource).
//!
//! Both fetchers return classified [`nasaview_core::Error`]s to their caller
//! and never panic on bad upstream data.

pub mod asset;
pub mod search;

pub use asset::{AssetDetail, AssetFetcher};
pub use search::SearchFetcher;
