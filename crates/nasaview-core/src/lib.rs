//! nasaview-core: shared media types, URL classification, and errors.
//!
//! This crate carries everything that does not touch the network: the
//! [`MediaType`] enum shared by search results and views, the suffix-based
//! [`classify`] function that turns an asset manifest into displayable
//! media, and the unified [`Error`] type.

pub mod classify;
pub mod error;
pub mod media;

// Re-export the most commonly used items at the crate root.
pub use classify::{classify, classify_url, AudioFormat, AudioTrack, ClassifiedMedia, MediaClass};
pub use error::{Error, Result};
pub use media::*;
