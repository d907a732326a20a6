//! Media-domain enums shared by search results, filters, and views.
//!
//! Serializes in lowercase to match the `media_type` values used by the
//! NASA Image and Video Library.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// MediaType
// ---------------------------------------------------------------------------

/// Top-level classification of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

impl MediaType {
    /// All media types in the order their regions are laid out.
    pub const ALL: [MediaType; 3] = [MediaType::Image, MediaType::Video, MediaType::Audio];

    /// The wire value used in the `media_type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    /// Heading shown above this type's region in the list view.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "Pictures",
            Self::Video => "Video",
            Self::Audio => "Audio",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            other => Err(format!("unknown media type: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// MediaTypeSet
// ---------------------------------------------------------------------------

/// The media types a user has checked, in the order they were checked.
///
/// The order matters only for the comma-joined filter sent upstream. An
/// empty set is sent as an empty filter, which the API treats as "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTypeSet(Vec<MediaType>);

impl MediaTypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `media_type`. Checking an already checked type is a no-op.
    pub fn insert(&mut self, media_type: MediaType) {
        if !self.0.contains(&media_type) {
            self.0.push(media_type);
        }
    }

    /// Uncheck `media_type`.
    pub fn remove(&mut self, media_type: MediaType) {
        self.0.retain(|t| *t != media_type);
    }

    /// Flip `media_type`, returning whether it is now checked.
    pub fn toggle(&mut self, media_type: MediaType) -> bool {
        if self.contains(media_type) {
            self.remove(media_type);
            false
        } else {
            self.insert(media_type);
            true
        }
    }

    pub fn contains(&self, media_type: MediaType) -> bool {
        self.0.contains(&media_type)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MediaType> + '_ {
        self.0.iter().copied()
    }

    /// Comma-joined wire form, e.g. `"image,audio"`; empty when nothing is checked.
    pub fn to_query_value(&self) -> String {
        self.0
            .iter()
            .map(MediaType::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<MediaType> for MediaTypeSet {
    fn from_iter<I: IntoIterator<Item = MediaType>>(iter: I) -> Self {
        let mut set = Self::new();
        for media_type in iter {
            set.insert(media_type);
        }
        set
    }
}
