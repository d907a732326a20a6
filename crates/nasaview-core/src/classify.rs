//! Suffix-based classification of asset manifest URLs.
//!
//! An asset manifest lists every file the library holds for one asset:
//! thumbnails, several resolutions, caption tracks, metadata JSON. Only the
//! original-resolution image and video variants and plain audio files are
//! worth showing, and they are recognised purely by filename suffix:
//!
//! | suffix        | class  |
//! |---------------|--------|
//! | `~orig.jpg`   | image  |
//! | `~orig.mp4`   | video  |
//! | `.mp3`        | audio (`audio/mpeg`) |
//! | `.wav`        | audio (`audio/wav`)  |
//! | `.m4a`        | audio (`audio/mp4`)  |
//!
//! Matching is case-sensitive and applied to the raw string. Everything else
//! is dropped.

use serde::Serialize;

const IMAGE_SUFFIX: &str = "~orig.jpg";
const VIDEO_SUFFIX: &str = "~orig.mp4";

// ---------------------------------------------------------------------------
// AudioFormat
// ---------------------------------------------------------------------------

/// Audio container recognised from a filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Wav,
    M4a,
}

impl AudioFormat {
    /// Formats in the order their suffixes are tested.
    const ALL: [AudioFormat; 3] = [AudioFormat::Mp3, AudioFormat::Wav, AudioFormat::M4a];

    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Mp3 => ".mp3",
            Self::Wav => ".wav",
            Self::M4a => ".m4a",
        }
    }

    /// MIME type handed to the audio player.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::M4a => "audio/mp4",
        }
    }

    fn from_url(url: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| url.ends_with(f.suffix()))
    }
}

// ---------------------------------------------------------------------------
// Per-URL classification
// ---------------------------------------------------------------------------

/// The bucket a single manifest URL falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaClass {
    Image,
    Video,
    Audio(AudioFormat),
}

/// Classify one URL, or `None` if it is not a displayable variant.
pub fn classify_url(url: &str) -> Option<MediaClass> {
    if url.ends_with(IMAGE_SUFFIX) {
        Some(MediaClass::Image)
    } else if url.ends_with(VIDEO_SUFFIX) {
        Some(MediaClass::Video)
    } else {
        AudioFormat::from_url(url).map(MediaClass::Audio)
    }
}

// ---------------------------------------------------------------------------
// Manifest classification
// ---------------------------------------------------------------------------

/// An audio file together with the MIME type it should be played as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioTrack {
    pub url: String,
    pub format: AudioFormat,
}

impl AudioTrack {
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }
}

/// A manifest split into displayable buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedMedia {
    /// Original-resolution images, in manifest order.
    pub images: Vec<String>,
    /// Original-resolution videos, in manifest order.
    pub videos: Vec<String>,
    /// The first audio file in the manifest. Later audio files are ignored.
    pub audio: Option<AudioTrack>,
}

impl ClassifiedMedia {
    /// True when nothing in the manifest was displayable.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty() && self.audio.is_none()
    }

    /// Number of URLs that survived classification.
    pub fn len(&self) -> usize {
        self.images.len() + self.videos.len() + usize::from(self.audio.is_some())
    }
}

/// Partition manifest URLs into images, videos, and one primary audio track.
pub fn classify<I, S>(urls: I) -> ClassifiedMedia
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut media = ClassifiedMedia::default();

    for url in urls {
        let url = url.into();
        match classify_url(&url) {
            Some(MediaClass::Image) => media.images.push(url),
            Some(MediaClass::Video) => media.videos.push(url),
            Some(MediaClass::Audio(format)) if media.audio.is_none() => {
                media.audio = Some(AudioTrack { url, format });
            }
            Some(MediaClass::Audio(_)) => {
                tracing::trace!(url = %url, "skipping additional audio file");
            }
            None => {}
        }
    }

    media
}
