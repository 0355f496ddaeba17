//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Reference to an artist from within a track or album.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistRef {
    /// Display name.
    pub name: String,

    /// Public slug-style identifier.
    #[serde(default)]
    pub seokey: String,

    /// Internal numeric identifier.
    #[serde(default)]
    pub artist_id: String,
}

impl ArtistRef {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        name: S1,
        seokey: S2,
        artist_id: S3,
    ) -> Self {
        Self {
            name: name.into(),
            seokey: seokey.into(),
            artist_id: artist_id.into(),
        }
    }
}

/// Reference to the album owning a track.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlbumRef {
    /// Album identifier.
    pub album_id: String,

    /// Album title.
    pub title: String,

    /// Public slug-style identifier.
    #[serde(default)]
    pub seokey: String,
}

/// Stream quality tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Lowest bitrate.
    Low,
    /// Mid bitrate.
    Medium,
    /// Highest bitrate (default).
    #[default]
    High,
}

impl Quality {
    /// Parses a quality parameter, falling back to `High` for missing or
    /// unrecognized values.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("low") => Quality::Low,
            Some("medium") => Quality::Medium,
            Some("high") => Quality::High,
            _ => Quality::High,
        }
    }

    /// Upstream tier key for this quality.
    pub fn tier(&self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }
}

/// A resolved playable stream. Produced on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamTarget {
    /// Track identifier the stream was resolved for.
    pub track_id: String,

    /// Quality tier that was requested.
    pub quality: Quality,

    /// Playable URL: an adaptive-bitrate manifest or a direct media URL.
    pub url: String,

    /// `hls` for manifest URLs, `direct` otherwise.
    pub stream_type: String,
}
