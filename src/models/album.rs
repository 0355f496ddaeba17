//! Album model.

use serde::{Deserialize, Serialize};

use super::common::ArtistRef;
use super::track::Track;

/// A normalized album record.
///
/// `tracks` is lazily populated: the album detail endpoint only returns
/// child track seokeys, so the embedded list exists only when the caller
/// asked for tracks and the secondary fetches ran.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Public slug-style identifier.
    pub seokey: String,

    /// Internal identifier.
    pub album_id: String,

    /// Album title.
    pub title: String,

    /// Album artists.
    #[serde(default)]
    pub artists: Vec<ArtistRef>,

    /// Aggregate duration in seconds.
    pub duration: u64,

    /// Whether the album carries a parental warning.
    #[serde(default)]
    pub explicit: bool,

    /// Content language.
    #[serde(default)]
    pub language: String,

    /// Record label.
    #[serde(default)]
    pub label: String,

    /// Number of tracks on the album.
    pub track_count: u32,

    /// Release date; the upstream does not always supply it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Cumulative play count.
    pub play_count: u64,

    /// Favorite count.
    pub favorite_count: u64,

    /// Highest-resolution artwork URL available.
    pub artwork_url: String,

    /// Canonical browse URL.
    pub album_url: String,

    /// Embedded track list, in upstream order, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Track>>,
}

impl Album {
    /// All artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}
