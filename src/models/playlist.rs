//! Playlist and chart models.

use serde::{Deserialize, Serialize};

use super::track::Track;

/// A normalized playlist record.
///
/// Unlike albums, the upstream returns full track payloads inline, so
/// `tracks` is always populated from a single lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    pub seokey: String,
    pub playlist_id: String,
    pub title: String,
    pub artwork_url: String,
    #[serde(default)]
    pub description: String,
    /// Curator display name.
    #[serde(default)]
    pub author: String,
    pub track_count: u32,
    /// Upstream supplies this as a display string ("1.2M"), not a number.
    #[serde(default)]
    pub favorite_count: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub modified_on: String,
    pub playlist_url: String,
    /// Embedded tracks in upstream order.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// A playlist summary as returned by search, which carries only thin
/// fields (no description, curator, or track list).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaylistHit {
    pub playlist_id: String,
    pub seokey: String,
    pub title: String,
    /// Free-text artist summary from the search payload.
    #[serde(default)]
    pub artists: String,
    #[serde(default)]
    pub language: String,
    pub artwork_url: String,
    pub playlist_url: String,
}

/// A top-charts entry. Chart entries are playlist-shaped but carry play
/// and favorite counters instead of a track list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartEntry {
    pub seokey: String,
    pub playlist_id: String,
    pub title: String,
    #[serde(default)]
    pub language: String,
    pub favorite_count: u64,
    #[serde(default)]
    pub explicit: bool,
    pub play_count: u64,
    pub artwork_url: String,
    pub playlist_url: String,
}
