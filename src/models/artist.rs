//! Artist model.

use serde::{Deserialize, Serialize};

use super::track::Track;

/// A normalized artist record.
///
/// `top_tracks` comes from a secondary lookup keyed by the internal
/// numeric `artist_id`; when that lookup fails the artist is still
/// returned with an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Internal numeric identifier, distinct from the public seokey.
    pub artist_id: String,

    /// Public slug-style identifier.
    pub seokey: String,

    /// Display name.
    pub name: String,

    /// Artwork URL.
    pub artwork_url: String,

    /// Canonical browse URL.
    pub artist_url: String,

    /// Most popular tracks, when fetched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_tracks: Vec<Track>,
}
