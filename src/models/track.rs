//! Track model.

use serde::{Deserialize, Serialize};

use super::common::{AlbumRef, ArtistRef};

/// A normalized track record.
///
/// The same schema is produced whether the track was fetched standalone,
/// embedded in a playlist, or expanded from an album's track list. A track
/// without a resolvable seokey is not constructible; formatting fails
/// explicitly instead of producing a partial record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Public slug-style identifier.
    pub seokey: String,

    /// Internal numeric identifier.
    pub track_id: String,

    /// Track title.
    pub title: String,

    /// Duration in seconds.
    pub duration: u64,

    /// International Standard Recording Code, when the upstream supplies it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,

    /// Whether the track carries a parental warning.
    #[serde(default)]
    pub explicit: bool,

    /// Content language.
    #[serde(default)]
    pub language: String,

    /// Owning album, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<AlbumRef>,

    /// Performing artists.
    #[serde(default)]
    pub artists: Vec<ArtistRef>,

    /// Highest-resolution artwork URL available.
    pub artwork_url: String,

    /// Canonical browse URL.
    pub song_url: String,
}

impl Track {
    /// All artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// The primary artist name, if any.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artists_string() {
        let track = Track {
            artists: vec![
                ArtistRef::new("Arijit Singh", "arijit-singh", "1"),
                ArtistRef::new("Shreya Ghoshal", "shreya-ghoshal", "2"),
            ],
            ..Default::default()
        };
        assert_eq!(track.artists_string(", "), "Arijit Singh, Shreya Ghoshal");
        assert_eq!(track.primary_artist(), Some("Arijit Singh"));
    }

    #[test]
    fn test_isrc_omitted_when_absent() {
        let track = Track::default();
        let json = serde_json::to_value(&track).unwrap();
        assert!(json.get("isrc").is_none());
        assert!(json.get("album").is_none());
    }
}
