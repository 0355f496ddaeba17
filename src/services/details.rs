//! Detail lookups for songs, albums, playlists, and artists.

use futures_util::future::join_all;
use serde_json::Value;
use tracing::warn;

use crate::api::Transport;
use crate::config::GatewayConfig;
use crate::endpoints::Endpoints;
use crate::error::{GatewayError, Result};
use crate::formatters;
use crate::models::{Album, Artist, Playlist, Track};

/// Fetches and normalizes detail records.
#[derive(Debug, Clone)]
pub struct DetailsService {
    transport: Transport,
    endpoints: Endpoints,
    config: GatewayConfig,
}

impl DetailsService {
    pub fn new(transport: Transport, config: GatewayConfig) -> Self {
        Self {
            endpoints: Endpoints::new(&config),
            transport,
            config,
        }
    }

    /// Looks up one song by seokey.
    pub async fn song(&self, seokey: &str) -> Result<Track> {
        let url = self.endpoints.song_detail(seokey);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;

        let track = first_track(&raw)
            .ok_or_else(|| GatewayError::NotFound("Song not found".to_string()))?;
        formatters::song_detail(track)
    }

    /// Looks up one album by seokey. When `with_tracks` is set, the child
    /// tracks are expanded with a bounded parallel fan-out; individual
    /// track failures are dropped without failing the album.
    pub async fn album(&self, seokey: &str, with_tracks: bool) -> Result<Album> {
        let url = self.endpoints.album_detail(seokey);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;

        if raw.get("album").is_none() {
            return Err(GatewayError::NotFound("Album not found".to_string()));
        }

        let mut album = formatters::album_detail(&raw, with_tracks)?;
        if with_tracks {
            let seokeys = formatters::album_track_seokeys(&raw);
            album.tracks = Some(self.track_info(&seokeys).await);
        }
        Ok(album)
    }

    /// Looks up one playlist by seokey. Playlist payloads embed their
    /// full track list and get the longest timeout budget.
    pub async fn playlist(&self, seokey: &str) -> Result<Playlist> {
        let url = self.endpoints.playlist_detail(seokey);
        let raw = self
            .transport
            .post_json(&url, self.config.playlist_timeout)
            .await?;

        if raw.get("playlist").is_none() {
            return Err(GatewayError::NotFound("Playlist not found".to_string()));
        }
        formatters::playlist_detail(&raw)
    }

    /// Looks up one artist by seokey, then their top tracks by internal
    /// id. A failed top-tracks fetch degrades to an empty list rather
    /// than failing the artist.
    pub async fn artist(&self, seokey: &str) -> Result<Artist> {
        let url = self.endpoints.artist_detail(seokey);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;

        if raw.get("artist").is_none() {
            return Err(GatewayError::NotFound("Artist not found".to_string()));
        }

        let mut artist = formatters::artist_info(&raw)?;
        if artist.artist_id.is_empty() {
            return Ok(artist);
        }

        let top_tracks_url = self.endpoints.artist_top_tracks(&artist.artist_id);
        match self
            .transport
            .post_json(&top_tracks_url, self.config.detail_timeout)
            .await
        {
            Ok(raw) => artist.top_tracks = formatters::artist_top_tracks(&raw),
            Err(e) => {
                warn!(%seokey, error = %e, "failed to fetch artist top tracks");
            }
        }
        Ok(artist)
    }

    /// Fetches many tracks by seokey in parallel.
    ///
    /// Each fetch runs under the tight bulk timeout; failed or empty
    /// lookups are dropped and the survivors keep their input order.
    pub async fn track_info(&self, seokeys: &[String]) -> Vec<Track> {
        let fetches = seokeys.iter().map(|seokey| async move {
            let url = self.endpoints.song_detail(seokey);
            match self.transport.post_json(&url, self.config.track_timeout).await {
                Ok(raw) => first_track(&raw).and_then(|t| formatters::song_detail(t).ok()),
                Err(e) => {
                    warn!(%seokey, error = %e, "failed to fetch track");
                    None
                }
            }
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }
}

/// The first entry of a song detail payload's `tracks` array.
fn first_track(raw: &Value) -> Option<&Value> {
    raw.get("tracks").and_then(Value::as_array)?.first()
}
