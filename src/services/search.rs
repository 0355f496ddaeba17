//! Search across the four catalog verticals.

use futures_util::future::join_all;
use serde::Serialize;
use tracing::warn;

use crate::api::Transport;
use crate::config::GatewayConfig;
use crate::endpoints::{Endpoints, SearchKind};
use crate::error::Result;
use crate::formatters;
use crate::models::{Album, Artist, PlaylistHit, Track};

use super::details::DetailsService;

/// Combined results of a cross-vertical search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub songs: Vec<Track>,
    pub albums: Vec<Album>,
    pub playlists: Vec<PlaylistHit>,
    pub artists: Vec<Artist>,
}

/// Query service over the upstream search verticals.
///
/// Song and album hits come back from the upstream as thin stubs, so
/// both verticals follow up with parallel detail fetches to return the
/// same records the detail endpoints would.
#[derive(Debug, Clone)]
pub struct SearchService {
    transport: Transport,
    endpoints: Endpoints,
    details: DetailsService,
    config: GatewayConfig,
}

impl SearchService {
    pub fn new(transport: Transport, config: GatewayConfig) -> Self {
        Self {
            endpoints: Endpoints::new(&config),
            details: DetailsService::new(transport.clone(), config.clone()),
            transport,
            config,
        }
    }

    /// Searches songs, expanding each hit to a full track record.
    pub async fn songs(&self, query: &str, limit: usize) -> Result<Vec<Track>> {
        let url = self.endpoints.search(SearchKind::Track, query);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;

        let seokeys = formatters::search_seokeys(&raw, limit);
        Ok(self.details.track_info(&seokeys).await)
    }

    /// Searches albums, expanding each hit to a full album record
    /// without its track list. Hits whose detail fetch fails are
    /// dropped; the survivors keep their hit order.
    pub async fn albums(&self, query: &str, limit: usize) -> Result<Vec<Album>> {
        let url = self.endpoints.search(SearchKind::Album, query);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;

        let seokeys = formatters::search_seokeys(&raw, limit);
        let fetches = seokeys.iter().map(|seokey| async move {
            let url = self.endpoints.album_detail(seokey);
            match self.transport.post_json(&url, self.config.track_timeout).await {
                Ok(raw) => formatters::album_detail(&raw, false).ok(),
                Err(e) => {
                    warn!(%seokey, error = %e, "failed to fetch album detail");
                    None
                }
            }
        });

        Ok(join_all(fetches).await.into_iter().flatten().collect())
    }

    /// Searches playlists. Hits are returned as-is; the upstream search
    /// payload already carries everything the summary shape needs.
    pub async fn playlists(&self, query: &str, limit: usize) -> Result<Vec<PlaylistHit>> {
        let url = self.endpoints.search(SearchKind::Playlist, query);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;
        Ok(formatters::playlist_search(&raw, limit))
    }

    /// Searches artists.
    pub async fn artists(&self, query: &str, limit: usize) -> Result<Vec<Artist>> {
        let url = self.endpoints.search(SearchKind::Artist, query);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;
        Ok(formatters::artist_search(&raw, limit))
    }

    /// Searches all four verticals concurrently.
    ///
    /// A failed vertical degrades to an empty list instead of failing
    /// the whole search.
    pub async fn all(&self, query: &str, limit: usize) -> SearchResults {
        let (songs, albums, playlists, artists) = tokio::join!(
            self.songs(query, limit),
            self.albums(query, limit),
            self.playlists(query, limit),
            self.artists(query, limit),
        );

        SearchResults {
            songs: songs.unwrap_or_else(|e| {
                warn!(%query, error = %e, "song search failed");
                Vec::new()
            }),
            albums: albums.unwrap_or_else(|e| {
                warn!(%query, error = %e, "album search failed");
                Vec::new()
            }),
            playlists: playlists.unwrap_or_else(|e| {
                warn!(%query, error = %e, "playlist search failed");
                Vec::new()
            }),
            artists: artists.unwrap_or_else(|e| {
                warn!(%query, error = %e, "artist search failed");
                Vec::new()
            }),
        }
    }
}
