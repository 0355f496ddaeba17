//! Curated browse lists: trending, charts, and new releases.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::api::Transport;
use crate::config::GatewayConfig;
use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::formatters;
use crate::models::{Album, ChartEntry, Track};

use super::details::DetailsService;

const DEFAULT_LANGUAGE: &str = "en";

/// New-release entities split by type.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewReleases {
    pub tracks: Vec<Track>,
    pub albums: Vec<Album>,
}

/// Fetches curated content lists.
#[derive(Debug, Clone)]
pub struct BrowseService {
    transport: Transport,
    endpoints: Endpoints,
    details: DetailsService,
    config: GatewayConfig,
}

impl BrowseService {
    pub fn new(transport: Transport, config: GatewayConfig) -> Self {
        Self {
            endpoints: Endpoints::new(&config),
            details: DetailsService::new(transport.clone(), config.clone()),
            transport,
            config,
        }
    }

    /// Trending tracks for a language, expanded to full track records.
    pub async fn trending(&self, language: Option<&str>, limit: u32) -> Result<Vec<Track>> {
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        let url = self.endpoints.trending(language, limit);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;

        let seokeys = formatters::trending_seokeys(&raw)?;
        Ok(self.details.track_info(&seokeys).await)
    }

    /// Top charts. Malformed entities are dropped.
    pub async fn charts(&self, limit: u32) -> Result<Vec<ChartEntry>> {
        let url = self.endpoints.charts(limit);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;

        let entries = raw
            .get("entities")
            .and_then(Value::as_array)
            .map(|entities| {
                entities
                    .iter()
                    .take(limit as usize)
                    .filter_map(|e| formatters::chart_entry(e).ok())
                    .collect()
            })
            .unwrap_or_default();
        Ok(entries)
    }

    /// New releases for a language: tracks expanded in parallel, albums
    /// fetched without their track lists. A failed album lookup is
    /// dropped from the listing.
    pub async fn new_releases(&self, language: Option<&str>) -> Result<NewReleases> {
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        let url = self.endpoints.new_releases(language);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;

        let (track_seokeys, album_seokeys) = formatters::new_release_seokeys(&raw)?;

        let tracks = self.details.track_info(&track_seokeys).await;

        let mut albums = Vec::with_capacity(album_seokeys.len());
        for seokey in &album_seokeys {
            match self.details.album(seokey, false).await {
                Ok(album) => albums.push(album),
                Err(e) => {
                    warn!(%seokey, error = %e, "failed to fetch new-release album");
                }
            }
        }

        Ok(NewReleases { tracks, albums })
    }
}
