//! Gateway configuration.
//!
//! Carries the upstream base URLs and the per-call-site timeout tiers.
//! The tiers reflect empirical tuning rather than a principled policy:
//! bulk fan-out gets the shortest budget, single large-payload lookups
//! (playlists) the longest.

use std::time::Duration;

/// Default timeout for single detail lookups.
pub const DEFAULT_DETAIL_TIMEOUT_MS: u64 = 5000;

/// Timeout for playlist detail lookups, which carry the full track list
/// inline and can be large.
pub const DEFAULT_PLAYLIST_TIMEOUT_MS: u64 = 8000;

/// Timeout for per-track detail fetches issued in bulk. Kept tight so a
/// single slow straggler does not stall a whole batch.
pub const DEFAULT_TRACK_TIMEOUT_MS: u64 = 3000;

/// Runtime configuration for the gateway services.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the upstream web API (`https://gaana.com`).
    pub web_base: String,
    /// Base URL of the upstream apiv2 host (`https://apiv2.gaana.com`).
    pub api_base: String,
    /// Timeout for single detail lookups.
    pub detail_timeout: Duration,
    /// Timeout for playlist detail lookups.
    pub playlist_timeout: Duration,
    /// Timeout for bulk per-track detail fetches.
    pub track_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            web_base: "https://gaana.com".to_string(),
            api_base: "https://apiv2.gaana.com".to_string(),
            detail_timeout: Duration::from_millis(DEFAULT_DETAIL_TIMEOUT_MS),
            playlist_timeout: Duration::from_millis(DEFAULT_PLAYLIST_TIMEOUT_MS),
            track_timeout: Duration::from_millis(DEFAULT_TRACK_TIMEOUT_MS),
        }
    }
}

impl GatewayConfig {
    /// Point both upstream bases at a single host. Used by tests to target
    /// a stub server.
    pub fn with_base(base: &str) -> Self {
        Self {
            web_base: base.trim_end_matches('/').to_string(),
            api_base: base.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout_tiers() {
        let config = GatewayConfig::default();
        assert!(config.track_timeout < config.detail_timeout);
        assert!(config.detail_timeout < config.playlist_timeout);
    }

    #[test]
    fn test_with_base_strips_trailing_slash() {
        let config = GatewayConfig::with_base("http://127.0.0.1:9000/");
        assert_eq!(config.web_base, "http://127.0.0.1:9000");
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
    }
}
