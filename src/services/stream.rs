//! Stream URL resolution.

use serde_json::Value;
use tracing::warn;

use crate::api::Transport;
use crate::config::GatewayConfig;
use crate::crypto;
use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::models::{Quality, StreamTarget};

/// Resolves playable stream URLs for a track.
///
/// The upstream returns per-quality encrypted messages; resolution
/// fetches the message for the requested tier and decrypts it. A track
/// with no message for the tier, or a message that fails to decrypt,
/// resolves to `None` rather than an error.
#[derive(Debug, Clone)]
pub struct StreamResolver {
    transport: Transport,
    endpoints: Endpoints,
    config: GatewayConfig,
}

impl StreamResolver {
    pub fn new(transport: Transport, config: GatewayConfig) -> Self {
        Self {
            endpoints: Endpoints::new(&config),
            transport,
            config,
        }
    }

    pub async fn resolve(&self, track_id: &str, quality: Quality) -> Result<Option<StreamTarget>> {
        let url = self.endpoints.stream_detail(track_id);
        let raw = self
            .transport
            .post_json(&url, self.config.detail_timeout)
            .await?;

        let message = match stream_message(&raw, quality) {
            Some(message) => message,
            None => return Ok(None),
        };

        let stream_url = match crypto::decrypt_stream_message(message) {
            Ok(url) => url,
            Err(e) => {
                warn!(%track_id, error = %e, "failed to decrypt stream message");
                return Ok(None);
            }
        };

        let stream_type = if stream_url.contains(".m3u8") {
            "hls"
        } else {
            "direct"
        };

        Ok(Some(StreamTarget {
            track_id: track_id.to_string(),
            quality,
            url: stream_url,
            stream_type: stream_type.to_string(),
        }))
    }
}

/// The encrypted message for a quality tier:
/// `tracks[0].urls.{tier}.message`.
fn stream_message(raw: &Value, quality: Quality) -> Option<&str> {
    raw.get("tracks")
        .and_then(Value::as_array)?
        .first()?
        .get("urls")?
        .get(quality.tier())?
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stream_message_extraction() {
        let raw = json!({
            "tracks": [{
                "urls": {
                    "high": {"message": "abc"},
                    "medium": {"message": ""}
                }
            }]
        });
        assert_eq!(stream_message(&raw, Quality::High), Some("abc"));
        assert_eq!(stream_message(&raw, Quality::Medium), None);
        assert_eq!(stream_message(&raw, Quality::Low), None);
        assert_eq!(stream_message(&json!({"tracks": []}), Quality::High), None);
    }
}
