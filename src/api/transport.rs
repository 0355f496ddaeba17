//! HTTP transport for the upstream catalog API.
//!
//! The upstream has no documented API surface; it serves its own web
//! players and rejects requests that do not look like them. Every request
//! therefore carries a browser identity by default, and callers may layer
//! additional headers on top.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::error::{GatewayError, Result};

/// Browser identity presented upstream.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const WEB_ORIGIN: &str = "https://gaana.com";
const WEB_REFERER: &str = "https://gaana.com/";

/// Shared HTTP client wrapper.
///
/// Cheap to clone; the inner [`Client`] pools connections internally.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Sends a request and parses the body as JSON.
    ///
    /// Browser-identity headers are applied first so `extra_headers` can
    /// override any of them. A timed-out request maps to
    /// [`GatewayError::Timeout`]; any other transport failure maps to
    /// [`GatewayError::Request`]. The body is parsed regardless of HTTP
    /// status: the upstream reports most errors as 200 with an empty or
    /// message-bearing payload.
    pub async fn fetch_json(
        &self,
        url: &str,
        method: Method,
        extra_headers: HeaderMap,
        timeout: Duration,
    ) -> Result<Value> {
        let mut headers = Self::browser_headers();
        headers.extend(extra_headers);

        debug!(%url, timeout_ms = timeout.as_millis() as u64, "upstream request");

        let response = self
            .client
            .request(method, url)
            .headers(headers)
            .timeout(timeout)
            .send()
            .await
            .map_err(Self::map_error)?;

        let body = response.text().await.map_err(Self::map_error)?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// Convenience for the common case: the upstream expects POST even for
    /// reads.
    pub async fn post_json(&self, url: &str, timeout: Duration) -> Result<Value> {
        self.fetch_json(url, Method::POST, HeaderMap::new(), timeout)
            .await
    }

    fn map_error(e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Request(e)
        }
    }

    fn browser_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ORIGIN, HeaderValue::from_static(WEB_ORIGIN));
        headers.insert(REFERER, HeaderValue::from_static(WEB_REFERER));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }
}
