//! HTTP server surface.
//!
//! Handlers stay thin: they validate inputs, call one service, and map
//! errors to status codes. All catalog behavior lives in the service
//! layer.

pub mod error;
mod routes;

use std::sync::Arc;
use std::time::Instant;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::Transport;
use crate::config::GatewayConfig;
use crate::services::{BrowseService, DetailsService, SearchService, StreamResolver};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppContext {
    pub details: Arc<DetailsService>,
    pub search: Arc<SearchService>,
    pub browse: Arc<BrowseService>,
    pub stream: Arc<StreamResolver>,
    pub environment: String,
    pub started_at: Instant,
}

impl AppContext {
    /// Builds the full service stack over a single shared transport.
    pub fn new(config: GatewayConfig, environment: impl Into<String>) -> Self {
        let transport = Transport::new();
        Self {
            details: Arc::new(DetailsService::new(transport.clone(), config.clone())),
            search: Arc::new(SearchService::new(transport.clone(), config.clone())),
            browse: Arc::new(BrowseService::new(transport.clone(), config.clone())),
            stream: Arc::new(StreamResolver::new(transport, config)),
            environment: environment.into(),
            started_at: Instant::now(),
        }
    }
}

/// Builds the gateway router.
///
/// Resource endpoints accept the identifier as a path segment or as a
/// `url`/`seokey` query parameter, so each is registered twice.
pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/search/songs", get(routes::search::songs))
        .route("/search/albums", get(routes::search::albums))
        .route("/search/playlists", get(routes::search::playlists))
        .route("/search/artists", get(routes::search::artists))
        .route("/search", get(routes::search::all))
        .route("/songs", get(routes::details::song))
        .route("/songs/{seokey}", get(routes::details::song))
        .route("/albums", get(routes::details::album))
        .route("/albums/{seokey}", get(routes::details::album))
        .route("/playlists", get(routes::details::playlist))
        .route("/playlists/{seokey}", get(routes::details::playlist))
        .route("/artists", get(routes::details::artist))
        .route("/artists/{seokey}", get(routes::details::artist))
        .route("/trending", get(routes::browse::trending))
        .route("/charts", get(routes::browse::charts))
        .route("/new-releases", get(routes::browse::new_releases))
        .route("/stream", get(routes::stream::stream))
        .route("/stream/{track_id}", get(routes::stream::stream))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
