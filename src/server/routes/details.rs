//! Resource detail handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::GatewayError;
use crate::models::{Album, Artist, Track};
use crate::server::error::AppError;
use crate::server::AppContext;

use super::{resolve_seokey, DetailQuery};

pub async fn song(
    State(ctx): State<AppContext>,
    path: Option<Path<String>>,
    Query(query): Query<DetailQuery>,
) -> Result<Json<Track>, AppError> {
    let seokey = resolve_seokey(path.map(|Path(p)| p), &query)?;
    Ok(Json(ctx.details.song(&seokey).await?))
}

pub async fn album(
    State(ctx): State<AppContext>,
    path: Option<Path<String>>,
    Query(query): Query<DetailQuery>,
) -> Result<Json<Album>, AppError> {
    let seokey = resolve_seokey(path.map(|Path(p)| p), &query)?;
    Ok(Json(ctx.details.album(&seokey, true).await?))
}

/// Playlist lookups are the one place where an upstream timeout is
/// reported as 408: the payloads are large enough that the budget is
/// exceeded in normal operation, and callers are expected to retry.
pub async fn playlist(
    State(ctx): State<AppContext>,
    path: Option<Path<String>>,
    Query(query): Query<DetailQuery>,
) -> Result<Json<Value>, AppError> {
    let seokey = resolve_seokey(path.map(|Path(p)| p), &query)?;
    let playlist = ctx.details.playlist(&seokey).await.map_err(|e| match e {
        GatewayError::Timeout => AppError::new(StatusCode::REQUEST_TIMEOUT, e.to_string()),
        other => other.into(),
    })?;
    Ok(Json(json!({ "playlist": playlist })))
}

pub async fn artist(
    State(ctx): State<AppContext>,
    path: Option<Path<String>>,
    Query(query): Query<DetailQuery>,
) -> Result<Json<Artist>, AppError> {
    let seokey = resolve_seokey(path.map(|Path(p)| p), &query)?;
    Ok(Json(ctx.details.artist(&seokey).await?))
}
