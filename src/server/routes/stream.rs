//! Stream URL handler.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::{Quality, StreamTarget};
use crate::server::error::AppError;
use crate::server::AppContext;
use crate::validate;

#[derive(Debug, Deserialize)]
pub struct StreamQuery {
    pub track_id: Option<String>,
    pub quality: Option<String>,
}

/// Accepts the track id as a path segment or a `track_id` query
/// parameter. An unresolvable stream is a 404, not a server error.
pub async fn stream(
    State(ctx): State<AppContext>,
    path: Option<Path<String>>,
    Query(query): Query<StreamQuery>,
) -> Result<Json<StreamTarget>, AppError> {
    let input = path
        .map(|Path(p)| p)
        .or_else(|| query.track_id.clone())
        .ok_or_else(|| AppError::bad_request("Track ID is required"))?;

    let track_id = validate::validate_track_id(&input)?;
    let quality = Quality::from_param(query.quality.as_deref());

    match ctx.stream.resolve(&track_id, quality).await? {
        Some(target) => Ok(Json(target)),
        None => Err(AppError::not_found("Failed to get stream URL")),
    }
}
