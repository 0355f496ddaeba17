//! Browse handlers: trending, charts, new releases.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::ChartEntry;
use crate::server::error::AppError;
use crate::server::AppContext;
use crate::services::NewReleases;
use crate::validate::{self, LimitTier};

const DEFAULT_BROWSE_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    pub language: Option<String>,
    pub limit: Option<String>,
}

pub async fn trending(
    State(ctx): State<AppContext>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<Value>, AppError> {
    let language = validate::validate_language(query.language.as_deref())?;
    let limit = validate::parse_limit(
        query.limit.as_deref(),
        DEFAULT_BROWSE_LIMIT,
        LimitTier::Listing,
    )?;

    let tracks = ctx.browse.trending(language.as_deref(), limit).await?;
    Ok(Json(json!({ "tracks": tracks })))
}

pub async fn charts(
    State(ctx): State<AppContext>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<Vec<ChartEntry>>, AppError> {
    let limit = validate::parse_limit(
        query.limit.as_deref(),
        DEFAULT_BROWSE_LIMIT,
        LimitTier::Listing,
    )?;
    Ok(Json(ctx.browse.charts(limit).await?))
}

pub async fn new_releases(
    State(ctx): State<AppContext>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<NewReleases>, AppError> {
    let language = validate::validate_language(query.language.as_deref())?;
    Ok(Json(ctx.browse.new_releases(language.as_deref()).await?))
}
