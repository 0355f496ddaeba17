//! Search handlers.
//!
//! The global handler queries all four verticals; the per-vertical
//! handlers return one list wrapped in the standard envelope with a
//! result count.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::server::error::AppError;
use crate::server::AppContext;
use crate::validate::{self, LimitTier};

const DEFAULT_SEARCH_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    /// Kept as a string so non-numeric values can fall back to the
    /// default instead of failing extraction.
    pub limit: Option<String>,
}

fn parse(query: &SearchQuery) -> Result<(String, usize), AppError> {
    let q = validate::validate_query(query.q.as_deref().unwrap_or_default())?;
    let limit = validate::parse_limit(
        query.limit.as_deref(),
        DEFAULT_SEARCH_LIMIT,
        LimitTier::Search,
    )?;
    Ok((q, limit as usize))
}

fn envelope<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": data,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

fn counted<T: Serialize>(items: Vec<T>) -> Json<Value> {
    Json(json!({
        "success": true,
        "count": items.len(),
        "data": items,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn all(
    State(ctx): State<AppContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    let (q, limit) = parse(&query)?;
    Ok(envelope(ctx.search.all(&q, limit).await))
}

pub async fn songs(
    State(ctx): State<AppContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    let (q, limit) = parse(&query)?;
    Ok(counted(ctx.search.songs(&q, limit).await?))
}

pub async fn albums(
    State(ctx): State<AppContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    let (q, limit) = parse(&query)?;
    Ok(counted(ctx.search.albums(&q, limit).await?))
}

pub async fn playlists(
    State(ctx): State<AppContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    let (q, limit) = parse(&query)?;
    Ok(counted(ctx.search.playlists(&q, limit).await?))
}

pub async fn artists(
    State(ctx): State<AppContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    let (q, limit) = parse(&query)?;
    Ok(counted(ctx.search.artists(&q, limit).await?))
}
