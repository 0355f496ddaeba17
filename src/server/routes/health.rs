//! Health check handler.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::server::AppContext;

pub async fn health(State(ctx): State<AppContext>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": ctx.started_at.elapsed().as_secs(),
        "environment": ctx.environment,
    }))
}
