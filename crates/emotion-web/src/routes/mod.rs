//! Route handlers.

pub mod dashboard;
pub mod detector;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// GET /health - Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Fallback for unknown paths.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found! Please check the URL.")
}
