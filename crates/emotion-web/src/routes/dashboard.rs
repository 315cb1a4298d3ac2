//! Dashboard route handler.
//!
//! Serves the embedded emotion detector page.

use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the emotion detector page.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
