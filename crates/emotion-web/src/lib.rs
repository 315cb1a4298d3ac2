//! Emotion Detector Web Server
//!
//! Axum-based web server for the detector page and its text/JSON endpoints.

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use emotion_core::EmotionAnalyzer;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/emotionDetector", get(routes::detector::detect_text))
        .route("/emotionDetector/json", get(routes::detector::detect_json))
        .route("/health", get(routes::health))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    analyzer: Arc<dyn EmotionAnalyzer>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(analyzer);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
