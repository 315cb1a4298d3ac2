//! Application state.

use emotion_core::EmotionAnalyzer;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn EmotionAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn EmotionAnalyzer>) -> Self {
        Self { analyzer }
    }
}
