//! Emotion detector route handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use emotion_core::{format_response, AnalysisResult, INVALID_TEXT_MESSAGE};
use serde_json::{json, Value};
use tracing::debug;

use crate::state::AppState;

/// Query parameter carrying the text to analyze.
pub const TEXT_PARAM: &str = "textToAnalyze";

type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// The text submitted in the query string.
///
/// The first `textToAnalyze` wins when the parameter is repeated. A query
/// string that cannot be parsed counts as no text at all.
pub struct DetectQuery {
    pub text_to_analyze: String,
}

impl DetectQuery {
    fn from_pairs(pairs: QueryPairs) -> Self {
        let text_to_analyze = match pairs {
            Ok(Query(pairs)) => pairs
                .into_iter()
                .find(|(key, _)| key == TEXT_PARAM)
                .map(|(_, value)| value)
                .unwrap_or_default(),
            Err(rejection) => {
                debug!(error = %rejection, "Unparseable query string");
                String::new()
            }
        };
        Self { text_to_analyze }
    }

    /// The submitted text, trimmed, or `None` when blank.
    fn text(&self) -> Option<&str> {
        let text = self.text_to_analyze.trim();
        (!text.is_empty()).then_some(text)
    }
}

/// GET /emotionDetector - Analyze text and answer with a sentence.
pub async fn detect_text(
    State(state): State<AppState>,
    pairs: QueryPairs,
) -> (StatusCode, String) {
    let query = DetectQuery::from_pairs(pairs);
    let Some(text) = query.text() else {
        debug!("Rejected blank text");
        return (StatusCode::BAD_REQUEST, INVALID_TEXT_MESSAGE.to_string());
    };

    let result = state.analyzer.analyze(text).await;

    match format_response(&result) {
        Some(sentence) => (StatusCode::OK, sentence),
        None => (StatusCode::BAD_REQUEST, INVALID_TEXT_MESSAGE.to_string()),
    }
}

/// GET /emotionDetector/json - Analyze text and answer with the raw record.
pub async fn detect_json(
    State(state): State<AppState>,
    pairs: QueryPairs,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<Value>)> {
    let query = DetectQuery::from_pairs(pairs);
    let Some(text) = query.text() else {
        debug!("Rejected blank text");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": INVALID_TEXT_MESSAGE })),
        ));
    };

    Ok(Json(state.analyzer.analyze(text).await))
}
