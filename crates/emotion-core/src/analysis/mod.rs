//! Emotion analysis: the analyzer port and response formatting.

pub mod model;

use async_trait::async_trait;

use model::AnalysisResult;

/// Message shown to users for blank input or a failed analysis.
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

/// Anything that can turn a piece of text into an [`AnalysisResult`].
///
/// Implementations never fail: every error is folded into
/// [`AnalysisResult::Failed`].
#[async_trait]
pub trait EmotionAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> AnalysisResult;
}

/// Render a result as the human-readable response sentence.
///
/// Returns `None` for a failed analysis.
pub fn format_response(result: &AnalysisResult) -> Option<String> {
    let AnalysisResult::Detected {
        scores,
        dominant_emotion,
    } = result
    else {
        return None;
    };

    Some(format!(
        "For the given statement, the system response is \
         'anger': {:?}, 'disgust': {:?}, 'fear': {:?}, 'joy': {:?} and 'sadness': {:?}. \
         The dominant emotion is **{}**.",
        scores.anger, scores.disgust, scores.fear, scores.joy, scores.sadness, dominant_emotion
    ))
}
