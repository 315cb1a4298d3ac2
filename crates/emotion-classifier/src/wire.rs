//! Request and response bodies of the `EmotionPredict` endpoint.

use emotion_core::{EmotionScores, GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct EmotionPredictRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Serialize)]
struct RawDocument<'a> {
    text: &'a str,
}

impl<'a> EmotionPredictRequest<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            raw_document: RawDocument { text },
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmotionPredictResponse {
    emotion_predictions: Option<Vec<EmotionPrediction>>,
}

#[derive(Deserialize)]
struct EmotionPrediction {
    emotion: Option<EmotionMap>,
}

#[derive(Deserialize)]
struct EmotionMap {
    anger: Option<f64>,
    disgust: Option<f64>,
    fear: Option<f64>,
    joy: Option<f64>,
    sadness: Option<f64>,
}

impl EmotionPredictResponse {
    pub(crate) fn from_slice(body: &[u8]) -> GatewayResult<Self> {
        serde_json::from_slice(body).map_err(|e| GatewayError::decode(e.to_string()))
    }

    /// Scores of the first prediction.
    ///
    /// The prediction list itself is required, but any individual score may
    /// be absent and then counts as zero. A first prediction without an
    /// `emotion` map is a missing expected key and fails the call on purpose.
    pub(crate) fn into_scores(self) -> GatewayResult<EmotionScores> {
        let first = self
            .emotion_predictions
            .and_then(|predictions| predictions.into_iter().next())
            .ok_or(GatewayError::MissingPredictions)?;
        let emotion = first.emotion.ok_or(GatewayError::MissingEmotion)?;

        Ok(EmotionScores {
            anger: emotion.anger.unwrap_or(0.0),
            disgust: emotion.disgust.unwrap_or(0.0),
            fear: emotion.fear.unwrap_or(0.0),
            joy: emotion.joy.unwrap_or(0.0),
            sadness: emotion.sadness.unwrap_or(0.0),
        })
    }
}
