//! Watson NLP HTTP client for emotion prediction.
//!
//! POSTs `{"raw_document": {"text": ...}}` to the `EmotionPredict` endpoint
//! with the model id header and reads the first emotion prediction.

use async_trait::async_trait;
use emotion_core::{AnalysisResult, EmotionAnalyzer, EmotionScores, GatewayError, GatewayResult};
use reqwest::header::HeaderValue;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::wire::{EmotionPredictRequest, EmotionPredictResponse};

/// Default EmotionPredict endpoint.
pub const DEFAULT_SERVICE_URL: &str =
    "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// Default classification workflow.
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

/// Header selecting the classification workflow.
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the classification service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub url: String,
    pub model_id: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVICE_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Gateway to the remote emotion classifier.
///
/// Holds no per-request state; clone it or share it behind an `Arc`.
#[derive(Clone)]
pub struct EmotionClassifierGateway {
    url: String,
    model_id: HeaderValue,
    client: reqwest::Client,
}

impl EmotionClassifierGateway {
    /// Create a gateway from configuration.
    ///
    /// Zero timeouts are rejected: they would fail every request.
    pub fn new(config: &ClassifierConfig) -> GatewayResult<Self> {
        if config.timeout_secs == 0 || config.connect_timeout_secs == 0 {
            return Err(GatewayError::Client(
                "timeouts must be at least one second".to_string(),
            ));
        }

        let model_id = HeaderValue::from_str(&config.model_id)
            .map_err(|e| GatewayError::Client(format!("invalid model id: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        debug!(url = %config.url, model_id = %config.model_id, "Classifier gateway initialized");

        Ok(Self {
            url: config.url.clone(),
            model_id,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Classify `text` and return the scores of the first prediction.
    pub async fn try_analyze(&self, text: &str) -> GatewayResult<EmotionScores> {
        debug!(url = %self.url, text_len = text.len(), "Sending emotion prediction request");

        let response = self
            .client
            .post(&self.url)
            .header(MODEL_ID_HEADER, self.model_id.clone())
            .json(&EmotionPredictRequest::new(text))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        let scores = EmotionPredictResponse::from_slice(&body)?.into_scores()?;

        debug!(?scores, "Received emotion scores");

        Ok(scores)
    }
}

#[async_trait]
impl EmotionAnalyzer for EmotionClassifierGateway {
    async fn analyze(&self, text: &str) -> AnalysisResult {
        match self.try_analyze(text).await {
            Ok(scores) => AnalysisResult::detected(scores),
            Err(e) => {
                warn!(kind = e.kind(), error = %e, url = %self.url, "Emotion analysis failed");
                AnalysisResult::Failed
            }
        }
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    GatewayError::Transport {
        timeout: e.is_timeout(),
        message: e.to_string(),
    }
}
