//! One-shot analysis command.

use anyhow::{bail, Result};
use clap::Args;
use emotion_classifier::EmotionClassifierGateway;
use emotion_core::{format_response, EmotionAnalyzer, INVALID_TEXT_MESSAGE};

use crate::config::AppConfig;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,

    /// Print the raw JSON record instead of a sentence
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    let text = args.text.trim();
    if text.is_empty() {
        bail!(INVALID_TEXT_MESSAGE);
    }

    let gateway = EmotionClassifierGateway::new(&config.classifier)?;
    let result = gateway.analyze(text).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match format_response(&result) {
        Some(sentence) => println!("{}", sentence),
        None => bail!(INVALID_TEXT_MESSAGE),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use emotion_classifier::ClassifierConfig;
    use serde_json::json;

    const PREDICT_PATH: &str = "/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

    async fn spawn_stub(router: Router) -> AppConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        config_for(format!("http://{}{}", addr, PREDICT_PATH))
    }

    fn config_for(url: String) -> AppConfig {
        AppConfig {
            classifier: ClassifierConfig {
                url,
                timeout_secs: 1,
                connect_timeout_secs: 1,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn joyful_service() -> Router {
        Router::new().route(
            PREDICT_PATH,
            post(|| async {
                Json(json!({
                    "emotionPredictions": [{
                        "emotion": {"anger": 0.0, "disgust": 0.0, "fear": 0.0, "joy": 0.9, "sadness": 0.05}
                    }]
                }))
            }),
        )
    }

    fn failing_service() -> Router {
        Router::new().route(
            PREDICT_PATH,
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "unavailable") }),
        )
    }

    fn args(text: &str, json: bool) -> AnalyzeArgs {
        AnalyzeArgs {
            text: text.to_string(),
            json,
        }
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let config = spawn_stub(joyful_service()).await;

        for json in [false, true] {
            let err = execute(args("   ", json), &config).await.unwrap_err();
            assert_eq!(err.to_string(), INVALID_TEXT_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_sentence_mode_succeeds() {
        let config = spawn_stub(joyful_service()).await;

        assert!(execute(args("I am glad this happened", false), &config)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_failed_analysis_in_sentence_mode_is_an_error() {
        let config = spawn_stub(failing_service()).await;

        let err = execute(args("anything", false), &config).await.unwrap_err();
        assert_eq!(err.to_string(), INVALID_TEXT_MESSAGE);
    }

    #[tokio::test]
    async fn test_failed_analysis_in_json_mode_prints_record() {
        let config = spawn_stub(failing_service()).await;

        assert!(execute(args("anything", true), &config).await.is_ok());
    }

    #[tokio::test]
    async fn test_zero_timeout_is_an_error() {
        let mut config = spawn_stub(joyful_service()).await;
        config.classifier.timeout_secs = 0;

        assert!(execute(args("anything", false), &config).await.is_err());
    }
}
