//! # Emotion Classifier
//!
//! Gateway to the remote Watson NLP emotion classification service.
//!
//! Sends text to the `EmotionPredict` endpoint and normalizes the response
//! into an [`emotion_core::AnalysisResult`].

pub mod client;
mod wire;

pub use client::{
    ClassifierConfig, EmotionClassifierGateway, DEFAULT_MODEL_ID, DEFAULT_SERVICE_URL,
    MODEL_ID_HEADER,
};
