//! Emotion Detector Core Library
//!
//! Domain model and data-shaping logic for emotion analysis. Scores come from an
//! external classifier; this crate decides what a result looks like and which
//! emotion dominates. No I/O lives here.

pub mod analysis;
pub mod error;

pub use analysis::model::{AnalysisResult, Emotion, EmotionScores};
pub use analysis::{format_response, EmotionAnalyzer, INVALID_TEXT_MESSAGE};
pub use error::{GatewayError, GatewayResult};
