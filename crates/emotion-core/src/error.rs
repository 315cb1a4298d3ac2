//! Failure causes of a classifier round-trip.

use thiserror::Error;

/// Why a call to the classification service did not produce scores.
///
/// Callers of the analyzer never see these; they are logged and collapsed
/// into [`crate::AnalysisResult::Failed`].
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP client could not be built: {0}")]
    Client(String),

    #[error("Classifier unreachable{}: {message}", timeout_suffix(.timeout))]
    Transport { message: String, timeout: bool },

    #[error("Classifier returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Classifier response could not be decoded: {0}")]
    Decode(String),

    #[error("Classifier response has no emotion predictions")]
    MissingPredictions,

    #[error("First emotion prediction has no emotion map")]
    MissingEmotion,
}

fn timeout_suffix(timeout: &bool) -> &'static str {
    if *timeout {
        " (timed out)"
    } else {
        ""
    }
}

/// Result type for classifier operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Short machine-friendly label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Client(_) => "client",
            Self::Transport { .. } => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
            Self::MissingPredictions => "missing_predictions",
            Self::MissingEmotion => "missing_emotion",
        }
    }
}
