//! Analysis domain models.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One of the five emotions reported by the classifier.
///
/// Declaration order is the tie-break order for dominant-emotion selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// All emotions, in tie-break order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores for each emotion, as returned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// The emotion with the highest score.
    ///
    /// Emotions are examined in [`Emotion::ALL`] order and a later one only
    /// replaces the current best when strictly greater, so ties go to the
    /// earliest name.
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::Anger;
        for emotion in Emotion::ALL {
            if self.get(emotion) > self.get(best) {
                best = emotion;
            }
        }
        best
    }
}

/// Outcome of a single analysis request.
///
/// Serializes to a flat record with exactly six fields. A failed analysis
/// serializes every field as `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisResult {
    Detected {
        scores: EmotionScores,
        dominant_emotion: Emotion,
    },
    Failed,
}

impl AnalysisResult {
    /// Build a successful result, selecting the dominant emotion from `scores`.
    pub fn detected(scores: EmotionScores) -> Self {
        Self::Detected {
            dominant_emotion: scores.dominant(),
            scores,
        }
    }

    pub fn is_detected(&self) -> bool {
        matches!(self, Self::Detected { .. })
    }

    pub fn scores(&self) -> Option<&EmotionScores> {
        match self {
            Self::Detected { scores, .. } => Some(scores),
            Self::Failed => None,
        }
    }

    pub fn dominant_emotion(&self) -> Option<Emotion> {
        match self {
            Self::Detected {
                dominant_emotion, ..
            } => Some(*dominant_emotion),
            Self::Failed => None,
        }
    }
}

impl From<Option<EmotionScores>> for AnalysisResult {
    fn from(scores: Option<EmotionScores>) -> Self {
        scores.map_or(Self::Failed, Self::detected)
    }
}

#[derive(Serialize)]
struct AnalysisRecord {
    anger: Option<f64>,
    disgust: Option<f64>,
    fear: Option<f64>,
    joy: Option<f64>,
    sadness: Option<f64>,
    dominant_emotion: Option<Emotion>,
}

impl From<&AnalysisResult> for AnalysisRecord {
    fn from(result: &AnalysisResult) -> Self {
        let scores = result.scores();
        Self {
            anger: scores.map(|s| s.anger),
            disgust: scores.map(|s| s.disgust),
            fear: scores.map(|s| s.fear),
            joy: scores.map(|s| s.joy),
            sadness: scores.map(|s| s.sadness),
            dominant_emotion: result.dominant_emotion(),
        }
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AnalysisRecord::from(self).serialize(serializer)
    }
}
