//! Common types for intent matching.

use serde::{Deserialize, Serialize};

/// Similarity scores above this value are accepted as-is.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Similarity scores above this value (and at most the high threshold) are
/// returned with a low-confidence annotation; at or below it the match is
/// rejected.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Response returned by the keyword matcher when no pattern matches.
pub const FALLBACK_RESPONSE: &str =
    "Sorry, I didn't quite understand that. Could you please rephrase?";

/// Response returned by the similarity matcher when the best match is
/// rejected.
pub const REJECT_RESPONSE: &str =
    "Sorry, I am not sure about that. Please try rephrasing your question.";

/// Annotation appended to responses in the low-confidence band.
pub const LOW_CONFIDENCE_NOTE: &str =
    " (I'm not completely sure I understood, but here's my best guess.)";

/// Tag reported for rejected matches.
pub const OUT_OF_SCOPE_TAG: &str = "out_of_scope";

/// The outcome of matching one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Response text to display.
    pub text: String,
    /// Tag of the matched intent, if any.
    pub tag: Option<String>,
    /// Similarity confidence in [0, 1], if the strategy produces one.
    pub confidence: Option<f64>,
}

/// Confidence band for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// Accepted: score strictly above the high threshold.
    High,
    /// Accepted with a warning: score strictly above the low threshold and
    /// at most the high threshold.
    Low,
    /// Rejected: score at or below the low threshold.
    Reject,
}

impl ConfidenceBand {
    /// Classify a similarity score into its band.
    pub fn classify(confidence: f64) -> Self {
        if confidence > HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceBand::High
        } else if confidence > LOW_CONFIDENCE_THRESHOLD {
            ConfidenceBand::Low
        } else {
            ConfidenceBand::Reject
        }
    }
}
