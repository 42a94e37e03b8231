//! Presentation-ready results.
//!
//! A [`ShapeReport`] is what the UI renders. It is built the same way from a
//! local classification, from the demo result, or from a remote service
//! payload whose labels are not necessarily one of our [`FaceShape`]s.

use serde::{Deserialize, Serialize};

use crate::classifier::ClassificationResult;
use crate::scoring::FaceShape;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledScore {
    pub shape: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeReport {
    pub shape: String,
    pub confidence: f64,
    pub scores: Vec<LabeledScore>,
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub demo: bool,
}

impl ShapeReport {
    pub fn demo() -> Self {
        Self {
            demo: true,
            ..Self::from(&ClassificationResult::demo())
        }
    }

    /// Scores ordered from most to least likely.
    pub fn sorted_scores(&self) -> Vec<LabeledScore> {
        let mut sorted = self.scores.clone();
        sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
        sorted
    }

    /// The confidence as a whole percentage.
    pub fn confidence_percent(&self) -> i64 {
        percent(self.confidence)
    }
}

impl From<&ClassificationResult> for ShapeReport {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            shape: result.shape.to_string(),
            confidence: result.confidence,
            scores: result
                .scores
                .iter()
                .map(|s| LabeledScore {
                    shape: s.shape.to_string(),
                    score: s.score,
                })
                .collect(),
            tips: result.tips.iter().map(|tip| tip.to_string()).collect(),
            demo: false,
        }
    }
}

impl LabeledScore {
    /// The label as a known shape, if it is one.
    pub fn face_shape(&self) -> Option<FaceShape> {
        self.shape.parse().ok()
    }

    pub fn percent(&self) -> i64 {
        percent(self.score)
    }
}

/// Round a [0, 1] score to a whole percentage, halves away from zero.
pub fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}
