use serde::Serialize;

use crate::config::ClassifierConfig;
use crate::error::{ClassificationUnavailable, Result};
use crate::geometry::{Measurements, Ratios};
use crate::scoring::{normalize, raw_scores, select_best, FaceShape, ShapeScore};
use crate::types::LandmarkSet;

/// The outcome of classifying one face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// The best matching shape
    pub shape: FaceShape,
    /// Normalized score of `shape`, in [0, 1]
    pub confidence: f64,
    /// Normalized scores for every shape, in profile order (not sorted)
    pub scores: Vec<ShapeScore>,
    pub tips: &'static [&'static str],
}

impl ClassificationResult {
    /// The fixed result shown when no real classification is available.
    pub fn demo() -> Self {
        let score = |shape, score| ShapeScore { shape, score };
        Self {
            shape: FaceShape::Oval,
            confidence: 0.92,
            scores: vec![
                score(FaceShape::Round, 0.42),
                score(FaceShape::Square, 0.28),
                score(FaceShape::Rectangle, 0.22),
                score(FaceShape::Oval, 0.92),
                score(FaceShape::Heart, 0.74),
                score(FaceShape::Diamond, 0.19),
            ],
            tips: FaceShape::Oval.tips(),
        }
    }

    /// Scores ordered from most to least likely. Equal scores keep their
    /// profile order.
    pub fn ranked(&self) -> Vec<ShapeScore> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Score for one shape, if it was part of the distribution.
    pub fn score_of(&self, shape: FaceShape) -> Option<f64> {
        self.scores.iter().find(|s| s.shape == shape).map(|s| s.score)
    }
}

/// Face shape classifier over a fixed profile table.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Create a classifier, rejecting configs that cannot be evaluated.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a face from its landmarks.
    pub fn classify(
        &self,
        landmarks: &LandmarkSet,
    ) -> std::result::Result<ClassificationResult, ClassificationUnavailable> {
        let measurements = Measurements::from_landmarks(landmarks)?;
        log::debug!(
            "Measured face: length {:.4}, forehead {:.4}, cheek {:.4}, jaw {:.4}",
            measurements.face_length(),
            measurements.forehead_width(),
            measurements.cheek_width(),
            measurements.jaw_width()
        );
        self.classify_ratios(&measurements.ratios())
    }

    /// Score precomputed ratios.
    pub fn classify_ratios(
        &self,
        ratios: &Ratios,
    ) -> std::result::Result<ClassificationResult, ClassificationUnavailable> {
        if !ratios.is_finite() {
            return Err(ClassificationUnavailable::Inconclusive);
        }
        let raw = raw_scores(&self.config.profiles, ratios);
        log::trace!("Raw shape scores: {:?}", raw);

        let scores = normalize(&raw)?;
        let best = select_best(&scores).ok_or(ClassificationUnavailable::Inconclusive)?;
        log::debug!("Classified as {} ({:.1}%)", best.shape, best.score * 100.0);

        Ok(ClassificationResult {
            shape: best.shape,
            confidence: best.score.clamp(0.0, 1.0),
            scores,
            tips: best.shape.tips(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geometry::tests::face;

    #[test]
    fn classifies_oval_face() {
        let classifier = Classifier::default();
        let result = classifier.classify(&face(0.64, 0.36, 0.4, 0.34)).unwrap();

        assert_eq!(result.shape, FaceShape::Oval);
        assert!(result.confidence > 0.3);
        assert_eq!(result.tips, FaceShape::Oval.tips());
        assert_eq!(result.score_of(FaceShape::Oval), Some(result.confidence));

        let order: Vec<_> = result.scores.iter().map(|s| s.shape).collect();
        assert_eq!(order, FaceShape::ALL);

        let sum: f64 = result.scores.iter().map(|s| s.score).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_ratios_are_inconclusive() {
        let classifier = Classifier::default();
        let ratios = Measurements::from_landmarks(&face(0.64, 0.36, 0.4, 0.34))
            .unwrap()
            .ratios();
        assert!(classifier.classify_ratios(&ratios).is_ok());

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let ratios = Ratios { length_to_cheek: bad, ..ratios };
            assert_eq!(
                classifier.classify_ratios(&ratios),
                Err(ClassificationUnavailable::Inconclusive),
                "length/cheek {bad}"
            );
        }
    }

    #[test]
    fn ranked_is_descending() {
        let result = ClassificationResult::demo();
        let ranked = result.ranked();
        assert_eq!(ranked[0].shape, FaceShape::Oval);
        assert_eq!(ranked[1].shape, FaceShape::Heart);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn degenerate_face_is_unavailable() {
        let classifier = Classifier::default();
        let err = classifier.classify(&face(0.6, 0.36, 0.4, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            ClassificationUnavailable::DegenerateMeasurement { .. }
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = ClassifierConfig::default();
        config.profiles[0].bands[0].falloff = -1.0;
        assert!(matches!(
            Classifier::new(config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn custom_profile_order_breaks_ties() {
        // Same bands for both shapes, so both score equally
        let mut config = ClassifierConfig::default();
        let bands = config.profiles[3].bands.clone();
        config.profiles = vec![
            crate::scoring::ShapeProfile::new(FaceShape::Diamond, bands.clone()),
            crate::scoring::ShapeProfile::new(FaceShape::Round, bands),
        ];
        let classifier = Classifier::new(config).unwrap();

        let result = classifier.classify(&face(0.56, 0.36, 0.4, 0.34)).unwrap();
        assert_eq!(result.shape, FaceShape::Diamond);
        assert!((result.confidence - 0.5).abs() < 1e-12);
    }
}
