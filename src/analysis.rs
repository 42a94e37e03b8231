//! Turning detections into a response for the UI.
//!
//! Classification failures never surface as errors here. Whatever goes wrong
//! upstream or in the classifier, the caller gets the demo result plus an
//! advisory message explaining why.

use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classifier::Classifier;
use crate::remote::normalize_remote;
use crate::report::ShapeReport;
use crate::types::{read_detection, LandmarkSet};

pub const NO_FACE_MESSAGE: &str = "No face detected. Try a clearer, front-facing photo.";
pub const MULTIPLE_FACES_MESSAGE: &str = "Multiple faces detected. Using the most prominent face.";
pub const UNAVAILABLE_MESSAGE: &str = "Unable to compute face shape. Try a clearer photo.";
pub const DETECTION_FAILED_MESSAGE: &str = "Analysis failed. Showing demo results instead.";
pub const REMOTE_UNREADABLE_MESSAGE: &str =
    "Could not read the face analysis response. Showing demo results instead.";

/// Where the reported result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Classified from local landmarks
    Local,
    /// Fixed demo result
    Demo,
    /// Normalized from a remote face analysis service
    Remote,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Local => "local",
            Source::Demo => "demo",
            Source::Remote => "remote",
        })
    }
}

/// Response envelope around a [`ShapeReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub ok: bool,
    pub source: Source,
    pub normalized: ShapeReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    /// Demo result with an advisory.
    pub fn fallback(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            source: Source::Demo,
            normalized: ShapeReport::demo(),
            error: Some(message.into()),
        }
    }

    /// Response for a landmark detector that failed before producing faces.
    pub fn detection_failed(reason: &dyn fmt::Display) -> Self {
        log::warn!("Landmark detection failed: {}", reason);
        Self::fallback(DETECTION_FAILED_MESSAGE)
    }
}

/// Runs the classifier over detector output and packages the response.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    classifier: Classifier,
}

impl Analyzer {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classify the faces found in one image.
    ///
    /// Only the first face is classified; detectors list the most prominent
    /// face first.
    pub fn analyze(&self, faces: &[LandmarkSet]) -> AnalysisResponse {
        let Some(face) = faces.first() else {
            log::warn!("No face in detection, using demo result");
            return AnalysisResponse::fallback(NO_FACE_MESSAGE);
        };

        match self.classifier.classify(face) {
            Ok(result) => AnalysisResponse {
                ok: true,
                source: Source::Local,
                normalized: ShapeReport::from(&result),
                error: (faces.len() > 1).then(|| MULTIPLE_FACES_MESSAGE.to_string()),
            },
            Err(reason) => {
                log::warn!("Face shape unavailable ({}), using demo result", reason);
                AnalysisResponse::fallback(UNAVAILABLE_MESSAGE)
            }
        }
    }

    /// Like [`Analyzer::analyze`], for a detection that may have failed.
    pub fn analyze_detection<E: fmt::Display>(
        &self,
        detection: std::result::Result<Vec<LandmarkSet>, E>,
    ) -> AnalysisResponse {
        match detection {
            Ok(faces) => self.analyze(&faces),
            Err(e) => AnalysisResponse::detection_failed(&e),
        }
    }

    /// Read landmark JSON and analyze it. Input that doesn't parse is a
    /// failed detection.
    pub fn analyze_reader<R: Read>(&self, reader: R) -> AnalysisResponse {
        let faces = read_detection(reader);
        if let Ok(faces) = &faces {
            log::info!("Found {} face(s)", faces.len());
        }
        self.analyze_detection(faces)
    }
}

/// Package a remote service payload.
pub fn analyze_remote(payload: &Value) -> AnalysisResponse {
    match normalize_remote(payload) {
        Some(report) => AnalysisResponse {
            ok: true,
            source: Source::Remote,
            normalized: report,
            error: None,
        },
        None => {
            log::warn!("Remote payload has no usable shape or confidence, using demo result");
            AnalysisResponse {
                ok: true,
                source: Source::Remote,
                normalized: ShapeReport::demo(),
                error: Some(REMOTE_UNREADABLE_MESSAGE.to_string()),
            }
        }
    }
}
