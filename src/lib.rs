//! # face-shape
//!
//! Face shape classification from 2D facial landmarks.
//!
//! This crate provides:
//! - **Measurements**: face length and forehead, cheekbone and jaw widths
//!   taken from eight points of a 468-point face mesh
//! - **Classification**: fuzzy scoring of the resulting proportions against
//!   six shapes (Round, Square, Rectangle, Oval, Heart, Diamond)
//! - **Reports**: a normalized confidence distribution with style tips, a
//!   demo fallback, and normalization of third-party service responses
//!
//! Landmark detection itself is out of scope. Feed the classifier the points
//! produced by any detector that follows the face mesh index scheme, in
//! normalized image coordinates.
//!
//! ## Algorithm Overview
//!
//! 1. Measure the four distances between the required landmarks
//! 2. Derive dimensionless ratios (length/cheek, forehead/jaw, ...)
//! 3. Score each shape as the product of plateau memberships of its ratios
//! 4. Normalize the scores to sum to one and pick the highest
//!
//! ## Quick Start
//!
//! ```rust
//! use face_shape::{Classifier, FaceShape, LandmarkRole, LandmarkSet, Point};
//!
//! // Place the eight points a detector would report for a long, tapered face
//! let mut landmarks = LandmarkSet::empty(468);
//! let points = [
//!     (LandmarkRole::Top, Point::new(0.5, 0.1)),
//!     (LandmarkRole::Chin, Point::new(0.5, 0.74)),
//!     (LandmarkRole::ForeheadLeft, Point::new(0.32, 0.25)),
//!     (LandmarkRole::ForeheadRight, Point::new(0.68, 0.25)),
//!     (LandmarkRole::CheekLeft, Point::new(0.3, 0.4)),
//!     (LandmarkRole::CheekRight, Point::new(0.7, 0.4)),
//!     (LandmarkRole::JawLeft, Point::new(0.33, 0.6)),
//!     (LandmarkRole::JawRight, Point::new(0.67, 0.6)),
//! ];
//! for (role, point) in points {
//!     landmarks.set(role.index(), point);
//! }
//!
//! let classifier = Classifier::default();
//! let result = classifier.classify(&landmarks).unwrap();
//! assert_eq!(result.shape, FaceShape::Oval);
//! println!("{} ({:.0}%)", result.shape, result.confidence * 100.0);
//! for tip in result.tips {
//!     println!("- {tip}");
//! }
//! ```
//!
//! ## Falling Back
//!
//! Poor detections make classification unavailable rather than failing
//! loudly. [`Analyzer`] wraps the classifier and always yields something to
//! show, substituting the demo result with an advisory message:
//!
//! ```rust
//! use face_shape::{Analyzer, LandmarkSet, Source};
//!
//! let response = Analyzer::default().analyze(&[LandmarkSet::empty(10)]);
//! assert_eq!(response.source, Source::Demo);
//! assert!(response.error.is_some());
//! ```

mod analysis;
mod classifier;
mod config;
mod error;
mod geometry;
mod remote;
mod report;
mod scoring;
mod tips;
mod types;

pub use analysis::{
    analyze_remote, AnalysisResponse, Analyzer, Source, DETECTION_FAILED_MESSAGE,
    MULTIPLE_FACES_MESSAGE, NO_FACE_MESSAGE, REMOTE_UNREADABLE_MESSAGE, UNAVAILABLE_MESSAGE,
};
pub use classifier::{ClassificationResult, Classifier};
pub use config::ClassifierConfig;
pub use error::{ClassificationUnavailable, Error, Result};
pub use geometry::{LandmarkRole, MeasurementKind, Measurements, RatioKind, Ratios};
pub use remote::normalize_remote;
pub use report::{percent, LabeledScore, ShapeReport};
pub use scoring::{
    membership, normalize, raw_scores, select_best, Band, FaceShape, ShapeProfile, ShapeScore,
};
pub use tips::GENERIC_TIPS;
pub use types::{read_detection, Detection, LandmarkSet, Point};
