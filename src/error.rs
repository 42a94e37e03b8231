use thiserror::Error;

use crate::geometry::{LandmarkRole, MeasurementKind};

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid classifier config: {0}")]
    InvalidConfig(String),

    #[error("Classification unavailable: {0}")]
    ClassificationUnavailable(#[from] ClassificationUnavailable),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a landmark set could not be classified.
///
/// These are expected outcomes for poor detections, not faults. Callers
/// substitute the demo result when they see one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationUnavailable {
    #[error("landmark {index} ({role}) is missing")]
    MissingLandmark { index: usize, role: LandmarkRole },

    #[error("{measurement} has zero length")]
    DegenerateMeasurement { measurement: MeasurementKind },

    #[error("no face shape matches the measured proportions")]
    Inconclusive,
}
