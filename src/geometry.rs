//! Facial measurements and proportions.
//!
//! This module turns the eight landmarks that outline a face (hairline, chin
//! and the left/right edges of forehead, cheekbones and jaw) into four
//! distances and the dimensionless ratios the shape scorer works on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClassificationUnavailable;
use crate::types::LandmarkSet;

/// The anatomical points read from a landmark set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkRole {
    Top,
    Chin,
    ForeheadLeft,
    ForeheadRight,
    CheekLeft,
    CheekRight,
    JawLeft,
    JawRight,
}

impl LandmarkRole {
    pub const ALL: [LandmarkRole; 8] = [
        LandmarkRole::Top,
        LandmarkRole::Chin,
        LandmarkRole::ForeheadLeft,
        LandmarkRole::ForeheadRight,
        LandmarkRole::CheekLeft,
        LandmarkRole::CheekRight,
        LandmarkRole::JawLeft,
        LandmarkRole::JawRight,
    ];

    /// Index of this point in the 468-point face mesh.
    pub const fn index(self) -> usize {
        match self {
            LandmarkRole::Top => 10,
            LandmarkRole::Chin => 152,
            LandmarkRole::ForeheadLeft => 127,
            LandmarkRole::ForeheadRight => 356,
            LandmarkRole::CheekLeft => 234,
            LandmarkRole::CheekRight => 454,
            LandmarkRole::JawLeft => 172,
            LandmarkRole::JawRight => 397,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            LandmarkRole::Top => "top of forehead",
            LandmarkRole::Chin => "chin",
            LandmarkRole::ForeheadLeft => "left forehead",
            LandmarkRole::ForeheadRight => "right forehead",
            LandmarkRole::CheekLeft => "left cheekbone",
            LandmarkRole::CheekRight => "right cheekbone",
            LandmarkRole::JawLeft => "left jaw",
            LandmarkRole::JawRight => "right jaw",
        }
    }
}

impl fmt::Display for LandmarkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four distances measured on a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    FaceLength,
    ForeheadWidth,
    CheekWidth,
    JawWidth,
}

impl MeasurementKind {
    /// The landmark pair spanning this measurement.
    pub const fn endpoints(self) -> (LandmarkRole, LandmarkRole) {
        match self {
            MeasurementKind::FaceLength => (LandmarkRole::Top, LandmarkRole::Chin),
            MeasurementKind::ForeheadWidth => {
                (LandmarkRole::ForeheadLeft, LandmarkRole::ForeheadRight)
            }
            MeasurementKind::CheekWidth => (LandmarkRole::CheekLeft, LandmarkRole::CheekRight),
            MeasurementKind::JawWidth => (LandmarkRole::JawLeft, LandmarkRole::JawRight),
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MeasurementKind::FaceLength => "face length",
            MeasurementKind::ForeheadWidth => "forehead width",
            MeasurementKind::CheekWidth => "cheekbone width",
            MeasurementKind::JawWidth => "jaw width",
        })
    }
}

/// Linear face measurements, in the same units as the landmarks.
///
/// Only [`Measurements::from_landmarks`] builds these, so every value is
/// strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurements {
    /// Hairline to chin
    face_length: f64,
    forehead_width: f64,
    cheek_width: f64,
    jaw_width: f64,
}

impl Measurements {
    /// Measure a face from its landmarks.
    ///
    /// Fails with `MissingLandmark` if a required point is out of range, null
    /// or non-finite, and with `DegenerateMeasurement` if two endpoints
    /// coincide.
    pub fn from_landmarks(landmarks: &LandmarkSet) -> Result<Self, ClassificationUnavailable> {
        let point = |role: LandmarkRole| {
            landmarks
                .get(role.index())
                .ok_or(ClassificationUnavailable::MissingLandmark {
                    index: role.index(),
                    role,
                })
        };

        // All points must be present before anything is measured
        for role in LandmarkRole::ALL {
            point(role)?;
        }

        let measure = |kind: MeasurementKind| {
            let (a, b) = kind.endpoints();
            let d = point(a)?.distance(&point(b)?);
            // Coordinates large enough to overflow are as unusable as coincident ones
            if d > 0.0 && d.is_finite() {
                Ok(d)
            } else {
                Err(ClassificationUnavailable::DegenerateMeasurement { measurement: kind })
            }
        };

        Ok(Self {
            face_length: measure(MeasurementKind::FaceLength)?,
            forehead_width: measure(MeasurementKind::ForeheadWidth)?,
            cheek_width: measure(MeasurementKind::CheekWidth)?,
            jaw_width: measure(MeasurementKind::JawWidth)?,
        })
    }

    pub fn face_length(&self) -> f64 {
        self.face_length
    }

    pub fn forehead_width(&self) -> f64 {
        self.forehead_width
    }

    pub fn cheek_width(&self) -> f64 {
        self.cheek_width
    }

    pub fn jaw_width(&self) -> f64 {
        self.jaw_width
    }

    pub fn get(&self, kind: MeasurementKind) -> f64 {
        match kind {
            MeasurementKind::FaceLength => self.face_length,
            MeasurementKind::ForeheadWidth => self.forehead_width,
            MeasurementKind::CheekWidth => self.cheek_width,
            MeasurementKind::JawWidth => self.jaw_width,
        }
    }

    pub fn widest(&self) -> f64 {
        self.forehead_width.max(self.cheek_width).max(self.jaw_width)
    }

    pub fn narrowest(&self) -> f64 {
        self.forehead_width.min(self.cheek_width).min(self.jaw_width)
    }

    pub fn ratios(&self) -> Ratios {
        Ratios::from_measurements(self)
    }
}

/// Names for the entries of [`Ratios`], used by the scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    LengthToCheek,
    ForeheadToJaw,
    CheekToJaw,
    JawToCheek,
    ForeheadToCheek,
    CheekToForehead,
    WidthSpread,
}

impl fmt::Display for RatioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RatioKind::LengthToCheek => "length/cheek",
            RatioKind::ForeheadToJaw => "forehead/jaw",
            RatioKind::CheekToJaw => "cheek/jaw",
            RatioKind::JawToCheek => "jaw/cheek",
            RatioKind::ForeheadToCheek => "forehead/cheek",
            RatioKind::CheekToForehead => "cheek/forehead",
            RatioKind::WidthSpread => "width spread",
        })
    }
}

/// Dimensionless face proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratios {
    pub length_to_cheek: f64,
    pub forehead_to_jaw: f64,
    pub cheek_to_jaw: f64,
    pub jaw_to_cheek: f64,
    pub forehead_to_cheek: f64,
    pub cheek_to_forehead: f64,
    /// Widest of the three widths over the narrowest; 1.0 when all are equal
    pub width_spread: f64,
}

impl Ratios {
    pub fn from_measurements(m: &Measurements) -> Self {
        Self {
            length_to_cheek: m.face_length / m.cheek_width,
            forehead_to_jaw: m.forehead_width / m.jaw_width,
            cheek_to_jaw: m.cheek_width / m.jaw_width,
            jaw_to_cheek: m.jaw_width / m.cheek_width,
            forehead_to_cheek: m.forehead_width / m.cheek_width,
            cheek_to_forehead: m.cheek_width / m.forehead_width,
            width_spread: m.widest() / m.narrowest(),
        }
    }

    pub fn get(&self, kind: RatioKind) -> f64 {
        match kind {
            RatioKind::LengthToCheek => self.length_to_cheek,
            RatioKind::ForeheadToJaw => self.forehead_to_jaw,
            RatioKind::CheekToJaw => self.cheek_to_jaw,
            RatioKind::JawToCheek => self.jaw_to_cheek,
            RatioKind::ForeheadToCheek => self.forehead_to_cheek,
            RatioKind::CheekToForehead => self.cheek_to_forehead,
            RatioKind::WidthSpread => self.width_spread,
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.length_to_cheek,
            self.forehead_to_jaw,
            self.cheek_to_jaw,
            self.jaw_to_cheek,
            self.forehead_to_cheek,
            self.cheek_to_forehead,
            self.width_spread,
        ]
        .iter()
        .all(|r| r.is_finite())
    }
}
