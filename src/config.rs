//! Classifier configuration.
//!
//! The band thresholds are empirical. They live in a plain table so they can
//! be tuned or replaced from a JSON file without touching the scoring code.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::RatioKind::{
    CheekToForehead, CheekToJaw, ForeheadToCheek, ForeheadToJaw, JawToCheek, LengthToCheek,
    WidthSpread,
};
use crate::scoring::{Band, FaceShape, ShapeProfile};

/// Shape profiles used by the classifier.
///
/// Profile order matters: it is the order of the reported distribution and
/// decides ties between equally scored shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub profiles: Vec<ShapeProfile>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            profiles: vec![
                ShapeProfile::new(
                    FaceShape::Round,
                    vec![
                        Band::new(LengthToCheek, 0.95, 1.2, 0.2),
                        Band::new(WidthSpread, 1.0, 1.12, 0.12),
                        Band::new(JawToCheek, 0.9, 1.05, 0.15),
                    ],
                ),
                ShapeProfile::new(
                    FaceShape::Square,
                    vec![
                        Band::new(LengthToCheek, 1.1, 1.3, 0.2),
                        Band::new(WidthSpread, 1.0, 1.1, 0.12),
                        Band::new(ForeheadToJaw, 0.95, 1.05, 0.12),
                    ],
                ),
                ShapeProfile::new(
                    FaceShape::Rectangle,
                    vec![
                        Band::new(LengthToCheek, 1.5, 1.85, 0.25),
                        Band::new(WidthSpread, 1.0, 1.12, 0.12),
                        Band::new(JawToCheek, 0.9, 1.05, 0.15),
                        Band::new(ForeheadToJaw, 0.95, 1.05, 0.12),
                    ],
                ),
                ShapeProfile::new(
                    FaceShape::Oval,
                    vec![
                        Band::new(LengthToCheek, 1.3, 1.6, 0.25),
                        Band::new(JawToCheek, 0.8, 0.95, 0.15),
                        Band::new(ForeheadToCheek, 0.85, 1.0, 0.15),
                    ],
                ),
                ShapeProfile::new(
                    FaceShape::Heart,
                    vec![
                        Band::new(LengthToCheek, 1.2, 1.5, 0.25),
                        Band::new(ForeheadToJaw, 1.08, 1.25, 0.18),
                        Band::new(JawToCheek, 0.75, 0.9, 0.15),
                    ],
                ),
                ShapeProfile::new(
                    FaceShape::Diamond,
                    vec![
                        Band::new(LengthToCheek, 1.2, 1.5, 0.3),
                        Band::new(CheekToForehead, 1.05, 1.2, 0.18),
                        Band::new(CheekToJaw, 1.05, 1.25, 0.2),
                    ],
                ),
            ],
        }
    }
}

impl ClassifierConfig {
    /// Load and validate a config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Check that every band can be evaluated and every shape appears once.
    pub fn validate(&self) -> Result<()> {
        if self.profiles.is_empty() {
            return Err(Error::InvalidConfig("no shape profiles".into()));
        }

        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.shape) {
                return Err(Error::InvalidConfig(format!(
                    "{} is listed more than once",
                    profile.shape
                )));
            }
            if profile.bands.is_empty() {
                return Err(Error::InvalidConfig(format!("{} has no bands", profile.shape)));
            }

            for band in &profile.bands {
                if !(band.min.is_finite() && band.max.is_finite() && band.falloff.is_finite()) {
                    return Err(Error::InvalidConfig(format!(
                        "{} {} band has non-finite bounds",
                        profile.shape, band.ratio
                    )));
                }
                if band.min > band.max {
                    return Err(Error::InvalidConfig(format!(
                        "{} {} band has min {} above max {}",
                        profile.shape, band.ratio, band.min, band.max
                    )));
                }
                if band.falloff <= 0.0 {
                    return Err(Error::InvalidConfig(format!(
                        "{} {} band needs a positive falloff, got {}",
                        profile.shape, band.ratio, band.falloff
                    )));
                }
            }
        }

        Ok(())
    }
}
