//! Fuzzy scoring of face proportions against shape profiles.
//!
//! Every shape is described by a handful of ratio bands. A band gives full
//! membership inside `[min, max]` and fades linearly to zero over `falloff`
//! on either side. A shape's raw score is the product of its band
//! memberships, so one ratio far outside its band is enough to rule the
//! shape out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassificationUnavailable;
use crate::geometry::{RatioKind, Ratios};

/// The face shape categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceShape {
    Round,
    Square,
    Rectangle,
    Oval,
    Heart,
    Diamond,
}

impl FaceShape {
    /// All shapes in declaration order.
    pub const ALL: [FaceShape; 6] = [
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Rectangle,
        FaceShape::Oval,
        FaceShape::Heart,
        FaceShape::Diamond,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FaceShape::Round => "Round",
            FaceShape::Square => "Square",
            FaceShape::Rectangle => "Rectangle",
            FaceShape::Oval => "Oval",
            FaceShape::Heart => "Heart",
            FaceShape::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FaceShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FaceShape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown face shape: {s:?}"))
    }
}

/// Plateau membership: 1.0 inside `[min, max]`, linear decay to 0.0 over
/// `falloff` outside it. A non-finite value matches nothing.
pub fn membership(value: f64, min: f64, max: f64, falloff: f64) -> f64 {
    if !value.is_finite() {
        0.0
    } else if value < min {
        (1.0 - (min - value) / falloff).clamp(0.0, 1.0)
    } else if value > max {
        (1.0 - (value - max) / falloff).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// An accepted range for one ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub ratio: RatioKind,
    pub min: f64,
    pub max: f64,
    pub falloff: f64,
}

impl Band {
    pub const fn new(ratio: RatioKind, min: f64, max: f64, falloff: f64) -> Self {
        Self {
            ratio,
            min,
            max,
            falloff,
        }
    }

    pub fn membership(&self, ratios: &Ratios) -> f64 {
        membership(ratios.get(self.ratio), self.min, self.max, self.falloff)
    }
}

/// The bands that together define one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeProfile {
    pub shape: FaceShape,
    pub bands: Vec<Band>,
}

impl ShapeProfile {
    pub fn new(shape: FaceShape, bands: Vec<Band>) -> Self {
        Self { shape, bands }
    }

    /// Product of all band memberships.
    pub fn raw_score(&self, ratios: &Ratios) -> f64 {
        self.bands.iter().map(|band| band.membership(ratios)).product()
    }
}

/// A shape paired with its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeScore {
    pub shape: FaceShape,
    pub score: f64,
}

/// Raw, unnormalized scores for every profile, in profile order.
pub fn raw_scores(profiles: &[ShapeProfile], ratios: &Ratios) -> Vec<ShapeScore> {
    profiles
        .iter()
        .map(|profile| ShapeScore {
            shape: profile.shape,
            score: profile.raw_score(ratios),
        })
        .collect()
}

/// Scale raw scores so they sum to one.
///
/// Fails with `Inconclusive` when no shape scored above zero.
pub fn normalize(raw: &[ShapeScore]) -> Result<Vec<ShapeScore>, ClassificationUnavailable> {
    let total: f64 = raw.iter().map(|s| s.score).sum();
    if total <= 0.0 {
        return Err(ClassificationUnavailable::Inconclusive);
    }

    Ok(raw
        .iter()
        .map(|s| ShapeScore {
            shape: s.shape,
            score: (s.score / total).clamp(0.0, 1.0),
        })
        .collect())
}

/// The highest score. Ties go to the earlier entry.
pub fn select_best(scores: &[ShapeScore]) -> Option<ShapeScore> {
    scores.iter().copied().reduce(|best, current| {
        if current.score > best.score {
            current
        } else {
            best
        }
    })
}
