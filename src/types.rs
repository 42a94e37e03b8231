use std::io::Read;

use serde::{Deserialize, Serialize};

/// A 2D point in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let d = *self - *other;
        d.x.hypot(d.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Landmarks for one detected face, indexed by the detector's point scheme.
///
/// Entries may be absent: detectors sometimes emit `null` for points they
/// could not place, and the set is kept positional so indices stay stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    pub points: Vec<Option<Point>>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Option<Point>>) -> Self {
        Self { points }
    }

    /// Create a set of `n` absent landmarks.
    pub fn empty(n: usize) -> Self {
        Self {
            points: vec![None; n],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Look up a landmark. Out-of-range indices, null entries and points with
    /// non-finite coordinates all resolve to `None`.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points
            .get(index)
            .copied()
            .flatten()
            .filter(Point::is_finite)
    }

    /// Place a landmark, growing the set with absent entries if needed.
    pub fn set(&mut self, index: usize, point: Point) {
        if index >= self.points.len() {
            self.points.resize(index + 1, None);
        }
        self.points[index] = Some(point);
    }
}

impl From<Vec<Point>> for LandmarkSet {
    fn from(points: Vec<Point>) -> Self {
        Self {
            points: points.into_iter().map(Some).collect(),
        }
    }
}

/// Landmark input as read from disk: a single face, or a detector's full
/// output with one landmark set per face.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Detection {
    // Tried first: a struct variant would also accept a bare array by position
    Face(LandmarkSet),
    Faces {
        #[serde(rename = "faceLandmarks")]
        face_landmarks: Vec<LandmarkSet>,
    },
}

impl Detection {
    pub fn into_faces(self) -> Vec<LandmarkSet> {
        match self {
            Detection::Face(face) => vec![face],
            Detection::Faces { face_landmarks } => face_landmarks,
        }
    }
}

/// Read landmark JSON (a bare point array or `{"faceLandmarks": [...]}`)
/// into one landmark set per face.
pub fn read_detection<R: Read>(reader: R) -> serde_json::Result<Vec<LandmarkSet>> {
    serde_json::from_reader::<_, Detection>(reader).map(Detection::into_faces)
}
