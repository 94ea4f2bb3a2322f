//! Wrist-relative normalization
//!
//! Moves the wrist to the origin and divides by the largest wrist
//! distance, so features ignore where the hand is and how big it looks.

use crate::hand::{LandmarkPoint, LandmarkSet, LANDMARK_COUNT};

/// Landmarks in the wrist frame, scaled so the farthest point has norm 1
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedLandmarkSet {
    points: [LandmarkPoint; LANDMARK_COUNT],
}

impl NormalizedLandmarkSet {
    pub fn points(&self) -> &[LandmarkPoint; LANDMARK_COUNT] {
        &self.points
    }
}

impl std::ops::Index<usize> for NormalizedLandmarkSet {
    type Output = LandmarkPoint;
    fn index(&self, index: usize) -> &LandmarkPoint {
        &self.points[index]
    }
}

/// Translate to the wrist frame and rescale by the maximum wrist distance.
///
/// When every point sits on the wrist the scale is zero and the
/// translated (all-zero) points are returned undivided.
///
/// Coordinates must be finite (`LandmarkSet` guarantees it). Norms use
/// `hypot`, so only wrist offsets beyond `f64::MAX` overflow the scale.
pub fn normalize_landmarks(landmarks: &LandmarkSet) -> NormalizedLandmarkSet {
    let wrist = landmarks.wrist();
    let mut points = landmarks.points().map(|p| p - wrist);

    let scale = points.iter().map(|p| p.norm()).fold(0.0, f64::max);
    if scale > 0.0 {
        for p in points.iter_mut() {
            *p = *p / scale;
        }
    }

    NormalizedLandmarkSet { points }
}
