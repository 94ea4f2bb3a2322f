//! Landmark points and the 21-point hand set
//!
//! Index layout follows MediaPipe Hands: wrist at 0, then four
//! landmarks per finger from the base joint out to the tip.

use std::ops::{Div, Sub};

use serde::{Deserialize, Serialize};

use super::FeatureError;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Fingertips in thumb → pinky order
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 3D hand landmark
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f64, // image-normalized
    pub y: f64, // image-normalized
    pub z: f64, // depth relative to the wrist
}

impl LandmarkPoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length of the point as a vector from the origin.
    /// `hypot` keeps large coordinates from overflowing the squares.
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).norm()
    }
}

impl Sub for LandmarkPoint {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Div<f64> for LandmarkPoint {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self { x: self.x / rhs, y: self.y / rhs, z: self.z / rhs }
    }
}

/// Exactly 21 landmarks for one detected hand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkSet {
    points: [LandmarkPoint; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(points: [LandmarkPoint; LANDMARK_COUNT]) -> Result<Self, FeatureError> {
        Self::from_points(&points)
    }

    /// Build from a detector's point list. Anything but 21 finite points is
    /// rejected, never padded or truncated.
    pub fn from_points(points: &[LandmarkPoint]) -> Result<Self, FeatureError> {
        let points: [LandmarkPoint; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| FeatureError::invalid_count(points.len()))?;
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(FeatureError::NonFiniteCoordinate { index });
        }
        Ok(Self { points })
    }

    /// Build from a flat buffer of interleaved x, y, z values
    /// (63 values, as MediaPipe results arrive from JavaScript).
    pub fn from_flat(data: &[f64]) -> Result<Self, FeatureError> {
        if data.len() % 3 != 0 {
            return Err(FeatureError::MalformedCoordinates { len: data.len() });
        }
        let points: Vec<LandmarkPoint> = data
            .chunks_exact(3)
            .map(|c| LandmarkPoint::new(c[0], c[1], c[2]))
            .collect();
        Self::from_points(&points)
    }

    pub fn points(&self) -> &[LandmarkPoint; LANDMARK_COUNT] {
        &self.points
    }

    pub fn wrist(&self) -> LandmarkPoint {
        self.points[WRIST]
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = LandmarkPoint;
    fn index(&self, index: usize) -> &LandmarkPoint {
        &self.points[index]
    }
}

impl TryFrom<&[LandmarkPoint]> for LandmarkSet {
    type Error = FeatureError;
    fn try_from(points: &[LandmarkPoint]) -> Result<Self, FeatureError> {
        Self::from_points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_requires_21() {
        let short = vec![LandmarkPoint::ORIGIN; 20];
        assert_eq!(
            LandmarkSet::from_points(&short),
            Err(FeatureError::InvalidLandmarkCount { expected: 21, actual: 20 })
        );

        let long = vec![LandmarkPoint::ORIGIN; 22];
        assert_eq!(
            LandmarkSet::from_points(&long),
            Err(FeatureError::InvalidLandmarkCount { expected: 21, actual: 22 })
        );

        let exact = vec![LandmarkPoint::new(0.1, 0.2, 0.3); 21];
        assert!(LandmarkSet::from_points(&exact).is_ok());
    }

    #[test]
    fn test_from_flat() {
        let mut data = vec![0.0; 63];
        data[INDEX_TIP * 3] = 0.5;
        data[INDEX_TIP * 3 + 1] = 0.25;
        data[INDEX_TIP * 3 + 2] = -0.1;
        let set = LandmarkSet::from_flat(&data).unwrap();
        assert_eq!(set[INDEX_TIP], LandmarkPoint::new(0.5, 0.25, -0.1));
        assert_eq!(set.wrist(), LandmarkPoint::ORIGIN);
    }

    #[test]
    fn test_from_flat_rejects_bad_lengths() {
        assert_eq!(
            LandmarkSet::from_flat(&[0.0; 62]),
            Err(FeatureError::MalformedCoordinates { len: 62 })
        );
        assert_eq!(
            LandmarkSet::from_flat(&[0.0; 60]),
            Err(FeatureError::InvalidLandmarkCount { expected: 21, actual: 20 })
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut data = vec![0.1; 63];
        data[INDEX_PIP * 3] = f64::NAN;
        assert_eq!(
            LandmarkSet::from_flat(&data),
            Err(FeatureError::NonFiniteCoordinate { index: INDEX_PIP })
        );

        let mut points = vec![LandmarkPoint::new(0.2, 0.3, 0.0); 21];
        points[PINKY_TIP].z = f64::INFINITY;
        assert_eq!(
            LandmarkSet::from_points(&points),
            Err(FeatureError::NonFiniteCoordinate { index: PINKY_TIP })
        );
        points[PINKY_TIP].z = f64::NEG_INFINITY;
        assert!(LandmarkSet::from_points(&points).is_err());
    }

    #[test]
    fn test_norm_of_huge_coordinates() {
        let p = LandmarkPoint::new(3e300, 4e300, 0.0);
        assert!(p.norm().is_finite());
        assert!((p.norm() / 5e300 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_math() {
        let a = LandmarkPoint::new(3.0, 4.0, 0.0);
        let b = LandmarkPoint::new(0.0, 0.0, 0.0);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a / 5.0, LandmarkPoint::new(0.6, 0.8, 0.0));
        assert_eq!(a.dot(LandmarkPoint::new(1.0, 1.0, 1.0)), 7.0);
    }
}
