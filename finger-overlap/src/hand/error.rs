//! Errors raised by the landmark → feature transform.

use thiserror::Error;

/// Contract violations on the landmark input.
///
/// Singular-but-legal poses (all points on the wrist, zero-length bones)
/// are not errors; the geometry falls back to zero values for those.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// Landmark set does not hold exactly 21 points.
    #[error("Invalid landmark count: expected {expected}, actual {actual}")]
    InvalidLandmarkCount {
        expected: usize,
        actual: usize,
    },

    /// Flat coordinate buffer is not made of whole (x, y, z) triples.
    #[error("Malformed coordinates: {len} values is not a multiple of 3")]
    MalformedCoordinates { len: usize },

    /// A landmark carries NaN or an infinite coordinate.
    #[error("Non-finite coordinate at landmark {index}")]
    NonFiniteCoordinate { index: usize },
}

impl FeatureError {
    pub fn invalid_count(actual: usize) -> Self {
        Self::InvalidLandmarkCount {
            expected: super::LANDMARK_COUNT,
            actual,
        }
    }
}
