//! Feature extraction for finger-overlap classification
//!
//! Extracts 17 features per hand matching the training data format.

use log::trace;

use crate::geometry::{
    compute_angle, fingertip_distances, normalize_landmarks, projection_spread,
    INDEX_ANGLE_TRIPLE, SPREAD_COUNT, TIP_PAIR_COUNT,
};
use crate::hand::{FeatureError, LandmarkPoint, LandmarkSet};

/// Number of features per hand
pub const FEATURE_COUNT: usize = 1 + TIP_PAIR_COUNT + SPREAD_COUNT;

/// Positional layout of the feature vector
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Column names, in feature order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "index_pip_angle",
    "dist_thumb_index",
    "dist_thumb_middle",
    "dist_thumb_ring",
    "dist_thumb_pinky",
    "dist_index_middle",
    "dist_index_ring",
    "dist_index_pinky",
    "dist_middle_ring",
    "dist_middle_pinky",
    "dist_ring_pinky",
    "xy_range_x",
    "xy_range_y",
    "xz_range_x",
    "xz_range_z",
    "zy_range_y",
    "zy_range_z",
];

/// Extract 17 features from one hand's landmarks
///
/// Features:
/// - 0: index finger angle at landmark 6 (radians, 0-π)
/// - 1-10: fingertip distances, pairs (4,8) (4,12) (4,16) (4,20) (8,12)
///   (8,16) (8,20) (12,16) (12,20) (16,20)
/// - 11-16: projection ranges x,y on xy / x,z on xz / y,z on zy
///
/// Distances and ranges are in wrist-normalized units.
pub fn extract_features(landmarks: &LandmarkSet) -> FeatureVector {
    let points = normalize_landmarks(landmarks);

    let (a, b, c) = INDEX_ANGLE_TRIPLE;
    let angle = compute_angle(points[a], points[b], points[c]);
    let distances = fingertip_distances(&points);
    let spread = projection_spread(&points);

    let mut features = [0.0; FEATURE_COUNT];
    features[0] = angle;
    features[1..1 + TIP_PAIR_COUNT].copy_from_slice(&distances);
    features[1 + TIP_PAIR_COUNT..].copy_from_slice(&spread);

    trace!("extracted features: {features:?}");
    features
}

/// Validate a detector point list and extract its features.
///
/// Fails with `InvalidLandmarkCount` unless exactly 21 points are given.
pub fn extract_features_from_points(points: &[LandmarkPoint]) -> Result<FeatureVector, FeatureError> {
    let landmarks = LandmarkSet::from_points(points)?;
    Ok(extract_features(&landmarks))
}
