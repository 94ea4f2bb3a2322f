//! Projection spread - peak-to-peak range on the xy, xz and zy planes
//!
//! Works on raw axis coordinates, so it changes when the hand rotates
//! relative to the camera. Trained models depend on that signal as-is.

use crate::hand::LandmarkPoint;

use super::NormalizedLandmarkSet;

/// Two ranges for each of the three projection planes
pub const SPREAD_COUNT: usize = 6;

/// Peak-to-peak (max - min) of one coordinate across all points
fn ptp(points: &[LandmarkPoint], axis: fn(&LandmarkPoint) -> f64) -> f64 {
    let (min, max) = points
        .iter()
        .map(axis)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    max - min
}

/// Ranges of all 21 points, ordered:
/// [x on xy, y on xy, x on xz, z on xz, y on zy, z on zy]
pub fn projection_spread(points: &NormalizedLandmarkSet) -> [f64; SPREAD_COUNT] {
    let points = points.points();
    let x = ptp(points, |p| p.x);
    let y = ptp(points, |p| p.y);
    let z = ptp(points, |p| p.z);

    [
        x, y, // xy plane
        x, z, // xz plane
        y, z, // zy plane
    ]
}
