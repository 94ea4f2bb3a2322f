//! Joint angle calculation using dot product
//!
//! Computes the angle at a vertex landmark from the two bone
//! vectors that meet there.

use crate::hand::{LandmarkPoint, INDEX_DIP, INDEX_MCP, INDEX_PIP};

/// Index finger MCP → PIP → DIP, the curvature signal in the feature vector
pub const INDEX_ANGLE_TRIPLE: (usize, usize, usize) = (INDEX_MCP, INDEX_PIP, INDEX_DIP);

/// Angle at `p2` between `p1` and `p3`, in radians
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns an angle in [0, π]:
/// - 0 = folded back on itself (or a zero-length bone)
/// - π = straight
pub fn compute_angle(p1: LandmarkPoint, p2: LandmarkPoint, p3: LandmarkPoint) -> f64 {
    let v1 = p1 - p2;
    let v2 = p3 - p2;

    let norm_prod = v1.norm() * v2.norm();

    // Handle degenerate case
    if norm_prod == 0.0 {
        return 0.0;
    }

    // Rounding can push the ratio just past ±1
    let cos_angle = (v1.dot(v2) / norm_prod).clamp(-1.0, 1.0);

    cos_angle.acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_straight_finger() {
        let a = LandmarkPoint::new(0.0, 0.0, 0.0);
        let b = LandmarkPoint::new(0.5, 0.0, 0.0);
        let c = LandmarkPoint::new(1.0, 0.0, 0.0);
        assert!((compute_angle(a, b, c) - PI).abs() < 1e-9);
    }

    #[test]
    fn test_right_angle() {
        let a = LandmarkPoint::new(1.0, 0.0, 0.0);
        let b = LandmarkPoint::new(1.0, 1.0, 0.0);
        let c = LandmarkPoint::new(2.0, 1.0, 0.0);
        assert!((compute_angle(a, b, c) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_bone() {
        let a = LandmarkPoint::new(0.2, 0.2, 0.2);
        let c = LandmarkPoint::new(0.9, 0.1, 0.0);
        assert_eq!(compute_angle(a, a, c), 0.0);
        assert_eq!(compute_angle(c, a, a), 0.0);
    }

    #[test]
    fn test_nearly_collinear_stays_in_range() {
        let a = LandmarkPoint::new(0.1, 0.1, 0.1);
        let b = LandmarkPoint::new(0.3, 0.3, 0.3);
        let c = LandmarkPoint::new(0.7, 0.7, 0.7);
        let angle = compute_angle(a, b, c);
        assert!(!angle.is_nan());
        assert!((0.0..=PI).contains(&angle));
    }
}
