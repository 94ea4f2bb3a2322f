//! Geometry module - pure landmark transforms
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod distances;
mod normalize;
mod spread;

pub use angles::{compute_angle, INDEX_ANGLE_TRIPLE};
pub use distances::{fingertip_distances, TIP_PAIRS, TIP_PAIR_COUNT};
pub use normalize::{normalize_landmarks, NormalizedLandmarkSet};
pub use spread::{projection_spread, SPREAD_COUNT};
