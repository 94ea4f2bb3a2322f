//! Finger Overlap - hand landmark features for overlap classification
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! MediaPipe Hands runs in JavaScript; Rust turns its 21 landmarks into
//! the 17-value feature vector the overlap classifier is trained on.

mod bridge;
pub mod classifier;
pub mod geometry;
pub mod hand;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    extract_hand_features, feature_names, get_detector_config, prepare_dataset, sample_label,
    set_detector_config, ConfigError, DetectorConfig, PreparedDataset,
};
pub use classifier::{extract_features, extract_features_from_points, FeatureVector, FEATURE_COUNT};
pub use hand::{FeatureError, LandmarkPoint, LandmarkSet};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!(
        "✅ finger-overlap ready ({} features per hand)",
        classifier::FEATURE_COUNT
    );
}
