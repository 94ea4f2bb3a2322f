//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! mod.rs holds re-exports and the JS error conversion.

use wasm_bindgen::JsValue;

mod detector;
mod features;

pub use detector::{get_detector_config, set_detector_config, ConfigError, DetectorConfig};
pub use features::{
    extract_hand_features, feature_names, prepare_dataset, sample_label, PreparedDataset,
};

/// Convert any crate error into a thrown JS `Error`
fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
