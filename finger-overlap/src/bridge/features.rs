//! Feature extraction entry points for JavaScript
//!
//! JS passes MediaPipe results as flat Float64Arrays (21 landmarks ×
//! x, y, z) and recorded datasets as JSON strings.

use wasm_bindgen::prelude::*;

use crate::classifier::{extract_features, Dataset, Sample, FEATURE_COUNT, FEATURE_NAMES};
use crate::hand::LandmarkSet;

use super::to_js_error;

/// Called from JavaScript with 63 values (21 landmarks × 3 coordinates).
/// Returns the 17-element feature vector or throws on a malformed hand.
#[wasm_bindgen]
pub fn extract_hand_features(data: &[f64]) -> Result<Vec<f64>, JsValue> {
    let landmarks = LandmarkSet::from_flat(data).map_err(to_js_error)?;
    Ok(extract_features(&landmarks).to_vec())
}

/// Column names matching `extract_hand_features` output
#[wasm_bindgen]
pub fn feature_names() -> js_sys::Array {
    FEATURE_NAMES.iter().map(|name| JsValue::from_str(name)).collect()
}

/// Overlap label (0 or 1) for one recorded sample
#[wasm_bindgen]
pub fn sample_label(json: &str) -> Result<u8, JsValue> {
    let sample: Sample = serde_json::from_str(json).map_err(to_js_error)?;
    Ok(sample.label())
}

/// Training data ready to hand to a JS-side model
#[wasm_bindgen]
pub struct PreparedDataset {
    dataset: Dataset,
}

#[wasm_bindgen]
impl PreparedDataset {
    pub fn rows(&self) -> usize {
        self.dataset.len()
    }

    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    /// Row-major, rows() × feature_count() values
    pub fn features(&self) -> Vec<f64> {
        self.dataset.flat_features()
    }

    pub fn labels(&self) -> Vec<u8> {
        self.dataset.labels().to_vec()
    }
}

/// Called from JS with the collector's JSON file contents
#[wasm_bindgen]
pub fn prepare_dataset(json: &str) -> Result<PreparedDataset, JsValue> {
    let dataset = Dataset::from_json(json).map_err(to_js_error)?;
    web_sys::console::log_1(
        &format!("✅ Prepared {} samples ({} overlapping)", dataset.len(), dataset.positives()).into(),
    );
    Ok(PreparedDataset { dataset })
}
