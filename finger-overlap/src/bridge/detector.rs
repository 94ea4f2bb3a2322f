//! Hand detector settings handed to the JavaScript capture side
//!
//! MediaPipe Hands runs in JS. These settings are read once when the
//! detector is created; feature extraction never looks at them.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;

use super::to_js_error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Detector config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Detector config {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// MediaPipe Hands options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorConfig {
    /// Treat every frame as an unrelated image (no tracking between frames)
    pub static_image_mode: bool,
    pub max_num_hands: u32,
    pub min_detection_confidence: f64,
    pub min_tracking_confidence: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            static_image_mode: true,
            max_num_hands: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.5,
        }
    }
}

impl DetectorConfig {
    /// Parse and validate; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_num_hands < 1 {
            return Err(ConfigError::OutOfRange {
                field: "maxNumHands",
                value: self.max_num_hands as f64,
            });
        }
        for (field, value) in [
            ("minDetectionConfidence", self.min_detection_confidence),
            ("minTrackingConfidence", self.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

thread_local! {
    static DETECTOR_CONFIG: RefCell<DetectorConfig> = RefCell::new(DetectorConfig::default());
}

// ============================================================================
// WASM API
// ============================================================================

/// Called from JS at startup to override detector options
#[wasm_bindgen]
pub fn set_detector_config(json: &str) -> Result<(), JsValue> {
    let config = DetectorConfig::from_json(json).map_err(to_js_error)?;
    web_sys::console::log_1(&format!("🖐️ Detector config: {config:?}").into());
    DETECTOR_CONFIG.with(|cell| *cell.borrow_mut() = config);
    Ok(())
}

/// Current detector options as JSON (camelCase keys, MediaPipe naming)
#[wasm_bindgen]
pub fn get_detector_config() -> Result<String, JsValue> {
    DETECTOR_CONFIG.with(|cell| cell.borrow().to_json().map_err(to_js_error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DetectorConfig::default();
        assert!(config.static_image_mode);
        assert_eq!(config.max_num_hands, 1);
        assert_eq!(config.min_detection_confidence, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DetectorConfig::from_json(r#"{ "maxNumHands": 2 }"#).unwrap();
        assert_eq!(config.max_num_hands, 2);
        assert_eq!(config.min_tracking_confidence, 0.5);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            DetectorConfig::from_json(r#"{ "minDetectionConfidence": 1.5 }"#),
            Err(ConfigError::OutOfRange { field: "minDetectionConfidence", .. })
        ));
        assert!(matches!(
            DetectorConfig::from_json(r#"{ "maxNumHands": 0 }"#),
            Err(ConfigError::OutOfRange { field: "maxNumHands", .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = DetectorConfig {
            static_image_mode: false,
            max_num_hands: 2,
            ..DetectorConfig::default()
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"staticImageMode\":false"));
        assert_eq!(DetectorConfig::from_json(&json).unwrap(), config);
    }
}
