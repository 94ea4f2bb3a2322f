//! Dataset loading - recorded samples → feature rows + overlap labels
//!
//! Reads the collector's JSON output: either a list of samples or a
//! single sample object. Samples without landmarks are skipped.

use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::hand::{FeatureError, Finger, LandmarkPoint};

use super::features::{extract_features_from_points, FeatureVector, FEATURE_COUNT};

/// Marks "top finger > bottom finger" in an instruction string
pub const OVERLAP_MARKER: char = '>';

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sample {index}: {source}")]
    Sample {
        index: usize,
        #[source]
        source: FeatureError,
    },
}

/// One recorded sample, as written by the collector
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    pub instruction: Option<String>,
    pub top_finger: Option<String>,
    pub bottom_finger: Option<String>,
    pub timestamp: Option<String>,
    /// Null when the detector saw no hand during capture
    pub landmarks: Option<Vec<LandmarkPoint>>,
    /// Explicit label; overrides the instruction heuristic whenever the
    /// key is present, even as null (which reads as false)
    #[serde(deserialize_with = "truthy", skip_serializing_if = "Option::is_none")]
    pub overlap: Option<bool>,
}

/// Present `overlap` values in the collector's loose JSON: null, 0 and
/// empty strings/containers are false, anything else is true.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let flag = match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    };
    Ok(Some(flag))
}

impl Sample {
    /// Overlap label: explicit `overlap` field when present, otherwise 1
    /// if the instruction contains '>', otherwise 0.
    pub fn label(&self) -> u8 {
        match self.overlap {
            Some(overlap) => overlap as u8,
            None => self
                .instruction
                .as_deref()
                .is_some_and(|s| s.contains(OVERLAP_MARKER)) as u8,
        }
    }

    /// Landmarks when the sample carries any
    pub fn landmarks(&self) -> Option<&[LandmarkPoint]> {
        self.landmarks.as_deref().filter(|l| !l.is_empty())
    }

    /// (top, bottom) fingers named by the instruction
    pub fn fingers(&self) -> Option<(Finger, Finger)> {
        parse_instruction(self.instruction.as_deref()?)
    }
}

/// Split "ring4>middle3" into (top, bottom) fingers
pub fn parse_instruction(instruction: &str) -> Option<(Finger, Finger)> {
    let (top, bottom) = instruction.split_once(OVERLAP_MARKER)?;
    Some((top.parse().ok()?, bottom.parse().ok()?))
}

/// Feature rows and labels, row-aligned
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    features: Vec<FeatureVector>,
    labels: Vec<u8>,
}

impl Dataset {
    /// Parse collector JSON and extract features for every usable sample
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(json)?;
        let samples: Vec<Sample> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            vec![serde_json::from_value(value)?]
        };
        Self::from_samples(&samples)
    }

    pub fn from_samples(samples: &[Sample]) -> Result<Self, DatasetError> {
        let mut dataset = Dataset::default();

        for (index, sample) in samples.iter().enumerate() {
            let Some(landmarks) = sample.landmarks() else {
                debug!("Skipping sample {index}: no landmarks");
                continue;
            };
            let features = extract_features_from_points(landmarks)
                .map_err(|source| DatasetError::Sample { index, source })?;
            dataset.features.push(features);
            dataset.labels.push(sample.label());
        }

        info!(
            "Prepared {} of {} samples ({} overlapping)",
            dataset.len(),
            samples.len(),
            dataset.positives()
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn features(&self) -> &[FeatureVector] {
        &self.features
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Number of rows labeled as overlapping
    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l == 1).count()
    }

    /// Row-major features: [row0.f0, ..., row0.f16, row1.f0, ...]
    pub fn flat_features(&self) -> Vec<f64> {
        let mut result = Vec::with_capacity(self.len() * FEATURE_COUNT);
        for row in &self.features {
            result.extend_from_slice(row);
        }
        result
    }
}
