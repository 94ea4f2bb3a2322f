//! Classifier module - feature extraction and training data preparation
//!
//! Note: the overlap classifier itself is trained and run outside Rust.
//! Rust handles feature extraction and dataset labeling.

mod dataset;
mod features;

pub use dataset::{parse_instruction, Dataset, DatasetError, Sample, OVERLAP_MARKER};
pub use features::{
    extract_features, extract_features_from_points, FeatureVector, FEATURE_COUNT, FEATURE_NAMES,
};
