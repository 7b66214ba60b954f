//! Mathematical utilities for hole value synthesis

/// Distance-decay weighting between hole and boundary pixels
pub mod weighting;

pub use weighting::{InverseDistanceWeight, WeightMechanism};
