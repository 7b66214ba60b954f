//! Distance-decay weighting between hole and boundary pixels
//!
//! The weight of a boundary pixel depends only on its Euclidean distance to
//! the hole being filled; captured intensities play no role.

use crate::spatial::pixel::Pixel;
use std::error::Error;
use std::fmt;

/// Error type for weighting mechanism construction
#[derive(Debug, Clone)]
pub struct WeightingError {
    message: String,
}

impl fmt::Display for WeightingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weighting error: {}", self.message)
    }
}

impl Error for WeightingError {}

impl WeightingError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability to score how strongly a boundary pixel influences a hole pixel
///
/// Implementations must be pure: `fill` evaluates weights from worker
/// threads, so the `Sync` bound is part of the contract and interior mutable
/// state is not allowed.
pub trait WeightMechanism: Sync {
    /// Compute a non-negative weight for a (hole, boundary) pixel pair
    fn weight(&self, hole: Pixel, boundary: Pixel) -> f64;
}

/// Default mechanism: inverse power of Euclidean distance with additive bias
///
/// `weight = 1 / (distance^z + e)`. A larger exponent `z` sharpens the
/// fall-off with distance; the bias `e` caps the weight at `1 / e` when the
/// pair coincides spatially and keeps the denominator away from zero.
#[derive(Debug, Clone, Copy)]
pub struct InverseDistanceWeight {
    exponent: i32,
    bias: f64,
}

impl InverseDistanceWeight {
    /// Create a mechanism from the exponent `z` and bias `e`
    ///
    /// # Errors
    ///
    /// Returns an error unless `bias` is finite and strictly positive; a
    /// non-positive bias would make the weight unbounded at distance zero.
    pub fn new(exponent: i32, bias: f64) -> Result<Self, WeightingError> {
        if !bias.is_finite() || bias <= 0.0 {
            return Err(WeightingError::new(format!(
                "bias must be finite and strictly positive, got {bias}"
            )));
        }

        Ok(Self { exponent, bias })
    }

    /// The configured exponent `z`
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The configured bias `e`
    pub const fn bias(&self) -> f64 {
        self.bias
    }
}

impl WeightMechanism for InverseDistanceWeight {
    fn weight(&self, hole: Pixel, boundary: Pixel) -> f64 {
        let row_delta = hole.row as f64 - boundary.row as f64;
        let column_delta = hole.column as f64 - boundary.column as f64;
        let distance = row_delta.hypot(column_delta);

        (distance.powi(self.exponent) + self.bias).recip()
    }
}
