//! Hole discovery and fill strategies
//!
//! Two strategies operate on the same hole-marked intensity plane:
//! - `filler` synthesizes every hole from a distance-weighted average over
//!   the full boundary snapshot
//! - `scanmean` replaces each hole with the mean of its neighbours in one
//!   cascading scan-order pass

/// Distance-weighted hole filling over the global boundary snapshot
pub mod filler;
/// Scan-order local mean fill
pub mod scanmean;

pub use filler::HoleFiller;
pub use scanmean::mean_fill;
