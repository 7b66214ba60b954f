//! Reserved values and runtime configuration defaults

/// In-band marker for missing pixels within a `[0, 1]` intensity plane
pub const HOLE_SENTINEL: f64 = -1.0;

/// Mask intensities strictly below this threshold punch a hole
pub const MASK_THRESHOLD: f64 = 0.5;

/// Scale factor from normalized intensity to 8-bit output
pub const INTENSITY_SCALE: f64 = 255.0;

// Safety limit to prevent excessive memory allocation
/// Maximum accepted image dimension in either axis
pub const MAX_IMAGE_DIMENSION: usize = 10_000;

// Output settings
/// Prefix for generated output filenames
pub const OUTPUT_PREFIX: &str = "filled";

// Default values for configurable parameters
/// Default connectivity selector for the mean fill
pub const DEFAULT_CONNECTIVITY: u8 = 4;

// Progress display settings
/// Spinner tick interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 80;
