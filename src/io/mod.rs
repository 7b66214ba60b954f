//! Input/output operations and error handling
//!
//! Everything around the fill core: command-line surface, image loading and
//! export, mask preprocessing, progress display, and the error taxonomy.

/// Command-line interface and fill orchestration
pub mod cli;
/// Reserved values and runtime configuration defaults
pub mod configuration;
/// Error types for filling operations
pub mod error;
/// Grayscale image loading, normalization, and PNG export
pub mod image;
/// Mask thresholding and shape validation
pub mod preprocess;
/// Progress reporting for long fills
pub mod progress;
