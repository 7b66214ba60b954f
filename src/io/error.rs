//! Error types for filling operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all filling operations
#[derive(Debug)]
pub enum FillError {
    /// Failed to load a source image or mask from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the filled image to disk
    ImageExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Source data doesn't meet algorithm requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Image and mask resolutions differ
    ///
    /// Detected before any fill attempt; dimensions are never coerced.
    ShapeMismatch {
        /// Image dimensions (rows, columns)
        image_dimensions: (usize, usize),
        /// Mask dimensions (rows, columns)
        mask_dimensions: (usize, usize),
    },

    /// Parameter validation failed before processing began
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Holes exist but no boundary pixel is reachable
    ///
    /// Occurs when the image is entirely hole; the weighted average would
    /// divide by zero, so the fill is rejected up front.
    DegenerateBoundary {
        /// Number of holes discovered
        hole_count: usize,
    },

    /// Scan-order mean fill visited a hole with no filled neighbour
    IsolatedHole {
        /// Row coordinate of the isolated hole
        row: usize,
        /// Column coordinate of the isolated hole
        column: usize,
    },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ShapeMismatch {
                image_dimensions,
                mask_dimensions,
            } => {
                write!(
                    f,
                    "Resolution mismatch: image is {}x{} but mask is {}x{}",
                    image_dimensions.0, image_dimensions.1, mask_dimensions.0, mask_dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DegenerateBoundary { hole_count } => {
                write!(
                    f,
                    "No boundary pixels reachable from {hole_count} holes; cannot synthesize fill values"
                )
            }
            Self::IsolatedHole { row, column } => {
                write!(
                    f,
                    "Hole at ({row}, {column}) has no filled neighbour to average from"
                )
            }
        }
    }
}

impl std::error::Error for FillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fill results
pub type Result<T> = std::result::Result<T, FillError>;

impl From<image::ImageError> for FillError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for FillError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FillError {
    FillError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
