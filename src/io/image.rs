//! Grayscale image loading, normalization, and PNG export

use crate::io::configuration::{INTENSITY_SCALE, MAX_IMAGE_DIMENSION};
use crate::io::error::{FillError, Result};
use image::{DynamicImage, ImageBuffer, Luma};
use ndarray::Array2;
use num_traits::{Bounded, ToPrimitive};
use std::path::Path;

// Raw samples arrive row-major from the decoder, matching Array2 layout
fn normalize_plane<T>(samples: &[T], rows: usize, columns: usize) -> Option<Array2<f64>>
where
    T: Copy + Bounded + ToPrimitive,
{
    let full_scale = T::max_value().to_f64()?;
    let values = samples
        .iter()
        .map(|sample| sample.to_f64().unwrap_or(0.0) / full_scale)
        .collect::<Vec<_>>();

    Array2::from_shape_vec((rows, columns), values).ok()
}

fn validate_dimensions(path: &Path, rows: usize, columns: usize) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(FillError::InvalidSourceData {
            reason: format!("image '{}' has a zero dimension", path.display()),
        });
    }

    if rows > MAX_IMAGE_DIMENSION || columns > MAX_IMAGE_DIMENSION {
        return Err(FillError::InvalidSourceData {
            reason: format!(
                "image '{}' is {rows}x{columns}, larger than the supported {MAX_IMAGE_DIMENSION}x{MAX_IMAGE_DIMENSION}",
                path.display()
            ),
        });
    }

    Ok(())
}

/// Load an image as a normalized grayscale intensity plane in `[0, 1]`
///
/// 8-bit and 16-bit grayscale sources normalize at their native depth;
/// everything else is converted to 8-bit luma first.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - Either dimension is zero or exceeds the supported maximum
pub fn load_grayscale(path: &Path) -> Result<Array2<f64>> {
    let decoded = image::open(path).map_err(|source| FillError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let (plane, rows, columns) = match decoded {
        DynamicImage::ImageLuma16(buffer) => {
            let rows = buffer.height() as usize;
            let columns = buffer.width() as usize;
            (normalize_plane(buffer.as_raw(), rows, columns), rows, columns)
        }
        other => {
            let buffer = other.to_luma8();
            let rows = buffer.height() as usize;
            let columns = buffer.width() as usize;
            (normalize_plane(buffer.as_raw(), rows, columns), rows, columns)
        }
    };

    validate_dimensions(path, rows, columns)?;

    plane.ok_or_else(|| FillError::InvalidSourceData {
        reason: format!(
            "decoded samples of '{}' do not form a {rows}x{columns} plane",
            path.display()
        ),
    })
}

/// Scale a `[0, 1]` intensity plane to 8-bit and write it as a PNG
///
/// Values are clamped to the output range, so a stray sentinel cell comes
/// out black instead of wrapping.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_intensity_png(plane: &Array2<f64>, path: &Path) -> Result<()> {
    let (rows, columns) = plane.dim();
    let mut buffer = ImageBuffer::<Luma<u8>, Vec<u8>>::new(columns as u32, rows as u32);

    for ((row, column), &value) in plane.indexed_iter() {
        let scaled = (value * INTENSITY_SCALE).clamp(0.0, INTENSITY_SCALE) as u8;
        buffer.put_pixel(column as u32, row as u32, Luma([scaled]));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| FillError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    buffer.save(path).map_err(|source| FillError::ImageExport {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
