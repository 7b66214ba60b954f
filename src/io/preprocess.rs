//! Mask thresholding and shape validation ahead of filling
//!
//! The one stateless preprocessing collaborator: normalize both inputs to
//! `[0, 1]`, validate that their shapes agree, and punch the mask's dark
//! region into the image as hole sentinels.

use crate::io::configuration::{HOLE_SENTINEL, MASK_THRESHOLD};
use crate::io::error::{FillError, Result};
use crate::io::image::load_grayscale;
use ndarray::Array2;
use std::path::Path;

/// Punch mask holes into a normalized intensity plane
///
/// Wherever the mask intensity is strictly below the threshold, the
/// corresponding image cell becomes the hole sentinel. A mask value of
/// exactly 0.5 leaves the image cell untouched. Returns the hole count.
///
/// # Errors
///
/// Returns `ShapeMismatch` when image and mask dimensions differ; the image
/// is not modified in that case.
pub fn apply_mask(image: &mut Array2<f64>, mask: &Array2<f64>) -> Result<usize> {
    if image.dim() != mask.dim() {
        return Err(FillError::ShapeMismatch {
            image_dimensions: image.dim(),
            mask_dimensions: mask.dim(),
        });
    }

    let mut punched = 0;
    for ((row, column), &mask_value) in mask.indexed_iter() {
        if mask_value < MASK_THRESHOLD {
            if let Some(cell) = image.get_mut([row, column]) {
                *cell = HOLE_SENTINEL;
                punched += 1;
            }
        }
    }

    Ok(punched)
}

/// Load an image and its mask and produce the hole-marked intensity plane
///
/// # Errors
///
/// Returns an error if either file fails to load or the shapes differ.
pub fn load_masked_image(image_path: &Path, mask_path: &Path) -> Result<Array2<f64>> {
    let mut image = load_grayscale(image_path)?;
    let mask = load_grayscale(mask_path)?;
    apply_mask(&mut image, &mask)?;
    Ok(image)
}
