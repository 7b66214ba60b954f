//! Scan-order local mean fill
//!
//! A cheaper alternative to the weighted filler: one row-major pass replaces
//! each hole with the arithmetic mean of its in-bounds, non-hole neighbours
//! at visit time. Earlier fills feed later ones, so values cascade along the
//! scan direction through larger holes. This is the intended contrast with
//! `filler`, whose boundary snapshot is frozen before any mutation.

use crate::io::configuration::HOLE_SENTINEL;
use crate::io::error::{FillError, Result};
use crate::spatial::pixel::Connectivity;
use ndarray::Array2;

/// Fill every hole with the mean of its neighbours, cascading in scan order
///
/// Returns the number of filled holes; an image without holes is a no-op.
///
/// # Errors
///
/// Returns `IsolatedHole` when a hole has no non-hole neighbour at visit
/// time, which happens for holes fully enclosed by holes that the scan has
/// not reached yet (for example a hole in the top-left corner of an
/// all-hole region touching the image edge).
pub fn mean_fill(image: &mut Array2<f64>, connectivity: Connectivity) -> Result<usize> {
    let (rows, columns) = image.dim();
    let mut filled = 0;

    for row in 0..rows {
        for column in 0..columns {
            let value = image.get([row, column]).copied().unwrap_or(0.0);
            if value != HOLE_SENTINEL {
                continue;
            }

            let mut sum = 0.0;
            let mut count = 0_usize;

            for (neighbour_row, neighbour_column) in
                connectivity.neighbours(row, column, rows, columns)
            {
                let neighbour_value = image
                    .get([neighbour_row, neighbour_column])
                    .copied()
                    .unwrap_or(HOLE_SENTINEL);

                if neighbour_value == HOLE_SENTINEL {
                    continue;
                }

                sum += neighbour_value;
                count += 1;
            }

            if count == 0 {
                return Err(FillError::IsolatedHole { row, column });
            }

            if let Some(cell) = image.get_mut([row, column]) {
                *cell = sum / count as f64;
            }

            filled += 1;
        }
    }

    Ok(filled)
}
