//! Single-pass hole discovery and distance-weighted filling
//!
//! The filler scans the image once to capture the hole set and the boundary
//! snapshot, then synthesizes every hole value as a weighted average over the
//! *entire* boundary set. Boundary intensities are frozen at discovery time:
//! filling one hole never feeds into another, so the result is independent of
//! fill order.

use crate::io::configuration::HOLE_SENTINEL;
use crate::io::error::{FillError, Result};
use crate::math::weighting::WeightMechanism;
use crate::spatial::mask::CoordSet;
use crate::spatial::pixel::{Connectivity, Pixel};
use ndarray::Array2;
use rayon::prelude::*;

/// Finds the hole region in a hole-marked intensity plane and fills it
///
/// Owns the image buffer for the duration of the fill. Each instance is
/// single-use: a second `fill` re-runs discovery against the already filled
/// buffer, finds no holes, and no-ops.
pub struct HoleFiller<W> {
    image: Array2<f64>,
    weighting: W,
    connectivity: Connectivity,
    debug: bool,
    holes: Vec<Pixel>,
    boundaries: Vec<Pixel>,
}

impl<W: WeightMechanism> HoleFiller<W> {
    /// Create a filler over a hole-marked `[0, 1]` intensity plane
    pub const fn new(
        image: Array2<f64>,
        weighting: W,
        connectivity: Connectivity,
        debug: bool,
    ) -> Self {
        Self {
            image,
            weighting,
            connectivity,
            debug,
            holes: Vec::new(),
            boundaries: Vec::new(),
        }
    }

    /// Hole pixels discovered by the last discovery pass
    pub fn holes(&self) -> &[Pixel] {
        &self.holes
    }

    /// Boundary pixels discovered by the last discovery pass
    pub fn boundaries(&self) -> &[Pixel] {
        &self.boundaries
    }

    /// The image buffer in its current state
    pub const fn image(&self) -> &Array2<f64> {
        &self.image
    }

    /// Scan the buffer once, recording hole pixels and their boundary
    ///
    /// A sentinel-valued cell becomes a hole record; its in-bounds,
    /// non-sentinel neighbours (per the active connectivity) join the
    /// boundary snapshot with the intensity read now. Boundary records are
    /// deduplicated by coordinate, so a pixel bordering several holes is
    /// stored once. The image is not mutated; rerunning discovery on an
    /// unmodified buffer yields identical sets.
    pub fn find_holes_and_boundaries(&mut self) {
        self.holes.clear();
        self.boundaries.clear();

        let (rows, columns) = self.image.dim();
        let mut boundary_seen = CoordSet::new(rows, columns);

        for ((row, column), &value) in self.image.indexed_iter() {
            if value != HOLE_SENTINEL {
                continue;
            }

            self.holes.push(Pixel::new(row, column, HOLE_SENTINEL));

            for (neighbour_row, neighbour_column) in
                self.connectivity.neighbours(row, column, rows, columns)
            {
                let neighbour_value = self
                    .image
                    .get([neighbour_row, neighbour_column])
                    .copied()
                    .unwrap_or(HOLE_SENTINEL);

                if neighbour_value == HOLE_SENTINEL {
                    continue;
                }

                if boundary_seen.insert(neighbour_row, neighbour_column) {
                    self.boundaries
                        .push(Pixel::new(neighbour_row, neighbour_column, neighbour_value));
                }
            }
        }
    }

    /// Weighted average of every boundary pixel's captured intensity
    ///
    /// Aggregates over the global boundary snapshot, not just the hole's own
    /// neighbours; weight decay makes far boundaries negligible but not zero.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateBoundary` when the accumulated weight is zero or
    /// non-finite, which happens when the boundary snapshot is empty.
    pub fn calculate_hole_color(&self, hole: Pixel) -> Result<f64> {
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for &boundary in &self.boundaries {
            let weight = self.weighting.weight(hole, boundary);
            numerator = weight.mul_add(boundary.value, numerator);
            denominator += weight;
        }

        if denominator <= 0.0 || !denominator.is_finite() {
            return Err(FillError::DegenerateBoundary {
                hole_count: self.holes.len(),
            });
        }

        Ok(numerator / denominator)
    }

    /// Discover holes, then synthesize and commit a value for each one
    ///
    /// Colors are computed against the frozen boundary snapshot, in parallel
    /// across holes, and committed to disjoint coordinates afterwards.
    /// Returns the number of filled holes; an image without holes is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateBoundary` when holes exist but the boundary
    /// snapshot is empty (an entirely-hole image).
    pub fn fill(&mut self) -> Result<usize> {
        self.find_holes_and_boundaries();

        if self.holes.is_empty() {
            return Ok(0);
        }

        if self.boundaries.is_empty() {
            return Err(FillError::DegenerateBoundary {
                hole_count: self.holes.len(),
            });
        }

        let colors = self
            .holes
            .par_iter()
            .map(|&hole| self.calculate_hole_color(hole))
            .collect::<Result<Vec<_>>>()?;

        for (hole, &color) in self.holes.iter().zip(&colors) {
            if let Some(cell) = self.image.get_mut([hole.row, hole.column]) {
                *cell = color;
            }
        }

        Ok(self.holes.len())
    }

    /// Consume the filler and hand back the buffer for export
    ///
    /// With debug mode on, every boundary coordinate is painted black first.
    /// This runs after fill values are committed and before any output
    /// scaling, so boundary pixels are the only ones darkened.
    pub fn into_image(mut self) -> Array2<f64> {
        if self.debug {
            for boundary in &self.boundaries {
                if let Some(cell) = self.image.get_mut([boundary.row, boundary.column]) {
                    *cell = 0.0;
                }
            }
        }

        self.image
    }
}
