//! Bit-packed coordinate membership for dense pixel grids

use bitvec::prelude::*;

/// Membership set over the coordinates of a fixed-size grid
///
/// One bit per cell, so membership tests during discovery stay O(1) and
/// allocation-free regardless of how many holes the image contains.
#[derive(Clone, Debug)]
pub struct CoordSet {
    bits: BitVec,
    columns: usize,
    members: usize,
}

impl CoordSet {
    /// Create an empty set covering a `rows` x `columns` grid
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            bits: bitvec![0; rows * columns],
            columns,
            members: 0,
        }
    }

    const fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Insert a coordinate, reporting whether it was newly inserted
    ///
    /// Out-of-grid coordinates are ignored and report `false`.
    pub fn insert(&mut self, row: usize, column: usize) -> bool {
        if column >= self.columns {
            return false;
        }
        let index = self.index(row, column);
        let absent = self.bits.get(index).as_deref() == Some(&false);
        if absent {
            self.bits.set(index, true);
            self.members += 1;
        }
        absent
    }

    /// Test coordinate membership
    pub fn contains(&self, row: usize, column: usize) -> bool {
        column < self.columns && self.bits.get(self.index(row, column)).as_deref() == Some(&true)
    }

    /// Count member coordinates
    pub const fn len(&self) -> usize {
        self.members
    }

    /// Test if no coordinates are present
    pub const fn is_empty(&self) -> bool {
        self.members == 0
    }
}
