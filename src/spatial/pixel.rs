//! Pixel records and neighbourhood connectivity policies

/// A sampled pixel: a grid coordinate plus the intensity read at capture time
///
/// Boundary records keep the intensity observed during discovery, not a live
/// view into the image buffer, so later writes never alter a captured record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    /// Row coordinate, zero-based
    pub row: usize,
    /// Column coordinate, zero-based
    pub column: usize,
    /// Intensity at capture time: `[0, 1]` or the hole sentinel
    pub value: f64,
}

impl Pixel {
    /// Create a pixel record
    pub const fn new(row: usize, column: usize, value: f64) -> Self {
        Self { row, column, value }
    }
}

const CARDINAL_OFFSETS: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

const ALL_OFFSETS: [(i64, i64); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Neighbourhood policy used during boundary discovery
///
/// `Four` examines the cardinal neighbours only; `Eight` adds the diagonals.
/// The policy is fixed for the duration of a fill operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Cardinal neighbours only
    Four,
    /// Cardinal and diagonal neighbours
    Eight,
}

impl Connectivity {
    /// Neighbour offsets examined by this policy, as (row, column) deltas
    pub const fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Self::Four => &CARDINAL_OFFSETS,
            Self::Eight => &ALL_OFFSETS,
        }
    }

    /// Numeric selector as exposed on the command line
    pub const fn as_flag(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Parse the numeric selector; only `4` and `8` exist
    ///
    /// Returns `None` for any other value. Turning that into a usage error is
    /// the caller's job, not the core's.
    pub const fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            4 => Some(Self::Four),
            8 => Some(Self::Eight),
            _ => None,
        }
    }

    /// Iterate the in-bounds neighbours of a coordinate on a `rows` x `columns` grid
    pub fn neighbours(
        self,
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        self.offsets().iter().filter_map(move |&(dr, dc)| {
            let neighbour_row = row as i64 + dr;
            let neighbour_column = column as i64 + dc;
            let in_rows = neighbour_row >= 0 && neighbour_row < rows as i64;
            let in_columns = neighbour_column >= 0 && neighbour_column < columns as i64;
            (in_rows && in_columns).then_some((neighbour_row as usize, neighbour_column as usize))
        })
    }
}
