//! Grid coordinate type.

/// Row/column position of a cell.  Both components are in `[0, size)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Apply a `(d_row, d_col)` offset, returning `None` if the result falls
    /// outside a `size × size` grid.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32, size: u32) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < size && col < size).then_some(Coord { row, col })
    }

    /// Manhattan distance; orthogonal neighbors are exactly 1 apart.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}
