//! Plain-text grid dumps.
//!
//! One line per cell in row-major order, a blank line, then the unoccupied
//! total:
//!
//! ```text
//! [0, 0]: 1 -> [1, 0], [0, 1]
//! [0, 1]: 0 -> [0, 0], [1, 1]
//! ...
//!
//! Unoccupied fields: 2
//! ```
//!
//! The per-cell line is pluggable through [`CellFormat`].

use std::fmt;

use crate::{CellView, Grid};

/// Formats a single cell line (without the trailing newline).
pub trait CellFormat {
    fn fmt_cell(&self, grid: &Grid, cell: &CellView<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// `[row, col]: count`
#[derive(Copy, Clone, Debug, Default)]
pub struct CountOnly;

impl CellFormat for CountOnly {
    fn fmt_cell(&self, _grid: &Grid, cell: &CellView<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", cell.coord, cell.occupancy())
    }
}

/// `[row, col]: count -> [r, c], [r, c], ...`
#[derive(Copy, Clone, Debug, Default)]
pub struct WithNeighbors;

impl CellFormat for WithNeighbors {
    fn fmt_cell(&self, grid: &Grid, cell: &CellView<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ->", cell.coord, cell.occupancy())?;
        for (i, &n) in cell.neighbors.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{}", grid.topology.coord(n))?;
        }
        Ok(())
    }
}

/// `Display` adapter returned by [`Grid::display_with`].
pub struct GridDisplay<'a, F: CellFormat> {
    grid:   &'a Grid,
    format: F,
}

impl<F: CellFormat> fmt::Display for GridDisplay<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.grid.cells() {
            self.format.fmt_cell(self.grid, &cell, f)?;
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "Unoccupied fields: {}", self.grid.unoccupied_count())
    }
}

impl Grid {
    /// Render with a custom per-cell format.
    pub fn display_with<F: CellFormat>(&self, format: F) -> GridDisplay<'_, F> {
        GridDisplay { grid: self, format }
    }
}

/// Render `grid` to a `String`, optionally listing each cell's neighbors.
pub fn render(grid: &Grid, with_neighbors: bool) -> String {
    if with_neighbors {
        grid.display_with(WithNeighbors).to_string()
    } else {
        grid.display_with(CountOnly).to_string()
    }
}
