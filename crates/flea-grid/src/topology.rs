//! Square-grid adjacency.
//!
//! # Data layout
//!
//! Neighbor lists use **Compressed Sparse Row (CSR)** format.  Given a
//! `CellId c`, its neighbors occupy the slice:
//!
//! ```text
//! neighbors[ neighbor_start[c] .. neighbor_start[c+1] ]
//! ```
//!
//! Each list is in [`MOVES`] order with out-of-bounds moves dropped, so a
//! corner has 2 entries, an edge cell 3 and an interior cell 4.  The whole
//! topology is immutable once built.

use flea_core::{CellId, Coord};

use crate::{GridError, GridResult};

/// Orthogonal moves as `(d_row, d_col)`: left, up, down, right.
///
/// The order is observable: it fixes which neighbor index `i` refers to, and
/// therefore the outcome of a trial driven by a scripted picker.
pub const MOVES: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Immutable `size × size` grid adjacency.
///
/// All fields are `pub` for direct indexed access on the hot path.  Build
/// with [`Topology::square`].
pub struct Topology {
    /// Side length.
    pub size: u32,

    /// Position of each cell.  Indexed by `CellId` (row-major).
    pub cell_coord: Vec<Coord>,

    /// CSR row pointer.  Neighbors of cell `c` are at
    /// `neighbors[neighbor_start[c] .. neighbor_start[c+1]]`.
    /// Length = `cell_count + 1`.
    pub neighbor_start: Vec<u32>,

    /// Concatenated neighbor lists.
    pub neighbors: Vec<CellId>,
}

impl Topology {
    /// Build the adjacency for a `size × size` grid.
    ///
    /// Two passes: allocate every cell, then resolve neighbor lists against
    /// the complete cell set.  Fails only for `size < 2`, where some cell
    /// would have nowhere to move.
    pub fn square(size: u32) -> GridResult<Topology> {
        if size < 2 {
            return Err(GridError::InvalidSize(size));
        }
        let n = size as usize;

        // Pass 1: cells.
        let cell_coord: Vec<Coord> = (0..size)
            .flat_map(|row| (0..size).map(move |col| Coord::new(row, col)))
            .collect();

        // Pass 2: neighbor lists.  4·n² − 4·n entries in total.
        let mut neighbor_start = Vec::with_capacity(n * n + 1);
        let mut neighbors      = Vec::with_capacity(4 * n * n - 4 * n);
        neighbor_start.push(0u32);
        for &coord in &cell_coord {
            for &(d_row, d_col) in &MOVES {
                if let Some(to) = coord.offset(d_row, d_col, size) {
                    neighbors.push(CellId(to.row * size + to.col));
                }
            }
            neighbor_start.push(neighbors.len() as u32);
        }
        debug_assert_eq!(neighbors.len(), 4 * n * n - 4 * n);

        Ok(Topology { size, cell_coord, neighbor_start, neighbors })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn cell_count(&self) -> usize {
        self.cell_coord.len()
    }

    /// Total neighbor-list entries across all cells.
    pub fn edge_count(&self) -> usize {
        self.neighbors.len()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The cell at `(row, col)`, or `None` if outside the grid.
    #[inline]
    pub fn cell_at(&self, row: u32, col: u32) -> Option<CellId> {
        (row < self.size && col < self.size).then(|| CellId(row * self.size + col))
    }

    #[inline]
    pub fn coord(&self, cell: CellId) -> Coord {
        self.cell_coord[cell.index()]
    }

    /// Neighbors of `cell` in [`MOVES`] order.  Contiguous slice, no allocation.
    #[inline]
    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        let start = self.neighbor_start[cell.index()] as usize;
        let end   = self.neighbor_start[cell.index() + 1] as usize;
        &self.neighbors[start..end]
    }

    #[inline]
    pub fn degree(&self, cell: CellId) -> usize {
        let start = self.neighbor_start[cell.index()] as usize;
        let end   = self.neighbor_start[cell.index() + 1] as usize;
        end - start
    }
}
