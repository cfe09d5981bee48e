//! The per-trial grid: topology plus occupancy.

use flea_core::{CellId, Coord, FleaId};

use crate::{GridResult, Occupancy, Topology};

/// One trial's world.
///
/// Both halves are `pub` so the engine can borrow the immutable topology and
/// the mutable occupancy at the same time.
pub struct Grid {
    pub topology:  Topology,
    pub occupancy: Occupancy,
}

impl Grid {
    /// Fresh `size × size` grid with one flea per cell.
    pub fn new(size: u32) -> GridResult<Grid> {
        let topology  = Topology::square(size)?;
        let occupancy = Occupancy::one_per_cell(topology.cell_count());
        Ok(Grid { topology, occupancy })
    }

    pub fn size(&self) -> u32 {
        self.topology.size
    }

    pub fn cell_count(&self) -> usize {
        self.topology.cell_count()
    }

    pub fn flea_count(&self) -> usize {
        self.occupancy.flea_count()
    }

    /// Fleas in creation order.  This is the order a bell ring moves them in.
    pub fn fleas(&self) -> impl ExactSizeIterator<Item = FleaId> + use<> {
        (0..self.flea_count() as u32).map(FleaId)
    }

    /// Cells with no fleas.
    pub fn unoccupied_count(&self) -> usize {
        self.occupancy.unoccupied_count()
    }

    /// Conservation and ownership check against the initial flea count.
    pub fn verify(&self) -> GridResult<()> {
        self.occupancy.verify(self.cell_count())
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn cell(&self, id: CellId) -> CellView<'_> {
        CellView {
            id,
            coord:     self.topology.coord(id),
            occupants: self.occupancy.occupants(id),
            neighbors: self.topology.neighbors(id),
        }
    }

    pub fn cell_at(&self, row: u32, col: u32) -> Option<CellView<'_>> {
        self.topology.cell_at(row, col).map(|id| self.cell(id))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellView<'_>> + '_ {
        (0..self.cell_count() as u32).map(|i| self.cell(CellId(i)))
    }
}

// ── CellView ──────────────────────────────────────────────────────────────────

/// Read-only snapshot of one cell.
#[derive(Copy, Clone)]
pub struct CellView<'a> {
    pub id:        CellId,
    pub coord:     Coord,
    pub occupants: &'a [FleaId],
    pub neighbors: &'a [CellId],
}

impl CellView<'_> {
    /// Number of fleas on this cell.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.occupants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}
