//! Flea ↔ cell bookkeeping.
//!
//! The relation is stored from both sides: each cell lists the fleas on it,
//! each flea records its cell.  Both sides are updated together by
//! [`Occupancy::relocate`] (remove, then add), so outside of that call a flea
//! is listed in exactly the cell it references.

use flea_core::{CellId, FleaId};

use crate::{GridError, GridResult};

/// Per-cell occupant lists plus the per-flea owning cell.
pub struct Occupancy {
    /// Fleas currently on each cell.  Indexed by `CellId`.
    pub occupants: Vec<Vec<FleaId>>,

    /// Current cell of each flea.  Indexed by `FleaId`.
    pub flea_cell: Vec<CellId>,
}

impl Occupancy {
    /// One flea per cell: flea `i` starts on cell `i`.
    pub fn one_per_cell(cell_count: usize) -> Self {
        let occupants = (0..cell_count as u32).map(|i| vec![FleaId(i)]).collect();
        let flea_cell = (0..cell_count as u32).map(CellId).collect();
        Self { occupants, flea_cell }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Remove `flea` from `cell`'s occupant list.
    ///
    /// Removing a flea that is not on `cell` is a no-op.  Occupant order
    /// within a cell is not preserved.
    pub fn remove(&mut self, cell: CellId, flea: FleaId) {
        let list = &mut self.occupants[cell.index()];
        if let Some(pos) = list.iter().position(|&f| f == flea) {
            list.swap_remove(pos);
            debug_assert!(!list.contains(&flea), "{flea} listed twice in {cell}");
        }
    }

    /// Put `flea` on `cell` and make `cell` its owner.
    pub fn add(&mut self, cell: CellId, flea: FleaId) {
        self.occupants[cell.index()].push(flea);
        self.flea_cell[flea.index()] = cell;
    }

    /// Move `flea` from its current cell to `to`.
    #[inline]
    pub fn relocate(&mut self, flea: FleaId, to: CellId) {
        let from = self.flea_cell[flea.index()];
        self.remove(from, flea);
        self.add(to, flea);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn cell_of(&self, flea: FleaId) -> CellId {
        self.flea_cell[flea.index()]
    }

    #[inline]
    pub fn occupants(&self, cell: CellId) -> &[FleaId] {
        &self.occupants[cell.index()]
    }

    /// Number of fleas on `cell`.
    #[inline]
    pub fn count(&self, cell: CellId) -> usize {
        self.occupants[cell.index()].len()
    }

    pub fn flea_count(&self) -> usize {
        self.flea_cell.len()
    }

    /// Sum of all occupant-list lengths.  Equals `flea_count()` while the
    /// bookkeeping is intact.
    pub fn listed_count(&self) -> usize {
        self.occupants.iter().map(Vec::len).sum()
    }

    /// Cells with no fleas.  O(cells).
    pub fn unoccupied_count(&self) -> usize {
        self.occupants.iter().filter(|o| o.is_empty()).count()
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Check conservation (`expected` fleas listed across all cells) and
    /// single ownership (each flea listed exactly once, in its own cell).
    pub fn verify(&self, expected: usize) -> GridResult<()> {
        let found = self.listed_count();
        if found != expected {
            return Err(GridError::FleaCountMismatch { expected, found });
        }
        for (i, &owner) in self.flea_cell.iter().enumerate() {
            let flea = FleaId(i as u32);
            let listed = self.occupants(owner).iter().filter(|&&f| f == flea).count();
            if listed != 1 {
                return Err(GridError::OwnershipMismatch { flea, owner, listed });
            }
        }
        Ok(())
    }
}
