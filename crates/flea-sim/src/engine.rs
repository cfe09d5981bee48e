//! Bell rings and the single-trial loop.

use flea_core::{FleaId, NeighborPicker, TrialConfig};
use flea_grid::Grid;

use crate::{SimResult, TrialObserver};

/// Ring the bell once: every flea jumps to a random neighbor of its cell.
///
/// Fleas move in creation order and each moves exactly once.  The flea list
/// itself is never touched; only occupant lists change, so a flea that lands
/// on a cell whose own fleas have not yet moved does not move again.  Each
/// move is remove, pick among the *current* cell's neighbors, add.
pub fn ring_bell<P: NeighborPicker + ?Sized>(grid: &mut Grid, picker: &mut P) {
    // Disjoint field borrows: adjacency is read-only, occupancy is written.
    let Grid { topology, occupancy } = grid;

    for i in 0..occupancy.flea_count() as u32 {
        let flea = FleaId(i);
        let from = occupancy.cell_of(flea);
        occupancy.remove(from, flea);

        let neighbors = topology.neighbors(from);
        let to = neighbors[picker.pick(neighbors.len())];
        occupancy.add(to, flea);
    }
}

/// Ring the bell `rounds` times on an existing grid and return the number of
/// unoccupied cells afterwards.
pub fn run_rounds<P, O>(grid: &mut Grid, rounds: u32, picker: &mut P, observer: &mut O) -> usize
where
    P: NeighborPicker + ?Sized,
    O: TrialObserver + ?Sized,
{
    observer.on_trial_start(grid);
    for round in 1..=rounds {
        ring_bell(grid, picker);
        observer.on_round_end(round, grid);
    }
    let unoccupied = grid.unoccupied_count();
    observer.on_trial_end(grid, unoccupied);
    unoccupied
}

/// Run one full trial on a fresh grid: build, ring `config.rounds` times,
/// count unoccupied cells.  The grid is dropped before returning.
pub fn run_trial<P, O>(config: &TrialConfig, picker: &mut P, observer: &mut O) -> SimResult<usize>
where
    P: NeighborPicker + ?Sized,
    O: TrialObserver + ?Sized,
{
    let mut grid = Grid::new(config.grid_size)?;
    Ok(run_rounds(&mut grid, config.rounds, picker, observer))
}
