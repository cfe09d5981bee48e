//! Trial observer trait and the diagnostic observers built on it.

use std::io;

use flea_grid::{CountOnly, Grid, WithNeighbors};

/// Callbacks invoked by [`run_rounds`][crate::run_rounds] at round
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — round counter
///
/// ```rust,ignore
/// struct Rounds(u32);
///
/// impl TrialObserver for Rounds {
///     fn on_round_end(&mut self, _round: u32, _grid: &Grid) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait TrialObserver {
    /// Called once before the first bell ring.
    fn on_trial_start(&mut self, _grid: &Grid) {}

    /// Called after each bell ring.  `round` counts from 1.
    fn on_round_end(&mut self, _round: u32, _grid: &Grid) {}

    /// Called once after the last bell ring with the trial's result.
    fn on_trial_end(&mut self, _grid: &Grid, _unoccupied: usize) {}
}

/// A [`TrialObserver`] that does nothing.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}

/// Run two observers side by side, `A` first.
impl<A: TrialObserver, B: TrialObserver> TrialObserver for (A, B) {
    fn on_trial_start(&mut self, grid: &Grid) {
        self.0.on_trial_start(grid);
        self.1.on_trial_start(grid);
    }

    fn on_round_end(&mut self, round: u32, grid: &Grid) {
        self.0.on_round_end(round, grid);
        self.1.on_round_end(round, grid);
    }

    fn on_trial_end(&mut self, grid: &Grid, unoccupied: usize) {
        self.0.on_trial_end(grid, unoccupied);
        self.1.on_trial_end(grid, unoccupied);
    }
}

// ── InvariantCheck ────────────────────────────────────────────────────────────

/// Verifies flea conservation and single ownership before the first round
/// and after every round.
///
/// A violation means the occupancy bookkeeping is broken, not that the input
/// was bad, so it panics instead of returning an error.  Under the release
/// profile (`panic = "abort"`) that ends the process.
pub struct InvariantCheck;

impl TrialObserver for InvariantCheck {
    fn on_trial_start(&mut self, grid: &Grid) {
        if let Err(e) = grid.verify() {
            panic!("grid invariant violated before first round: {e}");
        }
    }

    fn on_round_end(&mut self, round: u32, grid: &Grid) {
        if let Err(e) = grid.verify() {
            panic!("grid invariant violated after round {round}: {e}");
        }
    }
}

// ── GridPrinter ───────────────────────────────────────────────────────────────

/// Writes grid dumps to `out`: the full adjacency at trial start, occupancy
/// counts after each round (when `every_round` is set) and at trial end.
///
/// Observer hooks cannot fail, so the first I/O error is kept and further
/// output is skipped.  Retrieve it with [`take_error`](Self::take_error).
pub struct GridPrinter<W: io::Write> {
    out:         W,
    every_round: bool,
    error:       Option<io::Error>,
}

impl<W: io::Write> GridPrinter<W> {
    pub fn new(out: W, every_round: bool) -> Self {
        Self { out, every_round, error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(text) {
            self.error = Some(e);
        }
    }
}

impl<W: io::Write> TrialObserver for GridPrinter<W> {
    fn on_trial_start(&mut self, grid: &Grid) {
        self.emit(format_args!("{}\n", grid.display_with(WithNeighbors)));
    }

    fn on_round_end(&mut self, round: u32, grid: &Grid) {
        if self.every_round {
            self.emit(format_args!("-- round {round} --\n{}\n", grid.display_with(CountOnly)));
        }
    }

    fn on_trial_end(&mut self, grid: &Grid, _unoccupied: usize) {
        if !self.every_round {
            self.emit(format_args!("{}\n", grid.display_with(CountOnly)));
        }
    }
}
