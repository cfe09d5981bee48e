//! Simulation parameters.
//!
//! The defaults reproduce the canonical experiment: 900 fleas on a 30×30
//! grid, 50 bell rings per trial, 10,000 trials averaged together.

use crate::{CoreError, CoreResult};

/// Side length of the square grid.
pub const DEFAULT_GRID_SIZE: u32 = 30;

/// Bell rings per trial.
pub const DEFAULT_ROUNDS: u32 = 50;

/// Trials per batch.
pub const DEFAULT_TRIALS: u32 = 10_000;

/// Worker threads in the pooled execution mode.  Far above typical core
/// counts; trials are short and the pool only ever blocks on the queues.
pub const DEFAULT_WORKERS: usize = 128;

// ── TrialConfig ───────────────────────────────────────────────────────────────

/// Parameters of a single trial.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialConfig {
    /// Grid is `grid_size × grid_size` cells, one flea per cell at start.
    pub grid_size: u32,

    /// Number of bell rings before the unoccupied cells are counted.
    pub rounds: u32,
}

impl TrialConfig {
    /// Number of cells (and therefore fleas) in the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.grid_size as usize * self.grid_size as usize
    }

    /// Reject grids in which some cell would have no neighbor to jump to.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_size < 2 {
            return Err(CoreError::Config(format!(
                "grid size must be at least 2, got {}",
                self.grid_size
            )));
        }
        Ok(())
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self { grid_size: DEFAULT_GRID_SIZE, rounds: DEFAULT_ROUNDS }
    }
}

// ── BatchConfig ───────────────────────────────────────────────────────────────

/// Parameters of a batch of independent trials.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Applied to every trial in the batch.
    pub trial: TrialConfig,

    /// Number of trials to run and average over.
    pub trials: u32,

    /// Master RNG seed.  `None` draws a fresh root seed from entropy once per
    /// batch; the same seed always produces the same sum.
    pub seed: Option<u64>,

    /// Verify token conservation and ownership after every round and panic
    /// on violation.  Defaults to on only with the `diagnostics` feature.
    pub check_invariants: bool,
}

impl BatchConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.trial.validate()?;
        if self.trials == 0 {
            return Err(CoreError::Config("trial count must be non-zero".into()));
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            trial:            TrialConfig::default(),
            trials:           DEFAULT_TRIALS,
            seed:             None,
            check_invariants: cfg!(feature = "diagnostics"),
        }
    }
}
