//! Fluent builder for constructing a [`Batch`].

use flea_core::{BatchConfig, TrialRng};

use crate::{run_batch, BatchSummary, ExecutionMode, FleaTrial, SimResult};

/// Fluent builder for [`Batch`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                   |
/// |--------------------------|-------------------------------------------|
/// | `.mode(m)`               | `WorkerPool { workers: 128 }`             |
/// | `.seed(s)`               | `config.seed`, else fresh entropy         |
/// | `.check_invariants(b)`   | `config.check_invariants`                 |
///
/// # Example
///
/// ```rust,ignore
/// let summary = BatchBuilder::new(BatchConfig::default())
///     .mode(ExecutionMode::Sequential)
///     .seed(42)
///     .build()?
///     .run()?;
/// println!("{:.6}", summary.average());
/// ```
pub struct BatchBuilder {
    config: BatchConfig,
    mode:   ExecutionMode,
}

impl BatchBuilder {
    pub fn new(config: BatchConfig) -> Self {
        Self { config, mode: ExecutionMode::default() }
    }

    pub fn mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fix the batch seed so the run is reproducible in any mode.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn check_invariants(mut self, on: bool) -> Self {
        self.config.check_invariants = on;
        self
    }

    /// Validate inputs, resolve the seed, and return a ready-to-run [`Batch`].
    pub fn build(self) -> SimResult<Batch> {
        self.config.validate()?;
        self.mode.validate()?;

        let seed = self.config.seed.unwrap_or_else(TrialRng::entropy_seed);
        Ok(Batch { config: self.config, mode: self.mode, seed })
    }
}

/// A validated batch of flea trials.
#[derive(Clone, Debug)]
pub struct Batch {
    pub config: BatchConfig,
    pub mode:   ExecutionMode,
    /// Resolved batch seed; equals `config.seed` when one was given.
    pub seed:   u64,
}

impl Batch {
    /// The trial every worker runs.
    pub fn trial(&self) -> FleaTrial {
        FleaTrial {
            config:           self.config.trial,
            seed:             self.seed,
            check_invariants: self.config.check_invariants,
        }
    }

    pub fn run(&self) -> SimResult<BatchSummary> {
        run_batch(&self.trial(), self.config.trials, self.mode)
    }
}
