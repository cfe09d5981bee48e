//! The unit of work the scheduler hands to workers.

use flea_core::{TrialConfig, TrialId, TrialRng};
use tracing::trace;

use crate::{run_trial, InvariantCheck, NoopObserver, SimResult};

/// One independently runnable trial, identified by its index in the batch.
///
/// Implementations are shared by reference across every worker, so they
/// must be `Sync` and keep all per-trial state on the stack of `run`.
///
/// Any `Fn(TrialId) -> usize + Sync` closure is a `Trial`, which lets tests
/// drive the scheduler with a deterministic result generator.
pub trait Trial: Sync {
    /// Run trial `id` and return its unoccupied-cell count.
    fn run(&self, id: TrialId) -> SimResult<usize>;
}

impl<F> Trial for F
where
    F: Fn(TrialId) -> usize + Sync,
{
    fn run(&self, id: TrialId) -> SimResult<usize> {
        Ok(self(id))
    }
}

/// The flea random-walk trial.
///
/// Trial `id` draws from `TrialRng::new(seed, id)`, so its result depends
/// only on the seed and the ID, never on which worker runs it.
#[derive(Clone, Debug)]
pub struct FleaTrial {
    pub config:           TrialConfig,
    pub seed:             u64,
    pub check_invariants: bool,
}

impl Trial for FleaTrial {
    fn run(&self, id: TrialId) -> SimResult<usize> {
        let mut rng = TrialRng::new(self.seed, id);
        let unoccupied = if self.check_invariants {
            run_trial(&self.config, &mut rng, &mut InvariantCheck)?
        } else {
            run_trial(&self.config, &mut rng, &mut NoopObserver)?
        };
        trace!(trial = id.0, unoccupied, "trial finished");
        Ok(unoccupied)
    }
}
