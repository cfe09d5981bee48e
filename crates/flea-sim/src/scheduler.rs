//! Fan trials out, fan results back in, reduce to an average.
//!
//! # Worker pool
//!
//! ```text
//!            work queue (bounded, pre-loaded, closed)
//!   TrialId ──────────────┬──────────────┬──────────────┐
//!                      worker 0      worker 1   …   worker W-1
//!                         │  Trial::run  │              │
//!   coordinator ◄─────────┴──────────────┴──────────────┘
//!            result queue (bounded to W), drained exactly `trials` times
//! ```
//!
//! Workers exit when the work queue is empty and its sender is gone.  The
//! coordinator sums results in arrival order; the sum is order-independent,
//! so every mode gives the same total for the same per-trial results.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver};
use tracing::{debug, info};

use flea_core::{TrialId, DEFAULT_WORKERS};

use crate::{SimError, SimResult, Trial};

// ── ExecutionMode ─────────────────────────────────────────────────────────────

/// How a batch distributes its trials.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One trial after another on the calling thread.
    Sequential,

    /// A fixed pool of `workers` threads fed through a work queue.
    WorkerPool { workers: usize },

    /// Rayon's work-stealing thread pool.
    #[cfg(feature = "parallel")]
    WorkStealing,
}

impl ExecutionMode {
    pub fn validate(&self) -> SimResult<()> {
        if let ExecutionMode::WorkerPool { workers: 0 } = self {
            return Err(SimError::Config("worker pool needs at least one worker".into()));
        }
        Ok(())
    }
}

impl Default for ExecutionMode {
    fn default() -> Self {
        ExecutionMode::WorkerPool { workers: DEFAULT_WORKERS }
    }
}

// ── BatchSummary ──────────────────────────────────────────────────────────────

/// Reduced outcome of a batch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BatchSummary {
    pub trials:           u32,
    /// Sum of every trial's unoccupied-cell count.
    pub total_unoccupied: u64,
    /// Wall-clock time for the whole batch.
    pub elapsed:          Duration,
}

impl BatchSummary {
    /// Mean unoccupied cells per trial.
    pub fn average(&self) -> f64 {
        self.total_unoccupied as f64 / self.trials as f64
    }
}

// ── run_batch ─────────────────────────────────────────────────────────────────

/// Run trials `0..trials` under `mode` and sum their results.
///
/// The first trial error is returned once the coordinator sees it; remaining
/// workers stop as soon as their next result send fails.
pub fn run_batch<T: Trial + ?Sized>(
    trial:  &T,
    trials: u32,
    mode:   ExecutionMode,
) -> SimResult<BatchSummary> {
    if trials == 0 {
        return Err(SimError::Config("trial count must be non-zero".into()));
    }
    mode.validate()?;

    debug!(trials, ?mode, "starting batch");
    let start = Instant::now();

    let total_unoccupied = match mode {
        ExecutionMode::Sequential => run_sequential(trial, trials)?,
        ExecutionMode::WorkerPool { workers } => run_pool(trial, trials, workers)?,
        #[cfg(feature = "parallel")]
        ExecutionMode::WorkStealing => run_work_stealing(trial, trials)?,
    };

    let summary = BatchSummary { trials, total_unoccupied, elapsed: start.elapsed() };
    info!(
        trials,
        average = summary.average(),
        elapsed = ?summary.elapsed,
        "batch complete"
    );
    Ok(summary)
}

fn run_sequential<T: Trial + ?Sized>(trial: &T, trials: u32) -> SimResult<u64> {
    let mut sum = 0u64;
    for i in 0..trials {
        sum += trial.run(TrialId(i))? as u64;
    }
    Ok(sum)
}

fn run_pool<T: Trial + ?Sized>(trial: &T, trials: u32, workers: usize) -> SimResult<u64> {
    // Pre-load every unit of work, then close the queue: an empty,
    // disconnected queue is the workers' stop signal.
    let (work_tx, work_rx) = bounded::<TrialId>(trials as usize);
    for i in 0..trials {
        work_tx.send(TrialId(i)).map_err(|_| SimError::Disconnected("work"))?;
    }
    drop(work_tx);

    let (result_tx, result_rx) = bounded::<SimResult<usize>>(workers);

    thread::scope(|s| {
        for worker in 0..workers {
            let work_rx   = work_rx.clone();
            let result_tx = result_tx.clone();
            s.spawn(move || {
                let mut ran = 0u32;
                for id in work_rx.iter() {
                    if result_tx.send(trial.run(id)).is_err() {
                        break; // coordinator gave up
                    }
                    ran += 1;
                }
                debug!(worker, ran, "worker drained");
            });
        }
        // Only workers hold senders now, so a dead pool disconnects the queue.
        drop(result_tx);

        // Takes the receiver by value: returning early drops it, which
        // unblocks any worker waiting to send before the scope joins.
        drain(result_rx, trials)
    })
}

/// Receive exactly `expected` results and sum them.
fn drain(results: Receiver<SimResult<usize>>, expected: u32) -> SimResult<u64> {
    let mut sum = 0u64;
    for _ in 0..expected {
        let unoccupied = results.recv().map_err(|_| SimError::Disconnected("result"))??;
        sum += unoccupied as u64;
    }
    Ok(sum)
}

#[cfg(feature = "parallel")]
fn run_work_stealing<T: Trial + ?Sized>(trial: &T, trials: u32) -> SimResult<u64> {
    use rayon::prelude::*;

    (0..trials)
        .into_par_iter()
        .map(|i| trial.run(TrialId(i)).map(|u| u as u64))
        .try_reduce(|| 0, |a, b| Ok(a + b))
}
