//! Per-trial RNG and the neighbor-choice seam.
//!
//! # Determinism strategy
//!
//! Each trial gets its own independent `SmallRng` seeded by:
//!
//!   seed = batch_seed XOR (trial_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive trial IDs uniformly across the seed space.
//! This means:
//!
//! - Trials never share RNG state (no contention, no ordering dependency).
//! - Which worker runs which trial does not affect the outcome, so every
//!   execution mode yields the same sum for the same batch seed.
//! - All RNG calls are local to the owning thread; no synchronisation needed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::TrialId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── NeighborPicker ────────────────────────────────────────────────────────────

/// Source of the one random decision in the model: which neighbor a flea
/// jumps to.
///
/// The engine only ever asks for an index into the current cell's neighbor
/// list, so tests can substitute a scripted picker for [`TrialRng`].
pub trait NeighborPicker {
    /// Return an index in `0..degree`.  `degree` is always at least 2.
    fn pick(&mut self, degree: usize) -> usize;
}

/// A picker that always returns the same neighbor index (clamped to the
/// last neighbor when the cell has fewer).
#[derive(Copy, Clone, Debug, Default)]
pub struct FixedPick(pub usize);

impl NeighborPicker for FixedPick {
    #[inline]
    fn pick(&mut self, degree: usize) -> usize {
        self.0.min(degree - 1)
    }
}

// ── TrialRng ──────────────────────────────────────────────────────────────────

/// Per-trial deterministic RNG.
///
/// Created by the worker that runs the trial and dropped with the grid.
/// Every concurrently executing trial holds its own.
pub struct TrialRng(SmallRng);

impl TrialRng {
    /// Seed deterministically from the batch seed and a trial ID.
    pub fn new(batch_seed: u64, trial: TrialId) -> Self {
        let seed = batch_seed ^ (trial.0 as u64).wrapping_mul(MIXING_CONSTANT);
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, bypassing the trial mixing.
    pub fn from_seed(seed: u64) -> Self {
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a fresh batch seed from the thread-local entropy source.
    pub fn entropy_seed() -> u64 {
        rand::random()
    }
}

impl NeighborPicker for TrialRng {
    #[inline]
    fn pick(&mut self, degree: usize) -> usize {
        self.0.gen_range(0..degree)
    }
}
