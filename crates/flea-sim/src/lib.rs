//! `flea-sim` — trial engine and trial scheduler.
//!
//! # One trial
//!
//! ```text
//! grid = Grid::new(grid_size)        one flea per cell
//! for round in 1..=rounds:
//!   for flea in creation order:
//!     remove flea from its cell
//!     pick a neighbor of that cell   (NeighborPicker)
//!     add flea to the neighbor
//! return count of empty cells
//! ```
//!
//! # A batch
//!
//! [`run_batch`] runs trials `0..n` sequentially, on a fixed worker pool fed
//! by two crossbeam channels, or (with `parallel`) on Rayon, and sums the
//! results.  [`BatchBuilder`] wires a [`FleaTrial`] to it from a
//! [`BatchConfig`](flea_core::BatchConfig).
//!
//! # Cargo features
//!
//! | Feature       | Effect                                                  |
//! |---------------|---------------------------------------------------------|
//! | `parallel`    | Adds `ExecutionMode::WorkStealing` (Rayon).             |
//! | `diagnostics` | Batches check grid invariants after every round.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flea_core::BatchConfig;
//! use flea_sim::BatchBuilder;
//!
//! let summary = BatchBuilder::new(BatchConfig::default()).build()?.run()?;
//! println!("Average count of unoccupied fields: {:.6}", summary.average());
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod trial;


pub use builder::{Batch, BatchBuilder};
pub use engine::{ring_bell, run_rounds, run_trial};
pub use error::{SimError, SimResult};
pub use observer::{GridPrinter, InvariantCheck, NoopObserver, TrialObserver};
pub use scheduler::{run_batch, BatchSummary, ExecutionMode};
pub use trial::{FleaTrial, Trial};
