//! `flea-core` — foundational types for the `rust_fleas` simulator.
//!
//! This crate is a dependency of every other `flea-*` crate.  It has no
//! `flea-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CellId`, `FleaId`, `TrialId`                         |
//! | [`coord`]       | `Coord` (row, col) grid position                      |
//! | [`config`]      | `TrialConfig`, `BatchConfig`, default constants       |
//! | [`rng`]         | `TrialRng`, `NeighborPicker`, `FixedPick`             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag          | Effect                                                 |
//! |---------------|--------------------------------------------------------|
//! | `serde`       | Adds `Serialize`/`Deserialize` to all public types.    |
//! | `diagnostics` | `BatchConfig::default()` enables the invariant check.  |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    BatchConfig, TrialConfig, DEFAULT_GRID_SIZE, DEFAULT_ROUNDS, DEFAULT_TRIALS, DEFAULT_WORKERS,
};
pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::{CellId, FleaId, TrialId};
pub use rng::{FixedPick, NeighborPicker, TrialRng};
