//! `flea-grid` — the grid a trial mutates.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`topology`]    | `Topology` (CSR neighbor lists), `MOVES`                  |
//! | [`occupancy`]   | `Occupancy` (cell → fleas, flea → cell)                   |
//! | [`grid`]        | `Grid`, `CellView` read access                            |
//! | [`render`]      | `CellFormat`, `GridDisplay`, `render`                     |
//! | [`error`]       | `GridError`, `GridResult<T>`                              |
//!
//! # Data layout
//!
//! Cells live in one arena indexed by [`CellId`](flea_core::CellId)
//! (row-major).  Adjacency is a list of `CellId`s per cell, never a reference,
//! so a `Grid` is a plain owned value with no aliasing: one worker builds it,
//! mutates it, and drops it at trial end.

pub mod error;
pub mod grid;
pub mod occupancy;
pub mod render;
pub mod topology;


pub use error::{GridError, GridResult};
pub use grid::{CellView, Grid};
pub use occupancy::Occupancy;
pub use render::{render, CellFormat, CountOnly, GridDisplay, WithNeighbors};
pub use topology::{Topology, MOVES};
