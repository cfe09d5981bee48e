//! Grid error type.

use thiserror::Error;

use flea_core::{CellId, FleaId};

/// Errors produced by `flea-grid`.
///
/// Only [`InvalidSize`](Self::InvalidSize) can happen with valid inputs; the
/// other variants are reported by [`Occupancy::verify`](crate::Occupancy::verify)
/// and mean the occupancy bookkeeping itself is broken.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid size {0} is too small; every cell needs at least 2 neighbors")]
    InvalidSize(u32),

    #[error("expected {expected} fleas, but {found} are present")]
    FleaCountMismatch { expected: usize, found: usize },

    #[error("{flea} references {owner} but appears {listed} time(s) in that cell")]
    OwnershipMismatch {
        flea:   FleaId,
        owner:  CellId,
        listed: usize,
    },
}

pub type GridResult<T> = Result<T, GridError>;
