use flea_core::CoreError;
use flea_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{0} queue disconnected before every trial reported")]
    Disconnected(&'static str),
}

pub type SimResult<T> = Result<T, SimError>;
