//! flea-circus — how many squares are empty after the bell rings 50 times?
//!
//! 900 fleas start one per square on a 30×30 grid.  Each ring of the bell,
//! every flea jumps to a random orthogonal neighbor.  After 50 rings we count
//! the empty squares, and average that count over 10,000 trials.
//!
//! Run with:
//!   cargo run -p flea-circus --release
//!
//! Logs go to stderr (`RUST_LOG=flea_sim=debug` for per-worker detail);
//! stdout carries only the result lines.

use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use flea_core::{BatchConfig, TrialRng, DEFAULT_WORKERS};
use flea_grid::Grid;
use flea_sim::{BatchBuilder, ExecutionMode, GridPrinter, run_rounds};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    /// One trial after another on the main thread.
    Sequential,
    /// Fixed pool of worker threads fed through a work queue.
    Pool,
    /// Rayon work stealing (needs the `parallel` feature).
    Rayon,
}

impl Mode {
    fn execution_mode(self) -> Result<ExecutionMode> {
        match self {
            Mode::Sequential => Ok(ExecutionMode::Sequential),
            Mode::Pool       => Ok(ExecutionMode::WorkerPool { workers: DEFAULT_WORKERS }),
            #[cfg(feature = "parallel")]
            Mode::Rayon      => Ok(ExecutionMode::WorkStealing),
            #[cfg(not(feature = "parallel"))]
            Mode::Rayon      => bail!("--mode rayon requires building with `--features parallel`"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "flea-circus")]
#[command(about = "Average empty squares after 50 bell rings on a 30×30 flea grid")]
struct Args {
    /// How trials are distributed.
    #[arg(long, value_enum, default_value_t = Mode::Pool)]
    mode: Mode,

    /// Batch seed for a reproducible run.  Fresh entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Dump a sample trial's grid to stdout before the batch.
    #[arg(long)]
    show_grid: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = BatchBuilder::new(BatchConfig::default()).mode(args.mode.execution_mode()?);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let batch = builder.build()?;
    info!(seed = batch.seed, mode = ?batch.mode, "batch configured");

    if args.show_grid {
        show_sample(&batch.config, batch.seed)?;
    }

    let summary = batch.run()?;

    let mut out = io::stdout().lock();
    writeln!(out, "Average count of unoccupied fields: {:.6}", summary.average())?;
    writeln!(out, "Elapsed time: {:?}", summary.elapsed)?;
    Ok(())
}

/// Print the initial adjacency and the final counts of one trial.
fn show_sample(config: &BatchConfig, seed: u64) -> Result<()> {
    let mut grid = Grid::new(config.trial.grid_size)?;
    let mut printer = GridPrinter::new(io::stdout().lock(), false);
    run_rounds(&mut grid, config.trial.rounds, &mut TrialRng::from_seed(seed), &mut printer);
    if let Some(e) = printer.take_error() {
        return Err(e.into());
    }
    Ok(())
}
