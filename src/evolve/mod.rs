//! Evolutionary search for maximally complex mazes.
//!
//! Candidates are whole voxel grids; fitness is the shortest traversable
//! start-to-goal distance under the movement physics. Generations are bred
//! from an elite set by mutation and crossover, and the search terminates
//! once the best distance stagnates.

mod breeding;
mod fitness;
mod search;

pub use breeding::{Axis, MazeRng, clear_entry_points, cross_at};
pub use fitness::FitnessEvaluator;
pub use search::{Candidate, EvolutionEngine};

use thiserror::Error;

use crate::maze::GridError;
use crate::movement::PathError;

/// Failures surfaced by the evolution loop.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvolveError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Path(#[from] PathError),
    /// The seed phase ran out of wall-clock time without producing a single
    /// valid candidate.
    #[error("no valid seed maze found within {elapsed_secs}s")]
    SeedTimeout { elapsed_secs: u64 },
}
