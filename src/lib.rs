//! Evolutionary search for maximally complex 3D voxel mazes.
//!
//! A maze is a bounded voxel grid; its complexity is the shortest distance a
//! platformer agent (walk one block, step up one block, fall any depth) must
//! travel from a fixed start to a fixed goal. For each candidate grid the
//! crate derives a movement graph under those physics, scores it with a
//! breadth-first shortest path, and evolves random candidates (elitist
//! selection, mutation, crossover) until that distance stops improving.
//!
//! # Architecture
//!
//! - `schema`: run configuration and validation
//! - `maze`: voxel grid storage and ASCII presentation
//! - `movement`: movement-graph derivation and shortest-path search
//! - `evolve`: maze factory, genetic operators, fitness, the search loop
//!
//! # Example
//!
//! ```rust,no_run
//! use mazevolve::{EvolutionConfig, EvolutionEngine};
//!
//! let config = EvolutionConfig {
//!     random_seed: Some(42),
//!     ..EvolutionConfig::default()
//! };
//! let mut engine = EvolutionEngine::new((0, 9, 0), (9, 6, 9), config);
//! let best = engine.run().expect("evolution failed");
//! println!("most complex maze found: distance {}", best.distance);
//! ```

pub mod evolve;
pub mod maze;
pub mod movement;
pub mod schema;

// Re-export commonly used types
pub use evolve::{
    Candidate, EvolutionEngine, EvolveError, FitnessEvaluator, MazeRng, clear_entry_points,
};
pub use maze::{Block, GridError, Pos, VoxelGrid, draw_map};
pub use movement::{MovementGraph, PathError, PathResult, shortest};
pub use schema::{ConfigError, EvolutionConfig};
