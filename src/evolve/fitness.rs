//! Fitness evaluation: one candidate maze in, its shortest start-to-goal
//! path out.

use crate::maze::{Pos, VoxelGrid};
use crate::movement::{MovementGraph, PathResult, shortest};

use super::EvolveError;

/// Scores candidate mazes by the shortest traversable distance between a
/// fixed start and goal. Longer is fitter.
///
/// The movement graph is rebuilt from scratch for every candidate; nothing
/// is cached across evaluations.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator {
    start: Pos,
    goal: Pos,
}

impl FitnessEvaluator {
    pub fn new(start: Pos, goal: Pos) -> Self {
        Self { start, goal }
    }

    /// `Ok(None)` means the goal is unreachable: the candidate is invalid and
    /// the caller retries, it is not a failure.
    pub fn evaluate(&self, grid: &VoxelGrid) -> Result<Option<PathResult>, EvolveError> {
        let graph = MovementGraph::build(grid)?;
        Ok(shortest(&graph, self.start, self.goal)?)
    }
}
