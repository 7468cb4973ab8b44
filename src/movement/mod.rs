//! Platformer movement physics over a voxel grid: graph derivation and
//! shortest-path search.

mod graph;
mod path;

pub use graph::MovementGraph;
pub use path::{PathError, PathResult, shortest};
