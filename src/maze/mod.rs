//! Voxel maze storage and presentation.

mod grid;
mod render;

pub use grid::{Block, GridError, Pos, VoxelGrid};
pub use render::draw_map;
