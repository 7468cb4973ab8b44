//! Maze construction and the genetic operators, all driven by one
//! explicitly seeded random source.

use rand::prelude::*;

use crate::maze::{Block, GridError, Pos, VoxelGrid};

/// Number of cells a single mutation may overwrite.
const MUTATION_CELLS: usize = 6;

/// Axis a crossover cut runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Seedable random source for maze generation, mutation, and crossover.
///
/// This is the only source of randomness in the crate; it is threaded
/// explicitly through every operator, so a fixed seed reproduces a whole
/// evolution run.
pub struct MazeRng {
    rng: StdRng,
}

impl MazeRng {
    /// Create from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with an entropy-derived seed.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Build a `size³` grid with `round(size³ · density)` walls placed at
    /// independently uniform coordinates. Duplicate draws overwrite.
    pub fn random_maze(&mut self, size: i32, density: f64) -> Result<VoxelGrid, GridError> {
        let mut grid = VoxelGrid::new(size, size, size);
        let walls = ((size as f64).powi(3) * density).round() as usize;
        for _ in 0..walls {
            let x = self.rng.gen_range(0..size);
            let y = self.rng.gen_range(0..size);
            let z = self.rng.gen_range(0..size);
            grid.put(x, y, z, Block::Wall)?;
        }
        Ok(grid)
    }

    /// Overwrite up to [`MUTATION_CELLS`] uniformly chosen cells, each with a
    /// uniformly chosen wall or empty state.
    pub fn mutate(&mut self, grid: &mut VoxelGrid) -> Result<(), GridError> {
        for _ in 0..MUTATION_CELLS {
            let x = self.rng.gen_range(0..grid.width());
            let y = self.rng.gen_range(0..grid.height());
            let z = self.rng.gen_range(0..grid.depth());
            let block = if self.rng.gen_bool(0.5) {
                Block::Wall
            } else {
                Block::Empty
            };
            grid.put(x, y, z, block)?;
        }
        Ok(())
    }

    /// Single-cut crossover along a uniformly chosen axis. The cut falls in
    /// `[1, size - 2]` so both parents contribute a non-empty slab.
    pub fn cross(&mut self, a: &VoxelGrid, b: &VoxelGrid) -> Result<VoxelGrid, GridError> {
        let axis = match self.rng.gen_range(0..3) {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        };
        let cut = self.rng.gen_range(1..=a.width() - 2);
        cross_at(a, b, axis, cut)
    }

    /// Fair coin flip (operator choice in the breeding loop).
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Uniformly pick an element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }
}

/// Deterministic crossover: cells strictly below `cut` on `axis` come from
/// `a`, cells at or above it from `b`.
pub fn cross_at(a: &VoxelGrid, b: &VoxelGrid, axis: Axis, cut: i32) -> Result<VoxelGrid, GridError> {
    let mut child = VoxelGrid::new(a.width(), a.height(), a.depth());
    for (x, y, z) in a.positions() {
        let coord = match axis {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        };
        let parent = if coord < cut { a } else { b };
        child.put(x, y, z, parent.get(x, y, z)?)?;
    }
    Ok(child)
}

/// Make every entry point a standable vacancy regardless of the random fill:
/// clear the point and its headroom cell, and lay a floor under it when the
/// floor cell is inside the declared volume.
pub fn clear_entry_points(grid: &mut VoxelGrid, points: &[Pos]) -> Result<(), GridError> {
    for &(x, y, z) in points {
        grid.put(x, y, z, Block::Empty)?;
        grid.put(x, y - 1, z, Block::Empty)?;
        if y + 1 < grid.height() {
            grid.put(x, y + 1, z, Block::Wall)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::movement::MovementGraph;

    fn wall_count(grid: &VoxelGrid) -> usize {
        grid.positions()
            .filter(|&(x, y, z)| grid.get(x, y, z) == Ok(Block::Wall))
            .count()
    }

    #[test]
    fn zero_density_stays_empty() {
        let mut rng = MazeRng::new(1);
        let maze = rng.random_maze(6, 0.0).unwrap();
        assert_eq!(wall_count(&maze), 0);
    }

    #[test]
    fn density_bounds_the_wall_count() {
        let mut rng = MazeRng::new(1);
        let maze = rng.random_maze(10, 0.2).unwrap();
        let walls = wall_count(&maze);
        // Duplicate draws overwrite, so the placement count is an upper bound.
        assert!(walls > 0);
        assert!(walls <= 200);
    }

    #[test]
    fn generation_is_reproducible() {
        let a = MazeRng::new(99).random_maze(8, 0.3).unwrap();
        let b = MazeRng::new(99).random_maze(8, 0.3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cleared_entry_points_are_standable() {
        let mut rng = MazeRng::new(3);
        let mut maze = rng.random_maze(10, 1.0).unwrap();
        let points = [(0, 9, 0), (9, 6, 9)];
        clear_entry_points(&mut maze, &points).unwrap();

        let graph = MovementGraph::build(&maze).unwrap();
        for &(x, y, z) in &points {
            assert!(graph.is_vacancy((x, y, z)));
            assert_eq!(maze.get(x, y - 1, z), Ok(Block::Empty));
            if y + 1 < maze.height() {
                assert_eq!(maze.get(x, y + 1, z), Ok(Block::Wall));
            }
        }
    }

    #[test]
    fn entry_point_on_the_top_layer_is_a_contract_violation() {
        let mut maze = VoxelGrid::new(4, 4, 4);
        // The headroom cell of y = 0 lies in the border and cannot be written.
        assert!(clear_entry_points(&mut maze, &[(1, 0, 1)]).is_err());
    }

    #[test]
    fn mutation_touches_at_most_six_cells() {
        let mut rng = MazeRng::new(5);
        let original = rng.random_maze(8, 0.2).unwrap();
        let mut mutated = original.clone();
        rng.mutate(&mut mutated).unwrap();

        let changed = original
            .positions()
            .filter(|&(x, y, z)| original.get(x, y, z) != mutated.get(x, y, z))
            .count();
        assert!(changed <= 6);
    }

    #[test]
    fn cross_at_splits_along_the_cut() {
        let size = 6;
        let mut walls = VoxelGrid::new(size, size, size);
        for (x, y, z) in walls.positions() {
            walls.put(x, y, z, Block::Wall).unwrap();
        }
        let empty = VoxelGrid::new(size, size, size);

        for (axis, pick) in [
            (Axis::X, (|p: Pos| p.0) as fn(Pos) -> i32),
            (Axis::Y, |p: Pos| p.1),
            (Axis::Z, |p: Pos| p.2),
        ] {
            let child = cross_at(&walls, &empty, axis, 2).unwrap();
            for (x, y, z) in child.positions() {
                let expected = if pick((x, y, z)) < 2 {
                    Block::Wall
                } else {
                    Block::Empty
                };
                assert_eq!(child.get(x, y, z), Ok(expected));
            }
        }
    }

    proptest! {
        // Every offspring cell is accounted for by exactly one parent.
        #[test]
        fn crossover_cells_come_from_one_parent(
            seed_a in 0u64..1000,
            seed_b in 0u64..1000,
            axis_idx in 0usize..3,
            cut in 1i32..=4,
        ) {
            let size = 6;
            let a = MazeRng::new(seed_a).random_maze(size, 0.4).unwrap();
            let b = MazeRng::new(seed_b).random_maze(size, 0.4).unwrap();
            let axis = [Axis::X, Axis::Y, Axis::Z][axis_idx];

            let child = cross_at(&a, &b, axis, cut).unwrap();
            for (x, y, z) in child.positions() {
                let coord = match axis {
                    Axis::X => x,
                    Axis::Y => y,
                    Axis::Z => z,
                };
                let parent = if coord < cut { &a } else { &b };
                prop_assert_eq!(child.get(x, y, z), parent.get(x, y, z));
            }
        }
    }
}
