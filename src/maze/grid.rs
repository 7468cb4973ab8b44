//! Voxel grid storage and the coordinate contract.

use thiserror::Error;

/// Grid coordinate triple. Decreasing `y` is up, increasing `y` is down.
pub type Pos = (i32, i32, i32);

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Empty,
    Wall,
    /// Sentinel returned for reads in the one-cell border around the
    /// declared volume. Never stored.
    OutOfBounds,
}

/// Coordinate contract violations. Always a caller bug, never recovered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate ({x}, {y}, {z}) is outside the extended grid bounds")]
    OutOfRange { x: i32, y: i32, z: i32 },
}

/// A bounded 3D voxel grid with one cell of border slack on every side.
///
/// Cells live in a dense flat buffer indexed `(x*height + y)*depth + z`.
/// Reads accept coordinates in `[-1, dimension]` per axis and yield
/// [`Block::OutOfBounds`] in the border; writes are only accepted strictly
/// inside the declared volume. Anything further out is rejected with
/// [`GridError::OutOfRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    width: i32,
    height: i32,
    depth: i32,
    blocks: Vec<Block>,
}

impl VoxelGrid {
    /// Create a fully empty grid of the given dimensions.
    pub fn new(width: i32, height: i32, depth: i32) -> Self {
        assert!(width > 0 && height > 0 && depth > 0, "dimensions must be positive");
        let size = (width * height * depth) as usize;
        Self {
            width,
            height,
            depth,
            blocks: vec![Block::Empty; size],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    #[inline]
    fn in_extended(&self, x: i32, y: i32, z: i32) -> bool {
        (-1..=self.width).contains(&x)
            && (-1..=self.height).contains(&y)
            && (-1..=self.depth).contains(&z)
    }

    #[inline]
    fn in_declared(&self, x: i32, y: i32, z: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y) && (0..self.depth).contains(&z)
    }

    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        ((x * self.height + y) * self.depth + z) as usize
    }

    /// Read the state of a cell.
    ///
    /// Coordinates in the one-cell border yield [`Block::OutOfBounds`];
    /// coordinates beyond the border violate the contract.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<Block, GridError> {
        if !self.in_extended(x, y, z) {
            return Err(GridError::OutOfRange { x, y, z });
        }
        if !self.in_declared(x, y, z) {
            return Ok(Block::OutOfBounds);
        }
        Ok(self.blocks[self.index(x, y, z)])
    }

    /// Write a cell state. Only coordinates strictly inside the declared
    /// volume are writable; border writes are rejected rather than ignored.
    pub fn put(&mut self, x: i32, y: i32, z: i32, block: Block) -> Result<(), GridError> {
        debug_assert!(block != Block::OutOfBounds, "the sentinel is never stored");
        if !self.in_declared(x, y, z) {
            return Err(GridError::OutOfRange { x, y, z });
        }
        let idx = self.index(x, y, z);
        self.blocks[idx] = block;
        Ok(())
    }

    /// Iterate every declared cell coordinate in a fixed x-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (w, h, d) = (self.width, self.height, self.depth);
        (0..w).flat_map(move |x| (0..h).flat_map(move |y| (0..d).map(move |z| (x, y, z))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let g = VoxelGrid::new(3, 4, 5);
        for (x, y, z) in g.positions() {
            assert_eq!(g.get(x, y, z), Ok(Block::Empty));
        }
    }

    #[test]
    fn put_then_get() {
        let mut g = VoxelGrid::new(4, 4, 4);
        g.put(1, 2, 3, Block::Wall).unwrap();
        assert_eq!(g.get(1, 2, 3), Ok(Block::Wall));
        assert_eq!(g.get(1, 2, 2), Ok(Block::Empty));
    }

    #[test]
    fn border_reads_are_out_of_bounds() {
        let g = VoxelGrid::new(4, 4, 4);
        assert_eq!(g.get(-1, 0, 0), Ok(Block::OutOfBounds));
        assert_eq!(g.get(4, 0, 0), Ok(Block::OutOfBounds));
        assert_eq!(g.get(0, -1, 0), Ok(Block::OutOfBounds));
        assert_eq!(g.get(0, 4, 0), Ok(Block::OutOfBounds));
        assert_eq!(g.get(0, 0, -1), Ok(Block::OutOfBounds));
        assert_eq!(g.get(0, 0, 4), Ok(Block::OutOfBounds));
    }

    #[test]
    fn reads_past_the_border_are_rejected() {
        let g = VoxelGrid::new(4, 4, 4);
        assert_eq!(g.get(-2, 0, 0), Err(GridError::OutOfRange { x: -2, y: 0, z: 0 }));
        assert_eq!(g.get(0, 5, 0), Err(GridError::OutOfRange { x: 0, y: 5, z: 0 }));
    }

    #[test]
    fn border_writes_are_rejected() {
        let mut g = VoxelGrid::new(4, 4, 4);
        assert!(g.put(-1, 0, 0, Block::Wall).is_err());
        assert!(g.put(0, 4, 0, Block::Wall).is_err());
        assert!(g.put(0, 0, 7, Block::Wall).is_err());
        // Nothing was silently written anywhere.
        for (x, y, z) in g.positions() {
            assert_eq!(g.get(x, y, z), Ok(Block::Empty));
        }
    }

    #[test]
    fn clone_is_independent() {
        let mut original = VoxelGrid::new(4, 4, 4);
        original.put(2, 2, 2, Block::Wall).unwrap();
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.put(0, 0, 0, Block::Wall).unwrap();
        assert_eq!(original.get(0, 0, 0), Ok(Block::Empty));
        assert_eq!(copy.get(0, 0, 0), Ok(Block::Wall));
    }

    #[test]
    fn positions_cover_the_volume_once() {
        let g = VoxelGrid::new(2, 3, 4);
        let all: Vec<Pos> = g.positions().collect();
        assert_eq!(all.len(), 24);
        let mut sorted = all.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 24);
        // Fixed, deterministic order.
        assert_eq!(all[0], (0, 0, 0));
        assert_eq!(all[1], (0, 0, 1));
        assert_eq!(all, g.positions().collect::<Vec<_>>());
    }
}
