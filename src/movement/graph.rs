//! Movement graph derivation: which positions an agent can occupy and which
//! unit-cost transitions (walk, jump, fall) connect them.

use std::collections::{HashMap, HashSet};

use crate::maze::{Block, GridError, Pos, VoxelGrid};

/// The four horizontal step directions as `(dx, dz)`.
const HORIZONTAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Directed movement graph over the vacancies of one grid snapshot.
///
/// Built once per grid and never mutated; a changed grid needs a rebuilt
/// graph. Neighbours are stored in an adjacency index so the solver's lookup
/// is a single map probe instead of an edge-set scan.
#[derive(Debug)]
pub struct MovementGraph {
    vacancies: HashSet<Pos>,
    adjacency: HashMap<Pos, Vec<Pos>>,
    edge_count: usize,
}

impl MovementGraph {
    /// Derive the graph from a grid snapshot.
    ///
    /// A position is a vacancy when its own cell and the headroom cell above
    /// it are both empty. Footing is not required: a mid-air vacancy exists,
    /// is reachable as a fall, walk, or jump target, and leaves only by
    /// falling.
    pub fn build(grid: &VoxelGrid) -> Result<Self, GridError> {
        let mut vacancies = HashSet::new();
        for (x, y, z) in grid.positions() {
            if grid.get(x, y, z)? == Block::Empty && grid.get(x, y - 1, z)? == Block::Empty {
                vacancies.insert((x, y, z));
            }
        }

        let mut adjacency: HashMap<Pos, Vec<Pos>> = HashMap::new();
        let mut edge_count = 0;
        for &(x, y, z) in &vacancies {
            let mut targets = Vec::new();

            // Walking and jumping need solid footing. The out-of-bounds
            // border counts as solid, so the bottom layer is walkable.
            if grid.get(x, y + 1, z)? != Block::Empty {
                for (dx, dz) in HORIZONTAL {
                    let step = (x + dx, y, z + dz);
                    if vacancies.contains(&step) {
                        targets.push(step);
                    }
                }

                // Step up onto a one-block obstacle: the jump arc needs the
                // cell two above to be clear, and only a blocked horizontal
                // direction is worth jumping toward.
                if grid.get(x, y - 2, z)? == Block::Empty {
                    for (dx, dz) in HORIZONTAL {
                        if grid.get(x + dx, y, z + dz)? != Block::Empty {
                            let up = (x + dx, y - 1, z + dz);
                            if vacancies.contains(&up) {
                                targets.push(up);
                            }
                        }
                    }
                }
            }

            // Falling is available from any vacancy, footed or not.
            let below = (x, y + 1, z);
            if vacancies.contains(&below) {
                targets.push(below);
            }

            if !targets.is_empty() {
                edge_count += targets.len();
                adjacency.insert((x, y, z), targets);
            }
        }

        Ok(Self {
            vacancies,
            adjacency,
            edge_count,
        })
    }

    pub fn vacancies(&self) -> &HashSet<Pos> {
        &self.vacancies
    }

    #[inline]
    pub fn is_vacancy(&self, pos: Pos) -> bool {
        self.vacancies.contains(&pos)
    }

    /// Destinations reachable from `pos` in one move.
    pub fn edges_from(&self, pos: Pos) -> &[Pos] {
        self.adjacency.get(&pos).map_or(&[], Vec::as_slice)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
