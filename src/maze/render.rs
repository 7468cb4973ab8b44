//! ASCII rendering of a maze for human inspection.

use std::fmt::Write;

use super::grid::{Block, Pos, VoxelGrid};

/// Render the grid as one ASCII block per horizontal layer.
///
/// Layers are printed top (`Y=0`) to bottom; inside a layer, rows run from
/// the far `Z` edge down to `Z=0` with `X` increasing to the right. Walls and
/// the outer frame print as `#`, the start and goal as `S` and `G`.
pub fn draw_map(grid: &VoxelGrid, start: Pos, goal: Pos) -> String {
    let mut out = String::new();
    let border = "#".repeat(grid.width() as usize + 2);

    for y in 0..grid.height() {
        let _ = writeln!(out, "Y={y}");
        out.push_str(&border);
        out.push('\n');
        for z in (0..grid.depth()).rev() {
            out.push('#');
            for x in 0..grid.width() {
                let mark = if start == (x, y, z) {
                    'S'
                } else if goal == (x, y, z) {
                    'G'
                } else if matches!(grid.get(x, y, z), Ok(Block::Wall)) {
                    '#'
                } else {
                    ' '
                };
                out.push(mark);
            }
            let _ = writeln!(out, "# Z={z}");
        }
        out.push_str(&border);
        out.push('\n');
    }
    out
}
