//! Conway's Game of Life update
//!
//! Topology: columns wrap (a cylinder), rows do not. Cells above row 0 and
//! below the last row count as dead.

use crate::core::grid::{CellGrid, ALIVE, DEAD};

/// Births and deaths produced by one generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationDelta {
    pub births: u32,
    pub deaths: u32,
}

/// B3/S23
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

#[inline]
fn count_in(cells: &[u8], cols: usize, rows: usize, x: usize, y: usize) -> u8 {
    let left = (x + cols - 1) % cols;
    let right = (x + 1) % cols;
    let mut count = 0u8;

    for ny in [y.wrapping_sub(1), y, y + 1] {
        // wrapping_sub turns -1 into usize::MAX, which fails this check too
        if ny >= rows {
            continue;
        }
        let row = &cells[ny * cols..(ny + 1) * cols];
        count += row[left] + row[right];
        if ny != y {
            count += row[x];
        }
    }
    count
}

/// Live neighbours of (`x`, `y`) with horizontal wraparound
pub fn count_neighbors(grid: &CellGrid, x: usize, y: usize) -> u8 {
    count_in(&grid.cells, grid.cols(), grid.rows(), x, y)
}

/// Advance `grid` by one generation.
///
/// `next` is fully overwritten, then the buffers are swapped. Every cell
/// that is born gets a fresh palette index from `pick_color`; survivors keep
/// theirs.
pub fn step_generation<F>(grid: &mut CellGrid, mut pick_color: F) -> GenerationDelta
where
    F: FnMut() -> u8,
{
    let cols = grid.cols();
    let rows = grid.rows();
    let mut delta = GenerationDelta::default();

    {
        let CellGrid { cells, next, colors, .. } = grid;
        for y in 0..rows {
            for x in 0..cols {
                let idx = y * cols + x;
                let alive = cells[idx] == ALIVE;
                let neighbors = count_in(cells, cols, rows, x, y);
                let lives = next_state(alive, neighbors);

                next[idx] = if lives { ALIVE } else { DEAD };

                match (alive, lives) {
                    (false, true) => {
                        colors[idx] = pick_color();
                        delta.births += 1;
                    }
                    (true, false) => delta.deaths += 1,
                    _ => {}
                }
            }
        }
    }

    grid.swap_buffers();
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        for k in 0..=8u8 {
            assert_eq!(next_state(true, k), k == 2 || k == 3, "alive with {k}");
            assert_eq!(next_state(false, k), k == 3, "dead with {k}");
        }
    }

    #[test]
    fn columns_wrap_rows_do_not() {
        let grid = CellGrid::from_ascii(&[
            "#...#",
            ".....",
            "#....",
        ]);
        // (0,0) sees (4,0) through the left edge
        assert_eq!(count_neighbors(&grid, 0, 0), 1);
        assert_eq!(count_neighbors(&grid, 4, 0), 1);
        // row 2 is not adjacent to row 0
        assert_eq!(count_neighbors(&grid, 0, 2), 0);
        // (4,0) through the edge, plus (0,0) and (0,2) directly
        assert_eq!(count_neighbors(&grid, 0, 1), 3);
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = CellGrid::from_ascii(&[
            ".....",
            "..#..",
            "..#..",
            "..#..",
            ".....",
        ]);
        let delta = step_generation(&mut grid, || 0);
        assert_eq!(delta, GenerationDelta { births: 2, deaths: 2 });
        assert!(grid.is_alive(1, 2) && grid.is_alive(2, 2) && grid.is_alive(3, 2));
        assert_eq!(grid.live_count(), 3);

        step_generation(&mut grid, || 0);
        assert!(grid.is_alive(2, 1) && grid.is_alive(2, 2) && grid.is_alive(2, 3));
    }

    #[test]
    fn births_get_new_colours_survivors_keep_theirs() {
        let mut grid = CellGrid::from_ascii(&[
            ".....",
            "..#..",
            "..#..",
            "..#..",
            ".....",
        ]);
        grid.set_color(2, 2, 9);
        step_generation(&mut grid, || 4);
        assert_eq!(grid.color(2, 2), 9);
        assert_eq!(grid.color(1, 2), 4);
        assert_eq!(grid.color(3, 2), 4);
    }

    #[test]
    fn block_is_a_still_life() {
        let mut grid = CellGrid::from_ascii(&[
            "....",
            ".##.",
            ".##.",
            "....",
        ]);
        let before = grid.cells().to_vec();
        let delta = step_generation(&mut grid, || 0);
        assert_eq!(delta, GenerationDelta::default());
        assert_eq!(grid.cells(), &before[..]);
    }
}
