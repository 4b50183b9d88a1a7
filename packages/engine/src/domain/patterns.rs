//! Seed patterns
//!
//! Templates are ASCII (`#` alive, `.` dead) and are stamped onto the grid
//! at a fixed or centred offset. Anything falling outside the grid is
//! dropped, never wrapped.

use crate::core::grid::CellGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Methuselah, runs for thousands of generations on an open plane
    Acorn,
    /// The classic five-cell methuselah
    RPentomino,
    /// Gosper glider gun, needs a wide grid
    GliderGun,
    /// Dies out completely (generation 130 on an open plane)
    Diehard,
}

const ACORN: &[&str] = &[
    ".#.....",
    "...#...",
    "##..###",
];

const R_PENTOMINO: &[&str] = &[
    ".##",
    "##.",
    ".#.",
];

const GLIDER_GUN: &[&str] = &[
    "........................#...........",
    "......................#.#...........",
    "............##......##............##",
    "...........#...#....##............##",
    "##........#.....#...##..............",
    "##........#...#.##....#.#...........",
    "..........#.....#.......#...........",
    "...........#...#....................",
    "............##......................",
];

const DIEHARD: &[&str] = &[
    "......#.",
    "##......",
    ".#...###",
];

/// Left margin used for the glider gun so its gliders have room to travel
const GLIDER_GUN_LEFT: isize = 5;

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Acorn,
        Pattern::RPentomino,
        Pattern::GliderGun,
        Pattern::Diehard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Acorn => "Acorn",
            Pattern::RPentomino => "R-pentomino",
            Pattern::GliderGun => "Gosper glider gun",
            Pattern::Diehard => "Diehard",
        }
    }

    pub fn template(self) -> &'static [&'static str] {
        match self {
            Pattern::Acorn => ACORN,
            Pattern::RPentomino => R_PENTOMINO,
            Pattern::GliderGun => GLIDER_GUN,
            Pattern::Diehard => DIEHARD,
        }
    }

    /// The pattern that will actually be placed on a grid `cols` wide.
    /// The glider gun is swapped for the R-pentomino on narrow grids.
    pub fn resolve(self, cols: usize, glider_gun_min_cols: usize) -> Pattern {
        match self {
            Pattern::GliderGun if cols < glider_gun_min_cols => Pattern::RPentomino,
            other => other,
        }
    }

    /// Top-left corner of the template on a `cols x rows` grid
    pub fn origin(self, cols: usize, rows: usize) -> (isize, isize) {
        let cx = (cols / 2) as isize;
        let cy = (rows / 2) as isize;
        match self {
            Pattern::Acorn => (cx - 3, cy - 1),
            Pattern::RPentomino => (cx - 1, cy - 1),
            Pattern::GliderGun => (GLIDER_GUN_LEFT, cy - 4),
            Pattern::Diehard => (cx - 4, cy - 1),
        }
    }
}

/// Stamp `template` with its top-left at (`ox`, `oy`).
/// Returns the number of live cells that landed on the grid.
pub fn place_template(grid: &mut CellGrid, template: &[&str], ox: isize, oy: isize) -> usize {
    let mut placed = 0;
    for (ty, row) in template.iter().enumerate() {
        for (tx, b) in row.bytes().enumerate() {
            if b != b'#' {
                continue;
            }
            let x = ox + tx as isize;
            let y = oy + ty as isize;
            if grid.in_bounds(x, y) {
                grid.set_alive(x as usize, y as usize, true);
                placed += 1;
            }
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_cells(template: &[&str]) -> usize {
        template.iter().map(|r| r.bytes().filter(|b| *b == b'#').count()).sum()
    }

    #[test]
    fn templates_have_expected_populations() {
        assert_eq!(live_cells(Pattern::Acorn.template()), 7);
        assert_eq!(live_cells(Pattern::RPentomino.template()), 5);
        assert_eq!(live_cells(Pattern::GliderGun.template()), 36);
        assert_eq!(live_cells(Pattern::Diehard.template()), 7);
    }

    #[test]
    fn glider_gun_falls_back_on_narrow_grids() {
        assert_eq!(Pattern::GliderGun.resolve(39, 40), Pattern::RPentomino);
        assert_eq!(Pattern::GliderGun.resolve(40, 40), Pattern::GliderGun);
        assert_eq!(Pattern::Diehard.resolve(10, 40), Pattern::Diehard);
    }

    #[test]
    fn placement_near_edges_is_clipped() {
        let mut grid = CellGrid::new(4, 4);
        // Only the bottom-right corner of the R-pentomino fits.
        let placed = place_template(&mut grid, R_PENTOMINO, -1, -1);
        assert_eq!(placed, 2);
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(0, 1));
        assert_eq!(grid.live_count(), 2);

        let mut grid = CellGrid::new(4, 4);
        assert_eq!(place_template(&mut grid, GLIDER_GUN, 10, 10), 0);
        assert!(grid.is_extinct());
    }

    #[test]
    fn centred_origins_follow_grid_size() {
        assert_eq!(Pattern::Diehard.origin(40, 10), (16, 4));
        assert_eq!(Pattern::Acorn.origin(80, 12), (37, 5));
        assert_eq!(Pattern::GliderGun.origin(80, 12), (5, 2));
    }
}
