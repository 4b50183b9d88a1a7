//! CellGrid - double-buffered Game of Life storage
//!
//! Row-major flat arrays instead of `Vec<Vec<u8>>`:
//! - `cells`  - the visible generation (0 = dead, 1 = alive)
//! - `next`   - scratch generation written by the update rule
//! - `colors` - palette index per cell, only meaningful while the cell is alive
//!
//! `cells` and `next` are swapped after each generation, never reallocated.

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

#[derive(Clone, Debug)]
pub struct CellGrid {
    cols: usize,
    rows: usize,

    pub(crate) cells: Vec<u8>,
    pub(crate) next: Vec<u8>,
    pub(crate) colors: Vec<u8>,
}

impl CellGrid {
    /// Allocate an all-dead grid. Dimensions are clamped to at least 1x1.
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let size = cols * rows;
        Self {
            cols,
            rows,
            cells: vec![DEAD; size],
            next: vec![DEAD; size],
            colors: vec![0; size],
        }
    }

    /// Build a grid from ASCII rows (`#` alive, anything else dead).
    /// Width is the longest row; short rows are padded with dead cells.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(1);
        let mut grid = Self::new(cols, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, b) in row.bytes().enumerate() {
                if b == b'#' {
                    grid.set_alive(x, y, true);
                }
            }
        }
        grid
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows && self.cells[self.index(x, y)] == ALIVE
    }

    /// Returns false (and does nothing) when out of bounds.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> bool {
        if x >= self.cols || y >= self.rows {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = if alive { ALIVE } else { DEAD };
        true
    }

    #[inline]
    pub fn color(&self, x: usize, y: usize) -> u8 {
        self.colors[self.index(x, y)]
    }

    pub fn set_color(&mut self, x: usize, y: usize, color: u8) {
        if x < self.cols && y < self.rows {
            let idx = self.index(x, y);
            self.colors[idx] = color;
        }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Kill every cell (colours are left alone, they are dead weight until reuse)
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
        self.next.fill(DEAD);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == ALIVE).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.contains(&ALIVE)
    }

    /// Constant-time swap of the front and back buffers
    #[inline]
    pub fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_positive_dimensions() {
        let grid = CellGrid::new(0, 0);
        assert_eq!((grid.cols(), grid.rows()), (1, 1));
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.next.len(), grid.colors.len());
    }

    #[test]
    fn from_ascii_pads_short_rows() {
        let grid = CellGrid::from_ascii(&["#..#", "#"]);
        assert_eq!((grid.cols(), grid.rows()), (4, 2));
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(3, 0));
        assert!(grid.is_alive(0, 1));
        assert!(!grid.is_alive(3, 1));
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn set_alive_out_of_bounds_is_ignored() {
        let mut grid = CellGrid::new(3, 3);
        assert!(!grid.set_alive(3, 0, true));
        assert!(!grid.set_alive(0, 3, true));
        assert!(grid.is_extinct());
    }

    #[test]
    fn swap_exchanges_buffers_without_copying() {
        let mut grid = CellGrid::new(2, 2);
        grid.next[3] = ALIVE;
        let next_ptr = grid.next.as_ptr();
        grid.swap_buffers();
        assert_eq!(grid.cells.as_ptr(), next_ptr);
        assert!(grid.is_alive(1, 1));
    }
}
