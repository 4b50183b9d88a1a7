//! Stagnation detection
//!
//! The grid is packed into a bitstring (row after row) and compared with the
//! previous generation. Only period-1 stagnation is caught this way; period-2
//! oscillators flip between two states and run until the generation ceiling.

use crate::core::grid::{CellGrid, ALIVE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartReason {
    /// Too many identical consecutive generations
    Stagnant,
    /// Generation ceiling passed
    Timeout,
}

impl RestartReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RestartReason::Stagnant => "stagnant",
            RestartReason::Timeout => "timeout",
        }
    }
}

/// Row bitstrings of `grid`, concatenated and packed 64 cells per word
pub fn structural_hash(grid: &CellGrid, out: &mut Vec<u64>) {
    out.clear();
    out.resize(grid.size().div_ceil(64), 0);
    for (i, cell) in grid.cells().iter().enumerate() {
        if *cell == ALIVE {
            out[i / 64] |= 1u64 << (i % 64);
        }
    }
}

#[derive(Clone, Debug)]
pub struct StagnationDetector {
    threshold: u32,
    ceiling: u64,
    stagnant: u32,
    last_hash: Option<Vec<u64>>,
    scratch: Vec<u64>,
}

impl StagnationDetector {
    pub fn new(threshold: u32, ceiling: u64) -> Self {
        Self {
            threshold,
            ceiling,
            stagnant: 0,
            last_hash: None,
            scratch: Vec::new(),
        }
    }

    pub fn stagnant_generations(&self) -> u32 {
        self.stagnant
    }

    /// Forget the previous state (called when a new pattern is seeded)
    pub fn reset(&mut self) {
        self.stagnant = 0;
        if let Some(prev) = self.last_hash.take() {
            self.scratch = prev;
        }
    }

    /// Record the state after `generation` and decide whether to restart.
    pub fn observe(&mut self, grid: &CellGrid, generation: u64) -> Option<RestartReason> {
        let mut hash = std::mem::take(&mut self.scratch);
        structural_hash(grid, &mut hash);

        if self.last_hash.as_ref() == Some(&hash) {
            self.stagnant += 1;
        } else {
            self.stagnant = 0;
        }

        if let Some(prev) = self.last_hash.replace(hash) {
            self.scratch = prev;
        }

        if self.stagnant > self.threshold {
            Some(RestartReason::Stagnant)
        } else if generation > self.ceiling {
            Some(RestartReason::Timeout)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_distinguishes_shifted_states() {
        let a = CellGrid::from_ascii(&["#..", "..."]);
        let b = CellGrid::from_ascii(&[".#.", "..."]);
        let (mut ha, mut hb) = (Vec::new(), Vec::new());
        structural_hash(&a, &mut ha);
        structural_hash(&b, &mut hb);
        assert_ne!(ha, hb);
    }

    #[test]
    fn static_grid_restarts_after_threshold() {
        let grid = CellGrid::new(8, 4);
        let mut detector = StagnationDetector::new(10, 480);

        // first observation has nothing to compare against
        assert_eq!(detector.observe(&grid, 1), None);
        for generation in 2..=11 {
            assert_eq!(detector.observe(&grid, generation), None);
        }
        assert_eq!(detector.stagnant_generations(), 10);
        assert_eq!(detector.observe(&grid, 12), Some(RestartReason::Stagnant));
    }

    #[test]
    fn change_resets_the_counter() {
        let still = CellGrid::new(4, 4);
        let other = CellGrid::from_ascii(&["#...", "....", "....", "...."]);
        let mut detector = StagnationDetector::new(10, 480);
        detector.observe(&still, 1);
        detector.observe(&still, 2);
        assert_eq!(detector.stagnant_generations(), 1);
        detector.observe(&other, 3);
        assert_eq!(detector.stagnant_generations(), 0);
    }

    #[test]
    fn ceiling_fires_regardless_of_activity() {
        let mut detector = StagnationDetector::new(10, 480);
        let a = CellGrid::from_ascii(&["#..."]);
        let b = CellGrid::from_ascii(&[".#.."]);
        assert_eq!(detector.observe(&a, 480), None);
        assert_eq!(detector.observe(&b, 481), Some(RestartReason::Timeout));
    }

    #[test]
    fn reset_forgets_the_last_state() {
        let grid = CellGrid::new(4, 4);
        let mut detector = StagnationDetector::new(10, 480);
        detector.observe(&grid, 1);
        detector.observe(&grid, 2);
        detector.reset();
        assert_eq!(detector.stagnant_generations(), 0);
        detector.observe(&grid, 1);
        assert_eq!(detector.stagnant_generations(), 0);
    }
}
