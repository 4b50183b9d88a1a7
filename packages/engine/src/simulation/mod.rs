//! Footer simulation
//!
//! `LifeCore` owns the grid and the restart state machine:
//! Steady-update -> Fading-out -> Seeding -> Fading-in -> Steady-update.
//! It knows nothing about time or drawing.
//!
//! `FooterRenderer` wraps a core with a drawing surface, the frame clock and
//! the lifecycle flags (visibility, manual pause, pending resize).

use log::debug;

use crate::core::grid::CellGrid;
use crate::core::random::XorShift32;
use crate::domain::config::FooterConfig;
use crate::domain::palette::{ColorMode, Palette, Theme};
use crate::domain::patterns::Pattern;
use crate::systems::life::GenerationDelta;
use crate::systems::stagnation::{RestartReason, StagnationDetector};

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/seed.rs"]
mod seed;
#[path = "clock/frame_clock.rs"]
mod frame_clock;
#[path = "clock/debounce.rs"]
mod debounce;
#[path = "stats/stats.rs"]
mod stats;
mod renderer;

pub use debounce::ResizeDebouncer;
pub use frame_clock::FrameClock;
pub use renderer::FooterRenderer;
pub use stats::FooterStats;

/// Used when the config does not pin a seed
pub const DEFAULT_RNG_SEED: u32 = 12345;

/// What one logical frame did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStep {
    FadeOut,
    /// Fade-out finished and a new pattern was placed (alpha is 0)
    Reseeded(Pattern),
    FadeIn,
    Generation { restart: Option<RestartReason> },
}

/// Grid plus simulation state
pub struct LifeCore {
    config: FooterConfig,
    grid: CellGrid,
    detector: StagnationDetector,
    palette: Palette,
    rng: XorShift32,

    generation: u64,
    fade_alpha: f32,
    is_restarting: bool,
    pattern: Option<Pattern>,
}

impl LifeCore {
    /// Allocate a `cols x rows` grid and seed a random pattern
    pub fn new(cols: usize, rows: usize, config: FooterConfig) -> Self {
        init::create_life_core(cols, rows, config)
    }

    pub fn config(&self) -> &FooterConfig { &self.config }

    pub fn grid(&self) -> &CellGrid { &self.grid }

    pub fn cols(&self) -> usize { self.grid.cols() }

    pub fn rows(&self) -> usize { self.grid.rows() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn stagnant_generations(&self) -> u32 { self.detector.stagnant_generations() }

    pub fn fade_alpha(&self) -> f32 { self.fade_alpha }

    pub fn is_restarting(&self) -> bool { self.is_restarting }

    /// Pattern placed by the last seed (after any fallback)
    pub fn pattern(&self) -> Option<Pattern> { self.pattern }

    pub fn palette(&self) -> &Palette { &self.palette }

    pub fn live_cells(&self) -> usize { self.grid.live_count() }

    /// One logical frame: a fade step, or a generation plus stagnation check
    pub fn logical_step(&mut self) -> FrameStep {
        step::logical_step(self)
    }

    /// Apply the update rule once, without stagnation bookkeeping
    pub fn advance_generation(&mut self) -> GenerationDelta {
        step::advance_generation(self)
    }

    /// Clear the grid and place `pattern` (or its fallback). Returns what was placed.
    pub fn seed(&mut self, pattern: Pattern) -> Pattern {
        seed::seed(self, pattern)
    }

    /// Seed a pattern chosen uniformly at random
    pub fn seed_random(&mut self) -> Pattern {
        seed::seed_random(self)
    }

    /// Reallocate and reseed when the dimensions change. Returns true if they did.
    pub fn resize(&mut self, cols: usize, rows: usize) -> bool {
        if cols.max(1) == self.grid.cols() && rows.max(1) == self.grid.rows() {
            return false;
        }
        debug!("life grid {}x{} -> {}x{}", self.grid.cols(), self.grid.rows(), cols, rows);
        self.grid = CellGrid::new(cols, rows);
        seed::seed_random(self);
        true
    }

    pub fn set_theme(&mut self, theme: Theme) {
        settings::set_theme(self, theme);
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        settings::set_color_mode(self, mode);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
