use log::warn;

use crate::core::grid::CellGrid;
use crate::core::random::XorShift32;
use crate::domain::config::FooterConfig;
use crate::domain::palette::Palette;
use crate::systems::stagnation::StagnationDetector;

use super::{seed, LifeCore, DEFAULT_RNG_SEED};

pub(super) fn create_life_core(cols: usize, rows: usize, config: FooterConfig) -> LifeCore {
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            warn!("{err}; falling back to default footer config");
            FooterConfig::default()
        }
    };

    let mut core = LifeCore {
        grid: CellGrid::new(cols, rows),
        detector: StagnationDetector::new(config.stagnation_threshold, config.generation_ceiling),
        palette: Palette::default(),
        rng: XorShift32::new(config.rng_seed.unwrap_or(DEFAULT_RNG_SEED)),
        generation: 0,
        fade_alpha: 0.0,
        is_restarting: false,
        pattern: None,
        config,
    };
    seed::seed_random(&mut core);
    core
}
