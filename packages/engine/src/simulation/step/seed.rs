use log::debug;

use crate::domain::patterns::{place_template, Pattern};

use super::{settings, LifeCore};

pub(super) fn seed(core: &mut LifeCore, requested: Pattern) -> Pattern {
    let cols = core.grid.cols();
    let rows = core.grid.rows();
    let pattern = requested.resolve(cols, core.config.glider_gun_min_cols as usize);

    core.grid.clear();
    let (ox, oy) = pattern.origin(cols, rows);
    let placed = place_template(&mut core.grid, pattern.template(), ox, oy);
    settings::recolor_live_cells(core);

    core.generation = 0;
    core.detector.reset();
    core.fade_alpha = 0.0;
    core.is_restarting = false;
    core.pattern = Some(pattern);

    debug!("seeded {} ({placed} cells) on {cols}x{rows}", pattern.name());
    pattern
}

pub(super) fn seed_random(core: &mut LifeCore) -> Pattern {
    let pattern = Pattern::ALL[core.rng.below(Pattern::ALL.len())];
    seed(core, pattern)
}
