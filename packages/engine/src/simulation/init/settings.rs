use crate::core::grid::ALIVE;
use crate::domain::palette::{ColorMode, Theme};

use super::LifeCore;

pub(super) fn set_theme(core: &mut LifeCore, theme: Theme) {
    core.palette.theme = theme;
}

/// Switching mode recolours the live cells from the new palette
pub(super) fn set_color_mode(core: &mut LifeCore, mode: ColorMode) {
    if core.palette.mode == mode {
        return;
    }
    core.palette.mode = mode;
    recolor_live_cells(core);
}

pub(super) fn recolor_live_cells(core: &mut LifeCore) {
    let len = core.palette.len();
    let LifeCore { grid, rng, .. } = core;
    for (cell, color) in grid.cells.iter().zip(grid.colors.iter_mut()) {
        if *cell == ALIVE {
            *color = rng.below(len) as u8;
        }
    }
}
