use log::debug;

use crate::systems::life::{step_generation, GenerationDelta};

use super::{seed, FrameStep, LifeCore};

pub(super) fn logical_step(core: &mut LifeCore) -> FrameStep {
    let fade = core.config.fade_step;

    if core.is_restarting {
        core.fade_alpha = (core.fade_alpha - fade).max(0.0);
        if core.fade_alpha <= 0.0 {
            // seeding leaves alpha at 0, the next frames fade the new pattern in
            let pattern = seed::seed_random(core);
            return FrameStep::Reseeded(pattern);
        }
        return FrameStep::FadeOut;
    }

    if core.fade_alpha < 1.0 {
        core.fade_alpha = (core.fade_alpha + fade).min(1.0);
        return FrameStep::FadeIn;
    }

    advance_generation(core);
    let restart = core.detector.observe(&core.grid, core.generation);
    if let Some(reason) = restart {
        debug!(
            "restart requested at generation {} ({})",
            core.generation,
            reason.as_str()
        );
        core.is_restarting = true;
    }
    FrameStep::Generation { restart }
}

pub(super) fn advance_generation(core: &mut LifeCore) -> GenerationDelta {
    let len = core.palette.len();
    let rng = &mut core.rng;
    let delta = step_generation(&mut core.grid, || rng.below(len) as u8);
    core.generation += 1;
    delta
}
