//! Developer console controls (`pm.gol.*` on the site)
//!
//! Built with an explicit handle to the footer it drives.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;

use crate::render::DrawSurface;
use crate::simulation::FooterRenderer;

use super::wasm::CanvasSurface;

const NOT_AVAILABLE: &str = "Game of Life not available";

type ResumeHook = Rc<dyn Fn()>;

pub struct ConsoleControls<S: DrawSurface> {
    footer: Rc<RefCell<FooterRenderer<S>>>,
    on_resume: Option<ResumeHook>,
}

impl<S: DrawSurface> Clone for ConsoleControls<S> {
    fn clone(&self) -> Self {
        Self { footer: Rc::clone(&self.footer), on_resume: self.on_resume.clone() }
    }
}

impl<S: DrawSurface> ConsoleControls<S> {
    pub fn new(footer: Rc<RefCell<FooterRenderer<S>>>) -> Self {
        Self { footer, on_resume: None }
    }

    /// `hook` runs whenever `pause()` leaves the footer running again, so the
    /// host can schedule the next tick. A paused footer's loop has stopped.
    pub fn with_resume_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_resume = Some(Rc::new(hook));
        self
    }

    fn available(&self) -> bool {
        let attached = self.footer.borrow().is_attached();
        if !attached {
            info!("{NOT_AVAILABLE}");
        }
        attached
    }

    /// Toggle pause. Returns true when now paused.
    pub fn pause(&self) -> bool {
        if !self.available() {
            return false;
        }
        let (paused, running) = {
            let mut footer = self.footer.borrow_mut();
            let paused = footer.toggle_pause();
            (paused, footer.is_running())
        };
        info!("{}", if paused { "Paused" } else { "Playing" });
        if running {
            if let Some(hook) = &self.on_resume {
                hook();
            }
        }
        paused
    }

    /// Start over with a random pattern
    pub fn reset(&self) -> bool {
        if !self.available() {
            return false;
        }
        match self.footer.borrow_mut().reseed() {
            Some(pattern) => {
                info!("Pattern reset ({})", pattern.name());
                true
            }
            None => false,
        }
    }

    pub fn speed(&self, fps: f64) -> bool {
        if !self.available() {
            return false;
        }
        // a rejected rate is already logged by the renderer
        let accepted = self.footer.borrow_mut().set_frame_rate(fps).is_ok();
        if accepted {
            info!("Speed set to {fps} FPS");
        }
        accepted
    }

    /// Current stats as JSON, `None` without a canvas
    pub fn stats(&self) -> Option<String> {
        if !self.available() {
            return None;
        }
        self.footer.borrow().stats().map(|s| s.to_json())
    }

    pub fn help() -> &'static [&'static str] {
        &[
            "gol.pause()   -> pause/play simulation",
            "gol.reset()   -> reset to new pattern",
            "gol.speed(n)  -> set FPS (1-30)",
            "gol.stats()   -> current generation and timing",
        ]
    }
}

/// Console controls exposed to JS
#[wasm_bindgen]
pub struct GolConsole {
    controls: ConsoleControls<CanvasSurface>,
}

impl GolConsole {
    pub(crate) fn new(controls: ConsoleControls<CanvasSurface>) -> Self {
        Self { controls }
    }
}

#[wasm_bindgen]
impl GolConsole {
    pub fn pause(&self) -> bool {
        self.controls.pause()
    }

    pub fn reset(&self) -> bool {
        self.controls.reset()
    }

    pub fn speed(&self, fps: f64) -> bool {
        self.controls.speed(fps)
    }

    pub fn stats(&self) -> Option<String> {
        self.controls.stats()
    }

    pub fn help(&self) {
        for line in ConsoleControls::<CanvasSurface>::help() {
            web_sys::console::log_1(&(*line).into());
        }
    }
}
