use log::{debug, info, warn};

use crate::core::error::FooterResult;
use crate::domain::config::{FooterConfig, Layout};
use crate::domain::palette::{ColorMode, Theme};
use crate::domain::patterns::Pattern;
use crate::render::{draw_cells, DrawSurface, FrameStyle};

use super::frame_clock::check_fps;
use super::{FooterStats, FrameClock, FrameStep, LifeCore, ResizeDebouncer};

/// The footer animation: a `LifeCore` bound to a drawing surface.
///
/// Time only enters through `tick(now)`, so any host can drive it: a
/// `requestAnimationFrame` loop, a timer, or a test feeding synthetic
/// timestamps. Host notifications (visibility, resize, theme, mode) only set
/// state; the grid is only ever advanced inside `tick`.
///
/// Built without a surface the renderer is inert and every call is a no-op.
pub struct FooterRenderer<S: DrawSurface> {
    state: Option<Attached<S>>,
}

struct Attached<S: DrawSurface> {
    config: FooterConfig,
    core: LifeCore,
    surface: S,
    layout: Layout,
    clock: FrameClock,
    resize: ResizeDebouncer,

    running: bool,
    visible: bool,
    manually_paused: bool,
}

impl<S: DrawSurface> Attached<S> {
    fn start(&mut self) {
        self.running = true;
        self.clock.reset();
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn draw(&mut self) {
        let style = FrameStyle {
            palette: *self.core.palette(),
            fade_alpha: self.core.fade_alpha(),
            cell_size: self.layout.cell_size,
            glow_blur: self.config.glow_blur,
        };
        draw_cells(&mut self.surface, self.core.grid(), &style);
    }

    fn apply_resize(&mut self, width: f64) {
        let layout = self.config.layout_for_width(width);
        if layout == self.layout {
            return;
        }
        self.surface.resize(layout.canvas_width, layout.canvas_height);
        if self.core.resize(layout.cols, layout.rows) {
            info!("footer grid resized to {}x{}", layout.cols, layout.rows);
        }
        self.layout = layout;
        // resizing the canvas wiped it
        self.draw();
    }
}

impl<S: DrawSurface> FooterRenderer<S> {
    /// Size the surface for `container_width`, seed a pattern and start running.
    pub fn new(surface: Option<S>, container_width: f64, config: FooterConfig) -> Self {
        let Some(mut surface) = surface else {
            warn!("Game of Life canvas not found");
            return Self::inert();
        };

        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("{err}; falling back to default footer config");
                FooterConfig::default()
            }
        };

        let layout = config.layout_for_width(container_width);
        surface.resize(layout.canvas_width, layout.canvas_height);

        let core = LifeCore::new(layout.cols, layout.rows, config.clone());
        let clock = FrameClock::new(config.fps);
        let resize = ResizeDebouncer::new(config.resize_debounce_ms);

        let mut state = Attached {
            config,
            core,
            surface,
            layout,
            clock,
            resize,
            running: false,
            visible: true,
            manually_paused: false,
        };
        state.start();

        Self { state: Some(state) }
    }

    /// A renderer with nothing to draw on
    pub fn inert() -> Self {
        Self { state: None }
    }

    pub fn is_attached(&self) -> bool {
        self.state.is_some()
    }

    /// Drive the loop. Returns whether the host should call again next frame.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(st) = self.state.as_mut() else {
            return false;
        };

        if let Some(width) = st.resize.take_due(now) {
            st.apply_resize(width);
        }
        if !st.running {
            return false;
        }

        if st.clock.poll(now) {
            if let FrameStep::Reseeded(pattern) = st.core.logical_step() {
                debug!("footer restarted with {}", pattern.name());
            }
            st.draw();
        }
        true
    }

    pub fn start(&mut self) {
        if let Some(st) = self.state.as_mut() {
            st.start();
        }
    }

    pub fn stop(&mut self) {
        if let Some(st) = self.state.as_mut() {
            st.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.as_ref().is_some_and(|st| st.running)
    }

    pub fn is_paused(&self) -> bool {
        self.state.as_ref().is_some_and(|st| st.manually_paused)
    }

    pub fn is_visible(&self) -> bool {
        self.state.as_ref().is_some_and(|st| st.visible)
    }

    /// Flip the manual pause. Returns true when now paused.
    pub fn toggle_pause(&mut self) -> bool {
        let Some(st) = self.state.as_mut() else {
            return false;
        };
        st.manually_paused = !st.manually_paused;
        if st.manually_paused {
            st.stop();
        } else if st.visible {
            st.start();
        }
        st.manually_paused
    }

    /// Replace the current pattern with a random one (fades in)
    pub fn reseed(&mut self) -> Option<Pattern> {
        let st = self.state.as_mut()?;
        let pattern = st.core.seed_random();
        st.draw();
        Some(pattern)
    }

    /// Replace the current pattern with `pattern` (or its fallback)
    pub fn seed_pattern(&mut self, pattern: Pattern) -> Option<Pattern> {
        let st = self.state.as_mut()?;
        let placed = st.core.seed(pattern);
        st.draw();
        Some(placed)
    }

    /// Generations per second, 1..=30. Anything else is rejected and the
    /// current rate is kept.
    pub fn set_frame_rate(&mut self, fps: f64) -> FooterResult<()> {
        let Some(st) = self.state.as_mut() else {
            return check_fps(fps);
        };
        match st.clock.set_fps(fps) {
            Ok(()) => {
                debug!("footer frame rate set to {fps}");
                Ok(())
            }
            Err(err) => {
                warn!("{err}");
                Err(err)
            }
        }
    }

    pub fn frame_interval_ms(&self) -> Option<f64> {
        self.state.as_ref().map(|st| st.clock.interval_ms())
    }

    /// Intersection ratio of the surface with the viewport.
    /// Returns true when the loop went from stopped to running and the host
    /// needs to schedule a tick.
    pub fn on_visibility_change(&mut self, ratio: f64) -> bool {
        let Some(st) = self.state.as_mut() else {
            return false;
        };
        let visible = ratio > 0.0 && ratio >= st.config.visibility_threshold;
        st.visible = visible;

        if visible {
            if !st.running && !st.manually_paused {
                debug!("footer visible, resuming");
                st.start();
                return true;
            }
        } else if st.running {
            debug!("footer hidden, pausing");
            st.stop();
        }
        false
    }

    /// Container width changed; applied once resizes stop for the debounce period
    pub fn on_resize(&mut self, container_width: f64, now: f64) {
        if let Some(st) = self.state.as_mut() {
            st.resize.schedule(container_width, now);
        }
    }

    /// Apply a pending resize if its quiet period is over. Returns true if applied.
    pub fn poll_resize(&mut self, now: f64) -> bool {
        let Some(st) = self.state.as_mut() else {
            return false;
        };
        match st.resize.take_due(now) {
            Some(width) => {
                st.apply_resize(width);
                true
            }
            None => false,
        }
    }

    pub fn resize_debounce_ms(&self) -> f64 {
        self.state
            .as_ref()
            .map_or(FooterConfig::default().resize_debounce_ms, |st| st.config.resize_debounce_ms)
    }

    pub fn visibility_threshold(&self) -> f64 {
        self.state
            .as_ref()
            .map_or(FooterConfig::default().visibility_threshold, |st| st.config.visibility_threshold)
    }

    pub fn on_theme_change(&mut self, theme: Theme) {
        if let Some(st) = self.state.as_mut() {
            st.core.set_theme(theme);
            st.draw();
        }
    }

    /// `enhanced` = per-cell spectrum colours, otherwise the plain theme colour
    pub fn on_mode_change(&mut self, enhanced: bool) {
        if let Some(st) = self.state.as_mut() {
            st.core.set_color_mode(ColorMode::from_enhanced(enhanced));
            st.draw();
        }
    }

    /// Redraw the current state without advancing
    pub fn render(&mut self) {
        if let Some(st) = self.state.as_mut() {
            st.draw();
        }
    }

    pub fn stats(&self) -> Option<FooterStats> {
        let st = self.state.as_ref()?;
        Some(FooterStats {
            generation: st.core.generation(),
            stagnant_generations: st.core.stagnant_generations(),
            fade_alpha: st.core.fade_alpha(),
            live_cells: st.core.live_cells() as u32,
            cols: st.core.cols() as u32,
            rows: st.core.rows() as u32,
            fps: st.clock.fps(),
            running: st.running,
            paused: st.manually_paused,
            restarting: st.core.is_restarting(),
            pattern: st.core.pattern().map(|p| p.name().to_string()),
        })
    }

    pub fn core(&self) -> Option<&LifeCore> {
        self.state.as_ref().map(|st| &st.core)
    }

    pub fn core_mut(&mut self) -> Option<&mut LifeCore> {
        self.state.as_mut().map(|st| &mut st.core)
    }

    pub fn surface(&self) -> Option<&S> {
        self.state.as_ref().map(|st| &st.surface)
    }

    pub fn layout(&self) -> Option<Layout> {
        self.state.as_ref().map(|st| st.layout)
    }
}
