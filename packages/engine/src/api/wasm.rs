//! Browser facade
//!
//! Binds a `FooterRenderer` to a `<canvas>`, a `requestAnimationFrame` loop
//! and the page observers (viewport, resize, theme). The renderer is shared
//! as `Rc<RefCell<_>>` between the JS callbacks; none of them hold a borrow
//! across a call back into JS.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MutationObserver, MutationObserverInit,
};

use crate::core::error::{FooterError, FooterResult};
use crate::domain::config::FooterConfig;
use crate::domain::palette::{Rgba, Theme};
use crate::render::DrawSurface;
use crate::simulation::{FooterRenderer, FooterStats};

use super::console::{ConsoleControls, GolConsole};
use super::founder_mode::FounderModeState;

type SharedFooter = Rc<RefCell<FooterRenderer<CanvasSurface>>>;

fn to_js(err: FooterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `DrawSurface` backed by a canvas 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> FooterResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| FooterError::Browser(format!("getContext: {e:?}")))?
            .ok_or_else(|| FooterError::SurfaceMissing("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FooterError::Browser("getContext(\"2d\") returned another context".into()))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.ctx.set_shadow_color(&color.to_css());
        self.ctx.set_shadow_blur(blur);
    }

    fn clear_shadow(&mut self) {
        self.ctx.set_shadow_blur(0.0);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

fn container_width(canvas: &HtmlCanvasElement) -> f64 {
    match canvas.parent_element() {
        Some(parent) => parent.client_width() as f64,
        None => canvas.client_width() as f64,
    }
}

fn current_theme() -> Theme {
    let attr = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute("data-theme"));
    Theme::from_attribute(attr.as_deref())
}

fn find_canvas(canvas_id: &str) -> Option<HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(canvas_id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

/// One `requestAnimationFrame` registration at a time
#[derive(Clone)]
struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

struct FrameLoopInner {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
}

impl FrameLoop {
    fn new(footer: SharedFooter) -> Self {
        let inner = Rc::new(FrameLoopInner { callback: RefCell::new(None), pending: Cell::new(None) });
        let weak: Weak<FrameLoopInner> = Rc::downgrade(&inner);

        let callback = Closure::wrap(Box::new(move |now: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            let again = footer.borrow_mut().tick(now);
            if again {
                FrameLoop { inner }.schedule();
            }
        }) as Box<dyn FnMut(f64)>);

        *inner.callback.borrow_mut() = Some(callback);
        Self { inner }
    }

    fn schedule(&self) {
        if self.inner.pending.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.inner.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.inner.pending.set(Some(id)),
            Err(e) => warn!("requestAnimationFrame failed: {e:?}"),
        }
    }

    fn cancel(&self) {
        if let (Some(id), Some(window)) = (self.inner.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

/// Debounced window resize: each event restarts a timer that applies the
/// new container width once it fires.
struct ResizeWatch {
    listener: Closure<dyn FnMut()>,
    _timer: Rc<Closure<dyn FnMut()>>,
    timeout: Rc<Cell<Option<i32>>>,
}

impl ResizeWatch {
    fn install(footer: &SharedFooter, canvas: HtmlCanvasElement) -> FooterResult<Self> {
        let window = web_sys::window().ok_or_else(|| FooterError::Browser("no window".into()))?;
        let timeout: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let timer = {
            let footer = Rc::clone(footer);
            let timeout = Rc::clone(&timeout);
            Rc::new(Closure::wrap(Box::new(move || {
                timeout.set(None);
                footer.borrow_mut().poll_resize(now_ms());
            }) as Box<dyn FnMut()>))
        };

        let listener = {
            let footer = Rc::clone(footer);
            let timeout = Rc::clone(&timeout);
            let timer = Rc::clone(&timer);
            Closure::wrap(Box::new(move || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let delay = {
                    let mut footer = footer.borrow_mut();
                    footer.on_resize(container_width(&canvas), now_ms());
                    footer.resize_debounce_ms()
                };
                if let Some(id) = timeout.take() {
                    window.clear_timeout_with_handle(id);
                }
                // one past the quiet period so the poll always finds it due
                match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    (*timer).as_ref().unchecked_ref(),
                    delay.ceil() as i32 + 1,
                ) {
                    Ok(id) => timeout.set(Some(id)),
                    Err(e) => warn!("setTimeout failed: {e:?}"),
                }
            }) as Box<dyn FnMut()>)
        };

        window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            .map_err(|e| FooterError::Browser(format!("resize listener: {e:?}")))?;

        Ok(Self { listener, _timer: timer, timeout })
    }

    fn remove(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.listener.as_ref().unchecked_ref());
            if let Some(id) = self.timeout.take() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

struct PageObservers {
    visibility: IntersectionObserver,
    _visibility_cb: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    theme: MutationObserver,
    _theme_cb: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
    resize: ResizeWatch,
}

impl PageObservers {
    fn install(footer: &SharedFooter, frame_loop: &FrameLoop, canvas: HtmlCanvasElement) -> FooterResult<Self> {
        let visibility_cb = {
            let footer = Rc::clone(footer);
            let frame_loop = frame_loop.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let resumed = footer.borrow_mut().on_visibility_change(entry.intersection_ratio());
                    if resumed {
                        frame_loop.schedule();
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(footer.borrow().visibility_threshold()));
        let visibility = IntersectionObserver::new_with_options(visibility_cb.as_ref().unchecked_ref(), &init)
            .map_err(|e| FooterError::Browser(format!("IntersectionObserver: {e:?}")))?;
        visibility.observe(&canvas);

        let theme_cb = {
            let footer = Rc::clone(footer);
            Closure::wrap(Box::new(move |_: js_sys::Array, _: MutationObserver| {
                footer.borrow_mut().on_theme_change(current_theme());
            }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>)
        };
        let theme = MutationObserver::new(theme_cb.as_ref().unchecked_ref())
            .map_err(|e| FooterError::Browser(format!("MutationObserver: {e:?}")))?;
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| FooterError::Browser("no document element".into()))?;
        let options = MutationObserverInit::new();
        options.set_attributes(true);
        options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("data-theme")));
        theme
            .observe_with_options(&root, &options)
            .map_err(|e| FooterError::Browser(format!("observe data-theme: {e:?}")))?;

        let resize = ResizeWatch::install(footer, canvas)?;

        Ok(Self {
            visibility,
            _visibility_cb: visibility_cb,
            theme,
            _theme_cb: theme_cb,
            resize,
        })
    }

    fn disconnect(&self) {
        self.visibility.disconnect();
        self.theme.disconnect();
        self.resize.remove();
    }
}

/// The footer animation for one `<canvas>`
#[wasm_bindgen]
pub struct GameOfLifeFooter {
    footer: SharedFooter,
    frame_loop: FrameLoop,
    observers: Option<PageObservers>,
}

#[wasm_bindgen]
impl GameOfLifeFooter {
    /// Attach to `#canvas_id`. Without such a canvas the footer is inert.
    /// `config_json` may set any subset of the config fields.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<GameOfLifeFooter, JsValue> {
        let mut config = match config_json {
            Some(json) => FooterConfig::from_json(&json).map_err(to_js)?,
            None => FooterConfig::default(),
        };
        if config.rng_seed.is_none() {
            config.rng_seed = Some((js_sys::Math::random() * u32::MAX as f64) as u32);
        }

        let attached = find_canvas(canvas_id).and_then(|canvas| match CanvasSurface::new(canvas) {
            Ok(surface) => Some(surface),
            Err(err) => {
                warn!("{err}");
                None
            }
        });
        let canvas = attached.as_ref().map(|s| s.canvas().clone());
        let width = canvas.as_ref().map_or(0.0, container_width);

        let footer: SharedFooter = Rc::new(RefCell::new(FooterRenderer::new(attached, width, config)));
        let frame_loop = FrameLoop::new(Rc::clone(&footer));

        let Some(canvas) = canvas else {
            return Ok(Self { footer, frame_loop, observers: None });
        };

        footer.borrow_mut().on_theme_change(current_theme());
        let observers = PageObservers::install(&footer, &frame_loop, canvas).map_err(to_js)?;
        frame_loop.schedule();

        Ok(Self { footer, frame_loop, observers: Some(observers) })
    }

    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.footer.borrow().is_attached()
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.footer.borrow().is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool {
        self.footer.borrow().is_paused()
    }

    /// Returns true when now paused
    pub fn toggle_pause(&self) -> bool {
        let paused = self.footer.borrow_mut().toggle_pause();
        self.resume_if_running();
        paused
    }

    /// Start over with a random pattern; returns its name
    pub fn reseed(&self) -> Option<String> {
        self.footer.borrow_mut().reseed().map(|p| p.name().to_string())
    }

    pub fn set_frame_rate(&self, fps: f64) -> Result<(), JsValue> {
        self.footer.borrow_mut().set_frame_rate(fps).map_err(to_js)
    }

    pub fn set_enhanced_mode(&self, enhanced: bool) {
        self.footer.borrow_mut().on_mode_change(enhanced);
    }

    pub fn stats(&self) -> Option<FooterStats> {
        self.footer.borrow().stats()
    }

    /// Controls for `pm.gol`
    pub fn console(&self) -> GolConsole {
        let frame_loop = self.frame_loop.clone();
        let controls = ConsoleControls::new(Rc::clone(&self.footer))
            .with_resume_hook(move || frame_loop.schedule());
        GolConsole::new(controls)
    }

    /// Use spectrum colours whenever Founder Mode is on
    pub fn follow_founder_mode(&self, state: &FounderModeState) {
        let footer = Rc::downgrade(&self.footer);
        state.inner.borrow_mut().subscribe(move |active| {
            if let Some(footer) = footer.upgrade() {
                footer.borrow_mut().on_mode_change(active);
            }
        });
    }
}

impl GameOfLifeFooter {
    fn resume_if_running(&self) {
        if self.footer.borrow().is_running() {
            self.frame_loop.schedule();
        }
    }
}

impl Drop for GameOfLifeFooter {
    fn drop(&mut self) {
        if let Some(observers) = self.observers.take() {
            observers.disconnect();
        }
        self.frame_loop.cancel();
        self.frame_loop.inner.callback.borrow_mut().take();
    }
}
