//! Life Footer Engine - Conway's Game of Life strip for the site footer
//!
//! Architecture:
//! - core/        - Grid storage, errors, RNG
//! - domain/      - Patterns, palettes, config
//! - systems/     - Update rule and stagnation detection
//! - simulation/  - Restart state machine, frame clock, renderer
//! - render/      - Drawing onto a 2D surface
//! - api/         - Browser facade, console controls, Founder Mode

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod render;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    web_sys::console::log_1(&"Life footer engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::api::console::{ConsoleControls, GolConsole};
pub use crate::api::founder_mode::{FounderMode, FounderModeState, MemoryStore, PreferenceStore};
pub use crate::api::wasm::{CanvasSurface, GameOfLifeFooter};
pub use crate::core::error::{FooterError, FooterResult};
pub use crate::domain::config::FooterConfig;
pub use crate::domain::palette::{ColorMode, Theme};
pub use crate::domain::patterns::Pattern;
pub use crate::render::{DrawSurface, HeadlessSurface};
pub use crate::simulation::{FooterRenderer, FooterStats, LifeCore};
