use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Snapshot of the footer for the console `stats()` command
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FooterStats {
    pub(super) generation: u64,
    pub(super) stagnant_generations: u32,
    pub(super) fade_alpha: f32,
    pub(super) live_cells: u32,
    pub(super) cols: u32,
    pub(super) rows: u32,
    pub(super) fps: f64,
    pub(super) running: bool,
    pub(super) paused: bool,
    pub(super) restarting: bool,
    pub(super) pattern: Option<String>,
}

impl FooterStats {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[wasm_bindgen]
impl FooterStats {
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn stagnant_generations(&self) -> u32 { self.stagnant_generations }
    #[wasm_bindgen(getter)]
    pub fn fade_alpha(&self) -> f32 { self.fade_alpha }
    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.live_cells }
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.cols }
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.rows }
    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f64 { self.fps }
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.running }
    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.paused }
    #[wasm_bindgen(getter)]
    pub fn restarting(&self) -> bool { self.restarting }
    #[wasm_bindgen(getter)]
    pub fn pattern(&self) -> Option<String> { self.pattern.clone() }
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json_js(&self) -> String { self.to_json() }
}
