//! Host-facing surfaces: the browser facade, console controls and the
//! Founder Mode preference.

pub mod console;
pub mod founder_mode;
pub mod wasm;
