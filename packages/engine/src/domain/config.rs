//! Footer configuration
//!
//! Every field has a default so the page can pass a partial JSON object
//! (or nothing at all).

use serde::{Deserialize, Serialize};

use crate::core::error::{FooterError, FooterResult};

pub const MIN_FPS: f64 = 1.0;
pub const MAX_FPS: f64 = 30.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Logical generations per second
    pub fps: f64,
    pub cell_size: u32,
    pub mobile_cell_size: u32,
    pub rows: u32,
    pub mobile_rows: u32,
    /// Container widths below this use the mobile layout
    pub mobile_breakpoint: f64,
    /// Identical consecutive generations tolerated before a restart
    pub stagnation_threshold: u32,
    /// Hard restart once the generation count passes this
    pub generation_ceiling: u64,
    /// Alpha change per logical frame while fading
    pub fade_step: f32,
    pub resize_debounce_ms: f64,
    pub glider_gun_min_cols: u32,
    /// Fraction of the canvas that must be on screen to keep animating
    pub visibility_threshold: f64,
    pub glow_blur: f64,
    /// Fixed RNG seed; `None` lets the host pick one
    pub rng_seed: Option<u32>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            fps: 8.0,
            cell_size: 8,
            mobile_cell_size: 6,
            rows: 12,
            mobile_rows: 10,
            mobile_breakpoint: 768.0,
            stagnation_threshold: 10,
            generation_ceiling: 480,
            fade_step: 0.05,
            resize_debounce_ms: 250.0,
            glider_gun_min_cols: 40,
            visibility_threshold: 0.1,
            glow_blur: 4.0,
            rng_seed: None,
        }
    }
}

/// Pixel and cell dimensions for one container width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub cell_size: u32,
    pub cols: usize,
    pub rows: usize,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl FooterConfig {
    pub fn from_json(json: &str) -> FooterResult<Self> {
        let config: FooterConfig =
            serde_json::from_str(json).map_err(|e| FooterError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FooterResult<()> {
        if !(MIN_FPS..=MAX_FPS).contains(&self.fps) {
            return Err(FooterError::InvalidConfig(format!(
                "fps {} outside {MIN_FPS}..={MAX_FPS}",
                self.fps
            )));
        }
        // cells are drawn inset by one pixel on each side
        if self.cell_size < 3 || self.mobile_cell_size < 3 {
            return Err(FooterError::InvalidConfig("cell sizes must be at least 3px".into()));
        }
        if self.rows == 0 || self.mobile_rows == 0 {
            return Err(FooterError::InvalidConfig("row counts must be positive".into()));
        }
        if !(self.fade_step > 0.0 && self.fade_step <= 1.0) {
            return Err(FooterError::InvalidConfig(format!(
                "fade_step {} outside (0, 1]",
                self.fade_step
            )));
        }
        if self.resize_debounce_ms < 0.0 {
            return Err(FooterError::InvalidConfig("resize_debounce_ms must not be negative".into()));
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(FooterError::InvalidConfig(format!(
                "visibility_threshold {} outside [0, 1]",
                self.visibility_threshold
            )));
        }
        Ok(())
    }

    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps
    }

    /// Grid and canvas size for a container `width` pixels wide
    pub fn layout_for_width(&self, width: f64) -> Layout {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let mobile = width < self.mobile_breakpoint;
        let (cell_size, rows) = if mobile {
            (self.mobile_cell_size, self.mobile_rows)
        } else {
            (self.cell_size, self.rows)
        };
        let cols = ((width / cell_size as f64).floor() as usize).max(1);
        Layout {
            cell_size,
            cols,
            rows: rows as usize,
            canvas_width: width.floor() as u32,
            canvas_height: rows * cell_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_site() {
        let cfg = FooterConfig::default();
        assert_eq!(cfg.fps, 8.0);
        assert_eq!(cfg.frame_interval_ms(), 125.0);
        assert_eq!(cfg.generation_ceiling, 480);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = FooterConfig::from_json(r#"{ "fps": 12, "rng_seed": 42 }"#).unwrap();
        assert_eq!(cfg.fps, 12.0);
        assert_eq!(cfg.rng_seed, Some(42));
        assert_eq!(cfg.rows, 12);
    }

    #[test]
    fn bad_json_and_bad_values_are_rejected() {
        assert!(matches!(
            FooterConfig::from_json("{ not json"),
            Err(FooterError::ConfigParse(_))
        ));
        assert!(matches!(
            FooterConfig::from_json(r#"{ "fps": 31 }"#),
            Err(FooterError::InvalidConfig(_))
        ));
        assert!(matches!(
            FooterConfig::from_json(r#"{ "fade_step": 0 }"#),
            Err(FooterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn layout_switches_at_the_mobile_breakpoint() {
        let cfg = FooterConfig::default();

        let desktop = cfg.layout_for_width(1024.0);
        assert_eq!(desktop.cell_size, 8);
        assert_eq!(desktop.cols, 128);
        assert_eq!(desktop.rows, 12);
        assert_eq!(desktop.canvas_height, 96);

        let mobile = cfg.layout_for_width(240.0);
        assert_eq!(mobile.cell_size, 6);
        assert_eq!(mobile.cols, 40);
        assert_eq!(mobile.rows, 10);
        assert_eq!(mobile.canvas_height, 60);
    }

    #[test]
    fn degenerate_widths_still_give_one_column() {
        let cfg = FooterConfig::default();
        assert_eq!(cfg.layout_for_width(0.0).cols, 1);
        assert_eq!(cfg.layout_for_width(f64::NAN).cols, 1);
    }
}
