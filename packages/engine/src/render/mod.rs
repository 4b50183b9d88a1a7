//! Rendering onto a canvas-like 2D surface
//!
//! Dead cells are never drawn: the surface is cleared and only live cells
//! are filled, inset by one pixel so the grid reads as separate dots.

mod headless;

pub use headless::{DrawOp, HeadlessSurface};

use crate::core::grid::CellGrid;
use crate::domain::palette::{Palette, Rgba};

/// The subset of `CanvasRenderingContext2d` the footer needs
pub trait DrawSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Resizing a canvas also clears it
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_fill_color(&mut self, color: Rgba);
    fn set_shadow(&mut self, color: Rgba, blur: f64);
    fn clear_shadow(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}

/// Per-frame drawing parameters
#[derive(Clone, Copy, Debug)]
pub struct FrameStyle {
    pub palette: Palette,
    pub fade_alpha: f32,
    pub cell_size: u32,
    pub glow_blur: f64,
}

/// Clear `surface` and draw every live cell of `grid`.
/// Returns the number of cells drawn.
pub fn draw_cells<S: DrawSurface + ?Sized>(surface: &mut S, grid: &CellGrid, style: &FrameStyle) -> usize {
    surface.clear();
    surface.set_global_alpha(style.fade_alpha.clamp(0.0, 1.0) as f64);

    let cs = style.cell_size as f64;
    let glow = style.palette.glow();
    let mut drawn = 0;

    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            if !grid.is_alive(x, y) {
                continue;
            }
            let color = style.palette.color(grid.color(x, y));
            surface.set_fill_color(color);
            if glow {
                surface.set_shadow(color, style.glow_blur);
            }
            surface.fill_rect(x as f64 * cs + 1.0, y as f64 * cs + 1.0, cs - 2.0, cs - 2.0);
            drawn += 1;
        }
    }

    if glow && drawn > 0 {
        surface.clear_shadow();
    }
    surface.set_global_alpha(1.0);
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::palette::{ColorMode, Theme, DARK_CELL, LIGHT_CELL, SPECTRUM};

    fn style(theme: Theme, mode: ColorMode, fade_alpha: f32) -> FrameStyle {
        FrameStyle {
            palette: Palette::new(theme, mode),
            fade_alpha,
            cell_size: 8,
            glow_blur: 4.0,
        }
    }

    #[test]
    fn only_live_cells_are_filled_with_inset() {
        let grid = CellGrid::from_ascii(&["#..", "..#"]);
        let mut surface = HeadlessSurface::new(24, 16);
        let drawn = draw_cells(&mut surface, &grid, &style(Theme::Light, ColorMode::Plain, 1.0));

        assert_eq!(drawn, 2);
        assert_eq!(
            surface.filled_rects(),
            vec![(1.0, 1.0, 6.0, 6.0), (17.0, 9.0, 6.0, 6.0)]
        );
        assert_eq!(surface.ops()[0], DrawOp::Clear);
        assert!(surface.ops().contains(&DrawOp::FillColor(LIGHT_CELL)));
        assert!(!surface.ops().iter().any(|op| matches!(op, DrawOp::Shadow(..))));
    }

    #[test]
    fn fade_alpha_wraps_the_whole_draw() {
        let grid = CellGrid::from_ascii(&["#"]);
        let mut surface = HeadlessSurface::new(8, 8);
        draw_cells(&mut surface, &grid, &style(Theme::Light, ColorMode::Plain, 0.25));

        let alphas: Vec<f64> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::GlobalAlpha(a) => Some(*a),
                _ => None,
            })
            .collect();
        assert_eq!(alphas, vec![0.25, 1.0]);
    }

    #[test]
    fn dark_theme_glows_and_enhanced_mode_uses_cell_colours() {
        let mut grid = CellGrid::from_ascii(&["#"]);
        grid.set_color(0, 0, 10);

        let mut surface = HeadlessSurface::new(8, 8);
        draw_cells(&mut surface, &grid, &style(Theme::Dark, ColorMode::Enhanced, 1.0));
        assert!(surface.ops().contains(&DrawOp::FillColor(SPECTRUM[10])));
        assert!(surface.ops().contains(&DrawOp::Shadow(SPECTRUM[10], 4.0)));
        assert!(surface.ops().contains(&DrawOp::ClearShadow));

        let mut surface = HeadlessSurface::new(8, 8);
        draw_cells(&mut surface, &grid, &style(Theme::Dark, ColorMode::Plain, 1.0));
        assert!(surface.ops().contains(&DrawOp::FillColor(DARK_CELL)));
    }
}
