use crate::domain::palette::Rgba;

use super::DrawSurface;

/// One recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize(u32, u32),
    Clear,
    GlobalAlpha(f64),
    FillColor(Rgba),
    Shadow(Rgba, f64),
    ClearShadow,
    FillRect(f64, f64, f64, f64),
}

/// Surface that records draw calls instead of painting.
///
/// Used to run the engine outside a browser and to inspect frames in tests.
/// `ops` holds the calls since the last `clear`, so it always describes the
/// most recent frame.
#[derive(Clone, Debug, Default)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
    frames: u64,
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ops: Vec::new(), frames: 0 }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of times the surface was cleared, i.e. frames drawn
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn filled_rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect(x, y, w, h) => Some((*x, *y, *w, *h)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for HeadlessSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.clear();
        self.ops.push(DrawOp::Resize(width, height));
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
        self.frames += 1;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(DrawOp::GlobalAlpha(alpha));
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.ops.push(DrawOp::FillColor(color));
    }

    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.ops.push(DrawOp::Shadow(color, blur));
    }

    fn clear_shadow(&mut self) {
        self.ops.push(DrawOp::ClearShadow);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::FillRect(x, y, w, h));
    }
}
