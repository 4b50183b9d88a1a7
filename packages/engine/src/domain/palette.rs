//! Colours, themes and the colour mode toggled by Founder Mode.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` string for canvas fill/shadow styles
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Site theme, mirrored from `<html data-theme>`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Plain = one theme colour for every cell; Enhanced = per-cell spectrum colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Plain,
    Enhanced,
}

impl ColorMode {
    pub fn from_enhanced(enhanced: bool) -> Self {
        if enhanced {
            ColorMode::Enhanced
        } else {
            ColorMode::Plain
        }
    }
}

pub const DARK_CELL: Rgba = Rgba::new(20, 184, 166, 0.6);
pub const LIGHT_CELL: Rgba = Rgba::new(50, 50, 50, 0.25);
const LIGHT_SPECTRUM_ALPHA: f32 = 0.35;

/// Cyan -> teal -> purple -> magenta, same family as the cursor trail.
pub const SPECTRUM: [Rgba; 11] = [
    Rgba::new(14, 165, 233, 0.6),
    Rgba::new(6, 182, 212, 0.6),
    Rgba::new(20, 184, 166, 0.6),
    Rgba::new(16, 185, 129, 0.6),
    Rgba::new(59, 130, 246, 0.6),
    Rgba::new(99, 102, 241, 0.6),
    Rgba::new(139, 92, 246, 0.6),
    Rgba::new(147, 51, 234, 0.6),
    Rgba::new(192, 38, 211, 0.6),
    Rgba::new(219, 39, 119, 0.6),
    Rgba::new(236, 72, 153, 0.6),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
    pub mode: ColorMode,
}

impl Palette {
    pub fn new(theme: Theme, mode: ColorMode) -> Self {
        Self { theme, mode }
    }

    /// Number of colours births are drawn from
    pub fn len(&self) -> usize {
        match self.mode {
            ColorMode::Enhanced => SPECTRUM.len(),
            ColorMode::Plain => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn color(&self, index: u8) -> Rgba {
        match self.mode {
            ColorMode::Enhanced => {
                let c = SPECTRUM[index as usize % SPECTRUM.len()];
                if self.theme.is_dark() { c } else { c.with_alpha(LIGHT_SPECTRUM_ALPHA) }
            }
            ColorMode::Plain => self.theme_color(),
        }
    }

    pub fn theme_color(&self) -> Rgba {
        match self.theme {
            Theme::Dark => DARK_CELL,
            Theme::Light => LIGHT_CELL,
        }
    }

    /// Cells glow only on the dark theme
    pub fn glow(&self) -> bool {
        self.theme.is_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string_matches_canvas_syntax() {
        assert_eq!(DARK_CELL.to_css(), "rgba(20, 184, 166, 0.6)");
        assert_eq!(LIGHT_CELL.to_css(), "rgba(50, 50, 50, 0.25)");
    }

    #[test]
    fn theme_attribute_defaults_to_light() {
        assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
        assert_eq!(Theme::from_attribute(None), Theme::Light);
    }

    #[test]
    fn plain_mode_has_a_single_theme_colour() {
        let palette = Palette::new(Theme::Dark, ColorMode::Plain);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.color(7), DARK_CELL);
        assert!(palette.glow());
    }

    #[test]
    fn enhanced_mode_uses_the_full_spectrum() {
        let palette = Palette::new(Theme::Light, ColorMode::Enhanced);
        assert_eq!(palette.len(), 11);
        assert_eq!(palette.color(10).r, 236);
        assert_eq!(palette.color(0).a, LIGHT_SPECTRUM_ALPHA);
        assert!(!palette.glow());
    }
}
