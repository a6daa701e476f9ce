//! RGBA colors parsed from textual color specifications

use gtk4::gdk;

use crate::error::{TerminalError, TerminalResult};

/// Color in 0.0..=1.0 space with alpha channel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Color {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 1.0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rgba({:.2}, {:.2}, {:.2}, {:.2})",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Color {
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a color specification the way GDK does.
    ///
    /// Accepts hex triplets and quads (`#rgb`, `#rrggbb`, `#rrggbbaa`, ...),
    /// named colors (`red`, `DarkSlateGray`) and `rgb()`/`rgba()` notation.
    /// Surrounding whitespace is ignored.
    pub fn parse(spec: &str) -> TerminalResult<Self> {
        let trimmed = spec.trim();
        gdk::RGBA::parse(trimmed)
            .map(Color::from)
            .map_err(|_| TerminalError::ConfigurationError {
                field: "color".to_string(),
                value: trimmed.to_string(),
            })
    }
}

impl From<gdk::RGBA> for Color {
    fn from(rgba: gdk::RGBA) -> Self {
        Color::rgba(rgba.red(), rgba.green(), rgba.blue(), rgba.alpha())
    }
}

impl From<Color> for gdk::RGBA {
    fn from(c: Color) -> Self {
        gdk::RGBA::new(c.r, c.g, c.b, c.a)
    }
}
