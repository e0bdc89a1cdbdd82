//! Core drawing primitives: colors, rectangles, and fill operations.
//!
//! Everything the initializer paints is expressed as a [`FillOp`]: a
//! rectangle in surface pixels plus a solid [`Color`]. Colors accept the
//! same strings a canvas `fillStyle` does for solid fills.

use csscolorparser::Color as CssColor;
use serde::{Deserialize, Serialize};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLUE: Color = Color::rgb8(0x00, 0x00, 0xFF);
    pub const RED: Color = Color::rgb8(0xFF, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8([r, g, b, 255])
    }

    pub const fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parse a CSS `<color>`: named colors (case-insensitive), hex
    /// (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`), and functional
    /// notations such as `rgb()` and `hsl()`.
    pub fn parse(s: &str) -> Option<Self> {
        let parsed: CssColor = s.trim().parse().ok()?;
        Some(Self::from_rgba8(parsed.to_rgba8()))
    }

    /// Channels as 8-bit values, rounded.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Emit as a canvas fill style: `#RRGGBB` when opaque,
    /// `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("rgba({r}, {g}, {b}, {})", (a as f32 / 255.0 * 1000.0).round() / 1000.0)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse(&s).ok_or_else(|| format!("unrecognized color: {s:?}"))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_css()
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in surface pixels, as passed to `fillRect`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same area with non-negative width and height.
    /// `fillRect` accepts negative extents and paints toward the origin.
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self::new(x, y, width, height)
    }

    /// Zero-area or non-finite rectangles paint nothing.
    pub fn is_empty(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite())
            || self.width == 0.0
            || self.height == 0.0
    }
}

// ─── Paint operations ────────────────────────────────────────────────────

/// One `fillStyle = color; fillRect(rect)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillOp {
    pub rect: Rect,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!(Color::parse("blue"), Some(Color::BLUE));
        assert_eq!(Color::parse("RED"), Some(Color::RED));
        assert_eq!(Color::parse("  RebeccaPurple "), Some(Color::rgb8(0x66, 0x33, 0x99)));
        assert_eq!(Color::parse("transparent"), Some(Color::TRANSPARENT));
        assert_eq!(Color::parse("bluish"), None);
    }

    #[test]
    fn hex_forms() {
        assert_eq!(Color::parse("#00f"), Some(Color::BLUE));
        assert_eq!(Color::parse("#FF0000"), Some(Color::RED));
        let c = Color::parse("#FF000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 0.01);
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#GG0000"), None);
    }

    #[test]
    fn functional_forms() {
        assert_eq!(Color::parse("rgb(255, 0, 0)"), Some(Color::RED));
        assert_eq!(Color::parse("rgba(0, 0, 255, 1)"), Some(Color::BLUE));
    }

    #[test]
    fn css_output() {
        assert_eq!(Color::BLUE.to_css(), "#0000FF");
        assert_eq!(Color::parse("#6C5CE7").unwrap().to_css(), "#6C5CE7");
        assert_eq!(Color::parse("#FF000080").unwrap().to_css(), "rgba(255, 0, 0, 0.502)");
    }

    #[test]
    fn color_serde_uses_css_strings() {
        let c: Color = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(c, Color::RED);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#FF0000\"");
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn rect_normalizes_negative_extents() {
        let r = Rect::new(200.0, 200.0, -100.0, -50.0).normalized();
        assert_eq!(r, Rect::new(100.0, 150.0, 100.0, 50.0));
    }

    #[test]
    fn empty_rects() {
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(Rect::new(f64::NAN, 0.0, 10.0, 10.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
