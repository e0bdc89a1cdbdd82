//! Viewport and surface dimensions.

use serde::{Deserialize, Serialize};

/// The host's inner width/height in CSS pixels, as read at load time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Largest width or height a surface may take.
    pub const MAX_DIMENSION: u32 = 32_767;
    /// Largest pixel count a surface may take (16384 × 16384).
    pub const MAX_AREA: u64 = 16_384 * 16_384;

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert viewport dimensions to whole pixels: truncate toward zero;
    /// NaN, infinities and negatives become 0; values past `u32::MAX`
    /// saturate. Unlike the DOM's `unsigned long` reflection nothing wraps or
    /// falls back to 300×150; sizes that large fail [`SurfaceSize::fits`].
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            width: to_pixels(viewport.width),
            height: to_pixels(viewport.height),
        }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether a surface of this size can be allocated.
    pub fn fits(&self) -> bool {
        self.width <= Self::MAX_DIMENSION
            && self.height <= Self::MAX_DIMENSION
            && self.area() <= Self::MAX_AREA
    }

    /// Byte length of an RGBA8 buffer of this size, `None` if it does not fit.
    pub fn rgba_len(&self) -> Option<usize> {
        if !self.fits() {
            return None;
        }
        usize::try_from(self.area()).ok()?.checked_mul(4)
    }
}

fn to_pixels(v: f64) -> u32 {
    // `as` saturates above u32::MAX.
    if v.is_finite() { v.trunc().max(0.0) as u32 } else { 0 }
}
