//! RGBA8 software raster implementing [`DrawingSurface`].
//!
//! Follows canvas semantics closely enough to check what the page would
//! show: assigning a size clears the buffer to transparent black and resets
//! the fill style, a pixel is covered when its center lies inside the
//! rectangle, and fills composite source-over.

use gc_core::{Color, DrawingSurface, InitError, Rect, SurfaceSize};

#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: SurfaceSize,
    /// Row-major, 4 bytes per pixel, straight (non-premultiplied) alpha.
    data: Vec<u8>,
    fill: Color,
}

/// Canvas default `fillStyle`.
const DEFAULT_FILL: Color = Color::rgb8(0, 0, 0);

/// A freshly created canvas element is 300×150.
const DEFAULT_SIZE: SurfaceSize = SurfaceSize::new(300, 150);

impl Default for PixelBuffer {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            data: vec![0; DEFAULT_SIZE.width as usize * DEFAULT_SIZE.height as usize * 4],
            fill: DEFAULT_FILL,
        }
    }
}

impl PixelBuffer {
    /// Cleared buffer of `size`. Fails if `size` exceeds the canvas limits.
    pub fn new(size: SurfaceSize) -> Result<Self, InitError> {
        let len = size.rgba_len().ok_or(InitError::SurfaceTooLarge {
            width: size.width,
            height: size.height,
        })?;
        Ok(Self {
            size,
            data: vec![0; len],
            fill: DEFAULT_FILL,
        })
    }

    /// RGBA at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = self.offset(x, y);
        let px = &self.data[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Encode as binary PPM (P6). Alpha is dropped.
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = format!("P6\n{} {}\n255\n", self.size.width, self.size.height);
        let mut out = Vec::with_capacity(header.len() + self.data.len() / 4 * 3);
        out.extend_from_slice(header.as_bytes());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
        out
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size.width as usize + x as usize) * 4
    }

    /// Pixel span `[start, end)` whose centers fall in `[lo, lo + len)`,
    /// clipped to `[0, limit)`.
    fn span(lo: f64, len: f64, limit: u32) -> (u32, u32) {
        let clip = |v: f64| v.clamp(0.0, limit as f64) as u32;
        (clip((lo - 0.5).ceil()), clip((lo + len - 0.5).ceil()))
    }
}

impl DrawingSurface for PixelBuffer {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn set_size(&mut self, size: SurfaceSize) -> Result<(), InitError> {
        *self = Self::new(size)?;
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let r = rect.normalized();
        let (x0, x1) = Self::span(r.x, r.width, self.size.width);
        let (y0, y1) = Self::span(r.y, r.height, self.size.height);
        if x0 >= x1 || y0 >= y1 {
            log::trace!("fill_rect fully clipped: {r:?}");
            return;
        }

        let src = self.fill.to_rgba8();
        for y in y0..y1 {
            let row = self.offset(x0, y);
            let row_end = self.offset(x1, y);
            for px in self.data[row..row_end].chunks_exact_mut(4) {
                let out = source_over(src, [px[0], px[1], px[2], px[3]]);
                px.copy_from_slice(&out);
            }
        }
    }
}

fn source_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    match src[3] {
        255 => return src,
        0 => return dst,
        _ => {}
    }
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let oa = sa + da * (1.0 - sa);
    let channel = |s: u8, d: u8| {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / oa;
        c.round().clamp(0.0, 255.0) as u8
    };
    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (oa * 255.0).round() as u8,
    ]
}
