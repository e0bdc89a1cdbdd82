//! The canvas initializer.
//!
//! Runs once at load: registers the no-op first-touch listener, looks up
//! the drawing surface, sizes it to the viewport, and paints the scene.
//! Nothing is retained afterwards; in particular no resize listener exists,
//! so the surface keeps whatever size it had at load time.

use crate::layout::{SurfaceSize, Viewport};
use crate::model::{Color, FillOp, Rect};
use crate::scene::SceneConfig;

/// Why initialization halted. Nothing is painted in any of these cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("drawing surface #{0} not found")]
    SurfaceNotFound(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("surface {width}x{height} exceeds the maximum canvas size")]
    SurfaceTooLarge { width: u32, height: u32 },

    #[error("2d drawing context unavailable")]
    ContextUnavailable,

    #[error("host error: {0}")]
    Host(String),
}

/// A 2D raster target plus its drawing context.
pub trait DrawingSurface {
    fn size(&self) -> SurfaceSize;
    /// Assign pixel width/height. Clears the surface.
    fn set_size(&mut self, size: SurfaceSize) -> Result<(), InitError>;
    fn set_fill_color(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect);
}

/// The environment the initializer runs in: a browser document, or an
/// in-memory stand-in.
pub trait Host {
    type Surface: DrawingSurface;

    /// Current inner width/height.
    fn viewport(&self) -> Viewport;

    /// Look up the surface by element id. The host keeps ownership.
    fn surface_by_id(&mut self, id: &str) -> Result<&mut Self::Surface, InitError>;

    /// Register the one-shot first-touch listener. Its handler does nothing.
    fn register_first_touch(&mut self) -> Result<(), InitError>;
}

/// Run the full initialization sequence against `host`.
///
/// Returns the size applied to the surface.
pub fn initialize<H: Host>(host: &mut H, config: &SceneConfig) -> Result<SurfaceSize, InitError> {
    host.register_first_touch()?;
    log::debug!("first-touch listener registered");

    let viewport = host.viewport();
    let surface = match host.surface_by_id(&config.canvas_id) {
        Ok(surface) => surface,
        Err(e) => {
            log::error!("canvas init halted: {e}");
            return Err(e);
        }
    };

    let size = SurfaceSize::from_viewport(viewport);
    if !size.fits() {
        let e = InitError::SurfaceTooLarge {
            width: size.width,
            height: size.height,
        };
        log::error!("canvas init halted: {e}");
        return Err(e);
    }
    surface.set_size(size)?;
    log::debug!(
        "surface #{} sized to {}x{} (viewport {}x{})",
        config.canvas_id,
        size.width,
        size.height,
        viewport.width,
        viewport.height
    );

    paint(surface, &config.fill_ops(size));
    Ok(size)
}

/// Issue each fill op in order: set the fill color, then fill the rect.
pub fn paint<S: DrawingSurface + ?Sized>(surface: &mut S, ops: &[FillOp]) {
    for op in ops {
        log::trace!(
            "FILL {} ({}, {}, {}, {})",
            op.color.to_css(),
            op.rect.x,
            op.rect.y,
            op.rect.width,
            op.rect.height
        );
        surface.set_fill_color(op.color);
        surface.fill_rect(op.rect);
    }
}
