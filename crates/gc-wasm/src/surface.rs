//! `<canvas>` + `CanvasRenderingContext2d` as a [`DrawingSurface`].

use gc_core::{Color, DrawingSurface, InitError, Rect, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a looked-up element. Fails if it is not a canvas or has no 2d context.
    pub fn from_element(id: &str, element: Element) -> Result<Self, InitError> {
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| InitError::NotACanvas(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| InitError::Host(format!("getContext failed: {e:?}")))?
            .ok_or(InitError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| InitError::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }
}

impl DrawingSurface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, size: SurfaceSize) -> Result<(), InitError> {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }
}
