//! In-memory host: a viewport plus a set of named pixel buffers.

use crate::raster::PixelBuffer;
use gc_core::{Host, InitError, Viewport};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub viewport: Viewport,
    surfaces: HashMap<String, PixelBuffer>,
    first_touch_listeners: usize,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    /// Host with a default-sized canvas registered under `id`.
    pub fn with_canvas(viewport: Viewport, id: &str) -> Self {
        let mut host = Self::new(viewport);
        host.insert_surface(id, PixelBuffer::default());
        host
    }

    pub fn insert_surface(&mut self, id: &str, surface: PixelBuffer) {
        self.surfaces.insert(id.to_string(), surface);
    }

    pub fn surface(&self, id: &str) -> Option<&PixelBuffer> {
        self.surfaces.get(id)
    }

    /// Simulate the user resizing the window. Nothing listens for this.
    pub fn resize_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport { width, height };
    }

    pub fn first_touch_listeners(&self) -> usize {
        self.first_touch_listeners
    }
}

impl Host for HeadlessHost {
    type Surface = PixelBuffer;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn surface_by_id(&mut self, id: &str) -> Result<&mut PixelBuffer, InitError> {
        self.surfaces
            .get_mut(id)
            .ok_or_else(|| InitError::SurfaceNotFound(id.to_string()))
    }

    fn register_first_touch(&mut self) -> Result<(), InitError> {
        self.first_touch_listeners += 1;
        Ok(())
    }
}
