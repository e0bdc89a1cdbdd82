//! The browser page as a [`Host`].

use crate::surface::CanvasSurface;
use gc_core::{Host, InitError, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Window};

pub struct WebHost {
    window: Window,
    document: Document,
    surface: Option<CanvasSurface>,
}

impl WebHost {
    pub fn new() -> Result<Self, InitError> {
        let window = web_sys::window().ok_or_else(|| InitError::Host("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| InitError::Host("no document".to_string()))?;
        Ok(Self {
            window,
            document,
            surface: None,
        })
    }
}

fn inner_dimension(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn viewport(&self) -> Viewport {
        Viewport {
            width: inner_dimension(self.window.inner_width()),
            height: inner_dimension(self.window.inner_height()),
        }
    }

    fn surface_by_id(&mut self, id: &str) -> Result<&mut CanvasSurface, InitError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| InitError::SurfaceNotFound(id.to_string()))?;
        let surface = CanvasSurface::from_element(id, element)?;
        Ok(self.surface.insert(surface))
    }

    fn register_first_touch(&mut self) -> Result<(), InitError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| InitError::Host("document has no body".to_string()))?;

        // No-op. Mobile browsers gate audio/fullscreen on a touch handler.
        let handler = Closure::<dyn FnMut()>::new(|| {});
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        body.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            handler.as_ref().unchecked_ref::<js_sys::Function>(),
            &options,
        )
        .map_err(|e| InitError::Host(format!("addEventListener failed: {e:?}")))?;
        // The page owns the listener from here on.
        handler.forget();
        Ok(())
    }
}
