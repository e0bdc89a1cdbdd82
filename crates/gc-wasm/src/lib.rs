//! WASM entry for Game Canvas: sizes `#gameCanvas` to the window and paints it.
//!
//! Compiled via `wasm-pack build --target web`; the module's start function
//! runs as soon as the page imports it.

mod host;
mod surface;

pub use host::WebHost;
pub use surface::CanvasSurface;

use gc_core::{InitError, SceneConfig, SurfaceSize, initialize};
use wasm_bindgen::prelude::*;

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook_setup();
    console_logger_setup();
    run(&SceneConfig::default())?;
    Ok(())
}

/// Re-run the initializer with a JSON scene config.
/// Returns `[width, height]` of the sized canvas.
#[wasm_bindgen]
pub fn init_with_config(json: &str) -> Result<Vec<u32>, JsValue> {
    let config = SceneConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
    let size = run(&config)?;
    Ok(vec![size.width, size.height])
}

fn run(config: &SceneConfig) -> Result<SurfaceSize, JsValue> {
    let result = WebHost::new().and_then(|mut host| initialize(&mut host, config));
    result.map_err(|e: InitError| JsValue::from_str(&e.to_string()))
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Game Canvas WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

fn console_logger_setup() {
    // A second call (e.g. module re-instantiated in the same realm) is a no-op.
    let _ = console_log::init_with_level(log::Level::Debug);
}
