//! Software rendering backend for Game Canvas.
//!
//! Lets the initializer run without a browser: [`PixelBuffer`] stands in for
//! the canvas and [`HeadlessHost`] for the document.

pub mod host;
pub mod raster;

pub use host::HeadlessHost;
pub use raster::PixelBuffer;
