pub mod init;
pub mod layout;
pub mod model;
pub mod scene;

pub use init::{DrawingSurface, Host, InitError, initialize, paint};
pub use layout::{SurfaceSize, Viewport};
pub use model::*;
pub use scene::SceneConfig;
