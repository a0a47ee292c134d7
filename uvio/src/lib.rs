mod error;
pub use self::error::*;
mod config;
pub use self::config::*;

pub mod ops;
pub mod uv;

pub use uvio_scene as scene;
