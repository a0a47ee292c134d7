mod error;
pub use self::error::*;
mod images;
pub use self::images::*;
mod mesh;
pub use self::mesh::*;
mod object;
pub use self::object::*;

pub use image;
pub use nalgebra;
