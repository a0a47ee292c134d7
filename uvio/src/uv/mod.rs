mod error;
pub use self::error::*;
mod scale;
pub use self::scale::*;
mod uv_data;
pub use self::uv_data::*;
