mod load_uv;
pub use self::load_uv::*;
mod save_uv;
pub use self::save_uv::*;

use crate::uv::UvScale;
use crate::{Config, UvIoError};
use std::path::Path;
use uvio_scene::{ImageRegistry, Scene};

/// Default extension offered by the host file dialog for both actions.
pub const DEFAULT_EXTENSION: &str = "json";

/// Pixel size assumed when no image is loaded and no override is configured.
pub const FALLBACK_IMAGE_SIZE: (u32, u32) = (1024, 1024);

/// Resolve the pixel scale for an operation: an explicit configuration
/// override wins, then the first loaded image, then the fallback size.
/// Always succeeds.
pub fn resolve_scale(config: &Config, images: &ImageRegistry) -> UvScale {
    if let Some((width, height)) = config.image_size {
        log::debug!("UV scale {}x{} from configuration", width, height);
        return UvScale::new(width, height);
    }

    match images.first() {
        Some(image) => {
            let (width, height) = image.size();
            log::debug!("UV scale {}x{} from image '{}'", width, height, image.name());
            UvScale::new(width, height)
        }
        None => {
            let (width, height) = config.fallback_size;
            log::warn!("No image loaded, assuming {}x{}", width, height);
            UvScale::new(width, height)
        }
    }
}

/// Run the import action on the scene's active object, with the scale
/// resolved from the configuration and the scene's image list.
pub fn run_load_uv<P: AsRef<Path>>(scene: &mut Scene, config: &Config, path: P) -> Result<(), UvIoError> {
    let scale = resolve_scale(config, &scene.images);
    let object = scene.active_object_mut().ok_or(UvIoError::NoActiveObject)?;
    load_uv(path, object, scale)
}

/// Run the export action on the scene's active object.
pub fn run_save_uv<P: AsRef<Path>>(scene: &Scene, config: &Config, path: P) -> Result<(), UvIoError> {
    let scale = resolve_scale(config, &scene.images);
    let object = scene.active_object().ok_or(UvIoError::NoActiveObject)?;
    save_uv_with(path, object, scale, config.pretty_json)
}
