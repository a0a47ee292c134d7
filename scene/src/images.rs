use crate::ImageLoadError;
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// A decoded image and the name it is known by in the document.
pub struct Image {
    name: String,
    data: DynamicImage,
}

impl Image {
    pub fn new<S: ToString>(name: S, data: DynamicImage) -> Image {
        Image {
            name: name.to_string(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pixel dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.data.dimensions()
    }

    pub fn data(&self) -> &DynamicImage {
        &self.data
    }
}

/// The ordered list of images loaded in the document, mirroring the host's
/// whole-process image registry.
#[derive(Default)]
pub struct ImageRegistry {
    images: Vec<Image>,
}

impl ImageRegistry {
    pub fn new() -> ImageRegistry {
        ImageRegistry::default()
    }

    pub fn register(&mut self, image: Image) {
        let (width, height) = image.size();
        log::debug!("Registered image '{}' ({}x{})", image.name(), width, height);
        self.images.push(image);
    }

    /// Decode an image file and register it under its file stem.
    pub fn load_from_path(&mut self, path: &Path) -> Result<(), ImageLoadError> {
        log::debug!("Loading image from {} ...", path.display());
        let data = image::open(path).map_err(|err| ImageLoadError {
            path: path.to_path_buf(),
            source: err,
        })?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("image")
            .to_owned();
        self.register(Image::new(name, data));
        Ok(())
    }

    pub fn first(&self) -> Option<&Image> {
        self.images.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Image> {
        self.images.iter()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
