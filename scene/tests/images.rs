use image::{DynamicImage, GenericImageView};
use std::env;
use std::fs;
use uvio_scene::{Image, ImageRegistry};

mod utils;

#[test]
fn registry_keeps_registration_order() {
    utils::init_logger();

    let mut images = ImageRegistry::new();
    assert!(images.is_empty());
    assert!(images.first().is_none());

    images.register(Image::new("first", DynamicImage::new_rgba8(640, 480)));
    images.register(Image::new("second", DynamicImage::new_rgba8(32, 32)));

    assert_eq!(images.len(), 2);
    let first = images.first().unwrap();
    assert_eq!(first.name(), "first");
    assert_eq!(first.size(), (640, 480));

    let names: Vec<&str> = images.iter().map(|image| image.name()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn load_from_path_decodes_and_names_by_file_stem() {
    utils::init_logger();

    let path = env::temp_dir().join(format!("uvio_scene_{}_checker.png", std::process::id()));
    DynamicImage::new_rgba8(8, 4).save(&path).unwrap();

    let mut images = ImageRegistry::new();
    images.load_from_path(&path).unwrap();

    let image = images.first().unwrap();
    assert_eq!(image.name(), format!("uvio_scene_{}_checker", std::process::id()));
    assert_eq!(image.size(), (8, 4));
    assert_eq!(image.data().dimensions(), (8, 4));

    let _ = fs::remove_file(&path);
}

#[test]
fn load_from_missing_path_reports_the_path() {
    utils::init_logger();

    let path = env::temp_dir().join("uvio_scene_does_not_exist.png");
    let mut images = ImageRegistry::new();
    let err = images.load_from_path(&path).err().unwrap();
    assert!(err.to_string().contains("uvio_scene_does_not_exist.png"));
    assert!(images.is_empty());
}
