#![allow(dead_code)]

use env_logger;
use nalgebra::{Point3, Vector2};
use std::path::PathBuf;
use uvio::ops::DEFAULT_EXTENSION;
use uvio_scene::{Mesh, Object, ObjectData, Scene};

pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// A quad and a triangle sharing an edge: 5 vertices, 2 faces, 7 loops.
pub fn quad_and_triangle() -> Mesh {
    let positions = vec![
        Point3::new(0., 0., 0.),
        Point3::new(1., 0., 0.),
        Point3::new(1., 1., 0.),
        Point3::new(0., 1., 0.),
        Point3::new(2., 0.5, 0.),
    ];
    Mesh::new(positions, &[vec![0, 1, 2, 3], vec![1, 4, 2]]).unwrap()
}

pub fn mesh_object<S: ToString>(name: S) -> Object {
    Object::new(name, ObjectData::Mesh(quad_and_triangle()))
}

/// A distinct dyadic coordinate per loop; exact under the scales the tests
/// use, so round trips can be compared with plain equality.
pub fn fill_grid_coords(mesh: &mut Mesh) {
    let count = mesh.loop_count();
    let layer = mesh.uv_layer_mut_or_create();
    for i in 0..count {
        layer.set(i, Vector2::new(i as f32 * 0.125, 1. - i as f32 * 0.0625));
    }
}

pub fn scene_with_mesh<S: ToString>(name: S) -> Scene {
    let mut scene = Scene::new();
    scene.add_object(mesh_object(name));
    scene
}

/// Unique path in the system temp directory; tests clean up after themselves.
pub fn temp_json(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("uvio_{}_{}.{}", tag, std::process::id(), DEFAULT_EXTENSION))
}
