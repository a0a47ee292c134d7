use std::path::PathBuf;
use thiserror::Error;

/// Rejected mesh topology during construction.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("Polygon {} references vertex {}, the mesh has {} vertices", polygon, vert, vertex_count)]
    VertexOutOfRange {
        polygon: usize,
        vert: u32,
        vertex_count: usize,
    },

    #[error("Polygon {} has {} corners, a face needs at least 3", polygon, corners)]
    DegeneratePolygon { polygon: usize, corners: usize },
}

#[derive(Debug, Error)]
#[error("Failed to load image {}: {}", path.display(), source)]
pub struct ImageLoadError {
    pub path: PathBuf,
    pub source: image::ImageError,
}
