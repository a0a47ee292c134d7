use crate::MeshError;
use nalgebra::{Point3, Vector2};

pub const DEFAULT_UV_LAYER_NAME: &str = "UVMap";

/// One vertex-in-face reference. UV coordinates attach to loops rather than
/// vertices, so a corner shared by several faces can carry a different
/// coordinate in each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loop {
    pub vert: u32,
}

/// A polygon, stored as a range into the mesh loop table.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub loop_start: usize,
    pub loop_total: usize,
}

/// A named channel holding exactly one UV coordinate per loop.
#[derive(Debug, Clone)]
pub struct UvLayer {
    name: String,
    uv: Vec<Vector2<f32>>,
}

impl UvLayer {
    /// The default layer: all coordinates at the origin.
    pub fn with_loop_count(count: usize) -> UvLayer {
        UvLayer {
            name: DEFAULT_UV_LAYER_NAME.to_owned(),
            uv: vec![Vector2::zeros(); count],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, loop_index: usize) -> Vector2<f32> {
        self.uv[loop_index]
    }

    pub fn set(&mut self, loop_index: usize, uv: Vector2<f32>) {
        self.uv[loop_index] = uv;
    }

    pub fn coords(&self) -> &[Vector2<f32>] {
        &self.uv
    }
}

/// Mesh data in host layout: an ordered face table tiling a flat loop table,
/// with an optional UV layer parallel to the loops. Topology is fixed after
/// construction, only UV coordinates are written later.
#[derive(Clone)]
pub struct Mesh {
    positions: Vec<Point3<f32>>,
    loops: Vec<Loop>,
    faces: Vec<Face>,
    uv_layer: Option<UvLayer>,
}

impl Mesh {
    /// Build the face and loop tables from per-polygon vertex index lists.
    pub fn new(positions: Vec<Point3<f32>>, polygons: &[Vec<u32>]) -> Result<Mesh, MeshError> {
        let mut loops = Vec::new();
        let mut faces = Vec::with_capacity(polygons.len());
        for (polygon, corners) in polygons.iter().enumerate() {
            if corners.len() < 3 {
                return Err(MeshError::DegeneratePolygon {
                    polygon,
                    corners: corners.len(),
                });
            }
            let loop_start = loops.len();
            for &vert in corners {
                if vert as usize >= positions.len() {
                    return Err(MeshError::VertexOutOfRange {
                        polygon,
                        vert,
                        vertex_count: positions.len(),
                    });
                }
                loops.push(Loop { vert });
            }
            faces.push(Face {
                loop_start,
                loop_total: corners.len(),
            });
        }
        Ok(Mesh {
            positions,
            loops,
            faces,
            uv_layer: None,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    pub fn positions(&self) -> &[Point3<f32>] {
        &self.positions
    }

    /// Faces in mesh order. The order is part of the exchange contract:
    /// serialized UV data matches loops positionally, nothing else ties the
    /// two together.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.faces.iter().copied()
    }

    pub fn face_loops(&self, face: usize) -> &[Loop] {
        let face = &self.faces[face];
        &self.loops[face.loop_start..face.loop_start + face.loop_total]
    }

    pub fn uv_layer(&self) -> Option<&UvLayer> {
        self.uv_layer.as_ref()
    }

    /// The UV layer, creating the default one when the mesh has none yet.
    pub fn uv_layer_mut_or_create(&mut self) -> &mut UvLayer {
        let count = self.loops.len();
        self.uv_layer
            .get_or_insert_with(|| UvLayer::with_loop_count(count))
    }
}
