use crate::uv::{UvError, UvScale};
use itertools::izip;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use uvio_scene::{Face, Mesh};

/// Per-face, per-loop UV coordinates in pixel units, in mesh iteration
/// order. Serializes to the bare nested-array form: no header, no version,
/// no identifiers — correspondence with the mesh is positional only, so the
/// file is tied to the exact topology it was written from.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UvMapData {
    faces: Vec<Vec<[f32; 2]>>,
}

impl UvMapData {
    pub fn from_faces(faces: Vec<Vec<[f32; 2]>>) -> UvMapData {
        UvMapData { faces }
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn faces(&self) -> &[Vec<[f32; 2]>] {
        &self.faces
    }

    /// Collect every loop coordinate of the mesh, scaled to pixel units.
    /// A mesh without a UV layer reads as the default all-zero layer.
    pub fn read_mesh(mesh: &Mesh, scale: UvScale) -> UvMapData {
        let layer = mesh.uv_layer();
        let mut faces = Vec::with_capacity(mesh.face_count());
        for face in mesh.faces() {
            let corners = (face.loop_start..face.loop_start + face.loop_total)
                .map(|i| scale.to_pixels(layer.map_or(Vector2::zeros(), |layer| layer.get(i))))
                .collect();
            faces.push(corners);
        }
        UvMapData { faces }
    }

    /// The outer length must equal the face count and every inner length
    /// that face's loop count.
    pub fn check_shape(&self, mesh: &Mesh) -> Result<(), UvError> {
        if self.faces.len() != mesh.face_count() {
            return Err(UvError::FaceCountMismatch {
                expected: mesh.face_count(),
                got: self.faces.len(),
            });
        }
        for (face, (corners, mesh_face)) in self.faces.iter().zip(mesh.faces()).enumerate() {
            if corners.len() != mesh_face.loop_total {
                return Err(UvError::LoopCountMismatch {
                    face,
                    expected: mesh_face.loop_total,
                    got: corners.len(),
                });
            }
        }
        Ok(())
    }

    /// Write the payload into the mesh's UV layer, divided back to the
    /// normalized form. The shape is checked up front so a mismatch leaves
    /// the mesh untouched; the default UV layer is created when missing.
    pub fn apply_to_mesh(&self, mesh: &mut Mesh, scale: UvScale) -> Result<(), UvError> {
        self.check_shape(mesh)?;

        let faces: Vec<Face> = mesh.faces().collect();
        let layer = mesh.uv_layer_mut_or_create();
        for (corners, face) in izip!(&self.faces, &faces) {
            for (j, pair) in corners.iter().enumerate() {
                layer.set(face.loop_start + j, scale.to_normalized(*pair));
            }
        }

        log::debug!("Applied {} UV faces", self.faces.len());
        Ok(())
    }
}
