use crate::uv::{UvMapData, UvScale};
use crate::UvIoError;
use std::fs;
use std::path::Path;
use uvio_scene::{Object, ObjectData};

/// Import: parse the file and write its coordinates into the object's mesh,
/// divided back to the normalized form. Every failure is detected before
/// the mesh is touched, so a cancelled import never leaves a partial layer.
pub fn load_uv<P: AsRef<Path>>(path: P, object: &mut Object, scale: UvScale) -> Result<(), UvIoError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(UvIoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    log::debug!("[{}] Reading ...", path.display());
    let content = fs::read_to_string(path)?;
    let data: UvMapData = serde_json::from_str(&content)?;

    let mesh = match &mut object.data {
        ObjectData::Mesh(mesh) => mesh,
        other => {
            return Err(UvIoError::NotAMesh {
                object: object.name.clone(),
                kind: other.kind_name(),
            })
        }
    };

    log::debug!("[{}] Applying {} faces ...", path.display(), data.face_count());
    data.apply_to_mesh(mesh, scale)?;

    Ok(())
}
