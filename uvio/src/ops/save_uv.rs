use crate::uv::{UvMapData, UvScale};
use crate::UvIoError;
use std::fs;
use std::path::Path;
use uvio_scene::Object;

/// Export: collect the loop UVs of `object` into pixel space and write them
/// as a compact json document.
pub fn save_uv<P: AsRef<Path>>(path: P, object: &Object, scale: UvScale) -> Result<(), UvIoError> {
    save_uv_with(path, object, scale, false)
}

/// Export with explicit formatting. Nothing is written when the object is not
/// a mesh, the target file keeps its previous content.
pub fn save_uv_with<P: AsRef<Path>>(
    path: P,
    object: &Object,
    scale: UvScale,
    pretty: bool,
) -> Result<(), UvIoError> {
    let path = path.as_ref();

    let mesh = match object.as_mesh() {
        Some(mesh) => mesh,
        None => {
            return Err(UvIoError::NotAMesh {
                object: object.name.clone(),
                kind: object.kind_name(),
            })
        }
    };

    log::debug!("[{}] Collecting {} faces ...", path.display(), mesh.face_count());
    let data = UvMapData::read_mesh(mesh, scale);

    let content = if pretty {
        serde_json::to_string_pretty(&data)?
    } else {
        serde_json::to_string(&data)?
    };

    log::debug!("[{}] Writing {} bytes ...", path.display(), content.len());
    fs::write(path, content)?;

    Ok(())
}
