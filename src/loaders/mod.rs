pub mod gltf;
pub mod obj;

pub use self::gltf::{load_gltf_file, load_gltf_slice};
pub use self::obj::{load_obj_buf, load_obj_file};

use anyhow::{bail, Result};
use std::path::Path;

use crate::mesh::ModelData;

/// Vertex colour for meshes whose material carries no diffuse colour
pub const DEFAULT_COLOR: [f32; 3] = [0.6, 0.6, 0.6];

/// Loads a model, picking the importer from the file extension
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelData> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let model = match extension.as_deref() {
        Some("obj") => load_obj_file(path)?,
        Some("gltf") | Some("glb") => load_gltf_file(path)?,
        _ => bail!("Unsupported model format: {:?}", path),
    };

    log::info!(
        "Loaded {} meshes ({} triangles) from {:?}",
        model.meshes.len(),
        model.triangle_count(),
        path
    );
    if let Some(bounds) = model.bounds() {
        log::debug!("Model bounds: {:?} to {:?}", bounds.min, bounds.max);
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = load_model("camel.fbx").unwrap_err();
        assert!(err.to_string().contains("Unsupported model format"));
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        assert!(load_model("camel").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_model("does/not/exist.obj").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load OBJ file"));
    }
}
