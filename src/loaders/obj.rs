use anyhow::{Context, Result};
use std::io::Cursor;
use std::path::Path;

use super::DEFAULT_COLOR;
use crate::mesh::{MeshData, ModelData};
use crate::types::Vertex;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Loads a Wavefront OBJ file and the MTL libraries it references
pub fn load_obj_file(path: impl AsRef<Path>) -> Result<ModelData> {
    let path = path.as_ref();
    log::debug!("Loading OBJ file: {:?}", path);

    let (models, materials) = tobj::load_obj(path, &load_options())
        .with_context(|| format!("Failed to load OBJ file: {:?}", path))?;

    Ok(convert(models, materials))
}

/// Loads OBJ text from memory; `mtl` answers any `mtllib` statement
pub fn load_obj_buf(obj: &[u8], mtl: Option<&[u8]>) -> Result<ModelData> {
    let mut reader = Cursor::new(obj);
    let (models, materials) = tobj::load_obj_buf(&mut reader, &load_options(), |_| match mtl {
        Some(bytes) => tobj::load_mtl_buf(&mut Cursor::new(bytes)),
        None => Err(tobj::LoadError::OpenFileFailed),
    })
    .context("Failed to parse OBJ data")?;

    Ok(convert(models, materials))
}

fn convert(
    models: Vec<tobj::Model>,
    materials: Result<Vec<tobj::Material>, tobj::LoadError>,
) -> ModelData {
    let materials = materials.unwrap_or_else(|e| {
        log::warn!("Failed to load OBJ materials, using default colour: {}", e);
        Vec::new()
    });

    let meshes = models
        .into_iter()
        .filter_map(|model| {
            let mesh = model.mesh;
            if mesh.indices.is_empty() {
                log::debug!("Skipping OBJ mesh '{}' without faces", model.name);
                return None;
            }

            let color = mesh
                .material_id
                .and_then(|id| materials.get(id))
                .and_then(|material| material.diffuse)
                .unwrap_or(DEFAULT_COLOR);

            let vertices = mesh
                .positions
                .chunks_exact(3)
                .map(|p| Vertex::new([p[0], p[1], p[2]], color))
                .collect();

            Some(MeshData::new(vertices, mesh.indices))
        })
        .collect();

    ModelData { meshes }
}
