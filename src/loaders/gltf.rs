use anyhow::{Context, Result};
use std::path::Path;

use gltf::mesh::Mode;

use super::DEFAULT_COLOR;
use crate::mesh::{MeshData, ModelData};
use crate::types::Vertex;

/// Loads a glTF/GLB file
///
/// Meshes are taken in their own local space; node transforms are ignored.
pub fn load_gltf_file(path: impl AsRef<Path>) -> Result<ModelData> {
    let path = path.as_ref();
    log::debug!("Loading glTF file: {:?}", path);

    let (document, buffers, _images) = gltf::import(path)
        .with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    Ok(convert(&document, &buffers))
}

/// Loads glTF JSON or GLB bytes; external buffers are not resolved
pub fn load_gltf_slice(bytes: &[u8]) -> Result<ModelData> {
    let (document, buffers, _images) =
        gltf::import_slice(bytes).context("Failed to parse glTF data")?;

    Ok(convert(&document, &buffers))
}

fn convert(document: &gltf::Document, buffers: &[gltf::buffer::Data]) -> ModelData {
    let mut meshes = Vec::new();

    for mesh in document.meshes() {
        for primitive in mesh.primitives() {
            let mode = primitive.mode();
            if !matches!(mode, Mode::Triangles | Mode::TriangleStrip | Mode::TriangleFan) {
                log::debug!("Skipping {:?} primitive of mesh {:?}", mode, mesh.name());
                continue;
            }

            let reader = primitive.reader(|buffer| {
                buffers.get(buffer.index()).map(|data| data.0.as_slice())
            });

            let Some(positions) = reader.read_positions() else {
                log::debug!("Skipping primitive without positions in mesh {:?}", mesh.name());
                continue;
            };

            let material = primitive.material();
            let color = match material.index() {
                Some(_) => {
                    let [r, g, b, _] = material.pbr_metallic_roughness().base_color_factor();
                    [r, g, b]
                }
                None => DEFAULT_COLOR,
            };

            let vertices: Vec<Vertex> = positions.map(|p| Vertex::new(p, color)).collect();
            let indices: Option<Vec<u32>> = reader
                .read_indices()
                .map(|indices| indices.into_u32().collect());
            let indices = match mode {
                Mode::Triangles => indices.unwrap_or_default(),
                _ => {
                    let order =
                        indices.unwrap_or_else(|| (0..vertices.len() as u32).collect());
                    unroll(mode, &order)
                }
            };

            let data = MeshData::new(vertices, indices);
            if data.triangle_count() == 0 {
                log::debug!("Skipping mesh {:?} without faces", mesh.name());
                continue;
            }
            meshes.push(data);
        }
    }

    ModelData { meshes }
}

/// Expands a strip or fan into a triangle list with the winding glTF defines
fn unroll(mode: Mode, order: &[u32]) -> Vec<u32> {
    let count = order.len().saturating_sub(2);
    let mut indices = Vec::with_capacity(count * 3);
    for i in 0..count {
        let triangle = match mode {
            Mode::TriangleFan => [order[i + 1], order[i + 2], order[0]],
            _ if i % 2 == 0 => [order[i], order[i + 1], order[i + 2]],
            _ => [order[i], order[i + 2], order[i + 1]],
        };
        indices.extend_from_slice(&triangle);
    }
    indices
}
