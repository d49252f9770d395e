mod desert;
mod primitives;

pub use desert::{DesertScene, DrawCall, MeshKind, PYRAMIDS};
pub use primitives::{carpet_vertices, moon_vertices, plane_vertices, pyramid_vertices};

use crate::mesh::MeshData;

/// CPU mesh for each built-in kind; the camel comes from a file instead
pub fn builtin_mesh(kind: MeshKind) -> Option<MeshData> {
    let vertices = match kind {
        MeshKind::Plane => plane_vertices(),
        MeshKind::Pyramid => pyramid_vertices(),
        MeshKind::Moon => moon_vertices(),
        MeshKind::Carpet => carpet_vertices(),
        MeshKind::Camel => return None,
    };
    Some(MeshData::from_vertices(vertices))
}
