use crate::math::{rgb8, shade};
use crate::types::Vertex;

/// Ground plane: two triangles, far edge slightly darker than the near edge
pub fn plane_vertices() -> Vec<Vertex> {
    let far = rgb8(92, 74, 52);
    let near = rgb8(96, 74, 53);

    vec![
        Vertex::new([-150.0, 0.0, -15.0], far),
        Vertex::new([-150.0, 0.0, 150.0], near),
        Vertex::new([150.0, 0.0, 150.0], near),
        Vertex::new([-150.0, 0.0, -15.0], far),
        Vertex::new([150.0, 0.0, 150.0], near),
        Vertex::new([150.0, 0.0, -15.0], far),
    ]
}

const APEX: [f32; 3] = [0.0, 1.0, 0.0];

/// Base corners walked so that each consecutive pair plus the apex is a face
const BASE: [[f32; 3]; 5] = [
    [0.6, 0.0, 0.6],
    [0.6, 0.0, -0.6],
    [-0.6, 0.0, -0.6],
    [-0.6, 0.0, 0.6],
    [0.6, 0.0, 0.6],
];

/// Four open sides of a square pyramid, one colour per face
fn pyramid_with_face_colors(colors: [[f32; 3]; 4]) -> Vec<Vertex> {
    colors
        .iter()
        .enumerate()
        .flat_map(|(face, &color)| {
            [
                Vertex::new(BASE[face], color),
                Vertex::new(BASE[face + 1], color),
                Vertex::new(APEX, color),
            ]
        })
        .collect()
}

/// Sandstone pyramid, 12 vertices; the second face sits in shadow
pub fn pyramid_vertices() -> Vec<Vertex> {
    let stone = rgb8(104, 81, 57);
    let shadow = shade(stone, [0.95; 3]);
    pyramid_with_face_colors([stone, shadow, stone, stone])
}

/// The moon reuses the pyramid shape with a pale blue tint per face
pub fn moon_vertices() -> Vec<Vertex> {
    let pale = rgb8(200, 241, 255);
    pyramid_with_face_colors([
        shade(pale, [0.6, 0.9, 0.9]),
        shade(pale, [0.7, 0.9, 1.0]),
        pale,
        pale,
    ])
}

/// Flying carpet: bottom, top, front and right side, 24 vertices
pub fn carpet_vertices() -> Vec<Vertex> {
    let edge = rgb8(43, 150, 180);
    let dark = rgb8(17, 120, 140);
    let light = rgb8(41, 209, 255);
    let mix = |r: f32, g: f32, b: f32| [r, g, b];

    vec![
        // bottom
        Vertex::new([-1.0, 0.0, -1.0], dark),
        Vertex::new([1.0, 0.0, -1.0], mix(dark[0], dark[1], light[2])),
        Vertex::new([-1.0, 0.0, 1.0], dark),
        Vertex::new([1.0, 0.0, -1.0], mix(dark[0], light[1], dark[2])),
        Vertex::new([1.0, 0.0, 1.0], light),
        Vertex::new([-1.0, 0.0, 1.0], light),
        // top
        Vertex::new([-1.0, 0.1, -1.0], light),
        Vertex::new([-1.0, 0.1, 1.0], dark),
        Vertex::new([1.0, 0.1, -1.0], mix(1.0, dark[1], dark[2])),
        Vertex::new([1.0, 0.1, -1.0], mix(1.0, dark[1], dark[2])),
        Vertex::new([-1.0, 0.1, 1.0], dark),
        Vertex::new([1.0, 0.1, 1.0], light),
        // front
        Vertex::new([-1.0, 0.0, 1.0], edge),
        Vertex::new([1.0, 0.1, 1.0], edge),
        Vertex::new([-1.0, 0.1, 1.0], edge),
        Vertex::new([-1.0, 0.0, 1.0], edge),
        Vertex::new([1.0, 0.0, 1.0], edge),
        Vertex::new([1.0, 0.1, 1.0], edge),
        // right
        Vertex::new([1.0, 0.0, -1.0], mix(1.0, edge[1], edge[2])),
        Vertex::new([1.0, 0.1, -1.0], mix(1.0, edge[1], edge[2])),
        Vertex::new([1.0, 0.1, 1.0], edge),
        Vertex::new([1.0, 0.0, -1.0], edge),
        Vertex::new([1.0, 0.1, 1.0], edge),
        Vertex::new([1.0, 0.0, 1.0], edge),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_counts() {
        assert_eq!(plane_vertices().len(), 6);
        assert_eq!(pyramid_vertices().len(), 12);
        assert_eq!(moon_vertices().len(), 12);
        assert_eq!(carpet_vertices().len(), 24);
    }

    #[test]
    fn test_pyramid_faces_end_at_apex() {
        for face in pyramid_vertices().chunks(3) {
            assert_eq!(face[2].position, APEX);
            assert_eq!(face[0].position[1], 0.0);
            assert_eq!(face[1].position[1], 0.0);
        }
    }

    #[test]
    fn test_pyramid_second_face_is_shaded() {
        let v = pyramid_vertices();
        let lit = v[0].color;
        let shaded = v[3].color;
        for c in 0..3 {
            assert!((shaded[c] - lit[c] * 0.95).abs() < 1e-6);
        }
        assert_eq!(v[6].color, lit);
    }

    #[test]
    fn test_moon_shares_pyramid_shape() {
        let moon: Vec<_> = moon_vertices().iter().map(|v| v.position).collect();
        let pyramid: Vec<_> = pyramid_vertices().iter().map(|v| v.position).collect();
        assert_eq!(moon, pyramid);
    }

    #[test]
    fn test_carpet_is_one_tenth_thick() {
        for v in carpet_vertices() {
            assert!(v.position[1] == 0.0 || v.position[1] == 0.1);
            assert!(v.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_plane_lies_flat() {
        assert!(plane_vertices().iter().all(|v| v.position[1] == 0.0));
    }

    #[test]
    fn test_plane_far_edge_is_darker() {
        let far = rgb8(92, 74, 52);
        let near = rgb8(96, 74, 53);
        for v in plane_vertices() {
            let expected = if v.position[2] < 0.0 { far } else { near };
            assert_eq!(v.color, expected);
        }
    }

    #[test]
    fn test_moon_face_tints() {
        let pale = rgb8(200, 241, 255);
        let faces: Vec<_> = moon_vertices().chunks(3).map(|f| f[0].color).collect();

        assert_eq!(faces[0], [pale[0] * 0.6, pale[1] * 0.9, pale[2] * 0.9]);
        assert_eq!(faces[1], [pale[0] * 0.7, pale[1] * 0.9, pale[2] * 1.0]);
        assert_eq!(faces[2], pale);
        assert_eq!(faces[3], pale);
        for face in moon_vertices().chunks(3) {
            assert!(face.iter().all(|v| v.color == face[0].color));
        }
    }

    #[test]
    fn test_carpet_colour_mix() {
        let e = rgb8(43, 150, 180);
        let d = rgb8(17, 120, 140);
        let l = rgb8(41, 209, 255);
        let expected = [
            // bottom
            d,
            [d[0], d[1], l[2]],
            d,
            [d[0], l[1], d[2]],
            l,
            l,
            // top
            l,
            d,
            [1.0, d[1], d[2]],
            [1.0, d[1], d[2]],
            d,
            l,
            // front
            e,
            e,
            e,
            e,
            e,
            e,
            // right
            [1.0, e[1], e[2]],
            [1.0, e[1], e[2]],
            e,
            e,
            e,
            e,
        ];

        let colors: Vec<_> = carpet_vertices().iter().map(|v| v.color).collect();
        assert_eq!(colors, expected);
    }
}
