use glam::{Mat4, Vec3};

use crate::animation::Caravan;
use crate::math::Transform;

/// Which uploaded mesh a draw call uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Plane,
    Pyramid,
    Moon,
    Carpet,
    Camel,
}

/// One draw: a mesh and the model matrix to draw it with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshKind,
    pub model: Mat4,
}

impl DrawCall {
    pub fn new(mesh: MeshKind, model: impl Into<Mat4>) -> Self {
        Self {
            mesh,
            model: model.into(),
        }
    }
}

/// Pyramid placements as (position, uniform scale), largest first
pub const PYRAMIDS: [(Vec3, f32); 5] = [
    (Vec3::new(0.0, 0.0, 10.0), 2.0),
    (Vec3::new(-2.8, 0.0, 8.2), 1.2),
    (Vec3::new(3.0, 0.0, 8.4), 1.4),
    (Vec3::new(-4.0, 0.0, 6.0), 1.0),
    (Vec3::new(4.3, 0.0, 4.5), 0.9),
];

const MOON_POSITION: Vec3 = Vec3::new(2.0, 8.0, 50.0);
const MOON_SCALE: Vec3 = Vec3::new(2.0 * 1.5, 1.42 * 1.5, 2.0 * 1.5);
const CARPET_OFFSET: Vec3 = Vec3::new(0.0, -0.013, -0.04);
const CARPET_SCALE: Vec3 = Vec3::new(0.06, 0.01, 0.04);
const CAMEL_SCALE: f32 = 0.001;

/// Static layout of the desert; only the caravan moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesertScene {
    /// Axis used for the ground flip and the carpet tilt
    up: Vec3,
}

impl DesertScene {
    pub fn new(up: Vec3) -> Self {
        Self { up }
    }

    /// Draw calls for one frame, in submission order
    pub fn draw_calls(&self, caravan: &Caravan) -> Vec<DrawCall> {
        let mut calls = Vec::with_capacity(10);

        calls.push(DrawCall::new(
            MeshKind::Plane,
            Transform::IDENTITY
                .rotate(180.0, self.up)
                .translate(Vec3::new(0.0, 0.0, -100.0)),
        ));

        calls.extend(PYRAMIDS.iter().map(|&(position, scale)| {
            DrawCall::new(
                MeshKind::Pyramid,
                Transform::IDENTITY.translate(position).uniform_scale(scale),
            )
        }));

        // The far side is the same mesh flipped over a diagonal
        let moon = Transform::IDENTITY
            .translate(MOON_POSITION)
            .scale(MOON_SCALE)
            .rotate(30.0, Vec3::X);
        calls.push(DrawCall::new(MeshKind::Moon, moon));
        calls.push(DrawCall::new(
            MeshKind::Moon,
            moon.rotate(180.0, Vec3::new(1.0, 0.0, 1.0)),
        ));

        let hover = caravan.position() + Vec3::Y * caravan.bob();

        calls.push(DrawCall::new(
            MeshKind::Carpet,
            Transform::IDENTITY
                .translate(hover + CARPET_OFFSET)
                .rotate(80.0, self.up)
                .scale(CARPET_SCALE),
        ));

        calls.push(DrawCall::new(
            MeshKind::Camel,
            Transform::IDENTITY.translate(hover).uniform_scale(CAMEL_SCALE),
        ));

        calls
    }
}
