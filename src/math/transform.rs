use glam::{Mat4, Vec3};

/// Right-multiplied model matrix builder
///
/// Each call appends a transform on the right, so the last one added is the
/// first applied to a vertex: `translate(t).scale(s)` scales, then moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(Mat4);

impl Transform {
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    pub fn translate(self, offset: Vec3) -> Self {
        Self(self.0 * Mat4::from_translation(offset))
    }

    pub fn scale(self, factors: Vec3) -> Self {
        Self(self.0 * Mat4::from_scale(factors))
    }

    pub fn uniform_scale(self, factor: f32) -> Self {
        self.scale(Vec3::splat(factor))
    }

    /// Rotation about `axis`; the axis does not need to be unit length
    pub fn rotate(self, degrees: f32, axis: Vec3) -> Self {
        Self(self.0 * Mat4::from_axis_angle(axis.normalize(), degrees.to_radians()))
    }

    pub fn matrix(&self) -> Mat4 {
        self.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Transform> for Mat4 {
    fn from(t: Transform) -> Self {
        t.0
    }
}
