use glam::{Mat4, Vec3};

pub const FOV_Y_DEGREES: f32 = 47.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Named camera placements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CameraPreset {
    /// Straight down over the end of the caravan route
    #[default]
    Overhead,
    /// Higher and slightly tilted towards the pyramids
    Overview,
}

/// Fixed camera: never moves once the scene is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub direction: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, direction: Vec3, up: Vec3) -> Self {
        Self {
            position,
            direction,
            up,
        }
    }

    pub fn from_preset(preset: CameraPreset) -> Self {
        match preset {
            CameraPreset::Overhead => Self::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, Vec3::X),
            CameraPreset::Overview => Self::new(
                Vec3::new(4.1, 4.0, -1.0),
                Vec3::new(0.0, -1.0, 0.1),
                Vec3::X,
            ),
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.direction, self.up)
    }

    /// Perspective for a `width` x `height` viewport; `None` while minimised
    pub fn projection_matrix(&self, width: u32, height: u32) -> Option<Mat4> {
        if width == 0 || height == 0 {
            return None;
        }
        let aspect = width as f32 / height as f32;
        Some(Mat4::perspective_rh(
            FOV_Y_DEGREES.to_radians(),
            aspect,
            Z_NEAR,
            Z_FAR,
        ))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_preset(CameraPreset::default())
    }
}
