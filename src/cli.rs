use clap::Parser;
use std::path::PathBuf;

use crate::animation::DEFAULT_SPEED;
use crate::camera::CameraPreset;

/// Window size the scale factor is applied to
pub const BASE_WINDOW_SIZE: (u32, u32) = (2560, 1440);

#[derive(Parser, Debug, Clone)]
#[command(name = "desert-scene")]
#[command(about = "Pyramids, moon and a camel on a flying carpet", long_about = None)]
pub struct Cli {
    /// Camel model (.obj, .gltf or .glb)
    #[arg(long, default_value = "assets/kamila.obj")]
    pub model: PathBuf,

    /// WGSL file replacing the built-in shader
    #[arg(long)]
    pub shader: Option<PathBuf>,

    /// Camera placement
    #[arg(long, value_enum, default_value_t = CameraPreset::Overhead)]
    pub camera: CameraPreset,

    /// Fraction of 2560x1440 used for the window
    #[arg(long, default_value_t = 0.8, value_parser = parse_scale)]
    pub window_scale: f32,

    /// Change of the caravan's route parameter per frame while a key is held
    #[arg(long, default_value_t = DEFAULT_SPEED, value_parser = parse_speed)]
    pub speed: f32,
}

impl Cli {
    /// Physical window size after scaling
    pub fn window_size(&self) -> (u32, u32) {
        let (w, h) = BASE_WINDOW_SIZE;
        (
            ((w as f32 * self.window_scale).round() as u32).max(1),
            ((h as f32 * self.window_scale).round() as u32).max(1),
        )
    }
}

fn parse_scale(s: &str) -> Result<f32, String> {
    let scale: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be positive, got {}", s))
    }
}

fn parse_speed(s: &str) -> Result<f32, String> {
    let speed: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if speed.is_finite() && speed >= 0.0 {
        Ok(speed)
    } else {
        Err(format!("speed must be a finite non-negative number, got {}", s))
    }
}
