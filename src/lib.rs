pub mod animation;
pub mod camera;
pub mod cli;
pub mod core;
pub mod frame;
pub mod loaders;
pub mod math;
pub mod mesh;
pub mod renderer;
pub mod scenes;
pub mod types;

pub use animation::Caravan;
pub use camera::{Camera, CameraPreset};
pub use scenes::{DesertScene, DrawCall, MeshKind};
