pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod timer;

pub use controller::{Button, Controller};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use timer::FpsCounter;
