mod aabb;
mod color;
mod transform;

pub use aabb::AABB;
pub use color::{rgb8, shade};
pub use transform::Transform;
