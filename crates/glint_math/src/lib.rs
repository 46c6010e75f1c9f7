// Re-export glam for convenience
pub use glam::*;

mod frame;
mod ray;
mod scalar;
mod vector;

pub use frame::Frame;
pub use ray::Ray;
pub use scalar::{
    approximately_equal, approximately_zero, direction_in_radians, map, quadratic, Roots, EPSILON,
};
pub use vector::{reflect, refract};
