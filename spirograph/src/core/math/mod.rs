//! Core/common math functions for angle sequences, 2D points, and radius ratio reduction.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{vec2, Vector2};
