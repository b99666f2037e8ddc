//! Single-precision (`f32`) family.

use num_traits::Zero;
use std::num::FpCategory;

pub mod mat3x2;
pub mod transform;
pub mod vec2;
pub mod vec3;

pub use mat3x2::Mat3x2;
pub use transform::Transform;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Tolerance used by `almost_eq` and the epsilon-based vector equality.
pub const EPSILON: f32 = 1e-5;

/// Strict finiteness: zero or normal. Subnormals do not count.
#[must_use]
pub fn is_finite(x: f32) -> bool {
    matches!(x.classify(), FpCategory::Zero | FpCategory::Normal)
}

/// Collapses `-0.0` to `0.0`; leaves everything else untouched.
#[must_use]
pub fn force_positive_zero(x: f32) -> f32 {
    if x.is_zero() { 0.0 } else { x }
}
