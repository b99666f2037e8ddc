//! 2D affine-transform math: 3x2 matrices, 2D/3D vectors, and the camera/view
//! operations built on them (composition, inversion, projection, frustum
//! testing).
//!
//! The crate ships two parallel precision families, [`f32`] and [`f64`],
//! with identical surfaces. The single-precision types are re-exported at the
//! root under their plain names; the double-precision types under `D*`
//! aliases. Nothing converts between the families implicitly; use the
//! explicit `as_*` casts.
//!
//! # Examples
//!
//! ```
//! use affine2::{Mat3x2, Vec2};
//!
//! let camera = Mat3x2::view(-4.0, 4.0, -3.0, 3.0).translate(1.0, 0.0);
//! let clip = camera.transform_position(Vec2 { x: 3.0, y: 0.0 });
//! assert_eq!(clip, Vec2 { x: 1.0, y: 0.0 });
//! ```

pub mod f32;
pub mod f64;

pub use crate::f32::{Mat3x2, Transform, Vec2, Vec3};
pub use crate::f64::{
    Mat3x2 as DMat3x2, Transform as DTransform, Vec2 as DVec2, Vec3 as DVec3,
};
