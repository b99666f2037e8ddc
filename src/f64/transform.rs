use crate::f64::mat3x2::Mat3x2;
use crate::f64::vec2::Vec2;
use std::ops::{Mul, MulAssign};

/// A 2D transformation held in decomposed translate/rotate/scale form.
///
/// The double-precision counterpart of [`crate::f32::Transform`],
/// re-exported at the crate root as `DTransform`.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    bincode::Encode,
    bincode::Decode,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Transform {
    pub translation: Vec2,
    pub rotation: f64,
    pub scale: Vec2,
}

impl Transform {
    /// Creates a transform that only translates.
    #[must_use]
    pub fn with_translation(translation: Vec2) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    /// Creates a transform that only rotates (counterclockwise radians).
    #[must_use]
    pub fn with_rotation(rotation: f64) -> Self {
        Self {
            rotation,
            ..Self::default()
        }
    }

    /// Creates a transform that only scales.
    #[must_use]
    pub fn with_scale(scale: Vec2) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Composes the components into a matrix:
    /// `T(translation) · R(rotation) · S(scale)`.
    pub fn matrix(&self) -> Mat3x2 {
        Mat3x2::translation_vec(self.translation)
            .rotate(self.rotation)
            .scale(self.scale.x, self.scale.y)
    }

    /// Returns the right direction (+x) after applying the rotation.
    #[must_use]
    pub fn right(&self) -> Vec2 {
        Vec2::right().rotated(self.rotation)
    }

    /// Returns the up direction (+y) after applying the rotation.
    #[must_use]
    pub fn up(&self) -> Vec2 {
        Vec2::up().rotated(self.rotation)
    }

    /// Compares two transforms for approximate equality, component-wise.
    #[must_use]
    pub fn almost_eq(&self, rhs: Transform) -> bool {
        self.translation.almost_eq(rhs.translation)
            && (self.rotation - rhs.rotation).abs() < crate::f64::EPSILON
            && self.scale.almost_eq(rhs.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec2::zero(),
            rotation: 0.0,
            scale: Vec2::one(),
        }
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    /// Combines two transforms: translations add, rotations add, scales
    /// multiply component-wise.
    fn mul(self, rhs: Transform) -> Self::Output {
        Self {
            translation: self.translation + rhs.translation,
            rotation: self.rotation + rhs.rotation,
            scale: Vec2 {
                x: self.scale.x * rhs.scale.x,
                y: self.scale.y * rhs.scale.y,
            },
        }
    }
}
impl MulAssign<Transform> for Transform {
    fn mul_assign(&mut self, rhs: Transform) {
        *self = *self * rhs;
    }
}
