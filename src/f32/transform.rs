use crate::f32::mat3x2::Mat3x2;
use crate::f32::vec2::Vec2;
use std::ops::{Mul, MulAssign};

/// A 2D transformation held in decomposed translate/rotate/scale form.
///
/// [`Transform`] is the readable counterpart of [`Mat3x2`]: three named
/// components instead of six matrix elements. [`matrix`](Transform::matrix)
/// composes it into a matrix (translation, then rotation, then scale, in
/// appending order) and [`Mat3x2::decompose`] recovers the components from
/// any shear-free matrix.
///
/// # Examples
///
/// ```
/// use affine2::{Transform, Vec2};
///
/// let t = Transform {
///     translation: Vec2 { x: 10.0, y: 20.0 },
///     rotation: std::f32::consts::FRAC_PI_2,
///     scale: Vec2::one(),
/// };
/// let p = t.matrix().transform_position(Vec2 { x: 1.0, y: 0.0 });
/// assert!(p.almost_eq(Vec2 { x: 10.0, y: 21.0 }));
/// ```
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
    pub rotation: f32,
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
    pub fn with_rotation(rotation: f32) -> Self {
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
            && (self.rotation - rhs.rotation).abs() < crate::f32::EPSILON
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
    /// multiply component-wise. This is the composition law of shear-free
    /// transforms about a common origin, kept in decomposed form.
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.translation, Vec2::zero());
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.scale, Vec2::one());
        assert!(t.matrix().almost_eq(Mat3x2::identity()));
    }

    #[test]
    fn single_component_constructors() {
        let t = Transform::with_translation(Vec2 { x: 5.0, y: 10.0 });
        assert!(t.matrix().almost_eq(Mat3x2::translation(5.0, 10.0)));

        let r = Transform::with_rotation(FRAC_PI_4);
        assert!(r.matrix().almost_eq(Mat3x2::rotation(FRAC_PI_4)));

        let s = Transform::with_scale(Vec2 { x: 2.0, y: 3.0 });
        assert!(s.matrix().almost_eq(Mat3x2::scaling(2.0, 3.0)));
    }

    #[test]
    fn matrix_applies_scale_rotate_translate() {
        let t = Transform {
            translation: Vec2 { x: 1.0, y: 0.0 },
            rotation: FRAC_PI_2,
            scale: Vec2::splat(2.0),
        };
        // Scale doubles (1, 0) to (2, 0), the quarter turn lifts it to
        // (0, 2), the translation shifts it to (1, 2).
        let p = t.matrix().transform_position(Vec2::right());
        assert!(p.almost_eq(Vec2 { x: 1.0, y: 2.0 }));
    }

    #[test]
    fn directional_queries_follow_rotation() {
        let t = Transform::with_rotation(FRAC_PI_2);
        assert!(t.right().almost_eq(Vec2::up()));
        assert!(t.up().almost_eq(Vec2::left()));
    }

    #[test]
    fn composition_in_decomposed_form() {
        let a = Transform {
            translation: Vec2 { x: 1.0, y: 2.0 },
            rotation: 0.25,
            scale: Vec2::splat(2.0),
        };
        let b = Transform {
            translation: Vec2 { x: -3.0, y: 1.0 },
            rotation: 0.5,
            scale: Vec2 { x: 0.5, y: 4.0 },
        };
        let c = a * b;
        assert!(c.translation.almost_eq(Vec2 { x: -2.0, y: 3.0 }));
        assert!((c.rotation - 0.75).abs() < crate::f32::EPSILON);
        assert!(c.scale.almost_eq(Vec2 { x: 1.0, y: 8.0 }));

        let mut d = a;
        d *= b;
        assert!(d.almost_eq(c));
    }

    #[test]
    fn decompose_inverts_matrix() {
        let t = Transform {
            translation: Vec2 { x: -4.0, y: 2.5 },
            rotation: -1.2,
            scale: Vec2 { x: 3.0, y: 0.25 },
        };
        assert!(t.matrix().decompose().almost_eq(t));
    }
}
