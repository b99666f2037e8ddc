use crate::f32::{force_positive_zero, is_finite, EPSILON};
use num_traits::Zero;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 3D vector with 32-bit floating point coordinates.
///
/// In this crate [`Vec3`] mostly appears as a homogeneous point fed through
/// [`Mat3x2::transform`](crate::f32::Mat3x2::transform): `z` scales the
/// translation column and passes through unchanged, so `z == 1.0` makes the
/// vector behave as a position and `z == 0.0` as a free direction.
///
/// Finite vectors compare equal within [`EPSILON`](crate::f32::EPSILON),
/// like [`Vec2`](crate::f32::Vec2); non-finite vectors compare exactly.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    bincode::Encode,
    bincode::Decode,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON
                && (self.y - other.y).abs() < EPSILON
                && (self.z - other.z).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y && self.z == other.z
        }
    }
}
impl Eq for Vec3 {}

impl Vec3 {
    /// Returns a vector with all components set to 0.0.
    #[must_use]
    pub fn zero() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
    /// Returns a vector with all components set to 1.0.
    #[must_use]
    pub fn one() -> Vec3 {
        Vec3 {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }

    /// Creates a new vector with all components set to the given value.
    #[must_use]
    pub fn splat(v: f32) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
    }

    /// Lifts a 2D point to the homogeneous form expected by
    /// [`Mat3x2::transform`](crate::f32::Mat3x2::transform): `(x, y, 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::{Vec2, Vec3};
    /// let p = Vec3::from_position(Vec2 { x: 2.0, y: 3.0 });
    /// assert_eq!(p, Vec3 { x: 2.0, y: 3.0, z: 1.0 });
    /// ```
    #[must_use]
    pub fn from_position(v: crate::f32::Vec2) -> Vec3 {
        Vec3 {
            x: v.x,
            y: v.y,
            z: 1.0,
        }
    }

    /// Drops the homogeneous component.
    #[must_use]
    pub fn xy(&self) -> crate::f32::Vec2 {
        crate::f32::Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Returns the squared length of the vector.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector; the zero vector stays zero.
    #[must_use]
    pub fn normed(&self) -> Vec3 {
        let mut rv = match self.len() {
            0.0 => Vec3::zero(),
            len => *self / len,
        };
        rv.x = force_positive_zero(rv.x);
        rv.y = force_positive_zero(rv.y);
        rv.z = force_positive_zero(rv.z);
        rv
    }

    /// Computes the dot product of two vectors.
    #[must_use]
    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the 3D cross product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::Vec3;
    /// let x = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    /// let y = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    /// assert_eq!(x.cross(y), Vec3 { x: 0.0, y: 0.0, z: 1.0 });
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Compares two vectors for approximate equality within
    /// [`EPSILON`](crate::f32::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Vec3) -> bool {
        (self.x - rhs.x).abs() < EPSILON
            && (self.y - rhs.y).abs() < EPSILON
            && (self.z - rhs.z).abs() < EPSILON
    }

    /// True if all components are zero or normal.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        is_finite(self.x) && is_finite(self.y) && is_finite(self.z)
    }

    /// Widens to the double-precision family.
    #[must_use]
    pub fn as_dvec3(&self) -> crate::f64::Vec3 {
        crate::f64::Vec3 {
            x: f64::from(self.x),
            y: f64::from(self.y),
            z: f64::from(self.z),
        }
    }
}

impl Zero for Vec3 {
    fn zero() -> Self {
        Vec3::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
            write!(f, ", {0:.1$}", self.z, p)?;
        } else {
            write!(f, "{}, {}, {}", self.x, self.y, self.z)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Sum<Vec3> for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Self {
        iter.fold(Vec3::zero(), Vec3::add)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
        }
    }
}
impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::f32::Vec2;

    // ==================== Basic Operations ====================

    #[test]
    fn arithmetic() {
        let a = Vec3 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        };
        let b = Vec3 {
            x: 4.0,
            y: 5.0,
            z: 6.0,
        };
        assert_eq!(
            a + b,
            Vec3 {
                x: 5.0,
                y: 7.0,
                z: 9.0,
            }
        );
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(
            a * 2.0,
            Vec3 {
                x: 2.0,
                y: 4.0,
                z: 6.0,
            }
        );
        assert_eq!(
            2.0 * a,
            Vec3 {
                x: 2.0,
                y: 4.0,
                z: 6.0,
            }
        );
        assert_eq!(
            b / 2.0,
            Vec3 {
                x: 2.0,
                y: 2.5,
                z: 3.0,
            }
        );
        assert_eq!(
            -a,
            Vec3 {
                x: -1.0,
                y: -2.0,
                z: -3.0,
            }
        );
    }

    #[test]
    fn assign_forms() {
        let mut v = Vec3::one();
        v += Vec3::one();
        v *= 3.0;
        v -= Vec3::splat(2.0);
        v /= 4.0;
        assert_eq!(v, Vec3::one());
    }

    #[test]
    fn sum_of_vectors() {
        let total: Vec3 = [Vec3::one(), Vec3::one(), -Vec3::splat(2.0)]
            .into_iter()
            .sum();
        assert_eq!(total, Vec3::zero());
    }

    // ==================== Geometric Queries ====================

    #[test]
    fn length_and_normed() {
        let v = Vec3 {
            x: 2.0,
            y: 3.0,
            z: 6.0,
        };
        assert_eq!(v.len_squared(), 49.0);
        assert_eq!(v.len(), 7.0);
        assert!((v.normed().len() - 1.0).abs() < EPSILON);
        assert_eq!(Vec3::zero().normed(), Vec3::zero());
    }

    #[test]
    fn dot_and_cross() {
        let x = Vec3 {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        };
        let y = Vec3 {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        };
        let z = Vec3 {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        };
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);
    }

    // ==================== Homogeneous Helpers ====================

    #[test]
    fn position_round_trip() {
        let p = Vec2 { x: 5.0, y: -1.0 };
        let h = Vec3::from_position(p);
        assert_eq!(h.z, 1.0);
        assert_eq!(h.xy(), p);
    }

    // ==================== Conversions ====================

    #[test]
    fn array_round_trip() {
        let v: Vec3 = [1.0_f32, 2.0, 3.0].into();
        let arr: [f32; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn widening_cast() {
        let d = Vec3 {
            x: 0.5,
            y: -1.5,
            z: 2.0,
        }
        .as_dvec3();
        assert_eq!(d.x, 0.5);
        assert_eq!(d.y, -1.5);
        assert_eq!(d.z, 2.0);
    }

    #[test]
    fn display() {
        let v = Vec3 {
            x: 1.0,
            y: 2.5,
            z: -3.0,
        };
        assert_eq!(format!("{v}"), "vec(1, 2.5, -3)");
    }
}
