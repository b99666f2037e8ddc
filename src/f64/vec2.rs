use crate::f64::mat3x2::Mat3x2;
use crate::f64::{force_positive_zero, is_finite, EPSILON};
use num_traits::Zero;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use tracing::warn;

/// A 2D vector with 64-bit floating point coordinates.
///
/// The double-precision counterpart of [`crate::f32::Vec2`], re-exported at
/// the crate root as `DVec2`. Equality, ordering and hashing follow the same
/// rules, against the f64 [`EPSILON`](crate::f64::EPSILON).
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
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}
impl Eq for Vec2 {}

impl PartialOrd<Self> for Vec2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vec2 {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if (self.x - other.x).abs() < EPSILON {
            self.y.partial_cmp(&other.y).unwrap_or_else(|| {
                warn!("Vec2: partial_cmp() failed for y: {} vs. {}", self, other);
                self.y.total_cmp(&other.y)
            })
        } else {
            self.x.partial_cmp(&other.x).unwrap_or_else(|| {
                warn!("Vec2: partial_cmp() failed for x: {} vs. {}", self, other);
                self.x.total_cmp(&other.x)
            })
        }
    }
}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Vec2 {
    /// Unit vector along +x.
    #[must_use]
    pub fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Unit vector along +y (y increases upward).
    #[must_use]
    pub fn up() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }
    /// Unit vector along -x.
    #[must_use]
    pub fn left() -> Vec2 {
        Vec2 { x: -1.0, y: 0.0 }
    }
    /// Unit vector along -y.
    #[must_use]
    pub fn down() -> Vec2 {
        Vec2 { x: 0.0, y: -1.0 }
    }
    /// Both components 1.0.
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    /// Both components 0.0.
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }

    /// Both components set to `v`.
    #[must_use]
    pub fn splat(v: f64) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Squared length.
    #[must_use]
    pub fn len_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Length.
    #[must_use]
    pub fn len(&self) -> f64 {
        self.len_squared().sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero and
    /// negative zeros are collapsed to positive zero.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        let mut rv = match self.len() {
            0.0 => Vec2::zero(),
            len => *self / len,
        };
        rv.x = force_positive_zero(rv.x);
        rv.y = force_positive_zero(rv.y);
        rv
    }

    /// Component-wise absolute value.
    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Rotated counterclockwise by `radians`.
    #[must_use]
    pub fn rotated(&self, radians: f64) -> Vec2 {
        Mat3x2::rotation(radians) * *self
    }

    /// Perpendicular vector, 90 degrees counterclockwise.
    #[must_use]
    pub fn orthog(&self) -> Vec2 {
        Vec2 {
            x: -self.y,
            y: self.x,
        }
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product: the signed area of the spanned parallelogram.
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Distance between two points.
    #[must_use]
    pub fn dist(&self, other: Vec2) -> f64 {
        (*self - other).len()
    }

    /// Squared distance between two points.
    #[must_use]
    pub fn dist_squared(&self, other: Vec2) -> f64 {
        (*self - other).len_squared()
    }

    /// Linear interpolation towards `to`.
    #[must_use]
    pub fn lerp(&self, to: Vec2, t: f64) -> Vec2 {
        *self + (to - *self) * t
    }

    /// Approximate equality within [`EPSILON`](crate::f64::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (self.x - rhs.x).abs() < EPSILON && (self.y - rhs.y).abs() < EPSILON
    }

    /// True if both components are zero or normal.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        is_finite(self.x) && is_finite(self.y)
    }

    /// Narrows to the single-precision family.
    #[must_use]
    pub fn as_vec2(&self) -> crate::f32::Vec2 {
        crate::f32::Vec2 {
            x: self.x as f32,
            y: self.y as f32,
        }
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl Mul<&Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: &Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Neg for &Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

    // ==================== Basic Operations ====================

    #[test]
    fn arithmetic() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a + b, Vec2 { x: 4.0, y: 6.0 });
        assert_eq!(b - a, Vec2 { x: 2.0, y: 2.0 });
        assert_eq!(a * 2.0, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(2.0 * a, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(2.0 * &a, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(b / 2.0, Vec2 { x: 1.5, y: 2.0 });
        assert_eq!(-a, Vec2 { x: -1.0, y: -2.0 });
        assert_eq!(-&a, Vec2 { x: -1.0, y: -2.0 });
    }

    #[test]
    fn assign_forms() {
        let mut v = Vec2::one();
        v += Vec2::one();
        v *= 3.0;
        v -= Vec2::splat(2.0);
        v /= 4.0;
        assert_eq!(v, Vec2::one());
    }

    #[test]
    fn sum_of_vectors() {
        let total: Vec2 = [
            Vec2 { x: 1.0, y: 2.0 },
            Vec2 { x: 3.0, y: 4.0 },
            Vec2 { x: -4.0, y: -6.0 },
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Vec2::zero());
    }

    // ==================== Geometric Queries ====================

    #[test]
    fn length_and_normed() {
        let a = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a.len_squared(), 25.0);
        assert_eq!(a.len(), 5.0);
        assert!(a.normed().almost_eq(Vec2 { x: 0.6, y: 0.8 }));
        assert_eq!(Vec2::zero().normed(), Vec2::zero());
    }

    #[test]
    fn dot_and_cross() {
        let a = Vec2 { x: 2.0, y: 3.0 };
        let b = Vec2 { x: 4.0, y: 5.0 };
        assert_eq!(a.dot(b), 23.0);
        assert_eq!(a.cross(b), -2.0);
        assert_eq!(Vec2::right().cross(Vec2::up()), 1.0);
    }

    #[test]
    fn rotated_quarter_turn() {
        assert!(Vec2::right().rotated(FRAC_PI_2).almost_eq(Vec2::up()));
        let diag = Vec2::right().rotated(FRAC_PI_4);
        assert!(diag.almost_eq(Vec2 {
            x: FRAC_1_SQRT_2,
            y: FRAC_1_SQRT_2,
        }));
        assert!(Vec2 { x: 3.0, y: 2.0 }
            .orthog()
            .almost_eq(Vec2 { x: 3.0, y: 2.0 }.rotated(FRAC_PI_2)));
    }

    #[test]
    fn distances_and_lerp() {
        let a = Vec2 { x: 1.0, y: 1.0 };
        let b = Vec2 { x: 4.0, y: 5.0 };
        assert_eq!(a.dist(b), 5.0);
        assert_eq!(a.dist_squared(b), 25.0);
        assert_eq!(a.lerp(b, 0.5), Vec2 { x: 2.5, y: 3.0 });
    }

    // ==================== Equality and Ordering ====================

    #[test]
    fn epsilon_equality() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 {
            x: 1.0 + EPSILON / 2.0,
            y: 2.0,
        };
        assert_eq!(a, b);
        assert_ne!(a, Vec2 { x: 1.0 + 1e-9, y: 2.0 });
    }

    #[test]
    fn deterministic_ordering() {
        let mut vs = [
            Vec2 { x: 2.0, y: 1.0 },
            Vec2 { x: 1.0, y: 2.0 },
            Vec2 { x: 1.0, y: 1.0 },
        ];
        vs.sort();
        assert_eq!(
            vs,
            [
                Vec2 { x: 1.0, y: 1.0 },
                Vec2 { x: 1.0, y: 2.0 },
                Vec2 { x: 2.0, y: 1.0 },
            ]
        );
    }

    // ==================== Conversions ====================

    #[test]
    fn array_round_trip() {
        let v: Vec2 = [1.0_f64, 2.0].into();
        let arr: [f64; 2] = v.into();
        assert_eq!(arr, [1.0, 2.0]);
    }

    #[test]
    fn narrowing_cast() {
        let v = Vec2 { x: 1.5, y: -2.5 }.as_vec2();
        assert_eq!(v.x, 1.5_f32);
        assert_eq!(v.y, -2.5_f32);
    }

    #[test]
    fn display() {
        let v = Vec2 { x: 1.25, y: -3.5 };
        assert_eq!(format!("{v}"), "vec(1.25, -3.5)");
    }
}
