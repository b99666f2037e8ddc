use crate::f32::mat3x2::Mat3x2;
use crate::f32::{force_positive_zero, is_finite, EPSILON};
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

/// A 2D vector with 32-bit floating point coordinates.
///
/// [`Vec2`] is the operand type of most [`Mat3x2`] operations: positions fed
/// through [`Mat3x2::transform_position`], free directions fed through
/// [`Mat3x2::transform_direction`], and the results of the basis and
/// projection queries.
///
/// # Examples
///
/// ```
/// use affine2::Vec2;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
///
/// let sum = v1 + v2;
/// assert_eq!(sum, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality and ordering
///
/// Two finite vectors compare equal when their components differ by less than
/// [`EPSILON`](crate::f32::EPSILON); non-finite vectors compare exactly. On
/// top of that, [`Ord`] provides a deterministic total ordering (x first,
/// then y, with a `total_cmp` fallback for NaN) so vectors can live in
/// [`BTreeMap`](std::collections::BTreeMap)s and be sorted stably. The
/// ordering has no geometric meaning.
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
    pub x: f32,
    pub y: f32,
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
    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing upward (positive y-axis).
    ///
    /// Note: this crate uses the OpenGL-style convention where y increases
    /// upward and the viewport origin sits at the bottom left.
    #[must_use]
    pub fn up() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub fn left() -> Vec2 {
        Vec2 { x: -1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing downward (negative y-axis).
    #[must_use]
    pub fn down() -> Vec2 {
        Vec2 { x: 0.0, y: -1.0 }
    }
    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    /// Returns a vector with both components set to 0.0.
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }

    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::Vec2;
    /// let vec = Vec2::splat(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths, to
    /// avoid the square root.
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
    /// vector.
    ///
    /// A zero-length input yields the zero vector rather than dividing by
    /// zero. Negative zero components are collapsed to positive zero.
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

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Returns the vector rotated counterclockwise by the given angle in
    /// radians.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::Vec2;
    /// let rotated = Vec2::right().rotated(std::f32::consts::FRAC_PI_2);
    /// assert!(rotated.almost_eq(Vec2::up()));
    /// ```
    #[must_use]
    pub fn rotated(&self, radians: f32) -> Vec2 {
        Mat3x2::rotation(radians) * *self
    }

    /// Returns an orthogonal vector, rotated 90 degrees counterclockwise
    /// from this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::Vec2;
    /// let vec = Vec2 { x: 3.0, y: 2.0 };
    /// let perpendicular = vec.orthog();
    /// assert_eq!(perpendicular, Vec2 { x: -2.0, y: 3.0 });
    /// assert_eq!(vec.dot(perpendicular), 0.0);
    /// ```
    #[must_use]
    pub fn orthog(&self) -> Vec2 {
        Vec2 {
            x: -self.y,
            y: self.x,
        }
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::Vec2;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 4.0, y: 5.0 };
    /// assert_eq!(v1.dot(v2), 23.0); // 2*4 + 3*5
    /// ```
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product of two vectors.
    ///
    /// The result is the signed area of the parallelogram spanned by the two
    /// vectors: positive if `other` is counterclockwise from `self`,
    /// negative otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::Vec2;
    /// let v1 = Vec2 { x: 2.0, y: 0.0 };
    /// let v2 = Vec2 { x: 0.0, y: 3.0 };
    /// assert_eq!(v1.cross(v2), 6.0);
    /// assert_eq!(v2.cross(v1), -6.0);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Calculates the distance between two points.
    #[must_use]
    pub fn dist(&self, other: Vec2) -> f32 {
        (*self - other).len()
    }

    /// Calculates the squared distance between two points.
    #[must_use]
    pub fn dist_squared(&self, other: Vec2) -> f32 {
        (*self - other).len_squared()
    }

    /// Linearly interpolates between this vector and `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::Vec2;
    /// let a = Vec2::zero();
    /// let b = Vec2 { x: 10.0, y: -2.0 };
    /// assert_eq!(a.lerp(b, 0.5), Vec2 { x: 5.0, y: -1.0 });
    /// ```
    #[must_use]
    pub fn lerp(&self, to: Vec2, t: f32) -> Vec2 {
        *self + (to - *self) * t
    }

    /// Compares two vectors for approximate equality within
    /// [`EPSILON`](crate::f32::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (self.x - rhs.x).abs() < EPSILON && (self.y - rhs.y).abs() < EPSILON
    }

    /// True if both components are zero or normal.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        is_finite(self.x) && is_finite(self.y)
    }

    /// Widens to the double-precision family.
    #[must_use]
    pub fn as_dvec2(&self) -> crate::f64::Vec2 {
        crate::f64::Vec2 {
            x: f64::from(self.x),
            y: f64::from(self.y),
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

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f32; 2] {
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

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl Mul<&Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: &Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
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
