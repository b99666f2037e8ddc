use crate::f32::transform::Transform;
use crate::f32::vec2::Vec2;
use crate::f32::vec3::Vec3;
use crate::f32::{is_finite, EPSILON};
use num_traits::{One, Zero};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Div, DivAssign, Mul, MulAssign},
};

/// A 3x2 matrix representing a 2D affine transformation using 32-bit
/// floating point elements.
///
/// Conceptually this is the 3x3 homogeneous matrix
/// ```text
/// | m00 m10 m20 |
/// | m01 m11 m21 |
/// |  0   0   1  |
/// ```
/// with the constant third row left implicit: `(m00, m01)` and `(m10, m11)`
/// are the basis columns of the linear part and `(m20, m21)` is the
/// translation column. Every composition and inversion behaves as if it
/// operated on the full homogeneous matrix while only the six stored values
/// are ever touched.
///
/// # Composition order
///
/// Operations come in appending and prepending flavours. The plain verbs
/// (`translate`, `rotate`, `scale`, ...) post-multiply, so the new
/// elementary transform is applied to vectors *first*; the `_local` verbs
/// pre-multiply, so it is applied *last*:
///
/// ```
/// use affine2::{Mat3x2, Vec2};
///
/// // Rotate a quarter turn, then move the result up.
/// let m = Mat3x2::identity()
///     .rotate_local(std::f32::consts::FRAC_PI_2)
///     .translate_local(0.0, 1.0);
/// // The same matrix built in appending order:
/// let n = Mat3x2::translation(0.0, 1.0).rotate(std::f32::consts::FRAC_PI_2);
/// assert!(m.almost_eq(n));
/// ```
///
/// # Degenerate inputs
///
/// There are no error returns anywhere: a singular matrix inverts to
/// `Inf`/`NaN` fields and a zero-span [`view`](Mat3x2::view) rectangle
/// divides by zero, exactly as IEEE arithmetic dictates. Callers that care
/// check [`determinant`](Mat3x2::determinant) (or
/// [`is_finite`](Mat3x2::is_finite)) first.
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
#[must_use]
pub struct Mat3x2 {
    pub m00: f32,
    pub m01: f32,
    pub m10: f32,
    pub m11: f32,
    pub m20: f32,
    pub m21: f32,
}

impl Mat3x2 {
    /// Creates a matrix from the six elements, columns first.
    pub fn new(m00: f32, m01: f32, m10: f32, m11: f32, m20: f32, m21: f32) -> Mat3x2 {
        Mat3x2 {
            m00,
            m01,
            m10,
            m11,
            m20,
            m21,
        }
    }

    /// Creates an identity matrix:
    /// ```text
    /// | 1 0 0 |
    /// | 0 1 0 |
    /// ```
    pub fn identity() -> Mat3x2 {
        Mat3x2 {
            m00: 1.0,
            m01: 0.0,
            m10: 0.0,
            m11: 1.0,
            m20: 0.0,
            m21: 0.0,
        }
    }

    /// Creates a matrix with all elements set to 0.
    pub fn zero() -> Mat3x2 {
        Mat3x2 {
            m00: 0.0,
            m01: 0.0,
            m10: 0.0,
            m11: 0.0,
            m20: 0.0,
            m21: 0.0,
        }
    }

    /// Creates a translation matrix:
    /// ```text
    /// | 1 0 x |
    /// | 0 1 y |
    /// ```
    pub fn translation(x: f32, y: f32) -> Mat3x2 {
        Mat3x2 {
            m00: 1.0,
            m01: 0.0,
            m10: 0.0,
            m11: 1.0,
            m20: x,
            m21: y,
        }
    }

    /// Creates a translation matrix from a [`Vec2`].
    pub fn translation_vec(offset: Vec2) -> Mat3x2 {
        Self::translation(offset.x, offset.y)
    }

    /// Creates a counterclockwise rotation matrix:
    /// ```text
    /// | cos(θ)  -sin(θ)  0 |
    /// | sin(θ)   cos(θ)  0 |
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::{Mat3x2, Vec2};
    ///
    /// let rot = Mat3x2::rotation(std::f32::consts::FRAC_PI_2);
    /// let v = rot.transform_direction(Vec2::right());
    /// assert!(v.almost_eq(Vec2::up()));
    /// ```
    pub fn rotation(angle: f32) -> Mat3x2 {
        let cos = angle.cos();
        let sin = angle.sin();
        Mat3x2 {
            m00: cos,
            m01: sin,
            m10: -sin,
            m11: cos,
            m20: 0.0,
            m21: 0.0,
        }
    }

    /// Creates a scaling matrix:
    /// ```text
    /// | sx 0  0 |
    /// | 0  sy 0 |
    /// ```
    pub fn scaling(sx: f32, sy: f32) -> Mat3x2 {
        Mat3x2 {
            m00: sx,
            m01: 0.0,
            m10: 0.0,
            m11: sy,
            m20: 0.0,
            m21: 0.0,
        }
    }

    /// Creates a uniform scaling matrix.
    pub fn scaling_uniform(s: f32) -> Mat3x2 {
        Self::scaling(s, s)
    }

    /// Creates an orthographic view matrix mapping the rectangle
    /// `[left, right] x [bottom, top]` onto `[-1, 1]²`:
    /// ```text
    /// | 2/(r-l)    0     (l+r)/(l-r) |
    /// |   0     2/(t-b)  (b+t)/(b-t) |
    /// ```
    ///
    /// A zero-span rectangle (`left == right` or `bottom == top`) produces
    /// `Inf`/`NaN` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::{Mat3x2, Vec2};
    ///
    /// let m = Mat3x2::view(-4.0, 0.5, -2.0, 3.0);
    /// assert_eq!(
    ///     m.transform_position(Vec2 { x: -4.0, y: -2.0 }),
    ///     Vec2 { x: -1.0, y: -1.0 },
    /// );
    /// assert_eq!(
    ///     m.transform_position(Vec2 { x: 0.5, y: 3.0 }),
    ///     Vec2 { x: 1.0, y: 1.0 },
    /// );
    /// ```
    pub fn view(left: f32, right: f32, bottom: f32, top: f32) -> Mat3x2 {
        Mat3x2 {
            m00: 2.0 / (right - left),
            m01: 0.0,
            m10: 0.0,
            m11: 2.0 / (top - bottom),
            m20: (left + right) / (left - right),
            m21: (bottom + top) / (bottom - top),
        }
    }

    // ---- composition ----

    /// Post-multiplies: returns `self · right` under the implicit
    /// homogeneous third row.
    ///
    /// When the product transforms a vector, `right` is applied first and
    /// `self` second. Also available as the `*` operator.
    pub fn mul(self, right: Mat3x2) -> Mat3x2 {
        Mat3x2 {
            m00: self.m00 * right.m00 + self.m10 * right.m01,
            m01: self.m01 * right.m00 + self.m11 * right.m01,
            m10: self.m00 * right.m10 + self.m10 * right.m11,
            m11: self.m01 * right.m10 + self.m11 * right.m11,
            m20: self.m00 * right.m20 + self.m10 * right.m21 + self.m20,
            m21: self.m01 * right.m20 + self.m11 * right.m21 + self.m21,
        }
    }

    /// Pre-multiplies: returns `left · self`.
    ///
    /// When the product transforms a vector, `self` is applied first and
    /// `left` second.
    pub fn mul_local(self, left: Mat3x2) -> Mat3x2 {
        left.mul(self)
    }

    /// Appends a translation: `self · T(x, y)`, so the translation applies
    /// to vectors before the rest of `self`.
    pub fn translate(self, x: f32, y: f32) -> Mat3x2 {
        Mat3x2 {
            m20: self.m00 * x + self.m10 * y + self.m20,
            m21: self.m01 * x + self.m11 * y + self.m21,
            ..self
        }
    }

    /// [`translate`](Mat3x2::translate) with a [`Vec2`] offset.
    pub fn translate_vec(self, offset: Vec2) -> Mat3x2 {
        self.translate(offset.x, offset.y)
    }

    /// Prepends a translation: `T(x, y) · self`, so the translation applies
    /// to vectors after the rest of `self`.
    pub fn translate_local(self, x: f32, y: f32) -> Mat3x2 {
        Mat3x2 {
            m20: self.m20 + x,
            m21: self.m21 + y,
            ..self
        }
    }

    /// Appends an axis-aligned scaling: `self · S(sx, sy)`.
    pub fn scale(self, sx: f32, sy: f32) -> Mat3x2 {
        Mat3x2 {
            m00: self.m00 * sx,
            m01: self.m01 * sx,
            m10: self.m10 * sy,
            m11: self.m11 * sy,
            ..self
        }
    }

    /// Appends a uniform scaling.
    pub fn scale_uniform(self, s: f32) -> Mat3x2 {
        self.scale(s, s)
    }

    /// Prepends an axis-aligned scaling: `S(sx, sy) · self`.
    pub fn scale_local(self, sx: f32, sy: f32) -> Mat3x2 {
        Mat3x2 {
            m00: sx * self.m00,
            m01: sy * self.m01,
            m10: sx * self.m10,
            m11: sy * self.m11,
            m20: sx * self.m20,
            m21: sy * self.m21,
        }
    }

    /// Appends a scaling about the origin point `(ox, oy)`: the exact
    /// composition `self · T(ox, oy) · S(sx, sy) · T(-ox, -oy)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::{Mat3x2, Vec2};
    ///
    /// let m = Mat3x2::identity().scale_around(2.0, 2.0, 1.0, 1.0);
    /// // The scaling origin stays put.
    /// assert_eq!(
    ///     m.transform_position(Vec2::one()),
    ///     Vec2::one(),
    /// );
    /// assert_eq!(
    ///     m.transform_position(Vec2::zero()),
    ///     Vec2 { x: -1.0, y: -1.0 },
    /// );
    /// ```
    pub fn scale_around(self, sx: f32, sy: f32, ox: f32, oy: f32) -> Mat3x2 {
        let tm20 = self.m00 * ox + self.m10 * oy + self.m20;
        let tm21 = self.m01 * ox + self.m11 * oy + self.m21;
        let m00 = self.m00 * sx;
        let m01 = self.m01 * sx;
        let m10 = self.m10 * sy;
        let m11 = self.m11 * sy;
        Mat3x2 {
            m00,
            m01,
            m10,
            m11,
            m20: -m00 * ox - m10 * oy + tm20,
            m21: -m01 * ox - m11 * oy + tm21,
        }
    }

    /// Prepends a scaling about the point `(ox, oy)`:
    /// `T(ox, oy) · S(sx, sy) · T(-ox, -oy) · self`.
    pub fn scale_around_local(self, sx: f32, sy: f32, ox: f32, oy: f32) -> Mat3x2 {
        Mat3x2 {
            m00: sx * self.m00,
            m01: sy * self.m01,
            m10: sx * self.m10,
            m11: sy * self.m11,
            m20: sx * self.m20 - sx * ox + ox,
            m21: sy * self.m21 - sy * oy + oy,
        }
    }

    /// Appends a counterclockwise rotation: `self · R(angle)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::{Mat3x2, Vec2};
    ///
    /// let m = Mat3x2::identity().rotate(std::f32::consts::FRAC_PI_2);
    /// assert!(m
    ///     .transform_direction(Vec2::right())
    ///     .almost_eq(Vec2::up()));
    /// ```
    pub fn rotate(self, angle: f32) -> Mat3x2 {
        let cos = angle.cos();
        let sin = angle.sin();
        Mat3x2 {
            m00: self.m00 * cos + self.m10 * sin,
            m01: self.m01 * cos + self.m11 * sin,
            m10: self.m00 * -sin + self.m10 * cos,
            m11: self.m01 * -sin + self.m11 * cos,
            ..self
        }
    }

    /// Prepends a counterclockwise rotation: `R(angle) · self`.
    pub fn rotate_local(self, angle: f32) -> Mat3x2 {
        let cos = angle.cos();
        let sin = angle.sin();
        Mat3x2 {
            m00: cos * self.m00 - sin * self.m01,
            m01: sin * self.m00 + cos * self.m01,
            m10: cos * self.m10 - sin * self.m11,
            m11: sin * self.m10 + cos * self.m11,
            m20: cos * self.m20 - sin * self.m21,
            m21: sin * self.m20 + cos * self.m21,
        }
    }

    /// Appends a rotation about the centre `(x, y)`: the exact composition
    /// `self · T(x, y) · R(angle) · T(-x, -y)`.
    pub fn rotate_about(self, angle: f32, x: f32, y: f32) -> Mat3x2 {
        let tm20 = self.m00 * x + self.m10 * y + self.m20;
        let tm21 = self.m01 * x + self.m11 * y + self.m21;
        let cos = angle.cos();
        let sin = angle.sin();
        let m00 = self.m00 * cos + self.m10 * sin;
        let m01 = self.m01 * cos + self.m11 * sin;
        let m10 = self.m00 * -sin + self.m10 * cos;
        let m11 = self.m01 * -sin + self.m11 * cos;
        Mat3x2 {
            m00,
            m01,
            m10,
            m11,
            m20: m00 * -x + m10 * -y + tm20,
            m21: m01 * -x + m11 * -y + tm21,
        }
    }

    /// Appends the rotation that maps `from_dir` onto `to_dir`.
    ///
    /// Both directions must already be normalised; this is not checked.
    /// Non-unit inputs produce a combined rotation and scaling.
    pub fn rotate_to(self, from_dir: Vec2, to_dir: Vec2) -> Mat3x2 {
        let dot = from_dir.dot(to_dir);
        let det = from_dir.cross(to_dir);
        Mat3x2 {
            m00: self.m00 * dot + self.m10 * det,
            m01: self.m01 * dot + self.m11 * det,
            m10: self.m00 * -det + self.m10 * dot,
            m11: self.m01 * -det + self.m11 * dot,
            ..self
        }
    }

    /// Appends an orthographic view transform: `self · V` where `V` is
    /// [`Mat3x2::view`]`(left, right, bottom, top)`, computed fused.
    pub fn mul_view(self, left: f32, right: f32, bottom: f32, top: f32) -> Mat3x2 {
        let rm00 = 2.0 / (right - left);
        let rm11 = 2.0 / (top - bottom);
        let rm20 = (left + right) / (left - right);
        let rm21 = (bottom + top) / (bottom - top);
        Mat3x2 {
            m00: self.m00 * rm00,
            m01: self.m01 * rm00,
            m10: self.m10 * rm11,
            m11: self.m11 * rm11,
            m20: self.m00 * rm20 + self.m10 * rm21 + self.m20,
            m21: self.m01 * rm20 + self.m11 * rm21 + self.m21,
        }
    }

    /// Replaces the translation column, leaving the linear part untouched.
    pub fn set_translation(&mut self, x: f32, y: f32) {
        self.m20 = x;
        self.m21 = y;
    }

    // ---- queries ----

    /// Calculates the determinant.
    ///
    /// The translation column does not contribute: the implicit homogeneous
    /// third row is `(0, 0, 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::Mat3x2;
    ///
    /// assert_eq!(Mat3x2::identity().determinant(), 1.0);
    /// assert_eq!(Mat3x2::scaling(2.0, 3.0).determinant(), 6.0);
    /// assert_eq!(Mat3x2::translation(7.0, -7.0).determinant(), 1.0);
    /// ```
    #[must_use]
    pub fn determinant(&self) -> f32 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Returns the inverse of the homogeneous extension, restricted to 3x2
    /// storage.
    ///
    /// A singular matrix (zero [`determinant`](Mat3x2::determinant)) yields
    /// `Inf`/`NaN` fields; no error is raised.
    pub fn inverse(self) -> Mat3x2 {
        let s = 1.0 / self.determinant();
        Mat3x2 {
            m00: self.m11 * s,
            m01: -self.m01 * s,
            m10: -self.m10 * s,
            m11: self.m00 * s,
            m20: (self.m10 * self.m21 - self.m20 * self.m11) * s,
            m21: (self.m20 * self.m01 - self.m00 * self.m21) * s,
        }
    }

    /// Transforms a homogeneous point: `z` scales the translation column
    /// and passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::{Mat3x2, Vec3};
    ///
    /// let m = Mat3x2::translation(3.0, 4.0);
    /// let p = m.transform(Vec3 { x: 1.0, y: 1.0, z: 1.0 });
    /// assert_eq!(p, Vec3 { x: 4.0, y: 5.0, z: 1.0 });
    /// // z = 0 suppresses the translation entirely.
    /// let d = m.transform(Vec3 { x: 1.0, y: 1.0, z: 0.0 });
    /// assert_eq!(d, Vec3 { x: 1.0, y: 1.0, z: 0.0 });
    /// ```
    #[must_use]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3 {
            x: self.m00 * v.x + self.m10 * v.y + self.m20 * v.z,
            y: self.m01 * v.x + self.m11 * v.y + self.m21 * v.z,
            z: v.z,
        }
    }

    /// Transforms a position: applies the linear part and the translation
    /// (`z = 1` folded in). Also available as the `*` operator.
    #[must_use]
    pub fn transform_position(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: self.m00 * v.x + self.m10 * v.y + self.m20,
            y: self.m01 * v.x + self.m11 * v.y + self.m21,
        }
    }

    /// Transforms a free direction: applies only the `m00, m01, m10, m11`
    /// linear part (`z = 0` folded in). The result is unaffected by any
    /// translation held in the matrix.
    #[must_use]
    pub fn transform_direction(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: self.m00 * v.x + self.m10 * v.y,
            y: self.m01 * v.x + self.m11 * v.y,
        }
    }

    /// Returns the normalised direction that this matrix maps onto the
    /// positive x-axis, for any invertible matrix.
    ///
    /// Inverts on every call; prefer
    /// [`normalized_positive_x`](Mat3x2::normalized_positive_x) when the
    /// matrix is known to be orthogonal.
    #[must_use]
    pub fn positive_x(&self) -> Vec2 {
        let s = 1.0 / self.determinant();
        Vec2 {
            x: self.m11 * s,
            y: -self.m01 * s,
        }
        .normed()
    }

    /// [`positive_x`](Mat3x2::positive_x) by the transpose shortcut.
    ///
    /// Valid only when the matrix is orthogonal (no scaling, no shearing);
    /// anything else yields a deterministic but geometrically wrong result.
    /// The precondition is not checked.
    #[must_use]
    pub fn normalized_positive_x(&self) -> Vec2 {
        Vec2 {
            x: self.m11,
            y: -self.m01,
        }
    }

    /// Returns the normalised direction that this matrix maps onto the
    /// positive y-axis, for any invertible matrix.
    #[must_use]
    pub fn positive_y(&self) -> Vec2 {
        let s = 1.0 / self.determinant();
        Vec2 {
            x: -self.m10 * s,
            y: self.m00 * s,
        }
        .normed()
    }

    /// [`positive_y`](Mat3x2::positive_y) by the transpose shortcut; same
    /// orthogonality precondition as
    /// [`normalized_positive_x`](Mat3x2::normalized_positive_x).
    #[must_use]
    pub fn normalized_positive_y(&self) -> Vec2 {
        Vec2 {
            x: -self.m10,
            y: self.m00,
        }
    }

    /// Returns the position of the pre-transform origin: the translation
    /// column of the inverse, computed closed-form.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        let s = 1.0 / self.determinant();
        Vec2 {
            x: (self.m10 * self.m21 - self.m20 * self.m11) * s,
            y: (self.m20 * self.m01 - self.m00 * self.m21) * s,
        }
    }

    /// Returns `[min_x, min_y, max_x, max_y]` of the axis-aligned bounding
    /// box of the view rectangle: the corners of `[-1, 1]²` pulled back
    /// through the inverse of this matrix.
    #[must_use]
    pub fn view_area(&self) -> [f32; 4] {
        let s = 1.0 / self.determinant();
        let rm00 = self.m11 * s;
        let rm01 = -self.m01 * s;
        let rm10 = -self.m10 * s;
        let rm11 = self.m00 * s;
        let rm20 = (self.m10 * self.m21 - self.m20 * self.m11) * s;
        let rm21 = (self.m20 * self.m01 - self.m00 * self.m21) * s;
        let nxny_x = -rm00 - rm10;
        let nxny_y = -rm01 - rm11;
        let pxny_x = rm00 - rm10;
        let pxny_y = rm01 - rm11;
        let nxpy_x = -rm00 + rm10;
        let nxpy_y = -rm01 + rm11;
        let pxpy_x = rm00 + rm10;
        let pxpy_y = rm01 + rm11;
        [
            nxny_x.min(pxny_x).min(nxpy_x).min(pxpy_x) + rm20,
            nxny_y.min(pxny_y).min(nxpy_y).min(pxpy_y) + rm21,
            nxny_x.max(pxny_x).max(nxpy_x).max(pxpy_x) + rm20,
            nxny_y.max(pxny_y).max(nxpy_y).max(pxpy_y) + rm21,
        ]
    }

    /// Returns `(corner, x_dir, y_dir)` spanning the pre-transform view
    /// parallelogram: `corner` is the pull-back of the bottom-left NDC
    /// corner `(-1, -1)` and the direction vectors span the full extent.
    #[must_use]
    pub fn span(&self) -> (Vec2, Vec2, Vec2) {
        let s = 1.0 / self.determinant();
        let nm00 = self.m11 * s;
        let nm01 = -self.m01 * s;
        let nm10 = -self.m10 * s;
        let nm11 = self.m00 * s;
        let corner = Vec2 {
            x: -nm00 - nm10 + (self.m10 * self.m21 - self.m20 * self.m11) * s,
            y: -nm01 - nm11 + (self.m20 * self.m01 - self.m00 * self.m21) * s,
        };
        let x_dir = Vec2 {
            x: 2.0 * nm00,
            y: 2.0 * nm01,
        };
        let y_dir = Vec2 {
            x: 2.0 * nm10,
            y: 2.0 * nm11,
        };
        (corner, x_dir, y_dir)
    }

    /// Unprojects window coordinates: maps pixels through `viewport`
    /// (`[x, y, width, height]`, origin bottom-left) into NDC `[-1, 1]`,
    /// then applies the inverse of this matrix.
    ///
    /// Inverts on every call. When unprojecting many points against the
    /// same matrix, invert once and use
    /// [`unproject_inv`](Mat3x2::unproject_inv).
    #[must_use]
    pub fn unproject(&self, win_x: f32, win_y: f32, viewport: [i32; 4]) -> Vec2 {
        self.inverse().unproject_inv(win_x, win_y, viewport)
    }

    /// [`unproject`](Mat3x2::unproject) for a matrix that already *is* the
    /// inverse: applies `self` to the NDC coordinates directly.
    #[must_use]
    pub fn unproject_inv(&self, win_x: f32, win_y: f32, viewport: [i32; 4]) -> Vec2 {
        let ndc_x = (win_x - viewport[0] as f32) / viewport[2] as f32 * 2.0 - 1.0;
        let ndc_y = (win_y - viewport[1] as f32) / viewport[3] as f32 * 2.0 - 1.0;
        Vec2 {
            x: self.m00 * ndc_x + self.m10 * ndc_y + self.m20,
            y: self.m01 * ndc_x + self.m11 * ndc_y + self.m21,
        }
    }

    /// Tests whether the pre-transform point `(x, y)` lies inside the clip
    /// rectangle `[-1, 1]²` after transformation by this matrix.
    ///
    /// The four half-plane inequalities are extracted directly from the
    /// matrix rows; no intermediate matrix or plane objects are built.
    #[must_use]
    pub fn test_point(&self, x: f32, y: f32) -> bool {
        let nx_x = self.m00;
        let nx_y = self.m10;
        let nx_w = 1.0 + self.m20;
        let px_x = -self.m00;
        let px_y = -self.m10;
        let px_w = 1.0 - self.m20;
        let ny_x = self.m01;
        let ny_y = self.m11;
        let ny_w = 1.0 + self.m21;
        let py_x = -self.m01;
        let py_y = -self.m11;
        let py_w = 1.0 - self.m21;
        nx_x * x + nx_y * y + nx_w >= 0.0
            && px_x * x + px_y * y + px_w >= 0.0
            && ny_x * x + ny_y * y + ny_w >= 0.0
            && py_x * x + py_y * y + py_w >= 0.0
    }

    /// Tests whether the pre-transform circle overlaps the clip rectangle
    /// `[-1, 1]²` after transformation by this matrix.
    ///
    /// Returns true for partial overlap as well as full containment.
    #[must_use]
    pub fn test_circle(&self, x: f32, y: f32, r: f32) -> bool {
        let mut nx_x = self.m00;
        let mut nx_y = self.m10;
        let mut nx_w = 1.0 + self.m20;
        let mut invl = 1.0 / (nx_x * nx_x + nx_y * nx_y).sqrt();
        nx_x *= invl;
        nx_y *= invl;
        nx_w *= invl;
        let mut px_x = -self.m00;
        let mut px_y = -self.m10;
        let mut px_w = 1.0 - self.m20;
        invl = 1.0 / (px_x * px_x + px_y * px_y).sqrt();
        px_x *= invl;
        px_y *= invl;
        px_w *= invl;
        let mut ny_x = self.m01;
        let mut ny_y = self.m11;
        let mut ny_w = 1.0 + self.m21;
        invl = 1.0 / (ny_x * ny_x + ny_y * ny_y).sqrt();
        ny_x *= invl;
        ny_y *= invl;
        ny_w *= invl;
        let mut py_x = -self.m01;
        let mut py_y = -self.m11;
        let mut py_w = 1.0 - self.m21;
        invl = 1.0 / (py_x * py_x + py_y * py_y).sqrt();
        py_x *= invl;
        py_y *= invl;
        py_w *= invl;
        nx_x * x + nx_y * y + nx_w >= -r
            && px_x * x + px_y * y + px_w >= -r
            && ny_x * x + ny_y * y + ny_w >= -r
            && py_x * x + py_y * y + py_w >= -r
    }

    /// Tests whether the pre-transform axis-aligned rectangle overlaps the
    /// clip rectangle `[-1, 1]²` after transformation by this matrix.
    ///
    /// Returns true for partial overlap as well as full containment: for
    /// each clip half-plane only the rectangle vertex furthest along the
    /// plane normal is tested.
    #[must_use]
    pub fn test_aar(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> bool {
        let nx_x = self.m00;
        let nx_y = self.m10;
        let nx_w = 1.0 + self.m20;
        let px_x = -self.m00;
        let px_y = -self.m10;
        let px_w = 1.0 - self.m20;
        let ny_x = self.m01;
        let ny_y = self.m11;
        let ny_w = 1.0 + self.m21;
        let py_x = -self.m01;
        let py_y = -self.m11;
        let py_w = 1.0 - self.m21;
        nx_x * if nx_x < 0.0 { min_x } else { max_x }
            + nx_y * if nx_y < 0.0 { min_y } else { max_y }
            >= -nx_w
            && px_x * if px_x < 0.0 { min_x } else { max_x }
                + px_y * if px_y < 0.0 { min_y } else { max_y }
                >= -px_w
            && ny_x * if ny_x < 0.0 { min_x } else { max_x }
                + ny_y * if ny_y < 0.0 { min_y } else { max_y }
                >= -ny_w
            && py_x * if py_x < 0.0 { min_x } else { max_x }
                + py_y * if py_y < 0.0 { min_y } else { max_y }
                >= -py_w
    }

    /// Extracts the decomposed translate/rotate/scale form.
    ///
    /// Exact for shear-free matrices; a sheared matrix decomposes to the
    /// nearest such interpretation (rotation from the first basis column,
    /// scale from the column lengths with the determinant sign on y).
    #[must_use]
    pub fn decompose(&self) -> Transform {
        let sx = (self.m00 * self.m00 + self.m01 * self.m01).sqrt();
        let sy = self.determinant() / sx;
        Transform {
            translation: Vec2 {
                x: self.m20,
                y: self.m21,
            },
            rotation: self.m01.atan2(self.m00),
            scale: Vec2 { x: sx, y: sy },
        }
    }

    /// Compares two matrices for approximate equality within
    /// [`EPSILON`](crate::f32::EPSILON).
    ///
    /// # Examples
    ///
    /// ```
    /// use affine2::{f32::EPSILON, Mat3x2};
    ///
    /// let m1 = Mat3x2::rotation(0.1);
    /// let m2 = Mat3x2::rotation(0.1 + EPSILON);
    /// assert!(m1.almost_eq(m2));
    /// assert!(!m1.almost_eq(Mat3x2::rotation(0.2)));
    /// ```
    #[must_use]
    pub fn almost_eq(&self, rhs: Mat3x2) -> bool {
        (self.m00 - rhs.m00).abs() < EPSILON
            && (self.m01 - rhs.m01).abs() < EPSILON
            && (self.m10 - rhs.m10).abs() < EPSILON
            && (self.m11 - rhs.m11).abs() < EPSILON
            && (self.m20 - rhs.m20).abs() < EPSILON
            && (self.m21 - rhs.m21).abs() < EPSILON
    }

    /// True if all six elements are zero or normal.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        is_finite(self.m00)
            && is_finite(self.m01)
            && is_finite(self.m10)
            && is_finite(self.m11)
            && is_finite(self.m20)
            && is_finite(self.m21)
    }

    /// Flattens to a column-major array: `[m00, m01, m10, m11, m20, m21]`.
    #[must_use]
    pub fn to_array(&self) -> [f32; 6] {
        [self.m00, self.m01, self.m10, self.m11, self.m20, self.m21]
    }

    /// Embeds into a column-major 4x4 homogeneous array: the 2x2 linear
    /// block in the top-left, the translation in the last column, identity
    /// elsewhere.
    #[must_use]
    pub fn to_array_4x4(&self) -> [f32; 16] {
        [
            self.m00, self.m01, 0.0, 0.0, //
            self.m10, self.m11, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            self.m20, self.m21, 0.0, 1.0,
        ]
    }

    /// Widens to the double-precision family.
    #[must_use]
    pub fn as_dmat3x2(&self) -> crate::f64::Mat3x2 {
        crate::f64::Mat3x2 {
            m00: f64::from(self.m00),
            m01: f64::from(self.m01),
            m10: f64::from(self.m10),
            m11: f64::from(self.m11),
            m20: f64::from(self.m20),
            m21: f64::from(self.m21),
        }
    }
}

impl Default for Mat3x2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl One for Mat3x2 {
    fn one() -> Self {
        Self::identity()
    }
}

impl Zero for Mat3x2 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f32; 6]> for Mat3x2 {
    fn from(value: [f32; 6]) -> Self {
        Mat3x2 {
            m00: value[0],
            m01: value[1],
            m10: value[2],
            m11: value[3],
            m20: value[4],
            m21: value[5],
        }
    }
}

impl From<Mat3x2> for [f32; 6] {
    fn from(value: Mat3x2) -> Self {
        value.to_array()
    }
}

impl fmt::Display for Mat3x2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "mat3x2(")?;
        let mut sep = "";
        for v in self.to_array() {
            if let Some(p) = precision {
                write!(f, "{sep}{v:.p$}")?;
            } else {
                write!(f, "{sep}{v}")?;
            }
            sep = ", ";
        }
        write!(f, ")")
    }
}

impl Add<Mat3x2> for Mat3x2 {
    type Output = Mat3x2;

    fn add(self, rhs: Mat3x2) -> Self::Output {
        Mat3x2 {
            m00: self.m00 + rhs.m00,
            m01: self.m01 + rhs.m01,
            m10: self.m10 + rhs.m10,
            m11: self.m11 + rhs.m11,
            m20: self.m20 + rhs.m20,
            m21: self.m21 + rhs.m21,
        }
    }
}

impl Mul<Mat3x2> for Mat3x2 {
    type Output = Mat3x2;

    fn mul(self, rhs: Mat3x2) -> Self::Output {
        Mat3x2::mul(self, rhs)
    }
}
impl MulAssign<Mat3x2> for Mat3x2 {
    fn mul_assign(&mut self, rhs: Mat3x2) {
        *self = Mat3x2::mul(*self, rhs);
    }
}

impl Mul<f32> for Mat3x2 {
    type Output = Mat3x2;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Mat3x2> for f32 {
    type Output = Mat3x2;

    fn mul(self, rhs: Mat3x2) -> Self::Output {
        Mat3x2 {
            m00: self * rhs.m00,
            m01: self * rhs.m01,
            m10: self * rhs.m10,
            m11: self * rhs.m11,
            m20: self * rhs.m20,
            m21: self * rhs.m21,
        }
    }
}
impl MulAssign<f32> for Mat3x2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.m00 *= rhs;
        self.m01 *= rhs;
        self.m10 *= rhs;
        self.m11 *= rhs;
        self.m20 *= rhs;
        self.m21 *= rhs;
    }
}

impl Div<f32> for Mat3x2 {
    type Output = Mat3x2;

    fn div(self, rhs: f32) -> Self::Output {
        (1.0 / rhs) * self
    }
}
impl DivAssign<f32> for Mat3x2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Mul<Vec2> for Mat3x2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        self.transform_position(rhs)
    }
}
impl MulAssign<Mat3x2> for Vec2 {
    fn mul_assign(&mut self, rhs: Mat3x2) {
        *self = rhs.transform_position(*self);
    }
}

impl Mul<Vec3> for Mat3x2 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        self.transform(rhs)
    }
}
impl MulAssign<Mat3x2> for Vec3 {
    fn mul_assign(&mut self, rhs: Mat3x2) {
        *self = rhs.transform(*self);
    }
}
