use crate::f64::transform::Transform;
use crate::f64::vec2::Vec2;
use crate::f64::vec3::Vec3;
use crate::f64::{is_finite, EPSILON};
use num_traits::{One, Zero};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Div, DivAssign, Mul, MulAssign},
};

/// A 3x2 matrix representing a 2D affine transformation using 64-bit
/// floating point elements.
///
/// The double-precision counterpart of [`crate::f32::Mat3x2`], re-exported
/// at the crate root as `DMat3x2`: the same six-element storage over an
/// implicit homogeneous third row, the same appending/prepending composition
/// rules, and the same IEEE propagation policy for degenerate inputs.
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
    pub m00: f64,
    pub m01: f64,
    pub m10: f64,
    pub m11: f64,
    pub m20: f64,
    pub m21: f64,
}

impl Mat3x2 {
    /// Creates a matrix from the six elements, columns first.
    pub fn new(m00: f64, m01: f64, m10: f64, m11: f64, m20: f64, m21: f64) -> Mat3x2 {
        Mat3x2 {
            m00,
            m01,
            m10,
            m11,
            m20,
            m21,
        }
    }

    /// Creates an identity matrix.
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

    /// Creates a translation matrix.
    pub fn translation(x: f64, y: f64) -> Mat3x2 {
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

    /// Creates a counterclockwise rotation matrix.
    pub fn rotation(angle: f64) -> Mat3x2 {
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

    /// Creates a scaling matrix.
    pub fn scaling(sx: f64, sy: f64) -> Mat3x2 {
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
    pub fn scaling_uniform(s: f64) -> Mat3x2 {
        Self::scaling(s, s)
    }

    /// Creates an orthographic view matrix mapping the rectangle
    /// `[left, right] x [bottom, top]` onto `[-1, 1]²`. A zero-span
    /// rectangle produces `Inf`/`NaN` elements.
    pub fn view(left: f64, right: f64, bottom: f64, top: f64) -> Mat3x2 {
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

    /// Post-multiplies: returns `self · right`. Also the `*` operator.
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
    pub fn mul_local(self, left: Mat3x2) -> Mat3x2 {
        left.mul(self)
    }

    /// Appends a translation: `self · T(x, y)`.
    pub fn translate(self, x: f64, y: f64) -> Mat3x2 {
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

    /// Prepends a translation: `T(x, y) · self`.
    pub fn translate_local(self, x: f64, y: f64) -> Mat3x2 {
        Mat3x2 {
            m20: self.m20 + x,
            m21: self.m21 + y,
            ..self
        }
    }

    /// Appends an axis-aligned scaling: `self · S(sx, sy)`.
    pub fn scale(self, sx: f64, sy: f64) -> Mat3x2 {
        Mat3x2 {
            m00: self.m00 * sx,
            m01: self.m01 * sx,
            m10: self.m10 * sy,
            m11: self.m11 * sy,
            ..self
        }
    }

    /// Appends a uniform scaling.
    pub fn scale_uniform(self, s: f64) -> Mat3x2 {
        self.scale(s, s)
    }

    /// Prepends an axis-aligned scaling: `S(sx, sy) · self`.
    pub fn scale_local(self, sx: f64, sy: f64) -> Mat3x2 {
        Mat3x2 {
            m00: sx * self.m00,
            m01: sy * self.m01,
            m10: sx * self.m10,
            m11: sy * self.m11,
            m20: sx * self.m20,
            m21: sy * self.m21,
        }
    }

    /// Appends a scaling about `(ox, oy)`: the exact composition
    /// `self · T(ox, oy) · S(sx, sy) · T(-ox, -oy)`.
    pub fn scale_around(self, sx: f64, sy: f64, ox: f64, oy: f64) -> Mat3x2 {
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

    /// Prepends a scaling about `(ox, oy)`:
    /// `T(ox, oy) · S(sx, sy) · T(-ox, -oy) · self`.
    pub fn scale_around_local(self, sx: f64, sy: f64, ox: f64, oy: f64) -> Mat3x2 {
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
    pub fn rotate(self, angle: f64) -> Mat3x2 {
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
    pub fn rotate_local(self, angle: f64) -> Mat3x2 {
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

    /// Appends a rotation about `(x, y)`: the exact composition
    /// `self · T(x, y) · R(angle) · T(-x, -y)`.
    pub fn rotate_about(self, angle: f64, x: f64, y: f64) -> Mat3x2 {
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

    /// Appends the rotation mapping `from_dir` onto `to_dir`. Both must
    /// already be normalised (unchecked); non-unit inputs produce a
    /// combined rotation and scaling.
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
    pub fn mul_view(self, left: f64, right: f64, bottom: f64, top: f64) -> Mat3x2 {
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
    pub fn set_translation(&mut self, x: f64, y: f64) {
        self.m20 = x;
        self.m21 = y;
    }

    // ---- queries ----

    /// Calculates the determinant; the translation column does not
    /// contribute.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Returns the inverse of the homogeneous extension. A singular matrix
    /// yields `Inf`/`NaN` fields; no error is raised.
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
    #[must_use]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3 {
            x: self.m00 * v.x + self.m10 * v.y + self.m20 * v.z,
            y: self.m01 * v.x + self.m11 * v.y + self.m21 * v.z,
            z: v.z,
        }
    }

    /// Transforms a position: linear part plus translation. Also the `*`
    /// operator.
    #[must_use]
    pub fn transform_position(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: self.m00 * v.x + self.m10 * v.y + self.m20,
            y: self.m01 * v.x + self.m11 * v.y + self.m21,
        }
    }

    /// Transforms a free direction: linear part only, never the
    /// translation.
    #[must_use]
    pub fn transform_direction(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: self.m00 * v.x + self.m10 * v.y,
            y: self.m01 * v.x + self.m11 * v.y,
        }
    }

    /// Returns the normalised direction mapped onto the positive x-axis,
    /// for any invertible matrix (inverts on every call).
    #[must_use]
    pub fn positive_x(&self) -> Vec2 {
        let s = 1.0 / self.determinant();
        Vec2 {
            x: self.m11 * s,
            y: -self.m01 * s,
        }
        .normed()
    }

    /// [`positive_x`](Mat3x2::positive_x) by the transpose shortcut; valid
    /// only for orthogonal matrices (unchecked).
    #[must_use]
    pub fn normalized_positive_x(&self) -> Vec2 {
        Vec2 {
            x: self.m11,
            y: -self.m01,
        }
    }

    /// Returns the normalised direction mapped onto the positive y-axis,
    /// for any invertible matrix.
    #[must_use]
    pub fn positive_y(&self) -> Vec2 {
        let s = 1.0 / self.determinant();
        Vec2 {
            x: -self.m10 * s,
            y: self.m00 * s,
        }
        .normed()
    }

    /// [`positive_y`](Mat3x2::positive_y) by the transpose shortcut; valid
    /// only for orthogonal matrices (unchecked).
    #[must_use]
    pub fn normalized_positive_y(&self) -> Vec2 {
        Vec2 {
            x: -self.m10,
            y: self.m00,
        }
    }

    /// Returns the pre-image of NDC `(0, 0)`: the translation column of
    /// the inverse, computed closed-form.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        let s = 1.0 / self.determinant();
        Vec2 {
            x: (self.m10 * self.m21 - self.m20 * self.m11) * s,
            y: (self.m20 * self.m01 - self.m00 * self.m21) * s,
        }
    }

    /// Returns `[min_x, min_y, max_x, max_y]` bounding the pre-image of the
    /// view rectangle `[-1, 1]²`.
    #[must_use]
    pub fn view_area(&self) -> [f64; 4] {
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

    /// Returns `(corner, x_dir, y_dir)` spanning the pre-image of the view
    /// rectangle, anchored at the pull-back of NDC `(-1, -1)`.
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

    /// Unprojects window coordinates through `viewport`
    /// (`[x, y, width, height]`, origin bottom-left) and the inverse of
    /// this matrix. Inverts on every call; see
    /// [`unproject_inv`](Mat3x2::unproject_inv).
    #[must_use]
    pub fn unproject(&self, win_x: f64, win_y: f64, viewport: [i32; 4]) -> Vec2 {
        self.inverse().unproject_inv(win_x, win_y, viewport)
    }

    /// [`unproject`](Mat3x2::unproject) for a matrix that already *is* the
    /// inverse.
    #[must_use]
    pub fn unproject_inv(&self, win_x: f64, win_y: f64, viewport: [i32; 4]) -> Vec2 {
        let ndc_x = (win_x - f64::from(viewport[0])) / f64::from(viewport[2]) * 2.0 - 1.0;
        let ndc_y = (win_y - f64::from(viewport[1])) / f64::from(viewport[3]) * 2.0 - 1.0;
        Vec2 {
            x: self.m00 * ndc_x + self.m10 * ndc_y + self.m20,
            y: self.m01 * ndc_x + self.m11 * ndc_y + self.m21,
        }
    }

    /// Tests whether the point lies inside the clip rectangle `[-1, 1]²`
    /// after transformation, by plane extraction from the matrix rows.
    #[must_use]
    pub fn test_point(&self, x: f64, y: f64) -> bool {
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

    /// Tests whether the circle overlaps the clip rectangle `[-1, 1]²`
    /// after transformation; true for partial overlap as well as full
    /// containment.
    #[must_use]
    pub fn test_circle(&self, x: f64, y: f64, r: f64) -> bool {
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

    /// Tests whether the axis-aligned rectangle overlaps the clip rectangle
    /// `[-1, 1]²` after transformation; true for partial overlap as well as
    /// full containment.
    #[must_use]
    pub fn test_aar(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> bool {
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

    /// Extracts the decomposed translate/rotate/scale form; exact for
    /// shear-free matrices.
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

    /// Approximate element-wise equality within
    /// [`EPSILON`](crate::f64::EPSILON).
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
    pub fn to_array(&self) -> [f64; 6] {
        [self.m00, self.m01, self.m10, self.m11, self.m20, self.m21]
    }

    /// Embeds into a column-major 4x4 homogeneous array.
    #[must_use]
    pub fn to_array_4x4(&self) -> [f64; 16] {
        [
            self.m00, self.m01, 0.0, 0.0, //
            self.m10, self.m11, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            self.m20, self.m21, 0.0, 1.0,
        ]
    }

    /// Narrows to the single-precision family.
    #[must_use]
    pub fn as_mat3x2(&self) -> crate::f32::Mat3x2 {
        crate::f32::Mat3x2 {
            m00: self.m00 as f32,
            m01: self.m01 as f32,
            m10: self.m10 as f32,
            m11: self.m11 as f32,
            m20: self.m20 as f32,
            m21: self.m21 as f32,
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

impl From<[f64; 6]> for Mat3x2 {
    fn from(value: [f64; 6]) -> Self {
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

impl From<Mat3x2> for [f64; 6] {
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

impl Mul<f64> for Mat3x2 {
    type Output = Mat3x2;

    fn mul(self, rhs: f64) -> Self::Output {
        rhs * self
    }
}
impl Mul<Mat3x2> for f64 {
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
impl MulAssign<f64> for Mat3x2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.m00 *= rhs;
        self.m01 *= rhs;
        self.m10 *= rhs;
        self.m11 *= rhs;
        self.m20 *= rhs;
        self.m21 *= rhs;
    }
}

impl Div<f64> for Mat3x2 {
    type Output = Mat3x2;

    fn div(self, rhs: f64) -> Self::Output {
        (1.0 / rhs) * self
    }
}
impl DivAssign<f64> for Mat3x2 {
    fn div_assign(&mut self, rhs: f64) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn random_trs(rng: &mut StdRng) -> Mat3x2 {
        Mat3x2::translation(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0))
            .rotate(rng.gen_range(-PI..PI))
            .scale(rng.gen_range(0.5..2.0), rng.gen_range(0.5..2.0))
    }

    // ==================== Identity and Multiplication ====================

    #[test]
    fn identity_laws() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..32 {
            let m = random_trs(&mut rng);
            assert!(Mat3x2::identity().mul(m).almost_eq(m));
            assert!(m.mul(Mat3x2::identity()).almost_eq(m));
        }
    }

    #[test]
    fn mul_applies_right_operand_first() {
        let t = Mat3x2::translation(1.0, 0.0);
        let r = Mat3x2::rotation(FRAC_PI_2);
        let v = Vec2::zero();
        assert!(r.mul(t).transform_position(v).almost_eq(Vec2::up()));
        assert!(t.mul(r).transform_position(v).almost_eq(Vec2::right()));
    }

    #[test]
    fn mul_local_is_flipped_mul() {
        let a = Mat3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let b = Mat3x2::translation(-2.0, 9.0).rotate(0.3);
        assert_eq!(a.mul_local(b), b.mul(a));
    }

    #[test]
    fn self_composition_aliasing() {
        let m = Mat3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let tmp = m.mul(m);
        let mut aliased = m;
        aliased *= aliased;
        assert_eq!(aliased.to_array(), tmp.to_array());
    }

    // ==================== Determinant and Inverse ====================

    #[test]
    fn determinant_ignores_translation() {
        let m = Mat3x2::scaling(2.0, 3.0);
        assert_eq!(m.determinant(), 6.0);
        assert_eq!(m.translate(100.0, -50.0).determinant(), 6.0);
    }

    #[test]
    fn inverse_law() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..32 {
            let m = random_trs(&mut rng);
            assert!(m.mul(m.inverse()).almost_eq(Mat3x2::identity()));
            assert!(m.inverse().mul(m).almost_eq(Mat3x2::identity()));
        }
    }

    #[test]
    fn rotate_translate_invert_round_trip() {
        let m = Mat3x2::identity().rotate(FRAC_PI_4).translate(1.0, 4.0);
        let v = Vec2 { x: 1.0, y: 2.0 };
        let transformed = m.transform_position(v);
        assert!(m.inverse().transform_position(transformed).almost_eq(v));
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let m = Mat3x2::new(0.0, 0.0, 0.0, 0.0, 5.0, 5.0);
        assert_eq!(m.determinant(), 0.0);
        let inv = m.inverse();
        assert!(!inv.is_finite());
        assert!(inv.to_array().iter().any(|v| v.is_nan() || v.is_infinite()));
    }

    // ==================== Elementary Transforms ====================

    #[test]
    fn translate_order_contract() {
        let a = Mat3x2::rotation(0.7).scale(2.0, 0.5);
        let v = Vec2 { x: 1.5, y: -2.0 };
        assert!(a
            .translate(3.0, 4.0)
            .transform_position(v)
            .almost_eq(a.mul(Mat3x2::translation(3.0, 4.0)).transform_position(v)));
        assert!(a
            .translate_local(3.0, 4.0)
            .transform_position(v)
            .almost_eq(Mat3x2::translation(3.0, 4.0).mul(a).transform_position(v)));
        assert_eq!(a.translate_vec(Vec2 { x: 3.0, y: 4.0 }), a.translate(3.0, 4.0));
    }

    #[test]
    fn scale_order_contract() {
        let a = Mat3x2::translation(1.0, 2.0).rotate(0.3);
        assert!(a
            .scale(2.0, 3.0)
            .almost_eq(a.mul(Mat3x2::scaling(2.0, 3.0))));
        assert!(a
            .scale_local(2.0, 3.0)
            .almost_eq(Mat3x2::scaling(2.0, 3.0).mul(a)));
        assert_eq!(a.scale_uniform(2.0), a.scale(2.0, 2.0));
        assert_eq!(Mat3x2::scaling_uniform(2.0), Mat3x2::scaling(2.0, 2.0));
    }

    #[test]
    fn scale_around_matches_composition() {
        let a = Mat3x2::rotation(0.9).translate(-1.0, 4.0);
        let composed = a
            .mul(Mat3x2::translation(2.0, 3.0))
            .mul(Mat3x2::scaling(0.5, 4.0))
            .mul(Mat3x2::translation(-2.0, -3.0));
        assert!(a.scale_around(0.5, 4.0, 2.0, 3.0).almost_eq(composed));

        let local = Mat3x2::translation(2.0, 3.0)
            .mul(Mat3x2::scaling(0.5, 4.0))
            .mul(Mat3x2::translation(-2.0, -3.0))
            .mul(a);
        assert!(a.scale_around_local(0.5, 4.0, 2.0, 3.0).almost_eq(local));
    }

    #[test]
    fn rotate_order_contract() {
        let a = Mat3x2::translation(5.0, -2.0).scale(2.0, 2.0);
        assert!(a.rotate(0.8).almost_eq(a.mul(Mat3x2::rotation(0.8))));
        assert!(a.rotate_local(0.8).almost_eq(Mat3x2::rotation(0.8).mul(a)));
    }

    #[test]
    fn rotate_about_matches_composition() {
        let a = Mat3x2::scaling(1.5, 0.5).translate(2.0, 2.0);
        let composed = a
            .mul(Mat3x2::translation(-3.0, 1.0))
            .mul(Mat3x2::rotation(FRAC_PI_4))
            .mul(Mat3x2::translation(3.0, -1.0));
        assert!(a.rotate_about(FRAC_PI_4, -3.0, 1.0).almost_eq(composed));
        let centre = Vec2 { x: -3.0, y: 1.0 };
        assert!(a
            .rotate_about(FRAC_PI_4, -3.0, 1.0)
            .transform_position(centre)
            .almost_eq(a.transform_position(centre)));
    }

    #[test]
    fn rotate_to_maps_direction() {
        let from = Vec2 { x: 0.6, y: 0.8 };
        let to = Vec2 { x: -0.8, y: 0.6 };
        let m = Mat3x2::identity().rotate_to(from, to);
        assert!(m.transform_direction(from).almost_eq(to));
        assert!(Mat3x2::identity()
            .rotate_to(from, from)
            .almost_eq(Mat3x2::identity()));
    }

    #[test]
    fn set_translation_keeps_linear_part() {
        let mut m = Mat3x2::rotation(0.4).translate(9.0, 9.0);
        let linear = (m.m00, m.m01, m.m10, m.m11);
        m.set_translation(1.0, 2.0);
        assert_eq!((m.m00, m.m01, m.m10, m.m11), linear);
        assert_eq!((m.m20, m.m21), (1.0, 2.0));
    }

    // ==================== View ====================

    #[test]
    fn view_maps_corners_to_ndc() {
        let m = Mat3x2::view(-4.0, 0.5, -2.0, 3.0);
        assert!(m
            .transform_position(Vec2 { x: -4.0, y: -2.0 })
            .almost_eq(Vec2 { x: -1.0, y: -1.0 }));
        assert!(m
            .transform_position(Vec2 { x: 0.5, y: 3.0 })
            .almost_eq(Vec2::one()));
    }

    #[test]
    fn mul_view_matches_composition() {
        let a = Mat3x2::rotation(0.2).translate(1.0, 1.0);
        assert!(a
            .mul_view(-3.0, 2.0, -4.0, 1.0)
            .almost_eq(a.mul(Mat3x2::view(-3.0, 2.0, -4.0, 1.0))));
    }

    #[test]
    fn degenerate_view_is_not_finite() {
        assert!(!Mat3x2::view(1.0, 1.0, -2.0, 3.0).is_finite());
        assert!(!Mat3x2::view(-2.0, 3.0, 1.0, 1.0).is_finite());
    }

    #[test]
    fn view_area_recovers_view_rectangle() {
        let area = Mat3x2::view(-10.0, 5.0, -2.0, 10.0).view_area();
        assert!((area[0] + 10.0).abs() < 1e-6);
        assert!((area[1] + 2.0).abs() < 1e-6);
        assert!((area[2] - 5.0).abs() < 1e-6);
        assert!((area[3] - 10.0).abs() < 1e-6);
    }

    // ==================== Vector Transforms ====================

    #[test]
    fn transform_homogeneous_z_scales_translation() {
        let m = Mat3x2::translation(3.0, 4.0);
        assert_eq!(
            m.transform(Vec3 {
                x: 1.0,
                y: 1.0,
                z: 2.0,
            }),
            Vec3 {
                x: 7.0,
                y: 9.0,
                z: 2.0,
            }
        );
    }

    #[test]
    fn transform_direction_ignores_translation() {
        let m = Mat3x2::rotation(0.6).scale(2.0, 3.0);
        let v = Vec2 { x: 1.0, y: -2.0 };
        assert_eq!(
            m.translate(17.0, -29.0).transform_direction(v),
            m.transform_direction(v)
        );
        assert_ne!(
            m.translate(17.0, -29.0).transform_position(v),
            m.transform_position(v)
        );
    }

    #[test]
    fn transform_operators() {
        let m = Mat3x2::translation(1.0, 2.0).scale(2.0, 2.0);
        let v = Vec2 { x: 1.0, y: 1.0 };
        assert_eq!(m * v, m.transform_position(v));
        let mut w = v;
        w *= m;
        assert_eq!(w, m.transform_position(v));
        let h = Vec3 {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        };
        assert_eq!(m * h, m.transform(h));
    }

    // ==================== Basis and View Queries ====================

    #[test]
    fn positive_axes() {
        let m = Mat3x2::rotation(FRAC_PI_2);
        assert!(m.positive_x().almost_eq(Vec2::down()));
        assert!(m.positive_y().almost_eq(Vec2::right()));
        assert!(m.normalized_positive_x().almost_eq(m.positive_x()));
        assert!(m.normalized_positive_y().almost_eq(m.positive_y()));

        // The fast path is only meaningful for orthogonal matrices.
        let scaled = Mat3x2::scaling(2.0, 2.0);
        assert!(scaled.positive_x().almost_eq(Vec2::right()));
        assert_eq!(
            scaled.normalized_positive_x(),
            Vec2 { x: 2.0, y: 0.0 }
        );
    }

    #[test]
    fn origin_is_pre_image_of_ndc_origin() {
        let m = Mat3x2::rotation(0.5).translate(3.0, -8.0);
        assert!(m.transform_position(m.origin()).almost_eq(Vec2::zero()));
    }

    #[test]
    fn span_covers_the_view_rectangle() {
        let m = Mat3x2::view(-3.0, 2.0, -4.0, 1.0);
        let (corner, x_dir, y_dir) = m.span();
        assert!(corner.almost_eq(Vec2 { x: -3.0, y: -4.0 }));
        assert!((corner + x_dir).almost_eq(Vec2 { x: 2.0, y: -4.0 }));
        assert!((corner + y_dir).almost_eq(Vec2 { x: -3.0, y: 1.0 }));
    }

    // ==================== Unprojection ====================

    #[test]
    fn unproject_viewport_corners() {
        let m = Mat3x2::view(-3.0, 2.0, -4.0, 1.0);
        let viewport = [0, 0, 800, 600];
        assert!(m
            .unproject(0.0, 0.0, viewport)
            .almost_eq(Vec2 { x: -3.0, y: -4.0 }));
        assert!(m
            .unproject(800.0, 600.0, viewport)
            .almost_eq(Vec2 { x: 2.0, y: 1.0 }));
    }

    #[test]
    fn unproject_inv_matches_unproject() {
        let m = Mat3x2::view(-3.0, 2.0, -4.0, 1.0).rotate(0.25);
        let inv = m.inverse();
        let viewport = [10, 20, 640, 480];
        for (x, y) in [(10.0, 20.0), (330.0, 260.0), (650.0, 500.0)] {
            assert!(m
                .unproject(x, y, viewport)
                .almost_eq(inv.unproject_inv(x, y, viewport)));
        }
    }

    // ==================== Frustum Tests ====================

    #[test]
    fn test_point_against_view() {
        let m = Mat3x2::view(-4.0, 2.0, -3.0, 10.0);
        assert!(m.test_point(0.0, 0.0));
        assert!(m.test_point(-4.0, -2.9));
        assert!(!m.test_point(-4.01, -2.9));
        assert!(!m.test_point(-3.9, -3.01));
        assert!(m.test_point(0.0, 9.99));
        assert!(!m.test_point(0.0, 10.01));
    }

    #[test]
    fn test_point_against_rotated_view() {
        let m = Mat3x2::view(-2.0, 2.0, -2.0, 2.0).rotate(FRAC_PI_4);
        let area = m.view_area();
        assert!(m.test_point(area[0] + 1e-9, 0.0));
        assert!(!m.test_point(area[0] - 1e-9, 0.0));
        assert!(m.test_point(area[2] - 0.1, 0.0));
        assert!(!m.test_point(area[2] + 1e-9, 0.0));
    }

    #[test]
    fn test_circle_overlap() {
        let m = Mat3x2::identity();
        assert!(m.test_circle(0.0, 0.0, 0.5));
        assert!(m.test_circle(1.5, 0.0, 0.6));
        assert!(!m.test_circle(1.5, 0.0, 0.4));
        assert!(!m.test_circle(-3.0, -3.0, 1.0));
    }

    #[test]
    fn test_aar_overlap() {
        let m = Mat3x2::identity();
        assert!(!m.test_aar(2.0, 2.0, 3.0, 3.0));
        assert!(m.test_aar(0.5, 0.5, 3.0, 3.0));
        assert!(m.test_aar(-0.5, -0.5, 0.5, 0.5));
        assert!(m.test_aar(-5.0, -5.0, 5.0, 5.0));
    }

    // ==================== Decomposition ====================

    #[test]
    fn decompose_round_trip() {
        let t = Transform {
            translation: Vec2 { x: 3.0, y: -2.0 },
            rotation: 0.7,
            scale: Vec2 { x: 2.0, y: 0.5 },
        };
        assert!(t.matrix().decompose().almost_eq(t));
    }

    // ==================== Conversions and Traits ====================

    #[test]
    fn column_major_array_round_trip() {
        let m = Mat3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(m.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(Mat3x2::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), m);
        assert_eq!(
            m.to_array_4x4(),
            [
                1.0, 2.0, 0.0, 0.0, //
                3.0, 4.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                5.0, 6.0, 0.0, 1.0,
            ]
        );
    }

    #[test]
    fn narrowing_cast() {
        let m = Mat3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).as_mat3x2();
        assert_eq!(m.to_array(), [1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn one_zero_and_scalar_operators() {
        assert_eq!(Mat3x2::one(), Mat3x2::identity());
        assert!(Zero::is_zero(&Mat3x2::zero()));
        assert_eq!(Mat3x2::default(), Mat3x2::identity());

        let m = Mat3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!((m / 2.0).to_array(), [0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);
        assert_eq!(m + m, m * 2.0);
        let mut n = m;
        n *= 2.0;
        assert_eq!(n, m * 2.0);
        n /= 2.0;
        assert_eq!(n, m);
    }
}
