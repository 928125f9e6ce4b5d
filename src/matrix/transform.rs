//! Transform matrix construction and composition.

use std::f32::consts::PI;

use crate::{Mat4, Vec3};

/// Converts an angle from degrees to radians. Not exact.
///
/// Negative and large-magnitude angles pass through unchanged; there is no wraparound
/// or normalization.
///
/// # Examples
///
/// ```
/// # use la::*;
/// assert_eq!(radians(0.0), 0.0);
/// assert_approx_eq!(radians(180.0), std::f32::consts::PI);
/// ```
pub fn radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

impl Mat4 {
    /// Creates a right-handed OpenGL-style perspective projection matrix.
    ///
    /// `fov` is the vertical field of view in radians, `aspect_ratio` is width over
    /// height, and `near`/`far` are the clip plane distances.
    ///
    /// No validation is performed: `far == near` or `aspect_ratio * tan(fov/2) == 0`
    /// divide by zero and yield IEEE-754 infinities or NaN rather than an error.
    pub fn perspective(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
        let t = (fov / 2.0).tan();

        let mut mat = Mat4::ZERO;
        mat[(0, 0)] = 1.0 / (aspect_ratio * t);
        mat[(1, 1)] = 1.0 / t;
        mat[(2, 2)] = -(far + near) / (far - near);
        mat[(2, 3)] = -1.0;
        mat[(3, 2)] = -(2.0 * far * near) / (far - near);
        mat
    }

    /// Creates an orthographic projection matrix from the box bounds.
    ///
    /// `near` and `far` map to normalized device coordinates -1 and +1. Same
    /// no-validation contract as [`Mat4::perspective`].
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Mat4 {
        let mut mat = Mat4::IDENTITY;
        mat[(0, 0)] = 2.0 / (right - left);
        mat[(1, 1)] = 2.0 / (top - bottom);
        mat[(2, 2)] = -2.0 / (far - near);
        mat[(3, 0)] = -(right + left) / (right - left);
        mat[(3, 1)] = -(top + bottom) / (top - bottom);
        mat[(3, 2)] = -(far + near) / (far - near);
        mat
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking at `center`.
    ///
    /// `up` is a hint for the camera's up direction; it does not need to be exactly
    /// perpendicular to the viewing direction. If `up` is *parallel* to the viewing
    /// direction the basis degenerates and NaN propagates through the result, per the
    /// crate-wide contract on degenerate inputs.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
        let f = (center - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);

        // Rotation part: the transpose of the (s, u, -f) basis.
        let mut mat = Mat4::IDENTITY;
        mat[(0, 0)] = s.x;
        mat[(1, 0)] = s.y;
        mat[(2, 0)] = s.z;

        mat[(0, 1)] = u.x;
        mat[(1, 1)] = u.y;
        mat[(2, 1)] = u.z;

        mat[(0, 2)] = -f.x;
        mat[(1, 2)] = -f.y;
        mat[(2, 2)] = -f.z;

        mat[(3, 0)] = -s.dot(eye);
        mat[(3, 1)] = -u.dot(eye);
        mat[(3, 2)] = f.dot(eye);
        mat
    }

    /// Translates the matrix by `v`, by adding `v` into the last row of a copy.
    ///
    /// This is an in-place row add, not a general affine composition: it composes
    /// correctly only when the last row of `self` already represents a valid
    /// translation/identity base.
    ///
    /// # Examples
    ///
    /// ```
    /// # use la::*;
    /// let m = Mat4::IDENTITY.translate(vec3(0.1, 0.1, 0.1));
    /// assert_eq!(m.row(3), vec4(0.1, 0.1, 0.1, 1.0));
    /// ```
    pub fn translate(self, v: Vec3) -> Mat4 {
        let mut res = self;
        res[(3, 0)] += v.x;
        res[(3, 1)] += v.y;
        res[(3, 2)] += v.z;
        res
    }

    /// Rotates the matrix about `axis` by `rads` radians (right-handed).
    ///
    /// The axis-angle rotation is expanded into a 3x3 block via Rodrigues' formula and
    /// composed by right-multiplication: `self * rotation`. The axis is normalized
    /// internally, so callers must not pre-normalize (doing so is harmless, but a
    /// zero-length axis divides by zero and yields NaN).
    pub fn rotate(self, axis: Vec3, rads: f32) -> Mat4 {
        let c = rads.cos();
        let s = rads.sin();

        let a = axis.normalize();

        let mut rot = Mat4::ZERO;
        rot[(0, 0)] = c + (1.0 - c) * a.x * a.x;
        rot[(0, 1)] = (1.0 - c) * a.x * a.y + s * a.z;
        rot[(0, 2)] = (1.0 - c) * a.x * a.z - s * a.y;

        rot[(1, 0)] = (1.0 - c) * a.y * a.x - s * a.z;
        rot[(1, 1)] = c + (1.0 - c) * a.y * a.y;
        rot[(1, 2)] = (1.0 - c) * a.y * a.z + s * a.x;

        rot[(2, 0)] = (1.0 - c) * a.z * a.x + s * a.y;
        rot[(2, 1)] = (1.0 - c) * a.z * a.y - s * a.x;
        rot[(2, 2)] = c + (1.0 - c) * a.z * a.z;

        rot[(3, 3)] = 1.0;

        self * rot
    }

    /// Scales the matrix by `v` along the three axes.
    ///
    /// The scale matrix starts from identity, overwrites the diagonal, and then copies
    /// `self`'s entire translation row into it before composing `self * scale`. This
    /// means the existing translation is preserved through the scale, unlike
    /// [`Mat4::rotate`], which leaves the carried translation to the multiply alone.
    /// Callers depend on this exact sequence; do not replace it with a different
    /// (mathematically equivalent-looking) composition.
    pub fn scale(self, v: Vec3) -> Mat4 {
        let mut sm = Mat4::IDENTITY;
        sm[(0, 0)] = v.x;
        sm[(1, 1)] = v.y;
        sm[(2, 2)] = v.z;
        sm[(3, 0)] = self[(3, 0)];
        sm[(3, 1)] = self[(3, 1)];
        sm[(3, 2)] = self[(3, 2)];
        sm[(3, 3)] = self[(3, 3)];

        self * sm
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::{assert_approx_eq, vec3, vec4};

    use super::*;

    #[test]
    fn degrees_to_radians() {
        assert_eq!(radians(0.0), 0.0);
        assert_approx_eq!(radians(180.0), PI);
        assert_approx_eq!(radians(45.0), PI / 4.0);
        assert_approx_eq!(radians(3.112), 0.0543146463).abs(1e-7);

        // Negative and out-of-range angles pass through unchanged.
        assert_approx_eq!(radians(-90.0), -PI / 2.0);
        assert_approx_eq!(radians(720.0), 4.0 * PI);
    }

    #[test]
    fn perspective() {
        let m = Mat4::perspective(radians(45.0), 800.0 / 600.0, 0.1, 100.0);

        assert_approx_eq!(m[(0, 0)], 1.81066).abs(1e-5);
        assert_approx_eq!(m[(1, 1)], 2.4142134).abs(1e-6);
        assert_approx_eq!(m[(2, 2)], -1.002002).abs(1e-6);
        assert_eq!(m[(2, 3)], -1.0);
        assert_approx_eq!(m[(3, 2)], -0.2002002).abs(1e-6);

        // Everything else stays zero.
        for (row, col) in [(0, 1), (0, 2), (0, 3), (1, 0), (1, 2), (1, 3), (2, 0), (2, 1), (3, 0), (3, 1), (3, 3)] {
            assert_eq!(m[(row, col)], 0.0);
        }
    }

    #[test]
    fn perspective_degenerate() {
        // Coincident clip planes divide by zero; the contract is IEEE-754 propagation,
        // not an error.
        let m = Mat4::perspective(radians(45.0), 4.0 / 3.0, 1.0, 1.0);
        assert!(m[(2, 2)].is_infinite());
        assert!(m[(3, 2)].is_infinite());
    }

    #[test]
    fn orthographic() {
        let m = Mat4::orthographic(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);

        assert_eq!(m[(0, 0)], 0.0025);
        assert_approx_eq!(m[(1, 1)], -0.0033333334).abs(1e-9);
        assert_eq!(m[(2, 2)], -1.0);
        assert_eq!(m[(3, 0)], -1.0);
        assert_eq!(m[(3, 1)], 1.0);
        assert_eq!(m[(3, 2)], 0.0);
        assert_eq!(m[(3, 3)], 1.0);
    }

    #[test]
    fn look_at() {
        let eye = vec3(3.0, 3.0, 3.0);
        let center = eye + vec3(1.0, 0.0, 1.0);
        let m = Mat4::look_at(eye, center, vec3(0.0, 1.0, 0.0));

        assert_approx_eq!(m[(0, 0)], -0.707107).abs(1e-5);
        assert_eq!(m[(0, 1)], 0.0);
        assert_approx_eq!(m[(0, 2)], -0.707107).abs(1e-5);
        assert_eq!(m[(1, 0)], 0.0);
        assert_approx_eq!(m[(1, 1)], 1.0).abs(1e-6);
        assert_approx_eq!(m[(1, 2)], 0.0).abs(1e-6);
        assert_approx_eq!(m[(2, 0)], 0.707107).abs(1e-5);
        assert_approx_eq!(m[(2, 1)], 0.0).abs(1e-6);
        assert_approx_eq!(m[(2, 2)], -0.707107).abs(1e-5);
        assert_approx_eq!(m[(3, 0)], 0.0).abs(1e-5);
        assert_approx_eq!(m[(3, 1)], -3.0).abs(1e-5);
        assert_approx_eq!(m[(3, 2)], 4.24264).abs(1e-5);
        assert_eq!(m[(3, 3)], 1.0);
    }

    #[test]
    fn look_at_degenerate() {
        // `up` parallel to the viewing direction: the cross product is the zero vector
        // and normalize turns it into NaN.
        let m = Mat4::look_at(vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), vec3(0.0, 1.0, 0.0));
        assert!(m[(0, 0)].is_nan());
    }

    #[test]
    fn translate() {
        let m = Mat4::IDENTITY.translate(vec3(0.1, 0.1, 0.1));
        assert_eq!(m.row(3), vec4(0.1, 0.1, 0.1, 1.0));

        // The add composes with what is already in the row.
        let m = m.translate(vec3(0.1, -0.1, 0.0));
        assert_approx_eq!(m.row(3), vec4(0.2, 0.0, 0.1, 1.0));

        // Rows 0..3 are untouched.
        for row in 0..3 {
            assert_eq!(m.row(row), Mat4::IDENTITY.row(row));
        }
    }

    #[test]
    fn rotate_about_y() {
        let m = Mat4::IDENTITY.rotate(vec3(0.0, 1.0, 0.0), radians(30.0));

        assert_approx_eq!(m[(0, 0)], 0.8660254).abs(1e-6);
        assert_eq!(m[(0, 1)], 0.0);
        assert_approx_eq!(m[(0, 2)], -0.5).abs(1e-6);
        assert_eq!(m[(1, 1)], 1.0);
        assert_approx_eq!(m[(2, 0)], 0.5).abs(1e-6);
        assert_approx_eq!(m[(2, 2)], 0.8660254).abs(1e-6);
        assert_eq!(m[(3, 3)], 1.0);
        assert_eq!(m[(3, 0)], 0.0);
        assert_eq!(m[(0, 3)], 0.0);
    }

    #[test]
    fn rotate_applied_to_vector() {
        // Rotating 90° about +Z maps +X to -Y under the right-handed sign convention
        // used here.
        let rot = Mat4::IDENTITY.rotate(vec3(0.0, 0.0, 1.0), radians(90.0));
        let res = rot * vec4(1.0, 0.0, 0.0, 1.0);

        assert_approx_eq!(res.x, 0.0).abs(1e-6);
        assert_approx_eq!(res.y, -1.0).abs(1e-6);
        assert_approx_eq!(res.z, 0.0).abs(1e-6);
        assert_approx_eq!(res.w, 1.0).abs(1e-6);
    }

    #[test]
    fn rotate_normalizes_axis() {
        // The axis is normalized internally; scaling it must not change the result.
        let a = Mat4::IDENTITY.rotate(vec3(0.0, 4.0, 0.0), radians(30.0));
        let b = Mat4::IDENTITY.rotate(vec3(0.0, 1.0, 0.0), radians(30.0));
        assert_approx_eq!(a, b).abs(1e-6);
    }

    #[test]
    fn scale_preserves_translation_row() {
        // Reference values for the scale composition: the input's translation row is
        // copied into the scale matrix before the multiply, so it survives even though
        // a plain diagonal scale would discard it.
        let mut m = Mat4::ZERO;
        m[(0, 2)] = 1.032;
        m[(2, 1)] = 0.032;
        m[(3, 0)] = 1.0;
        m[(3, 2)] = 0.888;

        let result = m.scale(vec3(0.0, 2.0, 3.0));

        #[rustfmt::skip]
        let expected = Mat4::from_rows([
            [0.0, 0.0,   3.096, 0.0],
            [0.0, 0.0,   0.0,   0.0],
            [0.0, 0.064, 0.0,   0.0],
            [0.0, 0.0,   2.664, 0.0],
        ]);
        assert_approx_eq!(result, expected).abs(1e-6);
    }

    #[test]
    fn compose_model_matrix() {
        // translate → rotate → scale the way a render loop builds a model matrix.
        let m = Mat4::IDENTITY
            .translate(vec3(1.0, 2.0, 3.0))
            .rotate(vec3(0.0, 0.0, 1.0), radians(180.0));

        // The rotation right-multiplies, so it applies to the translation row too: a
        // half turn about +Z negates the x and y offsets.
        assert_approx_eq!(m[(3, 0)], -1.0).abs(1e-5);
        assert_approx_eq!(m[(3, 1)], -2.0).abs(1e-5);
        assert_approx_eq!(m[(3, 2)], 3.0).abs(1e-5);
        assert_approx_eq!(m[(0, 0)], -1.0).abs(1e-6);
        assert_approx_eq!(m[(1, 1)], -1.0).abs(1e-6);
        assert_eq!(m[(2, 2)], 1.0);
    }
}
