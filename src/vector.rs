use std::{array, fmt};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2 = Vector<2>;
/// A 3-dimensional vector.
pub type Vec3 = Vector<3>;
/// A 4-dimensional vector.
pub type Vec4 = Vector<4>;

/// A quaternion, laid out like a [`Vec4`] (`x`, `y`, `z`, `w`).
///
/// No quaternion-specific operations are defined yet; the alias reserves the name so
/// rotation code can pass quaternions around using this crate's types.
pub type Quat = Vec4;

/// An `N`-element vector of [`f32`] values.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each
///   element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and
///   `Vector::W` can be used to obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// Vector elements can be accessed and inspected in a few different ways:
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`,
///   `z`, or `w`. The fields and the indexed view below are two views of the *same*
///   storage and always observe identical values.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] (plus the
///   [`From`] impl in the other direction) expose the underlying elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe
///   transmutation, eg. when copying vertex data into a GPU buffer.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<const N: usize>([f32; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([0.0; N]);
}

impl Vector<2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0]);
}

impl Vector<3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0]);
}

impl Vector<4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0, 0.0]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([0.0, 0.0, 0.0, 1.0]);
}

impl<const N: usize> Vector<N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use la::*;
    /// let v = Vector::splat(2.0);
    /// assert_eq!(v, vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(elem: f32) -> Self {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with
    /// its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> f32,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use la::*;
    /// let v = vec3(1.0, 2.0, 3.0).map(|i| i * 10.0);
    /// assert_eq!(v, vec3(10.0, 20.0, 30.0));
    /// ```
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self(self.0.map(f))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[f32; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [f32; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    pub fn length2(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use la::*;
    /// assert_eq!(Vec3::Z.length(), 1.0);
    /// ```
    pub fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The products are accumulated onto a zero-initialized sum, in element order. This
    /// is the generic path shared by every dimension; [`Vec4::dot4`] provides a
    /// spelled-out 4-term alternative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use la::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> f32 {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Writes the vector to standard output as `{ v0 v1 ... vn }` followed by a
    /// newline, with each element in `%f`-style notation (6 fractional digits).
    ///
    /// Purely diagnostic; the output is not meant to be machine-parsed.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl Vector<3> {
    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// There is no zero-length guard: normalizing the zero vector divides by zero and
    /// yields NaN in every component, per IEEE-754. Callers are responsible for not
    /// normalizing degenerate vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use la::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its
    /// direction depends on the order of the arguments: swapping them will invert the
    /// direction of the resulting vector. Parallel inputs produce the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use la::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl Vector<4> {
    /// Dot product written out as a plain 4-term sum.
    ///
    /// Unlike [`Vector::dot`], the four products are summed directly instead of being
    /// folded onto a zero accumulator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use la::*;
    /// let a = vec4(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(a.dot4(a), 30.0);
    /// ```
    pub fn dot4(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(value: [f32; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as `{ v0 v1 ... vn }` with `%f`-style elements.
impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for elem in &self.0 {
            write!(f, "{elem:.6} ")?;
        }
        write!(f, "}}")
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3::X.x, 1.0);
        assert_eq!(Vec3::X[0], 1.0);
        assert_eq!(Vec3::X[1], 0.0);
        assert_eq!(Vec3::X[2], 0.0);
        assert_eq!(Vec3::X.y, 0.0);
        assert_eq!(Vec3::Y.y, 1.0);
        assert_eq!(Vec3::Y.z, 0.0);
        assert_eq!(Vec4::W.w, 1.0);

        // The named fields and the indexed view are the same storage: a write through
        // either is visible through both.
        let mut v = vec2(0.0, 1.0);
        v.x = 777.0;
        assert_eq!(v.x, 777.0);
        assert_eq!(v[0], 777.0);
        assert_eq!(v.as_array(), &[777.0, 1.0]);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
        assert_eq!(v[1], 9.0);

        let mut v = vec4(1.0, 2.0, 3.0, 4.0);
        v.w = -4.0;
        assert_eq!(v[3], -4.0);
        assert_eq!(v.into_array(), [1.0, 2.0, 3.0, -4.0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", Vec4::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{}", vec2(0.1, -2.0)), "{ 0.100000 -2.000000 }");
        assert_eq!(
            format!("{}", vec3(1.0, 2.5, 3.0)),
            "{ 1.000000 2.500000 3.000000 }"
        );
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(1.0, 3.0, -5.0)), 35.0);

        assert_eq!(Vec2::X.dot(Vec2::X), 1.0);
        assert_eq!(Vec2::X.dot(Vec2::Y), 0.0);

        assert_approx_eq!(vec3(1.0, -3.2, 0.0).dot(vec3(5.4, 3.2, -5.0)), -4.84).abs(1e-6);
    }

    #[test]
    fn dot4() {
        let a = vec4(1.0, -3.2, 0.0, 1.0);
        let b = vec4(5.4, 3.2, -5.0, -0.5);
        assert_approx_eq!(a.dot4(b), -5.34).abs(1e-6);

        // The spelled-out sum agrees with the generic fold on real inputs.
        assert_eq!(a.dot4(b), a.dot(b));
        assert_eq!(Vec4::W.dot4(Vec4::W), Vec4::W.dot(Vec4::W));
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(1.0, 2.0, 3.0).cross(vec3(1.0, 5.0, 7.0)), [-1.0, -4.0, 3.0]);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);

        // Parallel inputs degenerate to the zero vector, no special-casing needed.
        let v = vec3(2.0, -4.0, 8.0);
        assert_eq!(v.cross(v), Vec3::ZERO);
        assert_eq!(v.cross(v * 3.0), Vec3::ZERO);
    }

    #[test]
    fn normalize() {
        let n = vec3(5.0, 2.0, -3.0).normalize();
        assert_approx_eq!(n.x, 0.8111071).abs(1e-6);
        assert_approx_eq!(n.y, 0.3244428).abs(1e-6);
        assert_approx_eq!(n.z, -0.4866643).abs(1e-6);
        assert_approx_eq!(n.dot(n), 1.0).abs(1e-6);

        // Normalizing an already-unit vector is idempotent within epsilon.
        assert_approx_eq!(n.normalize(), n);
    }

    #[test]
    fn normalize_zero() {
        // No zero-length guard: the division produces NaN per IEEE-754.
        let n = Vec3::ZERO.normalize();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
        assert!(n.z.is_nan());
    }

    #[test]
    fn arithmetic() {
        assert_eq!(vec3(1.0, 2.0, 3.0) + vec3(4.0, 5.0, 6.0), vec3(5.0, 7.0, 9.0));
        assert_eq!(vec3(1.0, 2.0, 3.0) - vec3(4.0, 5.0, 6.0), vec3(-3.0, -3.0, -3.0));
        assert_eq!(-vec2(1.0, -2.0), vec2(-1.0, 2.0));
        assert_eq!(vec2(1.0, -2.0) * 2.0, vec2(2.0, -4.0));
        assert_eq!(vec2(1.0, -2.0) / 2.0, vec2(0.5, -1.0));

        let mut v = vec3(1.0, 2.0, 3.0);
        v += vec3(1.0, 1.0, 1.0);
        v -= vec3(0.0, 2.0, 0.0);
        v *= 2.0;
        assert_eq!(v, vec3(4.0, 2.0, 8.0));
        v /= 2.0;
        assert_eq!(v, vec3(2.0, 1.0, 4.0));
    }

    #[test]
    fn approx_cmp() {
        use crate::approx::ApproxEq;

        let a = vec2(1.0, 2.0);
        assert!(a.abs_diff_eq(&vec2(1.0, 2.0), f32::EPSILON));
        // The componentwise bound is inclusive: exactly epsilon apart still compares equal.
        assert!(a.abs_diff_eq(&vec2(1.0 + f32::EPSILON, 2.0), f32::EPSILON));
        assert!(!a.abs_diff_eq(&vec2(1.001, 2.0), f32::EPSILON));
        assert!(!vec3(0.0, 0.0, 1.0).abs_diff_eq(&vec3(0.0, 1.0, 1.0), f32::EPSILON));
    }
}
