use std::{array, fmt};

use crate::Vec4;

mod ops;
mod transform;

pub use transform::radians;

/// A 4x4 matrix of [`f32`] elements, stored **row-major** (`[row][col]`).
///
/// # Construction
///
/// - [`Mat4::from_rows`] fills the matrix from four row vectors (or plain arrays).
/// - [`Mat4::from_fn`] invokes a closure with each element's row and column.
/// - [`Mat4::ZERO`] and [`Mat4::IDENTITY`] are the two commonly needed constants.
/// - The transform constructors ([`Mat4::perspective`], [`Mat4::orthographic`],
///   [`Mat4::look_at`]) and the composing operations ([`Mat4::translate`],
///   [`Mat4::rotate`], [`Mat4::scale`]) build the matrices a render loop needs.
///
/// # Element Access
///
/// [`Mat4`] implements [`Index`] and [`IndexMut`] for `(usize, usize)` tuples. The
/// first element of the tuple is the *row*, the second is the *column*, matching
/// common mathematical notation. Indices are 0-based, and indexing out of bounds
/// panics just like it does for slices.
///
/// Any 16 floats form a valid matrix; nothing requires invertibility or orthonormality.
/// [`Mat4::as_array`] and the [`bytemuck::Pod`] impl expose the raw elements for
/// uploading to the GPU.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Mat4([[f32; 4]; 4]);

unsafe impl bytemuck::Zeroable for Mat4 {}
unsafe impl bytemuck::Pod for Mat4 {}

impl Mat4 {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[0.0; 4]; 4]);

    /// The identity matrix: 1 on the diagonal and 0 everywhere else.
    ///
    /// Multiplying any matrix or vector with this matrix returns it unchanged.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Creates a [`Mat4`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use la::*;
    /// let m = Mat4::from_rows([
    ///     [1.0, 0.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m, Mat4::IDENTITY);
    /// ```
    pub fn from_rows<U: Into<Vec4>>(rows: [U; 4]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Mat4`] by invoking a closure with the position (row and column) of
    /// each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use la::*;
    /// let m = Mat4::from_fn(|row, col| (row * 4 + col) as f32);
    /// assert_eq!(m[(0, 0)], 0.0);
    /// assert_eq!(m[(1, 2)], 6.0);
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Returns a reference to the elements as a row-major `[[f32; 4]; 4]` array.
    #[inline]
    pub const fn as_array(&self) -> &[[f32; 4]; 4] {
        &self.0
    }

    /// Converts this matrix into a row-major `[[f32; 4]; 4]` array.
    #[inline]
    pub fn into_array(self) -> [[f32; 4]; 4] {
        self.0
    }

    /// Returns row `i` of the matrix as a [`Vec4`].
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        self.0[i].into()
    }

    /// Writes the matrix to standard output as four `{ a b c d }` row groups wrapped in
    /// braces, followed by a newline, with each element in `%f`-style notation.
    ///
    /// Purely diagnostic; the output is not meant to be machine-parsed.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Debug for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a>(&'a [f32; 4]);
        impl fmt::Debug for FormatRow<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem:?}")?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Formats the matrix as `{ { a b c d } { e f g h } { i j k l } { m n o p } }` with
/// `%f`-style elements.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for row in &self.0 {
            write!(
                f,
                "{{ {:.6} {:.6} {:.6} {:.6} }} ",
                row[0], row[1], row[2], row[3]
            )?;
        }
        write!(f, "}}")
    }
}
