use std::ops::{Index, IndexMut, Mul};

use crate::{approx::ApproxEq, Vec4, Vector};

use super::Mat4;

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

impl PartialEq for Mat4 {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl ApproxEq for Mat4 {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f32) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.abs_diff_eq(b, abs_tolerance) {
                return false;
            }
        }
        true
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f32) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.rel_diff_eq(b, rel_tolerance) {
                return false;
            }
        }
        true
    }
}

/// Matrix * Column Vector.
///
/// `result[i] = Σ_j self[i][j] * rhs[j]`.
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        Vector::from_fn(|row| (0..4).fold(0.0, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
///
/// `result[i][k] = Σ_j self[i][j] * rhs[j][k]`, accumulated onto a zero-initialized
/// result. Not commutative: transforms compose as `base * transform`.
impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        Mat4::from_fn(|i, k| (0..4).fold(0.0, |acc, j| acc + self[(i, j)] * rhs[(j, k)]))
    }
}
