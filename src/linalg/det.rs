//! Determinants and the adjugate inverse.

use crate::matrix::Matrix;
use crate::traits::FloatScalar;

use super::{lu, LinalgError};

fn det2<T: FloatScalar>(m: &Matrix<T>) -> T {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

fn det3<T: FloatScalar>(m: &Matrix<T>) -> T {
    let (a, b, c) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
    let (d, e, f) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
    let (g, h, i) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);
    a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
}

/// Fully expanded 4 x 4 determinant, grouped by the row-0 cofactors.
fn det4<T: FloatScalar>(m: &Matrix<T>) -> T {
    let (a00, a01, a02, a03) = (m[(0, 0)], m[(0, 1)], m[(0, 2)], m[(0, 3)]);
    let (a10, a11, a12, a13) = (m[(1, 0)], m[(1, 1)], m[(1, 2)], m[(1, 3)]);
    let (a20, a21, a22, a23) = (m[(2, 0)], m[(2, 1)], m[(2, 2)], m[(2, 3)]);
    let (a30, a31, a32, a33) = (m[(3, 0)], m[(3, 1)], m[(3, 2)], m[(3, 3)]);

    a00 * a11 * a22 * a33 - a00 * a11 * a23 * a32 - a00 * a12 * a21 * a33
        + a00 * a12 * a23 * a31 + a00 * a13 * a21 * a32 - a00 * a13 * a22 * a31
        - a01 * a10 * a22 * a33 + a01 * a10 * a23 * a32 + a01 * a12 * a20 * a33
        - a01 * a12 * a23 * a30 - a01 * a13 * a20 * a32 + a01 * a13 * a22 * a30
        + a02 * a10 * a21 * a33 - a02 * a10 * a23 * a31 - a02 * a11 * a20 * a33
        + a02 * a11 * a23 * a30 + a02 * a13 * a20 * a31 - a02 * a13 * a21 * a30
        - a03 * a10 * a21 * a32 + a03 * a10 * a22 * a31 + a03 * a11 * a20 * a32
        - a03 * a11 * a22 * a30 - a03 * a12 * a20 * a31 + a03 * a12 * a21 * a30
}

/// Signed product of the `U` diagonal from the pivoted factorization.
fn det_lu<T: FloatScalar>(m: &Matrix<T>) -> T {
    let f = lu::factor(m, T::zero_threshold());
    let mut d = if f.even { T::one() } else { -T::one() };
    for i in 0..m.nrows() {
        d = d * f.u[(i, i)];
    }
    d
}

impl<T: FloatScalar> Matrix<T> {
    /// Determinant of a square matrix.
    ///
    /// Orders 1 through 4 use expanded cofactor formulas; larger
    /// matrices are LU-factorized and the determinant read off the
    /// diagonal of `U` with the row-interchange sign.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::<f64>::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
    /// assert!((m.det().unwrap() - 10.0).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> Result<T, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        match self.nrows() {
            0 => Err(LinalgError::Empty),
            1 => Ok(self[(0, 0)]),
            2 => Ok(det2(self)),
            3 => Ok(det3(self)),
            4 => Ok(det4(self)),
            _ => Ok(det_lu(self)),
        }
    }

    /// Inverse via the adjugate.
    ///
    /// Element `(i, j)` of the output is the signed determinant of the
    /// minor striking row `j` and column `i`, scaled by the reciprocal
    /// determinant. Returns [`LinalgError::Singular`] only when the
    /// determinant is exactly zero; ill-conditioned matrices invert
    /// without complaint.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::<f64>::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
    /// let inv = m.inverse().unwrap();
    /// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
    /// assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>, LinalgError> {
        let det = self.det()?;
        if det == T::zero() {
            return Err(LinalgError::Singular);
        }
        let d = T::one() / det;
        let n = self.nrows();
        if n == 1 {
            return Ok(Matrix::from_rows(1, 1, &[d]));
        }
        let mut out = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let c = self.minor(j, i).det()?;
                out[(i, j)] = if (i + j) % 2 == 0 { d * c } else { -(d * c) };
            }
        }
        Ok(out)
    }
}
