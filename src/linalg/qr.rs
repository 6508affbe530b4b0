//! QR and RQ factorizations by classical Gram-Schmidt.

use crate::matrix::Matrix;
use crate::traits::FloatScalar;

use super::LinalgError;

/// Result of [`Matrix::qr`]: `q * r` reproduces the input.
#[derive(Debug)]
pub struct Qr<T> {
    pub q: Matrix<T>,
    pub r: Matrix<T>,
}

/// Result of [`Matrix::rq`]: `r * q` reproduces the input.
#[derive(Debug)]
pub struct Rq<T> {
    pub r: Matrix<T>,
    pub q: Matrix<T>,
}

impl<T: FloatScalar> Matrix<T> {
    /// QR factorization by classical Gram-Schmidt.
    ///
    /// For an `m` x `n` input, `q` is `m` x `n` with orthonormal
    /// columns and `r` is `n` x `n` upper triangular. A column whose
    /// residual norm is exactly zero is kept unnormalized, leaving a
    /// zero column in `q` and a zero on the diagonal of `r`; no error
    /// is raised for rank-deficient input.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let a = Matrix::<f64>::from_rows(3, 3, &[12.0, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0]);
    /// let f = a.qr();
    /// assert!((f.r[(0, 0)] - 14.0).abs() < 1e-12);
    /// ```
    pub fn qr(&self) -> Qr<T> {
        let m = self.nrows();
        let n = self.ncols();
        let mut w = self.clone();
        let mut q = Matrix::zeros(m, n);
        let mut r = Matrix::zeros(n, n);

        for i in 0..n {
            let mut norm = T::zero();
            for k in 0..m {
                norm = norm + w[(k, i)] * w[(k, i)];
            }
            let norm = norm.sqrt();
            r[(i, i)] = norm;
            if norm == T::zero() {
                for k in 0..m {
                    q[(k, i)] = w[(k, i)];
                }
            } else {
                for k in 0..m {
                    q[(k, i)] = w[(k, i)] / norm;
                }
            }
            for j in (i + 1)..n {
                let mut dot = T::zero();
                for k in 0..m {
                    dot = dot + q[(k, i)] * w[(k, j)];
                }
                r[(i, j)] = dot;
                for k in 0..m {
                    w[(k, j)] = w[(k, j)] - dot * q[(k, i)];
                }
            }
        }

        Qr { q, r }
    }

    /// RQ factorization of a square matrix.
    ///
    /// Computed by reversing the row order, transposing, running
    /// [`Matrix::qr`], and reflecting the factors back, so `r` is
    /// upper triangular and `q` has orthonormal rows.
    pub fn rq(&self) -> Result<Rq<T>, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        let n = self.nrows();
        // transpose of the input with its rows reversed
        let flipped = Matrix::from_fn(n, n, |i, j| self[(n - 1 - j, i)]);
        let Qr { q: qp, r: rp } = flipped.qr();
        let r = Matrix::from_fn(n, n, |i, j| rp[(n - 1 - j, n - 1 - i)]);
        let q = Matrix::from_fn(n, n, |i, j| qp[(j, n - 1 - i)]);
        Ok(Rq { r, q })
    }
}
