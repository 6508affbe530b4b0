//! Moore-Penrose pseudo-inverse.

use crate::matrix::Matrix;
use crate::traits::FloatScalar;

use super::{LinalgError, Qr, Svd};

impl<T: FloatScalar> Matrix<T> {
    /// Pseudo-inverse of an `m` x `n` matrix, `n` x `m` on return.
    ///
    /// With `use_svd` the factors come from [`Matrix::svd`] and
    /// singular values with magnitude at most `eps` are dropped, which
    /// handles rank-deficient input. Otherwise the QR route inverts
    /// `r` explicitly (transposing first when the input is wide) and
    /// fails with [`LinalgError::Singular`] when `r` has an exactly
    /// zero diagonal entry.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let a = Matrix::<f64>::from_rows(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    /// let p = a.pinv(true, 1e-12).unwrap();
    /// let left = &p * &a;
    /// assert!((left[(0, 0)] - 1.0).abs() < 1e-8);
    /// assert!(left[(0, 1)].abs() < 1e-8);
    /// ```
    pub fn pinv(&self, use_svd: bool, eps: T) -> Result<Matrix<T>, LinalgError> {
        if use_svd {
            let Svd { u, s, v } = self.svd();
            let k = s.len();
            let mut sigma_inv = Matrix::zeros(k, k);
            for i in 0..k {
                if s[i].abs() > eps {
                    sigma_inv[(i, i)] = T::one() / s[i];
                }
            }
            Ok(&(&v * &sigma_inv) * &u.transpose())
        } else if self.ncols() > self.nrows() {
            let Qr { q, r } = self.transpose().qr();
            let r_inv = r.inverse()?;
            Ok((&r_inv * &q.transpose()).transpose())
        } else {
            let Qr { q, r } = self.qr();
            let r_inv = r.inverse()?;
            Ok(&r_inv * &q.transpose())
        }
    }
}
