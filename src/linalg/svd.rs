//! Singular value decomposition by one-sided Jacobi rotations.

use alloc::vec;
use alloc::vec::Vec;

use crate::matrix::Matrix;
use crate::traits::FloatScalar;

const MAX_SWEEPS: usize = 30;

/// Result of [`Matrix::svd`], with thin factors.
///
/// For an `m` x `n` input and `k = min(m, n)`, `u` is `m` x `k`, `v`
/// is `n` x `k`, and `s` holds the `k` singular values in descending
/// order, so `u * diag(s) * v^T` reproduces the input.
#[derive(Debug)]
pub struct Svd<T> {
    pub u: Matrix<T>,
    pub s: Vec<T>,
    pub v: Matrix<T>,
}

impl<T: FloatScalar> Matrix<T> {
    /// Thin singular value decomposition.
    ///
    /// Orthogonalizes column pairs with Jacobi rotations until a full
    /// sweep fires none, up to 30 sweeps. Wide matrices are handled by
    /// decomposing the transpose and swapping the roles of `u` and
    /// `v`. Zero singular values leave the matching column of `u`
    /// zero; rank deficiency is not an error.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let a = Matrix::from_rows(2, 2, &[3.0, 0.0, 0.0, 4.0]);
    /// let f = a.svd();
    /// assert_eq!(f.s, vec![4.0, 3.0]);
    /// ```
    pub fn svd(&self) -> Svd<T> {
        let m = self.nrows();
        let n = self.ncols();
        let k = m.min(n);
        if m == 0 || n == 0 {
            return Svd {
                u: Matrix::zeros(m, k),
                s: Vec::new(),
                v: Matrix::zeros(n, k),
            };
        }

        // keep the working matrix at least as tall as it is wide
        let transposed = m < n;
        let mut w = if transposed {
            self.transpose()
        } else {
            self.clone()
        };
        let (wm, wn) = w.dim();
        let mut v = Matrix::eye(wn);

        for _sweep in 0..MAX_SWEEPS {
            let mut rotated = false;
            for p in 0..wn - 1 {
                for q in (p + 1)..wn {
                    let mut alpha = T::zero();
                    let mut beta = T::zero();
                    let mut gamma = T::zero();
                    for i in 0..wm {
                        alpha = alpha + w[(i, p)] * w[(i, p)];
                        beta = beta + w[(i, q)] * w[(i, q)];
                        gamma = gamma + w[(i, p)] * w[(i, q)];
                    }
                    if gamma.abs() <= T::epsilon() * (alpha * beta).sqrt() {
                        continue;
                    }
                    rotated = true;
                    let zeta = (beta - alpha) / ((T::one() + T::one()) * gamma);
                    let t = {
                        let sign = if zeta >= T::zero() { T::one() } else { -T::one() };
                        sign / (zeta.abs() + (T::one() + zeta * zeta).sqrt())
                    };
                    let c = T::one() / (T::one() + t * t).sqrt();
                    let s = c * t;
                    for i in 0..wm {
                        let wp = w[(i, p)];
                        let wq = w[(i, q)];
                        w[(i, p)] = c * wp - s * wq;
                        w[(i, q)] = s * wp + c * wq;
                    }
                    for i in 0..wn {
                        let vp = v[(i, p)];
                        let vq = v[(i, q)];
                        v[(i, p)] = c * vp - s * vq;
                        v[(i, q)] = s * vp + c * vq;
                    }
                }
            }
            if !rotated {
                break;
            }
        }

        // singular values are the column norms of the rotated matrix
        let mut s_vals = vec![T::zero(); wn];
        for j in 0..wn {
            let mut sum = T::zero();
            for i in 0..wm {
                sum = sum + w[(i, j)] * w[(i, j)];
            }
            s_vals[j] = sum.sqrt();
        }

        for i in 0..wn {
            let mut largest = i;
            for j in (i + 1)..wn {
                if s_vals[j] > s_vals[largest] {
                    largest = j;
                }
            }
            if largest != i {
                s_vals.swap(i, largest);
                w.swap_cols(i, largest);
                v.swap_cols(i, largest);
            }
        }

        let mut u = w;
        for j in 0..wn {
            if s_vals[j] != T::zero() {
                for i in 0..wm {
                    u[(i, j)] = u[(i, j)] / s_vals[j];
                }
            }
        }

        if transposed {
            Svd {
                u: v,
                s: s_vals,
                v: u,
            }
        } else {
            Svd { u, s: s_vals, v }
        }
    }
}
