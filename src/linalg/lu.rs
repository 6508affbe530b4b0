//! LU factorization with row interchanges.

use alloc::vec::Vec;

use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Result of [`Matrix::lu`].
///
/// `l` carries the elimination multipliers with its rows restored to
/// the original row order of the input, so `l * u` reproduces the
/// input exactly even when rows were interchanged. `l` is unit lower
/// triangular only when no interchange fired.
#[derive(Debug)]
pub struct Lu<T> {
    pub l: Matrix<T>,
    pub u: Matrix<T>,
}

/// Factorization in elimination order, for internal reuse.
///
/// `lower * u` equals the row-permuted input; `perm[i]` is the
/// original index of working row `i` and `even` tracks interchange
/// parity.
pub(crate) struct LuFactors<T> {
    pub(crate) lower: Matrix<T>,
    pub(crate) u: Matrix<T>,
    pub(crate) perm: Vec<usize>,
    pub(crate) even: bool,
}

pub(crate) fn factor<T: FloatScalar>(a: &Matrix<T>, eps: T) -> LuFactors<T> {
    let m = a.nrows();
    let n = a.ncols();
    let mut u = a.clone();
    let mut lower = Matrix::eye(m);
    let mut perm: Vec<usize> = (0..m).collect();
    let mut even = true;

    let pivot_cols = if m == 0 { 0 } else { (m - 1).min(n) };
    for i in 0..pivot_cols {
        if u[(i, i)].abs() < eps {
            // take the first usable row below, not the largest
            if let Some(k) = ((i + 1)..m).find(|&k| u[(k, i)].abs() >= eps) {
                u.swap_rows(i, k);
                for j in 0..i {
                    let tmp = lower[(i, j)];
                    lower[(i, j)] = lower[(k, j)];
                    lower[(k, j)] = tmp;
                }
                perm.swap(i, k);
                even = !even;
            }
        }
        let pivot = u[(i, i)];
        if pivot == T::zero() {
            // nothing usable in this column; leave it uneliminated
            continue;
        }
        for k in (i + 1)..m {
            let mult = u[(k, i)] / pivot;
            lower[(k, i)] = mult;
            u[(k, i)] = T::zero();
            for j in (i + 1)..n {
                u[(k, j)] = u[(k, j)] - mult * u[(i, j)];
            }
        }
    }

    LuFactors {
        lower,
        u,
        perm,
        even,
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// LU factorization with row interchanges.
    ///
    /// A pivot smaller in magnitude than `eps` triggers a scan down
    /// the column for the first row with a usable entry. When no such
    /// row exists the column is left uneliminated, which keeps the
    /// factors finite for structurally singular input; entries below
    /// the diagonal of `u` smaller than `eps` may then remain. The
    /// matrix does not need to be square.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let a = Matrix::<f64>::from_rows(3, 3, &[2.0, 1.0, 1.0, 4.0, 3.0, 3.0, 8.0, 7.0, 9.0]);
    /// let f = a.lu(1e-15);
    /// let prod = &f.l * &f.u;
    /// for i in 0..3 {
    ///     for j in 0..3 {
    ///         assert!((prod[(i, j)] - a[(i, j)]).abs() < 1e-12);
    ///     }
    /// }
    /// ```
    pub fn lu(&self, eps: T) -> Lu<T> {
        let f = factor(self, eps);
        let m = self.nrows();
        // scatter the working rows back to the input row order
        let mut l = Matrix::zeros(m, m);
        for i in 0..m {
            for j in 0..m {
                l[(f.perm[i], j)] = f.lower[(i, j)];
            }
        }
        Lu { l, u: f.u }
    }
}
