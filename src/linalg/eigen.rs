//! Symmetric eigen-decomposition by cyclic Jacobi rotations.

use alloc::vec;
use alloc::vec::Vec;

use crate::matrix::Matrix;
use crate::traits::FloatScalar;

use super::LinalgError;

const MAX_SWEEPS: usize = 30;

/// Result of [`Matrix::eig_symmetric`].
///
/// Eigenvalues are sorted in descending order; column `j` of
/// `eigenvectors` pairs with `eigenvalues[j]`.
#[derive(Debug)]
pub struct SymmetricEigen<T> {
    pub eigenvectors: Matrix<T>,
    pub eigenvalues: Vec<T>,
}

/// Two-sided application of the current rotation to elements
/// `(i, j)` and `(k, l)`.
#[inline]
fn rotate<T: FloatScalar>(m: &mut Matrix<T>, i: usize, j: usize, k: usize, l: usize, s: T, tau: T) {
    let g = m[(i, j)];
    let h = m[(k, l)];
    m[(i, j)] = g - s * (h + g * tau);
    m[(k, l)] = h + s * (g - h * tau);
}

impl<T: FloatScalar> Matrix<T> {
    /// Eigen-decomposition of a symmetric matrix by cyclic Jacobi
    /// rotations.
    ///
    /// Symmetry is assumed, not checked: only the upper triangle is
    /// read. Runs at most 30 sweeps with an early exit once the
    /// off-diagonal sum reaches exactly zero; hitting the sweep cap is
    /// not an error and simply returns the current approximation.
    /// Eigenvalues come back sorted in descending order, and each
    /// eigenvector is oriented so that at least half its components
    /// are non-negative.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let a = Matrix::from_rows(2, 2, &[2.0, 0.0, 0.0, 3.0]);
    /// let e = a.eig_symmetric().unwrap();
    /// assert_eq!(e.eigenvalues, vec![3.0, 2.0]);
    /// assert_eq!(e.eigenvectors[(1, 0)], 1.0);
    /// ```
    pub fn eig_symmetric(&self) -> Result<SymmetricEigen<T>, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        let n = self.nrows();
        if n == 0 {
            return Ok(SymmetricEigen {
                eigenvectors: Matrix::zeros(0, 0),
                eigenvalues: Vec::new(),
            });
        }

        let mut a = self.clone();
        let mut v = Matrix::eye(n);
        let mut d: Vec<T> = (0..n).map(|i| a[(i, i)]).collect();
        let mut b = d.clone();
        let mut z = vec![T::zero(); n];

        for sweep in 0..MAX_SWEEPS {
            let mut sm = T::zero();
            for p in 0..n - 1 {
                for q in (p + 1)..n {
                    sm = sm + a[(p, q)].abs();
                }
            }
            if sm == T::zero() {
                break;
            }
            let tresh = if sweep < 3 {
                T::from_f64(0.2) * sm / T::from_usize(n * n)
            } else {
                T::zero()
            };

            for p in 0..n - 1 {
                for q in (p + 1)..n {
                    let g = T::from_f64(100.0) * a[(p, q)].abs();
                    // in late sweeps, drop elements too small to matter
                    if sweep > 3
                        && d[p].abs() + g == d[p].abs()
                        && d[q].abs() + g == d[q].abs()
                    {
                        a[(p, q)] = T::zero();
                    } else if a[(p, q)].abs() > tresh {
                        let mut h = d[q] - d[p];
                        let t = if h.abs() + g == h.abs() {
                            a[(p, q)] / h
                        } else {
                            // stable form of tan(theta), no cancellation
                            let theta = T::from_f64(0.5) * h / a[(p, q)];
                            let mut t =
                                T::one() / (theta.abs() + (T::one() + theta * theta).sqrt());
                            if theta < T::zero() {
                                t = -t;
                            }
                            t
                        };
                        let c = T::one() / (T::one() + t * t).sqrt();
                        let s = t * c;
                        let tau = s / (T::one() + c);
                        h = t * a[(p, q)];
                        z[p] = z[p] - h;
                        z[q] = z[q] + h;
                        d[p] = d[p] - h;
                        d[q] = d[q] + h;
                        a[(p, q)] = T::zero();
                        for j in 0..p {
                            rotate(&mut a, j, p, j, q, s, tau);
                        }
                        for j in (p + 1)..q {
                            rotate(&mut a, p, j, j, q, s, tau);
                        }
                        for j in (q + 1)..n {
                            rotate(&mut a, p, j, q, j, s, tau);
                        }
                        for j in 0..n {
                            rotate(&mut v, j, p, j, q, s, tau);
                        }
                    }
                }
            }

            for p in 0..n {
                b[p] = b[p] + z[p];
                d[p] = b[p];
                z[p] = T::zero();
            }
        }

        // descending order, carrying the matching columns along
        for i in 0..n {
            let mut largest = i;
            for j in (i + 1)..n {
                if d[j] > d[largest] {
                    largest = j;
                }
            }
            if largest != i {
                d.swap(i, largest);
                v.swap_cols(i, largest);
            }
        }

        // orient each eigenvector with a non-negative majority
        for j in 0..n {
            let mut non_negative = 0usize;
            for i in 0..n {
                if v[(i, j)] >= T::zero() {
                    non_negative += 1;
                }
            }
            if non_negative * 2 < n {
                for i in 0..n {
                    v[(i, j)] = -v[(i, j)];
                }
            }
        }

        Ok(SymmetricEigen {
            eigenvectors: v,
            eigenvalues: d,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-8;

    #[test]
    fn identity_eigenvalues() {
        let a = Matrix::<f64>::eye(3);
        let e = a.eig_symmetric().unwrap();
        assert_eq!(e.eigenvalues, vec![1.0, 1.0, 1.0]);
        assert_eq!(e.eigenvectors, Matrix::eye(3));
    }

    #[test]
    fn diagonal_sorted_descending() {
        let a = Matrix::from_rows(2, 2, &[2.0, 0.0, 0.0, 3.0]);
        let e = a.eig_symmetric().unwrap();
        assert_eq!(e.eigenvalues, vec![3.0, 2.0]);
        // eigenvector of 3 first, then the eigenvector of 2
        assert_eq!(e.eigenvectors[(0, 0)], 0.0);
        assert_eq!(e.eigenvectors[(1, 0)], 1.0);
        assert_eq!(e.eigenvectors[(0, 1)], 1.0);
        assert_eq!(e.eigenvectors[(1, 1)], 0.0);
    }

    #[test]
    fn known_2x2() {
        let a = Matrix::<f64>::from_rows(2, 2, &[2.0, -1.0, -1.0, 2.0]);
        let e = a.eig_symmetric().unwrap();
        assert!((e.eigenvalues[0] - 3.0).abs() < TOL);
        assert!((e.eigenvalues[1] - 1.0).abs() < TOL);
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        for i in 0..2 {
            for j in 0..2 {
                assert!((e.eigenvectors[(i, j)].abs() - inv_sqrt2).abs() < TOL);
            }
        }
    }

    #[test]
    fn eigen_equation_holds() {
        let a = Matrix::<f64>::from_rows(
            4,
            4,
            &[
                4.0, 1.0, 0.0, 2.0, 1.0, 5.0, 1.0, 0.0, 0.0, 1.0, 6.0, 1.0, 2.0, 0.0, 1.0, 7.0,
            ],
        );
        let e = a.eig_symmetric().unwrap();
        for j in 0..4 {
            let vj = e.eigenvectors.col(j);
            let av = &a * &vj;
            for i in 0..4 {
                assert!(
                    (av[i] - e.eigenvalues[j] * vj[i]).abs() < TOL,
                    "column {}: A*v != lambda*v at {}",
                    j,
                    i
                );
            }
        }
        // descending order
        for j in 1..4 {
            assert!(e.eigenvalues[j - 1] >= e.eigenvalues[j]);
        }
        // orthonormal eigenvector basis
        let vtv = &e.eigenvectors.transpose() * &e.eigenvectors;
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((vtv[(i, j)] - expected).abs() < TOL);
            }
        }
    }

    #[test]
    fn sign_convention() {
        let a = Matrix::from_rows(3, 3, &[3.0, 1.0, 1.0, 1.0, 4.0, 1.0, 1.0, 1.0, 5.0]);
        let e = a.eig_symmetric().unwrap();
        for j in 0..3 {
            let non_negative = (0..3).filter(|&i| e.eigenvectors[(i, j)] >= 0.0).count();
            assert!(non_negative * 2 >= 3, "column {} majority-negative", j);
        }
    }

    #[test]
    fn trace_matches_eigenvalue_sum() {
        let a = Matrix::from_rows(
            5,
            5,
            &[
                2.0, 0.5, 0.0, 0.2, 0.0, 0.5, 3.0, 0.5, 0.0, 0.1, 0.0, 0.5, 4.0, 0.5, 0.0, 0.2,
                0.0, 0.5, 5.0, 0.5, 0.0, 0.1, 0.0, 0.5, 6.0,
            ],
        );
        let e = a.eig_symmetric().unwrap();
        let trace = 2.0 + 3.0 + 4.0 + 5.0 + 6.0;
        let sum: f64 = e.eigenvalues.iter().sum();
        assert!((sum - trace).abs() < TOL);
    }

    #[test]
    fn not_square() {
        let a = Matrix::<f64>::zeros(2, 3);
        assert!(matches!(
            a.eig_symmetric(),
            Err(LinalgError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn order_1() {
        let a = Matrix::from_rows(1, 1, &[7.0]);
        let e = a.eig_symmetric().unwrap();
        assert_eq!(e.eigenvalues, vec![7.0]);
        assert_eq!(e.eigenvectors[(0, 0)], 1.0);
    }
}
