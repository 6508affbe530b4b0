//! Triangular solvers and the method-dispatched linear solve.

use core::fmt;
use core::str::FromStr;

use crate::matrix::{Matrix, Vector};
use crate::traits::FloatScalar;

use super::{LinalgError, Lu};

/// Solve `L * x = b` by forward substitution.
///
/// `l` must be square and is read as lower triangular; entries above
/// the diagonal are ignored. A zero on the diagonal propagates
/// non-finite values into `x` rather than raising an error.
///
/// # Example
/// ```
/// use matalg::{solve_lower_triangular, Matrix, Vector};
///
/// let l = Matrix::from_rows(2, 2, &[2.0, 0.0, 1.0, 3.0]);
/// let b = Vector::from_slice(&[4.0, 11.0]);
/// let x = solve_lower_triangular(&l, &b).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// ```
pub fn solve_lower_triangular<T: FloatScalar>(
    l: &Matrix<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinalgError> {
    if !l.is_square() {
        return Err(LinalgError::NotSquare {
            rows: l.nrows(),
            cols: l.ncols(),
        });
    }
    let n = l.nrows();
    if b.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    let mut x = Vector::zeros(n);
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum = sum - l[(i, j)] * x[j];
        }
        x[i] = sum / l[(i, i)];
    }
    Ok(x)
}

/// Solve `U * x = b` by back substitution.
///
/// `u` must be square and is read as upper triangular; entries below
/// the diagonal are ignored.
///
/// # Example
/// ```
/// use matalg::{solve_upper_triangular, Matrix, Vector};
///
/// let u = Matrix::from_rows(2, 2, &[2.0, 1.0, 0.0, 3.0]);
/// let b = Vector::from_slice(&[7.0, 9.0]);
/// let x = solve_upper_triangular(&u, &b).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// ```
pub fn solve_upper_triangular<T: FloatScalar>(
    u: &Matrix<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinalgError> {
    if !u.is_square() {
        return Err(LinalgError::NotSquare {
            rows: u.nrows(),
            cols: u.ncols(),
        });
    }
    let n = u.nrows();
    if b.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum = sum - u[(i, j)] * x[j];
        }
        x[i] = sum / u[(i, i)];
    }
    Ok(x)
}

/// Algorithm selector for [`Matrix::solve`].
///
/// Parses from the lowercase method names, so configuration strings
/// can feed the dispatcher directly:
///
/// ```
/// use matalg::SolveMethod;
///
/// let m: SolveMethod = "qr".parse().unwrap();
/// assert_eq!(m, SolveMethod::Qr);
/// assert!("cholesky".parse::<SolveMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveMethod {
    /// LU factorization with triangular substitution.
    Lu,
    /// Pseudo-inverse from QR.
    Qr,
    /// Pseudo-inverse from SVD.
    Svd,
    /// Explicit adjugate inverse.
    Inv,
}

impl FromStr for SolveMethod {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self, LinalgError> {
        match s {
            "lu" => Ok(SolveMethod::Lu),
            "qr" => Ok(SolveMethod::Qr),
            "svd" => Ok(SolveMethod::Svd),
            "inv" => Ok(SolveMethod::Inv),
            _ => Err(LinalgError::UnknownMethod),
        }
    }
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolveMethod::Lu => "lu",
            SolveMethod::Qr => "qr",
            SolveMethod::Svd => "svd",
            SolveMethod::Inv => "inv",
        };
        write!(f, "{}", name)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Solve the square system `self * x = b` with the chosen method.
    ///
    /// `eps` is the pivot threshold for [`SolveMethod::Lu`] and the
    /// singular-value cutoff for the pseudo-inverse methods;
    /// [`SolveMethod::Inv`] ignores it. Pass
    /// [`FloatScalar::zero_threshold`] when in doubt.
    ///
    /// # Example
    /// ```
    /// use matalg::{Matrix, SolveMethod, Vector};
    ///
    /// let a = Matrix::from_rows(3, 3, &[2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0]);
    /// let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
    /// let x = a.solve(&b, SolveMethod::Lu, 1e-15).unwrap();
    /// assert!((x[0] - 2.0).abs() < 1e-10);
    /// assert!((x[1] - 3.0).abs() < 1e-10);
    /// assert!((x[2] + 1.0).abs() < 1e-10);
    /// ```
    pub fn solve(
        &self,
        b: &Vector<T>,
        method: SolveMethod,
        eps: T,
    ) -> Result<Vector<T>, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        if b.len() != self.nrows() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.nrows(),
                got: b.len(),
            });
        }
        match method {
            SolveMethod::Lu => {
                let Lu { l, u } = self.lu(eps);
                let y = solve_lower_triangular(&l, b)?;
                solve_upper_triangular(&u, &y)
            }
            SolveMethod::Qr => Ok(&self.pinv(false, eps)? * b),
            SolveMethod::Svd => Ok(&self.pinv(true, eps)? * b),
            SolveMethod::Inv => Ok(&self.inverse()? * b),
        }
    }
}
