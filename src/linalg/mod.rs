//! Decompositions, determinants, inverses, and linear solvers.

use core::fmt;

pub(crate) mod det;
pub(crate) mod eigen;
pub(crate) mod lu;
pub(crate) mod pinv;
pub(crate) mod qr;
pub(crate) mod solve;
pub(crate) mod svd;

pub use eigen::SymmetricEigen;
pub use lu::Lu;
pub use qr::{Qr, Rq};
pub use solve::{solve_lower_triangular, solve_upper_triangular, SolveMethod};
pub use svd::Svd;

/// Errors from the decomposition and solver layer.
///
/// ```
/// use matalg::{LinalgError, Matrix};
///
/// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
/// assert_eq!(m.inverse(), Err(LinalgError::Singular));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Operation requires a square matrix.
    NotSquare { rows: usize, cols: usize },
    /// Operand lengths disagree.
    DimensionMismatch { expected: usize, got: usize },
    /// Operation requires at least a 1 x 1 matrix.
    Empty,
    /// Determinant is exactly zero.
    Singular,
    /// Solve method name is not one of `"lu"`, `"qr"`, `"svd"`, `"inv"`.
    UnknownMethod,
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square: {}x{}", rows, cols)
            }
            LinalgError::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected length {}, got {}", expected, got)
            }
            LinalgError::Empty => write!(f, "matrix is empty"),
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::UnknownMethod => write!(f, "unknown solve method"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
