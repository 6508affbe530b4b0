//! # matalg
//!
//! Dense real matrix algebra with runtime dimensions, no-std compatible.
//! Row-major heap storage, closed-form determinants for small orders, and
//! Jacobi-based spectral routines, with no required system dependencies.
//!
//! ## Quick start
//!
//! ```
//! use matalg::{Matrix, SolveMethod, Vector};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0_f64, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
//! let x = a.solve(&b, SolveMethod::Lu, 1e-15).unwrap(); // x = [2, 3, -1]
//! # assert!((x[0] - 2.0).abs() < 1e-10);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions and
//!   `Vec<T>` row-major storage. Includes arithmetic, `(row, col)` indexing,
//!   row/column access, and pipe-delimited text round-tripping via `Display`
//!   and `FromStr`. [`Vector<T>`] is a newtype over an `n` x `1` matrix.
//!
//! - [`linalg`] — Determinants (expanded formulas through order 4, LU above),
//!   adjugate inverse, LU with row interchanges, Gram-Schmidt QR and RQ,
//!   cyclic-Jacobi symmetric eigen-decomposition, one-sided Jacobi SVD, the
//!   Moore-Penrose pseudo-inverse, and triangular solvers. `a.solve(&b,
//!   method, eps)` dispatches on [`SolveMethod`], which parses from `"lu"`,
//!   `"qr"`, `"svd"`, and `"inv"`.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by the decomposition layer
//!
//! ## Numeric policy
//!
//! Degenerate input degrades quietly instead of failing: a zero pivot with no
//! usable row below leaves its column uneliminated, a zero-norm column passes
//! through QR unnormalized, and hitting the Jacobi sweep cap returns the
//! current approximation. Errors are reserved for structural misuse (shape
//! mismatches, unknown method names) and for exactly singular determinants.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm; `std::error::Error` impls |
//! | `libm`  | no       | Pure-Rust software float fallback for no-std builds |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod traits;

pub use matrix::aliases::{
    Matrixf32, Matrixf64, Matrixi32, Matrixi64, Matrixu32, Matrixu64, Vectorf32, Vectorf64,
    Vectori32, Vectori64, Vectoru32, Vectoru64,
};
pub use matrix::{Matrix, ParseMatrixError, Vector};

pub use linalg::{
    solve_lower_triangular, solve_upper_triangular, LinalgError, Lu, Qr, Rq, SolveMethod, Svd,
    SymmetricEigen,
};

pub use traits::{FloatScalar, Scalar};
