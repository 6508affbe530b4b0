//! Pre-defined type aliases for common element types.

use super::{Matrix, Vector};

/// Matrix of `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix of `f64` elements.
pub type Matrixf64 = Matrix<f64>;
/// Matrix of `i32` elements.
pub type Matrixi32 = Matrix<i32>;
/// Matrix of `i64` elements.
pub type Matrixi64 = Matrix<i64>;
/// Matrix of `u32` elements.
pub type Matrixu32 = Matrix<u32>;
/// Matrix of `u64` elements.
pub type Matrixu64 = Matrix<u64>;

/// Vector of `f32` elements.
pub type Vectorf32 = Vector<f32>;
/// Vector of `f64` elements.
pub type Vectorf64 = Vector<f64>;
/// Vector of `i32` elements.
pub type Vectori32 = Vector<i32>;
/// Vector of `i64` elements.
pub type Vectori64 = Vector<i64>;
/// Vector of `u32` elements.
pub type Vectoru32 = Vector<u32>;
/// Vector of `u64` elements.
pub type Vectoru64 = Vector<u64>;
