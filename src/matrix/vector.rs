//! Dynamically-sized vector backed by an `n` x `1` matrix.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut, Mul};

use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

/// Column vector with runtime length.
///
/// Wraps an `n` x `1` [`Matrix`] so matrix-vector products and the
/// triangular solvers operate on the same storage.
///
/// # Example
/// ```
/// use matalg::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[1], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    pub(crate) inner: Matrix<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create a vector from a slice.
    pub fn from_slice(v: &[T]) -> Self {
        Self {
            inner: Matrix::from_rows(v.len(), 1, v),
        }
    }

    /// Create a vector from an owned `Vec`.
    pub fn from_vec(v: Vec<T>) -> Self {
        let n = v.len();
        Self {
            inner: Matrix::from_vec(n, 1, v),
        }
    }

    /// Create a vector of zeros with length `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            inner: Matrix::zeros(n, 1),
        }
    }

    /// Create a vector by evaluating `f(i)` for every element.
    pub fn from_fn(n: usize, f: impl Fn(usize) -> T) -> Self {
        Self {
            inner: Matrix::from_fn(n, 1, |i, _| f(i)),
        }
    }

    /// Dot product with another vector of the same length.
    ///
    /// # Example
    /// ```
    /// use matalg::Vector;
    ///
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        let mut sum = T::zero();
        for i in 0..self.len() {
            sum = sum + self[i] * rhs[i];
        }
        sum
    }

    /// Sum of squared elements.
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Euclidean norm.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }
}

impl<T> Vector<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.nrows()
    }

    /// `true` if the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements as a contiguous slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Mutable elements as a contiguous slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    /// Iterator over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner[(i, 0)]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[(i, 0)]
    }
}

impl<T> From<Vector<T>> for Matrix<T> {
    fn from(v: Vector<T>) -> Matrix<T> {
        v.inner
    }
}

// ── Matrix-vector product ───────────────────────────────────────────

impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.ncols(),
            rhs.len(),
            "dimension mismatch: {}x{} * vector of length {}",
            self.nrows(),
            self.ncols(),
            rhs.len()
        );
        let mut out = Vector::zeros(self.nrows());
        for i in 0..self.nrows() {
            let mut sum = T::zero();
            for j in 0..self.ncols() {
                sum = sum + self[(i, j)] * rhs[j];
            }
            out[i] = sum;
        }
        out
    }
}

impl<T: Scalar> Mul<Vector<T>> for Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Vector<T>> for Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        self * &rhs
    }
}
