//! Heap-allocated dense matrix with dimensions chosen at runtime.
//!
//! Elements are stored in row-major order and addressed with
//! `(row, column)` tuples.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

pub mod aliases;
mod fmt;
mod ops;
mod util;
mod vector;

pub use fmt::ParseMatrixError;
pub use vector::Vector;

/// Dense row-major matrix with runtime dimensions.
///
/// # Example
/// ```
/// use matalg::Matrix;
///
/// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(m[(0, 1)], 2.0);
/// assert_eq!(m[(1, 0)], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Create a matrix of zeros with the given dimensions.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix with every element set to `value`.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n` x `n` identity matrix.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::<f64>::eye(3);
    /// assert_eq!(m[(1, 1)], 1.0);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a slice of elements in row-major order.
    ///
    /// Panics if the slice length does not match the dimensions.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(m[(0, 2)], 3);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, elements: &[T]) -> Self {
        assert_eq!(
            elements.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            elements.len(),
            nrows,
            ncols
        );
        Self {
            data: elements.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Create a matrix from an owned `Vec` of elements in row-major order.
    ///
    /// Panics if the vector length does not match the dimensions.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols
        );
        Self { data, nrows, ncols }
    }

    /// Resize in place, discarding the previous contents.
    ///
    /// All elements of the resized matrix are zero.
    pub fn resize(&mut self, nrows: usize, ncols: usize) {
        self.data = vec![T::zero(); nrows * ncols];
        self.nrows = nrows;
        self.ncols = ncols;
    }

    /// Copy of the matrix with row `row` and column `col` removed.
    ///
    /// Panics if the index is out of range.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::from_rows(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// let sub = m.minor(1, 1);
    /// assert_eq!(sub, Matrix::from_rows(2, 2, &[1, 3, 7, 9]));
    /// ```
    pub fn minor(&self, row: usize, col: usize) -> Self {
        assert!(
            row < self.nrows && col < self.ncols,
            "minor index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        Self::from_fn(self.nrows - 1, self.ncols - 1, |i, j| {
            let si = if i < row { i } else { i + 1 };
            let sj = if j < col { j } else { j + 1 };
            self[(si, sj)]
        })
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by evaluating `f(row, col)` for every element.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::from_fn(2, 2, |i, j| (i + j) as f64);
    /// assert_eq!(m[(1, 1)], 2.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Dimensions as a `(rows, columns)` pair.
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// `true` if the matrix has the same number of rows and columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// `true` if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    /// Elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable elements in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Row `i` as a contiguous slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}
