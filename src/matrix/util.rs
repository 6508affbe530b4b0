//! Element-wise helpers, row/column access, and transposition.

use crate::traits::{FloatScalar, Scalar};

use super::{Matrix, Vector};

impl<T: Scalar> Matrix<T> {
    /// Apply `f` to every element, producing a new matrix.
    ///
    /// # Example
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
    /// let doubled = m.map(|x| x * 2);
    /// assert_eq!(doubled, Matrix::from_rows(2, 2, &[2, 4, 6, 8]));
    /// ```
    pub fn map<U: Scalar>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Row `i` as a vector.
    pub fn row(&self, i: usize) -> Vector<T> {
        assert!(
            i < self.nrows,
            "row index {} out of range for {}x{} matrix",
            i,
            self.nrows,
            self.ncols
        );
        Vector::from_slice(self.row_slice(i))
    }

    /// Column `j` as a vector.
    pub fn col(&self, j: usize) -> Vector<T> {
        assert!(
            j < self.ncols,
            "column index {} out of range for {}x{} matrix",
            j,
            self.nrows,
            self.ncols
        );
        Vector::from_fn(self.nrows, |i| self[(i, j)])
    }

    /// Overwrite row `i` with the contents of `v`.
    pub fn set_row(&mut self, i: usize, v: &Vector<T>) {
        assert_eq!(v.len(), self.ncols, "vector length mismatch");
        for j in 0..self.ncols {
            self[(i, j)] = v[j];
        }
    }

    /// Overwrite column `j` with the contents of `v`.
    pub fn set_col(&mut self, j: usize, v: &Vector<T>) {
        assert_eq!(v.len(), self.nrows, "vector length mismatch");
        for i in 0..self.nrows {
            self[(i, j)] = v[i];
        }
    }
}

impl<T> Matrix<T> {
    /// Swap rows `a` and `b` in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        for j in 0..self.ncols {
            self.data.swap(a * self.ncols + j, b * self.ncols + j);
        }
    }

    /// Swap columns `a` and `b` in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        for i in 0..self.nrows {
            self.data.swap(i * self.ncols + a, i * self.ncols + b);
        }
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Element-wise absolute value.
    pub fn abs(&self) -> Self {
        self.map(|x| x.abs())
    }

    /// Frobenius norm (square root of the sum of squared elements).
    ///
    /// ```
    /// use matalg::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum.sqrt()
    }
}
