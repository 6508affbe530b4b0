//! Text serialization for matrices.
//!
//! Matrices print one `| e0 e1 ... |` row per line with columns
//! right-aligned, and no trailing newline after the last row. The
//! parser accepts the same shape back: the leading and trailing `|`
//! on each row are optional, elements are whitespace-separated, and a
//! delimiter glued to an element (`|-3`) is tolerated.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::traits::Scalar;

use super::{Matrix, Vector};

/// Errors from parsing a matrix out of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseMatrixError {
    /// The input contained no rows.
    Empty,
    /// A row had a different number of elements than the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// An element failed to parse as the target scalar type.
    InvalidElement { row: usize, col: usize },
}

impl fmt::Display for ParseMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMatrixError::Empty => write!(f, "no matrix rows in input"),
            ParseMatrixError::RaggedRow { row, expected, got } => {
                write!(f, "row {} has {} elements, expected {}", row, got, expected)
            }
            ParseMatrixError::InvalidElement { row, col } => {
                write!(f, "invalid element at row {}, column {}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseMatrixError {}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;

        // measure the printed width of every column
        let mut widths = vec![0usize; n];
        for j in 0..n {
            for i in 0..m {
                let w = WriteCounting::count(|wc| {
                    use fmt::Write;
                    write!(wc, "{}", self[(i, j)])
                });
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..m {
            write!(f, "|")?;
            for j in 0..n {
                write!(f, " {:>width$}", self[(i, j)], width = widths[j])?;
            }
            write!(f, " |")?;
            if i < m - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

/// Measures how many bytes a formatting closure would emit.
struct WriteCounting(usize);

impl WriteCounting {
    fn count(f: impl FnOnce(&mut WriteCounting) -> fmt::Result) -> usize {
        let mut wc = WriteCounting(0);
        let _ = f(&mut wc);
        wc.0
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

impl<T: Scalar + FromStr> FromStr for Matrix<T> {
    type Err = ParseMatrixError;

    fn from_str(s: &str) -> Result<Self, ParseMatrixError> {
        let mut data: Vec<T> = Vec::new();
        let mut nrows = 0usize;
        let mut ncols = 0usize;
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let body = line.strip_prefix('|').unwrap_or(line);
            let body = body.strip_suffix('|').unwrap_or(body);
            let mut got = 0usize;
            for token in body.split_whitespace() {
                let v = token
                    .parse::<T>()
                    .map_err(|_| ParseMatrixError::InvalidElement {
                        row: nrows,
                        col: got,
                    })?;
                data.push(v);
                got += 1;
            }
            if got == 0 {
                // bare delimiter line, carries no elements
                continue;
            }
            if nrows == 0 {
                ncols = got;
            } else if got != ncols {
                return Err(ParseMatrixError::RaggedRow {
                    row: nrows,
                    expected: ncols,
                    got,
                });
            }
            nrows += 1;
        }
        if nrows == 0 {
            return Err(ParseMatrixError::Empty);
        }
        Ok(Matrix::from_vec(nrows, ncols, data))
    }
}
