use std::error::Error;
use std::fmt;
use std::ops::Index;

use crate::math::vector::Array1;

/// Dense row-major 2D container.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from nested rows. Every row must have the width of the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let len: usize = rows.iter().map(Vec::len).sum();
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(ShapeError {
                rows: nrows,
                cols: ncols,
                len,
            });
        }
        let data = rows.into_iter().flatten().collect();
        Self::from_shape_vec((nrows, ncols), data)
    }

    /// Build a matrix whose columns are the given vectors.
    ///
    /// `from_columns(vec![vec![1, 3], vec![2, 5]])` is the matrix `[[1, 2], [3, 5]]`.
    pub fn from_columns(columns: Vec<Vec<T>>) -> Result<Self, ShapeError>
    where
        T: Clone,
    {
        let ncols = columns.len();
        let nrows = columns.first().map_or(0, Vec::len);
        let len: usize = columns.iter().map(Vec::len).sum();
        if columns.iter().any(|col| col.len() != nrows) {
            return Err(ShapeError {
                rows: nrows,
                cols: ncols,
                len,
            });
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in 0..nrows {
            for col in &columns {
                data.push(col[row].clone());
            }
        }
        Self::from_shape_vec((nrows, ncols), data)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }
}

impl Array2<f64> {
    /// Largest absolute entry, `0.0` for an empty matrix.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Matrix-vector product `self * x`.
    pub fn dot_vec(&self, x: &Array1<f64>) -> Array1<f64> {
        assert_eq!(
            self.cols,
            x.len(),
            "Matrix-vector product requires ncols == vector length"
        );
        (0..self.rows)
            .map(|row| {
                self.row_slice(row)
                    .iter()
                    .zip(x.iter())
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect()
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Array2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for buffer of length {}",
            self.rows, self.cols, self.len
        )
    }
}

impl Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_and_from_columns_agree() {
        let by_rows = Array2::from_rows(vec![vec![1.0, 2.0], vec![3.0, 5.0]]).unwrap();
        let by_cols = Array2::from_columns(vec![vec![1.0, 3.0], vec![2.0, 5.0]]).unwrap();
        assert_eq!(by_rows, by_cols);
        assert_eq!(by_cols[(0, 1)], 2.0);
        assert_eq!(by_cols.as_slice(), &[1.0, 2.0, 3.0, 5.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Array2::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err.to_string(), "invalid shape (2, 2) for buffer of length 3");
    }

    #[test]
    fn dot_vec_multiplies_rows() {
        let m = Array2::from_rows(vec![vec![1.0, 2.0], vec![3.0, 5.0]]).unwrap();
        let x = Array1::from_vec(vec![2.0, 1.0]);
        assert_eq!(m.dot_vec(&x).as_slice(), &[4.0, 11.0]);
    }

    #[test]
    fn display_nests_rows() {
        let m = Array2::from_rows(vec![vec![1, 2], vec![3, 5]]).unwrap();
        assert_eq!(m.to_string(), "[[1, 2],\n [3, 5]]");
    }
}
