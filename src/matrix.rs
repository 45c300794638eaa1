use serde::{Deserialize, Serialize};

use crate::errors::{AlgoError, Result};

/// A dense row-major integer matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
    cols: usize,
}

impl Matrix {
    /// Wraps `rows`, checking that every row has the same length.
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(AlgoError::InvalidArgument {
                message: format!("row {i} has {} columns, expected {cols}", row.len()),
            });
        }
        Ok(Self { rows, cols })
    }

    /// An all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![0; cols]; rows],
            cols,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = AlgoError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Matrix::new(rows)
    }
}

impl From<Matrix> for Vec<Vec<i64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.rows
    }
}

/// Multiplies `a` by `b` with the schoolbook triple loop.
///
/// Fails with `InvalidArgument` when `a`'s column count differs from `b`'s
/// row count, or when any product or partial sum overflows `i64`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.col_count() != b.row_count() {
        return Err(AlgoError::InvalidArgument {
            message: format!(
                "cannot multiply {}x{} by {}x{}",
                a.row_count(),
                a.col_count(),
                b.row_count(),
                b.col_count()
            ),
        });
    }

    let mut result = Matrix::zeros(a.row_count(), b.col_count());
    for i in 0..a.row_count() {
        for j in 0..b.col_count() {
            let mut sum: i64 = 0;
            for k in 0..a.col_count() {
                sum = a.rows[i][k]
                    .checked_mul(b.rows[k][j])
                    .and_then(|product| sum.checked_add(product))
                    .ok_or_else(|| AlgoError::InvalidArgument {
                        message: format!("entry ({i}, {j}) of the product overflows i64"),
                    })?;
            }
            result.rows[i][j] = sum;
        }
    }
    Ok(result)
}
