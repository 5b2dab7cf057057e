//! Pairwise judgment matrix with construction-time validation.

use crate::error::{McdaError, Result};

/// Tolerance on the reciprocity check `a[i][j] * a[j][i] = 1`.
pub const RECIPROCITY_TOLERANCE: f64 = 1e-6;

/// A square, positive, reciprocal pairwise comparison matrix.
///
/// Entry `(i, j)` expresses how much more important criterion `i` is than
/// criterion `j` (Saaty's 1-9 scale and reciprocals, though any positive
/// reals satisfying reciprocity are accepted). The constructor enforces:
///
/// - square shape (no ragged rows),
/// - every entry positive and finite,
/// - `a[i][j] * a[j][i] = 1` within [`RECIPROCITY_TOLERANCE`] (which pins
///   the diagonal to 1).
///
/// Once constructed, the matrix is immutable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JudgmentMatrix {
    n: usize,
    /// Row-major entries, length `n * n`.
    data: Vec<f64>,
}

impl JudgmentMatrix {
    /// Validates and wraps a matrix given as rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(McdaError::Empty("judgment matrix"));
        }
        for row in &rows {
            if row.len() != n {
                return Err(McdaError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
        }

        let mut data = Vec::with_capacity(n * n);
        for row in &rows {
            data.extend_from_slice(row);
        }

        let matrix = Self { n, data };
        matrix.validate()?;
        Ok(matrix)
    }

    fn validate(&self) -> Result<()> {
        for i in 0..self.n {
            for j in 0..self.n {
                let value = self.get(i, j);
                if !value.is_finite() || value <= 0.0 {
                    return Err(McdaError::NonPositive { i, j, value });
                }
            }
        }
        // i == j is included: a[i][i]^2 must be 1, which with positivity
        // forces the unit diagonal.
        for i in 0..self.n {
            for j in i..self.n {
                let product = self.get(i, j) * self.get(j, i);
                if (product - 1.0).abs() > RECIPROCITY_TOLERANCE {
                    return Err(McdaError::Reciprocity { i, j, product });
                }
            }
        }
        Ok(())
    }

    /// Matrix order `n`.
    pub fn order(&self) -> usize {
        self.n
    }

    /// Entry at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Matrix-vector product `A * v`.
    pub(crate) fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        (0..self.n)
            .map(|i| (0..self.n).map(|j| self.get(i, j) * v[j]).sum())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_matrix() {
        let m = JudgmentMatrix::from_rows(vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 2.0],
            vec![0.2, 0.5, 1.0],
        ])
        .unwrap();
        assert_eq!(m.order(), 3);
        assert!((m.get(0, 1) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = JudgmentMatrix::from_rows(vec![vec![1.0, 2.0], vec![0.5]]);
        assert!(matches!(result, Err(McdaError::NotSquare { .. })));
    }

    #[test]
    fn test_non_square_rejected() {
        let result =
            JudgmentMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![0.5, 1.0, 1.0]]);
        assert!(matches!(result, Err(McdaError::NotSquare { .. })));
    }

    #[test]
    fn test_non_positive_rejected() {
        let result = JudgmentMatrix::from_rows(vec![vec![1.0, 0.0], vec![2.0, 1.0]]);
        assert!(matches!(result, Err(McdaError::NonPositive { .. })));
    }

    #[test]
    fn test_reciprocity_violation_rejected() {
        let result = JudgmentMatrix::from_rows(vec![vec![1.0, 2.0], vec![0.7, 1.0]]);
        assert!(matches!(result, Err(McdaError::Reciprocity { .. })));
    }

    #[test]
    fn test_bad_diagonal_rejected() {
        let result = JudgmentMatrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 1.0]]);
        assert!(matches!(result, Err(McdaError::Reciprocity { .. })));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            JudgmentMatrix::from_rows(vec![]),
            Err(McdaError::Empty(_))
        ));
    }

    #[test]
    fn test_mul_vec() {
        let m =
            JudgmentMatrix::from_rows(vec![vec![1.0, 2.0], vec![0.5, 1.0]]).unwrap();
        let product = m.mul_vec(&[1.0, 1.0]);
        assert!((product[0] - 3.0).abs() < 1e-12);
        assert!((product[1] - 1.5).abs() < 1e-12);
    }
}
