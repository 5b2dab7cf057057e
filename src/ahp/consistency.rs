//! Consistency checking of judgment matrices.
//!
//! A judgment matrix is *consistent* when `a[i][j] * a[j][k] = a[i][k]`
//! for all triples; real elicited matrices rarely are. The consistency
//! ratio measures the deviation against random matrices of the same
//! order, and `CR < 0.1` is the conventional acceptance threshold.

use super::matrix::JudgmentMatrix;
use crate::error::{McdaError, Result};
use crate::weight::WeightVector;

/// Conventional acceptance threshold on the consistency ratio.
pub const CR_THRESHOLD: f64 = 0.1;

/// Random index table for matrix orders 1..=9 (Saaty's Monte-Carlo
/// calibration; see [`crate::ahp::simulate_random_index`] to reproduce).
/// No standard values exist beyond order 9.
pub const RANDOM_INDEX: [f64; 9] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45];

/// Outcome of a consistency check. Advisory: a failed check never blocks
/// downstream use of the weights — the caller decides whether to
/// re-elicit judgments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsistencyReport {
    /// Principal eigenvalue estimate, recovered as the mean of
    /// `(A * w)_i / w_i`.
    pub lambda_max: f64,
    /// Consistency index `(lambda_max - n) / (n - 1)`; 0 for `n = 1`.
    pub ci: f64,
    /// Random index for the matrix order; `None` for orders above 9,
    /// where no table exists.
    pub ri: Option<f64>,
    /// Consistency ratio `CI / RI`; 0 when `RI = 0` (orders 1 and 2),
    /// `None` when the random index is undefined.
    pub cr: Option<f64>,
}

impl ConsistencyReport {
    /// `Some(cr < 0.1)`, or `None` when CR is undefined for this order.
    pub fn is_acceptable(&self) -> Option<bool> {
        self.cr.map(|cr| cr < CR_THRESHOLD)
    }
}

/// Checks how consistent `matrix` is with the elicited `weights`.
///
/// # Errors
///
/// [`McdaError::DimensionMismatch`] when the weight vector length differs
/// from the matrix order.
pub fn check_consistency(
    matrix: &JudgmentMatrix,
    weights: &WeightVector,
) -> Result<ConsistencyReport> {
    let n = matrix.order();
    if weights.len() != n {
        return Err(McdaError::DimensionMismatch {
            context: "consistency check weights",
            expected: n,
            actual: weights.len(),
        });
    }

    let lambda_max = lambda_max(matrix, weights.as_slice());
    let ci = if n > 1 {
        (lambda_max - n as f64) / (n as f64 - 1.0)
    } else {
        0.0
    };
    let ri = RANDOM_INDEX.get(n - 1).copied();
    let cr = ri.map(|ri| if ri > 0.0 { ci / ri } else { 0.0 });

    Ok(ConsistencyReport {
        lambda_max,
        ci,
        ri,
        cr,
    })
}

/// Mean of the elementwise Rayleigh quotients `(A * w)_i / w_i`.
pub(crate) fn lambda_max(matrix: &JudgmentMatrix, weights: &[f64]) -> f64 {
    let product = matrix.mul_vec(weights);
    let n = matrix.order() as f64;
    product
        .iter()
        .zip(weights)
        .map(|(num, den)| num / den)
        .sum::<f64>()
        / n
}
