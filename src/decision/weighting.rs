//! Data-driven criterion weighting.
//!
//! Both methods read the weights straight out of a (normalized) decision
//! matrix: entropy weighting rewards columns whose value distribution is
//! informative, deviation maximization rewards columns that separate the
//! alternatives. A column that cannot tell alternatives apart ends up
//! with weight near zero under either method.

use super::matrix::DecisionMatrix;
use crate::error::{McdaError, Result};
use crate::weight::WeightVector;

/// Guard against `ln(0)` in the entropy sum.
const ENTROPY_EPSILON: f64 = 1e-12;

/// Threshold below which the difference coefficients are treated as
/// all-zero and the uniform fallback applies.
const DEGENERATE_TOTAL: f64 = 1e-12;

/// Entropy weighting.
///
/// For each column: `p[i] = x[i] / sum(x)`, entropy
/// `e = -sum(p * ln(p + eps)) / ln(m)` over the `m` alternatives, and the
/// weight is the normalized difference coefficient `1 - e`. A constant
/// column has maximal entropy and weight near zero, by design.
///
/// Expects the larger-is-better, non-negative values produced by
/// [`DecisionMatrix::normalized`].
///
/// # Errors
///
/// [`McdaError::InvalidValue`] if an entry is negative (normalize first),
/// [`McdaError::Empty`] with fewer than two alternatives (`ln(m)` would
/// vanish).
pub fn entropy_weights(matrix: &DecisionMatrix) -> Result<WeightVector> {
    let m = matrix.alternatives();
    if m < 2 {
        return Err(McdaError::Empty(
            "entropy weighting needs at least two alternatives",
        ));
    }

    let ln_m = (m as f64).ln();
    let mut difference = Vec::with_capacity(matrix.criteria());

    for j in 0..matrix.criteria() {
        let column = matrix.column(j);
        if let Some(&bad) = column.iter().find(|&&x| x < 0.0) {
            return Err(McdaError::InvalidValue(format!(
                "entropy weighting requires non-negative entries, criterion {j} has {bad}"
            )));
        }
        let total: f64 = column.iter().sum();
        let entropy = if total <= 0.0 {
            // All-zero column: no information, maximal entropy.
            1.0
        } else {
            -column
                .iter()
                .map(|&x| {
                    let p = x / total;
                    p * (p + ENTROPY_EPSILON).ln()
                })
                .sum::<f64>()
                / ln_m
        };
        difference.push((1.0 - entropy).max(0.0));
    }

    let total: f64 = difference.iter().sum();
    if total <= DEGENERATE_TOTAL {
        // No column discriminates at all; the only defensible answer is
        // indifference.
        return WeightVector::uniform(matrix.criteria());
    }
    Ok(WeightVector::from_raw(difference))
}

/// Deviation-maximization weighting.
///
/// Each column's raw score is the sum of pairwise absolute differences
/// over all ordered alternative pairs; scores are normalized to unit sum.
/// Quadratic in the number of alternatives, which stays small in this
/// domain.
pub fn deviation_weights(matrix: &DecisionMatrix) -> Result<WeightVector> {
    let m = matrix.alternatives();
    if m < 2 {
        return Err(McdaError::Empty(
            "deviation weighting needs at least two alternatives",
        ));
    }

    let mut totals = Vec::with_capacity(matrix.criteria());
    for j in 0..matrix.criteria() {
        let column = matrix.column(j);
        let mut total = 0.0;
        for i in 0..m {
            for k in 0..m {
                total += (column[i] - column[k]).abs();
            }
        }
        totals.push(total);
    }

    let sum: f64 = totals.iter().sum();
    if sum <= DEGENERATE_TOTAL {
        return WeightVector::uniform(matrix.criteria());
    }
    Ok(WeightVector::from_raw(totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::IndicatorType;

    fn benefit_matrix(rows: Vec<Vec<f64>>) -> DecisionMatrix {
        let criteria = rows[0].len();
        DecisionMatrix::from_rows(rows, vec![IndicatorType::Benefit; criteria]).unwrap()
    }

    #[test]
    fn test_entropy_constant_column_weight_near_zero() {
        let m = benefit_matrix(vec![
            vec![0.5, 0.1],
            vec![0.5, 0.9],
            vec![0.5, 0.4],
        ]);
        let w = entropy_weights(&m).unwrap();
        assert!(
            w.get(0) < 1e-6,
            "constant column should get ~0 weight, got {}",
            w.get(0)
        );
        assert!((w.get(0) + w.get(1) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_unit_sum() {
        let m = benefit_matrix(vec![
            vec![0.2, 0.9, 0.3],
            vec![0.8, 0.1, 0.3],
            vec![0.5, 0.5, 0.9],
        ]);
        let w = entropy_weights(&m).unwrap();
        let sum: f64 = w.as_slice().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(w.as_slice().iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn test_entropy_rejects_negative_entries() {
        let m = benefit_matrix(vec![vec![-0.1], vec![0.5]]);
        assert!(matches!(
            entropy_weights(&m),
            Err(McdaError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_entropy_all_constant_uniform_fallback() {
        let m = benefit_matrix(vec![vec![0.4, 0.7], vec![0.4, 0.7]]);
        let w = entropy_weights(&m).unwrap();
        assert!((w.get(0) - 0.5).abs() < 1e-9);
        assert!((w.get(1) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_deviation_hand_computed() {
        // Column 0 deviations: |0-1| counted twice = 2.
        // Column 1 deviations: |0.5-0.25|*2 = 0.5 -> weights 0.8 / 0.2.
        let m = benefit_matrix(vec![vec![0.0, 0.5], vec![1.0, 0.25]]);
        let w = deviation_weights(&m).unwrap();
        assert!((w.get(0) - 0.8).abs() < 1e-9);
        assert!((w.get(1) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_deviation_constant_matrix_uniform_fallback() {
        let m = benefit_matrix(vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
        let w = deviation_weights(&m).unwrap();
        assert!((w.get(0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_alternative_rejected() {
        let m = benefit_matrix(vec![vec![1.0, 2.0]]);
        assert!(entropy_weights(&m).is_err());
        assert!(deviation_weights(&m).is_err());
    }

    #[test]
    fn test_methods_agree_on_which_column_dominates() {
        let m = benefit_matrix(vec![
            vec![0.0, 0.45],
            vec![1.0, 0.55],
            vec![0.5, 0.50],
        ]);
        let entropy = entropy_weights(&m).unwrap();
        let deviation = deviation_weights(&m).unwrap();
        assert!(entropy.get(0) > entropy.get(1));
        assert!(deviation.get(0) > deviation.get(1));
    }
}
