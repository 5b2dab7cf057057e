//! TOPSIS closeness computation.

use crate::decision::{DecisionMatrix, IndicatorType};
use crate::error::{McdaError, Result};
use crate::rank::{rank_descending, Ranked};
use crate::weight::WeightVector;

/// Distance below which an alternative counts as sitting on the ideal
/// point.
const IDEAL_EPSILON: f64 = 1e-12;

/// Ranks alternatives by relative closeness to the ideal solution.
///
/// The matrix is expected to be normalized (see
/// [`DecisionMatrix::normalized`]); columns are weighted, the per-column
/// ideal-best/ideal-worst are taken as max/min for `Benefit` and
/// `IntervalOptimal` columns and min/max for `Cost` columns, and each
/// alternative's closeness is `d- / (d+ + d-)` over Euclidean distances
/// to the two ideals. Closeness is 1 for an alternative at zero distance
/// from the ideal-best (which also settles the degenerate case where all
/// alternatives coincide).
///
/// Result is descending by closeness; equal closeness keeps input order.
pub fn rank(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
) -> Result<Vec<Ranked<f64>>> {
    Ok(rank_descending(&closeness(matrix, weights)?))
}

/// Relative closeness of each alternative, in input order.
pub fn closeness(matrix: &DecisionMatrix, weights: &WeightVector) -> Result<Vec<f64>> {
    let criteria = matrix.criteria();
    if weights.len() != criteria {
        return Err(McdaError::DimensionMismatch {
            context: "TOPSIS weights",
            expected: criteria,
            actual: weights.len(),
        });
    }

    let alternatives = matrix.alternatives();
    let weighted = |i: usize, j: usize| matrix.value(i, j) * weights.get(j);

    let mut ideal_best = vec![0.0; criteria];
    let mut ideal_worst = vec![0.0; criteria];
    for j in 0..criteria {
        let column: Vec<f64> = (0..alternatives).map(|i| weighted(i, j)).collect();
        let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = column.iter().copied().fold(f64::INFINITY, f64::min);
        match matrix.indicator(j) {
            IndicatorType::Cost => {
                ideal_best[j] = min;
                ideal_worst[j] = max;
            }
            IndicatorType::Benefit | IndicatorType::IntervalOptimal { .. } => {
                ideal_best[j] = max;
                ideal_worst[j] = min;
            }
        }
    }

    let closeness = (0..alternatives)
        .map(|i| {
            let mut to_best = 0.0;
            let mut to_worst = 0.0;
            for j in 0..criteria {
                let value = weighted(i, j);
                to_best += (value - ideal_best[j]).powi(2);
                to_worst += (value - ideal_worst[j]).powi(2);
            }
            let d_best = to_best.sqrt();
            let d_worst = to_worst.sqrt();
            if d_best < IDEAL_EPSILON {
                1.0
            } else {
                d_worst / (d_best + d_worst)
            }
        })
        .collect();

    Ok(closeness)
}
