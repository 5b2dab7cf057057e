//! Indicator-type-driven normalization.
//!
//! Rescales every column into `[0, 1]` with larger-is-better orientation,
//! so that downstream weighting and ranking operate on comparable scales.

use super::matrix::{DecisionMatrix, IndicatorType};

/// Width below which a ramp segment is treated as degenerate.
const DEGENERATE_SPAN: f64 = 1e-12;

impl DecisionMatrix {
    /// Returns a new matrix with each column normalized by its indicator
    /// type. Indicator tags are preserved unchanged on the result.
    ///
    /// A column whose values are all equal carries no discrimination; the
    /// min-max rules would divide by zero, so such columns normalize to a
    /// uniform 1.0 instead. This is a defined fallback, not an error.
    pub fn normalized(&self) -> DecisionMatrix {
        let alternatives = self.alternatives();
        let criteria = self.criteria();
        let mut data = vec![0.0; alternatives * criteria];

        for j in 0..criteria {
            let column = self.column(j);
            let normalized = normalize_column(&column, self.indicator(j));
            for (i, value) in normalized.into_iter().enumerate() {
                data[i * criteria + j] = value;
            }
        }

        DecisionMatrix::from_parts(alternatives, criteria, data, self.indicators().to_vec())
    }
}

fn normalize_column(column: &[f64], indicator: IndicatorType) -> Vec<f64> {
    match indicator {
        IndicatorType::Benefit | IndicatorType::Cost => {
            let min = column.iter().copied().fold(f64::INFINITY, f64::min);
            let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let span = max - min;
            if span <= DEGENERATE_SPAN {
                return vec![1.0; column.len()];
            }
            column
                .iter()
                .map(|&x| match indicator {
                    IndicatorType::Benefit => (x - min) / span,
                    _ => (max - x) / span,
                })
                .collect()
        }
        IndicatorType::IntervalOptimal {
            lower_cutoff,
            optimal_low,
            optimal_high,
            upper_cutoff,
        } => column
            .iter()
            .map(|&x| interval_score(x, lower_cutoff, optimal_low, optimal_high, upper_cutoff))
            .collect(),
    }
}

/// Piecewise-linear membership of `x` in the optimal interval.
fn interval_score(x: f64, f0: f64, f1: f64, f2: f64, f_opt: f64) -> f64 {
    if x < f0 || x >= f_opt {
        0.0
    } else if x < f1 {
        // Rising ramp; a zero-width segment degenerates to a step.
        if f1 - f0 <= DEGENERATE_SPAN {
            1.0
        } else {
            1.0 - (f1 - x) / (f1 - f0)
        }
    } else if x <= f2 {
        1.0
    } else {
        // x in (f2, f_opt); the ordering check guarantees a positive span.
        1.0 - (x - f2) / (f_opt - f2)
    }
}
