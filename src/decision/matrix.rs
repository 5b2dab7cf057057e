//! Decision matrix over alternatives and typed criteria.

use crate::error::{McdaError, Result};

/// Preference direction of one criterion column.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorType {
    /// Larger is better.
    Benefit,
    /// Smaller is better.
    Cost,
    /// Best inside an interval, worthless outside the cutoffs.
    ///
    /// Scores 0 below `lower_cutoff`, ramps to 1 on
    /// `[lower_cutoff, optimal_low]`, stays 1 on
    /// `[optimal_low, optimal_high]`, ramps back to 0 on
    /// `[optimal_high, upper_cutoff]`.
    IntervalOptimal {
        lower_cutoff: f64,
        optimal_low: f64,
        optimal_high: f64,
        upper_cutoff: f64,
    },
}

impl IndicatorType {
    fn validate(&self, criterion: usize) -> Result<()> {
        if let IndicatorType::IntervalOptimal {
            lower_cutoff,
            optimal_low,
            optimal_high,
            upper_cutoff,
        } = *self
        {
            let params = [lower_cutoff, optimal_low, optimal_high, upper_cutoff];
            if params.iter().any(|p| !p.is_finite()) {
                return Err(McdaError::InvalidValue(format!(
                    "criterion {criterion}: interval-optimal cutoffs must be finite"
                )));
            }
            if !(lower_cutoff <= optimal_low
                && optimal_low <= optimal_high
                && optimal_high <= upper_cutoff)
            {
                return Err(McdaError::InvalidValue(format!(
                    "criterion {criterion}: interval-optimal cutoffs must be ordered, \
                     got [{lower_cutoff}, {optimal_low}, {optimal_high}, {upper_cutoff}]"
                )));
            }
        }
        Ok(())
    }
}

/// An alternatives x criteria performance table, each column tagged with
/// its [`IndicatorType`]. Immutable once constructed; normalization
/// produces a new matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionMatrix {
    alternatives: usize,
    criteria: usize,
    /// Row-major, `alternatives * criteria` entries.
    data: Vec<f64>,
    indicators: Vec<IndicatorType>,
}

impl DecisionMatrix {
    /// Validates and wraps a matrix given as alternative rows.
    pub fn from_rows(rows: Vec<Vec<f64>>, indicators: Vec<IndicatorType>) -> Result<Self> {
        let alternatives = rows.len();
        if alternatives == 0 {
            return Err(McdaError::Empty("decision matrix"));
        }
        let criteria = rows[0].len();
        if criteria == 0 {
            return Err(McdaError::Empty("decision matrix criteria"));
        }
        for row in &rows {
            if row.len() != criteria {
                return Err(McdaError::DimensionMismatch {
                    context: "decision matrix row",
                    expected: criteria,
                    actual: row.len(),
                });
            }
        }
        if indicators.len() != criteria {
            return Err(McdaError::DimensionMismatch {
                context: "indicator types",
                expected: criteria,
                actual: indicators.len(),
            });
        }
        for (j, indicator) in indicators.iter().enumerate() {
            indicator.validate(j)?;
        }

        let mut data = Vec::with_capacity(alternatives * criteria);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(McdaError::InvalidValue(format!(
                        "entry ({i}, {j}) is {value}; decision values must be finite"
                    )));
                }
                data.push(value);
            }
        }

        Ok(Self {
            alternatives,
            criteria,
            data,
            indicators,
        })
    }

    /// Number of alternatives (rows).
    pub fn alternatives(&self) -> usize {
        self.alternatives
    }

    /// Number of criteria (columns).
    pub fn criteria(&self) -> usize {
        self.criteria
    }

    /// Value of alternative `i` on criterion `j`.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.criteria + j]
    }

    /// Indicator type of criterion `j`.
    pub fn indicator(&self, j: usize) -> IndicatorType {
        self.indicators[j]
    }

    /// All indicator types in column order.
    pub fn indicators(&self) -> &[IndicatorType] {
        &self.indicators
    }

    /// Column `j` as a vector.
    pub(crate) fn column(&self, j: usize) -> Vec<f64> {
        (0..self.alternatives).map(|i| self.value(i, j)).collect()
    }

    pub(crate) fn from_parts(
        alternatives: usize,
        criteria: usize,
        data: Vec<f64>,
        indicators: Vec<IndicatorType>,
    ) -> Self {
        Self {
            alternatives,
            criteria,
            data,
            indicators,
        }
    }
}
