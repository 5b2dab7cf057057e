//! Criterion weight vector.

use crate::error::{McdaError, Result};

/// Tolerance on the unit-sum check for externally supplied weights.
const SUM_TOLERANCE: f64 = 1e-6;

/// An ordered vector of non-negative weights summing to 1.
///
/// One entry per criterion (or per alternative, for hierarchical AHP
/// sub-scores). Produced by the elicitation and data-driven weighting
/// methods; consumed by the rankers. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Wraps weights that already sum to 1 (within `1e-6`).
    ///
    /// # Errors
    ///
    /// [`McdaError::Empty`] for an empty vector, [`McdaError::InvalidValue`]
    /// for negative/non-finite entries or a sum away from 1.
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        Self::check_entries(&weights)?;
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(McdaError::InvalidValue(format!(
                "weights must sum to 1, got {sum}"
            )));
        }
        Ok(Self(weights))
    }

    /// Normalizes an arbitrary non-negative vector to unit sum.
    ///
    /// # Errors
    ///
    /// [`McdaError::Empty`] for an empty vector, [`McdaError::InvalidValue`]
    /// for negative/non-finite entries or an all-zero vector.
    pub fn normalized(raw: Vec<f64>) -> Result<Self> {
        Self::check_entries(&raw)?;
        let sum: f64 = raw.iter().sum();
        if sum <= 0.0 {
            return Err(McdaError::InvalidValue(
                "cannot normalize an all-zero weight vector".into(),
            ));
        }
        Ok(Self(raw.into_iter().map(|w| w / sum).collect()))
    }

    /// Uniform weights `1/n`.
    pub fn uniform(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(McdaError::Empty("weight vector"));
        }
        Ok(Self(vec![1.0 / n as f64; n]))
    }

    /// Internal constructor for algorithm outputs whose entries are
    /// positive by construction. Normalizes exactly.
    pub(crate) fn from_raw(raw: Vec<f64>) -> Self {
        let sum: f64 = raw.iter().sum();
        Self(raw.into_iter().map(|w| w / sum).collect())
    }

    fn check_entries(weights: &[f64]) -> Result<()> {
        if weights.is_empty() {
            return Err(McdaError::Empty("weight vector"));
        }
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(McdaError::InvalidValue(format!(
                    "weight {i} is {w}; weights must be finite and non-negative"
                )));
            }
        }
        Ok(())
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector is empty (never true for a constructed value).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Weight at `index`.
    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    /// All weights in order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
