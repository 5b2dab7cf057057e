//! Per-criterion outranking thresholds.

use crate::error::{McdaError, Result};

/// Indifference / preference / veto thresholds for one criterion.
///
/// A performance difference below `indifference` is noise, one above
/// `preference` is a strict preference, and one above `veto` on any
/// single criterion can block an outranking no matter how strong the
/// remaining evidence. Invariant `q <= p <= v`; the values themselves
/// may be negative when the underlying scale is (the source data uses
/// negative indifference thresholds on standardized criteria).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    pub indifference: f64,
    pub preference: f64,
    pub veto: f64,
}

impl Thresholds {
    /// Validates `q <= p <= v` (criterion index only used for error
    /// reporting; see [`validate_thresholds`] for whole-vector checks).
    pub fn new(indifference: f64, preference: f64, veto: f64) -> Result<Self> {
        let t = Self {
            indifference,
            preference,
            veto,
        };
        t.check(0)?;
        Ok(t)
    }

    fn check(&self, criterion: usize) -> Result<()> {
        let ordered = self.indifference <= self.preference && self.preference <= self.veto;
        let finite = self.indifference.is_finite()
            && self.preference.is_finite()
            && self.veto.is_finite();
        if !ordered || !finite {
            return Err(McdaError::ThresholdOrder {
                criterion,
                q: self.indifference,
                p: self.preference,
                v: self.veto,
            });
        }
        Ok(())
    }
}

/// Checks a per-criterion threshold vector against the expected criterion
/// count and the ordering invariant.
pub fn validate_thresholds(thresholds: &[Thresholds], criteria: usize) -> Result<()> {
    if thresholds.len() != criteria {
        return Err(McdaError::DimensionMismatch {
            context: "outranking thresholds",
            expected: criteria,
            actual: thresholds.len(),
        });
    }
    for (k, t) in thresholds.iter().enumerate() {
        t.check(k)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_accepted() {
        assert!(Thresholds::new(0.1, 0.5, 0.8).is_ok());
    }

    #[test]
    fn test_negative_indifference_accepted() {
        assert!(Thresholds::new(-0.33, 0.11, 0.70).is_ok());
    }

    #[test]
    fn test_unordered_rejected() {
        assert!(matches!(
            Thresholds::new(0.5, 0.1, 0.8),
            Err(McdaError::ThresholdOrder { .. })
        ));
        assert!(matches!(
            Thresholds::new(0.1, 0.9, 0.8),
            Err(McdaError::ThresholdOrder { .. })
        ));
    }

    #[test]
    fn test_vector_length_checked() {
        let t = Thresholds::new(0.0, 0.1, 0.2).unwrap();
        assert!(matches!(
            validate_thresholds(&[t], 2),
            Err(McdaError::DimensionMismatch { .. })
        ));
        assert!(validate_thresholds(&[t, t], 2).is_ok());
    }
}
