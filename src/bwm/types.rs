//! Best-worst method inputs and outputs.

use crate::error::{McdaError, Result};
use crate::weight::WeightVector;

/// Tolerance for recognizing the mandatory `1` entries in the
/// comparison vectors.
const UNIT_TOLERANCE: f64 = 1e-9;

/// The two comparison vectors of a best-worst elicitation.
///
/// `best_to_others[j]` states how much the best criterion is preferred
/// over criterion `j`; `others_to_worst[j]` how much criterion `j` is
/// preferred over the worst. The best and worst criteria are identified
/// by their mandatory `1` entries (`BO[best] = OW[worst] = 1`), taking
/// the first such entry when several are exactly 1.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BwmSpec {
    best_to_others: Vec<f64>,
    others_to_worst: Vec<f64>,
    best: usize,
    worst: usize,
}

impl BwmSpec {
    /// Validates the comparison vectors and locates the best/worst
    /// criteria.
    pub fn new(best_to_others: Vec<f64>, others_to_worst: Vec<f64>) -> Result<Self> {
        let n = best_to_others.len();
        if n < 2 {
            return Err(McdaError::Empty("best-worst comparison vectors"));
        }
        if others_to_worst.len() != n {
            return Err(McdaError::DimensionMismatch {
                context: "others-to-worst vector",
                expected: n,
                actual: others_to_worst.len(),
            });
        }
        for (name, vector) in [
            ("best-to-others", &best_to_others),
            ("others-to-worst", &others_to_worst),
        ] {
            if let Some((j, &bad)) = vector
                .iter()
                .enumerate()
                .find(|(_, &x)| !x.is_finite() || x <= 0.0)
            {
                return Err(McdaError::InvalidValue(format!(
                    "{name}[{j}] is {bad}; comparison values must be positive"
                )));
            }
        }

        let best = unit_index(&best_to_others).ok_or_else(|| {
            McdaError::InvalidValue(
                "best-to-others has no 1 entry marking the best criterion".into(),
            )
        })?;
        let worst = unit_index(&others_to_worst).ok_or_else(|| {
            McdaError::InvalidValue(
                "others-to-worst has no 1 entry marking the worst criterion".into(),
            )
        })?;

        Ok(Self {
            best_to_others,
            others_to_worst,
            best,
            worst,
        })
    }

    /// Number of criteria.
    pub fn criteria(&self) -> usize {
        self.best_to_others.len()
    }

    /// Index of the best criterion.
    pub fn best(&self) -> usize {
        self.best
    }

    /// Index of the worst criterion.
    pub fn worst(&self) -> usize {
        self.worst
    }

    /// The best-to-others comparison vector.
    pub fn best_to_others(&self) -> &[f64] {
        &self.best_to_others
    }

    /// The others-to-worst comparison vector.
    pub fn others_to_worst(&self) -> &[f64] {
        &self.others_to_worst
    }
}

fn unit_index(vector: &[f64]) -> Option<usize> {
    vector.iter().position(|&x| (x - 1.0).abs() <= UNIT_TOLERANCE)
}

/// BWM consistency index table, keyed by criterion count (Rezaei's
/// calibration for 2..=10 criteria; 1.5 beyond).
pub fn consistency_index(criteria: usize) -> f64 {
    match criteria {
        0..=2 => 0.00,
        3 => 0.52,
        4 => 0.89,
        5 => 1.11,
        6 => 1.25,
        7 => 1.35,
        8 => 1.40,
        9 => 1.45,
        10 => 1.49,
        _ => 1.5,
    }
}

/// Solution of the BWM min-max program.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BwmSolution {
    /// Optimal criterion weights.
    pub weights: WeightVector,
    /// The achieved maximum constraint violation (optimal objective).
    pub xi: f64,
    /// `xi / CI(n)`; 0 when the CI table entry is 0.
    pub consistency_ratio: f64,
}

impl BwmSolution {
    /// Whether the consistency ratio clears the conventional 0.1
    /// threshold. Advisory; the weights are returned regardless.
    pub fn is_acceptable(&self) -> bool {
        self.consistency_ratio < 0.1
    }
}
