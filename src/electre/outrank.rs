//! ELECTRE III concordance, discordance, credibility, and net flow.

use super::thresholds::{validate_thresholds, Thresholds};
use crate::decision::DecisionMatrix;
use crate::error::{McdaError, Result};
use crate::rank::{rank_descending, Ranked};
use crate::weight::WeightVector;

/// Width below which a ramp degenerates to a step at its upper end.
const DEGENERATE_SPAN: f64 = 1e-12;

/// Configuration for the outranking cut.
#[derive(Debug, Clone)]
pub struct ElectreConfig {
    /// Credibility level at which `i outranks j` is asserted.
    /// Conventional values are 0.6 to 0.8.
    pub lambda: f64,
}

impl Default for ElectreConfig {
    fn default() -> Self {
        Self { lambda: 0.6 }
    }
}

impl ElectreConfig {
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.lambda.is_finite() || self.lambda <= 0.0 || self.lambda > 1.0 {
            return Err(McdaError::InvalidValue(format!(
                "lambda cut must be in (0, 1], got {}",
                self.lambda
            )));
        }
        Ok(())
    }
}

/// Pairwise outranking evidence and the resulting net flows.
///
/// Diagonal entries of the pairwise matrices are unused (self-pairs are
/// skipped) and held at 0.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElectreAnalysis {
    /// Aggregate concordance `C(i, j)`.
    pub concordance: Vec<Vec<f64>>,
    /// Discordance-adjusted credibility `S(i, j)`.
    pub credibility: Vec<Vec<f64>>,
    /// Outranking count minus outranked-by count, per alternative.
    pub net_flows: Vec<i64>,
}

/// Runs the full ELECTRE III analysis.
///
/// `matrix` values must be ascending-preference on every criterion (a
/// normalized matrix qualifies); indicator tags are not consulted.
/// This is the single-cut variant: one credibility threshold and a net
/// flow over the resulting crisp relation, not the full ascending/
/// descending distillation.
pub fn analyze(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
    thresholds: &[Thresholds],
    config: &ElectreConfig,
) -> Result<ElectreAnalysis> {
    config.validate()?;
    let criteria = matrix.criteria();
    if weights.len() != criteria {
        return Err(McdaError::DimensionMismatch {
            context: "ELECTRE weights",
            expected: criteria,
            actual: weights.len(),
        });
    }
    validate_thresholds(thresholds, criteria)?;

    let n = matrix.alternatives();
    let mut concordance = vec![vec![0.0; n]; n];
    let mut credibility = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }

            let mut weighted = 0.0;
            for k in 0..criteria {
                let diff = matrix.value(i, k) - matrix.value(j, k);
                weighted += weights.get(k) * partial_concordance(diff, &thresholds[k]);
            }
            // WeightVector sums to 1, but dividing keeps the aggregate
            // exact for externally constructed weights at the tolerance
            // boundary.
            let total: f64 = weights.as_slice().iter().sum();
            let c = weighted / total;
            concordance[i][j] = c;

            let mut s = c;
            for k in 0..criteria {
                let diff = matrix.value(j, k) - matrix.value(i, k);
                let d = discordance(diff, &thresholds[k]);
                if d > c {
                    s *= (1.0 - d) / (1.0 - c);
                }
            }
            credibility[i][j] = s;
        }
    }

    let mut net_flows = vec![0i64; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if credibility[i][j] >= config.lambda {
                net_flows[i] += 1;
                net_flows[j] -= 1;
            }
        }
    }

    Ok(ElectreAnalysis {
        concordance,
        credibility,
        net_flows,
    })
}

/// Ranks alternatives descending by net flow; ties keep input order.
pub fn rank(
    matrix: &DecisionMatrix,
    weights: &WeightVector,
    thresholds: &[Thresholds],
    config: &ElectreConfig,
) -> Result<Vec<Ranked<i64>>> {
    let analysis = analyze(matrix, weights, thresholds, config)?;
    Ok(rank_descending(&analysis.net_flows))
}

/// Per-criterion concordance with `i outranks j`: 1 when `i` is at worst
/// indifferently behind (`diff >= -q`), 0 when strictly behind
/// (`diff <= -p`), linear in between.
fn partial_concordance(diff: f64, t: &Thresholds) -> f64 {
    ramp(diff, -t.preference, -t.indifference)
}

/// Per-criterion discordance against `i outranks j`: 0 while `j`'s
/// advantage stays within the preference threshold, 1 from the veto
/// threshold on, linear in between.
fn discordance(advantage: f64, t: &Thresholds) -> f64 {
    ramp(advantage, t.preference, t.veto)
}

/// Piecewise-linear ramp: 0 at or below `zero_at`, 1 at or above
/// `one_at`, linear interpolation between. A zero-width ramp is a step
/// at the boundary.
fn ramp(x: f64, zero_at: f64, one_at: f64) -> f64 {
    if one_at - zero_at <= DEGENERATE_SPAN {
        return if x >= one_at { 1.0 } else { 0.0 };
    }
    if x <= zero_at {
        0.0
    } else if x >= one_at {
        1.0
    } else {
        (x - zero_at) / (one_at - zero_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::IndicatorType;

    fn uniform_thresholds(q: f64, p: f64, v: f64, criteria: usize) -> Vec<Thresholds> {
        vec![Thresholds::new(q, p, v).unwrap(); criteria]
    }

    fn sample_matrix() -> DecisionMatrix {
        DecisionMatrix::from_rows(
            vec![
                vec![0.80, 0.75, 0.65],
                vec![0.75, 0.64, 0.59],
                vec![0.60, 0.63, 0.24],
                vec![0.55, 0.68, 0.55],
            ],
            vec![IndicatorType::Benefit; 3],
        )
        .unwrap()
    }

    #[test]
    fn test_ramp_boundaries() {
        // At the indifference boundary concordance is full; at the
        // preference boundary it is gone; halfway it is half.
        let t = Thresholds::new(0.1, 0.5, 0.8).unwrap();
        assert_eq!(partial_concordance(-0.1, &t), 1.0);
        assert_eq!(partial_concordance(-0.5, &t), 0.0);
        assert!((partial_concordance(-0.3, &t) - 0.5).abs() < 1e-12);
        assert_eq!(partial_concordance(0.2, &t), 1.0);
        assert_eq!(partial_concordance(-0.9, &t), 0.0);
    }

    #[test]
    fn test_discordance_boundaries() {
        let t = Thresholds::new(0.1, 0.5, 0.9).unwrap();
        assert_eq!(discordance(0.5, &t), 0.0);
        assert_eq!(discordance(0.9, &t), 1.0);
        assert!((discordance(0.7, &t) - 0.5).abs() < 1e-12);
        assert_eq!(discordance(-0.2, &t), 0.0);
    }

    #[test]
    fn test_zero_width_ramp_is_a_step() {
        let t = Thresholds::new(0.5, 0.5, 0.5).unwrap();
        assert_eq!(discordance(0.49, &t), 0.0);
        assert_eq!(discordance(0.5, &t), 1.0);
    }

    #[test]
    fn test_credibility_never_exceeds_concordance() {
        let m = sample_matrix();
        let w = WeightVector::new(vec![0.5, 0.3, 0.2]).unwrap();
        let thresholds = uniform_thresholds(0.05, 0.15, 0.4, 3);
        let analysis =
            analyze(&m, &w, &thresholds, &ElectreConfig::default()).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    continue;
                }
                assert!(
                    analysis.credibility[i][j] <= analysis.concordance[i][j] + 1e-12,
                    "S({i},{j}) > C({i},{j})"
                );
            }
        }
    }

    #[test]
    fn test_self_pairs_skipped() {
        let m = sample_matrix();
        let w = WeightVector::new(vec![0.5, 0.3, 0.2]).unwrap();
        let thresholds = uniform_thresholds(0.05, 0.15, 0.4, 3);
        let analysis =
            analyze(&m, &w, &thresholds, &ElectreConfig::default()).unwrap();
        for i in 0..4 {
            assert_eq!(analysis.concordance[i][i], 0.0);
            assert_eq!(analysis.credibility[i][i], 0.0);
        }
        // Net flows over n alternatives always sum to zero.
        assert_eq!(analysis.net_flows.iter().sum::<i64>(), 0);
    }

    #[test]
    fn test_dominant_alternative_tops_ranking() {
        let m = DecisionMatrix::from_rows(
            vec![
                vec![0.9, 0.9, 0.9],
                vec![0.5, 0.5, 0.5],
                vec![0.1, 0.1, 0.1],
            ],
            vec![IndicatorType::Benefit; 3],
        )
        .unwrap();
        let w = WeightVector::uniform(3).unwrap();
        let thresholds = uniform_thresholds(0.05, 0.15, 0.6, 3);
        let ranked = rank(&m, &w, &thresholds, &ElectreConfig::default()).unwrap();
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(ranked[0].score, 2);
        assert_eq!(ranked[2].score, -2);
    }

    #[test]
    fn test_veto_blocks_outranking() {
        // Alternative 0 wins two criteria slightly but loses the third
        // past the veto threshold, so it cannot outrank alternative 1.
        let m = DecisionMatrix::from_rows(
            vec![vec![0.6, 0.6, 0.0], vec![0.5, 0.5, 0.9]],
            vec![IndicatorType::Benefit; 3],
        )
        .unwrap();
        let w = WeightVector::uniform(3).unwrap();
        let thresholds = uniform_thresholds(0.02, 0.05, 0.5, 3);
        let analysis =
            analyze(&m, &w, &thresholds, &ElectreConfig::default()).unwrap();
        assert!(analysis.credibility[0][1] < 1e-12);
    }

    #[test]
    fn test_lambda_validation() {
        let m = sample_matrix();
        let w = WeightVector::new(vec![0.5, 0.3, 0.2]).unwrap();
        let thresholds = uniform_thresholds(0.05, 0.15, 0.4, 3);
        let config = ElectreConfig::default().with_lambda(1.5);
        assert!(matches!(
            analyze(&m, &w, &thresholds, &config),
            Err(McdaError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_threshold_count_mismatch() {
        let m = sample_matrix();
        let w = WeightVector::new(vec![0.5, 0.3, 0.2]).unwrap();
        let thresholds = uniform_thresholds(0.05, 0.15, 0.4, 2);
        assert!(matches!(
            analyze(&m, &w, &thresholds, &ElectreConfig::default()),
            Err(McdaError::DimensionMismatch { .. })
        ));
    }
}
