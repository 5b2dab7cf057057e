//! BWM min-max solver.
//!
//! The program minimizes the largest constraint violation xi subject to
//! `|w_best/w_j - BO_j| <= xi`, `|w_j/w_worst - OW_j| <= xi`, unit sum,
//! and positivity. Every constraint is a ratio of weights, so the program
//! is scale invariant: pinning `w_worst = 1` loses nothing, and each
//! remaining `w_j` is then boxed by an interval intersection that depends
//! only on `w_best`. Feasibility at a given xi therefore reduces to a
//! non-empty admissible interval for `w_best`, and since those intervals
//! only widen as xi grows, the optimal xi is found by bisection.

use super::config::BwmConfig;
use super::types::{consistency_index, BwmSolution, BwmSpec};
use crate::error::{McdaError, Result};
use crate::weight::WeightVector;

/// Positivity floor for the pinned-scale weights.
const WEIGHT_FLOOR: f64 = 1e-12;

/// Solves the min-max program for the given comparison spec.
///
/// The reported `xi` is the violation actually achieved by the returned
/// weights, never the initial guess or an unconverged iterate.
///
/// # Errors
///
/// [`McdaError::Optimization`] when no feasible objective can be
/// bracketed or the bisection budget runs out before reaching the
/// configured tolerance.
pub fn solve(spec: &BwmSpec, config: &BwmConfig) -> Result<BwmSolution> {
    config.validate()?;

    let xi_star = minimal_xi(spec, config)?;
    let pinned = reconstruct_weights(spec, xi_star);
    let xi = max_violation(spec, &pinned);

    let ci = consistency_index(spec.criteria());
    let consistency_ratio = if ci > 0.0 { xi / ci } else { 0.0 };

    Ok(BwmSolution {
        weights: WeightVector::from_raw(pinned),
        xi,
        consistency_ratio,
    })
}

/// Bisects for the smallest xi with a non-empty admissible band.
fn minimal_xi(spec: &BwmSpec, config: &BwmConfig) -> Result<f64> {
    if admissible_band(spec, 0.0).is_some() {
        return Ok(0.0);
    }

    // Bracket: at xi equal to the largest comparison value every lower
    // bound collapses, so this is feasible for any valid spec. The
    // doubling loop is a guard against pathological floating behavior.
    let mut hi = spec
        .best_to_others()
        .iter()
        .chain(spec.others_to_worst())
        .fold(1.0_f64, |acc, &x| acc.max(x));
    let mut expansions = 0;
    while admissible_band(spec, hi).is_none() {
        hi *= 2.0;
        expansions += 1;
        if expansions > 64 {
            return Err(McdaError::Optimization(
                "no feasible objective value could be bracketed".into(),
            ));
        }
    }

    let mut lo = 0.0;
    let mut iterations = 0;
    while hi - lo > config.tolerance {
        if iterations >= config.max_iterations {
            return Err(McdaError::Optimization(format!(
                "bisection did not reach tolerance {} within {} iterations \
                 (bracket width {})",
                config.tolerance,
                config.max_iterations,
                hi - lo
            )));
        }
        let mid = 0.5 * (lo + hi);
        if admissible_band(spec, mid).is_some() {
            hi = mid;
        } else {
            lo = mid;
        }
        iterations += 1;
    }
    Ok(hi)
}

/// Admissible interval for `w_best` (with `w_worst` pinned to 1) at the
/// given xi, or `None` when infeasible.
fn admissible_band(spec: &BwmSpec, xi: f64) -> Option<(f64, f64)> {
    let bo = spec.best_to_others();
    let ow = spec.others_to_worst();
    let best = spec.best();
    let worst = spec.worst();

    // Direct constraints on w_best: against the worst criterion from
    // both vectors.
    let mut lo = (ow[best] - xi).max(bo[worst] - xi).max(WEIGHT_FLOOR);
    let mut hi = (ow[best] + xi).min(bo[worst] + xi);

    // Each free w_j must admit a point satisfying both its BO ratio and
    // its OW bound; eliminating w_j leaves bounds on w_best alone.
    for j in 0..spec.criteria() {
        if j == best || j == worst {
            continue;
        }
        hi = hi.min((bo[j] + xi) * (ow[j] + xi));
        if bo[j] > xi && ow[j] > xi {
            lo = lo.max((bo[j] - xi) * (ow[j] - xi));
        }
    }

    // When one criterion is both best and worst, w_best is pinned too.
    if best == worst && !(lo <= 1.0 && 1.0 <= hi) {
        return None;
    }

    (lo <= hi).then_some((lo, hi))
}

/// Picks concrete weights inside the admissible intervals at the optimal
/// xi, on the pinned scale `w_worst = 1`.
fn reconstruct_weights(spec: &BwmSpec, xi: f64) -> Vec<f64> {
    let bo = spec.best_to_others();
    let ow = spec.others_to_worst();
    let best = spec.best();
    let worst = spec.worst();

    let (lo, hi) = admissible_band(spec, xi)
        .unwrap_or((WEIGHT_FLOOR, WEIGHT_FLOOR));
    let w_best = if best == worst {
        1.0
    } else {
        0.5 * (lo + hi)
    };

    (0..spec.criteria())
        .map(|j| {
            if j == best {
                w_best
            } else if j == worst {
                1.0
            } else {
                let lower = (w_best / (bo[j] + xi)).max(ow[j] - xi).max(WEIGHT_FLOOR);
                let mut upper = ow[j] + xi;
                if bo[j] > xi {
                    upper = upper.min(w_best / (bo[j] - xi));
                }
                0.5 * (lower + upper.max(lower))
            }
        })
        .collect()
}

/// Largest constraint violation of a weight assignment (scale invariant).
fn max_violation(spec: &BwmSpec, weights: &[f64]) -> f64 {
    let bo = spec.best_to_others();
    let ow = spec.others_to_worst();
    let w_best = weights[spec.best()];
    let w_worst = weights[spec.worst()];

    (0..spec.criteria())
        .map(|j| {
            let from_best = (w_best / weights[j] - bo[j]).abs();
            let to_worst = (weights[j] / w_worst - ow[j]).abs();
            from_best.max(to_worst)
        })
        .fold(0.0, f64::max)
}
