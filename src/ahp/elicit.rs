//! Weight elicitation from a judgment matrix.
//!
//! Three interchangeable methods. For a perfectly consistent matrix all
//! three recover the same weights; for near-consistent matrices the sum
//! and root methods approximate the principal eigenvector.

use super::matrix::JudgmentMatrix;
use crate::weight::WeightVector;

/// How weights are extracted from a judgment matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightMethod {
    /// Normalize each column to unit sum, then average the rows.
    Sum,
    /// Row-wise geometric mean, normalized.
    Root,
    /// Principal eigenvector (power iteration).
    Eigen,
}

/// Convergence tolerance for power iteration (l-infinity on the iterate).
const EIGEN_TOLERANCE: f64 = 1e-12;

/// Iteration cap for power iteration. Positive matrices converge
/// geometrically, so this is far beyond what any practical matrix needs.
const EIGEN_MAX_ITERATIONS: usize = 10_000;

impl JudgmentMatrix {
    /// Derives the weight vector with the given method.
    pub fn weights(&self, method: WeightMethod) -> WeightVector {
        match method {
            WeightMethod::Sum => self.sum_weights(),
            WeightMethod::Root => self.root_weights(),
            WeightMethod::Eigen => self.eigen_weights(),
        }
    }

    fn sum_weights(&self) -> WeightVector {
        let n = self.order();
        let column_sums: Vec<f64> = (0..n)
            .map(|j| (0..n).map(|i| self.get(i, j)).sum())
            .collect();
        let averaged: Vec<f64> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| self.get(i, j) / column_sums[j])
                    .sum::<f64>()
                    / n as f64
            })
            .collect();
        WeightVector::from_raw(averaged)
    }

    fn root_weights(&self) -> WeightVector {
        let n = self.order();
        // Geometric mean via log-sum to stay finite for large n.
        let roots: Vec<f64> = (0..n)
            .map(|i| {
                let log_sum: f64 = (0..n).map(|j| self.get(i, j).ln()).sum();
                (log_sum / n as f64).exp()
            })
            .collect();
        WeightVector::from_raw(roots)
    }

    /// Power iteration on the positive matrix. Perron-Frobenius: the
    /// eigenvalue of largest real part of a positive matrix is its simple
    /// positive dominant root, and its eigenvector is positive, so the
    /// iteration converges to exactly the vector the dense
    /// eigen-decomposition would select.
    fn eigen_weights(&self) -> WeightVector {
        let n = self.order();
        let mut v = vec![1.0 / n as f64; n];

        for _ in 0..EIGEN_MAX_ITERATIONS {
            let product = self.mul_vec(&v);
            let sum: f64 = product.iter().sum();
            let next: Vec<f64> = product.into_iter().map(|x| x / sum).collect();

            let delta = v
                .iter()
                .zip(&next)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max);
            v = next;
            if delta < EIGEN_TOLERANCE {
                break;
            }
        }

        WeightVector::from_raw(v)
    }
}
