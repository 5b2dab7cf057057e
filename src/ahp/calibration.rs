//! Monte-Carlo calibration of the random index table.
//!
//! The RI values in [`super::consistency::RANDOM_INDEX`] are calibration
//! constants: the mean consistency index of random reciprocal matrices.
//! This module reproduces them by resampling, so a caller can verify the
//! table (or extend it past order 9 at their own risk). It is a one-time
//! utility, not part of any per-request path.

use super::consistency::lambda_max;
use super::elicit::WeightMethod;
use super::matrix::JudgmentMatrix;
use crate::error::{McdaError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Saaty's discrete judgment scale: `1/9 ... 1 ... 9`.
const SAATY_SCALE: [f64; 17] = [
    1.0 / 9.0,
    1.0 / 8.0,
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
];

/// Configuration for one calibration run.
#[derive(Debug, Clone)]
pub struct CalibrationConfig {
    /// Number of random matrices to average over.
    pub samples: usize,

    /// Elicitation method used to compute each sample's CI. Must match
    /// the method applied to the real matrix for the ratio to be
    /// meaningful.
    pub method: WeightMethod,

    /// Base seed for reproducibility. Each trial derives its own seed
    /// from this, so results are identical with and without the
    /// `parallel` feature.
    pub seed: Option<u64>,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            samples: 1000,
            method: WeightMethod::Eigen,
            seed: None,
        }
    }
}

impl CalibrationConfig {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_method(mut self, method: WeightMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(McdaError::InvalidValue(
                "calibration needs at least one sample".into(),
            ));
        }
        Ok(())
    }
}

/// Estimates the random index for matrices of the given order.
///
/// Returns 0 for orders 1 and 2 without sampling (a reciprocal matrix of
/// order <= 2 is always consistent).
pub fn simulate_random_index(order: usize, config: &CalibrationConfig) -> Result<f64> {
    config.validate()?;
    if order == 0 {
        return Err(McdaError::Empty("judgment matrix"));
    }
    if order <= 2 {
        return Ok(0.0);
    }

    let base_seed = config.seed.unwrap_or_else(rand::random);
    let method = config.method;

    let trial = |t: usize| -> f64 {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(t as u64));
        let matrix = random_reciprocal_matrix(order, &mut rng);
        sample_ci(&matrix, method)
    };

    #[cfg(feature = "parallel")]
    let total: f64 = (0..config.samples).into_par_iter().map(trial).sum();
    #[cfg(not(feature = "parallel"))]
    let total: f64 = (0..config.samples).map(trial).sum();

    Ok(total / config.samples as f64)
}

/// Draws a random reciprocal matrix with upper-triangle entries uniform
/// over the Saaty scale.
fn random_reciprocal_matrix<R: Rng>(order: usize, rng: &mut R) -> JudgmentMatrix {
    let mut rows = vec![vec![1.0; order]; order];
    for i in 0..order {
        for j in (i + 1)..order {
            let value = SAATY_SCALE[rng.random_range(0..SAATY_SCALE.len())];
            rows[i][j] = value;
            rows[j][i] = 1.0 / value;
        }
    }
    JudgmentMatrix::from_rows(rows).expect("generated matrix is reciprocal by construction")
}

fn sample_ci(matrix: &JudgmentMatrix, method: WeightMethod) -> f64 {
    let n = matrix.order();
    let weights = matrix.weights(method);
    let lambda = lambda_max(matrix, weights.as_slice());
    (lambda - n as f64) / (n as f64 - 1.0)
}
