//! BWM solver configuration.

use crate::error::{McdaError, Result};

/// Configuration for the BWM min-max solver.
#[derive(Debug, Clone)]
pub struct BwmConfig {
    /// Bisection stops once the bracket around the optimal objective is
    /// narrower than this.
    pub tolerance: f64,

    /// Hard cap on bisection steps; exceeding it without reaching the
    /// tolerance is a convergence failure.
    pub max_iterations: usize,
}

impl Default for BwmConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 200,
        }
    }
}

impl BwmConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(McdaError::InvalidValue(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(McdaError::InvalidValue(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
