//! Best-Worst Method (BWM) weight elicitation.
//!
//! Instead of a full pairwise matrix, the decision maker supplies only
//! two comparison vectors: best criterion against all others, and all
//! others against the worst. Weights are the solution of a min-max
//! program over the implied ratio constraints; the residual objective
//! doubles as a consistency measure.
//!
//! # References
//!
//! - Rezaei (2015), "Best-worst multi-criteria decision-making method"

mod config;
mod solver;
mod types;

pub use config::BwmConfig;
pub use solver::solve;
pub use types::{consistency_index, BwmSolution, BwmSpec};
