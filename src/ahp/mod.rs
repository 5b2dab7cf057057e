//! Analytic Hierarchy Process: judgment matrices and weight elicitation.
//!
//! A decision maker fills in a pairwise [`JudgmentMatrix`] over criteria;
//! [`JudgmentMatrix::weights`] turns it into a [`crate::weight::WeightVector`]
//! by one of three methods, and [`check_consistency`] reports how far the
//! judgments deviate from transitivity. The check is advisory: weights
//! remain usable either way.
//!
//! # References
//!
//! - Saaty (1980), "The Analytic Hierarchy Process"
//! - Saaty (1987), random index calibration

mod calibration;
mod consistency;
mod elicit;
mod matrix;

pub use calibration::{simulate_random_index, CalibrationConfig};
pub use consistency::{check_consistency, ConsistencyReport, CR_THRESHOLD, RANDOM_INDEX};
pub use elicit::WeightMethod;
pub use matrix::{JudgmentMatrix, RECIPROCITY_TOLERANCE};
