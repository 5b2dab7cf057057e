//! ELECTRE III outranking.
//!
//! Builds a fuzzy outranking relation from pairwise concordance (evidence
//! for "i is at least as good as j") tempered by per-criterion
//! discordance (evidence against, with veto power), cuts it at a
//! credibility level, and ranks alternatives by net flow over the crisp
//! relation. The full ascending/descending distillation of ELECTRE III
//! is deliberately out of scope; the single cut matches the source
//! procedure this module descends from.
//!
//! # References
//!
//! - Roy (1978), "ELECTRE III: un algorithme de classement..."
//! - Figueira, Mousseau & Roy (2005), survey chapter in "Multiple
//!   Criteria Decision Analysis: State of the Art Surveys"

mod outrank;
mod thresholds;

pub use outrank::{analyze, rank, ElectreAnalysis, ElectreConfig};
pub use thresholds::{validate_thresholds, Thresholds};
