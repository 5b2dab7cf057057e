//! Ranked-ballot aggregation.
//!
//! Group decisions expressed as weighted complete preference orders are
//! tallied under three classic social-choice rules: Condorcet pairwise
//! support, Borda positional scoring, and Copeland wins-minus-losses.
//! All three are reported side by side so disagreements between rules
//! are visible rather than silently resolved.
//!
//! # References
//!
//! - de Borda (1781), "Mémoire sur les élections au scrutin"
//! - Copeland (1951), "A 'reasonable' social welfare function"

mod ballot;
mod tally;

pub use ballot::{Ballot, BallotSet};
pub use tally::{aggregate, VoteScores};
