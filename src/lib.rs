//! Multi-criteria decision analysis toolkit.
//!
//! Provides self-contained implementations of the classic MCDA methods:
//!
//! - **AHP (Analytic Hierarchy Process)**: Pairwise judgment matrices,
//!   weight elicitation (sum, root, eigenvector), consistency checking
//!   against Saaty's random index, and Monte-Carlo random-index
//!   calibration for orders the published table does not cover.
//! - **Data-driven weighting**: Entropy and deviation-maximization
//!   weights derived from the decision matrix itself, with benefit,
//!   cost, and interval-optimal normalization.
//! - **BWM (Best-Worst Method)**: Min-max consistent weights from
//!   best-to-others and others-to-worst comparison vectors.
//! - **TOPSIS**: Ranking by relative closeness to the ideal solution.
//! - **ELECTRE III**: Fuzzy outranking with concordance, discordance,
//!   veto thresholds, and a credibility cut.
//! - **Voting**: Condorcet, Borda, and Copeland aggregation of weighted
//!   ranked ballots.
//!
//! # Architecture
//!
//! This crate is pure computation: no I/O, no global state, and
//! deterministic output for a given input (Monte-Carlo calibration is
//! seeded). Problem data enters through validated constructors
//! ([`ahp::JudgmentMatrix`], [`decision::DecisionMatrix`],
//! [`bwm::BwmSpec`], [`voting::BallotSet`]) so every algorithm can
//! assume well-formed input.

pub mod ahp;
pub mod bwm;
pub mod decision;
pub mod electre;
pub mod error;
pub mod rank;
pub mod topsis;
pub mod voting;
pub mod weight;

pub use error::{McdaError, Result};
