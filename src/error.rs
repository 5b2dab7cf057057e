//! Error taxonomy shared across the crate.
//!
//! Only structural problems are errors: malformed matrices, mismatched
//! dimensions, solver non-convergence. Consistency findings (CR >= 0.1,
//! undefined RI for large matrices) are advisory and travel inside the
//! result types instead — see [`crate::ahp::ConsistencyReport`] and
//! [`crate::bwm::BwmSolution`].

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, McdaError>;

/// Errors produced by matrix validation, weighting, and ranking.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum McdaError {
    /// A judgment matrix has unequal row/column counts (or ragged rows).
    #[error("matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// `a[i][j] * a[j][i]` deviates from 1 beyond the tolerance.
    #[error("reciprocity violated at ({i}, {j}): a[i][j] * a[j][i] = {product}")]
    Reciprocity { i: usize, j: usize, product: f64 },

    /// A judgment matrix entry is zero, negative, or not finite.
    #[error("non-positive entry at ({i}, {j}): {value}")]
    NonPositive { i: usize, j: usize, value: f64 },

    /// Two inputs that must agree in length do not.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An input collection is empty where at least one element is required.
    #[error("empty input: {0}")]
    Empty(&'static str),

    /// A numeric input is out of its documented domain.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Threshold triple violates `q <= p <= v` on some criterion.
    #[error("threshold ordering violated on criterion {criterion}: q={q}, p={p}, v={v}")]
    ThresholdOrder {
        criterion: usize,
        q: f64,
        p: f64,
        v: f64,
    },

    /// A ballot's preference list is not a permutation of the candidate set.
    #[error("ballot {ballot} is not a permutation of 0..{candidates}")]
    MalformedBallot { ballot: usize, candidates: usize },

    /// An iterative solver exhausted its budget without converging.
    #[error("optimization failed to converge: {0}")]
    Optimization(String),
}
