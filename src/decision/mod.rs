//! Decision matrices, normalization, and data-driven weighting.
//!
//! A [`DecisionMatrix`] records how each alternative performs on each
//! criterion; every column carries an [`IndicatorType`] so that
//! [`DecisionMatrix::normalized`] can rescale it into a comparable
//! larger-is-better `[0, 1]` range. [`entropy_weights`] and
//! [`deviation_weights`] then derive criterion weights from the data
//! itself, with no judgment matrix involved.

mod matrix;
mod normalize;
mod weighting;

pub use matrix::{DecisionMatrix, IndicatorType};
pub use weighting::{deviation_weights, entropy_weights};
