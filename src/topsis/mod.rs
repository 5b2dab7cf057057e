//! TOPSIS: ranking by closeness to the ideal solution.
//!
//! # References
//!
//! - Hwang & Yoon (1981), "Multiple Attribute Decision Making"

mod ranker;

pub use ranker::{closeness, rank};
