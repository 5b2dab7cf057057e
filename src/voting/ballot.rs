//! Weighted ranked ballots.

use crate::error::{McdaError, Result};

/// A block of identical ballots: a complete preference order and how
/// many voters cast it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ballot {
    /// Number of voters behind this preference order.
    pub weight: u64,
    /// Candidate indices, most preferred first. Must rank every
    /// candidate exactly once (no partial ballots).
    pub preference: Vec<usize>,
}

impl Ballot {
    pub fn new(weight: u64, preference: Vec<usize>) -> Self {
        Self { weight, preference }
    }
}

/// A validated collection of ballots over a fixed candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallotSet {
    candidates: usize,
    ballots: Vec<Ballot>,
}

impl BallotSet {
    /// Validates that every ballot is a permutation of `0..candidates`.
    pub fn new(candidates: usize, ballots: Vec<Ballot>) -> Result<Self> {
        if candidates == 0 {
            return Err(McdaError::Empty("candidate set"));
        }
        for (b, ballot) in ballots.iter().enumerate() {
            if ballot.preference.len() != candidates {
                return Err(McdaError::MalformedBallot {
                    ballot: b,
                    candidates,
                });
            }
            let mut seen = vec![false; candidates];
            for &candidate in &ballot.preference {
                if candidate >= candidates || seen[candidate] {
                    return Err(McdaError::MalformedBallot {
                        ballot: b,
                        candidates,
                    });
                }
                seen[candidate] = true;
            }
        }
        Ok(Self {
            candidates,
            ballots,
        })
    }

    /// Number of candidates.
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// The ballots in input order.
    pub fn ballots(&self) -> &[Ballot] {
        &self.ballots
    }

    /// Sum of ballot weights.
    pub fn total_weight(&self) -> u64 {
        self.ballots.iter().map(|b| b.weight).sum()
    }
}
