//! Social-choice scoring of ranked ballots.

use super::ballot::BallotSet;
use crate::rank::{rank_descending, Ranked};

/// All three scoring rules over one ballot set, plus the pairwise tally
/// they derive from. Each rule is independently rankable; they need not
/// agree on a winner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoteScores {
    /// `pairwise[i][j]`: total weight of ballots ranking `i` ahead of
    /// `j`. For complete ballots,
    /// `pairwise[i][j] + pairwise[j][i] = total weight` for every pair.
    pub pairwise: Vec<Vec<u64>>,
    /// Row sums of the pairwise tally (total pairwise support).
    pub condorcet: Vec<u64>,
    /// `sum(weight * (n - 1 - position))` over all ballots.
    pub borda: Vec<u64>,
    /// Pairwise wins minus pairwise losses; a tied pair counts for
    /// neither side.
    pub copeland: Vec<i64>,
}

impl VoteScores {
    /// Candidates descending by Condorcet score, ties by candidate index.
    pub fn condorcet_ranking(&self) -> Vec<Ranked<u64>> {
        rank_descending(&self.condorcet)
    }

    /// Candidates descending by Borda score, ties by candidate index.
    pub fn borda_ranking(&self) -> Vec<Ranked<u64>> {
        rank_descending(&self.borda)
    }

    /// Candidates descending by Copeland score, ties by candidate index.
    pub fn copeland_ranking(&self) -> Vec<Ranked<i64>> {
        rank_descending(&self.copeland)
    }
}

/// Tallies the ballot set under all three scoring rules.
pub fn aggregate(ballots: &BallotSet) -> VoteScores {
    let n = ballots.candidates();

    let mut pairwise = vec![vec![0u64; n]; n];
    let mut borda = vec![0u64; n];
    for ballot in ballots.ballots() {
        for (position, &winner) in ballot.preference.iter().enumerate() {
            borda[winner] += ballot.weight * (n - 1 - position) as u64;
            for &loser in &ballot.preference[position + 1..] {
                pairwise[winner][loser] += ballot.weight;
            }
        }
    }

    let condorcet = pairwise.iter().map(|row| row.iter().sum()).collect();

    let mut copeland = vec![0i64; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if pairwise[i][j] > pairwise[j][i] {
                copeland[i] += 1;
            } else if pairwise[i][j] < pairwise[j][i] {
                copeland[i] -= 1;
            }
        }
    }

    VoteScores {
        pairwise,
        condorcet,
        borda,
        copeland,
    }
}
