//! Deterministic ranking of scored items.
//!
//! Every ranker in the crate (TOPSIS, ELECTRE, voting) sorts descending by
//! score and breaks ties by the item's original index, so rankings never
//! depend on incidental sort behavior.

/// An item index paired with the score that ranked it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranked<S> {
    /// Index of the item in the caller's input order.
    pub index: usize,
    /// The score the item was ranked by.
    pub score: S,
}

/// Sorts item indices descending by score; equal scores keep ascending
/// index order.
pub fn rank_descending<S: PartialOrd + Copy>(scores: &[S]) -> Vec<Ranked<S>> {
    let mut ranked: Vec<Ranked<S>> = scores
        .iter()
        .enumerate()
        .map(|(index, &score)| Ranked { index, score })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_order() {
        let ranked = rank_descending(&[0.2, 0.9, 0.5]);
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_break_by_index() {
        let ranked = rank_descending(&[0.5, 0.7, 0.5, 0.5]);
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_integer_scores() {
        let ranked = rank_descending(&[-2i64, 3, 0]);
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_empty() {
        assert!(rank_descending::<f64>(&[]).is_empty());
    }
}
