//! Stable descending ranking of scored entries.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of a ranking: gapless 1-based rank, id, score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub id: String,
    pub score: f64,
}

/// Sort entries by score descending, ties by ascending id, and assign
/// ranks 1..N with no gaps.
///
/// The tie-break makes the ordering total, so repeated runs over the same
/// scores render identically. Duplicate ids are not collapsed here; the
/// submitting registry is the source of truth for uniqueness.
///
/// # Examples
///
/// ```
/// use vendormap::ranking::rank_descending;
///
/// let ranked = rank_descending(vec![
///     ("B".to_string(), 50.0),
///     ("A".to_string(), 64.75),
///     ("C".to_string(), 20.0),
/// ]);
/// let order: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
/// assert_eq!(order, vec!["A", "B", "C"]);
/// assert_eq!(ranked[0].rank, 1);
/// ```
pub fn rank_descending(mut entries: Vec<(String, f64)>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    entries
        .into_iter()
        .enumerate()
        .map(|(index, (id, score))| RankedEntry {
            rank: index + 1,
            id,
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_gapless_even_with_ties() {
        let ranked = rank_descending(vec![
            ("B".to_string(), 50.0),
            ("A".to_string(), 50.0),
            ("C".to_string(), 50.0),
        ]);
        let ranks: Vec<usize> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn duplicate_ids_are_preserved() {
        let ranked = rank_descending(vec![
            ("A".to_string(), 10.0),
            ("A".to_string(), 30.0),
        ]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score, 30.0);
        assert_eq!(ranked[1].score, 10.0);
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        assert!(rank_descending(Vec::new()).is_empty());
    }
}
