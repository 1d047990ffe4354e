//! Ranking pipeline: score every record, stable-sort descending, take top K.
//!
//! The stages are pure and composable. Scoring is an independent map over
//! the records and runs in parallel; the sort is a single sequential stable
//! sort so that ties keep their input order and rankings stay reproducible.

use rayon::prelude::*;
use std::cmp::Ordering;

use crate::core::VoteCounts;
use crate::scoring;

/// A record paired with its computed score. Transient: created during
/// ranking, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<T> {
    pub record: T,
    pub score: f64,
}

/// Score every record with `scorer`, preserving input order.
///
/// Runs as a parallel indexed map; rayon's collect reassembles results in
/// input order, so the stable tie-break downstream is unaffected.
pub fn score_records<T, F>(records: Vec<T>, scorer: F) -> Vec<Scored<T>>
where
    T: VoteCounts + Send,
    F: Fn(u64, u64) -> f64 + Sync,
{
    records
        .into_par_iter()
        .map(|record| {
            let score = scorer(record.helpful_up(), record.helpful_down());
            Scored { record, score }
        })
        .collect()
}

/// Sort scored records by score, highest first.
///
/// The sort is stable: records with equal scores keep their relative input
/// order. In particular, a batch of unvoted reviews (all scoring 0.0) comes
/// back in input order at the bottom of the ranking.
pub fn sort_by_score<T>(mut items: Vec<Scored<T>>) -> Vec<Scored<T>> {
    items.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    items
}

/// Truncate to the top `k` items. `k` larger than the input returns
/// everything; `k == 0` returns an empty vec. Never an error.
pub fn take_top<T>(items: Vec<Scored<T>>, k: usize) -> Vec<Scored<T>> {
    items.into_iter().take(k).collect()
}

/// Rank records by the Wilson lower bound at 95% confidence and return the
/// top `k`, highest score first.
///
/// This is the primary entry point: the Wilson bound is the only scorer of
/// the three that is safe to rank with at small sample sizes.
pub fn select_top_k<T>(records: Vec<T>, k: usize) -> Vec<Scored<T>>
where
    T: VoteCounts + Send,
{
    select_top_k_with(records, k, scoring::score_wilson_lower_bound)
}

/// Rank records with a caller-supplied scorer and return the top `k`.
///
/// For a non-default confidence level, build the scorer once with
/// [`scoring::wilson_scorer`] so an invalid parameter fails before any
/// record is scored.
pub fn select_top_k_with<T, F>(records: Vec<T>, k: usize, scorer: F) -> Vec<Scored<T>>
where
    T: VoteCounts + Send,
    F: Fn(u64, u64) -> f64 + Sync,
{
    take_top(sort_by_score(score_records(records, scorer)), k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Votes {
        label: &'static str,
        up: u64,
        down: u64,
    }

    impl VoteCounts for Votes {
        fn helpful_up(&self) -> u64 {
            self.up
        }
        fn helpful_down(&self) -> u64 {
            self.down
        }
    }

    fn votes(label: &'static str, up: u64, down: u64) -> Votes {
        Votes { label, up, down }
    }

    #[test]
    fn test_larger_sample_beats_small_perfect_sample() {
        let records = vec![votes("a", 10, 0), votes("b", 100, 5), votes("c", 0, 0)];
        let ranked = select_top_k(records, 3);
        let labels: Vec<_> = ranked.iter().map(|s| s.record.label).collect();
        assert_eq!(labels, ["b", "a", "c"]);
        // Zero-vote policy puts c at exactly 0.
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        let ranked = select_top_k(Vec::<Votes>::new(), 5);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_k_zero_returns_empty() {
        let records = vec![votes("a", 1, 0), votes("b", 2, 0), votes("c", 3, 0)];
        assert!(select_top_k(records, 0).is_empty());
    }

    #[test]
    fn test_k_beyond_len_returns_all_sorted() {
        let records = vec![votes("low", 1, 9), votes("high", 9, 1)];
        let ranked = select_top_k(records, 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].record.label, "high");
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Identical counts score identically; stable sort preserves order.
        let records = vec![
            votes("first", 3, 3),
            votes("second", 3, 3),
            votes("third", 3, 3),
        ];
        let ranked = select_top_k(records, 3);
        let labels: Vec<_> = ranked.iter().map(|s| s.record.label).collect();
        assert_eq!(labels, ["first", "second", "third"]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let records = vec![
            votes("a", 40, 10),
            votes("b", 4, 1),
            votes("c", 0, 0),
            votes("d", 400, 100),
        ];
        let first = select_top_k(records.clone(), 3);
        let second = select_top_k(records, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_scorer_changes_order() {
        // By raw difference the heavily-voted review wins even with a
        // worse ratio; the Wilson default would invert this.
        let records = vec![votes("ratio", 50, 0), votes("volume", 600, 400)];
        let by_diff = select_top_k_with(records, 1, |up, down| {
            crate::scoring::score_diff(up, down) as f64
        });
        assert_eq!(by_diff[0].record.label, "volume");
    }
}
