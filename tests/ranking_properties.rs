//! Property-based tests for the ranking pipeline.

use proptest::prelude::*;
use reviewrank::ranking::select_top_k;
use reviewrank::VoteCounts;

#[derive(Debug, Clone, PartialEq)]
struct Record {
    index: usize,
    up: u64,
    down: u64,
}

impl VoteCounts for Record {
    fn helpful_up(&self) -> u64 {
        self.up
    }
    fn helpful_down(&self) -> u64 {
        self.down
    }
}

fn records(counts: &[(u64, u64)]) -> Vec<Record> {
    counts
        .iter()
        .enumerate()
        .map(|(index, &(up, down))| Record { index, up, down })
        .collect()
}

proptest! {
    /// Property: output length is min(k, len), scores are descending, and
    /// no excluded record outscores an included one.
    #[test]
    fn prop_top_k_is_correct(
        counts in prop::collection::vec((0u64..200, 0u64..200), 0..50),
        k in 0usize..60,
    ) {
        let input = records(&counts);
        let ranked = select_top_k(input.clone(), k);

        prop_assert_eq!(ranked.len(), k.min(input.len()));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }

        if let Some(cutoff) = ranked.last().map(|s| s.score) {
            let included: Vec<usize> = ranked.iter().map(|s| s.record.index).collect();
            let all = select_top_k(input, counts.len());
            for scored in &all {
                if !included.contains(&scored.record.index) {
                    prop_assert!(scored.score <= cutoff);
                }
            }
        }
    }

    /// Property: ranking the same input twice yields identical output.
    #[test]
    fn prop_ranking_idempotent(
        counts in prop::collection::vec((0u64..200, 0u64..200), 0..50),
        k in 0usize..60,
    ) {
        let input = records(&counts);
        let first = select_top_k(input.clone(), k);
        let second = select_top_k(input, k);
        prop_assert_eq!(first, second);
    }

    /// Property: ties keep input order (stable tie-break). Every record
    /// has the same counts, so the ranking must return input order.
    #[test]
    fn prop_all_ties_preserve_input_order(
        up in 0u64..50,
        down in 0u64..50,
        len in 0usize..30,
    ) {
        let input = records(&vec![(up, down); len]);
        let ranked = select_top_k(input, len);
        let order: Vec<usize> = ranked.iter().map(|s| s.record.index).collect();
        let expected: Vec<usize> = (0..len).collect();
        prop_assert_eq!(order, expected);
    }

    /// Property: k beyond the input length returns everything.
    #[test]
    fn prop_oversized_k_returns_all(
        counts in prop::collection::vec((0u64..200, 0u64..200), 0..30),
    ) {
        let input = records(&counts);
        let ranked = select_top_k(input, counts.len() + 100);
        prop_assert_eq!(ranked.len(), counts.len());
    }
}
