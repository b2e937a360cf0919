//! Property-based tests on widths too large for exhaustive verification of all pairs.

use std::collections::BTreeSet;

use proptest::prelude::*;

use xorsum::brute::enumerate_brute;
use xorsum::count::{count_breakdown, count_solutions};
use xorsum::generate::generate_solutions;
use xorsum::predicate::satisfies;
use xorsum::width::{Width, Word};

/// Strategy for a width together with a pair of words masked to it.
fn width_and_pair(max_bits: u32) -> impl Strategy<Value = (Width, Word, Word)> {
    (1..=max_bits).prop_flat_map(|bits| {
        let width = Width::new(bits).unwrap();
        let mask = width.mask();
        (Just(width), 0..=mask, 0..=mask)
    })
}

/// Strategy for a width and a pair differing in at most `max_diff` bits,
/// so that the solution set stays small at any width.
fn width_and_sparse_pair(max_bits: u32, max_diff: usize) -> impl Strategy<Value = (Width, Word, Word)> {
    (1..=max_bits).prop_flat_map(move |bits| {
        let width = Width::new(bits).unwrap();
        let positions = proptest::collection::vec(0..bits, 0..=max_diff);
        (Just(width), 0..=width.mask(), positions).prop_map(|(width, a, positions)| {
            let diff = positions.into_iter().fold(0, |d: Word, i| d | (1 << i));
            (width, a, a ^ diff)
        })
    })
}

proptest! {
    #[test]
    fn generated_matches_brute((width, a, c) in width_and_pair(14)) {
        let generated: Vec<Word> = generate_solutions(a, c, width).collect();
        let generated_set: BTreeSet<Word> = generated.iter().copied().collect();
        let brute: BTreeSet<Word> = enumerate_brute(a, c, width).collect();

        prop_assert_eq!(generated.len(), generated_set.len());
        prop_assert_eq!(&generated_set, &brute);
        prop_assert_eq!(brute.len() as u128, count_solutions(a, c, width));
    }

    #[test]
    fn generated_solutions_satisfy((width, a, c) in width_and_sparse_pair(64, 10)) {
        let count = count_solutions(a, c, width);
        let generated: BTreeSet<Word> = generate_solutions(a, c, width).collect();
        prop_assert_eq!(generated.len() as u128, count);
        for &b in &generated {
            prop_assert!(width.contains(b));
            prop_assert!(satisfies(a, b, c, width));
        }
    }

    #[test]
    fn breakdown_families((width, a, c) in width_and_pair(64)) {
        let breakdown = count_breakdown(a, c, width);
        prop_assert_eq!(breakdown.hypercube, 1u128 << (a ^ c).count_ones());
        prop_assert!(breakdown.overflow == 0 || breakdown.overflow == breakdown.hypercube);
        prop_assert_eq!(breakdown.total(), count_solutions(a, c, width));
        prop_assert_eq!(count_solutions(a, c, width), count_solutions(c, a, width));
    }
}
