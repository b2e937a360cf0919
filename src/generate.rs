//! Output-sensitive construction of solution sets.
//!
//! Instead of testing every candidate, [`generate_solutions`] builds the solutions
//! of `(a, c)` directly, in time proportional to their number:
//!
//! 1. **Hypercube family.** At every bit where `a` and `c` differ, `b` copies
//!    that bit from either `a` or `c`; elsewhere it copies the common bit. Each
//!    filling `R` of `a ^ c` gives `(a & R) | (c & !R)`.
//! 2. **Overflow family.** Present only when [`has_overflow_family`] holds. All
//!    of its members share a fixed [overlay](overflow_overlay): the bits below the
//!    carry-triggering bit are copied from `c` and the triggering bit is flipped
//!    relative to `c`. The differing bits are then filled freely.
//!
//! The two families are disjoint, so no value is yielded twice.

use std::iter::FusedIterator;

use crate::count::{has_overflow_family, negated_difference};
use crate::fill::{fill_mask, FillMask};
use crate::width::{Width, Word};

/// Returns the fixed bits shared by all overflow solutions of `(a, c)`,
/// or `None` if the pair has no overflow family.
///
/// ```
/// use xorsum::generate::overflow_overlay;
/// use xorsum::width::Width;
///
/// let w = Width::new(3).unwrap();
/// assert_eq!(overflow_overlay(4, 0, w), Some(0b010));
/// assert_eq!(overflow_overlay(0, 0, w), Some(0b100));
/// assert_eq!(overflow_overlay(5, 2, w), None);
/// ```
pub fn overflow_overlay(a: Word, c: Word, width: Width) -> Option<Word> {
    if !has_overflow_family(a, c, width) {
        return None;
    }
    let mask = width.mask();
    let z = negated_difference(a, c, width);
    let bit_k = match z >> 1 {
        // a == c: the carry is triggered by the top bit
        0 => width.top_bit(),
        bit => bit,
    };
    let low = c & ((z.wrapping_sub(1) & mask) >> 1);
    Some(low | (bit_k ^ (c & bit_k)))
}

/// Returns an iterator over all `b` satisfying the equation for `(a, c)`.
///
/// Yields the same set as [`enumerate_brute`][crate::brute::enumerate_brute], but
/// not in ascending order: first the hypercube family, then the overflow family.
///
/// ```
/// use std::collections::BTreeSet;
///
/// use xorsum::generate::generate_solutions;
/// use xorsum::width::Width;
///
/// let w = Width::new(3).unwrap();
/// let solutions: BTreeSet<_> = generate_solutions(4, 0, w).collect();
/// assert_eq!(solutions, BTreeSet::from([0, 2, 4, 6]));
/// ```
pub fn generate_solutions(a: Word, c: Word, width: Width) -> Solutions {
    Solutions::new(a, c, width)
}

/// Iterator over constructed solutions.
///
/// Created by [`generate_solutions()`].
#[derive(Debug, Clone)]
pub struct Solutions {
    a: Word,
    c: Word,
    /// Fillings `R` selecting, per differing bit, whether to copy from `a`
    hypercube: FillMask,
    /// Overflow solutions, if the pair has any
    overflow: Option<FillMask>,
}

impl Solutions {
    fn new(a: Word, c: Word, width: Width) -> Self {
        debug_assert!(width.contains(a) && width.contains(c));
        let diff = a ^ c;
        Solutions {
            a,
            c,
            hypercube: fill_mask(diff, 0),
            overflow: overflow_overlay(a, c, width).map(|overlay| fill_mask(diff, overlay)),
        }
    }
}

impl Iterator for Solutions {
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(r) = self.hypercube.next() {
            return Some((self.a & r) | (self.c & !r));
        }
        self.overflow.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.hypercube.size_hint();
        match &self.overflow {
            None => (lo, hi),
            Some(overflow) => {
                let (olo, ohi) = overflow.size_hint();
                let hi = match (hi, ohi) {
                    (Some(x), Some(y)) => x.checked_add(y),
                    _ => None,
                };
                (lo.saturating_add(olo), hi)
            }
        }
    }
}

impl FusedIterator for Solutions {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;

    use test_log::test;

    use crate::brute::enumerate_brute;
    use crate::count::count_solutions;

    fn w(bits: u32) -> Width {
        Width::new(bits).unwrap()
    }

    fn generated(a: Word, c: Word, width: Width) -> BTreeSet<Word> {
        generate_solutions(a, c, width).collect()
    }

    fn brute(a: Word, c: Word, width: Width) -> BTreeSet<Word> {
        enumerate_brute(a, c, width).collect()
    }

    #[test]
    fn test_equal_words() {
        assert_eq!(generate_solutions(0, 0, w(3)).collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(generate_solutions(7, 7, w(3)).collect::<Vec<_>>(), vec![7, 3]);
    }

    #[test]
    fn test_hypercube_only() {
        // z = 1: no overflow family
        assert_eq!(overflow_overlay(5, 2, w(3)), None);
        assert_eq!(generated(5, 2, w(3)), (0..8).collect());

        // d = 0b001, z = 0b111
        assert_eq!(overflow_overlay(1, 0, w(3)), None);
        assert_eq!(generated(1, 0, w(3)), BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_with_overflow_family() {
        assert_eq!(generate_solutions(4, 0, w(3)).collect::<Vec<_>>(), vec![0, 4, 2, 6]);
        assert_eq!(generated(4, 0, w(3)), brute(4, 0, w(3)));
    }

    #[test]
    fn test_overlay_anchor_bits() {
        // d = 0b1100, z = 0b0100: low bit copied from c, bit 1 flipped
        let width = w(4);
        assert_eq!(overflow_overlay(0b1101, 0b0001, width), Some(0b0011));
        assert_eq!(overflow_overlay(0b1111, 0b0011, width), Some(0b0001));
    }

    #[test]
    fn test_matches_brute_exhaustive() {
        for bits in 1..=6 {
            let width = w(bits);
            for (a, c) in width.pairs().filter(|(a, c)| a >= c) {
                assert_eq!(
                    generated(a, c, width),
                    brute(a, c, width),
                    "failed to generate solutions for ({:#x}, {:#x}) at {}",
                    a,
                    c,
                    width
                );
            }
        }
    }

    #[test]
    fn test_no_duplicates_and_masked() {
        for bits in 1..=5 {
            let width = w(bits);
            for (a, c) in width.pairs() {
                let list: Vec<_> = generate_solutions(a, c, width).collect();
                let set: BTreeSet<_> = list.iter().copied().collect();
                assert_eq!(list.len(), set.len());
                assert_eq!(list.len() as u128, count_solutions(a, c, width));
                assert!(list.iter().all(|&b| width.contains(b)));
            }
        }
    }

    #[test]
    fn test_size_hint_exact() {
        let width = w(4);
        for (a, c) in width.pairs() {
            let iter = generate_solutions(a, c, width);
            let expected = count_solutions(a, c, width) as usize;
            assert_eq!(iter.size_hint(), (expected, Some(expected)));
        }
    }

    #[test]
    fn test_idempotent() {
        let width = w(5);
        let first: Vec<_> = generate_solutions(0b10110, 0b00110, width).collect();
        let second: Vec<_> = generate_solutions(0b10110, 0b00110, width).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_wide_words() {
        // Output-sensitive: only 4 solutions even though the width has 2^64 words
        let width = w(64);
        let top = 1u64 << 63;
        let solutions = generated(top, 0, width);
        assert_eq!(solutions, BTreeSet::from([0, top, 1 << 62, top | (1 << 62)]));
        for &b in &solutions {
            assert!(crate::predicate::satisfies(top, b, 0, width));
        }
    }
}
