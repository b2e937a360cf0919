//! Reference enumeration by exhaustive search.
//!
//! [`enumerate_brute`] tries every candidate `b` of the width and keeps the ones
//! for which [`satisfies`] holds. It costs `O(2^n)` per pair and serves as the
//! ground truth that the closed-form counter and the constructive generator are
//! checked against. Use [`generate_solutions`][crate::generate::generate_solutions]
//! when speed matters.

use std::ops::RangeInclusive;

use crate::predicate::satisfies;
use crate::width::{Width, Word};

/// Returns an iterator over all `b` satisfying the equation for `(a, c)`, in ascending order.
///
/// ```
/// use xorsum::brute::enumerate_brute;
/// use xorsum::width::Width;
///
/// let w = Width::new(3).unwrap();
/// let solutions: Vec<_> = enumerate_brute(4, 0, w).collect();
/// assert_eq!(solutions, vec![0, 2, 4, 6]);
/// ```
pub fn enumerate_brute(a: Word, c: Word, width: Width) -> BruteSolutions {
    BruteSolutions::new(a, c, width)
}

/// Counts the solutions for `(a, c)` by exhaustive search.
pub fn count_brute(a: Word, c: Word, width: Width) -> u128 {
    enumerate_brute(a, c, width).fold(0, |n, _| n + 1)
}

/// Iterator over brute-force solutions.
///
/// Created by [`enumerate_brute()`]. Each call creates an independent cursor.
#[derive(Debug, Clone)]
pub struct BruteSolutions {
    a: Word,
    c: Word,
    width: Width,
    /// Candidates not yet tested
    candidates: RangeInclusive<Word>,
}

impl BruteSolutions {
    fn new(a: Word, c: Word, width: Width) -> Self {
        debug_assert!(width.contains(a) && width.contains(c));
        BruteSolutions {
            a,
            c,
            width,
            candidates: width.words(),
        }
    }
}

impl Iterator for BruteSolutions {
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        let (a, c, width) = (self.a, self.c, self.width);
        self.candidates.find(|&b| satisfies(a, b, c, width))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.candidates.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn w(bits: u32) -> Width {
        Width::new(bits).unwrap()
    }

    #[test]
    fn test_brute_equal_words() {
        // a == c: b = 0 in the plain branch, b = top bit in the overflow branch
        assert_eq!(enumerate_brute(0, 0, w(3)).collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(enumerate_brute(7, 7, w(3)).collect::<Vec<_>>(), vec![3, 7]);
    }

    #[test]
    fn test_brute_full_hypercube() {
        // a ^ c = 0b111: every b works
        assert_eq!(enumerate_brute(5, 2, w(3)).collect::<Vec<_>>(), (0..8).collect::<Vec<_>>());
        assert_eq!(count_brute(5, 2, w(3)), 8);
    }

    #[test]
    fn test_brute_with_overflow_family() {
        assert_eq!(enumerate_brute(4, 0, w(3)).collect::<Vec<_>>(), vec![0, 2, 4, 6]);
        assert_eq!(count_brute(4, 0, w(3)), 4);
    }

    #[test]
    fn test_brute_ascending_and_masked() {
        let width = w(4);
        for (a, c) in width.pairs() {
            let solutions: Vec<_> = enumerate_brute(a, c, width).collect();
            assert!(solutions.windows(2).all(|p| p[0] < p[1]));
            assert!(solutions.iter().all(|&b| width.contains(b)));
        }
    }

    #[test]
    fn test_brute_symmetry() {
        let width = w(4);
        for (a, c) in width.pairs() {
            let ac: Vec<_> = enumerate_brute(a, c, width).collect();
            let ca: Vec<_> = enumerate_brute(c, a, width).collect();
            assert_eq!(ac, ca, "asymmetric solutions for ({}, {})", a, c);
        }
    }

    #[test]
    fn test_brute_restartable() {
        let width = w(3);
        let first: Vec<_> = enumerate_brute(6, 1, width).collect();
        let second: Vec<_> = enumerate_brute(6, 1, width).collect();
        assert_eq!(first, second);

        let iter = enumerate_brute(6, 1, width);
        let cloned = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), cloned.collect::<Vec<_>>());
    }
}
