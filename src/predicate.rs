//! The XOR-sum equation with its modular-overflow branch.
//!
//! For words `a`, `b`, `c` of width `n`, the equation computes
//!
//! ```text
//! s = (a ^ b) + (c ^ b)        // no wrap-around, up to n+1 bits
//! ```
//!
//! and then holds iff either
//!
//! - the sum fits in `n` bits and equals `a ^ c`, or
//! - the sum carries out of `n` bits and its low `n` bits are all zero.
//!
//! The sum is evaluated in `u128`, so the carry-out bit survives even for 64-bit words.

use crate::brute::{enumerate_brute, BruteSolutions};
use crate::width::{Width, Word};

fn raw_sum(a: Word, b: Word, c: Word) -> u128 {
    (a ^ b) as u128 + (c ^ b) as u128
}

/// Returns true if `(a, b, c)` satisfies the equation at the given width.
///
/// All three words must already be masked to `width`.
///
/// ```
/// use xorsum::predicate::satisfies;
/// use xorsum::width::Width;
///
/// let w = Width::new(3).unwrap();
/// // No overflow: (4^0) + (0^0) = 4 = 4^0
/// assert!(satisfies(4, 0, 0, w));
/// // Overflow: (4^2) + (0^2) = 8, truncates to 0
/// assert!(satisfies(4, 2, 0, w));
/// // Overflow with non-zero remainder: (4^3) + (0^3) = 10
/// assert!(!satisfies(4, 3, 0, w));
/// ```
pub fn satisfies(a: Word, b: Word, c: Word, width: Width) -> bool {
    debug_assert!(width.contains(a) && width.contains(b) && width.contains(c));
    let mask = width.mask() as u128;
    let s = raw_sum(a, b, c);
    if s > mask {
        s & mask == 0
    } else {
        (a ^ c) as u128 == s
    }
}

/// Returns true if the raw sum `(a ^ b) + (c ^ b)` exceeds the width.
///
/// This is the branch [`satisfies`] takes; it does not say whether the equation holds.
pub fn overflows(a: Word, b: Word, c: Word, width: Width) -> bool {
    raw_sum(a, b, c) > width.mask() as u128
}

/// A single solution `(a, c, b)` together with the branch it was found in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Triple {
    pub a: Word,
    pub c: Word,
    pub b: Word,
    /// Whether the raw sum carried out of the width.
    pub overflow: bool,
}

/// Returns an iterator over every solution triple with `a <= c`.
///
/// The equation is symmetric in `a` and `c`, so each unordered pair is listed once.
/// Triples come ordered by `a`, then `c`, then `b`.
///
/// ```
/// use xorsum::predicate::triples;
/// use xorsum::width::Width;
///
/// let w = Width::new(1).unwrap();
/// let all: Vec<_> = triples(w).map(|t| (t.a, t.c, t.b)).collect();
/// assert_eq!(all, vec![(0, 0, 0), (0, 0, 1), (0, 1, 0), (0, 1, 1), (1, 1, 0), (1, 1, 1)]);
/// ```
pub fn triples(width: Width) -> Triples {
    Triples::new(width)
}

/// Iterator over solution triples.
///
/// Created by [`triples()`].
pub struct Triples {
    width: Width,
    a: Word,
    c: Word,
    /// Solutions for the current `(a, c)`, or `None` once every pair is exhausted
    current: Option<BruteSolutions>,
}

impl Triples {
    fn new(width: Width) -> Self {
        Triples {
            width,
            a: 0,
            c: 0,
            current: Some(enumerate_brute(0, 0, width)),
        }
    }

    /// Moves to the next pair `(a, c)` with `a <= c`, if any.
    fn advance(&mut self) -> Option<()> {
        let mask = self.width.mask();
        if self.c < mask {
            self.c += 1;
        } else if self.a < mask {
            self.a += 1;
            self.c = self.a;
        } else {
            return None;
        }
        Some(())
    }
}

impl Iterator for Triples {
    type Item = Triple;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let solutions = self.current.as_mut()?;
            if let Some(b) = solutions.next() {
                return Some(Triple {
                    a: self.a,
                    c: self.c,
                    b,
                    overflow: overflows(self.a, b, self.c, self.width),
                });
            }
            self.current = match self.advance() {
                Some(()) => Some(enumerate_brute(self.a, self.c, self.width)),
                None => None,
            };
        }
    }
}
