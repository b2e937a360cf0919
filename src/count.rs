//! Closed-form solution counts.
//!
//! # Per pair
//!
//! Let `d = a ^ c` and `k = popcount(d)`.
//!
//! - Where `a` and `c` agree, the bit of `b` is forced; where they differ, either
//!   value of `b` makes exactly one of `a ^ b`, `c ^ b` set, so the two terms never
//!   carry and their sum is `d`. This gives the *hypercube* family of `2^k` solutions.
//! - The sum can only overflow to exactly `2^n` when the low bits of `a` and `c`
//!   agree and a contiguous run of top bits differs, with at least one bit agreeing.
//!   That is the case iff `z = (-d) & mask` is a power of two (zero included) other
//!   than one. It adds another `2^k` solutions.
//!
//! # Per width
//!
//! Summing over all ordered pairs with the binomial theorem:
//!
//! ```text
//! hypercube: 2^n * sum_r C(n, r) 2^r   = 2^n * 3^n         = 6^n
//! overflow:  2^n * sum_{r<n} 2^r       = 2^n * (2^n - 1)   = 4^n - 2^n
//! ```
//!
//! so the total number of triples is `6^n + 4^n - 2^n`.

use num_bigint::BigUint;

use crate::width::{Width, Word};

/// Number of solutions of a pair, split by family.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct SolutionCount {
    /// Solutions where the sum does not overflow.
    pub hypercube: u128,
    /// Solutions where the sum overflows to exactly `2^n`.
    pub overflow: u128,
}

impl SolutionCount {
    pub fn total(&self) -> u128 {
        self.hypercube + self.overflow
    }
}

/// Returns `(-(a ^ c)) & mask`.
pub(crate) fn negated_difference(a: Word, c: Word, width: Width) -> Word {
    (a ^ c).wrapping_neg() & width.mask()
}

/// Returns true if `(a, c)` admits solutions whose sum overflows.
///
/// `z == 1` means `a` and `c` differ in every bit, leaving no agreeing bit to start the carry.
pub fn has_overflow_family(a: Word, c: Word, width: Width) -> bool {
    let z = negated_difference(a, c, width);
    z != 1 && z & z.wrapping_sub(1) == 0
}

/// Returns the number of solutions of `(a, c)` split into hypercube and overflow families.
pub fn count_breakdown(a: Word, c: Word, width: Width) -> SolutionCount {
    let hypercube = 1u128 << (a ^ c).count_ones();
    let overflow = if has_overflow_family(a, c, width) { hypercube } else { 0 };
    SolutionCount { hypercube, overflow }
}

/// Returns the number of `b` satisfying the equation for `(a, c)`, without enumerating them.
///
/// ```
/// use xorsum::count::count_solutions;
/// use xorsum::width::Width;
///
/// let w = Width::new(3).unwrap();
/// assert_eq!(count_solutions(4, 0, w), 4);
/// assert_eq!(count_solutions(5, 2, w), 8);
/// ```
pub fn count_solutions(a: Word, c: Word, width: Width) -> u128 {
    count_breakdown(a, c, width).total()
}

/// Returns the total number of triples `(a, b, c)` of the width, `6^n + 4^n - 2^n`.
///
/// ```
/// use num_bigint::BigUint;
/// use xorsum::count::count_total;
/// use xorsum::width::Width;
///
/// assert_eq!(count_total(Width::new(3).unwrap()), BigUint::from(272u32));
/// ```
pub fn count_total(width: Width) -> BigUint {
    let n = width.bits();
    let pow = |base: u32| BigUint::from(base).pow(n);
    pow(6) + pow(4) - pow(2)
}

/// Sums [`count_solutions`] over every ordered pair `(a, c)`.
///
/// This visits `4^n` pairs and exists to cross-check [`count_total`].
pub fn count_total_by_pairs(width: Width) -> BigUint {
    width
        .pairs()
        .fold(BigUint::ZERO, |total, (a, c)| total + count_solutions(a, c, width))
}
