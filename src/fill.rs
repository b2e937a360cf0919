//! Enumeration of all assignments to a subset of bit positions.
//!
//! [`fill_mask`] walks the submasks of a mask with the usual
//! `next = (cur - mask) & mask` step, which visits every submask in ascending
//! order without touching positions outside the mask. Each submask is OR'd with
//! a fixed overlay.
//!
//! # Example
//!
//! ```
//! use xorsum::fill::fill_mask;
//!
//! let words: Vec<_> = fill_mask(0b1010, 0b0001).collect();
//! assert_eq!(words, vec![0b0001, 0b0011, 0b1001, 0b1011]);
//! ```

use std::iter::FusedIterator;

use crate::width::Word;

/// Returns an iterator over all `2^popcount(mask)` ways to fill the set bits of `mask`,
/// each OR'd with `overlay`.
///
/// Overlay bits outside `mask` pass through unchanged. Overlay bits inside `mask` are
/// forced to one, which may produce repeated values; callers keep them disjoint.
pub fn fill_mask(mask: Word, overlay: Word) -> FillMask {
    FillMask::new(mask, overlay)
}

/// Iterator over the fillings of a mask.
///
/// Created by [`fill_mask()`].
#[derive(Debug, Clone)]
pub struct FillMask {
    mask: Word,
    overlay: Word,
    /// Next submask to yield, `None` once the walk wrapped past `mask`
    cursor: Option<Word>,
    /// Number of submasks not yet yielded (up to `2^64`)
    remaining: u128,
}

impl FillMask {
    fn new(mask: Word, overlay: Word) -> Self {
        FillMask {
            mask,
            overlay,
            cursor: Some(0),
            remaining: 1u128 << mask.count_ones(),
        }
    }
}

impl Iterator for FillMask {
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        self.cursor = if current == self.mask {
            None
        } else {
            Some(current.wrapping_sub(self.mask) & self.mask)
        };
        self.remaining -= 1;
        Some(current | self.overlay)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for FillMask {}
