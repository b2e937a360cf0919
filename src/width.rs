//! Bit-width of the words under consideration.
//!
//! All words handled by this crate are plain [`Word`]s (`u64`) that are kept
//! masked to the low `n` bits of a [`Width`]. The width is validated once, at
//! construction, so the rest of the crate can shift and mask freely.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::Error;

/// A machine word truncated to the low `n` bits of some [`Width`].
pub type Word = u64;

/// The largest supported width.
pub const MAX_BITS: u32 = Word::BITS;

/// A validated bit-width `n` with `1 <= n <= 64`.
///
/// # Invariants
///
/// - `1 <= bits() <= MAX_BITS`
/// - `mask()` has exactly the low `bits()` bits set
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Width(u32);

impl Width {
    /// Creates a new width of `bits` bits.
    ///
    /// Fails with [`Error::InvalidWidth`] if `bits` is zero or exceeds [`MAX_BITS`].
    ///
    /// ```
    /// use xorsum::width::Width;
    ///
    /// let w = Width::new(3).unwrap();
    /// assert_eq!(w.mask(), 0b111);
    /// assert!(Width::new(0).is_err());
    /// assert!(Width::new(65).is_err());
    /// ```
    pub fn new(bits: u32) -> Result<Self, Error> {
        if bits == 0 || bits > MAX_BITS {
            return Err(Error::InvalidWidth { width: bits });
        }
        Ok(Width(bits))
    }

    /// Returns the number of bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns the mask `(1 << n) - 1`.
    pub fn mask(self) -> Word {
        Word::MAX >> (MAX_BITS - self.0)
    }

    /// Returns the most significant bit of the width, `1 << (n - 1)`.
    pub fn top_bit(self) -> Word {
        1 << (self.0 - 1)
    }

    /// Returns true if `word` fits in this width.
    pub fn contains(self, word: Word) -> bool {
        word & self.mask() == word
    }

    /// Returns the full domain `0..=mask` of this width.
    pub fn words(self) -> RangeInclusive<Word> {
        0..=self.mask()
    }

    /// Returns all ordered pairs `(a, c)` of words, `a`-major.
    ///
    /// There are `4^n` of them, so this is only meant for small widths.
    pub fn pairs(self) -> impl Iterator<Item = (Word, Word)> {
        self.words().flat_map(move |a| self.words().map(move |c| (a, c)))
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.0
    }
}

impl TryFrom<u32> for Width {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Width::new(bits)
    }
}
