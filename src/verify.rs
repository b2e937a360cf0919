//! Exhaustive cross-checking of the counters and the generator.
//!
//! For a small width, [`verify`] compares, over the whole `(a, c)` space:
//!
//! - [`count_solutions`] against [`count_brute`] for every ordered pair,
//! - the sets produced by [`generate_solutions`] and [`enumerate_brute`] for every pair with `a >= c`,
//! - the symmetry-adjusted sum of brute-force solution counts against [`count_total`].
//!
//! Disagreements are not errors: they are collected into a [`Report`] so that every
//! defect can be inspected at once. The only failures are invalid or intractable widths.
//!
//! # Example
//!
//! ```
//! use xorsum::verify::verify;
//! use xorsum::width::Width;
//!
//! let report = verify(Width::new(4).unwrap()).unwrap();
//! assert!(report.is_ok());
//! assert_eq!(report.pairs_checked, 256);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, trace, warn};
use num_bigint::BigUint;

use crate::brute::{count_brute, enumerate_brute};
use crate::count::{count_solutions, count_total};
use crate::error::Error;
use crate::generate::generate_solutions;
use crate::width::{Width, Word};

/// Configuration for [`verify_with`].
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Largest width accepted for exhaustive checking (default: 8).
    ///
    /// The work grows as `2^(3n)`.
    pub max_width: u32,
    /// Whether to stop comparing sets after the first mismatch (default: true).
    pub stop_on_set_mismatch: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_width: 8,
            stop_on_set_mismatch: true,
        }
    }
}

/// The closed-form count of a pair disagrees with brute force.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMismatch {
    pub a: Word,
    pub c: Word,
    /// Value of [`count_solutions`].
    pub expected: u128,
    /// Value of [`count_brute`].
    pub actual: u128,
}

impl fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Miscounted for ({:02x}, {:02x}): {} was actually {}",
            self.a, self.c, self.expected, self.actual
        )
    }
}

/// The generated solution set of a pair differs from the brute-force one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMismatch {
    pub a: Word,
    pub c: Word,
    /// Solutions found by [`enumerate_brute`], ascending.
    pub brute: Vec<Word>,
    /// Solutions produced by [`generate_solutions`], ascending and deduplicated.
    pub generated: Vec<Word>,
}

impl fmt::Display for SetMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to generate correct solutions for ({:02x}, {:02x}): expected {:?}, got {:?}",
            self.a, self.c, self.brute, self.generated
        )
    }
}

/// Outcome of an exhaustive verification run.
#[derive(Debug, Clone)]
pub struct Report {
    pub width: Width,
    /// Number of ordered pairs whose counts were compared.
    pub pairs_checked: u64,
    /// Every pair whose closed-form count was wrong.
    pub count_mismatches: Vec<CountMismatch>,
    /// The first pair whose generated set was wrong, if any.
    pub set_mismatch: Option<SetMismatch>,
    /// Whether every pair with `a >= c` had its set compared.
    pub sets_complete: bool,
    /// Brute-force solutions summed over pairs with `a >= c`, doubling `a != c`.
    pub total_by_pairs: BigUint,
    /// Value of [`count_total`].
    pub total_expected: BigUint,
}

impl Report {
    /// Returns true if the accumulated total was fully computed and equals the formula.
    pub fn total_matches(&self) -> bool {
        self.sets_complete && self.total_by_pairs == self.total_expected
    }

    /// Returns true if no disagreement of any kind was found.
    pub fn is_ok(&self) -> bool {
        self.count_mismatches.is_empty() && self.set_mismatch.is_none() && self.total_matches()
    }
}

/// Verifies the given width with the default [`VerifyConfig`].
pub fn verify(width: Width) -> Result<Report, Error> {
    verify_with(width, &VerifyConfig::default())
}

/// Verifies the given width.
///
/// Fails with [`Error::Intractable`] if the width exceeds `config.max_width`.
pub fn verify_with(width: Width, config: &VerifyConfig) -> Result<Report, Error> {
    verify_impl(width, config, count_solutions, |a, c, width| {
        generate_solutions(a, c, width).collect()
    })
}

/// Checks `count` and `generate` against brute force over the whole width.
fn verify_impl(
    width: Width,
    config: &VerifyConfig,
    count: impl Fn(Word, Word, Width) -> u128,
    generate: impl Fn(Word, Word, Width) -> BTreeSet<Word>,
) -> Result<Report, Error> {
    if width.bits() > config.max_width {
        return Err(Error::Intractable {
            width: width.bits(),
            limit: config.max_width,
        });
    }
    debug!("Verifying {} words", width);

    let (pairs_checked, count_mismatches) = check_counts(width, &count);

    let mut set_mismatch = None;
    let mut sets_complete = true;
    let mut total_by_pairs = BigUint::ZERO;

    for (a, c) in width.pairs().filter(|(a, c)| a >= c) {
        let brute: BTreeSet<Word> = enumerate_brute(a, c, width).collect();
        let generated = generate(a, c, width);
        trace!("({:#x}, {:#x}): {} solutions", a, c, brute.len());

        // The total is taken from brute force, so it stays whole past a mismatch
        let weight = if a == c { 1u32 } else { 2 };
        total_by_pairs += BigUint::from(brute.len()) * weight;

        if brute != generated {
            let mismatch = SetMismatch {
                a,
                c,
                brute: brute.into_iter().collect(),
                generated: generated.into_iter().collect(),
            };
            warn!("{}", mismatch);
            if set_mismatch.is_none() {
                set_mismatch = Some(mismatch);
            }
            if config.stop_on_set_mismatch {
                sets_complete = false;
                break;
            }
        }
    }

    let total_expected = count_total(width);
    if sets_complete && total_by_pairs != total_expected {
        warn!("Total {} differs from closed form {}", total_by_pairs, total_expected);
    }

    let report = Report {
        width,
        pairs_checked,
        count_mismatches,
        set_mismatch,
        sets_complete,
        total_by_pairs,
        total_expected,
    };
    debug!(
        "Verified {} pairs: {} count mismatches, set mismatch: {}, total {} (expected {})",
        report.pairs_checked,
        report.count_mismatches.len(),
        report.set_mismatch.is_some(),
        report.total_by_pairs,
        report.total_expected
    );
    Ok(report)
}

/// Compares `count` against brute-force counts over all ordered pairs.
fn check_counts(
    width: Width,
    count: impl Fn(Word, Word, Width) -> u128,
) -> (u64, Vec<CountMismatch>) {
    let mut checked = 0;
    let mut mismatches = Vec::new();
    for (a, c) in width.pairs() {
        checked += 1;
        let expected = count(a, c, width);
        let actual = count_brute(a, c, width);
        if expected != actual {
            let mismatch = CountMismatch { a, c, expected, actual };
            warn!("{}", mismatch);
            mismatches.push(mismatch);
        }
    }
    (checked, mismatches)
}
