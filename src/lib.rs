//! # xorsum: exact solution families of the XOR-sum overflow equation
//!
//! **`xorsum`** characterizes, counts and enumerates all triples of `n`-bit words
//! `(a, b, c)` satisfying
//!
//! ```text
//! s = (a ^ b) + (c ^ b)                 // without wrap-around
//! s > mask  ?  (s & mask) == 0  :  (a ^ c) == s
//! ```
//!
//! which is what a short add/xor/compare machine-code snippet computes, including its
//! modular-overflow branch.
//!
//! ## Key Features
//!
//! - **Closed-form counts**: the number of valid `b` for a pair `(a, c)` is `2^popcount(a ^ c)`,
//!   doubled when an overflow family exists. The total over a width is `6^n + 4^n - 2^n`.
//! - **Output-sensitive enumeration**: [`generate_solutions`][crate::generate::generate_solutions]
//!   constructs the solutions of a pair directly, in time proportional to their number.
//! - **Ground truth**: [`enumerate_brute`][crate::brute::enumerate_brute] tests every candidate.
//! - **Exhaustive verification**: [`verify`][crate::verify::verify] checks all of the above
//!   against each other over the full state space of a small width.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::collections::BTreeSet;
//!
//! use num_bigint::BigUint;
//! use xorsum::brute::enumerate_brute;
//! use xorsum::count::{count_solutions, count_total};
//! use xorsum::generate::generate_solutions;
//! use xorsum::width::Width;
//!
//! // 1. Choose a width
//! let w = Width::new(3).unwrap();
//!
//! // 2. Count without enumerating
//! assert_eq!(count_solutions(4, 0, w), 4);
//!
//! // 3. Construct the solutions, and compare with brute force
//! let generated: BTreeSet<_> = generate_solutions(4, 0, w).collect();
//! let brute: BTreeSet<_> = enumerate_brute(4, 0, w).collect();
//! assert_eq!(generated, brute);
//!
//! // 4. Total number of triples for the width
//! assert_eq!(count_total(w), BigUint::from(272u32));
//! ```
//!
//! ## Core Components
//!
//! - **[`width`]**: Validated bit-widths and word masks.
//! - **[`predicate`]**: The equation itself, its overflow indicator, and a listing of all triples.
//! - **[`brute`]**: `O(2^n)` reference enumeration.
//! - **[`count`]**: Closed-form counts per pair and per width.
//! - **[`fill`]**: Enumeration of all fillings of a bit mask.
//! - **[`generate`]**: Constructive enumeration of solution sets.
//! - **[`verify`]**: Exhaustive cross-checking with a structured report.

pub mod brute;
pub mod count;
pub mod error;
pub mod fill;
pub mod generate;
pub mod predicate;
pub mod verify;
pub mod width;
