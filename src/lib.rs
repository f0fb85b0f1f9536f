//! Bounded Levenshtein distance.
//!
//! This crate computes the edit distance between two sequences of comparable
//! elements, and can stop early once the answer is known to be no better than
//! a caller-supplied *benchmark*. That is all a "find something closer than
//! what I already have" search needs.
//!
//! ## Core idea
//! 1. Normalize the inputs: the length difference is an unavoidable floor,
//!    shared prefixes and suffixes are free, and the shorter sequence sizes a
//!    single reusable DP row.
//! 2. Fill the DP row by row. Every path to the final cell crosses each row,
//!    so once the cheapest cell of a row (plus the cost its remaining length
//!    difference forces) reaches the benchmark, the scan is abandoned.
//! 3. For edit scripts, keep the full matrix instead and walk it backwards.
//!
//! Below the benchmark results are exact; at or above it they only mean
//! "at least the benchmark".
//!
//! ## Quick start
//! ```
//! use bounded_edit::{distance, distance_bounded, edit_path, apply_edits};
//!
//! assert_eq!(distance(b"kitten", b"sitting"), 3);
//! assert_eq!(distance_bounded(b"Fifteen", b"Fourteen", 2), 2);
//!
//! let ops = edit_path(b"parks", b"spark");
//! assert_eq!(apply_edits(&ops, b"parks", b"spark").as_deref(), Some(&b"spark"[..]));
//! ```
//!
//! For repeated comparisons keep a [`DistanceEngine`] around; it reuses its
//! row buffer across calls.

pub mod builder;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod search;
pub mod traits;
pub mod utils;
pub mod weights;

pub use crate::builder::DistanceEngineBuilder;
pub use crate::engine::DistanceEngine;
pub use crate::error::EditError;
pub use crate::matrix::{apply_edits, script_cost, CostMatrix, EditOp};
pub use crate::search::Candidate;
#[cfg(feature = "parallel")]
pub use crate::search::par_within;
pub use crate::traits::Cost;
pub use crate::weights::Weights;

/// Exact Levenshtein distance with unit costs.
///
/// # Panics
/// Panics if the row buffer cannot be allocated.
pub fn distance<E: PartialEq>(s: &[E], t: &[E]) -> usize {
    DistanceEngine::new().distance(s, t)
}

/// Exact distance with a custom equality and weights.
///
/// # Panics
/// Panics if the worst-case cost does not fit `C` or the row buffer cannot be
/// allocated.
pub fn distance_with<E, F, C>(s: &[E], t: &[E], eq: F, deletion: C, insertion: C, substitution: C) -> C
where
    F: FnMut(&E, &E) -> bool,
    C: Cost,
{
    DistanceEngine::with_weights(Weights::new(deletion, insertion, substitution)).distance_by(s, t, eq)
}

/// Distance if it is below `benchmark`, otherwise some value `>= benchmark`.
///
/// # Panics
/// Panics if the row buffer cannot be allocated.
pub fn distance_bounded<E: PartialEq>(s: &[E], t: &[E], benchmark: usize) -> usize {
    DistanceEngine::new().distance_bounded(s, t, benchmark)
}

/// Edit script turning `s` into `t` with unit costs.
///
/// # Panics
/// Panics if the full matrix cannot be sized or allocated.
pub fn edit_path<E: PartialEq>(s: &[E], t: &[E]) -> Vec<EditOp> {
    DistanceEngine::new().edit_path(s, t)
}

/// [`distance`] over the `char`s of two strings.
///
/// # Panics
/// Panics if the row buffer cannot be allocated.
pub fn str_distance(a: &str, b: &str) -> usize {
    let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
    distance(&a[..], &b[..])
}

/// [`distance_bounded`] over the `char`s of two strings.
///
/// # Panics
/// Panics if the row buffer cannot be allocated.
pub fn str_distance_bounded(a: &str, b: &str, benchmark: usize) -> usize {
    let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
    distance_bounded(&a[..], &b[..], benchmark)
}
