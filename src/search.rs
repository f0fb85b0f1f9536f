//! Candidate search on top of the bounded distance.
//!
//! These helpers are where the benchmark pays off: once a good candidate is
//! known, every further comparison only needs to prove it is *not* closer,
//! which the row scan can usually do after a few rows.

use crate::engine::DistanceEngine;
use crate::traits::Cost;

/// A candidate index together with its exact distance to the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate<C> {
    pub index: usize,
    pub distance: C,
}

impl<C: Cost> DistanceEngine<C> {
    /// Closest candidate to `query`, earliest index on ties.
    ///
    /// Returns `None` only when `candidates` is empty.
    ///
    /// # Panics
    /// Same conditions as [`distance`](Self::distance).
    pub fn nearest<E, S>(&mut self, query: &[E], candidates: &[S]) -> Option<Candidate<C>>
    where
        E: PartialEq,
        S: AsRef<[E]>,
    {
        let mut best: Option<Candidate<C>> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let candidate = candidate.as_ref();
            let distance = match best {
                None => self.distance(query, candidate),
                Some(b) => self.distance_bounded(query, candidate, b.distance),
            };
            // results at or above the benchmark are not exact and never win
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(Candidate { index, distance });
                if distance == C::ZERO {
                    break;
                }
            }
        }
        best
    }

    /// Every candidate within `max` of `query`, in input order, with its
    /// exact distance.
    ///
    /// # Panics
    /// Same conditions as [`distance`](Self::distance).
    pub fn within<E, S>(&mut self, query: &[E], candidates: &[S], max: C) -> Vec<Candidate<C>>
    where
        E: PartialEq,
        S: AsRef<[E]>,
    {
        candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                let distance = self.distance_within(query, candidate.as_ref(), max);
                (distance <= max).then_some(Candidate { index, distance })
            })
            .collect()
    }

    /// Exact distance if it is `<= max`, something larger otherwise.
    fn distance_within<E: PartialEq>(&mut self, query: &[E], candidate: &[E], max: C) -> C {
        match max.checked_add(C::ONE) {
            Some(benchmark) => self.distance_bounded(query, candidate, benchmark),
            None => self.distance(query, candidate),
        }
    }
}

/// Parallel [`DistanceEngine::within`]: one engine per rayon worker.
///
/// # Panics
/// Same conditions as [`DistanceEngine::distance`].
#[cfg(feature = "parallel")]
pub fn par_within<C, E, S>(
    weights: crate::Weights<C>,
    query: &[E],
    candidates: &[S],
    max: C,
) -> Vec<Candidate<C>>
where
    C: Cost + Send + Sync,
    E: PartialEq + Sync,
    S: AsRef<[E]> + Sync,
{
    use rayon::prelude::*;

    candidates
        .par_iter()
        .enumerate()
        .map_init(
            || DistanceEngine::with_weights(weights),
            |engine, (index, candidate)| {
                let distance = engine.distance_within(query, candidate.as_ref(), max);
                (distance <= max).then_some(Candidate { index, distance })
            },
        )
        .flatten()
        .collect()
}
