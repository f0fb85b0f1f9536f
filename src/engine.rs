//! Row-buffer edit distance engine.
//!
//! This module implements the bounded Levenshtein computation:
//! 1. Normalization: length floor vs. benchmark, affix trimming, small-case
//!    shortcuts, and ordering the operands so the shorter one sizes the row.
//! 2. A row-by-row DP fill over a single reusable buffer that abandons the
//!    scan once every cell of a row, plus the cost its remaining length
//!    difference forces, has reached the benchmark.
//!
//! The engine owns its row buffer and only ever grows it, so repeated calls
//! against one engine allocate at most once per new maximum width.

use crate::error::EditError;
use crate::matrix::{CostMatrix, EditOp};
use crate::traits::Cost;
use crate::utils::{gap_cost, min3, trim_affixes};
use crate::weights::Weights;

/// Reusable edit distance engine for cost type `C`.
///
/// Typical usage:
/// ```
/// use bounded_edit::DistanceEngine;
///
/// let mut engine = DistanceEngine::new();
/// assert_eq!(engine.distance(b"kitten", b"sitting"), 3);
///
/// // True distance is 7; only "at least 3" is reported.
/// assert_eq!(engine.distance_bounded(b"Michigan", b"Minnesota", 3), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceEngine<C = usize> {
    weights: Weights<C>,
    row: Vec<C>,
}

impl DistanceEngine<usize> {
    /// Engine with unit weights and `usize` costs.
    pub fn new() -> Self {
        Self::with_weights(Weights::unit())
    }
}

impl Default for DistanceEngine<usize> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cost> DistanceEngine<C> {
    /// Engine with explicit weights and an empty row buffer.
    pub fn with_weights(weights: Weights<C>) -> Self {
        Self {
            weights,
            row: Vec::new(),
        }
    }

    pub fn weights(&self) -> Weights<C> {
        self.weights
    }

    /// Number of cells the row buffer currently holds.
    pub fn capacity(&self) -> usize {
        self.row.len()
    }

    /// Grow the row buffer to at least `cells` entries. Never shrinks.
    pub fn ensure_capacity(&mut self, cells: usize) -> Result<(), EditError> {
        let held = self.row.len();
        if cells <= held {
            return Ok(());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = held, to = cells, "growing row buffer");
        self.row
            .try_reserve(cells - held)
            .map_err(|source| EditError::AllocationFailed {
                requested: cells,
                source,
            })?;
        self.row.resize(cells, C::ZERO);
        Ok(())
    }

    /// Exact distance under `PartialEq`.
    ///
    /// # Panics
    /// Panics if the inputs are too long for `C` or the row buffer cannot be
    /// allocated. Use [`try_distance_bounded_by`](Self::try_distance_bounded_by)
    /// to handle those cases.
    pub fn distance<E: PartialEq>(&mut self, s: &[E], t: &[E]) -> C {
        fatal(self.try_distance_bounded_by(s, t, None, |a, b| a == b))
    }

    /// Exact distance under a caller-supplied equality.
    ///
    /// # Panics
    /// Same conditions as [`distance`](Self::distance).
    pub fn distance_by<E, F>(&mut self, s: &[E], t: &[E], eq: F) -> C
    where
        F: FnMut(&E, &E) -> bool,
    {
        fatal(self.try_distance_bounded_by(s, t, None, eq))
    }

    /// Distance if it is below `benchmark`, otherwise some value `>= benchmark`.
    ///
    /// A result at or above the benchmark only means "not closer than the
    /// benchmark"; it is not an exact measurement.
    ///
    /// # Panics
    /// Same conditions as [`distance`](Self::distance).
    pub fn distance_bounded<E: PartialEq>(&mut self, s: &[E], t: &[E], benchmark: C) -> C {
        fatal(self.try_distance_bounded_by(s, t, Some(benchmark), |a, b| a == b))
    }

    /// [`distance_bounded`](Self::distance_bounded) with a custom equality.
    ///
    /// # Panics
    /// Same conditions as [`distance`](Self::distance).
    pub fn distance_bounded_by<E, F>(&mut self, s: &[E], t: &[E], benchmark: C, eq: F) -> C
    where
        F: FnMut(&E, &E) -> bool,
    {
        fatal(self.try_distance_bounded_by(s, t, Some(benchmark), eq))
    }

    /// Fallible core entry point; every other distance method funnels here.
    ///
    /// `benchmark: None` computes the exact distance. `eq` is always called
    /// as `eq(source_element, target_element)`.
    pub fn try_distance_bounded_by<E, F>(
        &mut self,
        s: &[E],
        t: &[E],
        benchmark: Option<C>,
        mut eq: F,
    ) -> Result<C, EditError>
    where
        F: FnMut(&E, &E) -> bool,
    {
        let weights = self.weights;
        weights.check_lengths(s.len(), t.len())?;

        let floor = weights.length_floor(s.len(), t.len());
        if let Some(benchmark) = benchmark {
            if benchmark < floor {
                return Ok(floor);
            }
        }

        let (s, t) = trim_affixes(s, t, &mut eq);
        if s.is_empty() {
            return Ok(weights.insertion.saturating_mul_len(t.len()));
        }
        if t.is_empty() {
            return Ok(weights.deletion.saturating_mul_len(s.len()));
        }
        if s.len() == 1 && t.len() == 1 {
            return Ok(weights.single(eq(&s[0], &t[0])));
        }

        let benchmark = benchmark.unwrap_or(C::MAX);
        if s.len() <= t.len() {
            self.fill_rows(t, s, benchmark, weights, |long, short| eq(short, long))
        } else {
            self.fill_rows(s, t, benchmark, weights.swapped(), |long, short| eq(long, short))
        }
    }

    /// Row-wise DP with `long` driving the outer loop and `short` sizing the
    /// buffer.
    ///
    /// `weights` are expressed with `short` as the source: `insertion` steps
    /// along `long`, `deletion` steps along `short`.
    fn fill_rows<E, F>(
        &mut self,
        long: &[E],
        short: &[E],
        benchmark: C,
        weights: Weights<C>,
        mut matches: F,
    ) -> Result<C, EditError>
    where
        F: FnMut(&E, &E) -> bool,
    {
        let width = short.len();
        let height = long.len();
        let cells = width.checked_add(1).ok_or(EditError::CapacityOverflow {
            rows: 1,
            cols: width,
        })?;
        self.ensure_capacity(cells)?;

        let long_step = weights.insertion;
        let short_step = weights.deletion;
        let row = &mut self.row[..cells];
        for (y, cell) in row.iter_mut().enumerate() {
            *cell = short_step.saturating_mul_len(y);
        }

        for (x, long_el) in (1..=height).zip(long) {
            let mut diagonal = row[0];
            row[0] = long_step.saturating_mul_len(x);
            let mut row_floor = row[0] + gap_cost(height - x, width, long_step, short_step);

            for (y, short_el) in (1..=width).zip(short) {
                let substitute = if matches(long_el, short_el) {
                    diagonal
                } else {
                    diagonal + weights.substitution
                };
                let along_long = row[y] + long_step;
                let along_short = row[y - 1] + short_step;
                diagonal = row[y];
                row[y] = min3(substitute, along_short, along_long);
                let reachable = row[y] + gap_cost(height - x, width - y, long_step, short_step);
                row_floor = row_floor.min(reachable);
            }

            // Every path to the last cell crosses this row, so none can end
            // below the row floor.
            if row_floor >= benchmark {
                #[cfg(feature = "tracing")]
                tracing::trace!(row = x, rows = height, floor = ?row_floor, "benchmark reached");
                return Ok(row_floor);
            }
        }

        Ok(row[width])
    }

    /// Edit script turning `s` into `t` under `PartialEq`.
    ///
    /// # Panics
    /// Panics if the `(|s|+1) x (|t|+1)` matrix cannot be sized or allocated.
    pub fn edit_path<E: PartialEq>(&self, s: &[E], t: &[E]) -> Vec<EditOp> {
        self.edit_path_by(s, t, |a, b| a == b)
    }

    /// [`edit_path`](Self::edit_path) with a custom equality.
    ///
    /// # Panics
    /// Same conditions as [`edit_path`](Self::edit_path).
    pub fn edit_path_by<E, F>(&self, s: &[E], t: &[E], eq: F) -> Vec<EditOp>
    where
        F: FnMut(&E, &E) -> bool,
    {
        fatal(self.try_edit_path_by(s, t, eq)).1
    }

    /// Exact distance and an optimal edit script, via the full matrix.
    ///
    /// Does not touch the row buffer and never prunes.
    pub fn try_edit_path_by<E, F>(&self, s: &[E], t: &[E], mut eq: F) -> Result<(C, Vec<EditOp>), EditError>
    where
        F: FnMut(&E, &E) -> bool,
    {
        let matrix = CostMatrix::fill(s, t, self.weights, &mut eq)?;
        let ops = matrix.reconstruct_path(s, t, &mut eq);
        Ok((matrix.distance(), ops))
    }
}

fn fatal<T>(result: Result<T, EditError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("edit distance: {err}"),
    }
}
