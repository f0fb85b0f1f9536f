//! Full-matrix edit distance and edit script reconstruction.
//!
//! Unlike the row engine this keeps every cell of the
//! `(|s|+1) x (|t|+1)` table, so an optimal path can be walked back from the
//! bottom-right corner. It never prunes and is meant for callers that want
//! the script, not just the number.

use crate::error::EditError;
use crate::traits::Cost;
use crate::utils::min3;
use crate::weights::Weights;

/// One step of an edit script, read left to right over the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Source and target element are equal; copy it.
    Keep,
    /// Replace the source element by the target element.
    Substitute,
    /// Insert the next target element.
    Insert,
    /// Drop the next source element.
    Remove,
}

/// Dense cost table, row `i` for source prefix length, column `j` for target
/// prefix length.
#[derive(Clone, Debug)]
pub struct CostMatrix<C> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
    weights: Weights<C>,
}

impl<C: Cost> CostMatrix<C> {
    /// Fill the full table for `s` -> `t`. `eq` is called as
    /// `eq(source_element, target_element)`.
    pub fn fill<E, F>(s: &[E], t: &[E], weights: Weights<C>, eq: &mut F) -> Result<Self, EditError>
    where
        F: FnMut(&E, &E) -> bool,
    {
        weights.check_lengths(s.len(), t.len())?;
        let overflow = || EditError::CapacityOverflow {
            rows: s.len(),
            cols: t.len(),
        };
        let rows = s.len().checked_add(1).ok_or_else(overflow)?;
        let cols = t.len().checked_add(1).ok_or_else(overflow)?;
        let total = rows.checked_mul(cols).ok_or_else(overflow)?;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_cost_matrix", rows, cols);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|source| EditError::AllocationFailed {
                requested: total,
                source,
            })?;
        cells.resize(total, C::ZERO);

        for i in 0..rows {
            cells[i * cols] = weights.deletion.saturating_mul_len(i);
        }
        for j in 0..cols {
            cells[j] = weights.insertion.saturating_mul_len(j);
        }
        for i in 1..rows {
            for j in 1..cols {
                let diag = cells[(i - 1) * cols + (j - 1)];
                let substitute = if eq(&s[i - 1], &t[j - 1]) {
                    diag
                } else {
                    diag + weights.substitution
                };
                let insert = cells[i * cols + (j - 1)] + weights.insertion;
                let remove = cells[(i - 1) * cols + j] + weights.deletion;
                cells[i * cols + j] = min3(substitute, insert, remove);
            }
        }

        Ok(Self {
            rows,
            cols,
            cells,
            weights,
        })
    }

    /// Cost of turning `s[..i]` into `t[..j]`.
    ///
    /// # Panics
    /// Panics if `i > |s|` or `j > |t|`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> C {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.cells[i * self.cols + j]
    }

    /// Distance between the full sequences.
    pub fn distance(&self) -> C {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Walk back from the bottom-right cell and return the edit script in
    /// execution order. `s`, `t` and `eq` must be the ones the matrix was
    /// filled with.
    ///
    /// At each cell the predecessor is the first of diagonal, left
    /// (insertion), up (deletion) whose value plus step cost equals the cell.
    ///
    /// # Panics
    /// Panics if `eq` answers differently than it did during [`fill`](Self::fill)
    /// for the same pair of elements; the predicate must be deterministic.
    pub fn reconstruct_path<E, F>(&self, s: &[E], t: &[E], eq: &mut F) -> Vec<EditOp>
    where
        F: FnMut(&E, &E) -> bool,
    {
        debug_assert_eq!(s.len() + 1, self.rows);
        debug_assert_eq!(t.len() + 1, self.cols);

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("backtrack_edit_path", rows = self.rows, cols = self.cols);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let w = self.weights;
        let mut i = self.rows - 1;
        let mut j = self.cols - 1;
        let mut rev_ops = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            let here = self.get(i, j);
            if i > 0 && j > 0 {
                let equal = eq(&s[i - 1], &t[j - 1]);
                let step = if equal { C::ZERO } else { w.substitution };
                if self.get(i - 1, j - 1) + step == here {
                    rev_ops.push(if equal { EditOp::Keep } else { EditOp::Substitute });
                    i -= 1;
                    j -= 1;
                    continue;
                }
            }
            if j > 0 && self.get(i, j - 1) + w.insertion == here {
                rev_ops.push(EditOp::Insert);
                j -= 1;
            } else if i > 0 && self.get(i - 1, j) + w.deletion == here {
                rev_ops.push(EditOp::Remove);
                i -= 1;
            } else {
                unreachable!("cell ({i}, {j}) has no predecessor realising its cost");
            }
        }

        rev_ops.reverse();
        rev_ops
    }
}

/// Replay `ops` against `s`, drawing inserted and substituted elements from
/// `t`.
///
/// Returns `None` if the script does not consume both inputs exactly.
pub fn apply_edits<E: Clone>(ops: &[EditOp], s: &[E], t: &[E]) -> Option<Vec<E>> {
    let mut out = Vec::with_capacity(t.len());
    let (mut i, mut j) = (0usize, 0usize);
    for op in ops {
        match op {
            EditOp::Keep => {
                out.push(s.get(i)?.clone());
                t.get(j)?;
                i += 1;
                j += 1;
            }
            EditOp::Substitute => {
                s.get(i)?;
                out.push(t.get(j)?.clone());
                i += 1;
                j += 1;
            }
            EditOp::Insert => {
                out.push(t.get(j)?.clone());
                j += 1;
            }
            EditOp::Remove => {
                s.get(i)?;
                i += 1;
            }
        }
    }
    (i == s.len() && j == t.len()).then_some(out)
}

/// Total weight of an edit script.
pub fn script_cost<C: Cost>(ops: &[EditOp], weights: &Weights<C>) -> C {
    ops.iter().fold(C::ZERO, |acc, op| match op {
        EditOp::Keep => acc,
        EditOp::Substitute => acc + weights.substitution,
        EditOp::Insert => acc + weights.insertion,
        EditOp::Remove => acc + weights.deletion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str, t: &str) -> (usize, Vec<EditOp>) {
        let m = CostMatrix::fill(s.as_bytes(), t.as_bytes(), Weights::unit(), &mut |a: &u8, b: &u8| a == b)
            .unwrap();
        let ops = m.reconstruct_path(s.as_bytes(), t.as_bytes(), &mut |a: &u8, b: &u8| a == b);
        (m.distance(), ops)
    }

    #[test]
    fn borders_hold_prefix_lengths() {
        let m = CostMatrix::fill(b"ab", b"xyz", Weights::new(2usize, 3, 1), &mut |a: &u8, b: &u8| a == b)
            .unwrap();
        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.get(2, 0), 4);
        assert_eq!(m.get(0, 3), 9);
    }

    #[test]
    fn kitten_sitting_script() {
        use EditOp::*;
        let (d, ops) = path("kitten", "sitting");
        assert_eq!(d, 3);
        assert_eq!(ops, vec![Substitute, Keep, Keep, Keep, Substitute, Keep, Insert]);
    }

    #[test]
    fn empty_sides() {
        assert_eq!(path("", ""), (0, vec![]));
        assert_eq!(path("", "ab"), (2, vec![EditOp::Insert, EditOp::Insert]));
        assert_eq!(path("ab", ""), (2, vec![EditOp::Remove, EditOp::Remove]));
    }

    #[test]
    fn replay_reproduces_target() {
        for (s, t) in [("parks", "spark"), ("Michigan", "Minnesota"), ("abc", ""), ("", "xyz")] {
            let (d, ops) = path(s, t);
            let out = apply_edits(&ops, s.as_bytes(), t.as_bytes()).unwrap();
            assert_eq!(out, t.as_bytes());
            assert_eq!(script_cost(&ops, &Weights::<usize>::unit()), d);
        }
    }

    #[test]
    #[should_panic(expected = "no predecessor")]
    fn backtrack_with_inconsistent_predicate_panics() {
        let m = CostMatrix::fill(b"ab", b"ab", Weights::<usize>::unit(), &mut |_: &u8, _: &u8| true)
            .unwrap();
        assert_eq!(m.distance(), 0);
        m.reconstruct_path(b"ab", b"ab", &mut |_: &u8, _: &u8| false);
    }

    #[test]
    fn replay_rejects_scripts_that_do_not_fit() {
        assert_eq!(apply_edits(&[EditOp::Keep], b"a", b""), None);
        assert_eq!(apply_edits(&[EditOp::Insert], b"a", b"b"), None);
        assert_eq!(apply_edits::<u8>(&[], b"", b""), Some(vec![]));
    }
}
