//! Per-operation edit weights.

use crate::error::EditError;
use crate::traits::Cost;

/// Weights of the three edit operations.
///
/// `deletion` removes an element of the source, `insertion` adds an element of
/// the target, `substitution` replaces a source element by a different target
/// element. Matches are free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Weights<C> {
    pub deletion: C,
    pub insertion: C,
    pub substitution: C,
}

impl<C: Cost> Weights<C> {
    pub fn new(deletion: C, insertion: C, substitution: C) -> Self {
        Self {
            deletion,
            insertion,
            substitution,
        }
    }

    /// Classic Levenshtein weights: every operation costs one.
    pub fn unit() -> Self {
        Self::new(C::ONE, C::ONE, C::ONE)
    }

    /// Weights seen from the target's side: deletions become insertions.
    #[inline]
    pub(crate) fn swapped(self) -> Self {
        Self {
            deletion: self.insertion,
            insertion: self.deletion,
            substitution: self.substitution,
        }
    }

    /// Unavoidable cost implied by the length difference alone.
    #[inline]
    pub(crate) fn length_floor(&self, source_len: usize, target_len: usize) -> C {
        if target_len >= source_len {
            self.insertion.saturating_mul_len(target_len - source_len)
        } else {
            self.deletion.saturating_mul_len(source_len - target_len)
        }
    }

    /// Distance between two single, possibly equal, elements.
    #[inline]
    pub(crate) fn single(&self, equal: bool) -> C {
        if equal {
            C::ZERO
        } else {
            // lengths are validated before this is reached, the sum fits
            self.substitution.min(self.deletion + self.insertion)
        }
    }

    /// Reject inputs whose worst-case cost would not fit `C`.
    ///
    /// Every DP cell and every candidate sum the engine forms is bounded by
    /// `(source_len + target_len) * max_weight`.
    pub(crate) fn check_lengths(&self, source_len: usize, target_len: usize) -> Result<(), EditError> {
        let overflow = || EditError::CostOverflow {
            source_len,
            target_len,
        };
        let total = source_len.checked_add(target_len).ok_or_else(overflow)?;
        let heaviest = self.deletion.max(self.insertion).max(self.substitution);
        // at least two steps are formed even for single-element inputs
        heaviest
            .checked_mul_len(total.max(2))
            .map(|_| ())
            .ok_or_else(overflow)
    }
}

impl<C: Cost> Default for Weights<C> {
    fn default() -> Self {
        Self::unit()
    }
}
