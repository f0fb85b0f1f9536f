//! Core trait definitions for edit costs.
//!
//! Every distance produced by this crate is expressed in a [`Cost`] type.
//! The engine needs very little from it:
//! - a total order, so the three DP candidates can be compared,
//! - `ZERO` / `ONE` for matches and unit weights,
//! - a `MAX` sentinel standing for "unbounded",
//! - checked arithmetic, so the largest reachable cost can be validated once
//!   before the hot loop runs with plain additions.

use std::fmt::Debug;
use std::ops::Add;

/// Numeric type usable as an edit cost.
///
/// Implemented for the unsigned integer primitives. Signed types are not
/// supported: negative weights break the monotonicity the early exit relies on.
pub trait Cost: Copy + Ord + Debug + Add<Output = Self> {
    /// Cost of a match.
    const ZERO: Self;
    /// Unit weight.
    const ONE: Self;
    /// Largest representable cost; used as "no benchmark".
    const MAX: Self;

    /// Addition returning `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self * len`, returning `None` if the product does not fit.
    fn checked_mul_len(self, len: usize) -> Option<Self>;

    /// `self * len`, clamped to [`Cost::MAX`].
    ///
    /// Inside a computation whose bounds were validated up front this never
    /// clamps.
    #[inline]
    fn saturating_mul_len(self, len: usize) -> Self {
        self.checked_mul_len(len).unwrap_or(Self::MAX)
    }
}

macro_rules! impl_cost {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_mul_len(self, len: usize) -> Option<Self> {
                    if self == 0 || len == 0 {
                        return Some(0);
                    }
                    <$ty>::try_from(len).ok().and_then(|n| self.checked_mul(n))
                }
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::Cost;

    #[test]
    fn scaling_by_zero_never_overflows() {
        assert_eq!(0u8.checked_mul_len(usize::MAX), Some(0));
        assert_eq!(7u8.checked_mul_len(0), Some(0));
    }

    #[test]
    fn scaling_detects_overflow() {
        assert_eq!(2u8.checked_mul_len(127), Some(254));
        assert_eq!(2u8.checked_mul_len(128), None);
        assert_eq!(1u8.checked_mul_len(300), None);
        assert_eq!(2u8.saturating_mul_len(300), u8::MAX);
    }

    #[test]
    fn checked_add_matches_primitive() {
        assert_eq!(Cost::checked_add(250u8, 5), Some(255));
        assert_eq!(Cost::checked_add(250u8, 6), None);
        assert_eq!(Cost::checked_add(1usize, 2), Some(3));
    }
}
