//! Assorted helpers shared by the row engine and the full matrix.

use crate::traits::Cost;

/// Strip the longest common prefix, then the longest common suffix.
///
/// Matching affixes contribute nothing to the distance, so the remaining
/// slices have the same edit distance as the originals.
pub fn trim_affixes<'s, 't, E, F>(s: &'s [E], t: &'t [E], eq: &mut F) -> (&'s [E], &'t [E])
where
    F: FnMut(&E, &E) -> bool,
{
    let prefix = s.iter().zip(t).take_while(|&(a, b)| eq(a, b)).count();
    let (s, t) = (&s[prefix..], &t[prefix..]);
    let suffix = s
        .iter()
        .rev()
        .zip(t.iter().rev())
        .take_while(|&(a, b)| eq(a, b))
        .count();
    (&s[..s.len() - suffix], &t[..t.len() - suffix])
}

/// Minimum of the three DP candidates; ties resolve to the earliest argument.
#[inline]
pub(crate) fn min3<C: Ord + Copy>(first: C, second: C, third: C) -> C {
    let mut best = first;
    if second < best {
        best = second;
    }
    if third < best {
        best = third;
    }
    best
}

/// Cheapest way to cover a remaining `long_left x short_left` rectangle,
/// counting only its length difference.
#[inline]
pub(crate) fn gap_cost<C: Cost>(long_left: usize, short_left: usize, long_step: C, short_step: C) -> C {
    if long_left >= short_left {
        long_step.saturating_mul_len(long_left - short_left)
    } else {
        short_step.saturating_mul_len(short_left - long_left)
    }
}
