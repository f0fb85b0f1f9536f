use bounded_edit::{distance, distance_bounded, distance_with, DistanceEngine, Weights};
use proptest::prelude::*;

fn full_distance(s: &[u8], t: &[u8], del: u32, ins: u32, sub: u32) -> u32 {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    for i in 1..=n {
        dp[i][0] = dp[i - 1][0] + del;
    }
    for j in 1..=m {
        dp[0][j] = dp[0][j - 1] + ins;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = if s[i - 1] == t[j - 1] { 0 } else { sub };
            let diag = dp[i - 1][j - 1] + cost;
            let up = dp[i - 1][j] + del;
            let left = dp[i][j - 1] + ins;
            dp[i][j] = diag.min(up).min(left);
        }
    }
    dp[n][m]
}

proptest! {
    #[test]
    fn matches_full_dp(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
        let (s, t) = (a.as_bytes(), b.as_bytes());
        prop_assert_eq!(distance(s, t) as u32, full_distance(s, t, 1, 1, 1));
    }

    #[test]
    fn symmetric(a in "[ab]{0,10}", b in "[ab]{0,10}") {
        prop_assert_eq!(distance(a.as_bytes(), b.as_bytes()), distance(b.as_bytes(), a.as_bytes()));
    }

    #[test]
    fn identity(a in "[a-z]{0,16}") {
        prop_assert_eq!(distance(a.as_bytes(), a.as_bytes()), 0);
    }

    #[test]
    fn length_bounds(a in "[abc]{0,12}", b in "[abc]{0,12}") {
        let d = distance(a.as_bytes(), b.as_bytes());
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert!(d <= a.len().max(b.len()));
    }

    #[test]
    fn bounded_exact_below_else_at_least(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}", benchmark in 0usize..14) {
        let (s, t) = (a.as_bytes(), b.as_bytes());
        let exact = distance(s, t);
        let bounded = distance_bounded(s, t, benchmark);
        if exact < benchmark {
            prop_assert_eq!(bounded, exact);
        } else {
            prop_assert!(bounded >= benchmark);
        }
    }

    #[test]
    fn bounded_never_exceeds_exact(a in "[AC]{0,12}", b in "[AC]{0,12}", benchmark in 0usize..14) {
        let (s, t) = (a.as_bytes(), b.as_bytes());
        prop_assert!(distance_bounded(s, t, benchmark) <= distance(s, t));
    }

    #[test]
    fn weighted_matches_full_dp(
        a in "[ACG]{0,10}",
        b in "[ACG]{0,10}",
        del in 0u32..4,
        ins in 0u32..4,
        sub in 0u32..6,
    ) {
        let (s, t) = (a.as_bytes(), b.as_bytes());
        let got = distance_with(s, t, |x: &u8, y: &u8| x == y, del, ins, sub);
        prop_assert_eq!(got, full_distance(s, t, del, ins, sub));
    }

    #[test]
    fn weighted_bounded_exact_below(
        a in "[ACG]{0,10}",
        b in "[ACG]{0,10}",
        del in 1u32..4,
        ins in 1u32..4,
        sub in 1u32..6,
        benchmark in 0u32..30,
    ) {
        let (s, t) = (a.as_bytes(), b.as_bytes());
        let mut engine = DistanceEngine::with_weights(Weights::new(del, ins, sub));
        let exact = full_distance(s, t, del, ins, sub);
        let bounded = engine.distance_bounded(s, t, benchmark);
        if exact < benchmark {
            prop_assert_eq!(bounded, exact);
        } else {
            prop_assert!(bounded >= benchmark);
        }
    }
}
