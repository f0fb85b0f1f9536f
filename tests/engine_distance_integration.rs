use bounded_edit::{distance, distance_bounded, str_distance, DistanceEngine};

#[test]
fn literal_scenarios() {
    assert_eq!(distance(b"cat", b"rat"), 1);
    assert_eq!(distance(b"parks", b"spark"), 2);
    assert_eq!(distance(b"abcde", b"abcde"), 0);
    assert_eq!(distance(b"abcde", b"abCde"), 1);
    assert_eq!(distance(b"kitten", b"sitting"), 3);
}

#[test]
fn degenerate_scenarios() {
    assert_eq!(str_distance("", ""), 0);
    assert_eq!(str_distance("", "abc"), 3);
    assert_eq!(str_distance("a", "a"), 0);
    assert_eq!(str_distance("a", "b"), 1);
}

#[test]
fn pruned_scenarios_report_the_bound() {
    assert_eq!(distance(b"Michigan", b"Minnesota"), 7);
    assert_eq!(distance_bounded(b"Michigan", b"Minnesota", 3), 3);
    assert_eq!(distance(b"Fifteen", b"Fourteen"), 3);
    assert_eq!(distance_bounded(b"Fifteen", b"Fourteen", 2), 2);
}

#[test]
fn bounded_is_exact_below_benchmark() {
    for benchmark in 4..12 {
        assert_eq!(distance_bounded(b"Fifteen", b"Fourteen", benchmark), 3);
    }
    for benchmark in 0..=3 {
        assert!(distance_bounded(b"Fifteen", b"Fourteen", benchmark) >= benchmark);
    }
}

#[test]
fn one_engine_many_pairs() {
    let pairs: [(&str, &str, usize); 5] = [
        ("cat", "rat", 1),
        ("parks", "spark", 2),
        ("kitten", "sitting", 3),
        ("Michigan", "Minnesota", 7),
        ("", "abc", 3),
    ];
    let mut engine = DistanceEngine::new();
    for (s, t, expected) in pairs {
        assert_eq!(engine.distance(s.as_bytes(), t.as_bytes()), expected, "{s} vs {t}");
        assert_eq!(engine.distance(t.as_bytes(), s.as_bytes()), expected, "{t} vs {s}");
    }
}

#[test]
fn generic_over_element_type() {
    let s = [1u64, 2, 3, 4, 5];
    let t = [1u64, 3, 4, 5, 6];
    assert_eq!(distance(&s, &t), 2);

    let words_a = ["the", "quick", "brown", "fox"];
    let words_b = ["the", "slow", "brown", "dog", "barks"];
    assert_eq!(distance(&words_a, &words_b), 3);
}
