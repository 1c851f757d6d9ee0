// Unit tests for the vector and digest scorers.
//
// Covers the properties every scorer has to hold: boundedness, symmetry,
// identity, monotonicity in distance, and dimension enforcement, plus the
// worked scenarios from the scoring docs.

use merek::scoring::digest::digest_score;
use merek::scoring::error::ScoreError;
use merek::scoring::vector::{
    cosine_score, euclidean_distance, euclidean_score, SimilarityMetric, DEFAULT_EUCLIDEAN_DECAY,
};

/// Deterministic pseudo-random vectors in [-1, 1] (LCG), so the property
/// checks below cover more than hand-picked inputs.
fn sample_vectors(count: usize, dim: usize) -> Vec<Vec<f64>> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|_| {
            (0..dim)
                .map(|_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
                })
                .collect()
        })
        .collect()
}

fn metrics() -> [SimilarityMetric; 3] {
    [
        SimilarityMetric::Cosine,
        SimilarityMetric::default(),
        SimilarityMetric::Euclidean { decay: 0.5 },
    ]
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn identical_unit_vectors_score_100_both_ways() {
    let a = [1.0, 0.0, 0.0];
    let b = [1.0, 0.0, 0.0];
    assert_eq!(cosine_score(&a, &b).unwrap(), 100);
    assert_eq!(euclidean_score(&a, &b, DEFAULT_EUCLIDEAN_DECAY).unwrap(), 100);
}

#[test]
fn orthogonal_vectors() {
    let a = [1.0, 0.0];
    let b = [0.0, 1.0];
    assert_eq!(cosine_score(&a, &b).unwrap(), 0);

    let d = euclidean_distance(&a, &b).unwrap();
    assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);
    assert_eq!(euclidean_score(&a, &b, DEFAULT_EUCLIDEAN_DECAY).unwrap(), 87);
}

#[test]
fn digest_half_match() {
    assert_eq!(digest_score("abcd1234", "abcd9999"), 50);
}

// ============================================================
// Boundedness
// ============================================================

#[test]
fn scores_stay_in_range_for_random_vectors() {
    let vectors = sample_vectors(12, 16);
    for metric in metrics() {
        for a in &vectors {
            for b in &vectors {
                let score = metric.score(a, b).unwrap();
                assert!(score <= 100, "{metric} produced {score}");
            }
        }
    }
}

#[test]
fn scores_stay_in_range_for_extreme_magnitudes() {
    let huge = [1e150, -1e150, 1e150];
    let tiny = [1e-150, 1e-150, -1e-150];
    for metric in metrics() {
        assert!(metric.score(&huge, &tiny).unwrap() <= 100);
    }
}

#[test]
fn identity_holds_at_extreme_magnitudes() {
    let vectors = [
        vec![1e150, -1e150, 1e150],
        vec![1e200, 2e200],
        vec![1e-150, 1e-150, -1e-150],
        vec![1e-170, 2e-170, 3e-170],
    ];
    for metric in metrics() {
        for v in &vectors {
            assert_eq!(metric.score(v, v).unwrap(), 100, "{metric} on {v:?}");
        }
    }
}

#[test]
fn cosine_of_anti_parallel_vectors_is_zero() {
    assert_eq!(cosine_score(&[1.0, 2.0, 3.0], &[-1.0, -2.0, -3.0]).unwrap(), 0);
}

// ============================================================
// Symmetry
// ============================================================

#[test]
fn vector_scores_are_symmetric() {
    let vectors = sample_vectors(10, 32);
    for metric in metrics() {
        for a in &vectors {
            for b in &vectors {
                assert_eq!(
                    metric.score(a, b).unwrap(),
                    metric.score(b, a).unwrap(),
                    "{metric} is not symmetric"
                );
            }
        }
    }
}

#[test]
fn digest_score_is_symmetric() {
    let pairs = [
        ("abcd1234", "abcd9999"),
        ("0123456789abcdef", "0123456789abcdee"),
        ("ffff", "ff"),
    ];
    for (a, b) in pairs {
        assert_eq!(digest_score(a, b), digest_score(b, a));
    }
}

// ============================================================
// Identity
// ============================================================

#[test]
fn every_vector_is_identical_to_itself() {
    for v in sample_vectors(20, 768) {
        assert_eq!(euclidean_score(&v, &v, DEFAULT_EUCLIDEAN_DECAY).unwrap(), 100);
        assert_eq!(cosine_score(&v, &v).unwrap(), 100);
    }
}

#[test]
fn zero_vector_identity_only_holds_for_euclidean() {
    let zero = [0.0; 8];
    assert_eq!(euclidean_score(&zero, &zero, DEFAULT_EUCLIDEAN_DECAY).unwrap(), 100);
    assert_eq!(cosine_score(&zero, &zero).unwrap(), 0);
}

#[test]
fn digest_is_identical_to_itself() {
    let digest = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    assert_eq!(digest_score(digest, digest), 100);
}

// ============================================================
// Monotonicity (Euclidean)
// ============================================================

#[test]
fn euclidean_score_never_rises_with_distance() {
    let origin = [0.0, 0.0, 0.0];
    let mut previous = u8::MAX;
    for step in 0..200 {
        let point = [step as f64 * 0.25, 0.0, step as f64 * 0.1];
        let score = euclidean_score(&origin, &point, DEFAULT_EUCLIDEAN_DECAY).unwrap();
        assert!(score <= previous, "score rose at step {step}");
        previous = score;
    }
    assert_eq!(previous, 0);
}

#[test]
fn closer_neighbour_scores_at_least_as_high() {
    let vectors = sample_vectors(15, 8);
    let anchor = &vectors[0];
    for b in &vectors[1..] {
        for c in &vectors[1..] {
            let db = euclidean_distance(anchor, b).unwrap();
            let dc = euclidean_distance(anchor, c).unwrap();
            if db < dc {
                let sb = euclidean_score(anchor, b, DEFAULT_EUCLIDEAN_DECAY).unwrap();
                let sc = euclidean_score(anchor, c, DEFAULT_EUCLIDEAN_DECAY).unwrap();
                assert!(sb >= sc, "d={db} scored {sb}, d={dc} scored {sc}");
            }
        }
    }
}

#[test]
fn cosine_ignores_scale_but_euclidean_does_not() {
    let a = [0.5, 0.5, 0.5];
    let b = [5.0, 5.0, 5.0];
    assert_eq!(cosine_score(&a, &b).unwrap(), 100);
    assert!(euclidean_score(&a, &b, DEFAULT_EUCLIDEAN_DECAY).unwrap() < 100);
}

// ============================================================
// Dimension enforcement
// ============================================================

#[test]
fn mismatched_dimensions_fail_for_both_metrics() {
    let a = vec![0.1; 768];
    let b = vec![0.1; 767];
    for metric in metrics() {
        assert_eq!(
            metric.score(&a, &b).unwrap_err(),
            ScoreError::DimensionMismatch {
                left: 768,
                right: 767
            }
        );
    }
}

#[test]
fn dimension_mismatch_message_names_both_lengths() {
    let err = cosine_score(&[1.0], &[1.0, 2.0]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains('1') && msg.contains('2'), "got: {msg}");
}

#[test]
fn empty_against_non_empty_is_a_mismatch() {
    assert!(matches!(
        cosine_score(&[], &[1.0]),
        Err(ScoreError::DimensionMismatch { left: 0, right: 1 })
    ));
}

// ============================================================
// Digest edge cases
// ============================================================

#[test]
fn empty_digests_score_zero() {
    assert_eq!(digest_score("", ""), 0);
    assert_eq!(digest_score("", "abcd1234"), 0);
}

#[test]
fn digest_scores_stay_in_range() {
    let digests = ["0", "00", "0f0f0f", "ffffffff", "abcdef0123456789"];
    for a in digests {
        for b in digests {
            assert!(digest_score(a, b) <= 100);
        }
    }
}
