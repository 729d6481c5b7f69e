// tests/ach_properties.rs
// Property-style checks for the ACH engine over randomized matrices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sat_scoring_engine::ach::{
    analyze_hypotheses, evidence_diagnosticity, get_score_option, AchScore, EvidenceItem,
    Hypothesis, ScaleType,
};
use sat_scoring_engine::{ConfidenceLevel, ErrorKind};

// --- helpers ---

fn random_matrix(
    rng: &mut StdRng,
    scale: ScaleType,
    n_hyp: usize,
    n_ev: usize,
) -> (Vec<Hypothesis>, Vec<AchScore>) {
    let values: Vec<i32> = scale.values().collect();
    let hyps: Vec<Hypothesis> = (0..n_hyp)
        .map(|i| Hypothesis::new(format!("h{i}"), format!("Hypothesis {i}")))
        .collect();

    let mut scores = Vec::new();
    for h in &hyps {
        for e in 0..n_ev {
            // leave some cells unscored
            if rng.random_range(0..4) == 0 {
                continue;
            }
            let v = values[rng.random_range(0..values.len())];
            scores.push(
                AchScore::new(h.id.clone(), format!("e{e}"), v)
                    .weighted(rng.random_range(1..=5), rng.random_range(1..=5)),
            );
        }
    }
    (hyps, scores)
}

// --- scale lookups ---

#[test]
fn score_option_round_trips_and_rejects_everything_else() {
    for scale in ScaleType::ALL {
        for v in -20..=20 {
            match get_score_option(v, scale) {
                Ok(opt) => {
                    assert!(scale.contains(v));
                    assert_eq!(opt.value, v);
                }
                Err(e) => {
                    assert!(!scale.contains(v));
                    assert_eq!(e.kind(), ErrorKind::InvalidScore);
                }
            }
        }
    }
}

// --- aggregation properties ---

#[test]
fn output_is_sorted_and_counts_are_bounded() {
    let mut rng = StdRng::seed_from_u64(0xAC40);
    for round in 0..200 {
        let scale = ScaleType::ALL[round % 2];
        let (hyps, scores) = random_matrix(&mut rng, scale, 1 + round % 6, 1 + round % 9);
        let out = analyze_hypotheses(&hyps, &scores, scale).unwrap();

        assert_eq!(out.len(), hyps.len());
        for w in out.windows(2) {
            assert!(
                w[0].weighted_score >= w[1].weighted_score,
                "not sorted in round {round}"
            );
        }

        for r in &out {
            let cells: Vec<_> = scores
                .iter()
                .filter(|s| s.hypothesis_id == r.hypothesis_id)
                .collect();
            assert_eq!(r.scored_evidence, cells.len());
            assert!(r.supporting_evidence + r.contradicting_evidence <= cells.len());

            let has_neutral = cells.iter().any(|c| c.score == 0);
            if !has_neutral {
                assert_eq!(r.supporting_evidence + r.contradicting_evidence, cells.len());
            }

            if cells.is_empty() {
                assert!(!r.rejection_threshold);
                assert_eq!(r.weighted_score, 0.0);
                assert_eq!(r.confidence_level, ConfidenceLevel::LOWEST);
            }

            if r.rejection_threshold {
                assert!(r.weighted_score < 0.0);
            }
        }
    }
}

#[test]
fn low_weight_cells_contribute_proportionally_less() {
    let hyps = vec![Hypothesis::new("a", "A"), Hypothesis::new("b", "B")];
    let scores = vec![
        AchScore::new("a", "e1", 8).weighted(5, 5),
        AchScore::new("b", "e1", 8).weighted(1, 5),
    ];
    let out = analyze_hypotheses(&hyps, &scores, ScaleType::Logarithmic).unwrap();
    assert_eq!(out[0].hypothesis_id, "a");
    assert!((out[0].weighted_score - 8.0).abs() < 1e-9);
    assert!((out[1].weighted_score - 1.6).abs() < 1e-9);
    // unweighted totals are equal
    assert_eq!(out[0].total_score, out[1].total_score);
}

#[test]
fn recomputation_reflects_every_edit() {
    let hyps = vec![Hypothesis::new("a", "A"), Hypothesis::new("b", "B")];
    let mut scores = vec![AchScore::new("a", "e1", 3), AchScore::new("b", "e1", -3)];

    let first = analyze_hypotheses(&hyps, &scores, ScaleType::Linear).unwrap();
    assert_eq!(first[0].hypothesis_id, "a");

    scores[0].score = -5;
    scores[1].score = 2;
    let second = analyze_hypotheses(&hyps, &scores, ScaleType::Linear).unwrap();
    assert_eq!(second[0].hypothesis_id, "b");
    assert!(second[1].rejection_threshold);
}

#[test]
fn diagnosticity_prefers_discriminating_evidence() {
    let hyps = vec![
        Hypothesis::new("attack", "Planned attack"),
        Hypothesis::new("exercise", "Routine exercise"),
    ];
    let evidence = vec![
        EvidenceItem::new("mobilization", "Reserve call-up").with_credibility(12),
        EvidenceItem::new("troops", "Troops near the border"),
    ];
    let scores = vec![
        AchScore::new("attack", "mobilization", 13),
        AchScore::new("exercise", "mobilization", -8),
        AchScore::new("attack", "troops", 5),
        AchScore::new("exercise", "troops", 5),
    ];
    let out = evidence_diagnosticity(&evidence, &hyps, &scores, ScaleType::Logarithmic).unwrap();
    assert_eq!(out[0].evidence_id, "mobilization");
    assert!(out[0].diagnosticity > 0.7);
    assert_eq!(out[1].diagnosticity, 0.0);
}
