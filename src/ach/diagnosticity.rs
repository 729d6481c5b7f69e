// src/ach/diagnosticity.rs
//! Evidence diagnosticity: how well a single evidence item separates the hypotheses.
//!
//! Evidence that scores the same against every hypothesis tells the analyst
//! nothing, however strong it is. The spread between its highest and lowest
//! score is what discriminates.

use serde::Serialize;
use std::collections::HashSet;

use super::{validate_scores, AchScore, EvidenceItem, Hypothesis, ScaleType, MAX_CREDIBILITY};
use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceDiagnosticity {
    pub evidence_id: String,
    /// `(max - min) / (2 * max_magnitude)` over the evidence's scores, in 0..=1.
    pub diagnosticity: f64,
    /// `diagnosticity * credibility / 13`; equals `diagnosticity` when credibility is unevaluated.
    pub credibility_adjusted: f64,
    pub scored_hypotheses: usize,
}

/// Rank evidence items by how strongly they discriminate between hypotheses.
/// Only cells belonging to the given hypotheses are considered.
pub fn evidence_diagnosticity(
    evidence: &[EvidenceItem],
    hypotheses: &[Hypothesis],
    scores: &[AchScore],
    scale: ScaleType,
) -> EngineResult<Vec<EvidenceDiagnosticity>> {
    validate_scores(scores, scale)?;

    let known: HashSet<&str> = hypotheses.iter().map(|h| h.id.as_str()).collect();
    let span = f64::from(2 * scale.max_magnitude());

    let mut out = Vec::with_capacity(evidence.len());
    for item in evidence {
        let credibility = match item.credibility_score {
            Some(c) if (1..=MAX_CREDIBILITY).contains(&c) => {
                f64::from(c) / f64::from(MAX_CREDIBILITY)
            }
            Some(c) => return Err(EngineError::InvalidCredibility { value: c }),
            None => 1.0,
        };

        let mut cells = scores
            .iter()
            .filter(|s| s.evidence_id == item.id && known.contains(s.hypothesis_id.as_str()))
            .map(|s| s.score)
            .peekable();

        let (count, diagnosticity) = if cells.peek().is_none() {
            (0, 0.0)
        } else {
            let (mut lo, mut hi, mut n) = (i32::MAX, i32::MIN, 0usize);
            for v in cells {
                lo = lo.min(v);
                hi = hi.max(v);
                n += 1;
            }
            (n, f64::from(hi - lo) / span)
        };

        out.push(EvidenceDiagnosticity {
            evidence_id: item.id.clone(),
            diagnosticity,
            credibility_adjusted: diagnosticity * credibility,
            scored_hypotheses: count,
        });
    }

    out.sort_by(|a, b| b.diagnosticity.total_cmp(&a.diagnosticity));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_drives_diagnosticity() {
        let hyps = vec![Hypothesis::new("a", "A"), Hypothesis::new("b", "B")];
        let ev = vec![
            EvidenceItem::new("flat", "consistent with everything"),
            EvidenceItem::new("sharp", "splits hypotheses").with_credibility(13),
            EvidenceItem::new("weak", "splits, poor source").with_credibility(4),
            EvidenceItem::new("unscored", "nobody rated it"),
        ];
        let scores = vec![
            AchScore::new("a", "flat", 5),
            AchScore::new("b", "flat", 5),
            AchScore::new("a", "sharp", 13),
            AchScore::new("b", "sharp", -13),
            AchScore::new("a", "weak", 8),
            AchScore::new("b", "weak", -5),
        ];
        let out = evidence_diagnosticity(&ev, &hyps, &scores, ScaleType::Logarithmic).unwrap();

        assert_eq!(out[0].evidence_id, "sharp");
        assert!((out[0].diagnosticity - 1.0).abs() < 1e-12);
        assert!((out[0].credibility_adjusted - 1.0).abs() < 1e-12);

        let weak = out.iter().find(|d| d.evidence_id == "weak").unwrap();
        assert!((weak.diagnosticity - 13.0 / 26.0).abs() < 1e-12);
        assert!(weak.credibility_adjusted < weak.diagnosticity);

        let flat = out.iter().find(|d| d.evidence_id == "flat").unwrap();
        assert_eq!(flat.diagnosticity, 0.0);
        assert_eq!(flat.scored_hypotheses, 2);

        let unscored = out.iter().find(|d| d.evidence_id == "unscored").unwrap();
        assert_eq!(unscored.scored_hypotheses, 0);
    }

    #[test]
    fn out_of_range_credibility_is_an_error() {
        let ev = vec![EvidenceItem::new("e", "x").with_credibility(20)];
        let err = evidence_diagnosticity(&ev, &[], &[], ScaleType::Linear).unwrap_err();
        assert_eq!(err, EngineError::InvalidCredibility { value: 20 });
    }
}
