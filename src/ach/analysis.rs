// src/ach/analysis.rs
//! # Hypothesis Analysis
//! Pure aggregation of matrix cells into ranked `HypothesisAnalysis` rows.
//! No I/O, no memoization; callers re-run it on every edit.
//!
//! Policy: rank by credibility/relevance-weighted score. A hypothesis is
//! rejected only when the diagnostic evidence against it is disproportionate
//! to its nearest competitor, never just for being last.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::{AchScore, Hypothesis, HypothesisAnalysis, ScaleType};
use crate::config::AchConfig;
use crate::confidence::ConfidenceLevel;
use crate::error::{EngineError, EngineResult};

/// Check scale membership, weight ranges and the one-score-per-cell invariant.
pub fn validate_scores(scores: &[AchScore], scale: ScaleType) -> EngineResult<()> {
    let mut seen: HashSet<(&str, &str)> = HashSet::with_capacity(scores.len());
    for s in scores {
        if !scale.contains(s.score) {
            return Err(EngineError::InvalidScore {
                value: s.score,
                scale,
            });
        }
        s.weight.validate()?;
        if !seen.insert((s.hypothesis_id.as_str(), s.evidence_id.as_str())) {
            return Err(EngineError::DuplicateScore {
                hypothesis_id: s.hypothesis_id.clone(),
                evidence_id: s.evidence_id.clone(),
            });
        }
    }
    Ok(())
}

/// Analyze with the built-in defaults (2x rejection multiple).
pub fn analyze_hypotheses(
    hypotheses: &[Hypothesis],
    scores: &[AchScore],
    scale: ScaleType,
) -> EngineResult<Vec<HypothesisAnalysis>> {
    analyze_hypotheses_with(hypotheses, scores, scale, &AchConfig::default())
}

pub fn analyze_hypotheses_with(
    hypotheses: &[Hypothesis],
    scores: &[AchScore],
    scale: ScaleType,
    cfg: &AchConfig,
) -> EngineResult<Vec<HypothesisAnalysis>> {
    validate_scores(scores, scale)?;

    // 1) Group cells by hypothesis (cells for unknown hypotheses are ignored)
    let mut by_hypothesis: HashMap<&str, Vec<&AchScore>> = HashMap::new();
    for s in scores {
        by_hypothesis
            .entry(s.hypothesis_id.as_str())
            .or_default()
            .push(s);
    }

    // 2) Per-hypothesis sums, counts and confidence
    let mut rows: Vec<HypothesisAnalysis> = hypotheses
        .iter()
        .map(|h| {
            let cells = by_hypothesis
                .get(h.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            aggregate(&h.id, cells, cfg)
        })
        .collect();

    // 3) Rank descending by weighted score (stable: ties keep input order)
    rows.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));

    // 4) Rejection against the next-best (i.e. next higher ranked) hypothesis
    for i in 1..rows.len() {
        let next_best = rows[i - 1].weighted_score;
        let rejected = is_rejected(&rows[i], next_best, cfg);
        rows[i].rejection_threshold = rejected;
    }

    debug!(
        target: "ach",
        hypotheses = rows.len(),
        cells = scores.len(),
        %scale,
        rejected = rows.iter().filter(|r| r.rejection_threshold).count(),
        top = rows.first().map(|r| r.hypothesis_id.as_str()).unwrap_or("-"),
        "analyzed hypotheses"
    );

    Ok(rows)
}

fn aggregate(hypothesis_id: &str, cells: &[&AchScore], cfg: &AchConfig) -> HypothesisAnalysis {
    let mut total_score = 0i32;
    let mut weighted_score = 0.0f64;
    let mut supporting = 0usize;
    let mut contradicting = 0usize;

    for c in cells {
        total_score += c.score;
        weighted_score += f64::from(c.score) * c.weight.combined();
        if c.score > 0 {
            supporting += 1;
        } else if c.score < 0 {
            contradicting += 1;
        }
    }

    HypothesisAnalysis {
        hypothesis_id: hypothesis_id.to_string(),
        total_score,
        weighted_score,
        supporting_evidence: supporting,
        contradicting_evidence: contradicting,
        scored_evidence: cells.len(),
        confidence_level: confidence_for(cells.len(), supporting, contradicting, cfg),
        rejection_threshold: false,
    }
}

/// Confidence grows with the number of scored cells and with sign agreement.
///
/// composite = volume * (0.5 + 0.5 * agreement), where
/// volume    = min(scored / full_evidence_count, 1) and
/// agreement = |supporting - contradicting| / (supporting + contradicting).
fn confidence_for(
    scored: usize,
    supporting: usize,
    contradicting: usize,
    cfg: &AchConfig,
) -> ConfidenceLevel {
    if scored == 0 {
        return ConfidenceLevel::LOWEST;
    }
    let volume = (scored as f64 / cfg.full_evidence_count.max(1) as f64).min(1.0);
    let signed = supporting + contradicting;
    let agreement = if signed == 0 {
        0.0
    } else {
        supporting.abs_diff(contradicting) as f64 / signed as f64
    };
    let composite = volume * (0.5 + 0.5 * agreement);
    ConfidenceLevel::from_breakpoints(composite, &cfg.confidence_breakpoints)
}

fn is_rejected(row: &HypothesisAnalysis, next_best: f64, cfg: &AchConfig) -> bool {
    if row.scored_evidence == 0 || row.weighted_score >= 0.0 {
        return false;
    }
    let reference = next_best.abs().max(cfg.min_rejection_margin);
    row.weighted_score.abs() > cfg.rejection_multiple * reference
}
