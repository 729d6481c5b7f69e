// src/deception/likelihood.rs
//! Likelihood computation:
//!
//! 1. normalize the 11 raw ratings into risk-oriented units (EVE inversions)
//! 2. average them per category (MOM, POP, MOSES, EVE), each 0..=5
//! 3. overall = round(mean(categories) / 5 * 100)
//! 4. bucket into a `RiskLevel`
//!
//! Confidence is independent of the likelihood value: it only reflects how
//! many criteria the analyst actually moved off their default.

use tracing::debug;

use super::{
    CategoryScores, Criterion, CriterionRisk, DeceptionAssessment, DeceptionCategory,
    DeceptionScores, RiskLevel, MAX_RATING,
};
use crate::config::DeceptionConfig;
use crate::confidence::ConfidenceLevel;
use crate::error::EngineResult;

/// Risk-oriented view of all 11 criteria, in `Criterion::ALL` order.
pub fn risk_vector(scores: &DeceptionScores) -> Vec<CriterionRisk> {
    Criterion::ALL
        .iter()
        .map(|&criterion| {
            let raw = scores.get(criterion);
            CriterionRisk {
                criterion,
                raw,
                risk: criterion.risk_of(raw),
            }
        })
        .collect()
}

/// Per-field risk display: a single 0..=5 risk value through the same buckets as the overall likelihood.
pub fn criterion_risk_level(risk: u8) -> RiskLevel {
    RiskLevel::from_percentage(f64::from(risk) / f64::from(MAX_RATING) * 100.0)
}

pub fn calculate_deception_likelihood(
    scores: &DeceptionScores,
) -> EngineResult<DeceptionAssessment> {
    calculate_deception_likelihood_with(scores, &DeceptionConfig::default())
}

pub fn calculate_deception_likelihood_with(
    scores: &DeceptionScores,
    cfg: &DeceptionConfig,
) -> EngineResult<DeceptionAssessment> {
    scores.validate()?;

    let risks = risk_vector(scores);

    let category_scores = CategoryScores {
        mom: category_mean(&risks, DeceptionCategory::Mom),
        pop: category_mean(&risks, DeceptionCategory::Pop),
        moses: category_mean(&risks, DeceptionCategory::Moses),
        eve: category_mean(&risks, DeceptionCategory::Eve),
    };

    let mean = (category_scores.mom + category_scores.pop + category_scores.moses + category_scores.eve)
        / 4.0;
    let pct = (mean / f64::from(MAX_RATING) * 100.0).round().clamp(0.0, 100.0);
    let overall_likelihood = pct as u8;
    let risk_level = RiskLevel::from_percentage(pct);

    let assessed_criteria = scores.assessed_count();
    let confidence_level =
        ConfidenceLevel::from_breakpoints(assessed_criteria, &cfg.confidence_breakpoints);

    debug!(
        target: "deception",
        likelihood = overall_likelihood,
        risk = risk_level.as_str(),
        mom = category_scores.mom,
        pop = category_scores.pop,
        moses = category_scores.moses,
        eve = category_scores.eve,
        assessed = assessed_criteria,
        "deception likelihood computed"
    );

    Ok(DeceptionAssessment {
        overall_likelihood,
        risk_level,
        category_scores,
        confidence_level,
        assessed_criteria,
        criterion_risks: risks,
    })
}

fn category_mean(risks: &[CriterionRisk], category: DeceptionCategory) -> f64 {
    let (sum, n) = risks
        .iter()
        .filter(|r| r.criterion.category() == category)
        .fold((0u32, 0u32), |(s, n), r| (s + u32::from(r.risk), n + 1));
    if n == 0 {
        0.0
    } else {
        f64::from(sum) / f64::from(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn all(v: u8) -> DeceptionScores {
        let mut s = DeceptionScores::default();
        for c in Criterion::ALL {
            s.set(c, v);
        }
        s
    }

    #[test]
    fn eve_inputs_are_inverted_before_averaging() {
        let s = DeceptionScores {
            internal_consistency: 5,
            external_corroboration: 5,
            anomaly_detection: 5,
            ..Default::default()
        };
        let a = calculate_deception_likelihood(&s).unwrap();
        // risks: 0, 0, 5
        assert!((a.category_scores.eve - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn maximal_risk_is_one_hundred() {
        let mut s = all(5);
        s.internal_consistency = 0;
        s.external_corroboration = 0;
        let a = calculate_deception_likelihood(&s).unwrap();
        assert_eq!(a.overall_likelihood, 100);
        assert_eq!(a.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn minimal_risk_is_zero() {
        let mut s = all(0);
        s.internal_consistency = 5;
        s.external_corroboration = 5;
        let a = calculate_deception_likelihood(&s).unwrap();
        assert_eq!(a.overall_likelihood, 0);
        assert_eq!(a.risk_level, RiskLevel::Low);
    }

    #[test]
    fn defaults_count_as_unassessed() {
        let a = calculate_deception_likelihood(&DeceptionScores::default()).unwrap();
        assert_eq!(a.assessed_criteria, 0);
        assert_eq!(a.confidence_level, ConfidenceLevel::Low);

        let a = calculate_deception_likelihood(&all(3)).unwrap();
        assert_eq!(a.assessed_criteria, 11);
        assert_eq!(a.confidence_level, ConfidenceLevel::VeryHigh);
    }

    #[test]
    fn confidence_is_independent_of_likelihood() {
        let low = calculate_deception_likelihood(&all(1)).unwrap();
        let high = calculate_deception_likelihood(&all(4)).unwrap();
        assert_ne!(low.overall_likelihood, high.overall_likelihood);
        assert_eq!(low.confidence_level, high.confidence_level);
    }

    #[test]
    fn out_of_range_is_rejected_not_clamped() {
        let s = DeceptionScores {
            success_rate: 7,
            ..Default::default()
        };
        assert_eq!(
            calculate_deception_likelihood(&s),
            Err(EngineError::CriterionOutOfRange {
                criterion: Criterion::SuccessRate,
                value: 7
            })
        );
    }

    #[test]
    fn per_field_buckets() {
        assert_eq!(criterion_risk_level(0), RiskLevel::Low);
        assert_eq!(criterion_risk_level(1), RiskLevel::Low);
        assert_eq!(criterion_risk_level(2), RiskLevel::Medium);
        assert_eq!(criterion_risk_level(3), RiskLevel::High);
        assert_eq!(criterion_risk_level(4), RiskLevel::Critical);
    }
}
