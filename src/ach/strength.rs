// src/ach/strength.rs
//! Discounting a claimed consistency score by the evidence's own credibility.
//!
//! A "strongly contradicts" rating from an uncorroborated source carries less
//! analytical weight than the same rating from a highly credible one.

use serde::Serialize;

use super::{ScaleType, MAX_CREDIBILITY};
use crate::error::{EngineError, EngineResult};

/// Below this share of the claimed magnitude, credibility materially weakens the evidence.
pub const MATERIAL_WEAKENING_RATIO: f64 = 0.6;
/// At or above this share, the claimed strength is treated as intact.
pub const INTACT_STRENGTH_RATIO: f64 = 0.85;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveStrength {
    pub effective_score: f64,
    pub strength_description: String,
}

/// `effective = claimed * (credibility / 13)`.
pub fn calculate_effective_strength(
    claimed_score: i32,
    evidence_credibility: u8,
    scale: ScaleType,
) -> EngineResult<EffectiveStrength> {
    if !scale.contains(claimed_score) {
        return Err(EngineError::InvalidScore {
            value: claimed_score,
            scale,
        });
    }
    if !(1..=MAX_CREDIBILITY).contains(&evidence_credibility) {
        return Err(EngineError::InvalidCredibility {
            value: evidence_credibility,
        });
    }

    let ratio = f64::from(evidence_credibility) / f64::from(MAX_CREDIBILITY);
    let effective_score = f64::from(claimed_score) * ratio;

    Ok(EffectiveStrength {
        effective_score,
        strength_description: describe(claimed_score, effective_score).to_string(),
    })
}

fn describe(claimed: i32, effective: f64) -> &'static str {
    if claimed == 0 {
        return "Neutral evidence; credibility does not change its diagnostic value";
    }
    let claimed = f64::from(claimed.abs());
    let effective = effective.abs();

    if effective < MATERIAL_WEAKENING_RATIO * claimed {
        "Credibility materially weakens this evidence's diagnostic value"
    } else if effective < INTACT_STRENGTH_RATIO * claimed {
        "Credibility somewhat tempers this evidence's diagnostic value"
    } else {
        "Credibility supports the claimed strength of this evidence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_credibility_keeps_claimed_score() {
        let s = calculate_effective_strength(-13, 13, ScaleType::Logarithmic).unwrap();
        assert!((s.effective_score + 13.0).abs() < 1e-12);
        assert!(s.strength_description.contains("supports the claimed strength"));
    }

    #[test]
    fn low_credibility_materially_weakens() {
        let s = calculate_effective_strength(8, 4, ScaleType::Logarithmic).unwrap();
        assert!((s.effective_score - 8.0 * 4.0 / 13.0).abs() < 1e-12);
        assert!(s.effective_score.abs() < 0.6 * 8.0);
        assert!(s.strength_description.contains("materially weakens"));
    }

    #[test]
    fn mid_credibility_tempers() {
        // 10/13 ~ 0.77
        let s = calculate_effective_strength(-4, 10, ScaleType::Linear).unwrap();
        assert!(s.strength_description.contains("tempers"));
        assert!(s.effective_score < 0.0);
    }

    #[test]
    fn neutral_stays_neutral() {
        let s = calculate_effective_strength(0, 1, ScaleType::Linear).unwrap();
        assert_eq!(s.effective_score, 0.0);
        assert!(s.strength_description.starts_with("Neutral"));
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            calculate_effective_strength(7, 5, ScaleType::Logarithmic),
            Err(EngineError::InvalidScore {
                value: 7,
                scale: ScaleType::Logarithmic
            })
        );
        assert_eq!(
            calculate_effective_strength(5, 0, ScaleType::Linear),
            Err(EngineError::InvalidCredibility { value: 0 })
        );
        assert_eq!(
            calculate_effective_strength(5, 14, ScaleType::Linear),
            Err(EngineError::InvalidCredibility { value: 14 })
        );
    }
}
