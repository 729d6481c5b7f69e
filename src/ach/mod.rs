// src/ach/mod.rs
//! Analysis of Competing Hypotheses (ACH).
//!
//! Analysts rate every piece of evidence against every hypothesis on a fixed
//! consistency scale. This module validates those ratings and projects them
//! into per-hypothesis rankings. Nothing here is cached: every call
//! recomputes from the snapshot it is given.

pub mod analysis;
pub mod diagnosticity;
pub mod scale;
pub mod strength;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::confidence::ConfidenceLevel;
use crate::error::{EngineError, EngineResult};

pub use analysis::{analyze_hypotheses, analyze_hypotheses_with, validate_scores};
pub use diagnosticity::{evidence_diagnosticity, EvidenceDiagnosticity};
pub use scale::{get_score_option, ScoreOption};
pub use strength::{calculate_effective_strength, EffectiveStrength};

/// Highest value on the SATS source-credibility scale.
pub const MAX_CREDIBILITY: u8 = 13;
/// Highest in-matrix credibility/relevance rating.
pub const MAX_WEIGHT_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: String,
    pub text: String,
}

impl Hypothesis {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceItem {
    pub id: String,
    pub text: String,
    /// Independent source reliability, 1..=13. `None` means not evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility_score: Option<u8>,
}

impl EvidenceItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            credibility_score: None,
        }
    }

    pub fn with_credibility(mut self, score: u8) -> Self {
        self.credibility_score = Some(score);
        self
    }
}

/// Consistency scale. Fixed for a whole analysis session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Logarithmic,
    Linear,
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleType::Logarithmic => f.write_str("logarithmic"),
            ScaleType::Linear => f.write_str("linear"),
        }
    }
}

/// In-matrix weighting of one cell. Distinct from the evidence's global credibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceWeight {
    pub credibility: u8,
    pub relevance: u8,
}

impl Default for EvidenceWeight {
    fn default() -> Self {
        Self {
            credibility: MAX_WEIGHT_RATING,
            relevance: MAX_WEIGHT_RATING,
        }
    }
}

impl EvidenceWeight {
    pub fn new(credibility: u8, relevance: u8) -> Self {
        Self {
            credibility,
            relevance,
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("credibility", self.credibility),
            ("relevance", self.relevance),
        ] {
            if !(1..=MAX_WEIGHT_RATING).contains(&value) {
                return Err(EngineError::InvalidWeight { field, value });
            }
        }
        Ok(())
    }

    /// `(credibility * relevance) / 25`, in (0, 1] for valid ratings.
    pub fn combined(&self) -> f64 {
        let max = f64::from(MAX_WEIGHT_RATING);
        f64::from(self.credibility) * f64::from(self.relevance) / (max * max)
    }
}

/// One cell of the matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchScore {
    pub hypothesis_id: String,
    pub evidence_id: String,
    pub score: i32,
    #[serde(default)]
    pub weight: EvidenceWeight,
}

impl AchScore {
    pub fn new(
        hypothesis_id: impl Into<String>,
        evidence_id: impl Into<String>,
        score: i32,
    ) -> Self {
        Self {
            hypothesis_id: hypothesis_id.into(),
            evidence_id: evidence_id.into(),
            score,
            weight: EvidenceWeight::default(),
        }
    }

    pub fn weighted(mut self, credibility: u8, relevance: u8) -> Self {
        self.weight = EvidenceWeight::new(credibility, relevance);
        self
    }
}

/// Derived per-hypothesis projection. Never stored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypothesisAnalysis {
    pub hypothesis_id: String,
    pub total_score: i32,
    pub weighted_score: f64,
    pub supporting_evidence: usize,
    pub contradicting_evidence: usize,
    /// All scored cells, including neutral ones.
    pub scored_evidence: usize,
    pub confidence_level: ConfidenceLevel,
    pub rejection_threshold: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_weight_range() {
        assert!((EvidenceWeight::new(5, 5).combined() - 1.0).abs() < 1e-12);
        assert!((EvidenceWeight::new(1, 1).combined() - 0.04).abs() < 1e-12);
        assert!((EvidenceWeight::new(3, 4).combined() - 0.48).abs() < 1e-12);
    }

    #[test]
    fn weight_validation_names_field() {
        let err = EvidenceWeight::new(3, 0).validate().unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidWeight {
                field: "relevance",
                value: 0
            }
        );
        assert!(EvidenceWeight::new(6, 3).validate().is_err());
        assert!(EvidenceWeight::new(1, 5).validate().is_ok());
    }

    #[test]
    fn score_json_shape() {
        let s = AchScore::new("h1", "e1", -5).weighted(4, 3);
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["hypothesisId"], serde_json::json!("h1"));
        assert_eq!(v["evidenceId"], serde_json::json!("e1"));
        assert_eq!(v["weight"]["credibility"], serde_json::json!(4));

        let parsed: AchScore =
            serde_json::from_str(r#"{"hypothesisId":"h","evidenceId":"e","score":3}"#).unwrap();
        assert_eq!(parsed.weight, EvidenceWeight::default());
    }
}
