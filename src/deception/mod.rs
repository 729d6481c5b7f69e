// src/deception/mod.rs
//! Deception likelihood scoring over the MOM / POP / MOSES / EVE criteria.
//!
//! Eleven criteria are rated 0..=5 by an analyst (or an assistant writing the
//! same shape). Two of them, internal consistency and external corroboration,
//! are rated the "good" way round: a high rating means LOW risk. The scorer
//! flips those once, at its boundary, so everything downstream works on a
//! uniform risk-oriented vector.

pub mod indicators;
pub mod likelihood;
pub mod presentation;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::confidence::ConfidenceLevel;
use crate::error::{EngineError, EngineResult};

pub use indicators::{generate_key_indicators, KeyIndicators};
pub use likelihood::{
    calculate_deception_likelihood, calculate_deception_likelihood_with, criterion_risk_level,
    risk_vector,
};
pub use presentation::{get_confidence_color, get_risk_color, DisplayTone};

pub const CRITERIA_COUNT: usize = 11;
pub const MAX_RATING: u8 = 5;

/// Raw analyst ratings, each 0..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeceptionScores {
    // MOM
    pub motive: u8,
    pub opportunity: u8,
    pub means: u8,
    // POP
    pub historical_pattern: u8,
    pub sophistication_level: u8,
    pub success_rate: u8,
    // MOSES
    pub source_vulnerability: u8,
    pub manipulation_evidence: u8,
    // EVE (first two inverted: higher = less risk)
    pub internal_consistency: u8,
    pub external_corroboration: u8,
    pub anomaly_detection: u8,
}

impl DeceptionScores {
    pub fn get(&self, criterion: Criterion) -> u8 {
        match criterion {
            Criterion::Motive => self.motive,
            Criterion::Opportunity => self.opportunity,
            Criterion::Means => self.means,
            Criterion::HistoricalPattern => self.historical_pattern,
            Criterion::SophisticationLevel => self.sophistication_level,
            Criterion::SuccessRate => self.success_rate,
            Criterion::SourceVulnerability => self.source_vulnerability,
            Criterion::ManipulationEvidence => self.manipulation_evidence,
            Criterion::InternalConsistency => self.internal_consistency,
            Criterion::ExternalCorroboration => self.external_corroboration,
            Criterion::AnomalyDetection => self.anomaly_detection,
        }
    }

    pub fn set(&mut self, criterion: Criterion, value: u8) {
        let slot = match criterion {
            Criterion::Motive => &mut self.motive,
            Criterion::Opportunity => &mut self.opportunity,
            Criterion::Means => &mut self.means,
            Criterion::HistoricalPattern => &mut self.historical_pattern,
            Criterion::SophisticationLevel => &mut self.sophistication_level,
            Criterion::SuccessRate => &mut self.success_rate,
            Criterion::SourceVulnerability => &mut self.source_vulnerability,
            Criterion::ManipulationEvidence => &mut self.manipulation_evidence,
            Criterion::InternalConsistency => &mut self.internal_consistency,
            Criterion::ExternalCorroboration => &mut self.external_corroboration,
            Criterion::AnomalyDetection => &mut self.anomaly_detection,
        };
        *slot = value;
    }

    /// Every field must be in 0..=5; out-of-range values are reported, never clamped.
    pub fn validate(&self) -> EngineResult<()> {
        for criterion in Criterion::ALL {
            let value = self.get(criterion);
            if value > MAX_RATING {
                return Err(EngineError::CriterionOutOfRange { criterion, value });
            }
        }
        Ok(())
    }

    /// Number of criteria moved away from their default (unassessed) value.
    pub fn assessed_count(&self) -> usize {
        let neutral = DeceptionScores::default();
        Criterion::ALL
            .iter()
            .filter(|c| self.get(**c) != neutral.get(**c))
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Motive,
    Opportunity,
    Means,
    HistoricalPattern,
    SophisticationLevel,
    SuccessRate,
    SourceVulnerability,
    ManipulationEvidence,
    InternalConsistency,
    ExternalCorroboration,
    AnomalyDetection,
}

impl Criterion {
    pub const ALL: [Criterion; CRITERIA_COUNT] = [
        Criterion::Motive,
        Criterion::Opportunity,
        Criterion::Means,
        Criterion::HistoricalPattern,
        Criterion::SophisticationLevel,
        Criterion::SuccessRate,
        Criterion::SourceVulnerability,
        Criterion::ManipulationEvidence,
        Criterion::InternalConsistency,
        Criterion::ExternalCorroboration,
        Criterion::AnomalyDetection,
    ];

    pub fn category(&self) -> DeceptionCategory {
        use Criterion::*;
        match self {
            Motive | Opportunity | Means => DeceptionCategory::Mom,
            HistoricalPattern | SophisticationLevel | SuccessRate => DeceptionCategory::Pop,
            SourceVulnerability | ManipulationEvidence => DeceptionCategory::Moses,
            InternalConsistency | ExternalCorroboration | AnomalyDetection => {
                DeceptionCategory::Eve
            }
        }
    }

    /// True when a HIGH raw rating means LOW deception risk.
    pub fn is_inverted(&self) -> bool {
        matches!(
            self,
            Criterion::InternalConsistency | Criterion::ExternalCorroboration
        )
    }

    /// Raw rating -> risk-oriented value (0 = no risk, 5 = maximal risk).
    pub fn risk_of(&self, raw: u8) -> u8 {
        if self.is_inverted() {
            MAX_RATING.saturating_sub(raw)
        } else {
            raw
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Criterion::Motive => "motive",
            Criterion::Opportunity => "opportunity",
            Criterion::Means => "means",
            Criterion::HistoricalPattern => "historicalPattern",
            Criterion::SophisticationLevel => "sophisticationLevel",
            Criterion::SuccessRate => "successRate",
            Criterion::SourceVulnerability => "sourceVulnerability",
            Criterion::ManipulationEvidence => "manipulationEvidence",
            Criterion::InternalConsistency => "internalConsistency",
            Criterion::ExternalCorroboration => "externalCorroboration",
            Criterion::AnomalyDetection => "anomalyDetection",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Motive => "Motive",
            Criterion::Opportunity => "Opportunity",
            Criterion::Means => "Means",
            Criterion::HistoricalPattern => "Historical pattern",
            Criterion::SophisticationLevel => "Sophistication level",
            Criterion::SuccessRate => "Success rate",
            Criterion::SourceVulnerability => "Source vulnerability",
            Criterion::ManipulationEvidence => "Manipulation evidence",
            Criterion::InternalConsistency => "Internal consistency",
            Criterion::ExternalCorroboration => "External corroboration",
            Criterion::AnomalyDetection => "Anomaly detection",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeceptionCategory {
    Mom,
    Pop,
    Moses,
    Eve,
}

impl DeceptionCategory {
    pub fn long_name(&self) -> &'static str {
        match self {
            DeceptionCategory::Mom => "Motive, Opportunity, and Means",
            DeceptionCategory::Pop => "Patterns of Practice",
            DeceptionCategory::Moses => "My Own Sources (vulnerability)",
            DeceptionCategory::Eve => "Evaluation of Evidence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// `<25 LOW`, `<50 MEDIUM`, `<75 HIGH`, otherwise CRITICAL.
    pub fn from_percentage(pct: f64) -> Self {
        if pct < 25.0 {
            RiskLevel::Low
        } else if pct < 50.0 {
            RiskLevel::Medium
        } else if pct < 75.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// Category averages, each in 0..=5 and risk-oriented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub mom: f64,
    pub pop: f64,
    pub moses: f64,
    pub eve: f64,
}

impl CategoryScores {
    pub fn get(&self, category: DeceptionCategory) -> f64 {
        match category {
            DeceptionCategory::Mom => self.mom,
            DeceptionCategory::Pop => self.pop,
            DeceptionCategory::Moses => self.moses,
            DeceptionCategory::Eve => self.eve,
        }
    }
}

/// One criterion after risk normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionRisk {
    pub criterion: Criterion,
    pub raw: u8,
    pub risk: u8,
}

/// Derived projection of a `DeceptionScores` snapshot. Never stored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeceptionAssessment {
    /// Integer percentage, 0..=100.
    pub overall_likelihood: u8,
    pub risk_level: RiskLevel,
    pub category_scores: CategoryScores,
    pub confidence_level: ConfidenceLevel,
    pub assessed_criteria: usize,
    /// All 11 criteria in `Criterion::ALL` order.
    pub criterion_risks: Vec<CriterionRisk>,
}
