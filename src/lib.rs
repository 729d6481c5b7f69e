// src/lib.rs
//! Structured analytic scoring engine.
//!
//! Three pure components:
//! - [`ach`]: evidence-vs-hypothesis consistency matrices (Analysis of Competing Hypotheses)
//! - [`deception`]: MOM / POP / MOSES / EVE deception likelihood scoring
//! - [`calibration`]: replay against historical ground-truth scenarios
//!
//! No function here performs I/O (except config loading) or keeps state
//! between calls; every result is a projection of the inputs passed in.

pub mod ach;
pub mod calibration;
pub mod confidence;
pub mod config;
pub mod deception;
pub mod error;

// ---- Re-exports for stable public API ----
pub use crate::ach::{
    analyze_hypotheses, calculate_effective_strength, get_score_option, AchScore, EvidenceItem,
    EvidenceWeight, Hypothesis, HypothesisAnalysis, ScaleType, ScoreOption,
};
pub use crate::calibration::{validate_analysis, AccuracyVerdict, TestScenario, ValidationResult};
pub use crate::confidence::ConfidenceLevel;
pub use crate::config::EngineConfig;
pub use crate::deception::{
    calculate_deception_likelihood, generate_key_indicators, get_confidence_color, get_risk_color,
    DeceptionAssessment, DeceptionScores, RiskLevel,
};
pub use crate::error::{EngineError, EngineResult, ErrorKind};
