//! Engine error types.
//!
//! Every failure is caller-correctable input validation; nothing here is
//! retried or fatal. Out-of-range values are reported, never clamped.

use thiserror::Error;

use crate::ach::ScaleType;
use crate::deception::Criterion;

/// Coarse classification of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A score, weight or rating outside its permitted set.
    InvalidScore,
    /// Calibration lookup for a fixture id that does not exist.
    UnknownScenario,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("score {value} is not a permitted value on the {scale} scale")]
    InvalidScore { value: i32, scale: ScaleType },

    #[error("evidence weight {field} must be in 1..=5, got {value}")]
    InvalidWeight { field: &'static str, value: u8 },

    #[error("evidence credibility must be in 1..=13, got {value}")]
    InvalidCredibility { value: u8 },

    #[error("more than one score for hypothesis `{hypothesis_id}` / evidence `{evidence_id}`")]
    DuplicateScore {
        hypothesis_id: String,
        evidence_id: String,
    },

    #[error("deception criterion {criterion} must be in 0..=5, got {value}")]
    CriterionOutOfRange { criterion: Criterion, value: u8 },

    #[error("likelihood must be in 0..=100, got {value}")]
    LikelihoodOutOfRange { value: u8 },

    #[error("unknown calibration scenario `{id}`")]
    UnknownScenario { id: String },
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::UnknownScenario { .. } => ErrorKind::UnknownScenario,
            _ => ErrorKind::InvalidScore,
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
