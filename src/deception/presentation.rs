// src/deception/presentation.rs
//! Display categories for risk and confidence badges. No analytical content.

use serde::{Deserialize, Serialize};

use super::RiskLevel;
use crate::confidence::ConfidenceLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTone {
    Green,
    Yellow,
    Orange,
    Red,
}

impl DisplayTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayTone::Green => "green",
            DisplayTone::Yellow => "yellow",
            DisplayTone::Orange => "orange",
            DisplayTone::Red => "red",
        }
    }
}

pub fn get_risk_color(level: RiskLevel) -> DisplayTone {
    match level {
        RiskLevel::Low => DisplayTone::Green,
        RiskLevel::Medium => DisplayTone::Yellow,
        RiskLevel::High => DisplayTone::Orange,
        RiskLevel::Critical => DisplayTone::Red,
    }
}

/// Weak confidence is the warning colour; strong confidence is green.
pub fn get_confidence_color(level: ConfidenceLevel) -> DisplayTone {
    match level {
        ConfidenceLevel::Low => DisplayTone::Red,
        ConfidenceLevel::Moderate => DisplayTone::Yellow,
        ConfidenceLevel::High | ConfidenceLevel::VeryHigh => DisplayTone::Green,
    }
}
