// src/ach/scale.rs
//! Permitted score values per scale, kept as lookup tables.
//!
//! Adding a scale means adding a table and a `ScaleType` arm; the
//! aggregation code never branches on individual values.

use serde::Serialize;

use super::ScaleType;
use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreOption {
    pub value: i32,
    pub label: &'static str,
    pub description: &'static str,
}

const fn opt(value: i32, label: &'static str, description: &'static str) -> ScoreOption {
    ScoreOption {
        value,
        label,
        description,
    }
}

static LOGARITHMIC: [ScoreOption; 11] = [
    opt(13, "Strongly Supports", "Evidence is highly consistent with the hypothesis and hard to explain otherwise"),
    opt(8, "Moderately Supports", "Evidence is clearly consistent with the hypothesis"),
    opt(5, "Slightly Supports", "Evidence is somewhat consistent with the hypothesis"),
    opt(3, "Weakly Supports", "Evidence leans toward the hypothesis"),
    opt(1, "Very Weakly Supports", "Evidence is marginally consistent with the hypothesis"),
    opt(0, "Neutral", "Evidence is irrelevant to or equally consistent with the hypothesis"),
    opt(-1, "Very Weakly Contradicts", "Evidence is marginally inconsistent with the hypothesis"),
    opt(-3, "Weakly Contradicts", "Evidence leans against the hypothesis"),
    opt(-5, "Slightly Contradicts", "Evidence is somewhat inconsistent with the hypothesis"),
    opt(-8, "Moderately Contradicts", "Evidence is clearly inconsistent with the hypothesis"),
    opt(-13, "Strongly Contradicts", "Evidence is highly inconsistent with the hypothesis and hard to reconcile with it"),
];

static LINEAR: [ScoreOption; 11] = [
    opt(5, "Strongly Supports", "Evidence is highly consistent with the hypothesis and hard to explain otherwise"),
    opt(4, "Moderately Supports", "Evidence is clearly consistent with the hypothesis"),
    opt(3, "Slightly Supports", "Evidence is somewhat consistent with the hypothesis"),
    opt(2, "Weakly Supports", "Evidence leans toward the hypothesis"),
    opt(1, "Very Weakly Supports", "Evidence is marginally consistent with the hypothesis"),
    opt(0, "Neutral", "Evidence is irrelevant to or equally consistent with the hypothesis"),
    opt(-1, "Very Weakly Contradicts", "Evidence is marginally inconsistent with the hypothesis"),
    opt(-2, "Weakly Contradicts", "Evidence leans against the hypothesis"),
    opt(-3, "Slightly Contradicts", "Evidence is somewhat inconsistent with the hypothesis"),
    opt(-4, "Moderately Contradicts", "Evidence is clearly inconsistent with the hypothesis"),
    opt(-5, "Strongly Contradicts", "Evidence is highly inconsistent with the hypothesis and hard to reconcile with it"),
];

impl ScaleType {
    pub const ALL: [ScaleType; 2] = [ScaleType::Logarithmic, ScaleType::Linear];

    /// Options ordered from strongest support to strongest contradiction.
    pub fn options(&self) -> &'static [ScoreOption] {
        match self {
            ScaleType::Logarithmic => &LOGARITHMIC,
            ScaleType::Linear => &LINEAR,
        }
    }

    pub fn values(&self) -> impl Iterator<Item = i32> {
        self.options().iter().map(|o| o.value)
    }

    pub fn contains(&self, value: i32) -> bool {
        self.options().iter().any(|o| o.value == value)
    }

    /// Largest absolute value on the scale (13 or 5).
    pub fn max_magnitude(&self) -> i32 {
        self.values().map(i32::abs).max().unwrap_or(0)
    }
}

/// Look up label/description for a raw score.
pub fn get_score_option(value: i32, scale: ScaleType) -> EngineResult<ScoreOption> {
    scale
        .options()
        .iter()
        .find(|o| o.value == value)
        .copied()
        .ok_or(EngineError::InvalidScore { value, scale })
}
