// src/calibration/mod.rs
//! Calibration harness: compares computed deception output against the
//! historical scenario fixtures and grades the result.
//!
//! The grading thresholds are a fixed contract, not configuration:
//! - accurate:          likelihood delta <= 15 AND mean criterion delta <= 1.5
//! - good:              likelihood delta <= 25 AND mean criterion delta <= 2.0
//! - needs improvement: everything else

pub mod scenarios;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::config::DeceptionConfig;
use crate::deception::{
    calculate_deception_likelihood_with, Criterion, DeceptionAssessment, DeceptionScores,
    CRITERIA_COUNT,
};
use crate::error::{EngineError, EngineResult};

pub use scenarios::{find_scenario, fixture_version, scenarios, GroundTruth, TestScenario};

pub const ACCURATE_LIKELIHOOD_DELTA: f64 = 15.0;
pub const ACCURATE_AVG_SCORE_DELTA: f64 = 1.5;
pub const GOOD_LIKELIHOOD_DELTA: f64 = 25.0;
pub const GOOD_AVG_SCORE_DELTA: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyVerdict {
    Accurate,
    Good,
    NeedsImprovement,
}

impl AccuracyVerdict {
    pub fn message(&self) -> &'static str {
        match self {
            AccuracyVerdict::Accurate => "Analysis matches the historical ground truth",
            AccuracyVerdict::Good => "Analysis is close to the historical ground truth",
            AccuracyVerdict::NeedsImprovement => {
                "Analysis diverges from the historical ground truth; review the criteria ratings"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub accurate: bool,
    pub likelihood_delta: u8,
    pub score_delta: BTreeMap<Criterion, u8>,
    pub avg_score_delta: f64,
    pub assessment: AccuracyVerdict,
}

/// Grade a pair of deltas against the fixed thresholds. Both bounds are inclusive.
pub fn classify_accuracy(likelihood_delta: f64, avg_score_delta: f64) -> AccuracyVerdict {
    if likelihood_delta <= ACCURATE_LIKELIHOOD_DELTA && avg_score_delta <= ACCURATE_AVG_SCORE_DELTA
    {
        AccuracyVerdict::Accurate
    } else if likelihood_delta <= GOOD_LIKELIHOOD_DELTA && avg_score_delta <= GOOD_AVG_SCORE_DELTA
    {
        AccuracyVerdict::Good
    } else {
        AccuracyVerdict::NeedsImprovement
    }
}

pub fn validate_analysis(
    scenario_id: &str,
    calculated_likelihood: u8,
    calculated_scores: &DeceptionScores,
) -> EngineResult<ValidationResult> {
    let scenario = find_scenario(scenario_id)?;
    if calculated_likelihood > 100 {
        return Err(EngineError::LikelihoodOutOfRange {
            value: calculated_likelihood,
        });
    }
    calculated_scores.validate()?;

    let likelihood_delta = calculated_likelihood.abs_diff(scenario.expected_likelihood);

    let score_delta: BTreeMap<Criterion, u8> = Criterion::ALL
        .iter()
        .map(|&c| {
            (
                c,
                calculated_scores.get(c).abs_diff(scenario.expected_scores.get(c)),
            )
        })
        .collect();
    let total: u32 = score_delta.values().map(|&d| u32::from(d)).sum();
    let avg_score_delta = f64::from(total) / CRITERIA_COUNT as f64;

    let assessment = classify_accuracy(f64::from(likelihood_delta), avg_score_delta);

    Ok(ValidationResult {
        accurate: assessment == AccuracyVerdict::Accurate,
        likelihood_delta,
        score_delta,
        avg_score_delta,
        assessment,
    })
}

/// Outcome of feeding a fixture's expected ratings back through the scorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReplay {
    pub scenario_id: String,
    pub ground_truth: GroundTruth,
    pub expected_likelihood: u8,
    pub assessment: DeceptionAssessment,
    pub validation: ValidationResult,
}

pub fn replay_scenario(scenario_id: &str) -> EngineResult<ScenarioReplay> {
    replay_scenario_with(scenario_id, &DeceptionConfig::default())
}

pub fn replay_scenario_with(
    scenario_id: &str,
    cfg: &DeceptionConfig,
) -> EngineResult<ScenarioReplay> {
    let scenario = find_scenario(scenario_id)?;
    replay(scenario, cfg)
}

fn replay(scenario: &TestScenario, cfg: &DeceptionConfig) -> EngineResult<ScenarioReplay> {
    let assessment = calculate_deception_likelihood_with(&scenario.expected_scores, cfg)?;
    let validation = validate_analysis(
        &scenario.id,
        assessment.overall_likelihood,
        &scenario.expected_scores,
    )?;

    info!(
        target: "calibration",
        scenario = %scenario.id,
        expected = scenario.expected_likelihood,
        calculated = assessment.overall_likelihood,
        delta = validation.likelihood_delta,
        verdict = ?validation.assessment,
        "scenario replayed"
    );

    Ok(ScenarioReplay {
        scenario_id: scenario.id.clone(),
        ground_truth: scenario.ground_truth,
        expected_likelihood: scenario.expected_likelihood,
        assessment,
        validation,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationReport {
    pub fixture_version: u32,
    pub total: usize,
    pub accurate: usize,
    pub good: usize,
    pub needs_improvement: usize,
    pub replays: Vec<ScenarioReplay>,
}

/// Replay every shipped fixture.
pub fn calibration_report() -> EngineResult<CalibrationReport> {
    calibration_report_with(&DeceptionConfig::default())
}

pub fn calibration_report_with(cfg: &DeceptionConfig) -> EngineResult<CalibrationReport> {
    let replays = scenarios()
        .iter()
        .map(|s| replay(s, cfg))
        .collect::<EngineResult<Vec<_>>>()?;

    let count = |v: AccuracyVerdict| {
        replays
            .iter()
            .filter(|r| r.validation.assessment == v)
            .count()
    };

    Ok(CalibrationReport {
        fixture_version: fixture_version(),
        total: replays.len(),
        accurate: count(AccuracyVerdict::Accurate),
        good: count(AccuracyVerdict::Good),
        needs_improvement: count(AccuracyVerdict::NeedsImprovement),
        replays,
    })
}
