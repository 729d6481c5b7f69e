// src/calibration/scenarios.rs
//! Static, versioned table of historical test scenarios.
//!
//! The table ships inside the binary (`scenarios.json`) and is parsed once.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::deception::DeceptionScores;
use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroundTruth {
    ConfirmedDeception,
    NoDeception,
    Uncertain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScenario {
    pub id: String,
    pub title: String,
    pub scenario: String,
    pub expected_scores: DeceptionScores,
    pub expected_likelihood: u8,
    pub ground_truth: GroundTruth,
    #[serde(default)]
    pub learning_points: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ScenarioTable {
    version: u32,
    scenarios: Vec<TestScenario>,
}

static TABLE: Lazy<ScenarioTable> = Lazy::new(|| {
    let raw = include_str!("scenarios.json");
    serde_json::from_str::<ScenarioTable>(raw).expect("valid calibration scenario table")
});

/// Version of the shipped fixture table.
pub fn fixture_version() -> u32 {
    TABLE.version
}

pub fn scenarios() -> &'static [TestScenario] {
    &TABLE.scenarios
}

pub fn find_scenario(id: &str) -> EngineResult<&'static TestScenario> {
    scenarios()
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| EngineError::UnknownScenario { id: id.to_string() })
}
