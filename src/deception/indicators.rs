// src/deception/indicators.rs
//! Human-readable indicator statements for a computed assessment.
//!
//! Works on the risk-oriented vector carried by the assessment, so inverted
//! criteria need no special casing here.

use serde::{Deserialize, Serialize};

use super::{Criterion, CriterionRisk, DeceptionAssessment};

/// Risk value at or above which a criterion is reported as a deception indicator.
pub const DECEPTION_INDICATOR_MIN: u8 = 4;
/// Risk value at or below which a criterion is reported as a counter-indicator.
pub const COUNTER_INDICATOR_MAX: u8 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyIndicators {
    pub deception_indicators: Vec<String>,
    pub counter_indicators: Vec<String>,
}

/// Unassessed criteria (still at the default 0) are reported at face value,
/// so an untouched form lists the inverted criteria as deception indicators.
pub fn generate_key_indicators(assessment: &DeceptionAssessment) -> KeyIndicators {
    let mut out = KeyIndicators::default();
    for r in &assessment.criterion_risks {
        if r.risk >= DECEPTION_INDICATOR_MIN {
            out.deception_indicators.push(sentence(r, high_phrase(r.criterion)));
        } else if r.risk <= COUNTER_INDICATOR_MAX {
            out.counter_indicators.push(sentence(r, low_phrase(r.criterion)));
        }
    }
    out
}

fn sentence(r: &CriterionRisk, phrase: &str) -> String {
    format!(
        "{}: {} ({} risk, rated {}/5)",
        r.criterion.label(),
        phrase,
        severity(r.risk),
        r.raw
    )
}

fn severity(risk: u8) -> &'static str {
    match risk {
        5 => "critical",
        4 => "high",
        2 | 3 => "moderate",
        1 => "low",
        _ => "negligible",
    }
}

fn high_phrase(c: Criterion) -> &'static str {
    match c {
        Criterion::Motive => "the adversary has a compelling reason to deceive",
        Criterion::Opportunity => "the adversary controls channels through which we collect",
        Criterion::Means => "the adversary has the resources and skills to stage a deception",
        Criterion::HistoricalPattern => "the adversary has a documented history of deception",
        Criterion::SophisticationLevel => "the suspected operation is highly sophisticated",
        Criterion::SuccessRate => "past deceptions by this adversary have largely succeeded",
        Criterion::SourceVulnerability => "our sources are exposed to adversary access or control",
        Criterion::ManipulationEvidence => "there are concrete signs that reporting has been manipulated",
        Criterion::InternalConsistency => "the reporting contradicts itself",
        Criterion::ExternalCorroboration => "independent sources do not corroborate the reporting",
        Criterion::AnomalyDetection => "significant anomalies appear in the evidence",
    }
}

fn low_phrase(c: Criterion) -> &'static str {
    match c {
        Criterion::Motive => "little apparent reason to deceive",
        Criterion::Opportunity => "the adversary has little access to our collection",
        Criterion::Means => "the adversary lacks the capability to stage a deception",
        Criterion::HistoricalPattern => "no established history of deception",
        Criterion::SophisticationLevel => "nothing suggests a sophisticated operation",
        Criterion::SuccessRate => "past deception attempts were rarely successful",
        Criterion::SourceVulnerability => "our sources are well protected",
        Criterion::ManipulationEvidence => "no sign that reporting has been manipulated",
        Criterion::InternalConsistency => "the reporting is internally consistent",
        Criterion::ExternalCorroboration => "independent sources corroborate the reporting",
        Criterion::AnomalyDetection => "no meaningful anomalies in the evidence",
    }
}
