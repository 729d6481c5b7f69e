//! Ordinal confidence shared by the ACH engine and the deception scorer.

use serde::{Deserialize, Serialize};

/// Stated confidence in a derived conclusion. Ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    /// The level used when there is nothing to base a conclusion on.
    pub const LOWEST: ConfidenceLevel = ConfidenceLevel::Low;

    /// Bucket `x` against three ascending breakpoints.
    /// `x < b[0]` is Low, `x < b[1]` Moderate, `x < b[2]` High, otherwise VeryHigh.
    pub fn from_breakpoints<T: PartialOrd + Copy>(x: T, breakpoints: &[T; 3]) -> Self {
        if x < breakpoints[0] {
            ConfidenceLevel::Low
        } else if x < breakpoints[1] {
            ConfidenceLevel::Moderate
        } else if x < breakpoints[2] {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::VeryHigh
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Moderate => "moderate",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::VeryHigh => "very high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_lower_inclusive() {
        let b = [0.25, 0.5, 0.75];
        assert_eq!(ConfidenceLevel::from_breakpoints(0.0, &b), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_breakpoints(0.25, &b), ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::from_breakpoints(0.74, &b), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_breakpoints(1.0, &b), ConfidenceLevel::VeryHigh);
    }

    #[test]
    fn serializes_screaming_case() {
        let v = serde_json::to_value(ConfidenceLevel::VeryHigh).unwrap();
        assert_eq!(v, serde_json::json!("VERY_HIGH"));
        assert!(ConfidenceLevel::LOWEST < ConfidenceLevel::Moderate);
    }
}
