// src/config/engine.rs
//! Tunable engine constants, loaded from TOML.
//!
//! ```toml
//! [ach]
//! rejection_multiple = 2.0
//! min_rejection_margin = 0.0
//! full_evidence_count = 6
//! confidence_breakpoints = [0.25, 0.5, 0.75]
//!
//! [deception]
//! confidence_breakpoints = [3, 6, 9]
//! ```
//!
//! Every field is optional; missing keys keep their defaults. The calibration
//! thresholds are fixed constants in `calibration`.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::warn;

// --- env defaults & names ---
pub const DEFAULT_ENGINE_CONFIG_PATH: &str = "config/engine.toml";
pub const ENV_ENGINE_CONFIG_PATH: &str = "SAT_ENGINE_CONFIG_PATH";
pub const ENV_REJECTION_MULTIPLE: &str = "SAT_REJECTION_MULTIPLE";

/// Default multiple of the next-best weighted score a negative score must exceed to be rejected.
pub const DEFAULT_REJECTION_MULTIPLE: f64 = 2.0;
/// Floor applied to the next-best magnitude. At 0.0 the rule is the plain
/// `|score| > multiple * |next_best|`, so any negative score sitting under a
/// zero-scored neighbour is rejected. Raise it to spare those.
pub const DEFAULT_MIN_REJECTION_MARGIN: f64 = 0.0;
/// Scored cells needed before the evidence-volume factor saturates.
pub const DEFAULT_FULL_EVIDENCE_COUNT: usize = 6;
/// Composite (volume x agreement) breakpoints for Moderate / High / VeryHigh.
pub const DEFAULT_ACH_CONFIDENCE_BREAKPOINTS: [f64; 3] = [0.25, 0.5, 0.75];
/// Assessed-criteria counts for Moderate / High / VeryHigh.
pub const DEFAULT_DECEPTION_CONFIDENCE_BREAKPOINTS: [usize; 3] = [3, 6, 9];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub ach: AchConfig,
    pub deception: DeceptionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchConfig {
    pub rejection_multiple: f64,
    pub min_rejection_margin: f64,
    pub full_evidence_count: usize,
    pub confidence_breakpoints: [f64; 3],
}

impl Default for AchConfig {
    fn default() -> Self {
        Self {
            rejection_multiple: DEFAULT_REJECTION_MULTIPLE,
            min_rejection_margin: DEFAULT_MIN_REJECTION_MARGIN,
            full_evidence_count: DEFAULT_FULL_EVIDENCE_COUNT,
            confidence_breakpoints: DEFAULT_ACH_CONFIDENCE_BREAKPOINTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeceptionConfig {
    pub confidence_breakpoints: [usize; 3],
}

impl Default for DeceptionConfig {
    fn default() -> Self {
        Self {
            confidence_breakpoints: DEFAULT_DECEPTION_CONFIDENCE_BREAKPOINTS,
        }
    }
}

impl EngineConfig {
    /// Load from `$SAT_ENGINE_CONFIG_PATH` (or `config/engine.toml`), then apply env overrides.
    pub fn from_toml() -> Result<Self> {
        let path = config_path();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading engine config from {}", path.display()))?;

        let mut cfg = Self::from_toml_str(&content)?;

        if let Some(m) = parse_multiple_env(std::env::var(ENV_REJECTION_MULTIPLE).ok()) {
            cfg.ach.rejection_multiple = m;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let cfg: EngineConfig = toml::from_str(toml_str).context("parsing engine config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Like [`EngineConfig::from_toml`], but never fails: a missing or broken
    /// file is logged and the built-in defaults are used instead.
    pub fn load_or_default() -> Self {
        match Self::from_toml() {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(target: "config", error = %e, "engine config unavailable, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let a = &self.ach;
        if !a.rejection_multiple.is_finite() || a.rejection_multiple < 1.0 {
            bail!(
                "ach.rejection_multiple must be a finite value >= 1.0, got {}",
                a.rejection_multiple
            );
        }
        if !a.min_rejection_margin.is_finite() || a.min_rejection_margin < 0.0 {
            bail!(
                "ach.min_rejection_margin must be a finite value >= 0.0, got {}",
                a.min_rejection_margin
            );
        }
        if a.full_evidence_count == 0 {
            bail!("ach.full_evidence_count must be at least 1");
        }
        let b = a.confidence_breakpoints;
        if b.iter().any(|x| !x.is_finite()) || !(b[0] < b[1] && b[1] < b[2]) {
            bail!("ach.confidence_breakpoints must be finite and strictly ascending, got {b:?}");
        }
        let d = self.deception.confidence_breakpoints;
        if !(d[0] < d[1] && d[1] < d[2]) || d[2] > crate::deception::CRITERIA_COUNT {
            bail!("deception.confidence_breakpoints must be strictly ascending and <= 11, got {d:?}");
        }
        Ok(())
    }
}

fn config_path() -> PathBuf {
    std::env::var(ENV_ENGINE_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_ENGINE_CONFIG_PATH))
}

// parse optional float env; ignore garbage rather than failing the whole load
fn parse_multiple_env(raw: Option<String>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 1.0)
}
