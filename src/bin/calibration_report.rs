//! Replays every shipped calibration scenario through the deception scorer
//! and prints the report as JSON on stdout. Logs go to stderr.
//!
//! Env:
//!   RUST_LOG                 filter (default `calibration=info,warn`)
//!   CALIBRATION_LOG_JSON=1   structured JSON log lines instead of compact text
//!   SAT_ENGINE_CONFIG_PATH   engine config (default `config/engine.toml`)

use sat_scoring_engine::calibration::calibration_report_with;
use sat_scoring_engine::EngineConfig;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calibration=info,warn"));

    let json = std::env::var("CALIBRATION_LOG_JSON")
        .ok()
        .is_some_and(|v| v == "1");

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = EngineConfig::load_or_default();
    let report = calibration_report_with(&cfg.deception)?;

    info!(
        target: "calibration",
        total = report.total,
        accurate = report.accurate,
        good = report.good,
        needs_improvement = report.needs_improvement,
        "calibration finished"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
