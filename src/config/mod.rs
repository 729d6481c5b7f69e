// src/config/mod.rs
pub mod engine;

pub use engine::{AchConfig, DeceptionConfig, EngineConfig};
