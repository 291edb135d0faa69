//! Engine Configuration Module
//!
//! Jurisdiction, statutory thresholds and reporting policy loaded from TOML
//! files, replacing hardcoded values with operator-tunable ones.
//!
//! ## Loading Order
//!
//! 1. `GENESIS_CONFIG` environment variable (path to TOML file)
//! 2. `genesis.toml` in the current working directory
//! 3. Built-in defaults
//!
//! Configs are plain values passed explicitly into the engine; the core
//! stays a pure function of its arguments.

mod engine_config;
pub mod defaults;
pub mod validation;

pub use engine_config::{
    AuthorityConfig, DataQualityConfig, EngineConfig, RankingConfig, ThresholdConfig,
};
