//! Engine configuration - jurisdiction and thresholds as tunable TOML values
//!
//! Every struct implements `Default` with values matching the built-in
//! constants in [`super::defaults`], ensuring zero-change behavior when no
//! config file is present. Config instances are passed explicitly into the
//! engine; nothing here is global state.

use std::path::{Path, PathBuf};

use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::defaults;
use super::validation;

/// Root configuration for an engine deployment.
///
/// Load with [`EngineConfig::load`] which searches:
/// 1. `$GENESIS_CONFIG` env var
/// 2. `./genesis.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tax-authority identity
    #[serde(default)]
    pub authority: AuthorityConfig,

    /// Statutory thresholds
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Data-quality reporting policy
    #[serde(default)]
    pub data_quality: DataQualityConfig,

    /// Ranking defaults
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// Identity of the authority running the analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorityConfig {
    /// The authority's own jurisdiction (UF)
    pub home_state: String,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            home_state: defaults::HOME_STATE.to_string(),
        }
    }
}

/// Statutory thresholds tested by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Simplified-regime gross-revenue ceiling (BRL)
    pub revenue_ceiling: Decimal,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            revenue_ceiling: Decimal::from(defaults::REVENUE_CEILING_BRL),
        }
    }
}

/// Data-quality reporting policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataQualityConfig {
    /// Duplicate-removal rate above which the dedup report escalates from
    /// `info` to `warn`. Removal is never fatal.
    pub dedup_warn_rate: f64,
}

impl Default for DataQualityConfig {
    fn default() -> Self {
        Self {
            dedup_warn_rate: defaults::DEDUP_WARN_RATE,
        }
    }
}

/// Ranking defaults applied when the caller does not override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Default top-N cut
    pub default_limit: usize,
    /// Default company-count floor
    pub default_min_company_count: u32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::RANKING_LIMIT,
            default_min_company_count: defaults::MIN_COMPANY_COUNT,
        }
    }
}

impl EngineConfig {
    /// Load configuration using the standard search order:
    /// 1. `$GENESIS_CONFIG` environment variable
    /// 2. `./genesis.toml` in the current working directory
    /// 3. Built-in defaults
    #[must_use]
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("GENESIS_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), home_state = %config.authority.home_state, "Loaded engine config from GENESIS_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from GENESIS_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "GENESIS_CONFIG points to non-existent file, falling back");
            }
        }

        let local = Path::new("genesis.toml");
        if local.exists() {
            match Self::load_from_file(local) {
                Ok(config) => {
                    info!(path = %local.display(), home_state = %config.authority.home_state, "Loaded engine config");
                    return config;
                }
                Err(e) => {
                    warn!(path = %local.display(), error = %e, "Failed to load genesis.toml, using defaults");
                }
            }
        }

        info!("No config file found, using built-in defaults");
        Self::default()
    }

    /// Load and validate configuration from a specific TOML file.
    ///
    /// Unknown keys and suspicious values produce warnings (logged, never
    /// fatal); parse errors and out-of-domain values fail.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;

        for warning in validation::validate_unknown_keys(&raw) {
            warn!(field = %warning.field, "{warning}");
        }

        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;

        for warning in validation::validate_ranges(&config) {
            warn!(field = %warning.field, "{warning}");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_match_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.authority.home_state, "SC");
        assert_eq!(config.thresholds.revenue_ceiling, dec!(4_800_000));
        assert_eq!(config.ranking.default_limit, 50);
        assert_eq!(config.ranking.default_min_company_count, 2);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let config: EngineConfig = toml::from_str(
            r#"
[authority]
home_state = "PR"
"#,
        )
        .unwrap();
        assert_eq!(config.authority.home_state, "PR");
        assert_eq!(config.thresholds.revenue_ceiling, dec!(4_800_000));
    }

    #[test]
    fn ceiling_parses_as_exact_decimal() {
        let config: EngineConfig = toml::from_str(
            r#"
[thresholds]
revenue_ceiling = 3600000
"#,
        )
        .unwrap();
        assert_eq!(config.thresholds.revenue_ceiling, dec!(3_600_000));
    }
}
