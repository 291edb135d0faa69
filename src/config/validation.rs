//! Config validation: unknown-key detection with Levenshtein suggestions
//! and domain range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::EngineConfig;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " — did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `EngineConfig`.
///
/// Maintained manually to match the struct hierarchy in engine_config.rs.
/// Any new field added to `EngineConfig` must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [authority]
        "authority",
        "authority.home_state",
        // [thresholds]
        "thresholds",
        "thresholds.revenue_ceiling",
        // [data_quality]
        "data_quality",
        "data_quality.dedup_warn_rate",
        // [ranking]
        "ranking",
        "ranking.default_limit",
        "ranking.default_min_company_count",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a_len = a.len();
    let b_len = b.len();
    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &k in known {
        let dist = levenshtein(unknown, k);
        if dist <= 3 {
            if let Some((_, best_dist)) = best {
                if dist < best_dist {
                    best = Some((k, dist));
                }
            } else {
                best = Some((k, dist));
            }
        }
    }
    best.map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys — it only warns. Existing configs
/// always continue to work.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    let found = walk_toml_keys(&value, "");
    let mut warnings = Vec::new();

    for key in &found {
        if !known.contains(key.as_str()) {
            let suggestion = suggest_correction(key, &known);
            let message = format!("Unknown config key '{key}'");
            warnings.push(ValidationWarning {
                field: key.clone(),
                message,
                suggestion,
            });
        }
    }

    warnings
}

// ============================================================================
// Domain Range Validation
// ============================================================================

/// Check a parsed config for values outside their sensible domain.
///
/// Like the key check, range findings are warnings: the engine still runs
/// with the operator's values.
pub fn validate_ranges(config: &EngineConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let uf = &config.authority.home_state;
    if uf.len() != 2 || !uf.chars().all(|c| c.is_ascii_uppercase()) {
        warnings.push(ValidationWarning {
            field: "authority.home_state".to_string(),
            message: format!("home_state '{uf}' is not a two-letter UF code"),
            suggestion: None,
        });
    }

    if config.thresholds.revenue_ceiling <= Decimal::ZERO {
        warnings.push(ValidationWarning {
            field: "thresholds.revenue_ceiling".to_string(),
            message: format!(
                "revenue_ceiling {} must be positive",
                config.thresholds.revenue_ceiling
            ),
            suggestion: None,
        });
    }

    let rate = config.data_quality.dedup_warn_rate;
    if !(0.0..=1.0).contains(&rate) {
        warnings.push(ValidationWarning {
            field: "data_quality.dedup_warn_rate".to_string(),
            message: format!("dedup_warn_rate {rate} must be between 0 and 1"),
            suggestion: None,
        });
    }

    if config.ranking.default_limit == 0 {
        warnings.push(ValidationWarning {
            field: "ranking.default_limit".to_string(),
            message: "default_limit must be at least 1".to_string(),
            suggestion: None,
        });
    }

    if config.ranking.default_min_company_count < 2 {
        warnings.push(ValidationWarning {
            field: "ranking.default_min_company_count".to_string(),
            message: format!(
                "default_min_company_count {} is below the domain floor of 2",
                config.ranking.default_min_company_count
            ),
            suggestion: None,
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("home_stat", "home_state"), 1);
    }

    #[test]
    fn walk_collects_nested_paths() {
        let value: toml::Value = r#"
[authority]
home_state = "SC"

[ranking]
default_limit = 50
"#
        .parse()
        .unwrap();
        let keys = walk_toml_keys(&value, "");
        assert!(keys.contains(&"authority".to_string()));
        assert!(keys.contains(&"authority.home_state".to_string()));
        assert!(keys.contains(&"ranking.default_limit".to_string()));
    }
}
