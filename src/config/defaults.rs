//! System-wide default constants.
//!
//! Centralises the values the engine falls back to when no config file is
//! present. Grouped by concern for easy discovery.

// ============================================================================
// Authority
// ============================================================================

/// The authority's own jurisdiction (UF). Notices are only issued for
/// companies registered here.
pub const HOME_STATE: &str = "SC";

// ============================================================================
// Statutory Thresholds
// ============================================================================

/// Simplified-regime gross-revenue ceiling in BRL (LC 123/2006, Art. 3, §4).
pub const REVENUE_CEILING_BRL: u64 = 4_800_000;

// ============================================================================
// Data Quality
// ============================================================================

/// Duplicate-removal rate above which the pipeline escalates the dedup
/// report from `info` to `warn`. Removal stays non-fatal at any rate.
pub const DEDUP_WARN_RATE: f64 = 0.25;

// ============================================================================
// Ranking
// ============================================================================

/// Default top-N cut for group rankings.
pub const RANKING_LIMIT: usize = 50;

/// Domain floor for the company-count filter. A group is definitionally
/// two or more companies.
pub const MIN_COMPANY_COUNT: u32 = 2;
