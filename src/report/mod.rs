//! Executive report assembly
//!
//! Consolidates one full engine run into a single serializable value:
//! overview KPIs, dimensional breakdowns, the prioritized top-N ranking and
//! the data-quality report. Presentation renders this; it never re-derives
//! aggregates from raw records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::engine::{self, EngineError};
use crate::types::{
    ActionBreakdown, FilterSpec, FiscalRecord, IncisionBreakdown, OverviewStats, PeriodBreakdown,
    RankedGroupSummary, StateBreakdown,
};

/// Consolidated analysis output for one record set.
///
/// Computed fresh per query, never mutated, discarded after use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// The jurisdiction the analysis ran for
    pub home_state: String,
    /// Statutory gross-revenue ceiling applied
    pub revenue_ceiling: rust_decimal::Decimal,
    pub overview: OverviewStats,
    pub by_action: Vec<ActionBreakdown>,
    pub by_state: Vec<StateBreakdown>,
    pub by_period: Vec<PeriodBreakdown>,
    pub by_incision: Vec<IncisionBreakdown>,
    /// Priority ranking, bounded by the requested limit
    pub top_groups: Vec<RankedGroupSummary>,
    /// Duplicate rows removed across all groups while building the report
    pub duplicates_removed: usize,
}

impl ExecutiveReport {
    /// Run the full pipeline over `records` and assemble the report.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError`] from the classifier and the ranking
    /// engine (invalid filters).
    pub fn build(
        records: Vec<FiscalRecord>,
        config: &EngineConfig,
        filters: &FilterSpec,
        limit: usize,
    ) -> Result<Self, EngineError> {
        let output = engine::run(records, config)?;
        let home_state = &config.authority.home_state;

        let overview = engine::overview::overview(&output.canonical_rows, home_state);
        let by_action = engine::distribution::by_action(&output.canonical_rows);
        let by_state = engine::distribution::by_state(&output.canonical_rows);
        let by_period = engine::distribution::by_period(&output.canonical_rows);
        let by_incision = engine::distribution::by_incision(&output.canonical_rows);
        let top_groups = engine::rank(output.summaries, filters, limit)?;

        Ok(Self {
            generated_at: Utc::now(),
            home_state: home_state.clone(),
            revenue_ceiling: config.thresholds.revenue_ceiling,
            overview,
            by_action,
            by_state,
            by_period,
            by_incision,
            top_groups,
            duplicates_removed: output.duplicates_removed,
        })
    }
}
