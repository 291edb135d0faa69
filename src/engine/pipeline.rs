//! Per-group pipeline orchestration
//!
//! Partitions a flat record set into `(group_id, partner_id)` groups and
//! runs dedup → aggregate → classify for each. Groups are independent of
//! one another, so the fan-out runs on the rayon pool; result order stays
//! deterministic (ascending group key) regardless of scheduling.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::warn;

use crate::config::EngineConfig;
use crate::types::{FiscalAction, FiscalRecord, GroupKey, GroupSummary, IncisionClause, LimitBreach};

use super::aggregate::GroupAggregate;
use super::classifier::classify;
use super::dedup::deduplicate;
use super::EngineError;

/// Result of running the pipeline over a full record set.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// One summary per `(group_id, partner_id)` group, ascending key order
    pub summaries: Vec<GroupSummary>,
    /// Canonical rows across all groups, for overview and breakdown rollups
    pub canonical_rows: Vec<FiscalRecord>,
    /// Total duplicate rows removed across all groups
    pub duplicates_removed: usize,
}

/// Detailed view of a single group, for drill-down analysis.
#[derive(Debug, Clone)]
pub struct GroupDetail {
    pub key: GroupKey,
    pub aggregate: GroupAggregate,
    pub dominant_action: FiscalAction,
    pub dominant_incision: Option<IncisionClause>,
    pub dominant_period: Option<String>,
    /// Statutory ceiling assessment, when the group exceeds it
    pub limit_breach: Option<LimitBreach>,
    pub duplicates_removed: usize,
    /// Canonical rows, credit descending
    pub rows: Vec<FiscalRecord>,
}

/// Partition records by group key.
fn partition(records: Vec<FiscalRecord>) -> BTreeMap<GroupKey, Vec<FiscalRecord>> {
    let mut groups: BTreeMap<GroupKey, Vec<FiscalRecord>> = BTreeMap::new();
    for record in records {
        let key = GroupKey {
            group_id: record.group_id,
            partner_id: record.partner_id.clone(),
        };
        groups.entry(key).or_default().push(record);
    }
    groups
}

/// Strongest statutory clause among a group's rows.
fn dominant_incision(rows: &[FiscalRecord]) -> Option<IncisionClause> {
    rows.iter()
        .filter_map(|r| r.incision)
        .max_by_key(|i| i.severity())
}

/// Latest reporting-period label among a group's rows. Unset or blank
/// labels never win.
fn dominant_period(rows: &[FiscalRecord]) -> Option<String> {
    rows.iter()
        .filter_map(|r| r.period_flag.as_deref())
        .filter(|p| !p.is_empty())
        .max()
        .map(str::to_string)
}

/// Run dedup → aggregate → classify for one group's records.
fn summarize_group(
    key: GroupKey,
    records: Vec<FiscalRecord>,
    config: &EngineConfig,
) -> Result<(GroupSummary, Vec<FiscalRecord>), EngineError> {
    let outcome = deduplicate(records);
    if outcome.removed > 0 && outcome.removal_rate() > config.data_quality.dedup_warn_rate {
        warn!(
            group = %key,
            removed = outcome.removed,
            rate = outcome.removal_rate(),
            "duplicate rate above threshold, check the record source"
        );
    }

    let aggregate = GroupAggregate::from_canonical(&outcome.rows, &config.authority.home_state);
    let dominant_action = classify(&outcome.rows)?;

    let summary = GroupSummary {
        reported_company_count: outcome
            .rows
            .iter()
            .map(|r| r.reported_company_count)
            .max()
            .unwrap_or(0),
        reported_partner_count: outcome
            .rows
            .iter()
            .map(|r| r.reported_partner_count)
            .max()
            .unwrap_or(0),
        dominant_incision: dominant_incision(&outcome.rows),
        dominant_period: dominant_period(&outcome.rows),
        limit_status: outcome
            .rows
            .iter()
            .filter_map(|r| r.limit_status.clone())
            .max(),
        aggregate,
        dominant_action,
        duplicates_removed: outcome.removed,
        key,
    };
    Ok((summary, outcome.rows))
}

/// Run the full pipeline: partition, then dedup → aggregate → classify per
/// group in parallel.
///
/// # Errors
///
/// Propagates [`EngineError::EmptyGroup`] — unreachable for groups built by
/// partitioning, but the classifier contract is honored rather than
/// defaulted.
pub fn run(
    records: Vec<FiscalRecord>,
    config: &EngineConfig,
) -> Result<PipelineOutput, EngineError> {
    let groups: Vec<(GroupKey, Vec<FiscalRecord>)> = partition(records).into_iter().collect();

    let per_group: Result<Vec<(GroupSummary, Vec<FiscalRecord>)>, EngineError> = groups
        .into_par_iter()
        .map(|(key, records)| summarize_group(key, records, config))
        .collect();

    let per_group = per_group?;
    let duplicates_removed = per_group.iter().map(|(s, _)| s.duplicates_removed).sum();
    let mut summaries = Vec::with_capacity(per_group.len());
    let mut canonical_rows = Vec::new();
    for (summary, rows) in per_group {
        summaries.push(summary);
        canonical_rows.extend(rows);
    }

    Ok(PipelineOutput {
        summaries,
        canonical_rows,
        duplicates_removed,
    })
}

/// Build the drill-down view for one group's records.
///
/// # Errors
///
/// [`EngineError::EmptyGroup`] when `records` is empty — there is no group
/// to detail.
pub fn group_detail(
    records: Vec<FiscalRecord>,
    config: &EngineConfig,
) -> Result<GroupDetail, EngineError> {
    let key = records
        .first()
        .map(|r| GroupKey {
            group_id: r.group_id,
            partner_id: r.partner_id.clone(),
        })
        .ok_or(EngineError::EmptyGroup)?;

    let (summary, rows) = summarize_group(key, records, config)?;
    let limit_breach = summary
        .aggregate
        .limit_breach(config.thresholds.revenue_ceiling);

    Ok(GroupDetail {
        key: summary.key,
        aggregate: summary.aggregate,
        dominant_action: summary.dominant_action,
        dominant_incision: summary.dominant_incision,
        dominant_period: summary.dominant_period,
        limit_breach,
        duplicates_removed: summary.duplicates_removed,
        rows,
    })
}
