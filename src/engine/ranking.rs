//! Group ranking
//!
//! Orders group summaries for prioritized review: credit descending, group
//! number ascending on ties so the output is fully deterministic. All filter
//! predicates apply before truncation, never after, so the limit always
//! yields a prefix of the fully filtered, fully ordered result.

use std::cmp::Ordering;

use crate::types::{FilterSpec, GroupSummary, RankedGroupSummary};

use super::EngineError;

/// Ranking order: total credit descending, ties broken by group number
/// ascending.
#[must_use]
pub fn ranking_order(a: &GroupSummary, b: &GroupSummary) -> Ordering {
    b.aggregate
        .total_credit
        .cmp(&a.aggregate.total_credit)
        .then_with(|| a.key.group_id.cmp(&b.key.group_id))
}

/// Filter, order and truncate group summaries into a bounded ranking.
///
/// # Errors
///
/// [`EngineError::InvalidFilter`] when `limit` is zero or
/// `min_company_count` is below the domain floor of 2 — a group is
/// definitionally two or more companies.
pub fn rank(
    groups: Vec<GroupSummary>,
    filters: &FilterSpec,
    limit: usize,
) -> Result<Vec<RankedGroupSummary>, EngineError> {
    if limit == 0 {
        return Err(EngineError::InvalidFilter(
            "limit must be at least 1".to_string(),
        ));
    }
    if filters.min_company_count < 2 {
        return Err(EngineError::InvalidFilter(format!(
            "min_company_count {} is below the domain floor of 2",
            filters.min_company_count
        )));
    }

    let mut kept: Vec<GroupSummary> = groups
        .into_iter()
        .filter(|g| g.aggregate.total_credit >= filters.min_credit)
        .filter(|g| g.reported_company_count >= filters.min_company_count)
        .filter(|g| {
            filters.allowed_actions.is_empty()
                || filters.allowed_actions.contains(&g.dominant_action)
        })
        .collect();

    kept.sort_by(ranking_order);
    kept.truncate(limit);

    Ok(kept
        .into_iter()
        .enumerate()
        .map(|(i, g)| RankedGroupSummary {
            position: i + 1,
            group_id: g.key.group_id,
            partner_id: g.key.partner_id,
            total_credit: g.aggregate.total_credit,
            max_trigger_revenue: g.aggregate.max_trigger_revenue,
            dominant_action: g.dominant_action,
            company_count: g.aggregate.company_count,
            in_state_company_count: g.aggregate.in_state_company_count,
            reported_company_count: g.reported_company_count,
            reported_partner_count: g.reported_partner_count,
            notice_count: g.aggregate.notice_count,
            dominant_incision: g.dominant_incision,
            dominant_period: g.dominant_period,
        })
        .collect())
}
