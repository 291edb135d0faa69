//! Dimensional breakdowns
//!
//! Rollups of the canonical record set along one dimension at a time:
//! fiscal action, registration state, reporting period, statutory clause.
//! Orderings match the review screens (volume descending) with explicit
//! tie-breaks so output never depends on map iteration order.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use crate::types::{
    ActionBreakdown, FiscalAction, FiscalRecord, IncisionBreakdown, IncisionClause,
    PeriodBreakdown, StateBreakdown,
};

use super::aggregate::checked_mean;

/// Accumulator shared by all breakdown dimensions.
#[derive(Default)]
struct Bucket {
    groups: BTreeSet<u64>,
    companies: BTreeSet<String>,
    partners: BTreeSet<String>,
    rows: usize,
    total_credit: Decimal,
    total_revenue: Decimal,
    max_revenue: Decimal,
    notice_count: usize,
    with_debt_count: usize,
}

impl Bucket {
    fn add(&mut self, row: &FiscalRecord) {
        self.groups.insert(row.group_id);
        self.companies.insert(row.company_id.clone());
        self.partners.insert(row.partner_id.clone());
        self.rows += 1;
        self.total_credit += row.credit_amount;
        self.total_revenue += row.revenue_at_trigger;
        self.max_revenue = self.max_revenue.max(row.revenue_at_trigger);
        if row.issues_exclusion_notice {
            self.notice_count += 1;
        }
        if row.action == FiscalAction::ExclusionWithDebt {
            self.with_debt_count += 1;
        }
    }
}

/// Roll up canonical rows per fiscal action, busiest bucket first.
#[must_use]
pub fn by_action(rows: &[FiscalRecord]) -> Vec<ActionBreakdown> {
    let mut buckets: BTreeMap<u8, (FiscalAction, Bucket)> = BTreeMap::new();
    for row in rows {
        buckets
            .entry(row.action.severity())
            .or_insert_with(|| (row.action, Bucket::default()))
            .1
            .add(row);
    }

    let mut out: Vec<ActionBreakdown> = buckets
        .into_values()
        .map(|(action, b)| ActionBreakdown {
            action,
            group_count: b.groups.len(),
            company_count: b.companies.len(),
            mean_credit: checked_mean(b.total_credit, b.rows),
            mean_revenue: checked_mean(b.total_revenue, b.rows),
            total_credit: b.total_credit,
            max_revenue: b.max_revenue,
        })
        .collect();
    out.sort_by(|a, b| {
        b.group_count
            .cmp(&a.group_count)
            .then_with(|| b.action.severity().cmp(&a.action.severity()))
    });
    out
}

/// Roll up canonical rows per registration state, most companies first.
#[must_use]
pub fn by_state(rows: &[FiscalRecord]) -> Vec<StateBreakdown> {
    let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();
    for row in rows {
        buckets.entry(row.state.clone()).or_default().add(row);
    }

    let mut out: Vec<StateBreakdown> = buckets
        .into_iter()
        .map(|(state, b)| StateBreakdown {
            state,
            group_count: b.groups.len(),
            company_count: b.companies.len(),
            mean_credit: checked_mean(b.total_credit, b.rows),
            total_credit: b.total_credit,
            notice_count: b.notice_count,
            with_debt_count: b.with_debt_count,
        })
        .collect();
    out.sort_by(|a, b| {
        b.company_count
            .cmp(&a.company_count)
            .then_with(|| a.state.cmp(&b.state))
    });
    out
}

/// Roll up canonical rows per reporting period, busiest period first.
/// Rows without a period label are skipped.
#[must_use]
pub fn by_period(rows: &[FiscalRecord]) -> Vec<PeriodBreakdown> {
    let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();
    for row in rows {
        let Some(period) = row.period_flag.as_deref() else {
            continue;
        };
        if period.is_empty() {
            continue;
        }
        buckets.entry(period.to_string()).or_default().add(row);
    }

    let mut out: Vec<PeriodBreakdown> = buckets
        .into_iter()
        .map(|(period, b)| PeriodBreakdown {
            period,
            group_count: b.groups.len(),
            company_count: b.companies.len(),
            mean_credit: checked_mean(b.total_credit, b.rows),
            total_credit: b.total_credit,
        })
        .collect();
    out.sort_by(|a, b| {
        b.group_count
            .cmp(&a.group_count)
            .then_with(|| a.period.cmp(&b.period))
    });
    out
}

/// Roll up canonical rows per statutory clause, busiest clause first.
/// Rows without a clause are skipped.
#[must_use]
pub fn by_incision(rows: &[FiscalRecord]) -> Vec<IncisionBreakdown> {
    let mut buckets: BTreeMap<u8, (IncisionClause, Bucket)> = BTreeMap::new();
    for row in rows {
        let Some(incision) = row.incision else {
            continue;
        };
        buckets
            .entry(incision.severity())
            .or_insert_with(|| (incision, Bucket::default()))
            .1
            .add(row);
    }

    let mut out: Vec<IncisionBreakdown> = buckets
        .into_values()
        .map(|(incision, b)| IncisionBreakdown {
            incision,
            group_count: b.groups.len(),
            company_count: b.companies.len(),
            partner_count: b.partners.len(),
            mean_revenue: checked_mean(b.total_revenue, b.rows),
            total_credit: b.total_credit,
        })
        .collect();
    out.sort_by(|a, b| {
        b.group_count
            .cmp(&a.group_count)
            .then_with(|| b.incision.severity().cmp(&a.incision.severity()))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(
        group: u64,
        company: &str,
        state: &str,
        action: FiscalAction,
        period: Option<&str>,
        incision: Option<IncisionClause>,
        credit: Decimal,
    ) -> FiscalRecord {
        FiscalRecord {
            company_id: company.to_string(),
            company_name: None,
            group_id: group,
            partner_id: format!("{group:011}"),
            state: state.to_string(),
            credit_amount: credit,
            revenue_at_trigger: dec!(2_000_000),
            gross_revenue: None,
            action,
            period_flag: period.map(str::to_string),
            incision,
            issues_exclusion_notice: action == FiscalAction::ExclusionWithDebt,
            registration_status: None,
            limit_status: None,
            reported_company_count: 2,
            reported_partner_count: 1,
            assessment_year: None,
        }
    }

    fn fixture() -> Vec<FiscalRecord> {
        vec![
            row(1, "A", "SC", FiscalAction::ExclusionWithDebt, Some("202312"), Some(IncisionClause::ClauseIii), dec!(100)),
            row(1, "B", "PR", FiscalAction::ExclusionWithoutDebt, Some("202312"), Some(IncisionClause::ClauseIii), dec!(0)),
            row(2, "C", "SC", FiscalAction::ExclusionWithDebt, Some("202311"), Some(IncisionClause::ClauseIv), dec!(200)),
            row(3, "D", "SC", FiscalAction::NoInterest, None, None, dec!(0)),
        ]
    }

    #[test]
    fn action_rollup_counts_distinct_groups_and_companies() {
        let out = by_action(&fixture());
        let with_debt = out
            .iter()
            .find(|b| b.action == FiscalAction::ExclusionWithDebt)
            .unwrap();
        assert_eq!(with_debt.group_count, 2);
        assert_eq!(with_debt.company_count, 2);
        assert_eq!(with_debt.total_credit, dec!(300));
        assert_eq!(with_debt.mean_credit, dec!(150));
        // Busiest bucket first.
        assert_eq!(out[0].action, FiscalAction::ExclusionWithDebt);
    }

    #[test]
    fn state_rollup_orders_by_company_count() {
        let out = by_state(&fixture());
        assert_eq!(out[0].state, "SC");
        assert_eq!(out[0].company_count, 3);
        assert_eq!(out[0].with_debt_count, 2);
        assert_eq!(out[1].state, "PR");
    }

    #[test]
    fn period_rollup_skips_unlabelled_rows() {
        let out = by_period(&fixture());
        assert_eq!(out.len(), 2);
        // Equal group counts fall back to the period label ascending.
        assert_eq!(out[0].period, "202311");
        assert_eq!(out[1].period, "202312");
        let dec = out.iter().find(|b| b.period == "202312").unwrap();
        assert_eq!(dec.group_count, 1);
        assert_eq!(dec.company_count, 2);
    }

    #[test]
    fn incision_rollup_skips_unset_rows() {
        let out = by_incision(&fixture());
        assert_eq!(out.len(), 2);
        let iii = out
            .iter()
            .find(|b| b.incision == IncisionClause::ClauseIii)
            .unwrap();
        assert_eq!(iii.company_count, 2);
        assert_eq!(iii.partner_count, 1);
    }

    #[test]
    fn empty_input_yields_empty_rollups() {
        assert!(by_action(&[]).is_empty());
        assert!(by_state(&[]).is_empty());
        assert!(by_period(&[]).is_empty());
        assert!(by_incision(&[]).is_empty());
    }
}
