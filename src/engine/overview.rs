//! Global overview statistics
//!
//! The executive KPI block over the full canonical record set: distinct
//! entity counts, per-action volumes, credit and revenue totals.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::types::{FiscalAction, FiscalRecord, OverviewStats};

use super::aggregate::checked_mean;

/// Compute the overview block over canonical (post-dedup) rows.
///
/// Summing raw rows here would double-count credit, so callers pass the
/// pipeline's canonical output. Empty input yields the zero block.
#[must_use]
pub fn overview(rows: &[FiscalRecord], home_state: &str) -> OverviewStats {
    let mut groups: HashSet<u64> = HashSet::new();
    let mut companies: HashSet<&str> = HashSet::new();
    let mut partners: HashSet<&str> = HashSet::new();
    let mut in_state_companies: HashSet<&str> = HashSet::new();

    let mut with_debt = 0;
    let mut without_debt = 0;
    let mut no_interest = 0;
    let mut notices = 0;

    let mut total_credit = Decimal::ZERO;
    let mut max_credit = Decimal::ZERO;
    let mut total_revenue = Decimal::ZERO;

    for row in rows {
        groups.insert(row.group_id);
        companies.insert(row.company_id.as_str());
        partners.insert(row.partner_id.as_str());
        if row.state == home_state {
            in_state_companies.insert(row.company_id.as_str());
            if row.issues_exclusion_notice {
                notices += 1;
            }
        }

        match row.action {
            FiscalAction::ExclusionWithDebt => with_debt += 1,
            FiscalAction::ExclusionWithoutDebt => without_debt += 1,
            FiscalAction::NoInterest => no_interest += 1,
        }

        total_credit += row.credit_amount;
        max_credit = max_credit.max(row.credit_amount);
        total_revenue += row.revenue_at_trigger;
    }

    OverviewStats {
        group_count: groups.len(),
        company_count: companies.len(),
        partner_count: partners.len(),
        in_state_company_count: in_state_companies.len(),
        with_debt_count: with_debt,
        without_debt_count: without_debt,
        no_interest_count: no_interest,
        mean_credit: checked_mean(total_credit, rows.len()),
        total_credit,
        max_credit,
        mean_revenue: checked_mean(total_revenue, rows.len()),
        total_revenue,
        notice_count: notices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn row(
        group: u64,
        partner: &str,
        company: &str,
        state: &str,
        credit: Decimal,
        action: FiscalAction,
    ) -> FiscalRecord {
        FiscalRecord {
            company_id: company.to_string(),
            company_name: None,
            group_id: group,
            partner_id: partner.to_string(),
            state: state.to_string(),
            credit_amount: credit,
            revenue_at_trigger: dec!(1_000_000),
            gross_revenue: None,
            action,
            period_flag: None,
            incision: None,
            issues_exclusion_notice: state == "SC",
            registration_status: None,
            limit_status: None,
            reported_company_count: 2,
            reported_partner_count: 1,
            assessment_year: None,
        }
    }

    #[test]
    fn counts_distinct_entities() {
        let rows = vec![
            row(1, "P1", "A", "SC", dec!(100), FiscalAction::ExclusionWithDebt),
            row(1, "P1", "B", "PR", dec!(0), FiscalAction::ExclusionWithoutDebt),
            row(2, "P2", "C", "SC", dec!(200), FiscalAction::ExclusionWithDebt),
        ];
        let stats = overview(&rows, "SC");
        assert_eq!(stats.group_count, 2);
        assert_eq!(stats.company_count, 3);
        assert_eq!(stats.partner_count, 2);
        assert_eq!(stats.in_state_company_count, 2);
        assert_eq!(stats.with_debt_count, 2);
        assert_eq!(stats.without_debt_count, 1);
        assert_eq!(stats.no_interest_count, 0);
        assert_eq!(stats.total_credit, dec!(300));
        assert_eq!(stats.mean_credit, dec!(100));
        assert_eq!(stats.max_credit, dec!(200));
        assert_eq!(stats.notice_count, 2);
        assert_eq!(stats.total_revenue, dec!(3_000_000));
    }

    #[test]
    fn empty_input_yields_zero_block() {
        let stats = overview(&[], "SC");
        assert_eq!(stats.group_count, 0);
        assert_eq!(stats.total_credit, Decimal::ZERO);
        assert_eq!(stats.mean_credit, Decimal::ZERO);
    }
}
