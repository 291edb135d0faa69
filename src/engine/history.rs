//! Controlling-partner history
//!
//! Per-assessment-year rollup of everything observed for one partner:
//! distinct companies, gross revenue, credit. Years dedup independently —
//! a company legitimately appears once per year, so canonical-row selection
//! runs within each year, not across them.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::types::{FiscalRecord, YearlyHistory};

use super::aggregate::checked_mean;
use super::dedup::deduplicate;

/// Roll up one partner's records per assessment year, ascending.
///
/// Rows without an assessment year are skipped. Duplicate company rows
/// within a year collapse to the canonical row before summing.
#[must_use]
pub fn partner_history(records: &[FiscalRecord]) -> Vec<YearlyHistory> {
    let mut years: BTreeMap<u16, Vec<FiscalRecord>> = BTreeMap::new();
    for record in records {
        let Some(year) = record.assessment_year else {
            continue;
        };
        years.entry(year).or_default().push(record.clone());
    }

    years
        .into_iter()
        .map(|(year, rows)| {
            let canonical = deduplicate(rows).rows;
            let total_gross: Decimal = canonical
                .iter()
                .filter_map(|r| r.gross_revenue)
                .sum();
            let total_credit: Decimal = canonical.iter().map(|r| r.credit_amount).sum();
            YearlyHistory {
                year,
                company_count: canonical.len(),
                mean_gross_revenue: checked_mean(total_gross, canonical.len()),
                total_gross_revenue: total_gross,
                total_credit,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FiscalAction;
    use rust_decimal_macros::dec;

    fn row(company: &str, year: Option<u16>, gross: Decimal, credit: Decimal) -> FiscalRecord {
        FiscalRecord {
            company_id: company.to_string(),
            company_name: None,
            group_id: 4,
            partner_id: "11144477735".to_string(),
            state: "SC".to_string(),
            credit_amount: credit,
            revenue_at_trigger: gross,
            gross_revenue: Some(gross),
            action: FiscalAction::ExclusionWithDebt,
            period_flag: None,
            incision: None,
            issues_exclusion_notice: false,
            registration_status: None,
            limit_status: None,
            reported_company_count: 2,
            reported_partner_count: 1,
            assessment_year: year,
        }
    }

    #[test]
    fn rolls_up_per_year_ascending() {
        let records = vec![
            row("A", Some(2023), dec!(1_000_000), dec!(100)),
            row("B", Some(2023), dec!(3_000_000), dec!(0)),
            row("A", Some(2022), dec!(900_000), dec!(40)),
        ];
        let history = partner_history(&records);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].year, 2022);
        assert_eq!(history[1].year, 2023);
        assert_eq!(history[1].company_count, 2);
        assert_eq!(history[1].total_gross_revenue, dec!(4_000_000));
        assert_eq!(history[1].mean_gross_revenue, dec!(2_000_000));
        assert_eq!(history[1].total_credit, dec!(100));
    }

    #[test]
    fn duplicates_within_a_year_collapse() {
        let records = vec![
            row("A", Some(2023), dec!(1_000_000), dec!(100)),
            row("A", Some(2023), dec!(1_000_000), dec!(300)),
        ];
        let history = partner_history(&records);
        assert_eq!(history[0].company_count, 1);
        assert_eq!(history[0].total_credit, dec!(300));
    }

    #[test]
    fn unreported_years_are_skipped() {
        let records = vec![row("A", None, dec!(1_000_000), dec!(100))];
        assert!(partner_history(&records).is_empty());
    }
}
