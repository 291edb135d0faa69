//! Dominant fiscal action classification
//!
//! A single company with outstanding debt elevates the whole group to the
//! highest-severity bucket regardless of how many other members have no
//! issue. This is a monotonic worst-case-wins reduction over the severity
//! ranking on [`FiscalAction`], not a majority vote.

use crate::types::{FiscalAction, FiscalRecord};

use super::EngineError;

/// Reduce a group's records to its dominant fiscal action.
///
/// Priority order, first match wins:
/// 1. any `EXCLUSION_WITH_DEBT` → `EXCLUSION_WITH_DEBT`
/// 2. any `EXCLUSION_WITHOUT_DEBT` → `EXCLUSION_WITHOUT_DEBT`
/// 3. otherwise `NO_INTEREST`
///
/// # Errors
///
/// Returns [`EngineError::EmptyGroup`] on empty input. The caller must
/// guarantee at least one record; defaulting silently would hide a broken
/// grouping step upstream.
pub fn classify(records: &[FiscalRecord]) -> Result<FiscalAction, EngineError> {
    records
        .iter()
        .map(|r| r.action)
        .max_by_key(|a| a.severity())
        .ok_or(EngineError::EmptyGroup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FiscalRecord;
    use rust_decimal::Decimal;

    fn record(action: FiscalAction) -> FiscalRecord {
        FiscalRecord {
            company_id: "04252011".to_string(),
            company_name: None,
            group_id: 7,
            partner_id: "52998224725".to_string(),
            state: "SC".to_string(),
            credit_amount: Decimal::ZERO,
            revenue_at_trigger: Decimal::ZERO,
            gross_revenue: None,
            action,
            period_flag: None,
            incision: None,
            issues_exclusion_notice: false,
            registration_status: None,
            limit_status: None,
            reported_company_count: 2,
            reported_partner_count: 1,
            assessment_year: None,
        }
    }

    #[test]
    fn any_debt_record_dominates() {
        let records = vec![
            record(FiscalAction::NoInterest),
            record(FiscalAction::ExclusionWithDebt),
            record(FiscalAction::NoInterest),
            record(FiscalAction::ExclusionWithoutDebt),
        ];
        assert_eq!(classify(&records), Ok(FiscalAction::ExclusionWithDebt));
    }

    #[test]
    fn without_debt_beats_no_interest() {
        let records = vec![
            record(FiscalAction::NoInterest),
            record(FiscalAction::ExclusionWithoutDebt),
        ];
        assert_eq!(classify(&records), Ok(FiscalAction::ExclusionWithoutDebt));
    }

    #[test]
    fn all_no_interest_stays_no_interest() {
        let records = vec![record(FiscalAction::NoInterest); 3];
        assert_eq!(classify(&records), Ok(FiscalAction::NoInterest));
    }

    #[test]
    fn empty_group_is_an_error() {
        assert_eq!(classify(&[]), Err(EngineError::EmptyGroup));
    }

    #[test]
    fn adding_debt_records_never_lowers_the_result() {
        // Monotonicity: once WITH_DEBT is dominant, more WITH_DEBT records
        // cannot change the outcome.
        let mut records = vec![
            record(FiscalAction::ExclusionWithoutDebt),
            record(FiscalAction::ExclusionWithDebt),
        ];
        assert_eq!(classify(&records), Ok(FiscalAction::ExclusionWithDebt));
        for _ in 0..4 {
            records.push(record(FiscalAction::ExclusionWithDebt));
            assert_eq!(classify(&records), Ok(FiscalAction::ExclusionWithDebt));
        }
    }
}
