//! Record source abstraction
//!
//! The engine places no constraint on how fiscal records are fetched,
//! cached or persisted — only that each record carries the full attribute
//! set with usable identifiers. This module defines that boundary: a trait
//! for scoped fetches and explicit malformed-record detection, so schema
//! drift in the upstream table surfaces here and not as wrong aggregates.

mod memory;

pub use memory::InMemorySource;

use thiserror::Error;
use tracing::debug;

use rust_decimal::Decimal;

use crate::types::FiscalRecord;

/// A record failed boundary validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record {index}: blank company_id")]
    BlankCompanyId { index: usize },

    #[error("record {index}: blank partner_id")]
    BlankPartnerId { index: usize },

    #[error("record {index}: group_id 0 is not a valid group number")]
    MissingGroupId { index: usize },

    #[error("record {index} ({company_id}): negative {field}")]
    NegativeAmount {
        index: usize,
        company_id: String,
        field: &'static str,
    },
}

/// Errors raised by a record source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("record source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed record: {0}")]
    Malformed(#[from] RecordError),
}

/// Trait abstracting where fiscal records come from.
///
/// Implementations handle fetching, caching and expiry internally; the
/// engine only sees fully materialized record vectors. All scopes return
/// records validated by [`validate_records`].
pub trait RecordSource {
    /// Every record in the current data set.
    ///
    /// # Errors
    ///
    /// [`SourceError`] when the backing store is unavailable or returns a
    /// malformed record.
    fn all_records(&self) -> Result<Vec<FiscalRecord>, SourceError>;

    /// Records for one economic group, across all its partners' companies.
    ///
    /// # Errors
    ///
    /// [`SourceError`] when the backing store is unavailable or returns a
    /// malformed record.
    fn group_records(&self, group_id: u64) -> Result<Vec<FiscalRecord>, SourceError>;

    /// Records for one company.
    ///
    /// # Errors
    ///
    /// [`SourceError`] when the backing store is unavailable or returns a
    /// malformed record.
    fn company_records(&self, company_id: &str) -> Result<Vec<FiscalRecord>, SourceError>;

    /// Records for one controlling partner, for history rollups.
    ///
    /// # Errors
    ///
    /// [`SourceError`] when the backing store is unavailable or returns a
    /// malformed record.
    fn partner_records(&self, partner_id: &str) -> Result<Vec<FiscalRecord>, SourceError>;

    /// Human-readable name for logging (e.g. "in-memory", "warehouse").
    fn source_name(&self) -> &str;
}

/// Validate a batch of records at the source boundary.
///
/// Rejects blank identifiers and negative monetary amounts. Validation is
/// explicit here so malformed upstream rows fail loudly instead of
/// producing silently wrong aggregates.
///
/// # Errors
///
/// The first [`RecordError`] encountered, with the record's index.
pub fn validate_records(records: &[FiscalRecord]) -> Result<(), RecordError> {
    for (index, record) in records.iter().enumerate() {
        if record.company_id.trim().is_empty() {
            return Err(RecordError::BlankCompanyId { index });
        }
        if record.partner_id.trim().is_empty() {
            return Err(RecordError::BlankPartnerId { index });
        }
        if record.group_id == 0 {
            return Err(RecordError::MissingGroupId { index });
        }
        if record.credit_amount < Decimal::ZERO {
            return Err(RecordError::NegativeAmount {
                index,
                company_id: record.company_id.clone(),
                field: "credit_amount",
            });
        }
        if record.revenue_at_trigger < Decimal::ZERO {
            return Err(RecordError::NegativeAmount {
                index,
                company_id: record.company_id.clone(),
                field: "revenue_at_trigger",
            });
        }
    }
    debug!(count = records.len(), "record batch validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FiscalAction;
    use rust_decimal_macros::dec;

    fn record(company: &str, partner: &str, group: u64) -> FiscalRecord {
        FiscalRecord {
            company_id: company.to_string(),
            company_name: None,
            group_id: group,
            partner_id: partner.to_string(),
            state: "SC".to_string(),
            credit_amount: dec!(10),
            revenue_at_trigger: dec!(100),
            gross_revenue: None,
            action: FiscalAction::ExclusionWithDebt,
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
    fn valid_batch_passes() {
        let records = vec![record("04252011", "11144477735", 1)];
        assert_eq!(validate_records(&records), Ok(()));
    }

    #[test]
    fn blank_company_id_is_rejected_with_index() {
        let records = vec![
            record("04252011", "11144477735", 1),
            record("   ", "11144477735", 1),
        ];
        assert_eq!(
            validate_records(&records),
            Err(RecordError::BlankCompanyId { index: 1 })
        );
    }

    #[test]
    fn zero_group_id_is_rejected() {
        let records = vec![record("04252011", "11144477735", 0)];
        assert_eq!(
            validate_records(&records),
            Err(RecordError::MissingGroupId { index: 0 })
        );
    }

    #[test]
    fn negative_credit_is_rejected() {
        let mut bad = record("04252011", "11144477735", 1);
        bad.credit_amount = dec!(-5);
        let err = validate_records(&[bad]).unwrap_err();
        assert!(matches!(
            err,
            RecordError::NegativeAmount {
                field: "credit_amount",
                ..
            }
        ));
    }
}
