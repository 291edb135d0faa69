//! In-memory record source
//!
//! Serves a pre-loaded record set. Used by tests and by callers that
//! materialize records elsewhere (a warehouse extract, a file load) before
//! handing them to the engine.

use crate::types::FiscalRecord;

use super::{validate_records, RecordSource, SourceError};

/// Record source backed by a pre-loaded vector.
///
/// Records are validated once at construction; scoped fetches are clones
/// of the matching subset.
pub struct InMemorySource {
    records: Vec<FiscalRecord>,
}

impl InMemorySource {
    /// Build a source from pre-loaded records.
    ///
    /// # Errors
    ///
    /// [`SourceError::Malformed`] when any record fails boundary
    /// validation.
    pub fn new(records: Vec<FiscalRecord>) -> Result<Self, SourceError> {
        validate_records(&records)?;
        Ok(Self { records })
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the source holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for InMemorySource {
    fn all_records(&self) -> Result<Vec<FiscalRecord>, SourceError> {
        Ok(self.records.clone())
    }

    fn group_records(&self, group_id: u64) -> Result<Vec<FiscalRecord>, SourceError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.group_id == group_id)
            .cloned()
            .collect())
    }

    fn company_records(&self, company_id: &str) -> Result<Vec<FiscalRecord>, SourceError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.company_id == company_id)
            .cloned()
            .collect())
    }

    fn partner_records(&self, partner_id: &str) -> Result<Vec<FiscalRecord>, SourceError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.partner_id == partner_id)
            .cloned()
            .collect())
    }

    fn source_name(&self) -> &str {
        "in-memory"
    }
}
