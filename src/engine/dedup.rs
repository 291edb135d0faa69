//! Company deduplication
//!
//! Overlapping batch loads and multi-period observations produce repeated
//! rows for the same company. This module collapses them to one canonical
//! row per company under a deterministic tie-break policy, and reports how
//! many rows were removed so data-quality drift in the record source stays
//! visible without aborting the pipeline.

use std::cmp::Ordering;

use tracing::info;

use crate::types::FiscalRecord;

/// Result of a deduplication pass.
///
/// `removed` is the data-integrity report: zero means the input was already
/// canonical. It is returned, never silently dropped.
#[derive(Debug, Clone)]
pub struct DedupOutcome {
    /// Canonical rows, ordered by credit descending for presentation
    pub rows: Vec<FiscalRecord>,
    /// Number of duplicate rows discarded
    pub removed: usize,
}

impl DedupOutcome {
    /// Fraction of the input that was discarded as duplicates.
    ///
    /// Returns 0 for empty input.
    #[must_use]
    pub fn removal_rate(&self) -> f64 {
        let input_len = self.rows.len() + self.removed;
        if input_len == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.removed as f64 / input_len as f64
        }
    }
}

/// Dedup key order: company ascending, then credit and trigger revenue
/// descending.
///
/// Scanning in this order, the first row per company is the canonical one:
/// highest credit wins, trigger revenue breaks credit ties. This is the
/// tie-break policy itself, kept as a standalone comparator so it can be
/// tested independently of the scan.
#[must_use]
pub fn canonical_order(a: &FiscalRecord, b: &FiscalRecord) -> Ordering {
    a.company_id
        .cmp(&b.company_id)
        .then_with(|| b.credit_amount.cmp(&a.credit_amount))
        .then_with(|| b.revenue_at_trigger.cmp(&a.revenue_at_trigger))
}

/// Presentation order for canonical rows: credit descending, company
/// ascending on ties.
///
/// Intentionally different from [`canonical_order`]; the two must not be
/// conflated.
#[must_use]
pub fn presentation_order(a: &FiscalRecord, b: &FiscalRecord) -> Ordering {
    b.credit_amount
        .cmp(&a.credit_amount)
        .then_with(|| a.company_id.cmp(&b.company_id))
}

/// Collapse repeated rows for the same company into one canonical row each.
///
/// Stable-sorts by [`canonical_order`], keeps the first row encountered per
/// company, then re-sorts the survivors by [`presentation_order`]. Total
/// over any input: an empty input yields an empty output.
#[must_use]
pub fn deduplicate(mut records: Vec<FiscalRecord>) -> DedupOutcome {
    let input_len = records.len();

    records.sort_by(canonical_order);
    records.dedup_by(|next, kept| next.company_id == kept.company_id);

    let removed = input_len - records.len();
    if removed > 0 {
        info!(removed, kept = records.len(), "duplicate company rows removed");
    }

    records.sort_by(presentation_order);
    DedupOutcome { rows: records, removed }
}
