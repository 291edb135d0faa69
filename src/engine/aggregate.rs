//! Group-level aggregation
//!
//! Summary statistics over one group's canonical rows. Aggregation must run
//! after deduplication: summing pre-dedup rows would double-count credit.
//! Currency fields use exact decimal arithmetic so monetary sums never
//! drift.

use std::collections::HashSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{FiscalRecord, LimitBreach};

/// Summary statistics for one economic group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAggregate {
    /// Distinct companies after deduplication (not the raw row count)
    pub company_count: usize,
    /// Companies registered in the authority's own state
    pub in_state_company_count: usize,
    /// Sum of credit over all canonical rows
    pub total_credit: Decimal,
    /// Highest trigger revenue among the canonical rows
    pub max_trigger_revenue: Decimal,
    /// In-state companies with an exclusion notice to be issued
    pub notice_count: usize,
    /// Number of distinct registration states
    pub distinct_state_count: usize,
}

impl GroupAggregate {
    /// Compute aggregates over a group's canonical rows.
    ///
    /// `home_state` is the authority's own jurisdiction; notices are only
    /// counted for companies registered there. An empty slice yields the
    /// zero aggregate, which is the sanctioned fallback for a filter that
    /// matches nothing.
    #[must_use]
    pub fn from_canonical(rows: &[FiscalRecord], home_state: &str) -> Self {
        let mut states: HashSet<&str> = HashSet::new();
        let mut total_credit = Decimal::ZERO;
        let mut max_trigger_revenue = Decimal::ZERO;
        let mut in_state = 0;
        let mut notices = 0;

        for row in rows {
            states.insert(row.state.as_str());
            total_credit += row.credit_amount;
            max_trigger_revenue = max_trigger_revenue.max(row.revenue_at_trigger);
            if row.state == home_state {
                in_state += 1;
                if row.issues_exclusion_notice {
                    notices += 1;
                }
            }
        }

        Self {
            company_count: rows.len(),
            in_state_company_count: in_state,
            total_credit,
            max_trigger_revenue,
            notice_count: notices,
            distinct_state_count: states.len(),
        }
    }

    /// Mean credit per company. Zero when the group is empty.
    #[must_use]
    pub fn mean_credit(&self) -> Decimal {
        checked_mean(self.total_credit, self.company_count)
    }

    /// Share of companies registered in the home state, as a percentage.
    /// Zero when the group is empty.
    #[must_use]
    pub fn in_state_percent(&self) -> f64 {
        percent(self.in_state_company_count, self.company_count)
    }

    /// Share of in-state companies with a notice to issue, as a percentage.
    /// Zero when there are no in-state companies.
    #[must_use]
    pub fn notice_percent(&self) -> f64 {
        percent(self.notice_count, self.in_state_company_count)
    }

    /// Test the group's maximum trigger revenue against the statutory
    /// gross-revenue ceiling.
    ///
    /// Returns `None` while the group stays at or under the ceiling.
    #[must_use]
    pub fn limit_breach(&self, ceiling: Decimal) -> Option<LimitBreach> {
        if ceiling <= Decimal::ZERO || self.max_trigger_revenue <= ceiling {
            return None;
        }
        let excess = self.max_trigger_revenue - ceiling;
        let ratio = excess
            .checked_div(ceiling)
            .unwrap_or(Decimal::ZERO);
        Some(LimitBreach {
            ceiling,
            max_trigger_revenue: self.max_trigger_revenue,
            excess,
            percent_over: (ratio * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0),
        })
    }
}

/// Decimal mean with a zero-denominator guard.
pub(crate) fn checked_mean(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    total
        .checked_div(Decimal::from(count as u64))
        .unwrap_or(Decimal::ZERO)
}

/// Percentage with a zero-denominator guard.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    {
        part as f64 / whole as f64 * 100.0
    }
}
