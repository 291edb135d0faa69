//! Ranking and report output types
//!
//! Everything here is computed fresh per query, handed to the presentation
//! collaborator, and discarded. Presentation must not re-derive aggregates
//! from raw records (that would reintroduce the double-counting the
//! deduplicator exists to prevent).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FiscalAction, IncisionClause};

/// Filter predicates applied by the ranking engine before truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Inclusive lower bound on total credit. Zero means no filter.
    pub min_credit: Decimal,
    /// Inclusive lower bound on the *reported* company count. The domain
    /// floor is 2: a group is definitionally two or more companies.
    pub min_company_count: u32,
    /// Dominant actions to retain. Empty means no filter.
    pub allowed_actions: Vec<FiscalAction>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            min_credit: Decimal::ZERO,
            min_company_count: 2,
            allowed_actions: Vec::new(),
        }
    }
}

/// One row of the prioritized-review ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedGroupSummary {
    /// 1-based position in the ranking
    pub position: usize,
    pub group_id: u64,
    pub partner_id: String,
    /// Sum of credit over the group's canonical rows
    pub total_credit: Decimal,
    /// Highest trigger revenue among the group's canonical rows
    pub max_trigger_revenue: Decimal,
    /// Most severe action among the group's members
    pub dominant_action: FiscalAction,
    /// Distinct companies after deduplication
    pub company_count: usize,
    /// Companies registered in the authority's own state
    pub in_state_company_count: usize,
    /// Company count as originally reported by the source
    pub reported_company_count: u32,
    /// Partner count as originally reported by the source
    pub reported_partner_count: u32,
    /// In-state companies with an exclusion notice to be issued
    pub notice_count: usize,
    pub dominant_incision: Option<IncisionClause>,
    pub dominant_period: Option<String>,
}

/// Global KPI block over the full record set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverviewStats {
    /// Distinct economic groups
    pub group_count: usize,
    /// Distinct companies
    pub company_count: usize,
    /// Distinct controlling partners
    pub partner_count: usize,
    /// Distinct companies registered in the home state
    pub in_state_company_count: usize,
    /// Rows per action bucket
    pub with_debt_count: usize,
    pub without_debt_count: usize,
    pub no_interest_count: usize,
    pub total_credit: Decimal,
    pub mean_credit: Decimal,
    pub max_credit: Decimal,
    /// In-state companies with an exclusion notice to be issued
    pub notice_count: usize,
    pub total_revenue: Decimal,
    pub mean_revenue: Decimal,
}

/// Rollup of one fiscal-action bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionBreakdown {
    pub action: FiscalAction,
    pub group_count: usize,
    pub company_count: usize,
    pub total_credit: Decimal,
    pub mean_credit: Decimal,
    pub mean_revenue: Decimal,
    pub max_revenue: Decimal,
}

/// Rollup of one registration state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateBreakdown {
    pub state: String,
    pub group_count: usize,
    pub company_count: usize,
    pub total_credit: Decimal,
    pub mean_credit: Decimal,
    /// Companies with an exclusion notice to be issued
    pub notice_count: usize,
    /// Companies in the with-debt action bucket
    pub with_debt_count: usize,
}

/// Rollup of one reporting-period label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodBreakdown {
    pub period: String,
    pub group_count: usize,
    pub company_count: usize,
    pub total_credit: Decimal,
    pub mean_credit: Decimal,
}

/// Rollup of one statutory clause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncisionBreakdown {
    pub incision: IncisionClause,
    pub group_count: usize,
    pub company_count: usize,
    pub partner_count: usize,
    pub total_credit: Decimal,
    pub mean_revenue: Decimal,
}

/// One assessment year of a controlling partner's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyHistory {
    pub year: u16,
    /// Distinct companies observed for the partner in the year
    pub company_count: usize,
    pub total_gross_revenue: Decimal,
    pub mean_gross_revenue: Decimal,
    pub total_credit: Decimal,
}
