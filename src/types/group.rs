//! Derived group entities
//!
//! A group is identified by `(group_id, partner_id)` and is always computed
//! on demand from the current record set, never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FiscalAction, IncisionClause};
use crate::engine::aggregate::GroupAggregate;

/// Identity of an economic group: group number plus controlling partner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupKey {
    /// Economic-group number assigned upstream
    pub group_id: u64,
    /// Controlling-partner identifier (CPF)
    pub partner_id: String,
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id, self.partner_id)
    }
}

/// Fully reduced view of one group, ready for the ranking engine.
///
/// Produced by the per-group pipeline (dedup → aggregate → classify).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    pub key: GroupKey,
    /// Company count for the group as originally reported by the source
    pub reported_company_count: u32,
    /// Partner count for the group as originally reported by the source
    pub reported_partner_count: u32,
    /// Aggregates computed over the canonical (post-dedup) rows
    pub aggregate: GroupAggregate,
    /// Most severe action among the group's members
    pub dominant_action: FiscalAction,
    /// Strongest statutory clause among the group's members
    pub dominant_incision: Option<IncisionClause>,
    /// Latest reporting-period label present in the group
    pub dominant_period: Option<String>,
    /// Ceiling situation label reported upstream, when present
    pub limit_status: Option<String>,
    /// Duplicate company rows removed while building this summary
    pub duplicates_removed: usize,
}

/// Statutory revenue-ceiling breach for one group.
///
/// Present when the group's maximum trigger revenue exceeds the simplified
/// regime's gross-revenue ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitBreach {
    /// The ceiling the revenue was tested against
    pub ceiling: Decimal,
    /// The offending revenue figure
    pub max_trigger_revenue: Decimal,
    /// Amount above the ceiling
    pub excess: Decimal,
    /// Excess as a percentage of the ceiling
    pub percent_over: f64,
}
