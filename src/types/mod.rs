//! Core value types for the group-analysis engine.

mod group;
mod record;
mod summary;

pub use group::{GroupKey, GroupSummary, LimitBreach};
pub use record::{FiscalAction, FiscalRecord, IncisionClause};
pub use summary::{
    ActionBreakdown, FilterSpec, IncisionBreakdown, OverviewStats, PeriodBreakdown,
    RankedGroupSummary, StateBreakdown, YearlyHistory,
};
