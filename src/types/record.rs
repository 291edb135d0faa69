//! Fiscal record types
//!
//! The record source's schema-less tabular rows map onto [`FiscalRecord`],
//! a value type with named, typed fields. Malformed-record detection happens
//! at the source boundary (see `source::validate_records`), not here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row per (company, reporting period) observation.
///
/// Immutable once sourced; owned by the record source. The engine never
/// mutates records, it only selects, groups and reduces them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalRecord {
    // === Identity ===
    /// Root taxpayer identifier (CNPJ root, 8 digits)
    pub company_id: String,
    /// Registered company name (razão social), when reported
    #[serde(default)]
    pub company_name: Option<String>,
    /// Economic-group number assigned upstream
    pub group_id: u64,
    /// Controlling-partner identifier (CPF, 11 digits)
    pub partner_id: String,
    /// Registration state (UF)
    pub state: String,

    // === Monetary ===
    /// Tax credit: principal + interest + penalty, >= 0
    pub credit_amount: Decimal,
    /// Revenue at the triggering event, tested against the statutory ceiling
    pub revenue_at_trigger: Decimal,
    /// Gross annual revenue (RBA), when reported
    #[serde(default)]
    pub gross_revenue: Option<Decimal>,

    // === Classification ===
    /// Fiscal action determined upstream for this company/period
    pub action: FiscalAction,
    /// Opaque reporting-period label (AAAAMM)
    #[serde(default)]
    pub period_flag: Option<String>,
    /// Statutory clause under which the company was flagged
    #[serde(default)]
    pub incision: Option<IncisionClause>,
    /// Whether an exclusion notice is to be issued (home-state companies only)
    #[serde(default)]
    pub issues_exclusion_notice: bool,
    /// Registry status (active, suspended, ...)
    #[serde(default)]
    pub registration_status: Option<String>,
    /// Ceiling situation label reported upstream
    #[serde(default)]
    pub limit_status: Option<String>,

    // === Upstream-reported group shape ===
    /// Company count for the whole group, as originally reported
    #[serde(default)]
    pub reported_company_count: u32,
    /// Partner count for the whole group, as originally reported
    #[serde(default)]
    pub reported_partner_count: u32,
    /// Assessment year this observation belongs to, when reported
    #[serde(default)]
    pub assessment_year: Option<u16>,
}

/// Fiscal action attached to a record.
///
/// Classification reduces a group to its most severe member action, so the
/// priority lives here as an explicit [`severity`](Self::severity) ranking
/// rather than in nested conditionals at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiscalAction {
    /// Company has outstanding tax credit; exclusion with debt collection
    #[serde(rename = "EXCLUSION_WITH_DEBT")]
    ExclusionWithDebt,
    /// Exclusion applies but no credit was assessed
    #[serde(rename = "EXCLUSION_WITHOUT_DEBT")]
    ExclusionWithoutDebt,
    /// Out of jurisdiction or regime already closed
    #[serde(rename = "NO_INTEREST")]
    NoInterest,
}

impl FiscalAction {
    /// Classification priority: the highest severity in a group wins.
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::ExclusionWithDebt => 2,
            Self::ExclusionWithoutDebt => 1,
            Self::NoInterest => 0,
        }
    }
}

impl std::fmt::Display for FiscalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExclusionWithDebt => write!(f, "EXCLUSION_WITH_DEBT"),
            Self::ExclusionWithoutDebt => write!(f, "EXCLUSION_WITHOUT_DEBT"),
            Self::NoInterest => write!(f, "NO_INTEREST"),
        }
    }
}

/// Statutory clause (LC 123/2006, Art. 3, §4) under which a company was
/// flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncisionClause {
    /// Clause III: partner in two or more simplified-regime companies
    #[serde(rename = "CLAUSE_III")]
    ClauseIii,
    /// Clause IV: >10% stake in a company outside the regime
    #[serde(rename = "CLAUSE_IV")]
    ClauseIv,
    /// Both clauses apply
    #[serde(rename = "BOTH")]
    Both,
}

impl IncisionClause {
    /// Reduction priority when a group carries mixed clauses.
    ///
    /// Both clauses applying is the strongest finding, then clause IV
    /// (stake outside the regime), then clause III.
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::Both => 2,
            Self::ClauseIv => 1,
            Self::ClauseIii => 0,
        }
    }
}

impl std::fmt::Display for IncisionClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClauseIii => write!(f, "CLAUSE_III"),
            Self::ClauseIv => write!(f, "CLAUSE_IV"),
            Self::Both => write!(f, "BOTH"),
        }
    }
}
