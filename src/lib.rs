//! GENESIS: Economic-Group Analysis Engine
//!
//! Identifies economic groups — clusters of companies linked through a
//! common controlling partner — and ranks them by the tax credit each group
//! represents, for prioritizing enforcement action.
//!
//! ## Architecture
//!
//! - **Deduplicator**: one canonical row per company, deterministic tie-break
//! - **Aggregator**: group-level credit totals, revenue maxima, counts
//! - **Classifier**: worst-case-wins dominant fiscal action
//! - **Ranking Engine**: filtered, ordered, bounded top-N output
//!
//! Raw records flow strictly upward: record source → deduplicator →
//! aggregator → classifier → ranking engine. Every stage is a pure function
//! over in-memory inputs; per-group work parallelizes freely.

pub mod config;
pub mod engine;
pub mod format;
pub mod report;
pub mod source;
pub mod types;

// Re-export configuration
pub use config::EngineConfig;

// Re-export commonly used types
pub use types::{
    FilterSpec, FiscalAction, FiscalRecord, GroupKey, GroupSummary, IncisionClause, LimitBreach,
    OverviewStats, RankedGroupSummary,
};

// Re-export the engine surface
pub use engine::{
    classify, deduplicate, group_detail, rank, run, DedupOutcome, EngineError, GroupAggregate,
    GroupDetail, PipelineOutput,
};

// Re-export the record-source boundary
pub use source::{validate_records, InMemorySource, RecordError, RecordSource, SourceError};

// Re-export the report assembly
pub use report::ExecutiveReport;
