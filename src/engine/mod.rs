//! Group Aggregation, Deduplication & Ranking Engine
//!
//! The core pipeline that turns a flat table of per-company-period fiscal
//! records into deduplicated, aggregated, ranked economic-group entities:
//!
//! - **Deduplicator**: one canonical row per company under a deterministic
//!   tie-break policy
//! - **Aggregator**: group-level counts, sums and maxima
//! - **Classifier**: worst-case-wins dominant fiscal action
//! - **Ranking engine**: filter, order, truncate
//!
//! Every component is a pure, synchronous function over in-memory inputs.
//! No state is carried across calls, so the whole pipeline is safe to invoke
//! concurrently and to parallelize across independent groups.

pub mod aggregate;
pub mod classifier;
pub mod dedup;
pub mod distribution;
pub mod history;
pub mod overview;
pub mod pipeline;
pub mod ranking;

use thiserror::Error;

/// Structural errors raised by the engine.
///
/// These are never silently defaulted. The only sanctioned silent fallback
/// is the zero-row aggregate when aggregation input is legitimately empty.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The classifier was invoked on zero records. A group must always have
    /// at least one member when classified.
    #[error("cannot classify an empty group")]
    EmptyGroup,

    /// A malformed filter or limit was passed to the ranking engine.
    #[error("invalid ranking filter: {0}")]
    InvalidFilter(String),
}

pub use aggregate::GroupAggregate;
pub use classifier::classify;
pub use dedup::{deduplicate, DedupOutcome};
pub use pipeline::{group_detail, run, GroupDetail, PipelineOutput};
pub use ranking::rank;
