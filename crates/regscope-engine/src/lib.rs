//! # regscope-engine: Requirement Mapping
//!
//! Turns a [`ProductContext`](regscope_core::ProductContext) and a
//! [`JurisdictionRegistry`](regscope_jurisdictions::JurisdictionRegistry)
//! into per-jurisdiction results and the cross-jurisdiction views built on
//! them.
//!
//! ## Pipeline
//!
//! 1. **Mapper** (`mapper.rs`): resolve each target market, invoke its
//!    module, split actions into required and recommended. Unregistered
//!    markets are recorded as failures; the batch always completes.
//!
//! 2. **Aggregation** (`aggregate.rs`): flatten artifacts and actions and
//!    pick the highest classification (earliest wins ties).
//!
//! 3. **Dedup** (`dedup.rs`): merge requirements by id, keeping the highest
//!    priority and every contributing jurisdiction.
//!
//! 4. **Conflicts** (`conflict.rs`): advisory tensions between present
//!    jurisdictions, from a fixed rule table.
//!
//! 5. **Report** (`report.rs`): all of the above plus fingerprints in one
//!    call to [`evaluate`].
//!
//! ## Crate Policy
//!
//! - Every operation borrows its inputs; there is no shared mutable state.
//! - No subscriber is installed here. Events go through `tracing` and the
//!   embedding application decides where they land.

pub mod aggregate;
pub mod conflict;
pub mod dedup;
pub mod error;
pub mod mapper;
pub mod report;

pub use aggregate::{aggregate_requirements, AggregateSummary};
pub use conflict::{detect_conflicts, tensions_fingerprint, ConflictTension};
pub use dedup::{dedup_and_prioritize, merge_actions, merge_artifacts, MergedRequirement, Prioritized};
pub use error::MappingError;
pub use mapper::{
    map_all_jurisdictions, map_jurisdiction, partition_actions, MappingFailure, MappingOutcome,
};
pub use report::{evaluate, risk_summary, ComplianceReport, JurisdictionRisk, ReportFingerprints};
