//! # regscope-core: Foundational Types for the Applicability Engine
//!
//! This crate defines the data model every other regscope crate reads and
//! produces. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `JurisdictionId` is validated at
//!    construction. No bare strings for jurisdiction addressing.
//!
//! 2. **Closed, ordered enums instead of string tables.** `RiskLevel` and
//!    `Priority` carry an explicit rank, so every comparison is exhaustive
//!    and type-checked.
//!
//! 3. **Read-only input.** The `ProductContext` is borrowed immutably by every
//!    operation in the engine. Nothing in the stack takes `&mut ProductContext`.
//!
//! 4. **Canonical fingerprints.** Results are fingerprinted through
//!    `CanonicalBytes::new()` and `sha256_digest()`, so two runs over the
//!    same context can be compared byte-for-byte.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `regscope-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone`, `Serialize`, `Deserialize`.

pub mod canonical;
pub mod classification;
pub mod context;
pub mod digest;
pub mod error;
pub mod identity;
pub mod requirement;
pub mod result;
pub mod timeline;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use classification::{Provision, RiskClassification, RiskLevel, Trigger};
pub use context::{
    AgenticAiContext, AutomationLevel, AutonomyLevel, DataCategory, DecisionImpact,
    ExistingMeasures, FinancialService, FinancialServicesContext, GenerativeAiContext, GpaiInfo,
    ProductContext, ProductType, Sector, SectorContext, TrainingDataContext, UserPopulation,
};
pub use digest::{sha256_digest, ContentDigest};
pub use error::{CanonicalizationError, RegscopeError, ValidationError};
pub use identity::JurisdictionId;
pub use requirement::{ActionRequirement, ArtifactRequirement, ArtifactType, Priority};
pub use result::{GpaiClassification, JurisdictionResult};
pub use timeline::{ComplianceTimeline, Milestone};
