//! # Jurisdiction Modules
//!
//! One file per legal regime. Every file follows the same layout:
//!
//! 1. Trigger ids and predicates.
//! 2. Rule tables and the static decision ladder.
//! 3. Obligation rules (drive artifacts/actions, not the level).
//! 4. Provision, artifact and action tables keyed on trigger ids.
//! 5. The module type and its [`JurisdictionModule`] impl.
//!
//! Content reflects the regime as enacted or finalised; pending bills and
//! guidance are cited as such.

pub(crate) use regscope_core::{
    ActionRequirement, ArtifactRequirement, ArtifactType, ComplianceTimeline, DataCategory,
    DecisionImpact, FinancialService, GpaiClassification, Priority, ProductContext, ProductType,
    Provision, RiskLevel, Sector, UserPopulation,
};
pub(crate) use regscope_core::timeline::ymd;

pub(crate) use crate::catalog::{actions, artifacts, templates};
pub(crate) use crate::jurisdiction::Jurisdiction;
pub(crate) use crate::module::JurisdictionModule;
pub(crate) use crate::predicates::*;
pub(crate) use crate::table::{self, ActionEntry, ArtifactEntry, ProvisionEntry};
pub(crate) use crate::trigger::{RiskLadder, Rung, TriggerRule};

pub mod brazil;
pub mod china;
pub mod eu_ai_act;
pub mod eu_gdpr;
pub mod singapore;
pub mod uk;
pub mod us_ca;
pub mod us_co;
pub mod us_federal;
pub mod us_il;
pub mod us_ny;
pub mod us_tx;
