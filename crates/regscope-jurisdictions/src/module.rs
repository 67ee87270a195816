//! # The Jurisdiction Module Contract
//!
//! Every legal regime implements [`JurisdictionModule`]. Implementations are
//! pure, stateless and deterministic: each operation is a function of the
//! borrowed `ProductContext` alone, performs no I/O and cannot fail.
//!
//! The risk classification is driven by the module's [`RiskLadder`]. Artifacts
//! and actions are derived independently from the module's trigger set, so a
//! module decides for itself what a `minimal` product still owes.

use std::fmt;

use regscope_core::{
    ActionRequirement, ArtifactRequirement, ComplianceTimeline, GpaiClassification,
    ProductContext, Provision, RiskClassification, Trigger,
};

use crate::jurisdiction::Jurisdiction;
use crate::trigger::{RiskLadder, TriggerRule, TriggerSet};

/// Capability contract implemented once per legal regime.
pub trait JurisdictionModule: Send + Sync + fmt::Debug {
    /// The regime this module implements.
    fn jurisdiction(&self) -> Jurisdiction;

    /// The ordered decision ladder.
    fn ladder(&self) -> &'static RiskLadder;

    /// Rules that drive artifacts and actions but not the classification.
    fn obligation_rules(&self) -> &'static [TriggerRule] {
        &[]
    }

    /// Run the decision ladder.
    fn risk_level(&self, ctx: &ProductContext) -> RiskClassification {
        self.ladder().classify(ctx)
    }

    fn applicable_provisions(&self, ctx: &ProductContext) -> Vec<Provision>;

    fn required_artifacts(&self, ctx: &ProductContext) -> Vec<ArtifactRequirement>;

    /// The module's full action list, all priorities.
    fn required_actions(&self, ctx: &ProductContext) -> Vec<ActionRequirement>;

    fn timeline(&self, ctx: &ProductContext) -> ComplianceTimeline;

    /// GPAI model classification, for regimes that have one.
    fn gpai_classification(&self, _ctx: &ProductContext) -> Option<GpaiClassification> {
        None
    }

    /// Ladder rules and obligation rules evaluated together.
    fn triggers(&self, ctx: &ProductContext) -> TriggerSet {
        TriggerSet::evaluate(
            ctx,
            self.ladder().rules().chain(self.obligation_rules().iter()),
        )
    }

    /// Every trigger with its outcome and evidence, for explainability.
    fn evaluate_triggers(&self, ctx: &ProductContext) -> Vec<Trigger> {
        self.triggers(ctx).into_vec()
    }
}
