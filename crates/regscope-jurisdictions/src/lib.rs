//! # regscope-jurisdictions: Regulatory Rule Bundles
//!
//! One pure, stateless module per legal regime, plus the machinery they
//! share:
//!
//! - **Module contract** (`module.rs`): the [`JurisdictionModule`] trait.
//!   Every operation borrows the `ProductContext`, performs no I/O and
//!   cannot fail.
//!
//! - **Triggers** (`trigger.rs`): evidence-producing [`TriggerRule`]s and
//!   the explicit, ordered [`RiskLadder`] that turns them into a risk level.
//!
//! - **Predicates** (`predicates.rs`): checks shared across regimes
//!   (personal data, consequential decisions, generative output, ...).
//!
//! - **Tables** (`table.rs`, `catalog.rs`): provisions, artifacts and actions
//!   authored as static tables keyed on trigger ids, with shared ids for
//!   obligations that recur across regimes.
//!
//! - **Regimes** (`regimes/`): the twelve built-in jurisdictions, addressed by
//!   the closed [`Jurisdiction`] tag.
//!
//! - **Registry** (`registry.rs`, `config.rs`): the id-to-module table the
//!   engine resolves against, built explicitly from code or configuration.
//!
//! ## Crate Policy
//!
//! - Depends on `regscope-core` only.
//! - Rule tables are `const`/`static`; there is no global mutable state.

pub mod catalog;
pub mod config;
pub mod error;
pub mod jurisdiction;
pub mod module;
pub mod predicates;
pub mod regimes;
pub mod registry;
pub mod table;
pub mod trigger;

pub use config::{RegistryConfig, RegistryEntryConfig};
pub use error::{ConfigError, RegistryError};
pub use jurisdiction::Jurisdiction;
pub use module::JurisdictionModule;
pub use registry::{JurisdictionRegistry, RegistryEntry};
pub use trigger::{RiskLadder, Rung, TriggerRule, TriggerSet};

#[cfg(test)]
mod tests {
    //! Contract checks run against every built-in module.

    use std::collections::HashSet;

    use regscope_core::{
        AgenticAiContext, AutomationLevel, AutonomyLevel, DataCategory, DecisionImpact,
        GenerativeAiContext, JurisdictionId, ProductContext, ProductType, RiskLevel,
        UserPopulation,
    };

    use super::*;

    fn samples() -> Vec<ProductContext> {
        let markets: Vec<JurisdictionId> = Jurisdiction::all().iter().map(|j| j.id()).collect();
        let base = |d: &str, t: ProductType| ProductContext::new(d, t, markets.clone());
        vec![
            base("Inventory forecasting", ProductType::Predictor),
            base("Customer support chatbot", ProductType::Generator)
                .with_data([DataCategory::Personal])
                .with_populations([UserPopulation::Consumers])
                .with_generative(GenerativeAiContext {
                    generates_text: true,
                    public_facing: true,
                    ..Default::default()
                }),
            base("Resume screening", ProductType::Ranker)
                .with_data([DataCategory::Personal, DataCategory::Employment])
                .with_populations([UserPopulation::JobApplicants])
                .with_decision_impact(DecisionImpact::Determinative)
                .with_automation(AutomationLevel::FullyAutomated),
            base("Face verification at turnstiles", ProductType::Classifier)
                .with_data([DataCategory::Biometric]),
            base("Procurement agent", ProductType::Agent)
                .with_agentic(AgenticAiContext::new(AutonomyLevel::Autonomous)),
        ]
    }

    #[test]
    fn ladders_never_yield_undetermined() {
        for jurisdiction in Jurisdiction::all() {
            let module = jurisdiction.module();
            for ctx in samples() {
                assert_ne!(module.risk_level(&ctx).level, RiskLevel::Undetermined);
            }
        }
    }

    #[test]
    fn artifact_and_action_ids_are_unique_per_module() {
        for jurisdiction in Jurisdiction::all() {
            let module = jurisdiction.module();
            for ctx in samples() {
                let mut seen = HashSet::new();
                for a in module.required_artifacts(&ctx) {
                    assert!(seen.insert(a.id.clone()), "{jurisdiction}: artifact {}", a.id);
                }
                let mut seen = HashSet::new();
                for a in module.required_actions(&ctx) {
                    assert!(seen.insert(a.id.clone()), "{jurisdiction}: action {}", a.id);
                }
            }
        }
    }

    #[test]
    fn categories_are_satisfied_trigger_ids() {
        for jurisdiction in Jurisdiction::all() {
            let module = jurisdiction.module();
            for ctx in samples() {
                let satisfied: HashSet<String> = module
                    .evaluate_triggers(&ctx)
                    .into_iter()
                    .filter(|t| t.satisfied)
                    .map(|t| t.id)
                    .collect();
                let classification = module.risk_level(&ctx);
                for category in &classification.applicable_categories {
                    assert!(satisfied.contains(category), "{jurisdiction}: {category}");
                }
                if classification.level == RiskLevel::Minimal {
                    assert!(classification.applicable_categories.is_empty());
                }
            }
        }
    }

    #[test]
    fn trigger_ids_are_prefixed_with_the_jurisdiction() {
        for jurisdiction in Jurisdiction::all() {
            let module = jurisdiction.module();
            let prefix = format!("{}.", jurisdiction.as_str());
            for trigger in module.evaluate_triggers(&samples()[0]) {
                assert!(trigger.id.starts_with(&prefix), "{}", trigger.id);
            }
        }
    }

    #[test]
    fn every_timeline_has_sorted_milestones() {
        for jurisdiction in Jurisdiction::all() {
            let timeline = jurisdiction.module().timeline(&samples()[0]);
            assert!(!timeline.milestones.is_empty(), "{jurisdiction}");
            let dates: Vec<_> = timeline.milestones.iter().map(|m| m.date).collect();
            let mut sorted = dates.clone();
            sorted.sort();
            assert_eq!(dates, sorted, "{jurisdiction}");
        }
    }

    #[test]
    fn only_eu_ai_act_classifies_gpai() {
        let model = samples()[0].clone().with_gpai(regscope_core::GpaiInfo {
            is_gpai_model: true,
            ..Default::default()
        });
        for jurisdiction in Jurisdiction::all() {
            let gpai = jurisdiction.module().gpai_classification(&model);
            assert_eq!(gpai.is_some(), *jurisdiction == Jurisdiction::EuAiAct);
        }
    }
}
