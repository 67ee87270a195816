//! # Requirement Mapper
//!
//! Resolves each target market against the registry and runs the module's
//! operations over one borrowed context snapshot.
//!
//! ## Failure isolation
//!
//! [`map_all_jurisdictions`] never aborts: an unregistered id becomes a
//! [`MappingFailure`] and the remaining markets are still mapped. Results
//! and failures are both in `target_markets` order.

use serde::{Deserialize, Serialize};

use regscope_core::{ActionRequirement, JurisdictionId, JurisdictionResult, ProductContext};
use regscope_jurisdictions::JurisdictionRegistry;

use crate::error::MappingError;

/// A jurisdiction that could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingFailure {
    pub jurisdiction: JurisdictionId,
    /// Display form of the underlying error.
    pub error: String,
}

/// Results and failures of a batch mapping run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingOutcome {
    pub results: Vec<JurisdictionResult>,
    pub errors: Vec<MappingFailure>,
}

impl MappingOutcome {
    /// The result for `id`, if it was mapped.
    pub fn result_for(&self, id: &JurisdictionId) -> Option<&JurisdictionResult> {
        self.results.iter().find(|r| &r.jurisdiction == id)
    }

    /// The failure for `id`, if mapping it failed.
    pub fn failure_for(&self, id: &JurisdictionId) -> Option<&MappingFailure> {
        self.errors.iter().find(|f| &f.jurisdiction == id)
    }
}

/// Split a module's action list into `(required, recommended)`.
///
/// Every action lands in exactly one bucket; order within a bucket is the
/// module's order.
pub fn partition_actions(
    actions: Vec<ActionRequirement>,
) -> (Vec<ActionRequirement>, Vec<ActionRequirement>) {
    actions.into_iter().partition(|a| a.priority.is_required())
}

/// Map one jurisdiction.
///
/// # Errors
///
/// Returns [`MappingError::Registry`] if `id` is not registered.
pub fn map_jurisdiction(
    ctx: &ProductContext,
    id: &JurisdictionId,
    registry: &JurisdictionRegistry,
) -> Result<JurisdictionResult, MappingError> {
    let entry = registry.get(id)?;
    let module = &entry.module;

    let risk_classification = module.risk_level(ctx);
    let (required_actions, recommended_actions) = partition_actions(module.required_actions(ctx));

    tracing::debug!(
        jurisdiction = %id,
        level = %risk_classification.level,
        required = required_actions.len(),
        recommended = recommended_actions.len(),
        "mapped jurisdiction"
    );

    Ok(JurisdictionResult {
        jurisdiction: id.clone(),
        applicable_laws: module.applicable_provisions(ctx),
        risk_classification,
        required_artifacts: module.required_artifacts(ctx),
        required_actions,
        recommended_actions,
        compliance_timeline: module.timeline(ctx),
        gpai_classification: module.gpai_classification(ctx),
    })
}

/// Map every target market in order, isolating failures.
pub fn map_all_jurisdictions(
    ctx: &ProductContext,
    registry: &JurisdictionRegistry,
) -> MappingOutcome {
    let mut outcome = MappingOutcome::default();
    for id in &ctx.target_markets {
        match map_jurisdiction(ctx, id, registry) {
            Ok(result) => outcome.results.push(result),
            Err(err) => {
                tracing::warn!(jurisdiction = %id, error = %err, "jurisdiction not mapped");
                outcome.errors.push(MappingFailure {
                    jurisdiction: id.clone(),
                    error: err.to_string(),
                });
            }
        }
    }
    tracing::info!(
        mapped = outcome.results.len(),
        failed = outcome.errors.len(),
        "mapping run complete"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use regscope_core::{Priority, ProductType};
    use regscope_jurisdictions::{Jurisdiction, RegistryConfig};

    fn ctx(markets: &[&str]) -> ProductContext {
        ProductContext::new(
            "Marketing copy generator",
            ProductType::Generator,
            markets
                .iter()
                .map(|m| JurisdictionId::new(*m).unwrap())
                .collect(),
        )
    }

    #[test]
    fn partition_is_total_and_ordered() {
        let actions = vec![
            ActionRequirement::new("a", "A", "", "", Priority::Recommended),
            ActionRequirement::new("b", "B", "", "", Priority::Critical),
            ActionRequirement::new("c", "C", "", "", Priority::Important),
        ];
        let (required, recommended) = partition_actions(actions);
        let ids = |v: &[ActionRequirement]| v.iter().map(|a| a.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&required), vec!["b", "c"]);
        assert_eq!(ids(&recommended), vec!["a"]);
    }

    #[test]
    fn unregistered_jurisdiction_is_an_error() {
        let registry = JurisdictionRegistry::new();
        let c = ctx(&["china"]);
        let err = map_jurisdiction(&c, &c.target_markets[0], &registry).unwrap_err();
        assert_eq!(err.to_string(), "jurisdiction 'china' is not registered");
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let registry =
            JurisdictionRegistry::from_config(&RegistryConfig::only(&[Jurisdiction::China]))
                .unwrap();
        let c = ctx(&["us-federal", "china", "brazil"]);
        let outcome = map_all_jurisdictions(&c, &registry);

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].jurisdiction.as_str(), "china");
        let failed: Vec<&str> = outcome.errors.iter().map(|f| f.jurisdiction.as_str()).collect();
        assert_eq!(failed, vec!["us-federal", "brazil"]);
        assert!(outcome.failure_for(&c.target_markets[0]).is_some());
        assert!(outcome.result_for(&c.target_markets[1]).is_some());
    }

    #[test]
    fn results_follow_target_market_order() {
        let registry = JurisdictionRegistry::with_builtins();
        let c = ctx(&["uk", "brazil", "eu-ai-act"]);
        let outcome = map_all_jurisdictions(&c, &registry);
        let order: Vec<&str> = outcome.results.iter().map(|r| r.jurisdiction.as_str()).collect();
        assert_eq!(order, vec!["uk", "brazil", "eu-ai-act"]);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn recommended_actions_are_split_out() {
        let registry = JurisdictionRegistry::with_builtins();
        let c = ctx(&["brazil"]);
        let result = map_jurisdiction(&c, &c.target_markets[0], &registry).unwrap();
        assert!(result.required_actions.iter().all(|a| a.priority.is_required()));
        assert!(result
            .recommended_actions
            .iter()
            .all(|a| a.priority == Priority::Recommended));
        assert!(!result.recommended_actions.is_empty());
    }
}
