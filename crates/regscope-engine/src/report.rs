//! # Compliance Report
//!
//! [`evaluate`] runs the whole pipeline over one context: mapping,
//! aggregation, merged views, per-market risk summary, conflict detection
//! and fingerprints. Nothing here renders or persists the report; the
//! serialized form is for downstream layers.

use serde::Serialize;

use regscope_core::{
    ActionRequirement, ArtifactRequirement, ContentDigest, JurisdictionId, ProductContext,
    RiskLevel,
};
use regscope_jurisdictions::JurisdictionRegistry;

use crate::aggregate::{aggregate_requirements, AggregateSummary};
use crate::conflict::{detect_conflicts, tensions_fingerprint, ConflictTension};
use crate::dedup::{merge_actions, merge_artifacts, MergedRequirement};
use crate::error::MappingError;
use crate::mapper::{map_all_jurisdictions, MappingOutcome};

/// Headline risk for one target market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionRisk {
    pub jurisdiction: JurisdictionId,
    pub level: RiskLevel,
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFingerprints {
    /// One digest per mapped result, in result order.
    pub results: Vec<(JurisdictionId, ContentDigest)>,
    pub conflicts: ContentDigest,
}

/// Everything one evaluation run produces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub outcome: MappingOutcome,
    pub summary: AggregateSummary,
    pub merged_artifacts: Vec<MergedRequirement<ArtifactRequirement>>,
    pub merged_actions: Vec<MergedRequirement<ActionRequirement>>,
    pub risk_summary: Vec<JurisdictionRisk>,
    pub conflicts: Vec<ConflictTension>,
    pub fingerprints: ReportFingerprints,
}

impl ComplianceReport {
    /// Highest level across mapped markets, `Undetermined` when none mapped.
    pub fn headline_level(&self) -> RiskLevel {
        self.summary
            .highest_risk_level
            .as_ref()
            .map_or(RiskLevel::Undetermined, |c| c.level)
    }

    /// True when any target market could not be mapped.
    pub fn is_partial(&self) -> bool {
        !self.outcome.errors.is_empty()
    }
}

/// One entry per target market, in `target_markets` order.
///
/// Mapped markets report their classification; failed markets report
/// [`RiskLevel::Undetermined`] with the failure message.
pub fn risk_summary(ctx: &ProductContext, outcome: &MappingOutcome) -> Vec<JurisdictionRisk> {
    ctx.target_markets
        .iter()
        .filter_map(|id| {
            if let Some(result) = outcome.result_for(id) {
                Some(JurisdictionRisk {
                    jurisdiction: id.clone(),
                    level: result.risk_classification.level,
                    justification: result.risk_classification.justification.clone(),
                })
            } else {
                outcome.failure_for(id).map(|failure| JurisdictionRisk {
                    jurisdiction: id.clone(),
                    level: RiskLevel::Undetermined,
                    justification: failure.error.clone(),
                })
            }
        })
        .collect()
}

/// Run the full evaluation.
///
/// Unregistered markets do not fail the run; they appear in
/// `outcome.errors` and as `Undetermined` in the risk summary.
///
/// # Errors
///
/// Returns [`MappingError::Fingerprint`] if a result or the tension list
/// cannot be canonicalized.
pub fn evaluate(
    ctx: &ProductContext,
    registry: &JurisdictionRegistry,
) -> Result<ComplianceReport, MappingError> {
    let outcome = map_all_jurisdictions(ctx, registry);
    let summary = aggregate_requirements(&outcome.results);
    let merged_artifacts = merge_artifacts(&outcome.results);
    let merged_actions = merge_actions(&outcome.results);
    let risk_summary = risk_summary(ctx, &outcome);
    let conflicts = detect_conflicts(ctx, &outcome.results);

    let results = outcome
        .results
        .iter()
        .map(|r| r.fingerprint().map(|digest| (r.jurisdiction.clone(), digest)))
        .collect::<Result<Vec<_>, _>>()?;
    let fingerprints = ReportFingerprints {
        results,
        conflicts: tensions_fingerprint(&conflicts)?,
    };

    tracing::info!(
        headline = %summary
            .highest_risk_level
            .as_ref()
            .map_or(RiskLevel::Undetermined, |c| c.level),
        conflicts = conflicts.len(),
        merged_actions = merged_actions.len(),
        "evaluation complete"
    );

    Ok(ComplianceReport {
        outcome,
        summary,
        merged_artifacts,
        merged_actions,
        risk_summary,
        conflicts,
        fingerprints,
    })
}
