//! # Cross-Jurisdiction Aggregation
//!
//! Flattens every result's artifacts and actions without deduplication and
//! picks the highest risk classification. Merged views live in
//! [`crate::dedup`].

use serde::{Deserialize, Serialize};

use regscope_core::{ActionRequirement, ArtifactRequirement, JurisdictionResult, RiskClassification};

/// Flattened requirements across all mapped jurisdictions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub all_artifacts: Vec<ArtifactRequirement>,
    /// Required then recommended actions of each result, in result order.
    pub all_actions: Vec<ActionRequirement>,
    /// `None` when there are no results.
    pub highest_risk_level: Option<RiskClassification>,
    pub total_artifacts: usize,
    pub total_actions: usize,
}

/// Reduce results to one summary.
///
/// The highest classification is replaced only by one of strictly greater
/// rank, so ties keep the earliest result.
pub fn aggregate_requirements(results: &[JurisdictionResult]) -> AggregateSummary {
    let mut summary = AggregateSummary::default();
    for result in results {
        summary
            .all_artifacts
            .extend(result.required_artifacts.iter().cloned());
        summary.all_actions.extend(result.all_actions().cloned());

        let candidate = &result.risk_classification;
        let replace = match &summary.highest_risk_level {
            None => true,
            Some(best) => candidate.level.rank() > best.level.rank(),
        };
        if replace {
            summary.highest_risk_level = Some(candidate.clone());
        }
    }
    summary.total_artifacts = summary.all_artifacts.len();
    summary.total_actions = summary.all_actions.len();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use regscope_core::{
        ArtifactType, ComplianceTimeline, JurisdictionId, Priority, RiskLevel,
    };

    fn result(id: &str, level: RiskLevel, justification: &str) -> JurisdictionResult {
        JurisdictionResult {
            jurisdiction: JurisdictionId::new(id).unwrap(),
            applicable_laws: vec![],
            risk_classification: RiskClassification {
                level,
                justification: justification.into(),
                applicable_categories: vec![],
                provisions: vec![],
            },
            required_artifacts: vec![ArtifactRequirement::required(
                "dpia",
                ArtifactType::DataProtectionAssessment,
                "DPIA",
            )],
            required_actions: vec![ActionRequirement::new("x", "X", "", "", Priority::Critical)],
            recommended_actions: vec![ActionRequirement::new(
                "y",
                "Y",
                "",
                "",
                Priority::Recommended,
            )],
            compliance_timeline: ComplianceTimeline::default(),
            gpai_classification: None,
        }
    }

    #[test]
    fn empty_input_has_no_highest_level() {
        let summary = aggregate_requirements(&[]);
        assert!(summary.highest_risk_level.is_none());
        assert_eq!(summary.total_actions, 0);
    }

    #[test]
    fn picks_strictly_highest_rank() {
        let results = vec![
            result("uk", RiskLevel::Limited, "uk"),
            result("china", RiskLevel::High, "china"),
            result("brazil", RiskLevel::Minimal, "brazil"),
        ];
        let summary = aggregate_requirements(&results);
        let highest = summary.highest_risk_level.unwrap();
        assert_eq!(highest.level, RiskLevel::High);
        assert_eq!(highest.justification, "china");
    }

    #[test]
    fn ties_keep_the_first_seen() {
        let results = vec![
            result("singapore", RiskLevel::High, "first"),
            result("us-co", RiskLevel::High, "second"),
        ];
        let highest = aggregate_requirements(&results).highest_risk_level.unwrap();
        assert_eq!(highest.justification, "first");
    }

    #[test]
    fn flattens_without_dedup() {
        let results = vec![
            result("uk", RiskLevel::Limited, ""),
            result("china", RiskLevel::Limited, ""),
        ];
        let summary = aggregate_requirements(&results);
        assert_eq!(summary.total_artifacts, 2);
        assert_eq!(summary.total_actions, 4);
        let ids: Vec<&str> = summary.all_actions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "x", "y"]);
    }
}
