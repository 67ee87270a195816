//! # Requirement Records
//!
//! [`ArtifactRequirement`] is a compliance document the product must
//! produce. [`ActionRequirement`] is a task the product team must carry out,
//! ranked by [`Priority`].
//!
//! ## Priority Ordering
//!
//! ```text
//! Recommended(1) < Important(2) < Critical(3)
//! ```
//!
//! `Critical` and `Important` actions are required; `Recommended` actions
//! are advisory. The split is decided by [`Priority::is_required`].

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Urgency of an action requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Critical,
    Important,
    Recommended,
}

impl Priority {
    /// Rank used for comparison. Higher is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::Important => 2,
            Self::Recommended => 1,
        }
    }

    /// Whether an action at this priority belongs in the required bucket.
    pub fn is_required(self) -> bool {
        match self {
            Self::Critical | Self::Important => true,
            Self::Recommended => false,
        }
    }

    /// Wire name of the priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Recommended => "recommended",
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

/// Kind of compliance document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactType {
    RiskAssessment,
    ImpactAssessment,
    TechnicalDocumentation,
    ConformityAssessment,
    TransparencyNotice,
    DataProtectionAssessment,
    BiasAudit,
    ModelCard,
    TrainingDataSummary,
    IncidentResponsePlan,
    ConsentRecord,
    AlgorithmFiling,
    HumanOversightPlan,
    PrivacyNotice,
    RecordOfProcessing,
}

/// A compliance document the product must (or should) produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRequirement {
    pub id: String,
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    pub name: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

impl ArtifactRequirement {
    /// A required artifact without a template.
    pub fn required(id: impl Into<String>, artifact_type: ArtifactType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            artifact_type,
            name: name.into(),
            required: true,
            template_id: None,
        }
    }

    /// An optional artifact without a template.
    pub fn optional(id: impl Into<String>, artifact_type: ArtifactType, name: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(id, artifact_type, name)
        }
    }

    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A task the product team must carry out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequirement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub legal_basis: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_effort: Option<String>,
    /// Free-text deadline, e.g. `"before market placement"` or an ISO date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl ActionRequirement {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        legal_basis: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            legal_basis: legal_basis.into(),
            priority,
            estimated_effort: None,
            deadline: None,
        }
    }

    pub fn with_effort(mut self, effort: impl Into<String>) -> Self {
        self.estimated_effort = Some(effort.into());
        self
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ordering() {
        assert!(Priority::Critical > Priority::Important);
        assert!(Priority::Important > Priority::Recommended);
        let max = [Priority::Recommended, Priority::Critical, Priority::Important]
            .into_iter()
            .max()
            .unwrap();
        assert_eq!(max, Priority::Critical);
    }

    #[test]
    fn required_bucket_split() {
        assert!(Priority::Critical.is_required());
        assert!(Priority::Important.is_required());
        assert!(!Priority::Recommended.is_required());
    }

    #[test]
    fn artifact_type_field_is_named_type() {
        let a = ArtifactRequirement::required("dpia", ArtifactType::DataProtectionAssessment, "DPIA")
            .with_template("gdpr-dpia");
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["type"], "data-protection-assessment");
        assert_eq!(json["templateId"], "gdpr-dpia");
        assert_eq!(json["required"], true);
    }

    #[test]
    fn optional_artifact_is_not_required() {
        let a = ArtifactRequirement::optional("model-card", ArtifactType::ModelCard, "Model card");
        assert!(!a.required);
        assert!(a.template_id.is_none());
    }

    #[test]
    fn action_builder_sets_optional_fields() {
        let action = ActionRequirement::new(
            "bipa-consent",
            "Obtain written biometric consent",
            "Collect a written release before capturing biometric identifiers.",
            "740 ILCS 14/15(b)",
            Priority::Critical,
        )
        .with_effort("2-4 weeks")
        .with_deadline("before collection");
        assert_eq!(action.estimated_effort.as_deref(), Some("2-4 weeks"));
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["legalBasis"], "740 ILCS 14/15(b)");
        assert_eq!(json["priority"], "critical");
    }
}
