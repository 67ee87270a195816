//! # Risk Classification & Triggers
//!
//! Defines [`RiskLevel`] with its explicit rank, the [`RiskClassification`]
//! a jurisdiction module produces, the [`Trigger`] record that explains it,
//! and the [`Provision`] citation type.
//!
//! ## Ordering
//!
//! ```text
//! Undetermined(0) < Minimal(1) < Limited(2) < High(3) < Unacceptable(4)
//! ```
//!
//! `Undetermined` is a sentinel. A jurisdiction module's decision ladder
//! never produces it; it appears only where the mapper has no result for a
//! requested jurisdiction.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Discrete, ordered risk outcome of a jurisdiction's decision ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    /// No module result exists for the jurisdiction.
    Undetermined,
    Minimal,
    Limited,
    High,
    Unacceptable,
}

impl RiskLevel {
    /// Numeric rank used for cross-jurisdiction comparison.
    pub fn rank(self) -> u8 {
        match self {
            Self::Undetermined => 0,
            Self::Minimal => 1,
            Self::Limited => 2,
            Self::High => 3,
            Self::Unacceptable => 4,
        }
    }

    /// Wire name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undetermined => "undetermined",
            Self::Minimal => "minimal",
            Self::Limited => "limited",
            Self::High => "high",
            Self::Unacceptable => "unacceptable",
        }
    }

    /// Levels a decision ladder may yield, lowest first.
    pub fn ladder_levels() -> &'static [RiskLevel] {
        &[Self::Minimal, Self::Limited, Self::High, Self::Unacceptable]
    }
}

impl PartialOrd for RiskLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Trigger
// ---------------------------------------------------------------------------

/// The evaluated outcome of one atomic regulatory rule.
///
/// Triggers are the unit of explainability: every category in a
/// classification traces back to a satisfied trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub id: String,
    pub description: String,
    pub satisfied: bool,
    /// What in the context satisfied the rule. Empty when unsatisfied.
    pub evidence: String,
}

// ---------------------------------------------------------------------------
// Provision
// ---------------------------------------------------------------------------

/// A cited legal provision that applies to the product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provision {
    /// Short citation, e.g. `"EU AI Act Art. 50"`.
    pub citation: String,
    pub title: String,
    pub summary: String,
}

impl Provision {
    pub fn new(
        citation: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            citation: citation.into(),
            title: title.into(),
            summary: summary.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// RiskClassification
// ---------------------------------------------------------------------------

/// A jurisdiction's risk outcome with its justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskClassification {
    pub level: RiskLevel,
    pub justification: String,
    /// Ids of the satisfied triggers that decided the level.
    pub applicable_categories: Vec<String>,
    /// Citations attached to those triggers, first-seen order, no duplicates.
    pub provisions: Vec<String>,
}

impl RiskClassification {
    /// The sentinel classification for a jurisdiction with no result.
    pub fn undetermined(reason: impl Into<String>) -> Self {
        Self {
            level: RiskLevel::Undetermined,
            justification: reason.into(),
            applicable_categories: Vec::new(),
            provisions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_match_published_table() {
        assert_eq!(RiskLevel::Minimal.rank(), 1);
        assert_eq!(RiskLevel::Limited.rank(), 2);
        assert_eq!(RiskLevel::High.rank(), 3);
        assert_eq!(RiskLevel::Unacceptable.rank(), 4);
        assert_eq!(RiskLevel::Undetermined.rank(), 0);
    }

    #[test]
    fn ordering_follows_rank() {
        assert!(RiskLevel::Undetermined < RiskLevel::Minimal);
        assert!(RiskLevel::Limited < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Unacceptable);
        let max = RiskLevel::ladder_levels().iter().copied().max().unwrap();
        assert_eq!(max, RiskLevel::Unacceptable);
    }

    #[test]
    fn ladder_levels_exclude_sentinel() {
        assert!(!RiskLevel::ladder_levels().contains(&RiskLevel::Undetermined));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
        let level: RiskLevel = serde_json::from_str("\"undetermined\"").unwrap();
        assert_eq!(level, RiskLevel::Undetermined);
    }

    #[test]
    fn undetermined_classification_is_empty() {
        let c = RiskClassification::undetermined("jurisdiction not registered");
        assert_eq!(c.level, RiskLevel::Undetermined);
        assert!(c.applicable_categories.is_empty());
        assert!(c.provisions.is_empty());
    }

    #[test]
    fn classification_serializes_camel_case() {
        let c = RiskClassification {
            level: RiskLevel::Limited,
            justification: "chatbot".into(),
            applicable_categories: vec!["eu-ai-act.chatbot".into()],
            provisions: vec!["EU AI Act Art. 50(1)".into()],
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["level"], "limited");
        assert_eq!(json["applicableCategories"][0], "eu-ai-act.chatbot");
    }
}
