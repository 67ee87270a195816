//! # Jurisdiction Results
//!
//! [`JurisdictionResult`] is one jurisdiction module's full output, wrapped
//! with the jurisdiction's identity. It is created once per mapping call and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalBytes;
use crate::classification::{Provision, RiskClassification};
use crate::digest::{sha256_digest, ContentDigest};
use crate::error::CanonicalizationError;
use crate::identity::JurisdictionId;
use crate::requirement::{ActionRequirement, ArtifactRequirement};
use crate::timeline::ComplianceTimeline;

/// Classification of a general-purpose AI model under a GPAI regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpaiClassification {
    pub is_gpai: bool,
    pub has_systemic_risk: bool,
    /// Open-source release relieves part of the provider obligations.
    pub open_source_exemption: bool,
    pub obligations: Vec<String>,
    pub provisions: Vec<String>,
}

/// One jurisdiction's packaged output for a product context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionResult {
    pub jurisdiction: JurisdictionId,
    pub applicable_laws: Vec<Provision>,
    pub risk_classification: RiskClassification,
    pub required_artifacts: Vec<ArtifactRequirement>,
    /// Actions with `critical` or `important` priority.
    pub required_actions: Vec<ActionRequirement>,
    /// Actions with `recommended` priority.
    pub recommended_actions: Vec<ActionRequirement>,
    pub compliance_timeline: ComplianceTimeline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpai_classification: Option<GpaiClassification>,
}

impl JurisdictionResult {
    /// Required then recommended actions, in that order.
    pub fn all_actions(&self) -> impl Iterator<Item = &ActionRequirement> {
        self.required_actions
            .iter()
            .chain(self.recommended_actions.iter())
    }

    /// Content fingerprint of the result.
    ///
    /// Two results over an unchanged context have equal fingerprints.
    ///
    /// # Errors
    ///
    /// Returns a canonicalization error if the result cannot be serialized.
    pub fn fingerprint(&self) -> Result<ContentDigest, CanonicalizationError> {
        Ok(sha256_digest(&CanonicalBytes::new(self)?))
    }
}
