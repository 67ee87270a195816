//! # Shared Requirement Identifiers
//!
//! Obligations that are substantively the same across regimes use one id,
//! so the cross-jurisdiction dedup step merges them into a single entry
//! attributed to every jurisdiction that raised it. Regime-specific
//! obligations use a `<jurisdiction>-` prefixed id instead.

/// Artifact ids shared across jurisdictions.
pub mod artifacts {
    pub const RISK_ASSESSMENT: &str = "risk-assessment";
    pub const IMPACT_ASSESSMENT: &str = "impact-assessment";
    pub const DPIA: &str = "dpia";
    pub const TECHNICAL_DOCUMENTATION: &str = "technical-documentation";
    pub const TRANSPARENCY_NOTICE: &str = "transparency-notice";
    pub const PRIVACY_NOTICE: &str = "privacy-notice";
    pub const BIAS_AUDIT: &str = "bias-audit";
    pub const MODEL_CARD: &str = "model-card";
    pub const TRAINING_DATA_SUMMARY: &str = "training-data-summary";
    pub const HUMAN_OVERSIGHT_PLAN: &str = "human-oversight-plan";
    pub const INCIDENT_RESPONSE_PLAN: &str = "incident-response-plan";
    pub const BIOMETRIC_CONSENT_RECORD: &str = "biometric-consent-record";
}

/// Action ids shared across jurisdictions.
pub mod actions {
    pub const HUMAN_OVERSIGHT: &str = "human-oversight";
    pub const BIAS_TESTING: &str = "bias-testing";
    pub const AI_DISCLOSURE: &str = "ai-disclosure";
    pub const CONTENT_LABELING: &str = "content-labeling";
    pub const IMPACT_ASSESSMENT: &str = "conduct-impact-assessment";
    pub const DPIA: &str = "conduct-dpia";
    pub const PRIVACY_NOTICE: &str = "publish-privacy-notice";
    pub const DATA_SUBJECT_RIGHTS: &str = "data-subject-rights";
    pub const AUTOMATED_DECISION_REVIEW: &str = "automated-decision-review";
    pub const BIOMETRIC_CONSENT: &str = "biometric-consent";
    pub const INCIDENT_RESPONSE: &str = "incident-response";
    pub const RISK_MANAGEMENT: &str = "risk-management-program";
    pub const AI_RMF_ALIGNMENT: &str = "nist-ai-rmf-alignment";
    pub const TRAINING_DATA_DISCLOSURE: &str = "training-data-disclosure";
    pub const CROSS_BORDER_TRANSFER: &str = "cross-border-transfer-mechanism";
}

/// Template ids understood by the downstream artifact generator.
pub mod templates {
    pub const RISK_ASSESSMENT: &str = "risk-assessment";
    pub const IMPACT_ASSESSMENT: &str = "algorithmic-impact-assessment";
    pub const DPIA: &str = "dpia";
    pub const TECHNICAL_DOCUMENTATION: &str = "technical-documentation";
    pub const TRANSPARENCY_NOTICE: &str = "transparency-notice";
    pub const PRIVACY_NOTICE: &str = "privacy-notice";
    pub const BIAS_AUDIT: &str = "bias-audit";
    pub const MODEL_CARD: &str = "model-card";
}
