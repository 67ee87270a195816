//! Illinois.
//!
//! Biometric Information Privacy Act (740 ILCS 14), the Artificial
//! Intelligence Video Interview Act (820 ILCS 42) and the HB 3773 amendments
//! to the Illinois Human Rights Act (775 ILCS 5/2-102(L)).
//!
//! BIPA has a private right of action with statutory damages, so biometric
//! consent is always `critical`, whatever else the product does.

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const BIPA: &str = "us-il.biometric-identifiers";
const EMPLOYMENT_DECISION: &str = "us-il.employment-decision";
const VIDEO_INTERVIEW: &str = "us-il.ai-video-interview";
const EMPLOYMENT_USE: &str = "us-il.employment-use";

const EMPLOYMENT_IDS: &[&str] = &[EMPLOYMENT_DECISION, VIDEO_INTERVIEW, EMPLOYMENT_USE];

// ── Predicates ──────────────────────────────────────────────────────────

fn bipa(ctx: &ProductContext) -> Option<String> {
    has_any_data(ctx, &[DataCategory::Biometric])
}

fn video_interview(ctx: &ProductContext) -> Option<String> {
    both(
        mentions(ctx, &["video interview", "recorded interview", "interview video"]),
        serves_any(ctx, &[UserPopulation::JobApplicants]),
    )
}

fn employment_use(ctx: &ProductContext) -> Option<String> {
    serves_any(
        ctx,
        &[UserPopulation::JobApplicants, UserPopulation::Employees],
    )
    .or_else(|| in_sector(ctx, &[Sector::Employment]))
}

// ── Ladder ──────────────────────────────────────────────────────────────

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: BIPA,
        description: "Collection of biometric identifiers or information",
        provisions: &["740 ILCS 14/15"],
        predicate: bipa,
    },
    TriggerRule {
        id: EMPLOYMENT_DECISION,
        description: "AI used in recruitment, hiring, promotion or discharge decisions",
        provisions: &["775 ILCS 5/2-102(L)"],
        predicate: employment_decisions,
    },
    TriggerRule {
        id: VIDEO_INTERVIEW,
        description: "AI analysis of video interviews",
        provisions: &["820 ILCS 42/5"],
        predicate: video_interview,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[TriggerRule {
    id: EMPLOYMENT_USE,
    description: "AI used in an employment context",
    provisions: &["775 ILCS 5/2-102(L)(2)"],
    predicate: employment_use,
}];

static LADDER: RiskLadder = RiskLadder {
    regime: "Illinois",
    rungs: &[
        Rung {
            level: RiskLevel::High,
            rules: HIGH_RISK,
        },
        Rung {
            level: RiskLevel::Limited,
            rules: LIMITED_RISK,
        },
    ],
    minimal_justification: "no biometric data or employment use",
};

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "740 ILCS 14/15",
        title: "Biometric Information Privacy Act",
        summary: "Written notice and release before collection, a public retention schedule, no sale or profit, and a private right of action.",
        when: &[BIPA],
    },
    ProvisionEntry {
        citation: "740 ILCS 14/20 (as amended by SB 2979)",
        title: "BIPA damages",
        summary: "Repeated collection of the same identifier from the same person is a single violation.",
        when: &[BIPA],
    },
    ProvisionEntry {
        citation: "775 ILCS 5/2-102(L)",
        title: "Human Rights Act: artificial intelligence in employment",
        summary: "Employers may not use AI that has a discriminatory effect, or zip codes as a proxy for protected classes, and must notify employees of AI use.",
        when: EMPLOYMENT_IDS,
    },
    ProvisionEntry {
        citation: "820 ILCS 42",
        title: "Artificial Intelligence Video Interview Act",
        summary: "Notice, explanation and consent before AI analysis of video interviews, limits on sharing, and deletion on request.",
        when: &[VIDEO_INTERVIEW],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: artifacts::BIOMETRIC_CONSENT_RECORD,
        artifact_type: ArtifactType::ConsentRecord,
        name: "BIPA written release",
        required: true,
        template: None,
        when: &[BIPA],
    },
    ArtifactEntry {
        id: "us-il-bipa-retention-policy",
        artifact_type: ArtifactType::PrivacyNotice,
        name: "Public biometric retention and destruction schedule",
        required: true,
        template: None,
        when: &[BIPA],
    },
    ArtifactEntry {
        id: "us-il-employment-ai-notice",
        artifact_type: ArtifactType::TransparencyNotice,
        name: "Notice of AI use in employment decisions",
        required: true,
        template: Some(templates::TRANSPARENCY_NOTICE),
        when: EMPLOYMENT_IDS,
    },
    ArtifactEntry {
        id: "us-il-aivia-consent",
        artifact_type: ArtifactType::ConsentRecord,
        name: "Applicant consent to AI video analysis",
        required: true,
        template: None,
        when: &[VIDEO_INTERVIEW],
    },
    ArtifactEntry {
        id: artifacts::BIAS_AUDIT,
        artifact_type: ArtifactType::BiasAudit,
        name: "Discriminatory effect analysis",
        required: false,
        template: Some(templates::BIAS_AUDIT),
        when: &[EMPLOYMENT_DECISION],
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: actions::BIOMETRIC_CONSENT,
        title: "Obtain written release before collecting biometrics",
        description: "Inform the subject in writing of the purpose and retention period and obtain a written release before any collection.",
        legal_basis: "740 ILCS 14/15(b)",
        priority: Priority::Critical,
        effort: Some("1-2 weeks"),
        deadline: Some("before collection"),
        when: &[BIPA],
    },
    ActionEntry {
        id: "us-il-bipa-retention-schedule",
        title: "Publish a biometric retention schedule",
        description: "Destroy biometric data when the purpose is satisfied or within three years of the last interaction, whichever is first.",
        legal_basis: "740 ILCS 14/15(a)",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: &[BIPA],
    },
    ActionEntry {
        id: "us-il-bipa-no-sale",
        title: "Prohibit sale of or profit from biometrics",
        description: "Do not sell, lease, trade or otherwise profit from biometric identifiers, and restrict disclosure.",
        legal_basis: "740 ILCS 14/15(c)-(d)",
        priority: Priority::Important,
        effort: Some("1-3 days"),
        deadline: None,
        when: &[BIPA],
    },
    ActionEntry {
        id: "us-il-employment-ai-notice",
        title: "Notify workers and applicants of AI use",
        description: "Give notice when AI is used for recruitment, hiring, promotion, discipline, discharge or terms of employment.",
        legal_basis: "775 ILCS 5/2-102(L)(2)",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: Some("2026-01-01"),
        when: EMPLOYMENT_IDS,
    },
    ActionEntry {
        id: actions::BIAS_TESTING,
        title: "Test for discriminatory effect",
        description: "Check outcomes across protected classes and remove zip code and other proxies.",
        legal_basis: "775 ILCS 5/2-102(L)(1)",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: Some("2026-01-01"),
        when: &[EMPLOYMENT_DECISION],
    },
    ActionEntry {
        id: "us-il-aivia-consent",
        title: "Explain and obtain consent for AI video analysis",
        description: "Before the interview, notify the applicant, explain how the AI works and what it evaluates, and obtain consent.",
        legal_basis: "820 ILCS 42/5",
        priority: Priority::Critical,
        effort: Some("1 week"),
        deadline: Some("before the interview"),
        when: &[VIDEO_INTERVIEW],
    },
    ActionEntry {
        id: "us-il-aivia-demographic-reporting",
        title: "Report applicant demographics",
        description: "Employers relying solely on AI to select candidates for in-person interviews report race and ethnicity data annually.",
        legal_basis: "820 ILCS 42/20",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: Some("annually by December 31"),
        when: &[VIDEO_INTERVIEW],
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct Illinois;

impl JurisdictionModule for Illinois {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::UsIl
    }

    fn ladder(&self) -> &'static RiskLadder {
        &LADDER
    }

    fn applicable_provisions(&self, ctx: &ProductContext) -> Vec<Provision> {
        table::provisions(PROVISIONS, &self.triggers(ctx))
    }

    fn required_artifacts(&self, ctx: &ProductContext) -> Vec<ArtifactRequirement> {
        table::artifacts(ARTIFACTS, &self.triggers(ctx))
    }

    fn required_actions(&self, ctx: &ProductContext) -> Vec<ActionRequirement> {
        table::actions(ACTIONS, &self.triggers(ctx))
    }

    fn timeline(&self, _ctx: &ProductContext) -> ComplianceTimeline {
        ComplianceTimeline::new(ymd(2008, 10, 3))
            .milestone((2008, 10, 3), "BIPA effective", "Biometric Information Privacy Act takes effect.")
            .milestone(
                (2020, 1, 1),
                "AI Video Interview Act",
                "Notice and consent duties for AI analysis of video interviews take effect.",
            )
            .milestone(
                (2024, 8, 2),
                "SB 2979",
                "BIPA amendment limits damages to one recovery per person and allows electronic signatures.",
            )
            .milestone(
                (2026, 1, 1),
                "HB 3773 effective",
                "Human Rights Act amendments on AI in employment take effect.",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regimes::fixtures::{action_ids, ctx};

    fn il(description: &str, product_type: ProductType) -> ProductContext {
        ctx(description, product_type, "us-il")
    }

    #[test]
    fn biometric_data_requires_critical_consent() {
        let c = il("Face-based employee time clock", ProductType::Classifier)
            .with_data([DataCategory::Biometric]);
        let classification = Illinois.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::High);
        assert_eq!(classification.applicable_categories, vec![BIPA]);
        let actions = Illinois.required_actions(&c);
        assert_eq!(actions[0].id, actions::BIOMETRIC_CONSENT);
        assert_eq!(actions[0].priority, Priority::Critical);
    }

    #[test]
    fn video_interview_analysis() {
        let c = il("AI video interview scoring", ProductType::Classifier)
            .with_populations([UserPopulation::JobApplicants])
            .with_decision_impact(DecisionImpact::Material);
        let classification = Illinois.risk_level(&c);
        assert_eq!(
            classification.applicable_categories,
            vec![EMPLOYMENT_DECISION, VIDEO_INTERVIEW]
        );
        let binding = Illinois.required_actions(&c);
        let ids = action_ids(&binding);
        assert!(ids.contains(&"us-il-aivia-consent"));
        assert!(ids.contains(&actions::BIAS_TESTING));
    }

    #[test]
    fn advisory_employment_use_needs_notice_only() {
        let c = il("Interview scheduling assistant", ProductType::Other)
            .with_populations([UserPopulation::JobApplicants]);
        assert_eq!(Illinois.risk_level(&c).level, RiskLevel::Limited);
        assert_eq!(
            action_ids(&Illinois.required_actions(&c)),
            vec!["us-il-employment-ai-notice"]
        );
    }

    #[test]
    fn unrelated_product_is_minimal() {
        let c = il("Route optimisation", ProductType::Predictor);
        assert_eq!(Illinois.risk_level(&c).level, RiskLevel::Minimal);
        assert!(Illinois.required_artifacts(&c).is_empty());
        assert!(Illinois.applicable_provisions(&c).is_empty());
    }
}
