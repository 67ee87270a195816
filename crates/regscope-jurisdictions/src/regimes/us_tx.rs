//! Texas.
//!
//! Texas Responsible Artificial Intelligence Governance Act (HB 149,
//! "TRAIGA"), the Capture or Use of Biometric Identifier Act (Bus. & Com.
//! Code 503.001) and the Texas Data Privacy and Security Act (Bus. & Com.
//! Code ch. 541).

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const GOVERNMENT_SOCIAL_SCORING: &str = "us-tx.government-social-scoring";
const CUBI: &str = "us-tx.biometric-identifiers";
const PROFILING: &str = "us-tx.consequential-profiling";
const GOVERNMENT_OR_HEALTH_DISCLOSURE: &str = "us-tx.government-or-healthcare-interaction";
const PRIVACY_NOTICE: &str = "us-tx.consumer-personal-data";

const CEASE_PRACTICE: &str = "us-tx-cease-social-scoring";

// ── Predicates ──────────────────────────────────────────────────────────

fn government_social_scoring(ctx: &ProductContext) -> Option<String> {
    both(
        in_sector(ctx, &[Sector::Government])
            .or_else(|| serves_any(ctx, &[UserPopulation::BenefitRecipients])),
        mentions(ctx, &["social score", "social scoring", "social credit"]),
    )
}

fn cubi(ctx: &ProductContext) -> Option<String> {
    has_any_data(ctx, &[DataCategory::Biometric])
}

fn profiling(ctx: &ProductContext) -> Option<String> {
    both(processes_personal_data(ctx), consequential(ctx))
        .or_else(|| processes_special_category_data(ctx))
}

fn government_or_health_disclosure(ctx: &ProductContext) -> Option<String> {
    let audience = consumer_facing(ctx).or_else(|| serves_any(ctx, &[UserPopulation::Patients]));
    both(
        in_sector(ctx, &[Sector::Government, Sector::Healthcare]),
        audience,
    )
}

fn consumer_personal_data(ctx: &ProductContext) -> Option<String> {
    both(processes_personal_data(ctx), consumer_facing(ctx))
}

// ── Ladder ──────────────────────────────────────────────────────────────

const PROHIBITED: &[TriggerRule] = &[TriggerRule {
    id: GOVERNMENT_SOCIAL_SCORING,
    description: "Social scoring by a governmental entity",
    provisions: &["Tex. Bus. & Com. Code 552.053"],
    predicate: government_social_scoring,
}];

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: CUBI,
        description: "Capture of biometric identifiers for a commercial purpose",
        provisions: &["Tex. Bus. & Com. Code 503.001"],
        predicate: cubi,
    },
    TriggerRule {
        id: PROFILING,
        description: "Profiling with significant effects or processing of sensitive data",
        provisions: &["Tex. Bus. & Com. Code 541.105"],
        predicate: profiling,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: GOVERNMENT_OR_HEALTH_DISCLOSURE,
        description: "Consumers interact with AI deployed by a government agency or health care provider",
        provisions: &["Tex. Bus. & Com. Code 552.051"],
        predicate: government_or_health_disclosure,
    },
    TriggerRule {
        id: PRIVACY_NOTICE,
        description: "Personal data of Texas consumers",
        provisions: &["Tex. Bus. & Com. Code 541.102"],
        predicate: consumer_personal_data,
    },
];

static LADDER: RiskLadder = RiskLadder {
    regime: "Texas",
    rungs: &[
        Rung {
            level: RiskLevel::Unacceptable,
            rules: PROHIBITED,
        },
        Rung {
            level: RiskLevel::High,
            rules: HIGH_RISK,
        },
        Rung {
            level: RiskLevel::Limited,
            rules: LIMITED_RISK,
        },
    ],
    minimal_justification: "no TRAIGA, CUBI or TDPSA trigger applies",
};

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "TRAIGA 552.053",
        title: "Prohibition on governmental social scoring",
        summary: "A governmental entity may not use AI to score people on social behavior or personal characteristics with detrimental treatment.",
        when: &[GOVERNMENT_SOCIAL_SCORING],
    },
    ProvisionEntry {
        citation: "Tex. Bus. & Com. Code 503.001",
        title: "Capture or Use of Biometric Identifier",
        summary: "Informed consent before capture, no sale, and destruction within a reasonable time, at most one year after the purpose expires.",
        when: &[CUBI],
    },
    ProvisionEntry {
        citation: "TDPSA 541.105",
        title: "Data protection assessments",
        summary: "Controllers assess processing for targeted advertising, sale, profiling with foreseeable risk, and sensitive data.",
        when: &[PROFILING],
    },
    ProvisionEntry {
        citation: "TRAIGA 552.051",
        title: "Disclosure to consumers",
        summary: "Government agencies and health care providers disclose AI interaction clearly and conspicuously before or at the time of interaction.",
        when: &[GOVERNMENT_OR_HEALTH_DISCLOSURE],
    },
    ProvisionEntry {
        citation: "TDPSA 541.102",
        title: "Privacy notice",
        summary: "Controllers provide a reasonably accessible privacy notice describing categories, purposes and consumer rights.",
        when: &[PRIVACY_NOTICE, PROFILING],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: artifacts::BIOMETRIC_CONSENT_RECORD,
        artifact_type: ArtifactType::ConsentRecord,
        name: "Biometric capture consent",
        required: true,
        template: None,
        when: &[CUBI],
    },
    ArtifactEntry {
        id: artifacts::DPIA,
        artifact_type: ArtifactType::DataProtectionAssessment,
        name: "TDPSA data protection assessment",
        required: true,
        template: Some(templates::DPIA),
        when: &[PROFILING],
    },
    ArtifactEntry {
        id: artifacts::PRIVACY_NOTICE,
        artifact_type: ArtifactType::PrivacyNotice,
        name: "TDPSA privacy notice",
        required: true,
        template: Some(templates::PRIVACY_NOTICE),
        when: &[PRIVACY_NOTICE, PROFILING],
    },
    ArtifactEntry {
        id: "us-tx-ai-interaction-disclosure",
        artifact_type: ArtifactType::TransparencyNotice,
        name: "AI interaction disclosure",
        required: true,
        template: Some(templates::TRANSPARENCY_NOTICE),
        when: &[GOVERNMENT_OR_HEALTH_DISCLOSURE],
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: CEASE_PRACTICE,
        title: "Discontinue governmental social scoring",
        description: "Texas bars governmental entities from using AI for social scoring. The system may not be deployed for that purpose.",
        legal_basis: "TRAIGA 552.053",
        priority: Priority::Critical,
        effort: None,
        deadline: Some("2026-01-01"),
        when: &[GOVERNMENT_SOCIAL_SCORING],
    },
    ActionEntry {
        id: actions::BIOMETRIC_CONSENT,
        title: "Inform and obtain consent before biometric capture",
        description: "Inform the individual and obtain consent before capturing a biometric identifier for a commercial purpose.",
        legal_basis: "Tex. Bus. & Com. Code 503.001(b)",
        priority: Priority::Critical,
        effort: Some("1-2 weeks"),
        deadline: Some("before capture"),
        when: &[CUBI],
    },
    ActionEntry {
        id: "us-tx-biometric-destruction",
        title: "Destroy biometric identifiers on schedule",
        description: "Destroy identifiers within a reasonable time, no later than one year after the purpose for collection expires.",
        legal_basis: "Tex. Bus. & Com. Code 503.001(c)(3)",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: &[CUBI],
    },
    ActionEntry {
        id: actions::DPIA,
        title: "Conduct a data protection assessment",
        description: "Weigh benefits and risks of profiling and sensitive-data processing and keep the assessment available to the Attorney General.",
        legal_basis: "TDPSA 541.105",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[PROFILING],
    },
    ActionEntry {
        id: actions::DATA_SUBJECT_RIGHTS,
        title: "Honor consumer rights requests",
        description: "Respond within 45 days to access, correction, deletion, portability and profiling opt-out requests.",
        legal_basis: "TDPSA 541.051",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[PROFILING, PRIVACY_NOTICE],
    },
    ActionEntry {
        id: actions::PRIVACY_NOTICE,
        title: "Publish a TDPSA privacy notice",
        description: "Describe categories processed, purposes, sharing and how to exercise consumer rights.",
        legal_basis: "TDPSA 541.102",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: &[PRIVACY_NOTICE, PROFILING],
    },
    ActionEntry {
        id: actions::AI_DISCLOSURE,
        title: "Disclose AI interaction to consumers",
        description: "Give a clear, conspicuous, plain-language disclosure before or at the time of interaction.",
        legal_basis: "TRAIGA 552.051",
        priority: Priority::Important,
        effort: Some("1-3 days"),
        deadline: Some("2026-01-01"),
        when: &[GOVERNMENT_OR_HEALTH_DISCLOSURE],
    },
    ActionEntry {
        id: actions::AI_RMF_ALIGNMENT,
        title: "Align with the NIST AI RMF",
        description: "Substantial compliance with a recognised risk framework supports the TRAIGA affirmative defense.",
        legal_basis: "TRAIGA 552.105(e)",
        priority: Priority::Recommended,
        effort: Some("4-8 weeks"),
        deadline: None,
        when: &[CUBI, PROFILING, GOVERNMENT_OR_HEALTH_DISCLOSURE],
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct Texas;

impl JurisdictionModule for Texas {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::UsTx
    }

    fn ladder(&self) -> &'static RiskLadder {
        &LADDER
    }

    fn applicable_provisions(&self, ctx: &ProductContext) -> Vec<Provision> {
        table::provisions(PROVISIONS, &self.triggers(ctx))
    }

    fn required_artifacts(&self, ctx: &ProductContext) -> Vec<ArtifactRequirement> {
        let triggers = self.triggers(ctx);
        if triggers.fired(GOVERNMENT_SOCIAL_SCORING) {
            return Vec::new();
        }
        table::artifacts(ARTIFACTS, &triggers)
    }

    fn required_actions(&self, ctx: &ProductContext) -> Vec<ActionRequirement> {
        let triggers = self.triggers(ctx);
        if triggers.fired(GOVERNMENT_SOCIAL_SCORING) {
            let cessation: Vec<ActionEntry> = ACTIONS
                .iter()
                .filter(|a| a.id == CEASE_PRACTICE)
                .copied()
                .collect();
            return table::actions(&cessation, &triggers);
        }
        table::actions(ACTIONS, &triggers)
    }

    fn timeline(&self, _ctx: &ProductContext) -> ComplianceTimeline {
        ComplianceTimeline::new(ymd(2026, 1, 1))
            .milestone(
                (2009, 9, 1),
                "CUBI effective",
                "Biometric identifier consent and destruction duties take effect.",
            )
            .milestone(
                (2024, 7, 1),
                "TDPSA effective",
                "Consumer rights, privacy notices and data protection assessments apply.",
            )
            .milestone(
                (2026, 1, 1),
                "TRAIGA effective",
                "Disclosure duties and prohibited practices under HB 149 apply. The Attorney General enforces with a 60-day cure period.",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regimes::fixtures::{action_ids, artifact_ids, ctx};
    use regscope_core::SectorContext;

    fn tx(description: &str, product_type: ProductType) -> ProductContext {
        ctx(description, product_type, "us-tx")
    }

    #[test]
    fn government_social_scoring_is_prohibited() {
        let c = tx("Citizen social scoring for benefit eligibility", ProductType::Predictor)
            .with_sector(SectorContext::new(Sector::Government))
            .with_data([DataCategory::Personal, DataCategory::Biometric]);
        let classification = Texas.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::Unacceptable);
        assert!(Texas.required_artifacts(&c).is_empty());
        assert_eq!(action_ids(&Texas.required_actions(&c)), vec![CEASE_PRACTICE]);
    }

    #[test]
    fn private_social_scoring_is_not_the_government_ban() {
        let c = tx("Social scoring of forum members", ProductType::Ranker)
            .with_sector(SectorContext::new(Sector::Media));
        assert_ne!(Texas.risk_level(&c).level, RiskLevel::Unacceptable);
    }

    #[test]
    fn biometric_capture_is_high() {
        let c = tx("Voiceprint login", ProductType::Classifier)
            .with_data([DataCategory::Biometric]);
        let classification = Texas.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::High);
        assert_eq!(classification.applicable_categories, vec![CUBI, PROFILING]);
        let binding = Texas.required_artifacts(&c);
        let ids = artifact_ids(&binding);
        assert_eq!(ids[0], artifacts::BIOMETRIC_CONSENT_RECORD);
        assert!(ids.contains(&artifacts::DPIA));
    }

    #[test]
    fn hospital_chatbot_discloses_ai() {
        let c = tx("Patient intake chatbot", ProductType::Other)
            .with_sector(SectorContext::new(Sector::Healthcare))
            .with_populations([UserPopulation::Patients]);
        assert_eq!(Texas.risk_level(&c).level, RiskLevel::Limited);
        let binding = Texas.required_actions(&c);
        let ids = action_ids(&binding);
        assert!(ids.contains(&actions::AI_DISCLOSURE));
        assert!(ids.contains(&actions::AI_RMF_ALIGNMENT));
    }

    #[test]
    fn no_triggers_is_minimal() {
        let c = tx("Warehouse slotting optimiser", ProductType::Predictor);
        assert_eq!(Texas.risk_level(&c).level, RiskLevel::Minimal);
        assert!(Texas.required_actions(&c).is_empty());
    }
}
