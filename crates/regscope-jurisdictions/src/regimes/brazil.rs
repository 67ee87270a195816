//! Brazil.
//!
//! The Lei Geral de Proteção de Dados (Law 13,709/2018) applies today. The
//! AI bill PL 2338/2023 passed the Senate on 2024-12-10 and is pending in
//! the Chamber of Deputies; its risk tiers drive the ladder, and its
//! obligations are cited as pending.

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const SOCIAL_SCORING: &str = "brazil.social-scoring";
const SUBLIMINAL: &str = "brazil.subliminal-manipulation";
const AUTONOMOUS_WEAPONS: &str = "brazil.autonomous-weapons";

const EMPLOYMENT: &str = "brazil.employment";
const CREDIT: &str = "brazil.credit-and-essential-services";
const PUBLIC_SECTOR: &str = "brazil.high-risk-sector";
const BIOMETRIC_IDENTIFICATION: &str = "brazil.biometric-identification";

const LGPD: &str = "brazil.personal-data";
const GENERATIVE: &str = "brazil.generative-ai";
const AUTOMATED_REVIEW: &str = "brazil.automated-decision-review";

const CEASE_PRACTICE: &str = "brazil-cease-excessive-risk-practice";

const EXCESSIVE_RISK_IDS: &[&str] = &[SOCIAL_SCORING, SUBLIMINAL, AUTONOMOUS_WEAPONS];
const HIGH_RISK_IDS: &[&str] = &[EMPLOYMENT, CREDIT, PUBLIC_SECTOR, BIOMETRIC_IDENTIFICATION];

// ── Predicates ──────────────────────────────────────────────────────────

fn social_scoring(ctx: &ProductContext) -> Option<String> {
    mentions(ctx, &["social scoring", "social score", "social credit"])
}

fn subliminal(ctx: &ProductContext) -> Option<String> {
    mentions(
        ctx,
        &["subliminal", "exploit vulnerabilities", "manipulative techniques"],
    )
}

fn autonomous_weapons(ctx: &ProductContext) -> Option<String> {
    mentions(
        ctx,
        &["autonomous weapon", "lethal autonomous", "weapons targeting"],
    )
}

fn credit(ctx: &ProductContext) -> Option<String> {
    let essential = credit_decisions(ctx)
        .or_else(|| serves_any(ctx, &[UserPopulation::BenefitRecipients]));
    both(essential, consequential(ctx))
}

fn public_sector(ctx: &ProductContext) -> Option<String> {
    let domain = in_sector(
        ctx,
        &[
            Sector::Healthcare,
            Sector::Education,
            Sector::CriticalInfrastructure,
            Sector::LawEnforcement,
            Sector::Legal,
            Sector::Transportation,
        ],
    );
    both(domain, consequential(ctx))
}

fn biometric_identification(ctx: &ProductContext) -> Option<String> {
    has_any_data(ctx, &[DataCategory::Biometric])
}

fn automated_review(ctx: &ProductContext) -> Option<String> {
    both(processes_personal_data(ctx), solely_automated_significant(ctx))
}

// ── Ladder ──────────────────────────────────────────────────────────────

const EXCESSIVE_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: SOCIAL_SCORING,
        description: "Social scoring for access to goods, services or public policy",
        provisions: &["PL 2338/2023 Art. 13"],
        predicate: social_scoring,
    },
    TriggerRule {
        id: SUBLIMINAL,
        description: "Subliminal techniques or exploitation of vulnerabilities",
        provisions: &["PL 2338/2023 Art. 13"],
        predicate: subliminal,
    },
    TriggerRule {
        id: AUTONOMOUS_WEAPONS,
        description: "Autonomous weapon systems",
        provisions: &["PL 2338/2023 Art. 13"],
        predicate: autonomous_weapons,
    },
];

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: EMPLOYMENT,
        description: "Recruitment, screening, promotion or termination decisions",
        provisions: &["PL 2338/2023 Art. 14"],
        predicate: employment_decisions,
    },
    TriggerRule {
        id: CREDIT,
        description: "Access to credit or essential public and private services",
        provisions: &["PL 2338/2023 Art. 14"],
        predicate: credit,
    },
    TriggerRule {
        id: PUBLIC_SECTOR,
        description: "Health, education, justice, security, infrastructure or transport decisions",
        provisions: &["PL 2338/2023 Art. 14"],
        predicate: public_sector,
    },
    TriggerRule {
        id: BIOMETRIC_IDENTIFICATION,
        description: "Biometric identification and authentication",
        provisions: &["PL 2338/2023 Art. 14", "LGPD Art. 11"],
        predicate: biometric_identification,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: LGPD,
        description: "Processing of personal data",
        provisions: &["LGPD Art. 7"],
        predicate: processes_personal_data,
    },
    TriggerRule {
        id: GENERATIVE,
        description: "Generative AI system",
        provisions: &["PL 2338/2023 Art. 60-63"],
        predicate: is_generative,
    },
    TriggerRule {
        id: AUTOMATED_REVIEW,
        description: "Decisions taken solely on automated processing",
        provisions: &["LGPD Art. 20"],
        predicate: automated_review,
    },
];

static LADDER: RiskLadder = RiskLadder {
    regime: "Brazil",
    rungs: &[
        Rung {
            level: RiskLevel::Unacceptable,
            rules: EXCESSIVE_RISK,
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
    minimal_justification: "no excessive-risk, high-risk or LGPD trigger applies",
};

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "PL 2338/2023 Art. 13 (pending)",
        title: "Excessive risk",
        summary: "Development and use of excessive-risk systems is prohibited.",
        when: EXCESSIVE_RISK_IDS,
    },
    ProvisionEntry {
        citation: "PL 2338/2023 Art. 14 (pending)",
        title: "High-risk AI systems",
        summary: "Algorithmic impact assessment, documentation, bias testing and human oversight for listed uses.",
        when: HIGH_RISK_IDS,
    },
    ProvisionEntry {
        citation: "LGPD",
        title: "Lei Geral de Proteção de Dados",
        summary: "Legal bases, data subject rights, security and ANPD oversight for personal data.",
        when: &[LGPD, AUTOMATED_REVIEW, BIOMETRIC_IDENTIFICATION],
    },
    ProvisionEntry {
        citation: "LGPD Art. 20",
        title: "Review of automated decisions",
        summary: "Data subjects may request review of decisions made solely on automated processing and information on the criteria used.",
        when: &[AUTOMATED_REVIEW],
    },
    ProvisionEntry {
        citation: "PL 2338/2023 Art. 60-63 (pending)",
        title: "Generative and general-purpose AI",
        summary: "Preliminary assessment, documentation and identification of synthetic content.",
        when: &[GENERATIVE],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: artifacts::IMPACT_ASSESSMENT,
        artifact_type: ArtifactType::ImpactAssessment,
        name: "Algorithmic impact assessment",
        required: true,
        template: Some(templates::IMPACT_ASSESSMENT),
        when: HIGH_RISK_IDS,
    },
    ArtifactEntry {
        id: artifacts::TECHNICAL_DOCUMENTATION,
        artifact_type: ArtifactType::TechnicalDocumentation,
        name: "System documentation",
        required: true,
        template: Some(templates::TECHNICAL_DOCUMENTATION),
        when: HIGH_RISK_IDS,
    },
    ArtifactEntry {
        id: artifacts::DPIA,
        artifact_type: ArtifactType::DataProtectionAssessment,
        name: "Relatório de Impacto à Proteção de Dados (RIPD)",
        required: true,
        template: Some(templates::DPIA),
        when: &[BIOMETRIC_IDENTIFICATION, AUTOMATED_REVIEW],
    },
    ArtifactEntry {
        id: artifacts::PRIVACY_NOTICE,
        artifact_type: ArtifactType::PrivacyNotice,
        name: "LGPD privacy notice",
        required: true,
        template: Some(templates::PRIVACY_NOTICE),
        when: &[LGPD, AUTOMATED_REVIEW, BIOMETRIC_IDENTIFICATION],
    },
    ArtifactEntry {
        id: artifacts::RISK_ASSESSMENT,
        artifact_type: ArtifactType::RiskAssessment,
        name: "Preliminary risk assessment",
        required: false,
        template: Some(templates::RISK_ASSESSMENT),
        when: &[GENERATIVE],
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: CEASE_PRACTICE,
        title: "Discontinue the excessive-risk practice",
        description: "The system falls under a practice PL 2338/2023 would prohibit outright. Plan to withdraw it from the Brazilian market.",
        legal_basis: "PL 2338/2023 Art. 13 (pending)",
        priority: Priority::Critical,
        effort: None,
        deadline: None,
        when: EXCESSIVE_RISK_IDS,
    },
    ActionEntry {
        id: actions::IMPACT_ASSESSMENT,
        title: "Conduct an algorithmic impact assessment",
        description: "Assess risks to fundamental rights before deployment and update it over the system lifecycle.",
        legal_basis: "PL 2338/2023 Art. 25 (pending)",
        priority: Priority::Important,
        effort: Some("4-8 weeks"),
        deadline: None,
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: actions::HUMAN_OVERSIGHT,
        title: "Ensure human oversight",
        description: "Give trained staff the ability to intervene in and override high-risk outputs.",
        legal_basis: "PL 2338/2023 Art. 18 (pending)",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: actions::BIAS_TESTING,
        title: "Test for discriminatory bias",
        description: "Measure and mitigate illegal or abusive discrimination across protected groups.",
        legal_basis: "PL 2338/2023 Art. 18 (pending)",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[EMPLOYMENT, CREDIT, PUBLIC_SECTOR],
    },
    ActionEntry {
        id: actions::AUTOMATED_DECISION_REVIEW,
        title: "Offer review of automated decisions",
        description: "Handle review requests and explain the criteria and procedures behind automated decisions.",
        legal_basis: "LGPD Art. 20",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[AUTOMATED_REVIEW],
    },
    ActionEntry {
        id: actions::DPIA,
        title: "Prepare a RIPD",
        description: "Document processing of sensitive data and automated decisions in a data protection impact report on ANPD request.",
        legal_basis: "LGPD Art. 38",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[BIOMETRIC_IDENTIFICATION, AUTOMATED_REVIEW],
    },
    ActionEntry {
        id: actions::PRIVACY_NOTICE,
        title: "Publish an LGPD privacy notice",
        description: "Inform data subjects of the purpose, form, duration and sharing of processing.",
        legal_basis: "LGPD Art. 9",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: &[LGPD, AUTOMATED_REVIEW, BIOMETRIC_IDENTIFICATION],
    },
    ActionEntry {
        id: actions::DATA_SUBJECT_RIGHTS,
        title: "Handle titular rights requests",
        description: "Support confirmation, access, correction, anonymisation, portability and deletion requests.",
        legal_basis: "LGPD Art. 18",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[LGPD, AUTOMATED_REVIEW, BIOMETRIC_IDENTIFICATION],
    },
    ActionEntry {
        id: actions::CONTENT_LABELING,
        title: "Identify synthetic content",
        description: "Mark AI-generated content so it can be identified as synthetic.",
        legal_basis: "PL 2338/2023 (pending)",
        priority: Priority::Recommended,
        effort: Some("1-3 weeks"),
        deadline: None,
        when: &[GENERATIVE],
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct Brazil;

impl JurisdictionModule for Brazil {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Brazil
    }

    fn ladder(&self) -> &'static RiskLadder {
        &LADDER
    }

    fn applicable_provisions(&self, ctx: &ProductContext) -> Vec<Provision> {
        table::provisions(PROVISIONS, &self.triggers(ctx))
    }

    fn required_artifacts(&self, ctx: &ProductContext) -> Vec<ArtifactRequirement> {
        let triggers = self.triggers(ctx);
        if triggers.any_fired(EXCESSIVE_RISK_IDS) {
            return Vec::new();
        }
        table::artifacts(ARTIFACTS, &triggers)
    }

    fn required_actions(&self, ctx: &ProductContext) -> Vec<ActionRequirement> {
        let triggers = self.triggers(ctx);
        if triggers.any_fired(EXCESSIVE_RISK_IDS) {
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
        ComplianceTimeline::new(ymd(2020, 9, 18))
            .milestone((2020, 9, 18), "LGPD in force", "Data protection obligations apply.")
            .milestone(
                (2021, 8, 1),
                "ANPD sanctions",
                "Administrative sanctions under LGPD become enforceable.",
            )
            .milestone(
                (2023, 5, 3),
                "PL 2338/2023 introduced",
                "Comprehensive AI bill introduced in the Senate.",
            )
            .milestone(
                (2024, 12, 10),
                "Senate approval",
                "PL 2338/2023 approved by the Senate and sent to the Chamber of Deputies.",
            )
            .note("PL 2338/2023 obligations apply only once enacted.")
    }
}
