//! United Kingdom.
//!
//! The UK has no AI statute. Obligations come from UK GDPR and the Data
//! (Use and Access) Act 2025, the Equality Act 2010, the FCA Consumer Duty
//! and the Online Safety Act 2023, read with the regulators' cross-sector
//! AI principles.

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const AUTOMATED_DECISION: &str = "uk.significant-automated-decision";
const CONSUMER_DUTY: &str = "uk.fca-consumer-duty";
const EQUALITY: &str = "uk.equality-act-employment";
const PERSONAL_DATA: &str = "uk.personal-data";
const ONLINE_SAFETY: &str = "uk.online-safety-generative";

// ── Predicates ──────────────────────────────────────────────────────────

fn automated_decision(ctx: &ProductContext) -> Option<String> {
    both(processes_personal_data(ctx), solely_automated_significant(ctx))
}

fn consumer_duty(ctx: &ProductContext) -> Option<String> {
    let retail = in_sector(ctx, &[Sector::FinancialServices, Sector::Insurance])
        .or_else(|| credit_decisions(ctx));
    both(retail, consequential(ctx))
}

fn online_safety(ctx: &ProductContext) -> Option<String> {
    let public = ctx
        .generative_ai_context
        .as_ref()
        .filter(|g| g.public_facing)
        .map(|_| "generated content is shared with the public".to_string());
    both(is_generative(ctx), public)
}

// ── Ladder ──────────────────────────────────────────────────────────────

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: AUTOMATED_DECISION,
        description: "Significant decisions based solely on automated processing",
        provisions: &["UK GDPR Art. 22A-22D"],
        predicate: automated_decision,
    },
    TriggerRule {
        id: CONSUMER_DUTY,
        description: "AI driving outcomes for retail financial customers",
        provisions: &["FCA PRIN 2A"],
        predicate: consumer_duty,
    },
    TriggerRule {
        id: EQUALITY,
        description: "AI in recruitment or employment decisions",
        provisions: &["Equality Act 2010 ss. 13, 19, 39"],
        predicate: employment_decisions,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: PERSONAL_DATA,
        description: "Processing of personal data",
        provisions: &["UK GDPR Art. 5, 13-14"],
        predicate: processes_personal_data,
    },
    TriggerRule {
        id: ONLINE_SAFETY,
        description: "Public-facing generative AI service",
        provisions: &["Online Safety Act 2023"],
        predicate: online_safety,
    },
];

static LADDER: RiskLadder = RiskLadder {
    regime: "United Kingdom",
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
    minimal_justification: "no personal data, significant decisions or public generative output",
};

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "AI Regulation White Paper (2023)",
        title: "Cross-sector AI principles",
        summary: "Safety, transparency, fairness, accountability and contestability, applied by existing regulators within their remits.",
        when: &[],
    },
    ProvisionEntry {
        citation: "UK GDPR Art. 22A-22D",
        title: "Automated decision-making",
        summary: "As amended by the DUAA 2025, significant solely automated decisions are permitted with safeguards: information, representations, human intervention and contest.",
        when: &[AUTOMATED_DECISION],
    },
    ProvisionEntry {
        citation: "FCA PRIN 2A",
        title: "Consumer Duty",
        summary: "Firms act to deliver good outcomes for retail customers, including fair value and avoiding foreseeable harm from models.",
        when: &[CONSUMER_DUTY],
    },
    ProvisionEntry {
        citation: "Equality Act 2010",
        title: "Discrimination in employment",
        summary: "Direct and indirect discrimination through automated tools is unlawful, and the employer remains liable for vendor tools.",
        when: &[EQUALITY],
    },
    ProvisionEntry {
        citation: "UK GDPR",
        title: "Data protection principles",
        summary: "Lawful basis, transparency, minimisation, accuracy and accountability for personal data.",
        when: &[PERSONAL_DATA, AUTOMATED_DECISION],
    },
    ProvisionEntry {
        citation: "Online Safety Act 2023",
        title: "User-to-user and search services",
        summary: "Services sharing AI-generated content with users assess and mitigate illegal content and child safety risks.",
        when: &[ONLINE_SAFETY],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: artifacts::DPIA,
        artifact_type: ArtifactType::DataProtectionAssessment,
        name: "UK GDPR data protection impact assessment",
        required: true,
        template: Some(templates::DPIA),
        when: &[AUTOMATED_DECISION, EQUALITY],
    },
    ArtifactEntry {
        id: artifacts::PRIVACY_NOTICE,
        artifact_type: ArtifactType::PrivacyNotice,
        name: "UK GDPR privacy notice",
        required: true,
        template: Some(templates::PRIVACY_NOTICE),
        when: &[PERSONAL_DATA, AUTOMATED_DECISION],
    },
    ArtifactEntry {
        id: "uk-consumer-duty-outcomes",
        artifact_type: ArtifactType::ImpactAssessment,
        name: "Consumer Duty outcomes assessment",
        required: true,
        template: Some(templates::IMPACT_ASSESSMENT),
        when: &[CONSUMER_DUTY],
    },
    ArtifactEntry {
        id: artifacts::BIAS_AUDIT,
        artifact_type: ArtifactType::BiasAudit,
        name: "Equality impact assessment",
        required: true,
        template: Some(templates::BIAS_AUDIT),
        when: &[EQUALITY],
    },
    ArtifactEntry {
        id: "uk-osa-risk-assessment",
        artifact_type: ArtifactType::RiskAssessment,
        name: "Illegal content and children's risk assessment",
        required: true,
        template: Some(templates::RISK_ASSESSMENT),
        when: &[ONLINE_SAFETY],
    },
    ArtifactEntry {
        id: artifacts::MODEL_CARD,
        artifact_type: ArtifactType::ModelCard,
        name: "Algorithmic transparency record",
        required: false,
        template: Some(templates::MODEL_CARD),
        when: &[AUTOMATED_DECISION, CONSUMER_DUTY, EQUALITY],
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: actions::AUTOMATED_DECISION_REVIEW,
        title: "Provide Art. 22C safeguards",
        description: "Tell individuals about significant automated decisions and let them make representations, obtain human intervention and contest the decision.",
        legal_basis: "UK GDPR Art. 22C",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[AUTOMATED_DECISION],
    },
    ActionEntry {
        id: actions::DPIA,
        title: "Conduct a DPIA",
        description: "Assess high-risk processing before it starts and consult the ICO where residual risk stays high.",
        legal_basis: "UK GDPR Art. 35",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: Some("before processing"),
        when: &[AUTOMATED_DECISION, EQUALITY],
    },
    ActionEntry {
        id: "uk-consumer-duty-outcomes",
        title: "Monitor consumer outcomes",
        description: "Evidence that model-driven decisions deliver good outcomes across customer groups, including customers with characteristics of vulnerability.",
        legal_basis: "FCA PRIN 2A.9",
        priority: Priority::Critical,
        effort: Some("4-8 weeks"),
        deadline: None,
        when: &[CONSUMER_DUTY],
    },
    ActionEntry {
        id: actions::BIAS_TESTING,
        title: "Test for indirect discrimination",
        description: "Check outcomes across protected characteristics and document objective justification for any disparity.",
        legal_basis: "Equality Act 2010 s. 19",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[EQUALITY, CONSUMER_DUTY],
    },
    ActionEntry {
        id: actions::PRIVACY_NOTICE,
        title: "Publish a privacy notice",
        description: "Explain processing, lawful basis and rights, including meaningful information about automated decision logic.",
        legal_basis: "UK GDPR Art. 13-14",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: &[PERSONAL_DATA, AUTOMATED_DECISION],
    },
    ActionEntry {
        id: actions::DATA_SUBJECT_RIGHTS,
        title: "Handle data subject requests",
        description: "Answer access, rectification, erasure and objection requests within one month.",
        legal_basis: "UK GDPR Art. 12-21",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[PERSONAL_DATA, AUTOMATED_DECISION],
    },
    ActionEntry {
        id: "uk-osa-risk-assessment",
        title: "Complete Online Safety Act risk assessments",
        description: "Assess illegal content and, where children may access the service, children's risks, then apply Ofcom's codes.",
        legal_basis: "Online Safety Act 2023 ss. 9, 11",
        priority: Priority::Important,
        effort: Some("3-6 weeks"),
        deadline: None,
        when: &[ONLINE_SAFETY],
    },
    ActionEntry {
        id: actions::HUMAN_OVERSIGHT,
        title: "Assign accountable human oversight",
        description: "Name the senior manager accountable for the system and define escalation routes.",
        legal_basis: "AI Regulation White Paper, accountability principle",
        priority: Priority::Recommended,
        effort: Some("1 week"),
        deadline: None,
        when: &[AUTOMATED_DECISION, CONSUMER_DUTY, EQUALITY],
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedKingdom;

impl JurisdictionModule for UnitedKingdom {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Uk
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
        ComplianceTimeline::new(None)
            .milestone(
                (2018, 5, 25),
                "Data Protection Act 2018",
                "UK GDPR regime applies.",
            )
            .milestone(
                (2023, 3, 29),
                "AI Regulation White Paper",
                "Government sets five cross-sector principles for regulators.",
            )
            .milestone(
                (2023, 7, 31),
                "Consumer Duty in force",
                "FCA Consumer Duty applies to open products and services.",
            )
            .milestone(
                (2025, 6, 19),
                "Data (Use and Access) Act 2025",
                "Royal Assent. Automated decision-making rules are replaced by Art. 22A-22D on commencement.",
            )
            .note("No horizontal AI statute; obligations arise under existing sectoral law.")
    }
}
