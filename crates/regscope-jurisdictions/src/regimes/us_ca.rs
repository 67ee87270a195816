//! California.
//!
//! - CCPA automated decision-making technology (ADMT) and risk assessment
//!   regulations (Cal. Code Regs. tit. 11, 7001 et seq.)
//! - Civil Rights Council automated-decision system regulations under FEHA
//! - SB 53 Transparency in Frontier Artificial Intelligence Act
//! - SB 942 California AI Transparency Act (operative date moved by AB 853)
//! - AB 2013 generative AI training data transparency
//! - SB 243 companion chatbots, SB 1001 bot disclosure, AB 3030 health care
//!   generative AI disclaimers

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const ADMT: &str = "us-ca.admt-significant-decision";
const FEHA_ADS: &str = "us-ca.feha-automated-decision-system";
const FRONTIER: &str = "us-ca.frontier-model";

const AI_TRANSPARENCY: &str = "us-ca.sb942-covered-provider";
const TRAINING_DATA: &str = "us-ca.ab2013-training-data";
const COMPANION: &str = "us-ca.companion-chatbot";
const BOT_DISCLOSURE: &str = "us-ca.bot-disclosure";
const CCPA_NOTICE: &str = "us-ca.ccpa-personal-information";

const HEALTH_GENAI: &str = "us-ca.health-care-genai-communications";

// ── Predicates ──────────────────────────────────────────────────────────

fn significant_decision(ctx: &ProductContext) -> Option<String> {
    let domain = credit_decisions(ctx)
        .or_else(|| employment_decisions(ctx))
        .or_else(|| {
            serves_any(
                ctx,
                &[
                    UserPopulation::Tenants,
                    UserPopulation::Students,
                    UserPopulation::Patients,
                    UserPopulation::InsuranceApplicants,
                ],
            )
        })
        .or_else(|| {
            in_sector(
                ctx,
                &[
                    Sector::FinancialServices,
                    Sector::Housing,
                    Sector::Education,
                    Sector::Healthcare,
                    Sector::Employment,
                ],
            )
        });
    both(domain, consequential(ctx))
}

fn admt(ctx: &ProductContext) -> Option<String> {
    both(processes_personal_data(ctx), significant_decision(ctx))
}

fn frontier(ctx: &ProductContext) -> Option<String> {
    training_compute_at_least(ctx, US_FRONTIER_MODEL_FLOPS)
}

fn companion(ctx: &ProductContext) -> Option<String> {
    mentions(
        ctx,
        &[
            "companion",
            "companionship",
            "ai friend",
            "virtual girlfriend",
            "virtual boyfriend",
            "emotional support",
        ],
    )
}

fn bot_disclosure(ctx: &ProductContext) -> Option<String> {
    both(
        mentions(ctx, &["chatbot", "chat bot", "conversational", "virtual assistant"]),
        consumer_facing(ctx),
    )
}

fn health_genai(ctx: &ProductContext) -> Option<String> {
    both(is_generative(ctx), in_sector(ctx, &[Sector::Healthcare]))
}

// ── Ladder ──────────────────────────────────────────────────────────────

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: ADMT,
        description: "ADMT used for a significant decision about a consumer",
        provisions: &["Cal. Code Regs. tit. 11, 7200", "Cal. Code Regs. tit. 11, 7150"],
        predicate: admt,
    },
    TriggerRule {
        id: FEHA_ADS,
        description: "Automated-decision system used in employment decisions",
        provisions: &["Cal. Code Regs. tit. 2, 11008.1"],
        predicate: employment_decisions,
    },
    TriggerRule {
        id: FRONTIER,
        description: "Frontier model trained above 10^26 operations",
        provisions: &["Cal. Bus. & Prof. Code 22757.10 et seq. (SB 53)"],
        predicate: frontier,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: AI_TRANSPARENCY,
        description: "Generative system producing image, video or audio content",
        provisions: &["Cal. Bus. & Prof. Code 22757.1 et seq. (SB 942)"],
        predicate: generates_synthetic_media,
    },
    TriggerRule {
        id: TRAINING_DATA,
        description: "Generative AI system offered to Californians",
        provisions: &["Cal. Civ. Code 3110-3111 (AB 2013)"],
        predicate: is_generative,
    },
    TriggerRule {
        id: COMPANION,
        description: "Companion chatbot",
        provisions: &["Cal. Bus. & Prof. Code 22601 et seq. (SB 243)"],
        predicate: companion,
    },
    TriggerRule {
        id: BOT_DISCLOSURE,
        description: "Bot communicating with consumers",
        provisions: &["Cal. Bus. & Prof. Code 17941"],
        predicate: bot_disclosure,
    },
    TriggerRule {
        id: CCPA_NOTICE,
        description: "Collection of consumers' personal information",
        provisions: &["Cal. Civ. Code 1798.100"],
        predicate: processes_personal_data,
    },
];

static LADDER: RiskLadder = RiskLadder {
    regime: "California",
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
    minimal_justification: "no ADMT, frontier, generative, bot or personal-information trigger applies",
};

const OBLIGATIONS: &[TriggerRule] = &[TriggerRule {
    id: HEALTH_GENAI,
    description: "Generative AI used in patient communications",
    provisions: &["Cal. Health & Safety Code 1339.75 (AB 3030)"],
    predicate: health_genai,
}];

// ── Tables ──────────────────────────────────────────────────────────────

const PERSONAL_INFO_IDS: &[&str] = &[ADMT, CCPA_NOTICE];
const DISCLOSURE_IDS: &[&str] = &[BOT_DISCLOSURE, COMPANION];

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "CCPA, Cal. Civ. Code 1798.100 et seq.",
        title: "California Consumer Privacy Act",
        summary: "Notice at collection, consumer rights and, for ADMT, pre-use notice, opt-out and access rights.",
        when: PERSONAL_INFO_IDS,
    },
    ProvisionEntry {
        citation: "CCPA regulations, Articles 10-11",
        title: "Risk assessments and automated decision-making technology",
        summary: "Businesses using ADMT for significant decisions must assess risk, give pre-use notice and honour opt-out or appeal.",
        when: &[ADMT],
    },
    ProvisionEntry {
        citation: "FEHA automated-decision system regulations",
        title: "Employment discrimination by automated systems",
        summary: "Use of an ADS that discriminates on a protected basis violates FEHA; anti-bias testing is relevant to defences.",
        when: &[FEHA_ADS],
    },
    ProvisionEntry {
        citation: "SB 53",
        title: "Transparency in Frontier Artificial Intelligence Act",
        summary: "Large frontier developers publish a frontier AI framework and transparency reports and report critical safety incidents.",
        when: &[FRONTIER],
    },
    ProvisionEntry {
        citation: "SB 942",
        title: "California AI Transparency Act",
        summary: "Covered providers embed latent disclosures, offer manifest disclosures and provide a free AI detection tool.",
        when: &[AI_TRANSPARENCY],
    },
    ProvisionEntry {
        citation: "AB 2013",
        title: "Generative AI training data transparency",
        summary: "Developers post documentation of training datasets on their website.",
        when: &[TRAINING_DATA],
    },
    ProvisionEntry {
        citation: "SB 243",
        title: "Companion chatbots",
        summary: "Disclose AI status, maintain suicide and self-harm protocols and apply added protections for minors.",
        when: &[COMPANION],
    },
    ProvisionEntry {
        citation: "SB 1001",
        title: "Bot disclosure",
        summary: "Bots used to incentivise a sale or influence a vote must disclose that they are bots.",
        when: &[BOT_DISCLOSURE],
    },
    ProvisionEntry {
        citation: "AB 3030",
        title: "Generative AI in health care communications",
        summary: "Patient communications generated by AI carry a disclaimer and instructions to reach a human provider.",
        when: &[HEALTH_GENAI],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: "us-ca-admt-pre-use-notice",
        artifact_type: ArtifactType::TransparencyNotice,
        name: "ADMT pre-use notice",
        required: true,
        template: Some(templates::TRANSPARENCY_NOTICE),
        when: &[ADMT],
    },
    ArtifactEntry {
        id: artifacts::RISK_ASSESSMENT,
        artifact_type: ArtifactType::RiskAssessment,
        name: "CCPA risk assessment",
        required: true,
        template: Some(templates::RISK_ASSESSMENT),
        when: &[ADMT],
    },
    ArtifactEntry {
        id: artifacts::BIAS_AUDIT,
        artifact_type: ArtifactType::BiasAudit,
        name: "Anti-bias testing record for employment ADS",
        required: false,
        template: Some(templates::BIAS_AUDIT),
        when: &[FEHA_ADS],
    },
    ArtifactEntry {
        id: "us-ca-frontier-ai-framework",
        artifact_type: ArtifactType::RiskAssessment,
        name: "Frontier AI framework (SB 53)",
        required: true,
        template: None,
        when: &[FRONTIER],
    },
    ArtifactEntry {
        id: artifacts::TRAINING_DATA_SUMMARY,
        artifact_type: ArtifactType::TrainingDataSummary,
        name: "Training data documentation (AB 2013)",
        required: true,
        template: None,
        when: &[TRAINING_DATA],
    },
    ArtifactEntry {
        id: artifacts::TRANSPARENCY_NOTICE,
        artifact_type: ArtifactType::TransparencyNotice,
        name: "AI disclosure to users",
        required: true,
        template: Some(templates::TRANSPARENCY_NOTICE),
        when: DISCLOSURE_IDS,
    },
    ArtifactEntry {
        id: artifacts::PRIVACY_NOTICE,
        artifact_type: ArtifactType::PrivacyNotice,
        name: "CCPA notice at collection",
        required: true,
        template: Some(templates::PRIVACY_NOTICE),
        when: PERSONAL_INFO_IDS,
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: "us-ca-admt-opt-out",
        title: "Offer ADMT opt-out or human appeal",
        description: "Let consumers opt out of ADMT for significant decisions, or offer an appeal to a qualified human reviewer.",
        legal_basis: "Cal. Code Regs. tit. 11, 7221",
        priority: Priority::Critical,
        effort: Some("3-6 weeks"),
        deadline: Some("2027-01-01"),
        when: &[ADMT],
    },
    ActionEntry {
        id: "us-ca-ccpa-risk-assessment",
        title: "Complete a CCPA risk assessment",
        description: "Assess the risks of ADMT processing before use and retain the assessment for submission to the CPPA.",
        legal_basis: "Cal. Code Regs. tit. 11, 7150-7157",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[ADMT],
    },
    ActionEntry {
        id: actions::BIAS_TESTING,
        title: "Anti-bias test employment ADS",
        description: "Test the system for adverse impact on protected groups and document the results.",
        legal_basis: "Cal. Code Regs. tit. 2, 11008.1",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[FEHA_ADS],
    },
    ActionEntry {
        id: "us-ca-ads-record-retention",
        title: "Retain ADS records for four years",
        description: "Keep automated-decision data and selection criteria for at least four years.",
        legal_basis: "Cal. Code Regs. tit. 2, 11013(c)",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: &[FEHA_ADS],
    },
    ActionEntry {
        id: "us-ca-frontier-framework",
        title: "Publish a frontier AI framework",
        description: "Publish how catastrophic risks are assessed and mitigated, and a transparency report before deploying new frontier models.",
        legal_basis: "SB 53",
        priority: Priority::Critical,
        effort: Some("6-12 weeks"),
        deadline: Some("2026-01-01"),
        when: &[FRONTIER],
    },
    ActionEntry {
        id: actions::INCIDENT_RESPONSE,
        title: "Report critical safety incidents",
        description: "Report critical safety incidents to the Office of Emergency Services within 15 days.",
        legal_basis: "SB 53",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[FRONTIER],
    },
    ActionEntry {
        id: actions::CONTENT_LABELING,
        title: "Embed latent disclosures and offer a detection tool",
        description: "Embed provenance data in generated media, offer a manifest disclosure option and a free AI detection tool.",
        legal_basis: "SB 942",
        priority: Priority::Important,
        effort: Some("3-6 weeks"),
        deadline: Some("2026-08-02"),
        when: &[AI_TRANSPARENCY],
    },
    ActionEntry {
        id: actions::TRAINING_DATA_DISCLOSURE,
        title: "Post training data documentation",
        description: "Publish a high-level summary of datasets used to train the generative system.",
        legal_basis: "AB 2013",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: Some("2026-01-01"),
        when: &[TRAINING_DATA],
    },
    ActionEntry {
        id: "us-ca-companion-safeguards",
        title: "Implement companion chatbot safeguards",
        description: "Maintain a suicide and self-harm prevention protocol, remind minors that the bot is AI and report annually to the Office of Suicide Prevention.",
        legal_basis: "SB 243",
        priority: Priority::Critical,
        effort: Some("3-6 weeks"),
        deadline: Some("2026-01-01"),
        when: &[COMPANION],
    },
    ActionEntry {
        id: actions::AI_DISCLOSURE,
        title: "Disclose that users are talking to a bot",
        description: "Clearly and conspicuously disclose the bot's AI status.",
        legal_basis: "Cal. Bus. & Prof. Code 17941; SB 243",
        priority: Priority::Important,
        effort: Some("1-3 days"),
        deadline: None,
        when: DISCLOSURE_IDS,
    },
    ActionEntry {
        id: actions::PRIVACY_NOTICE,
        title: "Give notice at collection",
        description: "Disclose categories of personal information collected and purposes, and link to the privacy policy.",
        legal_basis: "Cal. Civ. Code 1798.100(a)",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: PERSONAL_INFO_IDS,
    },
    ActionEntry {
        id: "us-ca-patient-genai-disclaimer",
        title: "Add AI disclaimers to patient communications",
        description: "Mark AI-generated clinical communications and explain how to reach a human provider.",
        legal_basis: "AB 3030",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: &[HEALTH_GENAI],
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct California;

impl JurisdictionModule for California {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::UsCa
    }

    fn ladder(&self) -> &'static RiskLadder {
        &LADDER
    }

    fn obligation_rules(&self) -> &'static [TriggerRule] {
        OBLIGATIONS
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
        ComplianceTimeline::new(ymd(2020, 1, 1))
            .milestone((2020, 1, 1), "CCPA effective", "California Consumer Privacy Act takes effect.")
            .milestone(
                (2025, 10, 1),
                "FEHA ADS regulations",
                "Civil Rights Council regulations on automated-decision systems take effect.",
            )
            .milestone(
                (2026, 1, 1),
                "SB 53, AB 2013, SB 243 and CCPA regulations",
                "Frontier AI transparency, training data documentation, companion chatbot duties and the CCPA ADMT regulations take effect.",
            )
            .milestone(
                (2026, 8, 2),
                "SB 942 operative",
                "California AI Transparency Act obligations apply to covered providers.",
            )
            .milestone(
                (2027, 1, 1),
                "ADMT compliance",
                "Businesses using ADMT for significant decisions must comply with notice, opt-out and access requirements.",
            )
            .milestone(
                (2028, 4, 1),
                "Risk assessment submissions",
                "First risk assessment attestations are due to the CPPA.",
            )
    }
}
