//! People's Republic of China.
//!
//! - Personal Information Protection Law (PIPL, 2021)
//! - Provisions on Algorithmic Recommendation of Internet Information Services (2022)
//! - Provisions on Deep Synthesis of Internet Information Services (2023)
//! - Interim Measures for Generative AI Services (2023)
//! - Measures for Labeling AI-Generated Synthetic Content (2025)
//!
//! Labeling under the 2025 Measures is mandatory for every generative
//! service, so content labeling is `critical` here rather than advisory.

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const PUBLIC_GENERATIVE: &str = "china.public-generative-service";
const RECOMMENDATION: &str = "china.public-algorithmic-recommendation";
const SENSITIVE_PI: &str = "china.sensitive-personal-information";
const DEEP_SYNTHESIS: &str = "china.deep-synthesis";
const LABELING: &str = "china.synthetic-content-labeling";
const PERSONAL_INFORMATION: &str = "china.personal-information";
const AUTOMATED_DECISION: &str = "china.automated-decision-making";

const CROSS_BORDER: &str = "china.cross-border-transfer";

const GENERATIVE_IDS: &[&str] = &[PUBLIC_GENERATIVE, DEEP_SYNTHESIS, LABELING];
const PIPL_IDS: &[&str] = &[SENSITIVE_PI, PERSONAL_INFORMATION, AUTOMATED_DECISION];

// ── Predicates ──────────────────────────────────────────────────────────

fn public_generative(ctx: &ProductContext) -> Option<String> {
    both(is_generative(ctx), consumer_facing(ctx))
}

fn recommendation(ctx: &ProductContext) -> Option<String> {
    let recommends = matches!(
        ctx.product_type,
        ProductType::Recommender | ProductType::Ranker
    )
    .then(|| format!("product type is {}", ctx.product_type));
    both(recommends, consumer_facing(ctx))
}

/// PIPL Art. 28 is wider than GDPR Art. 9: financial accounts, location
/// tracking and children under 14 are sensitive too.
fn sensitive_pi(ctx: &ProductContext) -> Option<String> {
    has_any_data(
        ctx,
        &[
            DataCategory::Sensitive,
            DataCategory::Biometric,
            DataCategory::Health,
            DataCategory::Genetic,
            DataCategory::Criminal,
            DataCategory::Financial,
            DataCategory::Location,
            DataCategory::Minor,
        ],
    )
}

fn automated_decision(ctx: &ProductContext) -> Option<String> {
    both(processes_personal_data(ctx), consequential(ctx))
}

fn cross_border(ctx: &ProductContext) -> Option<String> {
    let others = other_markets(ctx, &["china"]);
    if others.is_empty() {
        return None;
    }
    processes_personal_data(ctx)
        .map(|pi| format!("{pi}; also offered in {}", others.join(", ")))
}

// ── Ladder ──────────────────────────────────────────────────────────────

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: PUBLIC_GENERATIVE,
        description: "Generative AI service offered to the public",
        provisions: &["Interim Measures for Generative AI Services Art. 17"],
        predicate: public_generative,
    },
    TriggerRule {
        id: RECOMMENDATION,
        description: "Algorithmic recommendation service for the public",
        provisions: &["Algorithmic Recommendation Provisions Art. 24"],
        predicate: recommendation,
    },
    TriggerRule {
        id: SENSITIVE_PI,
        description: "Processing of sensitive personal information",
        provisions: &["PIPL Art. 28-32"],
        predicate: sensitive_pi,
    },
    TriggerRule {
        id: DEEP_SYNTHESIS,
        description: "Deep synthesis of faces, voices or scenes",
        provisions: &["Deep Synthesis Provisions Art. 14-17"],
        predicate: generates_deepfakes,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: LABELING,
        description: "AI-generated synthetic content",
        provisions: &["Labeling Measures Art. 4-5"],
        predicate: is_generative,
    },
    TriggerRule {
        id: PERSONAL_INFORMATION,
        description: "Processing of personal information",
        provisions: &["PIPL Art. 13-17"],
        predicate: processes_personal_data,
    },
    TriggerRule {
        id: AUTOMATED_DECISION,
        description: "Automated decision-making using personal information",
        provisions: &["PIPL Art. 24"],
        predicate: automated_decision,
    },
];

const OBLIGATIONS: &[TriggerRule] = &[TriggerRule {
    id: CROSS_BORDER,
    description: "Personal information leaves mainland China",
    provisions: &["PIPL Art. 38-40"],
    predicate: cross_border,
}];

static LADDER: RiskLadder = RiskLadder {
    regime: "China",
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
    minimal_justification: "no generative, recommendation or personal information trigger applies",
};

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "Interim Measures for Generative AI Services",
        title: "Generative AI services",
        summary: "Lawful training data, content controls, security assessment and algorithm filing for services with public opinion attributes.",
        when: &[PUBLIC_GENERATIVE],
    },
    ProvisionEntry {
        citation: "Algorithmic Recommendation Provisions",
        title: "Algorithmic recommendation",
        summary: "Filing within ten working days, user opt-out of personalisation and no differential pricing based on user profiles.",
        when: &[RECOMMENDATION],
    },
    ProvisionEntry {
        citation: "Deep Synthesis Provisions",
        title: "Deep synthesis",
        summary: "Consent of the person whose face or voice is edited, prominent labels and real-name user verification.",
        when: &[DEEP_SYNTHESIS],
    },
    ProvisionEntry {
        citation: "Labeling Measures (2025)",
        title: "Labeling of AI-generated synthetic content",
        summary: "Explicit labels visible to users and implicit labels in file metadata for generated text, images, audio and video.",
        when: GENERATIVE_IDS,
    },
    ProvisionEntry {
        citation: "PIPL",
        title: "Personal Information Protection Law",
        summary: "Notice and consent, separate consent for sensitive data, PIPIA, transparent automated decisions and cross-border controls.",
        when: PIPL_IDS,
    },
    ProvisionEntry {
        citation: "PIPL Art. 38-40",
        title: "Cross-border provision of personal information",
        summary: "Transfers out of China need a CAC security assessment, certification or the standard contract.",
        when: &[CROSS_BORDER],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: "china-security-assessment",
        artifact_type: ArtifactType::RiskAssessment,
        name: "Generative AI security self-assessment",
        required: true,
        template: Some(templates::RISK_ASSESSMENT),
        when: &[PUBLIC_GENERATIVE],
    },
    ArtifactEntry {
        id: "china-algorithm-filing",
        artifact_type: ArtifactType::AlgorithmFiling,
        name: "CAC algorithm filing",
        required: true,
        template: None,
        when: &[PUBLIC_GENERATIVE, RECOMMENDATION, DEEP_SYNTHESIS],
    },
    ArtifactEntry {
        id: artifacts::TRAINING_DATA_SUMMARY,
        artifact_type: ArtifactType::TrainingDataSummary,
        name: "Training data source and legality record",
        required: true,
        template: None,
        when: &[PUBLIC_GENERATIVE],
    },
    ArtifactEntry {
        id: "china-labeling-specification",
        artifact_type: ArtifactType::TransparencyNotice,
        name: "Explicit and implicit label specification",
        required: true,
        template: None,
        when: GENERATIVE_IDS,
    },
    ArtifactEntry {
        id: artifacts::DPIA,
        artifact_type: ArtifactType::DataProtectionAssessment,
        name: "Personal information protection impact assessment",
        required: true,
        template: Some(templates::DPIA),
        when: &[SENSITIVE_PI, AUTOMATED_DECISION, CROSS_BORDER],
    },
    ArtifactEntry {
        id: "china-separate-consent",
        artifact_type: ArtifactType::ConsentRecord,
        name: "Separate consent for sensitive personal information",
        required: true,
        template: None,
        when: &[SENSITIVE_PI],
    },
    ArtifactEntry {
        id: artifacts::PRIVACY_NOTICE,
        artifact_type: ArtifactType::PrivacyNotice,
        name: "PIPL processing notice",
        required: true,
        template: Some(templates::PRIVACY_NOTICE),
        when: PIPL_IDS,
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: actions::CONTENT_LABELING,
        title: "Label AI-generated content",
        description: "Add explicit labels users can see and implicit metadata labels to every generated output, and keep logs for six months.",
        legal_basis: "Labeling Measures Art. 4-5",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: Some("2025-09-01"),
        when: GENERATIVE_IDS,
    },
    ActionEntry {
        id: "china-cac-filing",
        title: "Complete the CAC security assessment and filing",
        description: "Submit the security assessment and register the algorithm with the CAC before launching to the public.",
        legal_basis: "Interim Measures for Generative AI Services Art. 17",
        priority: Priority::Critical,
        effort: Some("8-16 weeks"),
        deadline: Some("before public launch"),
        when: &[PUBLIC_GENERATIVE],
    },
    ActionEntry {
        id: "china-algorithm-filing",
        title: "File the recommendation algorithm",
        description: "File the algorithm's name, type, application domain and self-assessment within ten working days of providing the service.",
        legal_basis: "Algorithmic Recommendation Provisions Art. 24",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: Some("within 10 working days of launch"),
        when: &[RECOMMENDATION, DEEP_SYNTHESIS],
    },
    ActionEntry {
        id: "china-deep-synthesis-consent",
        title: "Obtain consent of depicted individuals",
        description: "Require users to obtain consent from individuals whose biometric information is edited.",
        legal_basis: "Deep Synthesis Provisions Art. 14",
        priority: Priority::Critical,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[DEEP_SYNTHESIS],
    },
    ActionEntry {
        id: actions::TRAINING_DATA_DISCLOSURE,
        title: "Verify training data legality",
        description: "Use lawfully sourced data, respect IP rights and obtain consent for personal information in training data.",
        legal_basis: "Interim Measures for Generative AI Services Art. 7",
        priority: Priority::Important,
        effort: Some("2-6 weeks"),
        deadline: None,
        when: &[PUBLIC_GENERATIVE],
    },
    ActionEntry {
        id: "china-separate-consent",
        title: "Obtain separate consent for sensitive data",
        description: "Get separate consent, and parental consent for children under 14, after explaining necessity and impact.",
        legal_basis: "PIPL Art. 29-31",
        priority: Priority::Critical,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[SENSITIVE_PI],
    },
    ActionEntry {
        id: actions::DPIA,
        title: "Conduct a PIPIA",
        description: "Assess sensitive processing, automated decisions and cross-border provision before they begin and keep records for three years.",
        legal_basis: "PIPL Art. 55-56",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: Some("before processing"),
        when: &[SENSITIVE_PI, AUTOMATED_DECISION, CROSS_BORDER],
    },
    ActionEntry {
        id: actions::CROSS_BORDER_TRANSFER,
        title: "Establish a lawful transfer mechanism",
        description: "File the CAC standard contract, obtain certification, or pass a CAC security assessment before transfer.",
        legal_basis: "PIPL Art. 38",
        priority: Priority::Critical,
        effort: Some("4-12 weeks"),
        deadline: Some("before transfer"),
        when: &[CROSS_BORDER],
    },
    ActionEntry {
        id: actions::AUTOMATED_DECISION_REVIEW,
        title: "Make automated decisions transparent",
        description: "Ensure fair results, offer non-personalised options and explain decisions with significant impact on request.",
        legal_basis: "PIPL Art. 24",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[AUTOMATED_DECISION],
    },
    ActionEntry {
        id: "china-recommendation-opt-out",
        title: "Offer opt-out of personalised recommendations",
        description: "Let users switch off personalisation and delete user tags.",
        legal_basis: "Algorithmic Recommendation Provisions Art. 17",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[RECOMMENDATION],
    },
    ActionEntry {
        id: actions::PRIVACY_NOTICE,
        title: "Provide the PIPL processing notice",
        description: "State the processor, purposes, methods, categories, retention and how to exercise rights.",
        legal_basis: "PIPL Art. 17",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: PIPL_IDS,
    },
    ActionEntry {
        id: actions::DATA_SUBJECT_RIGHTS,
        title: "Handle individual rights requests",
        description: "Support access, copy, correction, deletion, portability and explanation requests.",
        legal_basis: "PIPL Art. 44-50",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: PIPL_IDS,
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct China;

impl JurisdictionModule for China {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::China
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
        ComplianceTimeline::new(None)
            .milestone((2021, 11, 1), "PIPL effective", "Personal Information Protection Law takes effect.")
            .milestone(
                (2022, 3, 1),
                "Algorithmic recommendation rules",
                "Filing and user-control duties for recommendation services take effect.",
            )
            .milestone(
                (2023, 1, 10),
                "Deep synthesis rules",
                "Consent, labeling and verification duties for deep synthesis take effect.",
            )
            .milestone(
                (2023, 8, 15),
                "Generative AI Interim Measures",
                "Security assessment and filing for public generative AI services.",
            )
            .milestone(
                (2025, 9, 1),
                "Labeling Measures effective",
                "Mandatory explicit and implicit labels for AI-generated content, with the national standard GB 45438-2025.",
            )
    }
}
