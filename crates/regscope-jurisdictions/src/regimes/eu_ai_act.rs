//! EU AI Act (Regulation (EU) 2024/1689).
//!
//! Ladder:
//!   - unacceptable: Art. 5 prohibited practices
//!   - high: Annex III use cases and Annex I safety components (Art. 6)
//!   - limited: Art. 50 transparency and GPAI models (Art. 53)
//!
//! GPAI classification follows Art. 51-55: a model is presumed to carry
//! systemic risk at 10^25 training FLOPs or on Commission designation, and
//! the Art. 53(2) open-source exemption is lost once the model is systemic.

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const SOCIAL_SCORING: &str = "eu-ai-act.social-scoring";
const WORKPLACE_EMOTION: &str = "eu-ai-act.workplace-emotion-recognition";
const MANIPULATION: &str = "eu-ai-act.manipulative-techniques";
const SENSITIVE_CATEGORISATION: &str = "eu-ai-act.sensitive-biometric-categorisation";
const FACIAL_SCRAPING: &str = "eu-ai-act.untargeted-facial-scraping";
const PREDICTIVE_POLICING: &str = "eu-ai-act.predictive-policing";
const REALTIME_RBI: &str = "eu-ai-act.realtime-remote-biometric-identification";

const BIOMETRICS: &str = "eu-ai-act.biometrics";
const CRITICAL_INFRASTRUCTURE: &str = "eu-ai-act.critical-infrastructure";
const EDUCATION: &str = "eu-ai-act.education";
const EMPLOYMENT: &str = "eu-ai-act.employment";
const ESSENTIAL_SERVICES: &str = "eu-ai-act.essential-services";
const LAW_ENFORCEMENT: &str = "eu-ai-act.law-enforcement";
const MIGRATION: &str = "eu-ai-act.migration-border-control";
const JUSTICE: &str = "eu-ai-act.justice-democratic-processes";
const SAFETY_COMPONENT: &str = "eu-ai-act.product-safety-component";

const CHATBOT: &str = "eu-ai-act.direct-interaction";
const SYNTHETIC_CONTENT: &str = "eu-ai-act.synthetic-content";
const DEEPFAKE: &str = "eu-ai-act.deepfake";
const GPAI_MODEL: &str = "eu-ai-act.gpai-model";
const GPAI_INTEGRATION: &str = "eu-ai-act.gpai-integration";

const CEASE_PRACTICE: &str = "eu-ai-act-cease-prohibited-practice";

const FRIA: &str = "eu-ai-act.fundamental-rights-impact-assessment";
const SYSTEMIC_RISK: &str = "eu-ai-act.gpai-systemic-risk";

const PROHIBITED_IDS: &[&str] = &[
    SOCIAL_SCORING,
    WORKPLACE_EMOTION,
    MANIPULATION,
    SENSITIVE_CATEGORISATION,
    FACIAL_SCRAPING,
    PREDICTIVE_POLICING,
    REALTIME_RBI,
];

const HIGH_RISK_IDS: &[&str] = &[
    BIOMETRICS,
    CRITICAL_INFRASTRUCTURE,
    EDUCATION,
    EMPLOYMENT,
    ESSENTIAL_SERVICES,
    LAW_ENFORCEMENT,
    MIGRATION,
    JUSTICE,
    SAFETY_COMPONENT,
];

const TRANSPARENCY_IDS: &[&str] = &[CHATBOT, SYNTHETIC_CONTENT, DEEPFAKE];

const IN_SCOPE_IDS: &[&str] = &[
    BIOMETRICS,
    CRITICAL_INFRASTRUCTURE,
    EDUCATION,
    EMPLOYMENT,
    ESSENTIAL_SERVICES,
    LAW_ENFORCEMENT,
    MIGRATION,
    JUSTICE,
    SAFETY_COMPONENT,
    CHATBOT,
    SYNTHETIC_CONTENT,
    DEEPFAKE,
    GPAI_MODEL,
    GPAI_INTEGRATION,
];

// ── Predicates ──────────────────────────────────────────────────────────

const EMOTION_KEYWORDS: &[&str] = &[
    "emotion recognition",
    "emotion detection",
    "detect emotions",
    "infer emotions",
    "sentiment of employees",
];

const GPAI_KEYWORDS: &[&str] = &[
    "general-purpose ai",
    "general purpose ai",
    "foundation model",
    "large language model",
];

fn social_scoring(ctx: &ProductContext) -> Option<String> {
    mentions(
        ctx,
        &["social scoring", "social credit", "trustworthiness score"],
    )
}

fn workplace_emotion(ctx: &ProductContext) -> Option<String> {
    let setting = serves_any(ctx, &[UserPopulation::Employees, UserPopulation::Students])
        .or_else(|| in_sector(ctx, &[Sector::Employment, Sector::Education]));
    both(mentions(ctx, EMOTION_KEYWORDS), setting)
}

fn manipulation(ctx: &ProductContext) -> Option<String> {
    mentions(
        ctx,
        &[
            "subliminal",
            "manipulative technique",
            "exploit vulnerabilities",
            "exploits vulnerabilities",
        ],
    )
}

fn sensitive_categorisation(ctx: &ProductContext) -> Option<String> {
    both(
        has_any_data(ctx, &[DataCategory::Biometric]),
        mentions(
            ctx,
            &[
                "infer race",
                "infer ethnicity",
                "political opinion",
                "religious belief",
                "sexual orientation",
            ],
        ),
    )
}

fn facial_scraping(ctx: &ProductContext) -> Option<String> {
    mentions(
        ctx,
        &[
            "untargeted scraping",
            "scrape facial images",
            "scraping facial images",
            "facial image scraping",
        ],
    )
}

fn predictive_policing(ctx: &ProductContext) -> Option<String> {
    mentions(
        ctx,
        &[
            "predictive policing",
            "predict criminal",
            "crime prediction",
            "likelihood of offending",
        ],
    )
}

fn realtime_rbi(ctx: &ProductContext) -> Option<String> {
    both(
        in_sector(ctx, &[Sector::LawEnforcement]),
        mentions(
            ctx,
            &[
                "real-time facial recognition",
                "live facial recognition",
                "real-time biometric identification",
            ],
        ),
    )
}

fn biometrics(ctx: &ProductContext) -> Option<String> {
    let identification = both(
        has_any_data(ctx, &[DataCategory::Biometric]),
        mentions(
            ctx,
            &[
                "identification",
                "facial recognition",
                "face recognition",
                "categorisation",
                "categorization",
            ],
        ),
    );
    identification.or_else(|| mentions(ctx, EMOTION_KEYWORDS))
}

fn critical_infrastructure(ctx: &ProductContext) -> Option<String> {
    both(
        in_sector(ctx, &[Sector::CriticalInfrastructure]),
        consequential(ctx),
    )
}

fn education(ctx: &ProductContext) -> Option<String> {
    let setting = serves_any(ctx, &[UserPopulation::Students])
        .or_else(|| in_sector(ctx, &[Sector::Education]));
    both(setting, consequential(ctx))
}

fn essential_services(ctx: &ProductContext) -> Option<String> {
    credit_decisions(ctx)
        .or_else(|| offers_financial_service(ctx, &[FinancialService::InsurancePricing]))
        .or_else(|| {
            both(
                serves_any(
                    ctx,
                    &[
                        UserPopulation::InsuranceApplicants,
                        UserPopulation::BenefitRecipients,
                    ],
                ),
                consequential(ctx),
            )
        })
}

fn law_enforcement(ctx: &ProductContext) -> Option<String> {
    both(in_sector(ctx, &[Sector::LawEnforcement]), consequential(ctx))
}

fn migration(ctx: &ProductContext) -> Option<String> {
    mentions(
        ctx,
        &["border control", "asylum", "visa application", "immigration"],
    )
}

fn justice(ctx: &ProductContext) -> Option<String> {
    both(in_sector(ctx, &[Sector::Legal]), consequential(ctx))
        .or_else(|| mentions(ctx, &["electoral", "voting behaviour", "voting behavior"]))
}

fn safety_component(ctx: &ProductContext) -> Option<String> {
    let product_law = in_sector(ctx, &[Sector::Healthcare, Sector::Transportation])
        .or_else(|| serves_any(ctx, &[UserPopulation::Patients]));
    both(product_law, consequential(ctx))
}

fn chatbot(ctx: &ProductContext) -> Option<String> {
    mentions(
        ctx,
        &[
            "chatbot",
            "chat bot",
            "conversational",
            "virtual assistant",
            "voice assistant",
        ],
    )
}

/// Provider obligations attach only to a declared GPAI model.
fn gpai_model(ctx: &ProductContext) -> Option<String> {
    is_gpai(ctx).then(|| "product is a general-purpose AI model".to_string())
}

/// A system described as built on a GPAI model, without being one.
fn gpai_integration(ctx: &ProductContext) -> Option<String> {
    if is_gpai(ctx) {
        return None;
    }
    mentions(ctx, GPAI_KEYWORDS)
}

fn fria_required(ctx: &ProductContext) -> Option<String> {
    HIGH_RISK.iter().find_map(|rule| (rule.predicate)(ctx))?;
    in_sector(ctx, &[Sector::Government])
        .or_else(|| credit_decisions(ctx))
        .or_else(|| offers_financial_service(ctx, &[FinancialService::InsurancePricing]))
}

fn systemic_risk(ctx: &ProductContext) -> Option<String> {
    if !is_gpai(ctx) {
        return None;
    }
    let designated = ctx
        .gpai_info
        .as_ref()
        .filter(|g| g.systemic_risk_designated)
        .map(|_| "designated by the Commission as systemic".to_string());
    designated.or_else(|| training_compute_at_least(ctx, EU_SYSTEMIC_RISK_FLOPS))
}

// ── Ladder ──────────────────────────────────────────────────────────────

const PROHIBITED: &[TriggerRule] = &[
    TriggerRule {
        id: SOCIAL_SCORING,
        description: "Social scoring of natural persons",
        provisions: &["EU AI Act Art. 5(1)(c)"],
        predicate: social_scoring,
    },
    TriggerRule {
        id: WORKPLACE_EMOTION,
        description: "Emotion recognition in the workplace or education",
        provisions: &["EU AI Act Art. 5(1)(f)"],
        predicate: workplace_emotion,
    },
    TriggerRule {
        id: MANIPULATION,
        description: "Subliminal or manipulative techniques",
        provisions: &["EU AI Act Art. 5(1)(a)", "EU AI Act Art. 5(1)(b)"],
        predicate: manipulation,
    },
    TriggerRule {
        id: SENSITIVE_CATEGORISATION,
        description: "Biometric categorisation inferring sensitive traits",
        provisions: &["EU AI Act Art. 5(1)(g)"],
        predicate: sensitive_categorisation,
    },
    TriggerRule {
        id: FACIAL_SCRAPING,
        description: "Untargeted scraping of facial images",
        provisions: &["EU AI Act Art. 5(1)(e)"],
        predicate: facial_scraping,
    },
    TriggerRule {
        id: PREDICTIVE_POLICING,
        description: "Predicting criminal offences from profiling",
        provisions: &["EU AI Act Art. 5(1)(d)"],
        predicate: predictive_policing,
    },
    TriggerRule {
        id: REALTIME_RBI,
        description: "Real-time remote biometric identification for law enforcement",
        provisions: &["EU AI Act Art. 5(1)(h)"],
        predicate: realtime_rbi,
    },
];

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: BIOMETRICS,
        description: "Biometric identification, categorisation or emotion recognition",
        provisions: &["EU AI Act Art. 6(2)", "EU AI Act Annex III(1)"],
        predicate: biometrics,
    },
    TriggerRule {
        id: CRITICAL_INFRASTRUCTURE,
        description: "Safety component of critical infrastructure",
        provisions: &["EU AI Act Art. 6(2)", "EU AI Act Annex III(2)"],
        predicate: critical_infrastructure,
    },
    TriggerRule {
        id: EDUCATION,
        description: "Access to or assessment in education",
        provisions: &["EU AI Act Art. 6(2)", "EU AI Act Annex III(3)"],
        predicate: education,
    },
    TriggerRule {
        id: EMPLOYMENT,
        description: "Recruitment or management of workers",
        provisions: &["EU AI Act Art. 6(2)", "EU AI Act Annex III(4)"],
        predicate: employment_decisions,
    },
    TriggerRule {
        id: ESSENTIAL_SERVICES,
        description: "Access to essential private or public services",
        provisions: &["EU AI Act Art. 6(2)", "EU AI Act Annex III(5)"],
        predicate: essential_services,
    },
    TriggerRule {
        id: LAW_ENFORCEMENT,
        description: "Law enforcement use",
        provisions: &["EU AI Act Art. 6(2)", "EU AI Act Annex III(6)"],
        predicate: law_enforcement,
    },
    TriggerRule {
        id: MIGRATION,
        description: "Migration, asylum or border control management",
        provisions: &["EU AI Act Art. 6(2)", "EU AI Act Annex III(7)"],
        predicate: migration,
    },
    TriggerRule {
        id: JUSTICE,
        description: "Administration of justice or democratic processes",
        provisions: &["EU AI Act Art. 6(2)", "EU AI Act Annex III(8)"],
        predicate: justice,
    },
    TriggerRule {
        id: SAFETY_COMPONENT,
        description: "Safety component of a product under Annex I harmonisation law",
        provisions: &["EU AI Act Art. 6(1)", "EU AI Act Annex I"],
        predicate: safety_component,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: CHATBOT,
        description: "System interacts directly with natural persons",
        provisions: &["EU AI Act Art. 50(1)"],
        predicate: chatbot,
    },
    TriggerRule {
        id: SYNTHETIC_CONTENT,
        description: "System generates synthetic content",
        provisions: &["EU AI Act Art. 50(2)"],
        predicate: is_generative,
    },
    TriggerRule {
        id: DEEPFAKE,
        description: "System can generate deep fakes",
        provisions: &["EU AI Act Art. 50(4)"],
        predicate: generates_deepfakes,
    },
    TriggerRule {
        id: GPAI_MODEL,
        description: "General-purpose AI model",
        provisions: &["EU AI Act Art. 53"],
        predicate: gpai_model,
    },
    TriggerRule {
        id: GPAI_INTEGRATION,
        description: "System built on a general-purpose AI model",
        provisions: &["EU AI Act Art. 53(1)(b)"],
        predicate: gpai_integration,
    },
];

static LADDER: RiskLadder = RiskLadder {
    regime: "EU AI Act",
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
    minimal_justification: "no prohibited practice, Annex III use case or transparency trigger applies",
};

const OBLIGATIONS: &[TriggerRule] = &[
    TriggerRule {
        id: FRIA,
        description: "Deployer must assess fundamental-rights impact",
        provisions: &["EU AI Act Art. 27"],
        predicate: fria_required,
    },
    TriggerRule {
        id: SYSTEMIC_RISK,
        description: "GPAI model with systemic risk",
        provisions: &["EU AI Act Art. 51", "EU AI Act Art. 55"],
        predicate: systemic_risk,
    },
];

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "EU AI Act Art. 2",
        title: "Scope",
        summary: "Applies to providers placing AI systems on the EU market and to deployers in the Union, wherever the provider is established.",
        when: &[],
    },
    ProvisionEntry {
        citation: "EU AI Act Art. 4",
        title: "AI literacy",
        summary: "Providers and deployers must ensure a sufficient level of AI literacy among staff operating AI systems.",
        when: IN_SCOPE_IDS,
    },
    ProvisionEntry {
        citation: "EU AI Act Art. 5",
        title: "Prohibited AI practices",
        summary: "Certain practices are banned outright, including social scoring, manipulative techniques and workplace emotion recognition.",
        when: PROHIBITED_IDS,
    },
    ProvisionEntry {
        citation: "EU AI Act Art. 6 and Annex III",
        title: "Classification of high-risk AI systems",
        summary: "Systems used in the Annex III areas, or as safety components of Annex I products, are high-risk.",
        when: HIGH_RISK_IDS,
    },
    ProvisionEntry {
        citation: "EU AI Act Arts. 8-15",
        title: "Requirements for high-risk AI systems",
        summary: "Risk management, data governance, technical documentation, record-keeping, transparency, human oversight, accuracy and robustness.",
        when: HIGH_RISK_IDS,
    },
    ProvisionEntry {
        citation: "EU AI Act Art. 26",
        title: "Obligations of deployers of high-risk AI systems",
        summary: "Use per instructions, assign human oversight, monitor operation and keep logs.",
        when: HIGH_RISK_IDS,
    },
    ProvisionEntry {
        citation: "EU AI Act Art. 27",
        title: "Fundamental rights impact assessment",
        summary: "Public bodies and deployers of credit or insurance systems must assess fundamental-rights impact before first use.",
        when: &[FRIA],
    },
    ProvisionEntry {
        citation: "EU AI Act Art. 50",
        title: "Transparency obligations",
        summary: "Disclose AI interaction, mark synthetic outputs in machine-readable form and label deep fakes.",
        when: TRANSPARENCY_IDS,
    },
    ProvisionEntry {
        citation: "EU AI Act Art. 53",
        title: "Obligations for providers of GPAI models",
        summary: "Technical documentation, downstream information, copyright policy and a public training-content summary.",
        when: &[GPAI_MODEL],
    },
    ProvisionEntry {
        citation: "EU AI Act Art. 55",
        title: "Obligations for GPAI models with systemic risk",
        summary: "Model evaluation, adversarial testing, serious incident reporting and cybersecurity protection.",
        when: &[SYSTEMIC_RISK],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: artifacts::RISK_ASSESSMENT,
        artifact_type: ArtifactType::RiskAssessment,
        name: "Risk management system documentation (Art. 9)",
        required: true,
        template: Some(templates::RISK_ASSESSMENT),
        when: HIGH_RISK_IDS,
    },
    ArtifactEntry {
        id: artifacts::TECHNICAL_DOCUMENTATION,
        artifact_type: ArtifactType::TechnicalDocumentation,
        name: "Technical documentation (Art. 11, Annex IV)",
        required: true,
        template: Some(templates::TECHNICAL_DOCUMENTATION),
        when: &[
            BIOMETRICS,
            CRITICAL_INFRASTRUCTURE,
            EDUCATION,
            EMPLOYMENT,
            ESSENTIAL_SERVICES,
            LAW_ENFORCEMENT,
            MIGRATION,
            JUSTICE,
            SAFETY_COMPONENT,
            GPAI_MODEL,
        ],
    },
    ArtifactEntry {
        id: "eu-ai-act-conformity-assessment",
        artifact_type: ArtifactType::ConformityAssessment,
        name: "Conformity assessment and EU declaration of conformity (Arts. 43, 47)",
        required: true,
        template: None,
        when: HIGH_RISK_IDS,
    },
    ArtifactEntry {
        id: artifacts::HUMAN_OVERSIGHT_PLAN,
        artifact_type: ArtifactType::HumanOversightPlan,
        name: "Human oversight measures (Art. 14)",
        required: true,
        template: None,
        when: HIGH_RISK_IDS,
    },
    ArtifactEntry {
        id: "eu-ai-act-fria",
        artifact_type: ArtifactType::ImpactAssessment,
        name: "Fundamental rights impact assessment (Art. 27)",
        required: true,
        template: Some(templates::IMPACT_ASSESSMENT),
        when: &[FRIA],
    },
    ArtifactEntry {
        id: artifacts::TRANSPARENCY_NOTICE,
        artifact_type: ArtifactType::TransparencyNotice,
        name: "AI interaction and synthetic content disclosure (Art. 50)",
        required: true,
        template: Some(templates::TRANSPARENCY_NOTICE),
        when: TRANSPARENCY_IDS,
    },
    ArtifactEntry {
        id: artifacts::MODEL_CARD,
        artifact_type: ArtifactType::ModelCard,
        name: "Information for downstream providers (Art. 53(1)(b), Annex XII)",
        required: true,
        template: Some(templates::MODEL_CARD),
        when: &[GPAI_MODEL],
    },
    ArtifactEntry {
        id: artifacts::TRAINING_DATA_SUMMARY,
        artifact_type: ArtifactType::TrainingDataSummary,
        name: "Public summary of training content (Art. 53(1)(d))",
        required: true,
        template: None,
        when: &[GPAI_MODEL],
    },
    ArtifactEntry {
        id: artifacts::INCIDENT_RESPONSE_PLAN,
        artifact_type: ArtifactType::IncidentResponsePlan,
        name: "Serious incident reporting procedure (Arts. 55, 73)",
        required: true,
        template: None,
        when: &[
            BIOMETRICS,
            CRITICAL_INFRASTRUCTURE,
            EDUCATION,
            EMPLOYMENT,
            ESSENTIAL_SERVICES,
            LAW_ENFORCEMENT,
            MIGRATION,
            JUSTICE,
            SAFETY_COMPONENT,
            SYSTEMIC_RISK,
        ],
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: CEASE_PRACTICE,
        title: "Discontinue the prohibited practice",
        description: "The system performs a practice banned under Art. 5. It may not be placed on the EU market or used in the Union.",
        legal_basis: "EU AI Act Art. 5",
        priority: Priority::Critical,
        effort: None,
        deadline: Some("in force since 2025-02-02"),
        when: PROHIBITED_IDS,
    },
    ActionEntry {
        id: actions::RISK_MANAGEMENT,
        title: "Establish a risk management system",
        description: "Run a continuous, documented risk management process across the system lifecycle.",
        legal_basis: "EU AI Act Art. 9",
        priority: Priority::Critical,
        effort: Some("4-8 weeks"),
        deadline: Some("2026-08-02"),
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: "eu-ai-act-conformity-assessment",
        title: "Complete conformity assessment and CE marking",
        description: "Carry out the applicable conformity assessment procedure, draw up the EU declaration of conformity and affix the CE marking.",
        legal_basis: "EU AI Act Arts. 43, 47, 48",
        priority: Priority::Critical,
        effort: Some("8-12 weeks"),
        deadline: Some("before placing on the market"),
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: actions::HUMAN_OVERSIGHT,
        title: "Design for effective human oversight",
        description: "Enable natural persons to understand, monitor, override and stop the system.",
        legal_basis: "EU AI Act Art. 14",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: "eu-ai-act-data-governance",
        title: "Apply data governance to training, validation and test data",
        description: "Document data provenance, relevance and representativeness, and examine data for possible biases.",
        legal_basis: "EU AI Act Art. 10",
        priority: Priority::Important,
        effort: Some("2-6 weeks"),
        deadline: None,
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: actions::BIAS_TESTING,
        title: "Test for bias and discriminatory outcomes",
        description: "Examine datasets and outputs for biases likely to affect fundamental rights and take mitigation measures.",
        legal_basis: "EU AI Act Art. 10(2)(f)",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: "eu-ai-act-record-keeping",
        title: "Enable automatic event logging",
        description: "Record events over the system lifetime to ensure traceability, and retain deployer logs for at least six months.",
        legal_basis: "EU AI Act Arts. 12, 26(6)",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: "eu-ai-act-database-registration",
        title: "Register in the EU database",
        description: "Register the high-risk system in the EU database before placing it on the market or putting it into service.",
        legal_basis: "EU AI Act Art. 49",
        priority: Priority::Important,
        effort: Some("1 day"),
        deadline: Some("before placing on the market"),
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: "eu-ai-act-post-market-monitoring",
        title: "Operate a post-market monitoring plan",
        description: "Actively collect and analyse performance data over the system lifetime.",
        legal_basis: "EU AI Act Art. 72",
        priority: Priority::Important,
        effort: Some("ongoing"),
        deadline: None,
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: actions::INCIDENT_RESPONSE,
        title: "Report serious incidents",
        description: "Report serious incidents to market surveillance authorities within the statutory deadlines.",
        legal_basis: "EU AI Act Arts. 55(1)(c), 73",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[
            BIOMETRICS,
            CRITICAL_INFRASTRUCTURE,
            EDUCATION,
            EMPLOYMENT,
            ESSENTIAL_SERVICES,
            LAW_ENFORCEMENT,
            MIGRATION,
            JUSTICE,
            SAFETY_COMPONENT,
            SYSTEMIC_RISK,
        ],
    },
    ActionEntry {
        id: actions::IMPACT_ASSESSMENT,
        title: "Perform a fundamental rights impact assessment",
        description: "Assess the impact on fundamental rights before first use and notify the market surveillance authority of the results.",
        legal_basis: "EU AI Act Art. 27",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: Some("before first use"),
        when: &[FRIA],
    },
    ActionEntry {
        id: actions::AI_DISCLOSURE,
        title: "Disclose AI interaction",
        description: "Inform natural persons that they are interacting with an AI system unless obvious from the context.",
        legal_basis: "EU AI Act Art. 50(1)",
        priority: Priority::Critical,
        effort: Some("1-3 days"),
        deadline: Some("2026-08-02"),
        when: &[CHATBOT],
    },
    ActionEntry {
        id: actions::CONTENT_LABELING,
        title: "Mark synthetic content and label deep fakes",
        description: "Mark outputs as artificially generated in a machine-readable format and disclose deep fakes to viewers.",
        legal_basis: "EU AI Act Art. 50(2), 50(4)",
        priority: Priority::Important,
        effort: Some("1-3 weeks"),
        deadline: Some("2026-08-02"),
        when: &[SYNTHETIC_CONTENT, DEEPFAKE],
    },
    ActionEntry {
        id: "eu-ai-act-gpai-documentation",
        title: "Maintain GPAI technical documentation",
        description: "Keep model documentation for the AI Office and provide integration information to downstream providers.",
        legal_basis: "EU AI Act Art. 53(1)(a)-(b)",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: Some("2025-08-02"),
        when: &[GPAI_MODEL],
    },
    ActionEntry {
        id: "eu-ai-act-copyright-policy",
        title: "Adopt a copyright compliance policy",
        description: "Put in place a policy to comply with Union copyright law, including text-and-data-mining opt-outs.",
        legal_basis: "EU AI Act Art. 53(1)(c)",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: Some("2025-08-02"),
        when: &[GPAI_MODEL],
    },
    ActionEntry {
        id: actions::TRAINING_DATA_DISCLOSURE,
        title: "Publish a training content summary",
        description: "Publish a sufficiently detailed summary of training content using the AI Office template.",
        legal_basis: "EU AI Act Art. 53(1)(d)",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: Some("2025-08-02"),
        when: &[GPAI_MODEL],
    },
    ActionEntry {
        id: "eu-ai-act-systemic-risk-evaluation",
        title: "Evaluate and mitigate systemic risk",
        description: "Perform state-of-the-art model evaluation including adversarial testing, and ensure adequate cybersecurity.",
        legal_basis: "EU AI Act Art. 55(1)",
        priority: Priority::Critical,
        effort: Some("8-16 weeks"),
        deadline: Some("2025-08-02"),
        when: &[SYSTEMIC_RISK],
    },
    ActionEntry {
        id: "eu-ai-act-ai-literacy",
        title: "Ensure AI literacy of staff",
        description: "Train staff operating the system to an adequate level of AI literacy.",
        legal_basis: "EU AI Act Art. 4",
        priority: Priority::Recommended,
        effort: Some("ongoing"),
        deadline: None,
        when: IN_SCOPE_IDS,
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct EuAiAct;

impl JurisdictionModule for EuAiAct {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::EuAiAct
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
        let triggers = self.triggers(ctx);
        if triggers.any_fired(PROHIBITED_IDS) {
            return Vec::new();
        }
        table::artifacts(ARTIFACTS, &triggers)
    }

    fn required_actions(&self, ctx: &ProductContext) -> Vec<ActionRequirement> {
        let triggers = self.triggers(ctx);
        if triggers.any_fired(PROHIBITED_IDS) {
            // A prohibited system owes only the cessation action.
            let cessation: Vec<ActionEntry> = ACTIONS
                .iter()
                .filter(|a| a.id == CEASE_PRACTICE)
                .copied()
                .collect();
            return table::actions(&cessation, &triggers);
        }
        table::actions(ACTIONS, &triggers)
    }

    fn timeline(&self, ctx: &ProductContext) -> ComplianceTimeline {
        let timeline = ComplianceTimeline::new(ymd(2024, 8, 1))
            .milestone(
                (2024, 8, 1),
                "Entry into force",
                "Regulation (EU) 2024/1689 enters into force.",
            )
            .milestone(
                (2025, 2, 2),
                "Prohibitions and AI literacy",
                "Art. 5 prohibitions and Art. 4 AI literacy obligations apply.",
            )
            .milestone(
                (2025, 8, 2),
                "GPAI obligations",
                "Obligations for GPAI model providers, governance and penalties apply.",
            )
            .milestone(
                (2026, 8, 2),
                "General application",
                "Annex III high-risk and Art. 50 transparency obligations apply.",
            )
            .milestone(
                (2027, 8, 2),
                "Annex I products and legacy GPAI models",
                "High-risk obligations for Annex I safety components apply; GPAI models placed before 2025-08-02 must comply.",
            );
        if self.triggers(ctx).any_fired(HIGH_RISK_IDS) {
            timeline.note(
                "The Digital Omnibus proposal of November 2025 would tie the high-risk application dates to the availability of harmonised standards; it is not yet adopted.",
            )
        } else {
            timeline
        }
    }

    fn gpai_classification(&self, ctx: &ProductContext) -> Option<GpaiClassification> {
        if !is_gpai(ctx) {
            return None;
        }
        let has_systemic_risk = systemic_risk(ctx).is_some();
        let open_source = ctx.gpai_info.as_ref().is_some_and(|g| g.is_open_source);
        let open_source_exemption = open_source && !has_systemic_risk;

        let mut obligations = Vec::new();
        let mut provisions = vec!["EU AI Act Art. 53".to_string()];
        if !open_source_exemption {
            obligations.push("Maintain technical documentation for the AI Office".to_string());
            obligations.push("Provide information to downstream providers".to_string());
        }
        obligations.push("Adopt a policy to comply with Union copyright law".to_string());
        obligations.push("Publish a summary of training content".to_string());
        if has_systemic_risk {
            obligations.push("Notify the Commission within two weeks of meeting the threshold".to_string());
            obligations.push("Perform model evaluation and adversarial testing".to_string());
            obligations.push("Assess and mitigate systemic risks".to_string());
            obligations.push("Track and report serious incidents".to_string());
            obligations.push("Ensure adequate cybersecurity protection".to_string());
            provisions.push("EU AI Act Art. 51".to_string());
            provisions.push("EU AI Act Art. 52".to_string());
            provisions.push("EU AI Act Art. 55".to_string());
        } else if open_source_exemption {
            provisions.push("EU AI Act Art. 53(2)".to_string());
        }

        tracing::debug!(
            systemic = has_systemic_risk,
            open_source_exemption,
            "EU AI Act GPAI classification"
        );
        Some(GpaiClassification {
            is_gpai: true,
            has_systemic_risk,
            open_source_exemption,
            obligations,
            provisions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regimes::fixtures::{action_ids, artifact_ids, ctx};
    use regscope_core::{
        AgenticAiContext, AutomationLevel, AutonomyLevel, GenerativeAiContext, GpaiInfo,
        SectorContext,
    };

    fn eu(description: &str, product_type: ProductType) -> ProductContext {
        ctx(description, product_type, "eu-ai-act")
    }

    #[test]
    fn procurement_agent_is_minimal() {
        let mut agentic = AgenticAiContext::new(AutonomyLevel::Bounded);
        agentic.can_make_financial_transactions = true;
        let c = eu(
            "Autonomous procurement agent that places purchase orders within spending limits",
            ProductType::Agent,
        )
        .with_decision_impact(DecisionImpact::Material)
        .with_automation(AutomationLevel::HumanOnTheLoop)
        .with_agentic(agentic);

        let classification = EuAiAct.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::Minimal);
        assert!(classification.applicable_categories.is_empty());
        assert!(EuAiAct.required_artifacts(&c).is_empty());
        assert!(EuAiAct.required_actions(&c).is_empty());
        assert!(EuAiAct.gpai_classification(&c).is_none());
    }

    #[test]
    fn chatbot_is_limited_and_must_disclose() {
        let c = eu("Customer support chatbot for an online shop", ProductType::Other);
        let classification = EuAiAct.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::Limited);
        assert_eq!(classification.applicable_categories, vec![CHATBOT]);
        assert_eq!(classification.provisions, vec!["EU AI Act Art. 50(1)"]);

        let actions = EuAiAct.required_actions(&c);
        assert_eq!(action_ids(&actions), vec![actions::AI_DISCLOSURE, "eu-ai-act-ai-literacy"]);
        assert_eq!(actions[0].priority, Priority::Critical);
    }

    #[test]
    fn generator_is_limited() {
        let c = eu("Marketing image studio", ProductType::Generator);
        let classification = EuAiAct.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::Limited);
        assert!(classification.applicable_categories.contains(&SYNTHETIC_CONTENT.to_string()));
        assert!(action_ids(&EuAiAct.required_actions(&c)).contains(&actions::CONTENT_LABELING));
    }

    #[test]
    fn hiring_screener_is_high_risk() {
        let c = eu("CV screening and candidate ranking", ProductType::Ranker)
            .with_populations([UserPopulation::JobApplicants])
            .with_decision_impact(DecisionImpact::Material);
        let classification = EuAiAct.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::High);
        assert_eq!(classification.applicable_categories, vec![EMPLOYMENT]);
        assert_eq!(
            classification.provisions,
            vec!["EU AI Act Art. 6(2)", "EU AI Act Annex III(4)"]
        );

        let binding = EuAiAct.required_artifacts(&c);
        let artifacts = artifact_ids(&binding);
        assert!(artifacts.contains(&artifacts::RISK_ASSESSMENT));
        assert!(artifacts.contains(&"eu-ai-act-conformity-assessment"));
        let actions = EuAiAct.required_actions(&c);
        assert!(action_ids(&actions).contains(&actions::HUMAN_OVERSIGHT));
        assert!(!action_ids(&actions).contains(&actions::IMPACT_ASSESSMENT));
    }

    #[test]
    fn credit_scoring_requires_fria() {
        let c = eu("Consumer loan underwriting model", ProductType::Predictor)
            .with_populations([UserPopulation::CreditApplicants])
            .with_decision_impact(DecisionImpact::Determinative)
            .with_sector(SectorContext::new(Sector::FinancialServices));
        assert_eq!(EuAiAct.risk_level(&c).level, RiskLevel::High);
        assert!(action_ids(&EuAiAct.required_actions(&c)).contains(&actions::IMPACT_ASSESSMENT));
        assert!(artifact_ids(&EuAiAct.required_artifacts(&c)).contains(&"eu-ai-act-fria"));
    }

    #[test]
    fn social_scoring_is_unacceptable_and_overrides_high() {
        let c = eu("Citizen social scoring for benefit eligibility", ProductType::Predictor)
            .with_populations([UserPopulation::BenefitRecipients])
            .with_decision_impact(DecisionImpact::Determinative);
        let classification = EuAiAct.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::Unacceptable);
        assert_eq!(classification.applicable_categories, vec![SOCIAL_SCORING]);
        assert!(EuAiAct.required_artifacts(&c).is_empty());
        assert_eq!(
            action_ids(&EuAiAct.required_actions(&c)),
            vec![CEASE_PRACTICE]
        );
    }

    #[test]
    fn emotion_recognition_outside_work_is_high_inside_work_is_banned() {
        let retail = eu("Emotion recognition for in-store ad testing", ProductType::Detector);
        assert_eq!(EuAiAct.risk_level(&retail).level, RiskLevel::High);

        let office = retail.clone().with_populations([UserPopulation::Employees]);
        assert_eq!(EuAiAct.risk_level(&office).level, RiskLevel::Unacceptable);
    }

    #[test]
    fn gpai_below_threshold_open_source_is_exempt() {
        let c = eu("Open-weights language model", ProductType::FoundationModel).with_gpai(GpaiInfo {
            is_gpai_model: true,
            is_open_source: true,
            training_compute_flops: Some(2e24),
            systemic_risk_designated: false,
        });
        let gpai = EuAiAct.gpai_classification(&c).unwrap();
        assert!(gpai.is_gpai);
        assert!(!gpai.has_systemic_risk);
        assert!(gpai.open_source_exemption);
        assert!(gpai.provisions.contains(&"EU AI Act Art. 53(2)".to_string()));
        assert_eq!(EuAiAct.risk_level(&c).level, RiskLevel::Limited);
    }

    #[test]
    fn systemic_gpai_loses_open_source_exemption() {
        let c = eu("Frontier model", ProductType::FoundationModel).with_gpai(GpaiInfo {
            is_gpai_model: true,
            is_open_source: true,
            training_compute_flops: Some(5e25),
            systemic_risk_designated: false,
        });
        let gpai = EuAiAct.gpai_classification(&c).unwrap();
        assert!(gpai.has_systemic_risk);
        assert!(!gpai.open_source_exemption);
        assert!(gpai.provisions.contains(&"EU AI Act Art. 55".to_string()));
        let actions = EuAiAct.required_actions(&c);
        let systemic = actions
            .iter()
            .find(|a| a.id == "eu-ai-act-systemic-risk-evaluation")
            .unwrap();
        assert_eq!(systemic.priority, Priority::Critical);
    }

    #[test]
    fn llm_powered_system_is_not_a_gpai_provider() {
        let c = eu(
            "Customer support assistant powered by a large language model",
            ProductType::Other,
        );
        assert!(EuAiAct.gpai_classification(&c).is_none());

        let classification = EuAiAct.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::Limited);
        assert_eq!(classification.applicable_categories, vec![GPAI_INTEGRATION]);
        let artifacts = EuAiAct.required_artifacts(&c);
        assert!(!artifact_ids(&artifacts).contains(&artifacts::TRAINING_DATA_SUMMARY));
        let actions = EuAiAct.required_actions(&c);
        assert!(!action_ids(&actions).contains(&"eu-ai-act-gpai-documentation"));
    }

    #[test]
    fn foundation_model_type_is_gpai_without_gpai_info() {
        let c = eu("Open multilingual base model", ProductType::FoundationModel);
        let gpai = EuAiAct.gpai_classification(&c).unwrap();
        assert!(gpai.is_gpai);
        assert!(!gpai.has_systemic_risk);
        let triggers = EuAiAct.triggers(&c);
        assert!(triggers.fired(GPAI_MODEL));
        assert!(!triggers.fired(GPAI_INTEGRATION));
    }

    #[test]
    fn designation_makes_gpai_systemic_without_compute() {
        let c = eu("Hosted model", ProductType::FoundationModel).with_gpai(GpaiInfo {
            is_gpai_model: true,
            systemic_risk_designated: true,
            ..Default::default()
        });
        assert!(EuAiAct.gpai_classification(&c).unwrap().has_systemic_risk);
    }

    #[test]
    fn deepfake_generator_labels_content() {
        let c = eu("Face swap video app", ProductType::Generator).with_generative(GenerativeAiContext {
            generates_video: true,
            can_generate_deepfakes: true,
            ..Default::default()
        });
        let classification = EuAiAct.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::Limited);
        assert_eq!(
            classification.applicable_categories,
            vec![SYNTHETIC_CONTENT, DEEPFAKE]
        );
    }

    #[test]
    fn timeline_is_sorted_and_notes_omnibus_for_high_risk() {
        let plain = eu("Spreadsheet helper", ProductType::Other);
        let t = EuAiAct.timeline(&plain);
        assert_eq!(t.milestones.len(), 5);
        assert!(t.milestones.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(t.notes.is_empty());

        let high = eu("Exam proctoring and grading", ProductType::Classifier)
            .with_populations([UserPopulation::Students])
            .with_decision_impact(DecisionImpact::Material);
        assert_eq!(EuAiAct.timeline(&high).notes.len(), 1);
    }

    #[test]
    fn triggers_cover_ladder_and_obligations() {
        let c = eu("anything", ProductType::Other);
        let all = EuAiAct.evaluate_triggers(&c);
        assert_eq!(
            all.len(),
            PROHIBITED.len() + HIGH_RISK.len() + LIMITED_RISK.len() + OBLIGATIONS.len()
        );
        assert!(all.iter().all(|t| !t.satisfied));
    }
}
