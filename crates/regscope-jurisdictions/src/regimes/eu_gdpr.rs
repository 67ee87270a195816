//! EU General Data Protection Regulation (Regulation (EU) 2016/679).
//!
//! The ladder reads GDPR through the Art. 35 lens: processing "likely to
//! result in a high risk" (special categories, solely automated decisions,
//! systematic monitoring, children) is `high`; any other processing of
//! personal data is `limited`; no personal data is `minimal`.
//!
//! Training on personal data and third-country transfers raise obligations
//! without moving the level.

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const SPECIAL_CATEGORY: &str = "eu-gdpr.special-category-data";
const AUTOMATED_DECISION: &str = "eu-gdpr.solely-automated-decision";
const SYSTEMATIC_MONITORING: &str = "eu-gdpr.systematic-monitoring";
const CHILDREN: &str = "eu-gdpr.children";
const PERSONAL_DATA: &str = "eu-gdpr.personal-data";
const PROFILING: &str = "eu-gdpr.profiling";

const TRAINING_PERSONAL_DATA: &str = "eu-gdpr.training-on-personal-data";
const TRANSFER: &str = "eu-gdpr.third-country-transfer";

const HIGH_RISK_IDS: &[&str] = &[SPECIAL_CATEGORY, AUTOMATED_DECISION, SYSTEMATIC_MONITORING, CHILDREN];

const PERSONAL_IDS: &[&str] = &[
    SPECIAL_CATEGORY,
    AUTOMATED_DECISION,
    SYSTEMATIC_MONITORING,
    CHILDREN,
    PERSONAL_DATA,
    PROFILING,
];

/// Markets whose personal-data flows need no Chapter V mechanism.
const ADEQUATE_OR_EEA: &[&str] = &["eu-ai-act", "eu-gdpr", "uk"];

// ── Predicates ──────────────────────────────────────────────────────────

fn automated_decision(ctx: &ProductContext) -> Option<String> {
    both(processes_personal_data(ctx), solely_automated_significant(ctx))
}

fn systematic_monitoring(ctx: &ProductContext) -> Option<String> {
    both(
        has_any_data(ctx, &[DataCategory::Location, DataCategory::Behavioral]),
        serves_any(
            ctx,
            &[
                UserPopulation::Consumers,
                UserPopulation::GeneralPublic,
                UserPopulation::Employees,
            ],
        ),
    )
}

fn profiling(ctx: &ProductContext) -> Option<String> {
    let profiler = matches!(
        ctx.product_type,
        ProductType::Recommender | ProductType::Ranker | ProductType::Predictor
    )
    .then(|| format!("{} evaluates personal aspects", ctx.product_type));
    both(processes_personal_data(ctx), profiler)
}

fn training_personal_data(ctx: &ProductContext) -> Option<String> {
    ctx.training_data
        .as_ref()
        .filter(|t| t.uses_personal_data)
        .map(|_| "model is trained on personal data".to_string())
}

fn transfer(ctx: &ProductContext) -> Option<String> {
    processes_personal_data(ctx)?;
    let destinations = other_markets(ctx, ADEQUATE_OR_EEA);
    (!destinations.is_empty())
        .then(|| format!("personal data may flow to {}", destinations.join(", ")))
}

// ── Ladder ──────────────────────────────────────────────────────────────

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: SPECIAL_CATEGORY,
        description: "Processing of special categories of personal data",
        provisions: &["GDPR Art. 9", "GDPR Art. 35(3)(b)"],
        predicate: processes_special_category_data,
    },
    TriggerRule {
        id: AUTOMATED_DECISION,
        description: "Solely automated decision with legal or similarly significant effects",
        provisions: &["GDPR Art. 22", "GDPR Art. 35(3)(a)"],
        predicate: automated_decision,
    },
    TriggerRule {
        id: SYSTEMATIC_MONITORING,
        description: "Systematic monitoring of individuals",
        provisions: &["GDPR Art. 35(1)", "GDPR Art. 35(3)(c)"],
        predicate: systematic_monitoring,
    },
    TriggerRule {
        id: CHILDREN,
        description: "Processing of children's personal data",
        provisions: &["GDPR Art. 8", "GDPR Recital 38"],
        predicate: involves_minors,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: PERSONAL_DATA,
        description: "Processing of personal data",
        provisions: &["GDPR Art. 6", "GDPR Arts. 13-14"],
        predicate: processes_personal_data,
    },
    TriggerRule {
        id: PROFILING,
        description: "Profiling of data subjects",
        provisions: &["GDPR Art. 4(4)", "GDPR Art. 21"],
        predicate: profiling,
    },
];

static LADDER: RiskLadder = RiskLadder {
    regime: "GDPR",
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
    minimal_justification: "no personal data is processed",
};

const OBLIGATIONS: &[TriggerRule] = &[
    TriggerRule {
        id: TRAINING_PERSONAL_DATA,
        description: "AI model trained on personal data",
        provisions: &["EDPB Opinion 28/2024"],
        predicate: training_personal_data,
    },
    TriggerRule {
        id: TRANSFER,
        description: "Transfer of personal data to a third country",
        provisions: &["GDPR Arts. 44-49"],
        predicate: transfer,
    },
];

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "GDPR Art. 3",
        title: "Territorial scope",
        summary: "Applies to processing of personal data of individuals in the Union, including by controllers established outside it.",
        when: &[],
    },
    ProvisionEntry {
        citation: "GDPR Arts. 5-6",
        title: "Principles and lawfulness of processing",
        summary: "Processing needs a lawful basis and must respect purpose limitation, minimisation and accuracy.",
        when: PERSONAL_IDS,
    },
    ProvisionEntry {
        citation: "GDPR Art. 9",
        title: "Special categories of personal data",
        summary: "Processing of health, biometric, genetic and similar data is prohibited unless an Art. 9(2) condition applies.",
        when: &[SPECIAL_CATEGORY],
    },
    ProvisionEntry {
        citation: "GDPR Arts. 13-15",
        title: "Transparency and access",
        summary: "Data subjects must be told about processing, including meaningful information about the logic of automated decisions.",
        when: PERSONAL_IDS,
    },
    ProvisionEntry {
        citation: "GDPR Art. 22",
        title: "Automated individual decision-making",
        summary: "Data subjects may not be subject to solely automated decisions with significant effects without safeguards including human intervention.",
        when: &[AUTOMATED_DECISION],
    },
    ProvisionEntry {
        citation: "GDPR Art. 25",
        title: "Data protection by design and by default",
        summary: "Build data protection into the design of processing systems.",
        when: PERSONAL_IDS,
    },
    ProvisionEntry {
        citation: "GDPR Art. 35",
        title: "Data protection impact assessment",
        summary: "Processing likely to result in a high risk requires a DPIA before it starts.",
        when: HIGH_RISK_IDS,
    },
    ProvisionEntry {
        citation: "GDPR Arts. 44-49",
        title: "Transfers to third countries",
        summary: "Transfers outside the EEA need an adequacy decision or appropriate safeguards such as standard contractual clauses.",
        when: &[TRANSFER],
    },
    ProvisionEntry {
        citation: "EDPB Opinion 28/2024",
        title: "Personal data in AI models",
        summary: "Controllers relying on legitimate interest for model training must pass the three-step test and assess whether the model is anonymous.",
        when: &[TRAINING_PERSONAL_DATA],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: artifacts::PRIVACY_NOTICE,
        artifact_type: ArtifactType::PrivacyNotice,
        name: "Privacy notice (Arts. 13-14)",
        required: true,
        template: Some(templates::PRIVACY_NOTICE),
        when: PERSONAL_IDS,
    },
    ArtifactEntry {
        id: "eu-gdpr-ropa",
        artifact_type: ArtifactType::RecordOfProcessing,
        name: "Record of processing activities (Art. 30)",
        required: true,
        template: None,
        when: PERSONAL_IDS,
    },
    ArtifactEntry {
        id: artifacts::DPIA,
        artifact_type: ArtifactType::DataProtectionAssessment,
        name: "Data protection impact assessment (Art. 35)",
        required: true,
        template: Some(templates::DPIA),
        when: HIGH_RISK_IDS,
    },
    ArtifactEntry {
        id: "eu-gdpr-consent-record",
        artifact_type: ArtifactType::ConsentRecord,
        name: "Record of explicit or parental consent (Arts. 7-9)",
        required: true,
        template: None,
        when: &[SPECIAL_CATEGORY, CHILDREN],
    },
    ArtifactEntry {
        id: "eu-gdpr-transfer-impact-assessment",
        artifact_type: ArtifactType::DataProtectionAssessment,
        name: "Transfer impact assessment (Art. 46)",
        required: true,
        template: None,
        when: &[TRANSFER],
    },
    ArtifactEntry {
        id: "eu-gdpr-legitimate-interest-assessment",
        artifact_type: ArtifactType::RiskAssessment,
        name: "Legitimate interest assessment for model training",
        required: false,
        template: None,
        when: &[TRAINING_PERSONAL_DATA],
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: "eu-gdpr-lawful-basis",
        title: "Document a lawful basis for each processing purpose",
        description: "Identify and record the Art. 6 basis for every purpose, with an Art. 9 condition where special categories are involved.",
        legal_basis: "GDPR Arts. 6, 9",
        priority: Priority::Critical,
        effort: Some("1-2 weeks"),
        deadline: Some("before processing begins"),
        when: PERSONAL_IDS,
    },
    ActionEntry {
        id: actions::DPIA,
        title: "Conduct a data protection impact assessment",
        description: "Assess necessity, proportionality and risks to data subjects, and consult the supervisory authority if high residual risk remains.",
        legal_basis: "GDPR Arts. 35-36",
        priority: Priority::Critical,
        effort: Some("2-6 weeks"),
        deadline: Some("before processing begins"),
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: actions::AUTOMATED_DECISION_REVIEW,
        title: "Provide human review of automated decisions",
        description: "Offer the right to obtain human intervention, to express a point of view and to contest the decision.",
        legal_basis: "GDPR Art. 22(3)",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[AUTOMATED_DECISION],
    },
    ActionEntry {
        id: actions::PRIVACY_NOTICE,
        title: "Publish a privacy notice",
        description: "Explain purposes, legal bases, recipients, retention and data subject rights in clear language.",
        legal_basis: "GDPR Arts. 12-14",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: PERSONAL_IDS,
    },
    ActionEntry {
        id: actions::DATA_SUBJECT_RIGHTS,
        title: "Operate a data subject rights process",
        description: "Handle access, rectification, erasure, restriction, portability and objection requests within one month.",
        legal_basis: "GDPR Arts. 15-21",
        priority: Priority::Important,
        effort: Some("2-3 weeks"),
        deadline: None,
        when: PERSONAL_IDS,
    },
    ActionEntry {
        id: "eu-gdpr-age-verification",
        title: "Obtain parental consent for children",
        description: "Verify age and obtain consent from the holder of parental responsibility for information society services offered to children.",
        legal_basis: "GDPR Art. 8",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[CHILDREN],
    },
    ActionEntry {
        id: "eu-gdpr-dpo",
        title: "Appoint a data protection officer",
        description: "Large-scale processing of special categories or systematic monitoring requires a DPO.",
        legal_basis: "GDPR Art. 37",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[SPECIAL_CATEGORY, SYSTEMATIC_MONITORING],
    },
    ActionEntry {
        id: actions::CROSS_BORDER_TRANSFER,
        title: "Put a transfer mechanism in place",
        description: "Use standard contractual clauses or another Chapter V mechanism, backed by a transfer impact assessment.",
        legal_basis: "GDPR Arts. 44-49",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: Some("before the first transfer"),
        when: &[TRANSFER],
    },
    ActionEntry {
        id: "eu-gdpr-training-data-assessment",
        title: "Assess the legal basis for training on personal data",
        description: "Run the legitimate interest three-step test and document whether the trained model can be considered anonymous.",
        legal_basis: "EDPB Opinion 28/2024",
        priority: Priority::Important,
        effort: Some("1-3 weeks"),
        deadline: None,
        when: &[TRAINING_PERSONAL_DATA],
    },
    ActionEntry {
        id: "eu-gdpr-privacy-by-design",
        title: "Apply data protection by design",
        description: "Minimise collected fields, pseudonymise where possible and set privacy-protective defaults.",
        legal_basis: "GDPR Art. 25",
        priority: Priority::Recommended,
        effort: Some("ongoing"),
        deadline: None,
        when: PERSONAL_IDS,
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct EuGdpr;

impl JurisdictionModule for EuGdpr {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::EuGdpr
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
        ComplianceTimeline::new(ymd(2018, 5, 25))
            .milestone(
                (2016, 5, 24),
                "Entry into force",
                "Regulation (EU) 2016/679 enters into force.",
            )
            .milestone(
                (2018, 5, 25),
                "Application",
                "GDPR applies in all Member States.",
            )
            .milestone(
                (2024, 12, 17),
                "EDPB Opinion 28/2024",
                "EDPB opinion on personal data in the development and deployment of AI models.",
            )
            .note("The Digital Omnibus proposal of November 2025 would amend GDPR provisions on AI training and personal data definitions; it is not yet adopted.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regimes::fixtures::{action_ids, artifact_ids, ctx};
    use regscope_core::{AutomationLevel, JurisdictionId, TrainingDataContext};

    fn gdpr(description: &str, product_type: ProductType) -> ProductContext {
        ctx(description, product_type, "eu-gdpr")
    }

    #[test]
    fn no_personal_data_is_minimal_and_owes_nothing() {
        let c = gdpr("Warehouse demand forecasting", ProductType::Predictor)
            .with_data([DataCategory::Aggregated]);
        let classification = EuGdpr.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::Minimal);
        assert_eq!(classification.justification, "GDPR: no personal data is processed");
        assert!(EuGdpr.required_artifacts(&c).is_empty());
        assert!(EuGdpr.required_actions(&c).is_empty());
        assert_eq!(EuGdpr.applicable_provisions(&c).len(), 1);
    }

    #[test]
    fn personal_data_is_limited() {
        let c = gdpr("Newsletter personalisation", ProductType::Other)
            .with_data([DataCategory::Personal]);
        let classification = EuGdpr.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::Limited);
        assert_eq!(classification.applicable_categories, vec![PERSONAL_DATA]);
        let binding = EuGdpr.required_artifacts(&c);
        let artifacts = artifact_ids(&binding);
        assert_eq!(artifacts, vec![artifacts::PRIVACY_NOTICE, "eu-gdpr-ropa"]);
    }

    #[test]
    fn health_data_requires_dpia() {
        let c = gdpr("Symptom triage", ProductType::Classifier)
            .with_data([DataCategory::Health, DataCategory::Personal]);
        let classification = EuGdpr.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::High);
        assert_eq!(classification.applicable_categories, vec![SPECIAL_CATEGORY]);
        assert!(artifact_ids(&EuGdpr.required_artifacts(&c)).contains(&artifacts::DPIA));
        let actions = EuGdpr.required_actions(&c);
        assert!(action_ids(&actions).contains(&actions::DPIA));
        assert!(action_ids(&actions).contains(&"eu-gdpr-dpo"));
    }

    #[test]
    fn solely_automated_credit_decision_triggers_article_22() {
        let c = gdpr("Instant loan approval", ProductType::Predictor)
            .with_data([DataCategory::Personal, DataCategory::Financial])
            .with_decision_impact(DecisionImpact::Determinative)
            .with_automation(AutomationLevel::FullyAutomated);
        let classification = EuGdpr.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::High);
        assert!(classification
            .provisions
            .contains(&"GDPR Art. 22".to_string()));
        let review = EuGdpr
            .required_actions(&c)
            .into_iter()
            .find(|a| a.id == actions::AUTOMATED_DECISION_REVIEW)
            .unwrap();
        assert_eq!(review.priority, Priority::Critical);
    }

    #[test]
    fn transfer_to_non_adequate_market_needs_mechanism() {
        let mut c = gdpr("Support ticket routing", ProductType::Classifier)
            .with_data([DataCategory::Personal]);
        c.target_markets.push(JurisdictionId::new("uk").unwrap());
        assert!(!action_ids(&EuGdpr.required_actions(&c)).contains(&actions::CROSS_BORDER_TRANSFER));

        c.target_markets.push(JurisdictionId::new("china").unwrap());
        let triggers = EuGdpr.evaluate_triggers(&c);
        let transfer = triggers.iter().find(|t| t.id == TRANSFER).unwrap();
        assert!(transfer.satisfied);
        assert_eq!(transfer.evidence, "personal data may flow to china");
        assert!(action_ids(&EuGdpr.required_actions(&c)).contains(&actions::CROSS_BORDER_TRANSFER));
    }

    #[test]
    fn training_on_personal_data_raises_obligations_while_minimal() {
        let c = gdpr("Internal code assistant", ProductType::Generator).with_training_data(
            TrainingDataContext {
                uses_personal_data: true,
                ..Default::default()
            },
        );
        assert_eq!(EuGdpr.risk_level(&c).level, RiskLevel::Minimal);
        assert_eq!(
            action_ids(&EuGdpr.required_actions(&c)),
            vec!["eu-gdpr-training-data-assessment"]
        );
        let artifacts = EuGdpr.required_artifacts(&c);
        assert_eq!(artifacts.len(), 1);
        assert!(!artifacts[0].required);
    }

    #[test]
    fn recommender_over_personal_data_is_profiling() {
        let c = gdpr("Product recommendations", ProductType::Recommender)
            .with_data([DataCategory::Personal]);
        let classification = EuGdpr.risk_level(&c);
        assert_eq!(classification.applicable_categories, vec![PERSONAL_DATA, PROFILING]);
    }

    #[test]
    fn timeline_effective_date() {
        let c = gdpr("x", ProductType::Other);
        let t = EuGdpr.timeline(&c);
        assert_eq!(t.effective_date, ymd(2018, 5, 25));
        assert_eq!(t.milestones.first().map(|m| m.label.as_str()), Some("Entry into force"));
    }
}
