//! Colorado.
//!
//! The Colorado AI Act (SB 24-205, C.R.S. 6-1-1701 et seq.) regulates
//! high-risk AI systems: systems that make, or are a substantial factor in
//! making, a consequential decision in one of eight domains. Its effective
//! date was moved to 2026-06-30 by SB 25B-004.
//!
//! SB 21-169 separately governs insurers' use of external consumer data and
//! algorithms, and the Colorado Privacy Act governs profiling.

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const CONSEQUENTIAL_DECISION: &str = "us-co.consequential-decision";
const INSURANCE: &str = "us-co.insurance-algorithms";
const CONSUMER_INTERACTION: &str = "us-co.consumer-interaction";
const PROFILING: &str = "us-co.cpa-profiling";

const HIGH_RISK_IDS: &[&str] = &[CONSEQUENTIAL_DECISION, INSURANCE];

// ── Predicates ──────────────────────────────────────────────────────────

fn consequential_decision(ctx: &ProductContext) -> Option<String> {
    let domain = serves_any(
        ctx,
        &[
            UserPopulation::JobApplicants,
            UserPopulation::Employees,
            UserPopulation::CreditApplicants,
            UserPopulation::Tenants,
            UserPopulation::Students,
            UserPopulation::Patients,
            UserPopulation::InsuranceApplicants,
            UserPopulation::BenefitRecipients,
        ],
    )
    .or_else(|| {
        in_sector(
            ctx,
            &[
                Sector::FinancialServices,
                Sector::Employment,
                Sector::Education,
                Sector::Healthcare,
                Sector::Housing,
                Sector::Insurance,
                Sector::Legal,
                Sector::Government,
            ],
        )
    });
    both(domain, consequential(ctx))
}

fn insurance(ctx: &ProductContext) -> Option<String> {
    let insurer = offers_financial_service(ctx, &[FinancialService::InsurancePricing])
        .or_else(|| in_sector(ctx, &[Sector::Insurance]));
    both(insurer, consequential(ctx))
}

fn profiling(ctx: &ProductContext) -> Option<String> {
    both(processes_personal_data(ctx), consequential_decision(ctx))
}

// ── Ladder ──────────────────────────────────────────────────────────────

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: CONSEQUENTIAL_DECISION,
        description: "Substantial factor in a consequential decision",
        provisions: &["C.R.S. 6-1-1701(9)", "C.R.S. 6-1-1703"],
        predicate: consequential_decision,
    },
    TriggerRule {
        id: INSURANCE,
        description: "Insurance practices using algorithms or external consumer data",
        provisions: &["C.R.S. 10-3-1104.9", "3 CCR 702-10"],
        predicate: insurance,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[TriggerRule {
    id: CONSUMER_INTERACTION,
    description: "AI system intended to interact with consumers",
    provisions: &["C.R.S. 6-1-1704"],
    predicate: consumer_facing,
}];

static LADDER: RiskLadder = RiskLadder {
    regime: "Colorado",
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
    minimal_justification: "not a substantial factor in a consequential decision and not consumer-facing",
};

const OBLIGATIONS: &[TriggerRule] = &[TriggerRule {
    id: PROFILING,
    description: "Profiling in furtherance of decisions with legal or similarly significant effects",
    provisions: &["C.R.S. 6-1-1306(1)(a)(I)(C)", "C.R.S. 6-1-1309"],
    predicate: profiling,
}];

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "C.R.S. 6-1-1702",
        title: "Developer duties",
        summary: "Developers of high-risk AI systems must use reasonable care against algorithmic discrimination and document known risks for deployers.",
        when: &[CONSEQUENTIAL_DECISION],
    },
    ProvisionEntry {
        citation: "C.R.S. 6-1-1703",
        title: "Deployer duties",
        summary: "Deployers must run a risk management program, complete impact assessments, notify consumers and offer correction and appeal.",
        when: &[CONSEQUENTIAL_DECISION],
    },
    ProvisionEntry {
        citation: "C.R.S. 6-1-1704",
        title: "Disclosure of AI interaction",
        summary: "Consumers must be told they are interacting with an AI system unless it would be obvious.",
        when: &[CONSUMER_INTERACTION, CONSEQUENTIAL_DECISION],
    },
    ProvisionEntry {
        citation: "C.R.S. 10-3-1104.9",
        title: "Insurers' use of external consumer data",
        summary: "Insurers must test algorithms and predictive models for unfair discrimination and maintain a governance framework.",
        when: &[INSURANCE],
    },
    ProvisionEntry {
        citation: "Colorado Privacy Act",
        title: "Profiling opt-out and data protection assessments",
        summary: "Consumers may opt out of profiling for significant decisions; such profiling requires a data protection assessment.",
        when: &[PROFILING],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: artifacts::IMPACT_ASSESSMENT,
        artifact_type: ArtifactType::ImpactAssessment,
        name: "High-risk AI impact assessment",
        required: true,
        template: Some(templates::IMPACT_ASSESSMENT),
        when: &[CONSEQUENTIAL_DECISION],
    },
    ArtifactEntry {
        id: "us-co-risk-management-policy",
        artifact_type: ArtifactType::RiskAssessment,
        name: "Risk management policy and program",
        required: true,
        template: None,
        when: &[CONSEQUENTIAL_DECISION],
    },
    ArtifactEntry {
        id: "us-co-consumer-notice",
        artifact_type: ArtifactType::TransparencyNotice,
        name: "Pre-decision consumer notice",
        required: true,
        template: Some(templates::TRANSPARENCY_NOTICE),
        when: &[CONSEQUENTIAL_DECISION],
    },
    ArtifactEntry {
        id: "us-co-public-statement",
        artifact_type: ArtifactType::TransparencyNotice,
        name: "Public statement of high-risk systems deployed",
        required: true,
        template: None,
        when: &[CONSEQUENTIAL_DECISION],
    },
    ArtifactEntry {
        id: "us-co-insurance-governance",
        artifact_type: ArtifactType::RiskAssessment,
        name: "Algorithm and predictive model governance framework",
        required: true,
        template: None,
        when: &[INSURANCE],
    },
    ArtifactEntry {
        id: artifacts::DPIA,
        artifact_type: ArtifactType::DataProtectionAssessment,
        name: "Data protection assessment for profiling",
        required: true,
        template: Some(templates::DPIA),
        when: &[PROFILING],
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: actions::RISK_MANAGEMENT,
        title: "Implement a risk management program",
        description: "Adopt a policy and program to identify and mitigate algorithmic discrimination, aligned to a recognised framework.",
        legal_basis: "C.R.S. 6-1-1703(2)",
        priority: Priority::Critical,
        effort: Some("4-8 weeks"),
        deadline: Some("2026-06-30"),
        when: &[CONSEQUENTIAL_DECISION],
    },
    ActionEntry {
        id: actions::IMPACT_ASSESSMENT,
        title: "Complete an impact assessment",
        description: "Complete an impact assessment before deployment, annually, and within 90 days of any intentional and substantial modification.",
        legal_basis: "C.R.S. 6-1-1703(3)",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: Some("2026-06-30"),
        when: &[CONSEQUENTIAL_DECISION],
    },
    ActionEntry {
        id: "us-co-adverse-decision-rights",
        title: "Explain adverse decisions and offer appeal",
        description: "Give the principal reasons for an adverse decision, an opportunity to correct data and an appeal with human review where feasible.",
        legal_basis: "C.R.S. 6-1-1703(4)",
        priority: Priority::Critical,
        effort: Some("3-5 weeks"),
        deadline: Some("2026-06-30"),
        when: &[CONSEQUENTIAL_DECISION],
    },
    ActionEntry {
        id: actions::BIAS_TESTING,
        title: "Test for algorithmic discrimination",
        description: "Evaluate outcomes for differential treatment or impact on protected classes.",
        legal_basis: "C.R.S. 6-1-1702, 6-1-1703",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: HIGH_RISK_IDS,
    },
    ActionEntry {
        id: "us-co-attorney-general-notice",
        title: "Notify the Attorney General of discovered discrimination",
        description: "Disclose discovered algorithmic discrimination to the Attorney General within 90 days.",
        legal_basis: "C.R.S. 6-1-1703(7)",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: &[CONSEQUENTIAL_DECISION],
    },
    ActionEntry {
        id: actions::AI_DISCLOSURE,
        title: "Disclose AI interaction to consumers",
        description: "Tell consumers they are interacting with an AI system.",
        legal_basis: "C.R.S. 6-1-1704",
        priority: Priority::Important,
        effort: Some("1-3 days"),
        deadline: Some("2026-06-30"),
        when: &[CONSUMER_INTERACTION, CONSEQUENTIAL_DECISION],
    },
    ActionEntry {
        id: "us-co-insurance-testing",
        title: "Test insurance models for unfair discrimination",
        description: "Run quantitative testing of external consumer data and models and report to the Division of Insurance.",
        legal_basis: "C.R.S. 10-3-1104.9; 3 CCR 702-10",
        priority: Priority::Important,
        effort: Some("4-6 weeks"),
        deadline: None,
        when: &[INSURANCE],
    },
    ActionEntry {
        id: "us-co-profiling-opt-out",
        title: "Honour profiling opt-outs",
        description: "Let consumers opt out of profiling in furtherance of decisions with significant effects.",
        legal_basis: "C.R.S. 6-1-1306",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[PROFILING],
    },
    ActionEntry {
        id: actions::AI_RMF_ALIGNMENT,
        title: "Align with the NIST AI RMF or ISO/IEC 42001",
        description: "Compliance with a recognised framework supports the statutory affirmative defence.",
        legal_basis: "C.R.S. 6-1-1706(3)",
        priority: Priority::Recommended,
        effort: Some("4-8 weeks"),
        deadline: None,
        when: &[CONSEQUENTIAL_DECISION],
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct Colorado;

impl JurisdictionModule for Colorado {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::UsCo
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
        ComplianceTimeline::new(ymd(2026, 6, 30))
            .milestone(
                (2023, 7, 1),
                "Colorado Privacy Act",
                "CPA takes effect, including the profiling opt-out.",
            )
            .milestone(
                (2023, 11, 14),
                "Life insurance governance regulation",
                "3 CCR 702-10 governance and risk management requirements take effect.",
            )
            .milestone(
                (2024, 5, 17),
                "SB 24-205 signed",
                "Colorado AI Act signed into law.",
            )
            .milestone(
                (2026, 6, 30),
                "Colorado AI Act effective",
                "Developer and deployer duties for high-risk AI systems apply.",
            )
            .note("SB 25B-004 moved the effective date from 2026-02-01; further amendments have been proposed.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regimes::fixtures::{action_ids, artifact_ids, ctx};
    use regscope_core::{FinancialServicesContext, SectorContext};

    fn co(description: &str, product_type: ProductType) -> ProductContext {
        ctx(description, product_type, "us-co")
    }

    #[test]
    fn material_hiring_tool_is_high() {
        let c = co("Interview scoring", ProductType::Classifier)
            .with_populations([UserPopulation::JobApplicants])
            .with_decision_impact(DecisionImpact::Material);
        let classification = Colorado.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::High);
        assert_eq!(classification.applicable_categories, vec![CONSEQUENTIAL_DECISION]);
        let binding = Colorado.required_artifacts(&c);
        let artifacts = artifact_ids(&binding);
        assert_eq!(artifacts[0], artifacts::IMPACT_ASSESSMENT);
        let actions = Colorado.required_actions(&c);
        assert!(action_ids(&actions).contains(&actions::AI_DISCLOSURE));
        assert!(actions.iter().any(|a| a.priority == Priority::Recommended));
    }

    #[test]
    fn advisory_use_is_only_limited_when_consumer_facing() {
        let c = co("Interview tips", ProductType::Other)
            .with_populations([UserPopulation::JobApplicants]);
        assert_eq!(Colorado.risk_level(&c).level, RiskLevel::Minimal);
        let c = c.with_populations([UserPopulation::Consumers]);
        assert_eq!(Colorado.risk_level(&c).level, RiskLevel::Limited);
        assert_eq!(
            action_ids(&Colorado.required_actions(&c)),
            vec![actions::AI_DISCLOSURE]
        );
    }

    #[test]
    fn insurance_pricing_fires_both_high_rules() {
        let c = co("Auto insurance pricing", ProductType::Predictor)
            .with_decision_impact(DecisionImpact::Determinative)
            .with_sector(SectorContext::new(Sector::Insurance).with_financial_services(
                FinancialServicesContext {
                    services: [FinancialService::InsurancePricing].into_iter().collect(),
                    uses_credit_scoring: false,
                },
            ));
        let classification = Colorado.risk_level(&c);
        assert_eq!(
            classification.applicable_categories,
            vec![CONSEQUENTIAL_DECISION, INSURANCE]
        );
        assert!(action_ids(&Colorado.required_actions(&c)).contains(&"us-co-insurance-testing"));
    }

    #[test]
    fn profiling_with_personal_data_needs_dpa() {
        let c = co("Loan pre-approval", ProductType::Predictor)
            .with_data([DataCategory::Personal])
            .with_populations([UserPopulation::CreditApplicants])
            .with_decision_impact(DecisionImpact::Material);
        assert!(artifact_ids(&Colorado.required_artifacts(&c)).contains(&artifacts::DPIA));
    }

    #[test]
    fn effective_date_reflects_delay() {
        let t = Colorado.timeline(&co("x", ProductType::Other));
        assert_eq!(t.effective_date, ymd(2026, 6, 30));
        assert_eq!(t.notes.len(), 1);
    }
}
