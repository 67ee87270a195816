//! New York (state and New York City).
//!
//! - NYC Local Law 144 of 2021: automated employment decision tools
//! - DFS Insurance Circular Letter No. 7 (2024): AI in underwriting and pricing
//! - RAISE Act: frontier model safety
//! - General Business Law Article 47: AI companion models
//! - Algorithmic Pricing Disclosure Act

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const AEDT: &str = "us-ny.automated-employment-decision-tool";
const INSURANCE: &str = "us-ny.insurance-underwriting";
const FRONTIER: &str = "us-ny.frontier-model";
const ALGORITHMIC_PRICING: &str = "us-ny.personalized-algorithmic-pricing";
const COMPANION: &str = "us-ny.ai-companion";

// ── Predicates ──────────────────────────────────────────────────────────

fn insurance(ctx: &ProductContext) -> Option<String> {
    let insurer = offers_financial_service(ctx, &[FinancialService::InsurancePricing])
        .or_else(|| in_sector(ctx, &[Sector::Insurance]))
        .or_else(|| serves_any(ctx, &[UserPopulation::InsuranceApplicants]));
    both(insurer, consequential(ctx))
}

fn frontier(ctx: &ProductContext) -> Option<String> {
    training_compute_at_least(ctx, US_FRONTIER_MODEL_FLOPS)
}

fn algorithmic_pricing(ctx: &ProductContext) -> Option<String> {
    both(
        mentions(
            ctx,
            &[
                "personalized pricing",
                "personalised pricing",
                "surveillance pricing",
                "individualized pricing",
            ],
        ),
        processes_personal_data(ctx),
    )
}

fn companion(ctx: &ProductContext) -> Option<String> {
    mentions(
        ctx,
        &["companion", "companionship", "ai friend", "emotional support"],
    )
}

// ── Ladder ──────────────────────────────────────────────────────────────

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: AEDT,
        description: "Automated employment decision tool used for NYC candidates or employees",
        provisions: &["NYC Admin. Code 20-870 et seq.", "6 RCNY 5-300"],
        predicate: employment_decisions,
    },
    TriggerRule {
        id: INSURANCE,
        description: "AI or external data used in insurance underwriting or pricing",
        provisions: &["DFS Insurance Circular Letter No. 7 (2024)"],
        predicate: insurance,
    },
    TriggerRule {
        id: FRONTIER,
        description: "Frontier model trained above 10^26 operations",
        provisions: &["N.Y. Gen. Bus. Law Art. 44-B (RAISE Act)"],
        predicate: frontier,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: ALGORITHMIC_PRICING,
        description: "Prices set by an algorithm using consumer personal data",
        provisions: &["N.Y. Gen. Bus. Law 349-a"],
        predicate: algorithmic_pricing,
    },
    TriggerRule {
        id: COMPANION,
        description: "AI companion model",
        provisions: &["N.Y. Gen. Bus. Law Art. 47"],
        predicate: companion,
    },
];

static LADDER: RiskLadder = RiskLadder {
    regime: "New York",
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
    minimal_justification: "no employment, insurance, frontier, pricing or companion trigger applies",
};

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "NYC Local Law 144",
        title: "Automated employment decision tools",
        summary: "An AEDT may only be used after an independent bias audit within the past year, with a published summary and candidate notice.",
        when: &[AEDT],
    },
    ProvisionEntry {
        citation: "DFS Circular Letter No. 7 (2024)",
        title: "AI systems and external data in insurance",
        summary: "Insurers must show AI and external data are not unfairly discriminatory and maintain board-level governance and vendor oversight.",
        when: &[INSURANCE],
    },
    ProvisionEntry {
        citation: "RAISE Act",
        title: "Responsible AI Safety and Education Act",
        summary: "Large frontier developers publish safety protocols and report safety incidents.",
        when: &[FRONTIER],
    },
    ProvisionEntry {
        citation: "Algorithmic Pricing Disclosure Act",
        title: "Personalized algorithmic pricing",
        summary: "Prices set by an algorithm using personal data carry a clear and conspicuous disclosure.",
        when: &[ALGORITHMIC_PRICING],
    },
    ProvisionEntry {
        citation: "N.Y. Gen. Bus. Law Art. 47",
        title: "AI companion models",
        summary: "Operators detect and respond to suicidal ideation and remind users at least every three hours that they are not talking to a human.",
        when: &[COMPANION],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: artifacts::BIAS_AUDIT,
        artifact_type: ArtifactType::BiasAudit,
        name: "Independent AEDT bias audit",
        required: true,
        template: Some(templates::BIAS_AUDIT),
        when: &[AEDT],
    },
    ArtifactEntry {
        id: "us-ny-aedt-candidate-notice",
        artifact_type: ArtifactType::TransparencyNotice,
        name: "AEDT candidate and employee notice",
        required: true,
        template: Some(templates::TRANSPARENCY_NOTICE),
        when: &[AEDT],
    },
    ArtifactEntry {
        id: "us-ny-dfs-ai-governance",
        artifact_type: ArtifactType::RiskAssessment,
        name: "Insurance AI governance and risk management framework",
        required: true,
        template: Some(templates::RISK_ASSESSMENT),
        when: &[INSURANCE],
    },
    ArtifactEntry {
        id: "us-ny-frontier-safety-protocol",
        artifact_type: ArtifactType::RiskAssessment,
        name: "Frontier model safety and security protocol",
        required: true,
        template: None,
        when: &[FRONTIER],
    },
    ArtifactEntry {
        id: "us-ny-pricing-disclosure",
        artifact_type: ArtifactType::TransparencyNotice,
        name: "Algorithmic pricing disclosure",
        required: true,
        template: None,
        when: &[ALGORITHMIC_PRICING],
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: "us-ny-aedt-bias-audit",
        title: "Commission an independent bias audit",
        description: "Have an independent auditor compute selection rates and impact ratios by sex and race/ethnicity no more than one year before use.",
        legal_basis: "NYC Admin. Code 20-871(a)(1)",
        priority: Priority::Critical,
        effort: Some("4-8 weeks"),
        deadline: Some("before use, then annually"),
        when: &[AEDT],
    },
    ActionEntry {
        id: "us-ny-aedt-publish-results",
        title: "Publish the bias audit summary",
        description: "Post the audit date, results and the tool's distribution date on the employment section of the website.",
        legal_basis: "NYC Admin. Code 20-871(a)(2)",
        priority: Priority::Important,
        effort: Some("1-3 days"),
        deadline: None,
        when: &[AEDT],
    },
    ActionEntry {
        id: "us-ny-aedt-notice",
        title: "Notify candidates ten business days before use",
        description: "Tell candidates an AEDT will be used, the qualifications it assesses and how to request an alternative process.",
        legal_basis: "NYC Admin. Code 20-871(b)",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: &[AEDT],
    },
    ActionEntry {
        id: actions::BIAS_TESTING,
        title: "Test underwriting models for unfair discrimination",
        description: "Run quantitative and qualitative testing for disproportionate adverse effects before and during use.",
        legal_basis: "DFS Circular Letter No. 7, Section III",
        priority: Priority::Important,
        effort: Some("3-6 weeks"),
        deadline: None,
        when: &[INSURANCE],
    },
    ActionEntry {
        id: "us-ny-dfs-governance",
        title: "Establish board-level AI governance",
        description: "Document AI governance, risk management and third-party vendor oversight for underwriting and pricing.",
        legal_basis: "DFS Circular Letter No. 7, Section IV",
        priority: Priority::Important,
        effort: Some("4-8 weeks"),
        deadline: None,
        when: &[INSURANCE],
    },
    ActionEntry {
        id: "us-ny-frontier-safety-protocol",
        title: "Publish a safety and security protocol",
        description: "Write, publish and review annually a protocol addressing critical harm before deploying a frontier model.",
        legal_basis: "RAISE Act",
        priority: Priority::Critical,
        effort: Some("6-12 weeks"),
        deadline: Some("2027-01-01"),
        when: &[FRONTIER],
    },
    ActionEntry {
        id: actions::INCIDENT_RESPONSE,
        title: "Report safety incidents within 72 hours",
        description: "Report qualifying safety incidents to the state within 72 hours of learning of them.",
        legal_basis: "RAISE Act",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: Some("2027-01-01"),
        when: &[FRONTIER],
    },
    ActionEntry {
        id: "us-ny-pricing-disclosure",
        title: "Display the algorithmic pricing disclosure",
        description: "Show \"This price was set by an algorithm using your personal data\" next to personalised prices.",
        legal_basis: "N.Y. Gen. Bus. Law 349-a",
        priority: Priority::Important,
        effort: Some("1-3 days"),
        deadline: None,
        when: &[ALGORITHMIC_PRICING],
    },
    ActionEntry {
        id: "us-ny-companion-safeguards",
        title: "Implement companion crisis protocols",
        description: "Detect expressions of suicidal ideation or self-harm and refer users to crisis services.",
        legal_basis: "N.Y. Gen. Bus. Law Art. 47",
        priority: Priority::Critical,
        effort: Some("3-6 weeks"),
        deadline: None,
        when: &[COMPANION],
    },
    ActionEntry {
        id: actions::AI_DISCLOSURE,
        title: "Remind users they are talking to AI",
        description: "Disclose AI status at the start of an interaction and at least every three hours.",
        legal_basis: "N.Y. Gen. Bus. Law Art. 47",
        priority: Priority::Important,
        effort: Some("1-3 days"),
        deadline: None,
        when: &[COMPANION],
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct NewYork;

impl JurisdictionModule for NewYork {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::UsNy
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
                (2023, 7, 5),
                "Local Law 144 enforcement",
                "NYC begins enforcing the AEDT bias audit and notice requirements.",
            )
            .milestone(
                (2024, 7, 11),
                "DFS Circular Letter No. 7",
                "DFS issues guidance on AI systems and external data in insurance.",
            )
            .milestone(
                (2025, 11, 5),
                "AI companion law effective",
                "Safeguard and disclosure duties for AI companion operators take effect.",
            )
            .milestone(
                (2025, 11, 10),
                "Algorithmic pricing disclosure",
                "Personalised algorithmic pricing disclosures are required.",
            )
            .milestone(
                (2027, 1, 1),
                "RAISE Act effective",
                "Frontier developer safety protocol and incident reporting duties apply.",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regimes::fixtures::{action_ids, artifact_ids, ctx};
    use regscope_core::GpaiInfo;

    fn ny(description: &str, product_type: ProductType) -> ProductContext {
        ctx(description, product_type, "us-ny")
    }

    #[test]
    fn resume_screener_needs_bias_audit() {
        let c = ny("Resume screening", ProductType::Ranker)
            .with_populations([UserPopulation::JobApplicants])
            .with_decision_impact(DecisionImpact::Material);
        let classification = NewYork.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::High);
        assert_eq!(classification.applicable_categories, vec![AEDT]);
        assert_eq!(
            artifact_ids(&NewYork.required_artifacts(&c)),
            vec![artifacts::BIAS_AUDIT, "us-ny-aedt-candidate-notice"]
        );
        let actions = NewYork.required_actions(&c);
        assert_eq!(actions[0].id, "us-ny-aedt-bias-audit");
        assert_eq!(actions[0].priority, Priority::Critical);
    }

    #[test]
    fn personalised_pricing_is_limited() {
        let c = ny("Personalized pricing engine for a grocery app", ProductType::Predictor)
            .with_data([DataCategory::Personal, DataCategory::Behavioral]);
        assert_eq!(NewYork.risk_level(&c).level, RiskLevel::Limited);
        assert_eq!(
            action_ids(&NewYork.required_actions(&c)),
            vec!["us-ny-pricing-disclosure"]
        );
    }

    #[test]
    fn pricing_without_personal_data_is_minimal() {
        let c = ny("Personalized pricing by store region", ProductType::Predictor)
            .with_data([DataCategory::Aggregated]);
        assert_eq!(NewYork.risk_level(&c).level, RiskLevel::Minimal);
    }

    #[test]
    fn frontier_threshold_is_inclusive() {
        let c = ny("Model", ProductType::FoundationModel).with_gpai(GpaiInfo {
            is_gpai_model: true,
            training_compute_flops: Some(1e26),
            ..Default::default()
        });
        assert_eq!(NewYork.risk_level(&c).level, RiskLevel::High);
    }
}
