//! Singapore.
//!
//! Singapore regulates AI through voluntary governance frameworks backed by
//! the Personal Data Protection Act 2012 and sectoral guidance:
//!
//! - Model AI Governance Framework (2nd ed., 2020)
//! - Model AI Governance Framework for Generative AI (2024)
//! - Model AI Governance Framework for Agentic AI (2026)
//! - MAS FEAT principles and AI risk management guidelines for financial institutions
//!
//! Framework items are `important` or `recommended`; PDPA and MAS items
//! carry the statutory or supervisory priority.

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const AGENTIC_TRANSACTIONS: &str = "singapore.agent-financial-transactions";
const AUTONOMOUS_AGENT: &str = "singapore.autonomous-agent";
const FEAT: &str = "singapore.financial-sector-decisions";
const DETERMINATIVE: &str = "singapore.automated-personal-decisions";
const GENERATIVE: &str = "singapore.generative-ai";
const AGENTIC: &str = "singapore.agentic-ai";
const PDPA: &str = "singapore.personal-data";

const AGENT_IDS: &[&str] = &[AGENTIC_TRANSACTIONS, AUTONOMOUS_AGENT, AGENTIC];
const HIGH_RISK_IDS: &[&str] = &[AGENTIC_TRANSACTIONS, AUTONOMOUS_AGENT, FEAT, DETERMINATIVE];

// ── Predicates ──────────────────────────────────────────────────────────

fn agentic_transactions(ctx: &ProductContext) -> Option<String> {
    ctx.agentic_ai_context
        .as_ref()
        .filter(|a| a.is_agentic && a.can_make_financial_transactions)
        .map(|_| "agent can execute financial transactions".to_string())
}

fn autonomous_agent(ctx: &ProductContext) -> Option<String> {
    ctx.agentic_ai_context
        .as_ref()
        .filter(|a| a.is_agentic && a.autonomy_level == regscope_core::AutonomyLevel::Autonomous)
        .map(|_| "agent acts autonomously".to_string())
}

fn feat(ctx: &ProductContext) -> Option<String> {
    let financial = in_sector(ctx, &[Sector::FinancialServices, Sector::Insurance])
        .or_else(|| credit_decisions(ctx));
    both(financial, consequential(ctx))
}

fn determinative(ctx: &ProductContext) -> Option<String> {
    let automated = (fully_automated(ctx)
        && ctx.decision_impact == DecisionImpact::Determinative)
        .then(|| "fully automated determinative decisions".to_string());
    both(processes_personal_data(ctx), automated)
}

fn agentic(ctx: &ProductContext) -> Option<String> {
    is_agentic(ctx).then(|| "product is agentic".to_string())
}

// ── Ladder ──────────────────────────────────────────────────────────────

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: AGENTIC_TRANSACTIONS,
        description: "Agent with authority to execute financial transactions",
        provisions: &["Model AI Governance Framework for Agentic AI (2026), s. 2"],
        predicate: agentic_transactions,
    },
    TriggerRule {
        id: AUTONOMOUS_AGENT,
        description: "Agent operating without human checkpoints",
        provisions: &["Model AI Governance Framework for Agentic AI (2026), s. 3"],
        predicate: autonomous_agent,
    },
    TriggerRule {
        id: FEAT,
        description: "AI driving decisions at a financial institution",
        provisions: &["MAS FEAT Principles (2018)", "MAS Guidelines on AI Risk Management"],
        predicate: feat,
    },
    TriggerRule {
        id: DETERMINATIVE,
        description: "Fully automated determinative decisions about individuals",
        provisions: &["PDPC Advisory Guidelines on AI Recommendation and Decision Systems (2024)"],
        predicate: determinative,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: GENERATIVE,
        description: "Generative AI system",
        provisions: &["Model AI Governance Framework for Generative AI (2024)"],
        predicate: is_generative,
    },
    TriggerRule {
        id: AGENTIC,
        description: "Agentic AI system",
        provisions: &["Model AI Governance Framework for Agentic AI (2026)"],
        predicate: agentic,
    },
    TriggerRule {
        id: PDPA,
        description: "Collection, use or disclosure of personal data",
        provisions: &["PDPA 2012 ss. 13-20"],
        predicate: processes_personal_data,
    },
];

static LADDER: RiskLadder = RiskLadder {
    regime: "Singapore",
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
    minimal_justification: "no agentic, financial, generative or personal data trigger applies",
};

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "Model AI Governance Framework (2nd ed.)",
        title: "Model AI Governance Framework",
        summary: "Internal governance, human involvement proportionate to risk, operations management and stakeholder communication.",
        when: &[],
    },
    ProvisionEntry {
        citation: "Model AI Governance Framework for Agentic AI (2026)",
        title: "Agentic AI governance",
        summary: "Bound the agent's authority and tools, keep humans meaningfully accountable at checkpoints, and monitor agent actions.",
        when: AGENT_IDS,
    },
    ProvisionEntry {
        citation: "MAS FEAT Principles",
        title: "Fairness, Ethics, Accountability and Transparency",
        summary: "Financial institutions justify AI-driven decisions, review them for unintended bias and explain them to customers.",
        when: &[FEAT],
    },
    ProvisionEntry {
        citation: "Model AI Governance Framework for Generative AI (2024)",
        title: "Generative AI governance",
        summary: "Accountability, trusted data, incident reporting, testing and content provenance for generative systems.",
        when: &[GENERATIVE],
    },
    ProvisionEntry {
        citation: "PDPA 2012",
        title: "Personal Data Protection Act",
        summary: "Consent, purpose limitation, notification, protection and breach notification for personal data.",
        when: &[PDPA, DETERMINATIVE],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: artifacts::RISK_ASSESSMENT,
        artifact_type: ArtifactType::RiskAssessment,
        name: "AI risk assessment",
        required: true,
        template: Some(templates::RISK_ASSESSMENT),
        when: HIGH_RISK_IDS,
    },
    ArtifactEntry {
        id: "sg-agent-authority-register",
        artifact_type: ArtifactType::TechnicalDocumentation,
        name: "Agent tools, permissions and authority limits",
        required: true,
        template: None,
        when: AGENT_IDS,
    },
    ArtifactEntry {
        id: artifacts::HUMAN_OVERSIGHT_PLAN,
        artifact_type: ArtifactType::HumanOversightPlan,
        name: "Human checkpoint and escalation plan",
        required: true,
        template: None,
        when: &[AGENTIC_TRANSACTIONS, AUTONOMOUS_AGENT, DETERMINATIVE],
    },
    ArtifactEntry {
        id: "sg-feat-assessment",
        artifact_type: ArtifactType::ImpactAssessment,
        name: "FEAT fairness and transparency assessment",
        required: true,
        template: Some(templates::IMPACT_ASSESSMENT),
        when: &[FEAT],
    },
    ArtifactEntry {
        id: artifacts::PRIVACY_NOTICE,
        artifact_type: ArtifactType::PrivacyNotice,
        name: "PDPA notification of purposes",
        required: true,
        template: Some(templates::PRIVACY_NOTICE),
        when: &[PDPA, DETERMINATIVE],
    },
    ArtifactEntry {
        id: artifacts::MODEL_CARD,
        artifact_type: ArtifactType::ModelCard,
        name: "Model card",
        required: false,
        template: Some(templates::MODEL_CARD),
        when: &[GENERATIVE, FEAT],
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: "sg-agent-bound-authority",
        title: "Bound the agent's transaction authority",
        description: "Set spending limits, allow-listed counterparties and approval thresholds the agent cannot exceed.",
        legal_basis: "Model AI Governance Framework for Agentic AI, s. 2.1",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[AGENTIC_TRANSACTIONS],
    },
    ActionEntry {
        id: actions::HUMAN_OVERSIGHT,
        title: "Define human checkpoints",
        description: "Require human approval for significant or irreversible agent actions and keep a named accountable owner.",
        legal_basis: "Model AI Governance Framework for Agentic AI, s. 3",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[AGENTIC_TRANSACTIONS, AUTONOMOUS_AGENT, DETERMINATIVE],
    },
    ActionEntry {
        id: "sg-agent-monitoring",
        title: "Log and monitor agent actions",
        description: "Record every tool call and transaction with enough context to trace and reverse agent behaviour.",
        legal_basis: "Model AI Governance Framework for Agentic AI, s. 4",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: AGENT_IDS,
    },
    ActionEntry {
        id: "sg-feat-assessment",
        title: "Assess the system against FEAT",
        description: "Justify data use, test for systematic disadvantage and prepare customer explanations of AI-driven decisions.",
        legal_basis: "MAS FEAT Principles",
        priority: Priority::Critical,
        effort: Some("4-8 weeks"),
        deadline: None,
        when: &[FEAT],
    },
    ActionEntry {
        id: actions::BIAS_TESTING,
        title: "Test for unintended bias",
        description: "Review model outcomes for groups at risk of systematic disadvantage before deployment and periodically.",
        legal_basis: "MAS FEAT Principle F2",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[FEAT, DETERMINATIVE],
    },
    ActionEntry {
        id: "sg-pdpa-consent",
        title: "Obtain consent and notify purposes",
        description: "Notify individuals of the purposes of collection and obtain consent, or rely on a documented PDPA exception.",
        legal_basis: "PDPA ss. 13-14, 20",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[PDPA, DETERMINATIVE],
    },
    ActionEntry {
        id: actions::INCIDENT_RESPONSE,
        title: "Prepare incident and breach response",
        description: "Notify the PDPC of notifiable data breaches within three calendar days and keep an AI incident process.",
        legal_basis: "PDPA s. 26D",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[PDPA, DETERMINATIVE, AGENTIC_TRANSACTIONS],
    },
    ActionEntry {
        id: actions::AI_DISCLOSURE,
        title: "Disclose AI-generated content",
        description: "Tell users they are interacting with or receiving content from a generative system.",
        legal_basis: "Model AI Governance Framework for Generative AI, dimension 9",
        priority: Priority::Recommended,
        effort: Some("1-3 days"),
        deadline: None,
        when: &[GENERATIVE],
    },
    ActionEntry {
        id: actions::CONTENT_LABELING,
        title: "Adopt content provenance",
        description: "Apply watermarking or cryptographic provenance to generated media.",
        legal_basis: "Model AI Governance Framework for Generative AI, dimension 7",
        priority: Priority::Recommended,
        effort: Some("1-3 weeks"),
        deadline: None,
        when: &[GENERATIVE],
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct Singapore;

impl JurisdictionModule for Singapore {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Singapore
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
                (2014, 7, 2),
                "PDPA data protection provisions",
                "Main PDPA obligations take effect.",
            )
            .milestone(
                (2020, 1, 21),
                "Model AI Governance Framework, 2nd edition",
                "PDPC and IMDA publish the updated framework.",
            )
            .milestone(
                (2024, 3, 1),
                "PDPC advisory guidelines",
                "Guidelines on personal data in AI recommendation and decision systems.",
            )
            .milestone(
                (2024, 5, 30),
                "Generative AI framework",
                "Model AI Governance Framework for Generative AI published.",
            )
            .milestone(
                (2026, 1, 22),
                "Agentic AI framework",
                "Model AI Governance Framework for Agentic AI published.",
            )
            .note("Governance frameworks are voluntary; PDPA and MAS expectations are enforceable.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regimes::fixtures::{action_ids, artifact_ids, ctx};
    use regscope_core::{AgenticAiContext, AutomationLevel, AutonomyLevel, SectorContext};

    fn sg(description: &str, product_type: ProductType) -> ProductContext {
        ctx(description, product_type, "singapore")
    }

    fn procurement_agent() -> ProductContext {
        let mut agent = AgenticAiContext::new(AutonomyLevel::Bounded);
        agent.can_make_financial_transactions = true;
        sg("Autonomous procurement agent", ProductType::Agent)
            .with_decision_impact(DecisionImpact::Material)
            .with_automation(AutomationLevel::HumanOnTheLoop)
            .with_agentic(agent)
    }

    #[test]
    fn transacting_agent_is_high() {
        let c = procurement_agent();
        let classification = Singapore.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::High);
        assert_eq!(classification.applicable_categories, vec![AGENTIC_TRANSACTIONS]);
        let actions = Singapore.required_actions(&c);
        assert_eq!(actions[0].id, "sg-agent-bound-authority");
        assert_eq!(actions[0].priority, Priority::Critical);
        assert!(artifact_ids(&Singapore.required_artifacts(&c))
            .contains(&artifacts::HUMAN_OVERSIGHT_PLAN));
    }

    #[test]
    fn supervised_agent_is_limited() {
        let c = sg("Calendar assistant", ProductType::Agent)
            .with_agentic(AgenticAiContext::new(AutonomyLevel::Supervised));
        let classification = Singapore.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::Limited);
        assert_eq!(classification.applicable_categories, vec![AGENTIC]);
        assert_eq!(
            action_ids(&Singapore.required_actions(&c)),
            vec!["sg-agent-monitoring"]
        );
    }

    #[test]
    fn bank_credit_model_is_feat_high() {
        let c = sg("Credit limit model", ProductType::Predictor)
            .with_sector(SectorContext::new(Sector::FinancialServices))
            .with_data([DataCategory::Financial])
            .with_decision_impact(DecisionImpact::Material);
        let classification = Singapore.risk_level(&c);
        assert_eq!(classification.level, RiskLevel::High);
        assert_eq!(classification.applicable_categories, vec![FEAT]);
        assert!(action_ids(&Singapore.required_actions(&c)).contains(&"sg-feat-assessment"));
    }

    #[test]
    fn framework_provision_applies_to_every_product() {
        let c = sg("Image deduplication", ProductType::Detector);
        assert_eq!(Singapore.risk_level(&c).level, RiskLevel::Minimal);
        assert_eq!(Singapore.applicable_provisions(&c).len(), 1);
    }
}
