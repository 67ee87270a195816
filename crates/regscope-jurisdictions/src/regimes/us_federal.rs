//! United States federal law as applied to AI systems.
//!
//! There is no horizontal federal AI statute. Risk follows the sectoral law
//! that governs the decision the system makes: fair lending and credit
//! reporting, employment discrimination, health care nondiscrimination and
//! fair housing are `high`; FTC Act unfairness and deception, COPPA and the
//! TAKE IT DOWN Act are `limited`.

use super::*;

// ── Trigger ids ─────────────────────────────────────────────────────────

const CREDIT: &str = "us-federal.credit-decision";
const EMPLOYMENT: &str = "us-federal.employment-decision";
const HEALTHCARE: &str = "us-federal.patient-care-decision";
const HOUSING: &str = "us-federal.housing-decision";

const CONSUMER_PROTECTION: &str = "us-federal.consumer-protection";
const CHILDREN: &str = "us-federal.children-online";
const INTIMATE_DEEPFAKE: &str = "us-federal.nonconsensual-intimate-imagery";

const HIPAA: &str = "us-federal.hipaa-covered-data";

const DISCRIMINATION_IDS: &[&str] = &[CREDIT, EMPLOYMENT, HEALTHCARE, HOUSING];

// ── Predicates ──────────────────────────────────────────────────────────

fn healthcare(ctx: &ProductContext) -> Option<String> {
    let setting = in_sector(ctx, &[Sector::Healthcare])
        .or_else(|| serves_any(ctx, &[UserPopulation::Patients]));
    both(setting, consequential(ctx))
}

fn housing(ctx: &ProductContext) -> Option<String> {
    let setting = serves_any(ctx, &[UserPopulation::Tenants])
        .or_else(|| in_sector(ctx, &[Sector::Housing]));
    both(setting, consequential(ctx))
}

fn hipaa(ctx: &ProductContext) -> Option<String> {
    both(
        has_any_data(ctx, &[DataCategory::Health]),
        in_sector(ctx, &[Sector::Healthcare, Sector::Insurance]),
    )
}

// ── Ladder ──────────────────────────────────────────────────────────────

const HIGH_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: CREDIT,
        description: "Credit decisions subject to fair lending and credit reporting law",
        provisions: &["ECOA, 15 U.S.C. 1691", "Regulation B, 12 CFR 1002.9", "FCRA, 15 U.S.C. 1681m"],
        predicate: credit_decisions,
    },
    TriggerRule {
        id: EMPLOYMENT,
        description: "Employment decisions subject to anti-discrimination law",
        provisions: &["Title VII, 42 U.S.C. 2000e-2", "ADA Title I"],
        predicate: employment_decisions,
    },
    TriggerRule {
        id: HEALTHCARE,
        description: "Patient care decision support",
        provisions: &["ACA Section 1557, 45 CFR 92.210"],
        predicate: healthcare,
    },
    TriggerRule {
        id: HOUSING,
        description: "Housing decisions subject to the Fair Housing Act",
        provisions: &["Fair Housing Act, 42 U.S.C. 3604"],
        predicate: housing,
    },
];

const LIMITED_RISK: &[TriggerRule] = &[
    TriggerRule {
        id: CONSUMER_PROTECTION,
        description: "Consumer-facing AI subject to FTC Act Section 5",
        provisions: &["FTC Act Section 5, 15 U.S.C. 45"],
        predicate: consumer_facing,
    },
    TriggerRule {
        id: CHILDREN,
        description: "Collection of personal information from children under 13",
        provisions: &["COPPA, 15 U.S.C. 6501-6506", "16 CFR Part 312"],
        predicate: involves_minors,
    },
    TriggerRule {
        id: INTIMATE_DEEPFAKE,
        description: "Platform can generate or host realistic depictions of real people",
        provisions: &["TAKE IT DOWN Act"],
        predicate: generates_deepfakes,
    },
];

static LADDER: RiskLadder = RiskLadder {
    regime: "US federal law",
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
    minimal_justification: "no sectoral statute governs the system's decisions and it is not consumer-facing",
};

const OBLIGATIONS: &[TriggerRule] = &[TriggerRule {
    id: HIPAA,
    description: "Protected health information handled by a covered entity",
    provisions: &["HIPAA Privacy Rule, 45 CFR Part 164"],
    predicate: hipaa,
}];

// ── Tables ──────────────────────────────────────────────────────────────

const PROVISIONS: &[ProvisionEntry] = &[
    ProvisionEntry {
        citation: "FTC Act Section 5",
        title: "Unfair or deceptive acts or practices",
        summary: "AI capability claims must be substantiated and AI use must not cause substantial unavoidable consumer injury.",
        when: &[],
    },
    ProvisionEntry {
        citation: "ECOA and Regulation B",
        title: "Equal credit opportunity",
        summary: "Creditors must give specific principal reasons for adverse action, including when decisions rely on complex models.",
        when: &[CREDIT],
    },
    ProvisionEntry {
        citation: "FCRA",
        title: "Fair Credit Reporting Act",
        summary: "Adverse action based on consumer report information requires notice and dispute rights.",
        when: &[CREDIT],
    },
    ProvisionEntry {
        citation: "Title VII and ADA",
        title: "Employment discrimination",
        summary: "Employers are liable for disparate impact of selection tools, including vendor-supplied AI.",
        when: &[EMPLOYMENT],
    },
    ProvisionEntry {
        citation: "45 CFR 92.210",
        title: "Nondiscrimination in patient care decision support tools",
        summary: "Covered entities must identify and mitigate discrimination risk from decision support tools.",
        when: &[HEALTHCARE],
    },
    ProvisionEntry {
        citation: "Fair Housing Act",
        title: "Housing discrimination",
        summary: "Tenant screening and advertising tools must not produce discriminatory effects.",
        when: &[HOUSING],
    },
    ProvisionEntry {
        citation: "COPPA",
        title: "Children's Online Privacy Protection Act",
        summary: "Verifiable parental consent before collecting personal information from children under 13.",
        when: &[CHILDREN],
    },
    ProvisionEntry {
        citation: "TAKE IT DOWN Act",
        title: "Non-consensual intimate imagery",
        summary: "Covered platforms must remove reported intimate deepfakes within 48 hours.",
        when: &[INTIMATE_DEEPFAKE],
    },
    ProvisionEntry {
        citation: "HIPAA Privacy and Security Rules",
        title: "Protected health information",
        summary: "Uses and disclosures of PHI are restricted and must be safeguarded.",
        when: &[HIPAA],
    },
];

const ARTIFACTS: &[ArtifactEntry] = &[
    ArtifactEntry {
        id: "us-federal-adverse-action-notice",
        artifact_type: ArtifactType::TransparencyNotice,
        name: "Adverse action notice with specific principal reasons",
        required: true,
        template: None,
        when: &[CREDIT],
    },
    ArtifactEntry {
        id: artifacts::BIAS_AUDIT,
        artifact_type: ArtifactType::BiasAudit,
        name: "Disparate impact analysis",
        required: false,
        template: Some(templates::BIAS_AUDIT),
        when: DISCRIMINATION_IDS,
    },
    ArtifactEntry {
        id: artifacts::RISK_ASSESSMENT,
        artifact_type: ArtifactType::RiskAssessment,
        name: "AI risk assessment aligned to the NIST AI RMF",
        required: false,
        template: Some(templates::RISK_ASSESSMENT),
        when: DISCRIMINATION_IDS,
    },
    ArtifactEntry {
        id: artifacts::PRIVACY_NOTICE,
        artifact_type: ArtifactType::PrivacyNotice,
        name: "COPPA direct notice to parents",
        required: true,
        template: Some(templates::PRIVACY_NOTICE),
        when: &[CHILDREN],
    },
    ArtifactEntry {
        id: "us-federal-hipaa-risk-analysis",
        artifact_type: ArtifactType::RiskAssessment,
        name: "HIPAA security risk analysis",
        required: true,
        template: None,
        when: &[HIPAA],
    },
];

const ACTIONS: &[ActionEntry] = &[
    ActionEntry {
        id: "us-federal-adverse-action-reasons",
        title: "Generate specific adverse action reasons",
        description: "Produce accurate, specific principal reasons for each denial; generic checklist reasons do not satisfy Regulation B.",
        legal_basis: "Regulation B, 12 CFR 1002.9(b)(2); CFPB Circular 2022-03",
        priority: Priority::Critical,
        effort: Some("3-6 weeks"),
        deadline: None,
        when: &[CREDIT],
    },
    ActionEntry {
        id: actions::BIAS_TESTING,
        title: "Test for disparate impact",
        description: "Measure outcomes across protected classes and search for less discriminatory alternatives.",
        legal_basis: "ECOA; Title VII; Fair Housing Act; 45 CFR 92.210",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: DISCRIMINATION_IDS,
    },
    ActionEntry {
        id: "us-federal-reasonable-accommodation",
        title: "Offer reasonable accommodation in AI-assisted selection",
        description: "Provide alternative assessment paths for applicants with disabilities.",
        legal_basis: "ADA Title I",
        priority: Priority::Important,
        effort: Some("1-2 weeks"),
        deadline: None,
        when: &[EMPLOYMENT],
    },
    ActionEntry {
        id: "us-federal-decision-support-review",
        title: "Mitigate discrimination risk in patient care tools",
        description: "Identify tools that use protected characteristics as inputs and put mitigation in place.",
        legal_basis: "45 CFR 92.210",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[HEALTHCARE],
    },
    ActionEntry {
        id: "us-federal-coppa-consent",
        title: "Obtain verifiable parental consent",
        description: "Obtain consent before collecting children's personal information, and separate consent before disclosing it to third parties.",
        legal_basis: "16 CFR 312.5",
        priority: Priority::Critical,
        effort: Some("2-4 weeks"),
        deadline: Some("2026-04-22"),
        when: &[CHILDREN],
    },
    ActionEntry {
        id: "us-federal-takedown-process",
        title: "Operate a 48-hour takedown process",
        description: "Provide a notice-and-removal process for non-consensual intimate imagery.",
        legal_basis: "TAKE IT DOWN Act Section 3",
        priority: Priority::Important,
        effort: Some("2-3 weeks"),
        deadline: Some("2026-05-19"),
        when: &[INTIMATE_DEEPFAKE],
    },
    ActionEntry {
        id: "us-federal-substantiate-claims",
        title: "Substantiate AI marketing claims",
        description: "Keep evidence for every claim about what the AI does; avoid overstating capabilities.",
        legal_basis: "FTC Act Section 5",
        priority: Priority::Important,
        effort: Some("1 week"),
        deadline: None,
        when: &[CONSUMER_PROTECTION],
    },
    ActionEntry {
        id: "us-federal-hipaa-safeguards",
        title: "Apply HIPAA safeguards to model inputs and outputs",
        description: "Execute business associate agreements and apply minimum-necessary and security controls to PHI.",
        legal_basis: "45 CFR Parts 164.308-164.312, 164.502(b)",
        priority: Priority::Important,
        effort: Some("2-4 weeks"),
        deadline: None,
        when: &[HIPAA],
    },
    ActionEntry {
        id: actions::AI_RMF_ALIGNMENT,
        title: "Align governance with the NIST AI RMF",
        description: "Map, measure and manage AI risks using the NIST AI Risk Management Framework.",
        legal_basis: "NIST AI 100-1",
        priority: Priority::Recommended,
        effort: Some("4-8 weeks"),
        deadline: None,
        when: DISCRIMINATION_IDS,
    },
];

// ── Module ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct UsFederal;

impl JurisdictionModule for UsFederal {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::UsFederal
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
            .milestone(
                (2022, 5, 26),
                "CFPB Circular 2022-03",
                "Adverse action notice requirements apply to complex algorithms.",
            )
            .milestone(
                (2023, 1, 26),
                "NIST AI RMF 1.0",
                "NIST publishes the AI Risk Management Framework.",
            )
            .milestone(
                (2025, 5, 1),
                "Section 1557 decision support tools",
                "45 CFR 92.210 compliance date for patient care decision support tools.",
            )
            .milestone(
                (2025, 5, 19),
                "TAKE IT DOWN Act enacted",
                "Criminal prohibitions on publishing non-consensual intimate imagery take effect.",
            )
            .milestone(
                (2026, 4, 22),
                "Amended COPPA Rule compliance",
                "Compliance date for the 2025 amendments to the COPPA Rule.",
            )
            .milestone(
                (2026, 5, 19),
                "TAKE IT DOWN platform duties",
                "Covered platforms must operate the notice-and-removal process.",
            )
            .note("Federal AI policy is set by executive order and agency enforcement of existing statutes; the December 2025 executive order on a national AI policy framework directs challenges to conflicting state AI laws.")
    }
}
