//! # Conflict Detector
//!
//! A fixed, ordered table of cross-jurisdiction tensions. Each rule names
//! the jurisdictions that must all be present among the mapped results and
//! an optional condition over the context (or, for one rule, over the EU AI
//! Act result). A matching rule emits one [`ConflictTension`] with authored
//! text.
//!
//! The detector is advisory: it reads its inputs, never alters them, and
//! never fails. Same present ids and flags give the same tension list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use regscope_core::{
    CanonicalBytes, CanonicalizationError, ContentDigest, DataCategory, JurisdictionId,
    JurisdictionResult, ProductContext, RiskLevel, Sector, UserPopulation,
    sha256_digest,
};
use regscope_jurisdictions::{predicates, Jurisdiction};

/// A cross-jurisdiction requirements clash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictTension {
    pub id: String,
    pub title: String,
    pub jurisdictions: Vec<JurisdictionId>,
    pub description: String,
    pub recommendation: String,
}

/// Fingerprint of a tension list.
///
/// # Errors
///
/// Returns a canonicalization error if the list cannot be serialized.
pub fn tensions_fingerprint(
    tensions: &[ConflictTension],
) -> Result<ContentDigest, CanonicalizationError> {
    Ok(sha256_digest(&CanonicalBytes::new(&tensions)?))
}

// ── Rule table ──────────────────────────────────────────────────────────

/// What the rules see.
struct Scene<'a> {
    ctx: &'a ProductContext,
    results: &'a [JurisdictionResult],
    present: BTreeSet<&'a str>,
}

impl Scene<'_> {
    fn has(&self, id: &str) -> bool {
        self.present.contains(id)
    }

    fn level_of(&self, id: &str) -> Option<RiskLevel> {
        self.results
            .iter()
            .find(|r| r.jurisdiction.as_str() == id)
            .map(|r| r.risk_classification.level)
    }
}

/// Which jurisdictions a rule spans.
#[derive(Clone, Copy)]
enum Span {
    Pair(Jurisdiction, Jurisdiction),
    /// US federal law and every present US state module.
    FederalAndStates,
}

/// Authored text for one tension.
#[derive(Clone, Copy)]
struct Text {
    title: &'static str,
    description: &'static str,
    recommendation: &'static str,
}

#[derive(Clone, Copy)]
struct ConflictRule {
    id: &'static str,
    span: Span,
    condition: fn(&Scene<'_>) -> bool,
    text: fn(&Scene<'_>) -> Text,
}

fn always(_: &Scene<'_>) -> bool {
    true
}

fn personal_data(scene: &Scene<'_>) -> bool {
    scene.ctx.data_processed.iter().any(|c| c.is_personal())
}

fn biometric_data(scene: &Scene<'_>) -> bool {
    scene.ctx.data_processed.contains(&DataCategory::Biometric)
}

fn generative(scene: &Scene<'_>) -> bool {
    predicates::is_generative(scene.ctx).is_some()
}

/// High-risk or above under the EU AI Act.
fn eu_high_risk(scene: &Scene<'_>) -> bool {
    scene
        .level_of(Jurisdiction::EuAiAct.as_str())
        .is_some_and(|level| level >= RiskLevel::High)
}

fn workforce(scene: &Scene<'_>) -> bool {
    scene.ctx.user_populations.contains(&UserPopulation::JobApplicants)
        || scene.ctx.user_populations.contains(&UserPopulation::Employees)
}

fn agentic(scene: &Scene<'_>) -> bool {
    scene
        .ctx
        .agentic_ai_context
        .as_ref()
        .is_some_and(|a| a.is_agentic)
}

fn gpai_model(scene: &Scene<'_>) -> bool {
    predicates::is_gpai(scene.ctx)
}

fn financial_sector(scene: &Scene<'_>) -> bool {
    scene
        .ctx
        .sector_context
        .as_ref()
        .is_some_and(|s| s.sector == Sector::FinancialServices)
}

fn open_source(scene: &Scene<'_>) -> bool {
    scene.ctx.gpai_info.as_ref().is_some_and(|g| g.is_open_source)
}

const RULES: &[ConflictRule] = &[
    ConflictRule {
        id: "eu-china-content-labeling",
        span: Span::Pair(Jurisdiction::EuAiAct, Jurisdiction::China),
        condition: generative,
        text: |_| Text {
            title: "Divergent AI content labeling regimes",
            description: "The EU AI Act (Art. 50) requires machine-readable marking of synthetic content and disclosure of deepfakes. China's Labeling Measures require both explicit user-visible labels and implicit metadata labels in a prescribed format on all generated content.",
            recommendation: "Implement one labeling pipeline that emits China's explicit and implicit labels and an interoperable provenance standard such as C2PA, then verify each market's format at output time.",
        },
    },
    ConflictRule {
        id: "gdpr-china-data-transfer",
        span: Span::Pair(Jurisdiction::EuGdpr, Jurisdiction::China),
        condition: personal_data,
        text: |_| Text {
            title: "Conflicting cross-border data transfer controls",
            description: "GDPR Chapter V restricts transfers of EU personal data to China without appropriate safeguards, while PIPL Art. 38-40 separately restricts exports of personal information out of China.",
            recommendation: "Localise processing per region where possible; otherwise pair EU Standard Contractual Clauses and a transfer impact assessment with the CAC standard contract filing and a PIPIA.",
        },
    },
    ConflictRule {
        id: "gdpr-ccpa-consent-model",
        span: Span::Pair(Jurisdiction::EuGdpr, Jurisdiction::UsCa),
        condition: personal_data,
        text: |_| Text {
            title: "Opt-in versus opt-out consent models",
            description: "GDPR requires a lawful basis before processing, often opt-in consent, while the CCPA relies on notice at collection with opt-out rights for sale, sharing and automated decision-making technology.",
            recommendation: "Design the consent layer for the stricter GDPR opt-in standard and add CCPA-specific opt-out links and ADMT pre-use notices for California users.",
        },
    },
    ConflictRule {
        id: "gdpr-bipa-biometric-consent",
        span: Span::Pair(Jurisdiction::EuGdpr, Jurisdiction::UsIl),
        condition: biometric_data,
        text: |_| Text {
            title: "Biometric consent formalities",
            description: "GDPR Art. 9 permits biometric processing on explicit consent or another Art. 9(2) condition, while BIPA requires a written release after specific written disclosures and a public retention schedule, with statutory damages.",
            recommendation: "Use a written release that meets BIPA's disclosure requirements; it also satisfies GDPR explicit consent. Keep one retention schedule at the shorter of the two limits.",
        },
    },
    ConflictRule {
        id: "eu-colorado-impact-assessment",
        span: Span::Pair(Jurisdiction::EuAiAct, Jurisdiction::UsCo),
        condition: eu_high_risk,
        text: |_| Text {
            title: "Overlapping but non-identical impact assessments",
            description: "A high-risk system under the EU AI Act needs a risk management system and, for some deployers, a fundamental rights impact assessment. The Colorado AI Act requires an annual deployer impact assessment with different content requirements.",
            recommendation: "Maintain one assessment document with a shared core and jurisdiction-specific annexes, and schedule reviews on the stricter annual cycle.",
        },
    },
    ConflictRule {
        id: "eu-nyc-hiring-audit",
        span: Span::Pair(Jurisdiction::EuAiAct, Jurisdiction::UsNy),
        condition: workforce,
        text: |_| Text {
            title: "Different fairness evaluation methods for hiring tools",
            description: "NYC Local Law 144 requires an independent bias audit computing impact ratios by sex and race/ethnicity. The EU AI Act requires data governance and bias examination without a prescribed metric, and GDPR restricts processing the special-category data needed to compute those ratios.",
            recommendation: "Run the LL144 audit on NYC data under a documented Art. 10(5) justification, and reuse its methodology within the EU technical documentation.",
        },
    },
    ConflictRule {
        id: "eu-singapore-agentic-oversight",
        span: Span::Pair(Jurisdiction::EuAiAct, Jurisdiction::Singapore),
        condition: agentic,
        text: |_| Text {
            title: "Human oversight expectations for agents",
            description: "The EU AI Act frames oversight as the ability to monitor, interpret and override a high-risk system. Singapore's agentic AI framework emphasises bounding agent authority and placing human checkpoints before significant actions.",
            recommendation: "Combine both: enforce authority limits and approval checkpoints in the agent runtime, and document override and stop capabilities for EU oversight.",
        },
    },
    ConflictRule {
        id: "eu-china-gpai-openness",
        span: Span::Pair(Jurisdiction::EuAiAct, Jurisdiction::China),
        condition: gpai_model,
        text: |scene| {
            if open_source(scene) {
                Text {
                    title: "Open-weight release and Chinese service filing",
                    description: "The EU AI Act relieves open-source GPAI models without systemic risk of some documentation duties. China attaches filing and security assessment to public generative services regardless of model openness.",
                    recommendation: "Confirm the EU open-source exemption applies, and treat any China-facing hosted service as a separately filed deployment.",
                }
            } else {
                Text {
                    title: "GPAI transparency versus Chinese security assessment",
                    description: "EU GPAI providers publish a training content summary and share documentation with the AI Office and downstream providers. China requires a security assessment and algorithm filing that discloses model details to the CAC.",
                    recommendation: "Prepare a single disclosure inventory and decide per market which details are published, filed or withheld as confidential.",
                }
            }
        },
    },
    ConflictRule {
        id: "eu-uk-regulatory-divergence",
        span: Span::Pair(Jurisdiction::EuAiAct, Jurisdiction::Uk),
        condition: always,
        text: |_| Text {
            title: "Statutory versus principles-based regulation",
            description: "The EU applies a horizontal AI statute with conformity requirements. The UK relies on existing regulators applying cross-sector principles, and its amended automated decision-making rules differ from GDPR Art. 22.",
            recommendation: "Use the EU AI Act as the compliance baseline and map UK regulator guidance onto it, tracking where UK rules are more permissive.",
        },
    },
    ConflictRule {
        id: "eu-us-credit-explanation",
        span: Span::Pair(Jurisdiction::EuAiAct, Jurisdiction::UsFederal),
        condition: financial_sector,
        text: |_| Text {
            title: "Explaining credit decisions",
            description: "ECOA and Regulation B require specific principal reasons for adverse actions even when complex models are used. The EU AI Act and GDPR require transparency and meaningful information about the logic involved.",
            recommendation: "Generate reason codes from the model explanation layer that satisfy adverse action notice requirements and reuse them for EU explanations.",
        },
    },
    ConflictRule {
        id: "us-federal-state-preemption",
        span: Span::FederalAndStates,
        condition: always,
        text: |_| Text {
            title: "Federal preemption uncertainty for state AI laws",
            description: "Federal policy seeks to discourage or preempt state AI regulation, but state laws remain enforceable until preempted by statute or a court.",
            recommendation: "Keep complying with applicable state laws and monitor federal legislation and litigation that could preempt them.",
        },
    },
];

impl ConflictRule {
    /// Jurisdictions spanned, or `None` when the span is not present.
    fn span_members(&self, scene: &Scene<'_>) -> Option<Vec<JurisdictionId>> {
        match self.span {
            Span::Pair(a, b) => {
                (scene.has(a.as_str()) && scene.has(b.as_str())).then(|| vec![a.id(), b.id()])
            }
            Span::FederalAndStates => {
                if !scene.has(Jurisdiction::UsFederal.as_str()) {
                    return None;
                }
                let states: Vec<JurisdictionId> = scene
                    .results
                    .iter()
                    .filter(|r| {
                        r.jurisdiction
                            .as_str()
                            .parse::<Jurisdiction>()
                            .is_ok_and(|j| j.is_us_state())
                    })
                    .map(|r| r.jurisdiction.clone())
                    .collect();
                if states.is_empty() {
                    return None;
                }
                let mut members = vec![Jurisdiction::UsFederal.id()];
                for state in states {
                    if !members.contains(&state) {
                        members.push(state);
                    }
                }
                Some(members)
            }
        }
    }
}

/// Evaluate the rule table against the mapped results.
pub fn detect_conflicts(ctx: &ProductContext, results: &[JurisdictionResult]) -> Vec<ConflictTension> {
    let scene = Scene {
        ctx,
        results,
        present: results.iter().map(|r| r.jurisdiction.as_str()).collect(),
    };

    let tensions: Vec<ConflictTension> = RULES
        .iter()
        .filter_map(|rule| {
            let jurisdictions = rule.span_members(&scene)?;
            if !(rule.condition)(&scene) {
                return None;
            }
            let text = (rule.text)(&scene);
            Some(ConflictTension {
                id: rule.id.to_string(),
                title: text.title.to_string(),
                jurisdictions,
                description: text.description.to_string(),
                recommendation: text.recommendation.to_string(),
            })
        })
        .collect();

    tracing::debug!(count = tensions.len(), "conflict detection complete");
    tensions
}

/// Ids of every rule in evaluation order.
pub fn rule_ids() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|r| r.id)
}
