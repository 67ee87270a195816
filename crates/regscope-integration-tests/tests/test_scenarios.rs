//! # End-to-End Evaluation Scenarios
//!
//! Contexts parsed from their JSON wire form, mapped against the built-in
//! registry, and checked through aggregation, dedup and conflict detection.

mod common;

use regscope_core::{
    DataCategory, DecisionImpact, JurisdictionId, ProductContext, ProductType, RiskLevel,
    UserPopulation,
};
use regscope_engine::{
    aggregate_requirements, detect_conflicts, evaluate, map_all_jurisdictions, map_jurisdiction,
    merge_actions,
};
use regscope_jurisdictions::{catalog::actions, JurisdictionRegistry};

fn id(s: &str) -> JurisdictionId {
    JurisdictionId::new(s).unwrap()
}

// ---------------------------------------------------------------------------
// Scenario A: bounded procurement agent in the EU and Singapore
// ---------------------------------------------------------------------------

const PROCUREMENT_AGENT: &str = r#"{
    "description": "Autonomous procurement agent that places purchase orders within spending limits",
    "productType": "agent",
    "decisionImpact": "material",
    "automationLevel": "human-on-the-loop",
    "targetMarkets": ["eu-ai-act", "eu-gdpr", "singapore"],
    "agenticAiContext": {
        "isAgentic": true,
        "autonomyLevel": "bounded",
        "canMakeFinancialTransactions": true
    }
}"#;

#[test]
fn scenario_a_agent_is_high_risk_in_singapore_only() {
    common::init_tracing();
    let ctx = ProductContext::from_json(PROCUREMENT_AGENT).unwrap();
    ctx.validate().unwrap();
    let registry = JurisdictionRegistry::with_builtins();

    let outcome = map_all_jurisdictions(&ctx, &registry);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.results.len(), 3);

    let singapore = outcome.result_for(&id("singapore")).unwrap();
    assert_eq!(singapore.risk_classification.level, RiskLevel::High);
    assert!(singapore
        .risk_classification
        .applicable_categories
        .iter()
        .any(|c| c == "singapore.agent-financial-transactions"));

    let eu = outcome.result_for(&id("eu-ai-act")).unwrap();
    assert_eq!(eu.risk_classification.level, RiskLevel::Minimal);
    assert!(eu.gpai_classification.is_none());

    let summary = aggregate_requirements(&outcome.results);
    let highest = summary.highest_risk_level.unwrap();
    assert_eq!(highest.level, RiskLevel::High);
    assert_eq!(highest, singapore.risk_classification);
}

#[test]
fn scenario_a_flags_agentic_oversight_tension() {
    common::init_tracing();
    let ctx = ProductContext::from_json(PROCUREMENT_AGENT).unwrap();
    let registry = JurisdictionRegistry::with_builtins();
    let outcome = map_all_jurisdictions(&ctx, &registry);

    let tensions = detect_conflicts(&ctx, &outcome.results);
    let ids: Vec<&str> = tensions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["eu-singapore-agentic-oversight"]);
}

// ---------------------------------------------------------------------------
// Scenario B: content generator in the EU and China
// ---------------------------------------------------------------------------

#[test]
fn scenario_b_generator_needs_label_alignment() {
    common::init_tracing();
    let ctx = ProductContext::from_json(
        r#"{
            "description": "Marketing image and copy generator",
            "productType": "generator",
            "decisionImpact": "advisory",
            "automationLevel": "human-in-the-loop",
            "targetMarkets": ["eu-ai-act", "china"]
        }"#,
    )
    .unwrap();
    let registry = JurisdictionRegistry::with_builtins();
    let outcome = map_all_jurisdictions(&ctx, &registry);

    let tensions = detect_conflicts(&ctx, &outcome.results);
    let labeling = tensions
        .iter()
        .find(|t| t.id == "eu-china-content-labeling")
        .expect("labeling tension");
    assert_eq!(labeling.jurisdictions, vec![id("eu-ai-act"), id("china")]);
    assert!(!labeling.recommendation.is_empty());

    let merged = merge_actions(&outcome.results);
    let label = merged
        .iter()
        .find(|m| m.item.id == actions::CONTENT_LABELING)
        .expect("content labeling is merged");
    assert_eq!(label.jurisdictions, vec![id("eu-ai-act"), id("china")]);
}

// ---------------------------------------------------------------------------
// Scenario C: nothing registered
// ---------------------------------------------------------------------------

#[test]
fn scenario_c_unregistered_jurisdiction_is_reported_not_raised() {
    common::init_tracing();
    let ctx = common::context("Fraud alerting", ProductType::Detector, &["us-federal"]);
    let registry = JurisdictionRegistry::new();

    let outcome = map_all_jurisdictions(&ctx, &registry);
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].jurisdiction, id("us-federal"));
    assert!(outcome.errors[0].error.contains("not registered"));

    let summary = aggregate_requirements(&outcome.results);
    assert!(summary.highest_risk_level.is_none());
}

#[test]
fn scenario_c_single_lookup_returns_the_error() {
    let ctx = common::context("Fraud alerting", ProductType::Detector, &["us-federal"]);
    let err = map_jurisdiction(&ctx, &id("us-federal"), &JurisdictionRegistry::new()).unwrap_err();
    assert_eq!(err.to_string(), "jurisdiction 'us-federal' is not registered");
}

// ---------------------------------------------------------------------------
// Wider runs
// ---------------------------------------------------------------------------

#[test]
fn hiring_screener_across_us_and_eu() {
    common::init_tracing();
    let ctx = common::context(
        "CV screening and candidate ranking",
        ProductType::Ranker,
        &["eu-ai-act", "eu-gdpr", "us-co", "us-ny", "us-il", "us-federal"],
    )
    .with_data([DataCategory::Personal, DataCategory::Employment])
    .with_populations([UserPopulation::JobApplicants])
    .with_decision_impact(DecisionImpact::Material);

    let report = evaluate(&ctx, &JurisdictionRegistry::with_builtins()).unwrap();
    assert!(!report.is_partial());
    assert_eq!(report.headline_level(), RiskLevel::High);

    let ids: Vec<&str> = report.conflicts.iter().map(|t| t.id.as_str()).collect();
    assert!(ids.contains(&"eu-colorado-impact-assessment"));
    assert!(ids.contains(&"eu-nyc-hiring-audit"));
    let preemption = report
        .conflicts
        .iter()
        .find(|t| t.id == "us-federal-state-preemption")
        .unwrap();
    assert_eq!(
        preemption.jurisdictions,
        vec![id("us-federal"), id("us-co"), id("us-ny"), id("us-il")]
    );

    let oversight = report
        .merged_actions
        .iter()
        .find(|m| m.item.id == actions::HUMAN_OVERSIGHT);
    if let Some(merged) = oversight {
        assert!(merged.jurisdictions.contains(&id("eu-ai-act")));
    }
}

#[test]
fn every_builtin_maps_a_minimal_context() {
    common::init_tracing();
    let all: Vec<&str> = regscope_jurisdictions::Jurisdiction::all()
        .iter()
        .map(|j| j.as_str())
        .collect();
    let ctx = common::context("Warehouse demand forecasting", ProductType::Predictor, &all);
    let report = evaluate(&ctx, &JurisdictionRegistry::with_builtins()).unwrap();

    assert_eq!(report.outcome.results.len(), all.len());
    for risk in &report.risk_summary {
        assert_ne!(risk.level, RiskLevel::Undetermined, "{}", risk.jurisdiction);
    }
    for result in &report.outcome.results {
        assert!(!result.compliance_timeline.milestones.is_empty());
    }
}
