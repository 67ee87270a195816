//! # Mapping Properties
//!
//! Randomized checks over generated product contexts and every built-in
//! jurisdiction:
//!
//! 1. Registered modules never classify as `Undetermined`.
//! 2. Mapping is pure: repeated runs give equal results and fingerprints.
//! 3. Required and recommended actions partition the module's action list.
//! 4. The aggregate's highest level has maximal rank; ties keep the first.
//! 5. Merged requirements keep the maximum priority and full attribution.
//! 6. Conflict detection is deterministic.

mod common;

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;

use regscope_core::{
    AgenticAiContext, AutomationLevel, AutonomyLevel, DataCategory, DecisionImpact,
    GenerativeAiContext, JurisdictionId, ProductContext, ProductType, RiskLevel, Sector,
    SectorContext, UserPopulation,
};
use regscope_engine::{
    aggregate_requirements, detect_conflicts, map_all_jurisdictions, map_jurisdiction,
    merge_actions, merge_artifacts, tensions_fingerprint,
};
use regscope_jurisdictions::{Jurisdiction, JurisdictionRegistry};

const DESCRIPTIONS: &[&str] = &[
    "Inventory demand forecasting",
    "Customer support chatbot",
    "CV screening and candidate ranking",
    "Face recognition door access",
    "Consumer loan underwriting model",
    "Product recommendation feed",
    "Marketing image studio",
    "Autonomous procurement agent",
];

fn product_type() -> impl Strategy<Value = ProductType> {
    prop::sample::select(vec![
        ProductType::Classifier,
        ProductType::Generator,
        ProductType::Recommender,
        ProductType::Predictor,
        ProductType::Detector,
        ProductType::Ranker,
        ProductType::Agent,
        ProductType::FoundationModel,
        ProductType::Other,
    ])
}

fn data_categories() -> impl Strategy<Value = Vec<DataCategory>> {
    prop::sample::subsequence(
        vec![
            DataCategory::Personal,
            DataCategory::Sensitive,
            DataCategory::Biometric,
            DataCategory::Health,
            DataCategory::Financial,
            DataCategory::Location,
            DataCategory::Minor,
            DataCategory::Behavioral,
            DataCategory::Employment,
        ],
        0..=4,
    )
}

fn populations() -> impl Strategy<Value = Vec<UserPopulation>> {
    prop::sample::subsequence(
        vec![
            UserPopulation::Consumers,
            UserPopulation::JobApplicants,
            UserPopulation::Employees,
            UserPopulation::Minors,
            UserPopulation::CreditApplicants,
            UserPopulation::Students,
            UserPopulation::Patients,
            UserPopulation::GeneralPublic,
        ],
        0..=3,
    )
}

fn markets() -> impl Strategy<Value = Vec<Jurisdiction>> {
    prop::sample::subsequence(Jurisdiction::all().to_vec(), 1..=12).prop_shuffle()
}

prop_compose! {
    fn product_context()(
        description in prop::sample::select(DESCRIPTIONS),
        product_type in product_type(),
        data in data_categories(),
        populations in populations(),
        impact in prop::sample::select(vec![
            DecisionImpact::Advisory,
            DecisionImpact::Material,
            DecisionImpact::Determinative,
        ]),
        automation in prop::sample::select(vec![
            AutomationLevel::HumanInTheLoop,
            AutomationLevel::HumanOnTheLoop,
            AutomationLevel::FullyAutomated,
        ]),
        markets in markets(),
        generative in any::<bool>(),
        agent in prop::option::of((
            prop::sample::select(vec![
                AutonomyLevel::Supervised,
                AutonomyLevel::Bounded,
                AutonomyLevel::Autonomous,
            ]),
            any::<bool>(),
        )),
        financial in any::<bool>(),
    ) -> ProductContext {
        let mut ctx = ProductContext::new(
            description,
            product_type,
            markets.iter().map(|j| j.id()).collect(),
        )
        .with_data(data)
        .with_populations(populations)
        .with_decision_impact(impact)
        .with_automation(automation);
        if generative {
            ctx = ctx.with_generative(GenerativeAiContext {
                generates_text: true,
                public_facing: true,
                ..Default::default()
            });
        }
        if let Some((autonomy, transacts)) = agent {
            let mut agentic = AgenticAiContext::new(autonomy);
            agentic.can_make_financial_transactions = transacts;
            ctx = ctx.with_agentic(agentic);
        }
        if financial {
            ctx = ctx.with_sector(SectorContext::new(Sector::FinancialServices));
        }
        ctx
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn registered_modules_never_undetermined(ctx in product_context()) {
        for jurisdiction in Jurisdiction::all() {
            let level = jurisdiction.module().risk_level(&ctx).level;
            prop_assert_ne!(level, RiskLevel::Undetermined, "{}", jurisdiction);
        }
    }

    #[test]
    fn mapping_is_pure(ctx in product_context()) {
        let registry = JurisdictionRegistry::with_builtins();
        for id in &ctx.target_markets {
            let first = map_jurisdiction(&ctx, id, &registry).unwrap();
            let second = map_jurisdiction(&ctx, id, &registry).unwrap();
            prop_assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn actions_partition_completely(ctx in product_context()) {
        let registry = JurisdictionRegistry::with_builtins();
        for id in &ctx.target_markets {
            let raw: BTreeSet<String> = registry
                .get(id)
                .unwrap()
                .module
                .required_actions(&ctx)
                .into_iter()
                .map(|a| a.id)
                .collect();
            let result = map_jurisdiction(&ctx, id, &registry).unwrap();
            let required: BTreeSet<String> =
                result.required_actions.iter().map(|a| a.id.clone()).collect();
            let recommended: BTreeSet<String> =
                result.recommended_actions.iter().map(|a| a.id.clone()).collect();

            prop_assert!(required.is_disjoint(&recommended));
            let union: BTreeSet<String> = required.union(&recommended).cloned().collect();
            prop_assert_eq!(union, raw);
        }
    }

    #[test]
    fn highest_level_has_max_rank_and_first_tie(ctx in product_context()) {
        let registry = JurisdictionRegistry::with_builtins();
        let outcome = map_all_jurisdictions(&ctx, &registry);
        let highest = aggregate_requirements(&outcome.results).highest_risk_level.unwrap();

        let max_rank = outcome
            .results
            .iter()
            .map(|r| r.risk_classification.level.rank())
            .max()
            .unwrap();
        prop_assert_eq!(highest.level.rank(), max_rank);
        let first = outcome
            .results
            .iter()
            .find(|r| r.risk_classification.level.rank() == max_rank)
            .unwrap();
        prop_assert_eq!(&highest, &first.risk_classification);
    }

    #[test]
    fn merged_actions_keep_max_priority_and_attribution(ctx in product_context()) {
        let registry = JurisdictionRegistry::with_builtins();
        let outcome = map_all_jurisdictions(&ctx, &registry);

        let mut expected: HashMap<String, (u8, Vec<JurisdictionId>)> = HashMap::new();
        for result in &outcome.results {
            for action in result.all_actions() {
                let entry = expected.entry(action.id.clone()).or_insert((0, Vec::new()));
                entry.0 = entry.0.max(action.priority.rank());
                if !entry.1.contains(&result.jurisdiction) {
                    entry.1.push(result.jurisdiction.clone());
                }
            }
        }

        let merged = merge_actions(&outcome.results);
        prop_assert_eq!(merged.len(), expected.len());
        for m in &merged {
            let (rank, jurisdictions) = &expected[&m.item.id];
            prop_assert_eq!(m.item.priority.rank(), *rank);
            prop_assert_eq!(&m.jurisdictions, jurisdictions);
        }
    }

    #[test]
    fn merged_artifacts_are_unique_and_required_wins(ctx in product_context()) {
        let registry = JurisdictionRegistry::with_builtins();
        let outcome = map_all_jurisdictions(&ctx, &registry);
        let merged = merge_artifacts(&outcome.results);

        let ids: BTreeSet<&str> = merged.iter().map(|m| m.item.id.as_str()).collect();
        prop_assert_eq!(ids.len(), merged.len());
        for m in &merged {
            let any_required = outcome
                .results
                .iter()
                .flat_map(|r| r.required_artifacts.iter())
                .any(|a| a.id == m.item.id && a.required);
            prop_assert_eq!(m.item.required, any_required);
        }
    }

    #[test]
    fn conflict_detection_is_deterministic(ctx in product_context()) {
        let registry = JurisdictionRegistry::with_builtins();
        let first = map_all_jurisdictions(&ctx, &registry);
        let second = map_all_jurisdictions(&ctx, &registry);

        let a = detect_conflicts(&ctx, &first.results);
        let b = detect_conflicts(&ctx, &second.results);
        prop_assert_eq!(tensions_fingerprint(&a).unwrap(), tensions_fingerprint(&b).unwrap());
        prop_assert_eq!(a, b);
    }
}
