//! # Shared Predicates
//!
//! Cross-cutting checks over the product context used by every jurisdiction
//! module. Functions returning `Option<String>` yield the evidence string
//! when the check holds, so they compose directly into trigger predicates.
//!
//! Keyword matching is case-insensitive substring matching over the
//! free-text description. Keyword lists are kept specific enough that
//! incidental substrings do not match.

use regscope_core::{
    DataCategory, DecisionImpact, ExistingMeasures, FinancialService, ProductContext,
    ProductType, Sector, UserPopulation,
};

/// Training compute above which a GPAI model is presumed to carry
/// systemic risk under the EU AI Act (Art. 51(2)).
pub const EU_SYSTEMIC_RISK_FLOPS: f64 = 1e25;

/// Training compute defining a frontier model under California SB 53 and
/// the New York RAISE Act.
pub const US_FRONTIER_MODEL_FLOPS: f64 = 1e26;

// -- Description ------------------------------------------------------------

/// First keyword found in the description, as evidence.
pub fn mentions(ctx: &ProductContext, keywords: &[&str]) -> Option<String> {
    let haystack = ctx.description.to_lowercase();
    keywords
        .iter()
        .find(|kw| haystack.contains(&kw.to_lowercase()))
        .map(|kw| format!("description mentions \"{kw}\""))
}

// -- Data and populations ---------------------------------------------------

/// Data categories from `categories` the product processes.
pub fn has_any_data(ctx: &ProductContext, categories: &[DataCategory]) -> Option<String> {
    let hits: Vec<&str> = ctx
        .data_processed
        .iter()
        .filter(|c| categories.contains(*c))
        .map(|c| c.as_str())
        .collect();
    (!hits.is_empty()).then(|| format!("processes {} data", hits.join(", ")))
}

/// Populations from `populations` the product affects.
pub fn serves_any(ctx: &ProductContext, populations: &[UserPopulation]) -> Option<String> {
    let hits: Vec<&str> = ctx
        .user_populations
        .iter()
        .filter(|p| populations.contains(*p))
        .map(|p| p.as_str())
        .collect();
    (!hits.is_empty()).then(|| format!("affects {}", hits.join(", ")))
}

/// Any category relating to a natural person.
pub fn processes_personal_data(ctx: &ProductContext) -> Option<String> {
    let hits: Vec<&str> = ctx
        .data_processed
        .iter()
        .filter(|c| c.is_personal())
        .map(|c| c.as_str())
        .collect();
    (!hits.is_empty()).then(|| format!("processes personal data ({})", hits.join(", ")))
}

/// Special-category data (health, biometric, genetic, criminal, sensitive).
pub fn processes_special_category_data(ctx: &ProductContext) -> Option<String> {
    let hits: Vec<&str> = ctx
        .data_processed
        .iter()
        .filter(|c| c.is_special_category())
        .map(|c| c.as_str())
        .collect();
    (!hits.is_empty()).then(|| format!("processes special-category data ({})", hits.join(", ")))
}

/// Children's data or a minor population.
pub fn involves_minors(ctx: &ProductContext) -> Option<String> {
    has_any_data(ctx, &[DataCategory::Minor])
        .or_else(|| serves_any(ctx, &[UserPopulation::Minors]))
}

/// Consumers or the general public.
pub fn consumer_facing(ctx: &ProductContext) -> Option<String> {
    serves_any(
        ctx,
        &[UserPopulation::Consumers, UserPopulation::GeneralPublic],
    )
    .or_else(|| {
        ctx.generative_ai_context
            .as_ref()
            .filter(|g| g.public_facing)
            .map(|_| "generative outputs are public-facing".to_string())
    })
}

// -- Decisions --------------------------------------------------------------

/// Output is at least a material factor in decisions.
pub fn consequential(ctx: &ProductContext) -> Option<String> {
    (ctx.decision_impact >= DecisionImpact::Material)
        .then(|| format!("decision impact is {}", ctx.decision_impact.as_str()))
}

/// No human in or on the loop.
pub fn fully_automated(ctx: &ProductContext) -> bool {
    ctx.automation_level == regscope_core::AutomationLevel::FullyAutomated
}

/// Solely automated decisions with material or determinative impact.
pub fn solely_automated_significant(ctx: &ProductContext) -> Option<String> {
    if !fully_automated(ctx) {
        return None;
    }
    consequential(ctx).map(|impact| format!("fully automated and {impact}"))
}

/// Evidence combinator: both parts must hold.
pub fn both(a: Option<String>, b: Option<String>) -> Option<String> {
    Some(format!("{}; {}", a?, b?))
}

// -- Sector -----------------------------------------------------------------

pub fn sector(ctx: &ProductContext) -> Option<Sector> {
    ctx.sector_context.as_ref().map(|s| s.sector)
}

pub fn in_sector(ctx: &ProductContext, sectors: &[Sector]) -> Option<String> {
    sector(ctx)
        .filter(|s| sectors.contains(s))
        .map(|s| format!("deployed in the {s} sector"))
}

/// Financial services from `services` the product supports.
pub fn offers_financial_service(
    ctx: &ProductContext,
    services: &[FinancialService],
) -> Option<String> {
    let fs = ctx.sector_context.as_ref()?.financial_services.as_ref()?;
    let hits: Vec<String> = fs
        .services
        .iter()
        .filter(|s| services.contains(*s))
        .map(|s| s.as_str().to_string())
        .collect();
    (!hits.is_empty()).then(|| format!("supports financial services {}", hits.join(", ")))
}

/// Credit scoring or creditworthiness evaluation of natural persons.
pub fn credit_decisions(ctx: &ProductContext) -> Option<String> {
    let scoring = ctx
        .sector_context
        .as_ref()
        .and_then(|s| s.financial_services.as_ref())
        .filter(|fs| fs.uses_credit_scoring)
        .map(|_| "uses credit scoring".to_string());
    scoring
        .or_else(|| offers_financial_service(ctx, &[FinancialService::CreditUnderwriting]))
        .or_else(|| serves_any(ctx, &[UserPopulation::CreditApplicants]))
}

/// Employment decisions: applicants or workers affected materially.
pub fn employment_decisions(ctx: &ProductContext) -> Option<String> {
    let population = serves_any(
        ctx,
        &[UserPopulation::JobApplicants, UserPopulation::Employees],
    )
    .or_else(|| in_sector(ctx, &[Sector::Employment]));
    both(population, consequential(ctx))
}

// -- Product shape ----------------------------------------------------------

/// Agentic per the sub-context flag or the product type.
pub fn is_agentic(ctx: &ProductContext) -> bool {
    ctx.product_type == ProductType::Agent
        || ctx
            .agentic_ai_context
            .as_ref()
            .is_some_and(|a| a.is_agentic)
}

/// Generates content per product type or generative sub-context.
pub fn is_generative(ctx: &ProductContext) -> Option<String> {
    match ctx.product_type {
        ProductType::Generator | ProductType::FoundationModel => {
            Some(format!("product type is {}", ctx.product_type))
        }
        _ => ctx
            .generative_ai_context
            .as_ref()
            .map(|_| "product has generative capabilities".to_string()),
    }
}

/// Generates image, audio or video content.
pub fn generates_synthetic_media(ctx: &ProductContext) -> Option<String> {
    ctx.generative_ai_context
        .as_ref()
        .filter(|g| g.generates_synthetic_media())
        .map(|_| "generates synthetic image, audio or video".to_string())
}

/// Can produce realistic depictions of real people or events.
pub fn generates_deepfakes(ctx: &ProductContext) -> Option<String> {
    ctx.generative_ai_context
        .as_ref()
        .filter(|g| g.can_generate_deepfakes)
        .map(|_| "can generate deepfakes".to_string())
}

/// General-purpose AI model per product type or GPAI info.
pub fn is_gpai(ctx: &ProductContext) -> bool {
    ctx.product_type == ProductType::FoundationModel
        || ctx.gpai_info.as_ref().is_some_and(|g| g.is_gpai_model)
}

/// Training compute at or above `threshold`.
pub fn training_compute_at_least(ctx: &ProductContext, threshold: f64) -> Option<String> {
    ctx.gpai_info
        .as_ref()
        .and_then(|g| g.training_compute_flops)
        .filter(|flops| *flops >= threshold)
        .map(|flops| format!("training compute {flops:e} FLOPs >= {threshold:e}"))
}

/// Existing measures, or all-false defaults.
pub fn measures(ctx: &ProductContext) -> ExistingMeasures {
    ctx.existing_measures.clone().unwrap_or_default()
}

/// Other target markets besides `own`, for transfer analysis.
pub fn other_markets<'a>(ctx: &'a ProductContext, own: &[&str]) -> Vec<&'a str> {
    ctx.target_markets
        .iter()
        .map(|m| m.as_str())
        .filter(|m| !own.contains(m))
        .collect()
}
