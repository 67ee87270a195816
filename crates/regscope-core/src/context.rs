//! # Product Context: The Subject of Evaluation
//!
//! The [`ProductContext`] is the structured description of an AI product that
//! every jurisdiction module evaluates. It is built by an external intake
//! collaborator and is read-only from the engine's perspective: every
//! operation takes `&ProductContext`.
//!
//! ```text
//! ProductContext
//! ├── description / product_type
//! ├── data_processed        (set of DataCategory)
//! ├── user_populations      (set of UserPopulation)
//! ├── decision_impact       (advisory < material < determinative)
//! ├── automation_level
//! ├── target_markets        (ordered, drives module invocation)
//! └── optional sub-contexts
//!     ├── generative_ai_context
//!     ├── agentic_ai_context
//!     ├── sector_context (+ financial_services)
//!     ├── training_data
//!     ├── gpai_info
//!     └── existing_measures
//! ```
//!
//! Sets are `BTreeSet` so iteration order, and therefore evidence strings,
//! are deterministic.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::JurisdictionId;

// ---------------------------------------------------------------------------
// Closed enums
// ---------------------------------------------------------------------------

/// What kind of AI system the product is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    Classifier,
    Generator,
    Recommender,
    Predictor,
    Detector,
    Ranker,
    Agent,
    FoundationModel,
    Other,
}

impl ProductType {
    /// Wire name of the product type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classifier => "classifier",
            Self::Generator => "generator",
            Self::Recommender => "recommender",
            Self::Predictor => "predictor",
            Self::Detector => "detector",
            Self::Ranker => "ranker",
            Self::Agent => "agent",
            Self::FoundationModel => "foundation-model",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of data the product ingests or produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataCategory {
    Personal,
    Sensitive,
    Biometric,
    Health,
    Financial,
    Location,
    Minor,
    Aggregated,
    Behavioral,
    Genetic,
    Criminal,
    Employment,
    Anonymized,
}

impl DataCategory {
    /// Wire name of the data category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Sensitive => "sensitive",
            Self::Biometric => "biometric",
            Self::Health => "health",
            Self::Financial => "financial",
            Self::Location => "location",
            Self::Minor => "minor",
            Self::Aggregated => "aggregated",
            Self::Behavioral => "behavioral",
            Self::Genetic => "genetic",
            Self::Criminal => "criminal",
            Self::Employment => "employment",
            Self::Anonymized => "anonymized",
        }
    }

    /// True for categories that identify or relate to a natural person.
    ///
    /// `Aggregated` and `Anonymized` are the only categories that are not.
    pub fn is_personal(&self) -> bool {
        !matches!(self, Self::Aggregated | Self::Anonymized)
    }

    /// True for special-category data (GDPR Art. 9 and equivalents).
    pub fn is_special_category(&self) -> bool {
        matches!(
            self,
            Self::Sensitive | Self::Biometric | Self::Health | Self::Genetic | Self::Criminal
        )
    }
}

impl std::fmt::Display for DataCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A population of people the product's outputs affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserPopulation {
    Consumers,
    JobApplicants,
    Employees,
    Minors,
    CreditApplicants,
    Tenants,
    Students,
    Patients,
    GeneralPublic,
    InternalUsers,
    InsuranceApplicants,
    BenefitRecipients,
}

impl UserPopulation {
    /// Wire name of the population.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consumers => "consumers",
            Self::JobApplicants => "job-applicants",
            Self::Employees => "employees",
            Self::Minors => "minors",
            Self::CreditApplicants => "credit-applicants",
            Self::Tenants => "tenants",
            Self::Students => "students",
            Self::Patients => "patients",
            Self::GeneralPublic => "general-public",
            Self::InternalUsers => "internal-users",
            Self::InsuranceApplicants => "insurance-applicants",
            Self::BenefitRecipients => "benefit-recipients",
        }
    }
}

impl std::fmt::Display for UserPopulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much weight the product's output carries in the final decision.
///
/// Ordered: `Advisory < Material < Determinative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionImpact {
    /// Output informs a human who decides independently.
    Advisory,
    /// Output is a substantial factor in the decision.
    Material,
    /// Output is the decision.
    Determinative,
}

impl DecisionImpact {
    /// Wire name of the impact level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Advisory => "advisory",
            Self::Material => "material",
            Self::Determinative => "determinative",
        }
    }
}

/// Degree of human involvement in the product's decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutomationLevel {
    HumanInTheLoop,
    HumanOnTheLoop,
    FullyAutomated,
}

impl AutomationLevel {
    /// Wire name of the automation level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HumanInTheLoop => "human-in-the-loop",
            Self::HumanOnTheLoop => "human-on-the-loop",
            Self::FullyAutomated => "fully-automated",
        }
    }
}

/// Autonomy granted to an agentic system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutonomyLevel {
    /// Every action is approved by a human.
    Supervised,
    /// Acts independently within pre-set limits.
    Bounded,
    /// Acts independently without pre-set limits.
    Autonomous,
}

impl AutonomyLevel {
    /// Wire name of the autonomy level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supervised => "supervised",
            Self::Bounded => "bounded",
            Self::Autonomous => "autonomous",
        }
    }
}

/// Industry sector the product is deployed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    FinancialServices,
    Healthcare,
    Employment,
    Education,
    Insurance,
    Housing,
    CriticalInfrastructure,
    LawEnforcement,
    Government,
    Legal,
    Retail,
    Media,
    Transportation,
    Other,
}

impl Sector {
    /// Wire name of the sector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FinancialServices => "financial-services",
            Self::Healthcare => "healthcare",
            Self::Employment => "employment",
            Self::Education => "education",
            Self::Insurance => "insurance",
            Self::Housing => "housing",
            Self::CriticalInfrastructure => "critical-infrastructure",
            Self::LawEnforcement => "law-enforcement",
            Self::Government => "government",
            Self::Legal => "legal",
            Self::Retail => "retail",
            Self::Media => "media",
            Self::Transportation => "transportation",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A financial service the product supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinancialService {
    CreditUnderwriting,
    InsurancePricing,
    FraudDetection,
    AlgorithmicTrading,
    AmlScreening,
    RoboAdvice,
    Payments,
}

impl FinancialService {
    /// Wire name of the service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditUnderwriting => "credit-underwriting",
            Self::InsurancePricing => "insurance-pricing",
            Self::FraudDetection => "fraud-detection",
            Self::AlgorithmicTrading => "algorithmic-trading",
            Self::AmlScreening => "aml-screening",
            Self::RoboAdvice => "robo-advice",
            Self::Payments => "payments",
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-contexts
// ---------------------------------------------------------------------------

/// Details for products that generate content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerativeAiContext {
    pub generates_text: bool,
    pub generates_images: bool,
    pub generates_audio: bool,
    pub generates_video: bool,
    pub generates_code: bool,
    /// Can produce realistic depictions of real people or events.
    pub can_generate_deepfakes: bool,
    /// Outputs carry a machine-readable provenance mark.
    pub outputs_watermarked: bool,
    /// Outputs are served directly to members of the public.
    pub public_facing: bool,
}

impl GenerativeAiContext {
    /// True when the product emits image, audio or video content.
    pub fn generates_synthetic_media(&self) -> bool {
        self.generates_images || self.generates_audio || self.generates_video
    }
}

/// Details for products that act on behalf of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgenticAiContext {
    pub is_agentic: bool,
    pub autonomy_level: AutonomyLevel,
    #[serde(default)]
    pub can_make_financial_transactions: bool,
    #[serde(default)]
    pub can_access_external_systems: bool,
    #[serde(default)]
    pub can_modify_records: bool,
    #[serde(default)]
    pub can_communicate_externally: bool,
}

impl AgenticAiContext {
    /// An agent with the given autonomy and no extra capabilities.
    pub fn new(autonomy_level: AutonomyLevel) -> Self {
        Self {
            is_agentic: true,
            autonomy_level,
            can_make_financial_transactions: false,
            can_access_external_systems: false,
            can_modify_records: false,
            can_communicate_externally: false,
        }
    }
}

/// Financial-services detail nested under [`SectorContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialServicesContext {
    pub services: BTreeSet<FinancialService>,
    pub uses_credit_scoring: bool,
}

/// Sector the product is deployed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorContext {
    pub sector: Sector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_services: Option<FinancialServicesContext>,
}

impl SectorContext {
    pub fn new(sector: Sector) -> Self {
        Self {
            sector,
            financial_services: None,
        }
    }

    /// Financial-services detail for this sector.
    pub fn with_financial_services(mut self, fs: FinancialServicesContext) -> Self {
        self.financial_services = Some(fs);
        self
    }
}

/// Provenance of the product's training data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingDataContext {
    pub uses_personal_data: bool,
    pub uses_copyrighted_material: bool,
    pub uses_scraped_data: bool,
    pub provenance_documented: bool,
    pub sources: Vec<String>,
}

/// General-purpose AI model information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GpaiInfo {
    pub is_gpai_model: bool,
    pub is_open_source: bool,
    /// Cumulative training compute in floating-point operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_compute_flops: Option<f64>,
    /// The model has been formally designated as carrying systemic risk.
    pub systemic_risk_designated: bool,
}

/// Compliance measures the product team already operates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExistingMeasures {
    pub bias_testing: bool,
    pub human_oversight: bool,
    pub risk_management_system: bool,
    pub impact_assessment: bool,
    pub transparency_notice: bool,
    pub content_labeling: bool,
    pub consent_mechanism: bool,
    pub incident_response: bool,
}

// ---------------------------------------------------------------------------
// ProductContext
// ---------------------------------------------------------------------------

/// Structured, read-only description of the AI product being evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductContext {
    pub description: String,
    pub product_type: ProductType,
    #[serde(default)]
    pub data_processed: BTreeSet<DataCategory>,
    #[serde(default)]
    pub user_populations: BTreeSet<UserPopulation>,
    pub decision_impact: DecisionImpact,
    pub automation_level: AutomationLevel,
    /// Jurisdictions to evaluate, in evaluation order.
    pub target_markets: Vec<JurisdictionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generative_ai_context: Option<GenerativeAiContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agentic_ai_context: Option<AgenticAiContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_context: Option<SectorContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data: Option<TrainingDataContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpai_info: Option<GpaiInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_measures: Option<ExistingMeasures>,
}

impl ProductContext {
    /// A context with empty data/population sets, advisory impact, human
    /// in the loop, and no sub-contexts.
    pub fn new(
        description: impl Into<String>,
        product_type: ProductType,
        target_markets: Vec<JurisdictionId>,
    ) -> Self {
        Self {
            description: description.into(),
            product_type,
            data_processed: BTreeSet::new(),
            user_populations: BTreeSet::new(),
            decision_impact: DecisionImpact::Advisory,
            automation_level: AutomationLevel::HumanInTheLoop,
            target_markets,
            generative_ai_context: None,
            agentic_ai_context: None,
            sector_context: None,
            training_data: None,
            gpai_info: None,
            existing_measures: None,
        }
    }

    pub fn with_data(mut self, categories: impl IntoIterator<Item = DataCategory>) -> Self {
        self.data_processed.extend(categories);
        self
    }

    pub fn with_populations(
        mut self,
        populations: impl IntoIterator<Item = UserPopulation>,
    ) -> Self {
        self.user_populations.extend(populations);
        self
    }

    pub fn with_decision_impact(mut self, impact: DecisionImpact) -> Self {
        self.decision_impact = impact;
        self
    }

    pub fn with_automation(mut self, level: AutomationLevel) -> Self {
        self.automation_level = level;
        self
    }

    pub fn with_generative(mut self, ctx: GenerativeAiContext) -> Self {
        self.generative_ai_context = Some(ctx);
        self
    }

    pub fn with_agentic(mut self, ctx: AgenticAiContext) -> Self {
        self.agentic_ai_context = Some(ctx);
        self
    }

    pub fn with_sector(mut self, ctx: SectorContext) -> Self {
        self.sector_context = Some(ctx);
        self
    }

    pub fn with_training_data(mut self, ctx: TrainingDataContext) -> Self {
        self.training_data = Some(ctx);
        self
    }

    pub fn with_gpai(mut self, info: GpaiInfo) -> Self {
        self.gpai_info = Some(info);
        self
    }

    pub fn with_existing_measures(mut self, measures: ExistingMeasures) -> Self {
        self.existing_measures = Some(measures);
        self
    }

    /// Check the preconditions the intake builder is responsible for.
    ///
    /// The engine never calls this implicitly; it is offered so callers can
    /// reject malformed input before mapping.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::BlankDescription);
        }
        if self.target_markets.is_empty() {
            return Err(ValidationError::EmptyTargetMarkets);
        }
        let mut seen = HashSet::new();
        for market in &self.target_markets {
            if !seen.insert(market.as_str()) {
                return Err(ValidationError::DuplicateTargetMarket(
                    market.as_str().to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Parse a context from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input or unknown enum values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
