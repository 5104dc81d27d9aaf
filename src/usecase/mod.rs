//! Use case prioritization.
//!
//! Ranks candidate AI use cases with a weighted multi-criteria score over
//! five sub-scores: business value category, feasibility, data readiness,
//! complexity, and time to value. The same descending-threshold style used
//! for maturity classification assigns each case a priority tier.
//!
//! Prioritization runs independently of scoring, but can consume an
//! assessment result as one input signal: when ranking the built-in
//! templates, the organization's data dimension score replaces each
//! template's assumed data readiness.

mod templates;

pub use templates::templates_for_sector;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{self, Sector};
use crate::error::{InputErrorKind, MaturityError, Result};
use crate::scoring::{round1, AssessmentResult};

/// Tolerance when checking that priority weights sum to 1
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Business value category of a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ValueCategory {
    RevenueGrowth,
    CostReduction,
    RiskMitigation,
    CustomerExperience,
    OperationalEfficiency,
}

impl ValueCategory {
    /// Fixed sub-score for this category
    #[must_use]
    pub const fn score(&self) -> f64 {
        match self {
            Self::RevenueGrowth => 90.0,
            Self::CustomerExperience => 85.0,
            Self::CostReduction => 80.0,
            Self::OperationalEfficiency => 75.0,
            Self::RiskMitigation => 70.0,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RevenueGrowth => "Revenue Growth",
            Self::CostReduction => "Cost Reduction",
            Self::RiskMitigation => "Risk Mitigation",
            Self::CustomerExperience => "Customer Experience",
            Self::OperationalEfficiency => "Operational Efficiency",
        }
    }
}

/// Feasibility tier of a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Feasibility {
    High,
    Medium,
    Low,
}

impl Feasibility {
    /// Fixed sub-score for this tier
    #[must_use]
    pub const fn score(&self) -> f64 {
        match self {
            Self::High => 90.0,
            Self::Medium => 60.0,
            Self::Low => 30.0,
        }
    }
}

/// A candidate AI use case before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCase {
    /// Short name, unique within a candidate list
    pub name: String,
    /// One-line description
    #[serde(default)]
    pub description: String,
    /// Business value category
    pub value_category: ValueCategory,
    /// Feasibility tier
    pub feasibility: Feasibility,
    /// Data readiness, 1 (none usable) to 10 (production quality)
    pub data_readiness: u8,
    /// Implementation complexity, 1 (trivial) to 10 (multi-year)
    pub complexity: u8,
    /// Descriptive time-to-value bucket, e.g. "3-6 months"
    pub time_to_value: String,
}

impl UseCase {
    /// Create a use case
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        value_category: ValueCategory,
        feasibility: Feasibility,
        data_readiness: u8,
        complexity: u8,
        time_to_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value_category,
            feasibility,
            data_readiness,
            complexity,
            time_to_value: time_to_value.into(),
        }
    }

    /// Check the 1..=10 range invariants on numeric fields.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("data_readiness", self.data_readiness),
            ("complexity", self.complexity),
        ] {
            if !(1..=10).contains(&value) {
                return Err(MaturityError::input(
                    "use case validation",
                    InputErrorKind::UseCaseFieldOutOfRange {
                        name: self.name.clone(),
                        field,
                        value: i64::from(value),
                    },
                ));
            }
        }
        Ok(())
    }
}

/// Shape of a use case file: a bare array or an object with a
/// `use_cases` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UseCaseDocument {
    Bare(Vec<UseCase>),
    Keyed { use_cases: Vec<UseCase> },
}

/// Load candidate use cases from a JSON or YAML file.
///
/// Every entry is range-validated before any are returned, so a single
/// malformed case rejects the whole file.
pub fn load_use_cases(path: &Path) -> Result<Vec<UseCase>> {
    let content = std::fs::read_to_string(path).map_err(|e| MaturityError::io(path, e))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let document: UseCaseDocument = match extension.as_str() {
        "json" => serde_json::from_str(&content)?,
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        other => {
            return Err(MaturityError::input(
                format!("loading {}", path.display()),
                InputErrorKind::UnsupportedFormat(other.to_string()),
            ))
        }
    };

    let cases = match document {
        UseCaseDocument::Bare(cases) | UseCaseDocument::Keyed { use_cases: cases } => cases,
    };
    for case in &cases {
        case.validate()?;
    }
    Ok(cases)
}

/// Priority tier assigned after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum PriorityTier {
    /// High score, high feasibility, manageable complexity
    QuickWin,
    /// Strong score, worth a funded program
    Strategic,
    /// Moderate score, builds capability for later waves
    FoundationBuilder,
    /// Revisit when maturity or data improves
    Future,
}

impl PriorityTier {
    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::QuickWin => "Quick Win",
            Self::Strategic => "Strategic",
            Self::FoundationBuilder => "Foundation Builder",
            Self::Future => "Future",
        }
    }
}

/// Weights over the five sub-scores. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PriorityWeights {
    pub business_value: f64,
    pub feasibility: f64,
    pub data_readiness: f64,
    pub complexity: f64,
    pub time_to_value: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            business_value: 0.30,
            feasibility: 0.25,
            data_readiness: 0.15,
            complexity: 0.15,
            time_to_value: 0.15,
        }
    }
}

impl PriorityWeights {
    /// Validate that weights are non-negative and sum to 1.
    pub fn validate(&self) -> Result<()> {
        let entries = [
            ("business_value", self.business_value),
            ("feasibility", self.feasibility),
            ("data_readiness", self.data_readiness),
            ("complexity", self.complexity),
            ("time_to_value", self.time_to_value),
        ];
        for (name, value) in entries {
            if value < 0.0 {
                return Err(MaturityError::config(format!(
                    "priority weight '{name}' is negative: {value}"
                )));
            }
        }
        let sum: f64 = entries.iter().map(|(_, v)| v).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MaturityError::config(format!(
                "priority weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// A use case with its derived priority score and tier.
///
/// Only the prioritizer constructs these; re-ranking builds fresh values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedUseCase {
    #[serde(flatten)]
    pub use_case: UseCase,
    /// Weighted score, 0 to 100, one decimal
    pub priority_score: f64,
    /// Tier from the decision tree
    pub priority_tier: PriorityTier,
}

/// Complete output of one prioritization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct PrioritizationResult {
    /// Sector whose templates were used (or that custom cases were ranked for)
    pub sector: Sector,
    /// Use cases in descending priority order
    pub ranked: Vec<PrioritizedUseCase>,
    /// Suggested order of attack: up to two quick wins, two strategic
    /// cases, one foundation builder
    pub recommended_sequence: Vec<String>,
}

impl PrioritizationResult {
    /// Cases in a given tier, ranked order
    pub fn in_tier(&self, tier: PriorityTier) -> impl Iterator<Item = &PrioritizedUseCase> {
        self.ranked.iter().filter(move |c| c.priority_tier == tier)
    }

    /// Count of cases per tier, ranked tier order
    #[must_use]
    pub fn tier_counts(&self) -> IndexMap<PriorityTier, usize> {
        let mut counts = IndexMap::new();
        for tier in [
            PriorityTier::QuickWin,
            PriorityTier::Strategic,
            PriorityTier::FoundationBuilder,
            PriorityTier::Future,
        ] {
            let count = self.in_tier(tier).count();
            if count > 0 {
                counts.insert(tier, count);
            }
        }
        counts
    }
}

/// Time-to-value buckets, matched by substring in order. First match wins,
/// so "12-18" is tested before the bare "18".
const TIME_TO_VALUE_BUCKETS: [(&str, f64); 5] = [
    ("0-3", 95.0),
    ("3-6", 80.0),
    ("6-12", 60.0),
    ("12-18", 45.0),
    ("18", 30.0),
];

/// Sub-score for unrecognized time-to-value text
const TIME_TO_VALUE_DEFAULT: f64 = 50.0;

fn time_to_value_score(text: &str) -> f64 {
    for (pattern, score) in TIME_TO_VALUE_BUCKETS {
        if text.contains(pattern) {
            return score;
        }
    }
    TIME_TO_VALUE_DEFAULT
}

/// Derive data readiness from a 0-100 data dimension score.
fn derived_data_readiness(score: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let readiness = (score / 10.0).round().clamp(1.0, 10.0) as u8;
    readiness
}

/// Ranks use cases by weighted multi-criteria score.
#[derive(Debug, Clone)]
pub struct UseCasePrioritizer {
    weights: PriorityWeights,
}

impl Default for UseCasePrioritizer {
    fn default() -> Self {
        Self::new()
    }
}

impl UseCasePrioritizer {
    /// Create a prioritizer with the default weights
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: PriorityWeights::default(),
        }
    }

    /// Create a prioritizer with custom weights, validating them.
    pub fn with_weights(weights: PriorityWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// The weights in effect
    #[must_use]
    pub fn weights(&self) -> &PriorityWeights {
        &self.weights
    }

    /// Rank use cases for a sector.
    ///
    /// An empty `custom_use_cases` list means the sector's templates are
    /// ranked. When an assessment result is supplied alongside templates,
    /// each template's data readiness is replaced by a value derived from
    /// the organization's data dimension score; custom cases always keep
    /// the readiness their author stated.
    pub fn prioritize(
        &self,
        sector: Sector,
        assessment: Option<&AssessmentResult>,
        custom_use_cases: Vec<UseCase>,
    ) -> PrioritizationResult {
        let using_templates = custom_use_cases.is_empty();
        let mut cases = if using_templates {
            templates_for_sector(sector)
        } else {
            custom_use_cases
        };

        if using_templates {
            if let Some(result) = assessment {
                if let Some(data) = result.dimension(catalog::DATA_INFRASTRUCTURE) {
                    let readiness = derived_data_readiness(data.score);
                    tracing::debug!(
                        readiness,
                        data_score = data.score,
                        "Deriving template data readiness from assessment"
                    );
                    for case in &mut cases {
                        case.data_readiness = readiness;
                    }
                }
            }
        }

        let mut ranked: Vec<PrioritizedUseCase> = cases
            .into_iter()
            .map(|use_case| {
                let priority_score = self.priority_score(&use_case);
                let priority_tier = tier_for(priority_score, &use_case);
                PrioritizedUseCase {
                    use_case,
                    priority_score,
                    priority_tier,
                }
            })
            .collect();

        // Stable sort: ties keep their original template order
        ranked.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

        let recommended_sequence = recommended_sequence(&ranked);

        PrioritizationResult {
            sector,
            ranked,
            recommended_sequence,
        }
    }

    /// Weighted priority score for one use case.
    #[must_use]
    pub fn priority_score(&self, use_case: &UseCase) -> f64 {
        let w = &self.weights;
        let business_value = use_case.value_category.score();
        let feasibility = use_case.feasibility.score();
        let data_readiness = f64::from(use_case.data_readiness) * 10.0;
        let complexity = f64::from(10u8.saturating_sub(use_case.complexity)) * 10.0;
        let time_to_value = time_to_value_score(&use_case.time_to_value);

        round1(
            business_value * w.business_value
                + feasibility * w.feasibility
                + data_readiness * w.data_readiness
                + complexity * w.complexity
                + time_to_value * w.time_to_value,
        )
    }
}

/// Tier decision tree, evaluated top to bottom.
fn tier_for(score: f64, use_case: &UseCase) -> PriorityTier {
    if score >= 70.0 && use_case.feasibility == Feasibility::High && use_case.complexity <= 5 {
        PriorityTier::QuickWin
    } else if score >= 60.0 {
        PriorityTier::Strategic
    } else if score >= 45.0 && use_case.feasibility != Feasibility::Low {
        PriorityTier::FoundationBuilder
    } else {
        PriorityTier::Future
    }
}

/// First two quick wins, first two strategic cases, first foundation
/// builder, in that tier order.
fn recommended_sequence(ranked: &[PrioritizedUseCase]) -> Vec<String> {
    let mut sequence = Vec::with_capacity(5);
    for (tier, take) in [
        (PriorityTier::QuickWin, 2),
        (PriorityTier::Strategic, 2),
        (PriorityTier::FoundationBuilder, 1),
    ] {
        sequence.extend(
            ranked
                .iter()
                .filter(|c| c.priority_tier == tier)
                .take(take)
                .map(|c| c.use_case.name.clone()),
        );
    }
    sequence
}
