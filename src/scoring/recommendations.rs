//! Recommendation templates and selection.
//!
//! Recommendations are fixed text, never generated. Up to three come from
//! the maturity level's list, then dimension-specific priorities fill the
//! remaining slots for dimensions scoring below 50, weakest first, until
//! the list holds seven entries.

use super::levels::MaturityLevel;
use super::result::DimensionScore;
use crate::catalog;

/// Maximum recommendations in a result
pub const MAX_RECOMMENDATIONS: usize = 7;

/// Maximum recommendations drawn from the maturity level list
const MAX_LEVEL_RECOMMENDATIONS: usize = 3;

/// Dimensions scoring below this pick up a priority recommendation
const PRIORITY_SCORE_CEILING: f64 = 50.0;

/// Static recommendations for each maturity level.
#[must_use]
pub fn level_recommendations(level: MaturityLevel) -> &'static [&'static str] {
    match level {
        MaturityLevel::Exploring => &[
            "Identify two or three business problems where AI could plausibly help and estimate their value",
            "Assign an executive sponsor and a small cross-functional team to own AI exploration",
            "Inventory your data sources and assess their quality before committing to pilots",
        ],
        MaturityLevel::Experimenting => &[
            "Graduate your most successful pilot to production with defined service ownership",
            "Standardize how pilots are selected, measured, and retired to avoid proof-of-concept sprawl",
            "Invest in shared data infrastructure so each new pilot stops rebuilding its own pipeline",
        ],
        MaturityLevel::Scaling => &[
            "Establish a central platform team providing shared tooling, deployment paths, and monitoring",
            "Formalize model governance with documented review gates for risk, privacy, and compliance",
            "Build an internal training program so adoption is not limited to specialist teams",
        ],
        MaturityLevel::Optimizing => &[
            "Automate retraining and monitoring so production models improve without manual intervention",
            "Measure portfolio-level return of AI initiatives and rebalance investment regularly",
            "Share playbooks and reusable components across business units to compound capabilities",
        ],
    }
}

/// Priority recommendation for a low-scoring dimension, if one exists.
#[must_use]
pub fn dimension_recommendation(dimension_id: &str) -> Option<&'static str> {
    match dimension_id {
        catalog::STRATEGY_VISION => Some(
            "Priority: define an AI strategy with executive sponsorship and measurable business outcomes",
        ),
        catalog::DATA_INFRASTRUCTURE => Some(
            "Priority: consolidate critical data and establish quality standards before expanding AI workloads",
        ),
        catalog::TECHNOLOGY_TOOLS => Some(
            "Priority: adopt a managed machine learning platform to shorten the path from prototype to production",
        ),
        catalog::TALENT_SKILLS => Some(
            "Priority: hire or develop dedicated AI practitioners and train adjacent technical staff",
        ),
        catalog::GOVERNANCE_ETHICS => Some(
            "Priority: stand up a review process covering risk, privacy, and compliance for every AI initiative",
        ),
        catalog::CULTURE_ADOPTION => Some(
            "Priority: create structured channels for teams to propose, pilot, and adopt AI use cases",
        ),
        _ => None,
    }
}

/// Assemble the recommendation list for a scored assessment.
#[must_use]
pub fn generate(level: MaturityLevel, dimensions: &[&DimensionScore]) -> Vec<String> {
    let mut recommendations: Vec<String> = level_recommendations(level)
        .iter()
        .take(MAX_LEVEL_RECOMMENDATIONS)
        .map(|s| (*s).to_string())
        .collect();

    // Weakest dimensions first; sort_by is stable so catalog order breaks ties
    let mut by_score: Vec<&DimensionScore> = dimensions.to_vec();
    by_score.sort_by(|a, b| a.score.total_cmp(&b.score));

    for dimension in by_score {
        if recommendations.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        if dimension.score < PRIORITY_SCORE_CEILING {
            if let Some(template) = dimension_recommendation(&dimension.dimension_id) {
                recommendations.push(template.to_string());
            }
        }
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
