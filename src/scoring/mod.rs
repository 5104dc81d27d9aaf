//! Maturity scoring and classification.
//!
//! Turns a validated response set into a complete assessment: weighted
//! dimension scores, an overall score, maturity level and grade, extracted
//! strengths and gaps, and prioritized recommendations.
//!
//! # Features
//!
//! - **Weighted aggregation**: per-dimension means normalized to 0-100 and
//!   combined by configurable dimension weights
//! - **Threshold classification**: maturity levels and letter grades from
//!   descending threshold tables
//! - **Signal extraction**: per-dimension strengths and improvement areas
//!   pulled from individual responses
//! - **Recommendations**: static, deterministic guidance keyed by maturity
//!   level and weak dimensions
//!
//! # Usage
//!
//! ```no_run
//! use maturity_tools::catalog::{ResponseSet, Sector};
//! use maturity_tools::scoring::MaturityScorer;
//!
//! let scorer = MaturityScorer::new(Sector::General).unwrap();
//! let responses = ResponseSet::from_pairs([("strategy_1", 4), ("data_1", 2)]).unwrap();
//! let result = scorer.score(&responses, "Acme Corp", "demo-1");
//!
//! println!("Overall: {}/100 ({})", result.overall_score, result.maturity_level);
//! for rec in &result.recommendations {
//!     println!("- {rec}");
//! }
//! ```

mod engine;
mod levels;
mod recommendations;
mod result;

pub(crate) use engine::round1;
pub use engine::MaturityScorer;
pub use levels::{Grade, MaturityLevel};
pub use recommendations::{
    dimension_recommendation, generate as generate_recommendations, level_recommendations,
    MAX_RECOMMENDATIONS,
};
pub use result::{AssessmentResult, DimensionScore};
