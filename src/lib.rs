//! **A library for scoring and classifying organizational AI maturity.**
//!
//! `maturity-tools` turns questionnaire responses into a weighted maturity
//! score across six dimensions, classifies the result into a maturity level
//! and letter grade, compares organizations against sector benchmarks, and
//! ranks candidate AI use cases by priority. It powers both a command-line
//! interface (CLI) for direct use and a Rust library for programmatic
//! integration into your own applications.
//!
//! ## Key Features
//!
//! - **Weighted Dimension Scoring**: Normalizes 1-5 questionnaire responses
//!   into 0-100 dimension scores and a weighted overall score. Partial
//!   submissions degrade gracefully instead of failing.
//! - **Maturity Classification**: Maps scores onto four maturity levels
//!   (Exploring, Experimenting, Scaling, Optimizing) and letter grades A-F.
//! - **Sector Awareness**: Six sector catalogs (general, healthcare, finance,
//!   retail, manufacturing, technology) with sector-specific questions and
//!   benchmark tables.
//! - **Use Case Prioritization**: Ranks AI use cases with a weighted
//!   multi-criteria score and assigns Quick Win / Strategic / Foundation
//!   Builder / Future tiers.
//! - **Flexible Reporting**: Generates reports as structured JSON, a colored
//!   terminal summary, or Markdown.
//!
//! ## Core Concepts & Modules
//!
//! - **[`catalog`]**: The static question bank. A [`QuestionCatalog`] holds
//!   dimensions with weights and questions; [`ResponseSet`] is the validated
//!   form of a submission the scorer consumes.
//! - **[`scoring`]**: Home of the [`MaturityScorer`], which turns a response
//!   set into an [`AssessmentResult`] with dimension scores, roll-ups, and
//!   recommendations.
//! - **[`benchmark`]**: Sector benchmark tables and the comparison logic
//!   that places a result relative to its sector's average and quartiles.
//! - **[`usecase`]**: The [`UseCasePrioritizer`] and the built-in sector
//!   use case templates.
//! - **[`reports`]**: Report generators for every supported output format.
//! - **[`config`]**: Layered configuration: YAML config files discovered on
//!   disk, merged with CLI overrides.
//!
//! ## Getting Started: Scoring an Assessment
//!
//! ```
//! use maturity_tools::{MaturityScorer, ResponseSet, Sector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scorer = MaturityScorer::new(Sector::General)?;
//!     let responses = ResponseSet::from_pairs([
//!         ("strategy_1", 4),
//!         ("strategy_2", 3),
//!         ("data_1", 2),
//!     ])?;
//!
//!     let result = scorer.score(&responses, "Acme Corp", "q3-review");
//!
//!     println!(
//!         "Overall: {:.1}/100, level {}",
//!         result.overall_score,
//!         result.maturity_level.name()
//!     );
//!     for scored in result.dimension_scores.values() {
//!         println!("  {}: {:.1}/100", scored.name, scored.score);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Examples
//!
//! ### Comparing Against Sector Benchmarks
//!
//! ```
//! use maturity_tools::{benchmark, MaturityScorer, ResponseSet, Sector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scorer = MaturityScorer::new(Sector::Finance)?;
//!     let responses = ResponseSet::from_pairs([("strategy_1", 5), ("data_1", 4)])?;
//!     let result = scorer.score(&responses, "Acme Bank", "fin-1");
//!
//!     let comparison = benchmark::compare(&result, Sector::Finance);
//!     println!(
//!         "{:.1} vs sector average {:.1} ({:+.1})",
//!         comparison.overall.score, comparison.overall.benchmark.average, comparison.overall.delta
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Prioritizing Use Cases
//!
//! ```
//! use maturity_tools::{Sector, UseCasePrioritizer};
//!
//! let prioritizer = UseCasePrioritizer::new();
//! let ranking = prioritizer.prioritize(Sector::Retail, None, Vec::new());
//!
//! for case in &ranking.ranked {
//!     println!(
//!         "{:>5.1}  {:<12}  {}",
//!         case.priority_score,
//!         case.priority_tier.name(),
//!         case.use_case.name
//!     );
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `maturity-tools` library crate. If you are
//! looking for the command-line tool, please refer to the project's README
//! or install it via `cargo install maturity-tools`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Doc completeness: # Errors / # Panics sections are not written for
    // every fallible function
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Names like `score`/`scored` or `min`/`mean` are clear in context
    clippy::similar_names
)]

pub mod benchmark;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod reports;
pub mod scoring;
pub mod usecase;

// Re-export main types for convenience
pub use benchmark::{
    BenchmarkComparison, BenchmarkStats, QuartileBucket, RelativeStanding, StatComparison,
};
pub use catalog::{
    catalog_for_sector, standard_catalog, AssessmentInput, Dimension, Question, QuestionCatalog,
    ResponseSet, Sector,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{ErrorContext, MaturityError, Result};
pub use reports::{create_reporter, ReportFormat, ReportGenerator};
pub use scoring::{AssessmentResult, DimensionScore, Grade, MaturityLevel, MaturityScorer};
pub use usecase::{
    load_use_cases, Feasibility, PrioritizationResult, PrioritizedUseCase, PriorityTier,
    PriorityWeights, UseCase, UseCasePrioritizer, ValueCategory,
};
