//! Configuration types for maturity-tools operations.

use crate::reports::ReportFormat;
use crate::usecase::PriorityWeights;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration loaded from config files, CLI args,
/// or both (CLI overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Assessment configuration (sector, dimension weights)
    pub assessment: AssessmentConfig,
    /// Use case prioritization configuration
    pub prioritization: PrioritizationConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Assessment-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Sector used when the CLI does not name one. Unknown values fall
    /// back to "general" at resolution time.
    pub default_sector: String,
    /// Dimension weight overrides for the overall score. Dimensions not
    /// listed keep their catalog weight.
    pub dimension_weights: BTreeMap<String, f64>,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            default_sector: "general".to_string(),
            dimension_weights: BTreeMap::new(),
        }
    }
}

/// Prioritization settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PrioritizationConfig {
    /// Sub-score weights for use case ranking
    pub weights: PriorityWeights,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: auto, summary, json, markdown
    pub format: ReportFormat,
    /// Output file path (omit for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with a nonzero code when the overall score falls below this
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with a fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the default sector.
    pub fn default_sector(mut self, sector: impl Into<String>) -> Self {
        self.config.assessment.default_sector = sector.into();
        self
    }

    /// Set a dimension weight override.
    pub fn dimension_weight(mut self, dimension_id: impl Into<String>, weight: f64) -> Self {
        self.config
            .assessment
            .dimension_weights
            .insert(dimension_id.into(), weight);
        self
    }

    /// Set the prioritization weights.
    pub const fn priority_weights(mut self, weights: PriorityWeights) -> Self {
        self.config.prioritization.weights = weights;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the minimum acceptable overall score.
    pub const fn min_score(mut self, min_score: Option<f64>) -> Self {
        self.config.behavior.min_score = min_score;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.assessment.default_sector, "general");
        assert!(config.assessment.dimension_weights.is_empty());
        assert_eq!(config.output.format, ReportFormat::Auto);
        assert!(config.behavior.min_score.is_none());
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .default_sector("finance")
            .dimension_weight("strategy_vision", 0.4)
            .output_format(ReportFormat::Json)
            .min_score(Some(60.0))
            .quiet(true)
            .build();

        assert_eq!(config.assessment.default_sector, "finance");
        assert_eq!(
            config.assessment.dimension_weights.get("strategy_vision"),
            Some(&0.4)
        );
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.behavior.min_score, Some(60.0));
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig::builder()
            .default_sector("retail")
            .min_score(Some(50.0))
            .build();

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed: AppConfig =
            serde_yaml::from_str("assessment:\n  default_sector: healthcare\n").unwrap();
        assert_eq!(parsed.assessment.default_sector, "healthcare");
        assert_eq!(parsed.output.format, ReportFormat::Auto);
        assert!(!parsed.behavior.quiet);
    }
}
