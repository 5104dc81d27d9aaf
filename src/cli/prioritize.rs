//! Implementation of the `prioritize` command.
//!
//! Ranks AI use cases for a sector, either the built-in templates or a
//! caller-supplied list, optionally informed by a saved assessment result.

use std::path::PathBuf;

use super::{exit_codes, resolve_format, should_use_color, write_output, OutputTarget};
use crate::catalog::Sector;
use crate::config::{AppConfig, Validatable};
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use crate::scoring::AssessmentResult;
use crate::usecase::{load_use_cases, UseCasePrioritizer};

/// Configuration for the `prioritize` command.
#[derive(Debug, Clone)]
pub struct PrioritizeConfig {
    /// Sector override
    pub sector: Option<String>,
    /// Path to a custom use case file; templates are used when absent
    pub use_cases_path: Option<PathBuf>,
    /// Path to a saved assessment result used as a readiness signal
    pub assessment_path: Option<PathBuf>,
    /// Include per-case detail in the report
    pub show_details: bool,
    /// Merged application configuration
    pub app: AppConfig,
}

/// Run the prioritize command. Returns the process exit code.
pub fn run_prioritize(config: PrioritizeConfig) -> anyhow::Result<i32> {
    let config_errors = config.app.validate();
    if !config_errors.is_empty() {
        for error in &config_errors {
            tracing::error!("Invalid configuration: {error}");
        }
        return Ok(exit_codes::INVALID_INPUT);
    }

    let custom_use_cases = match &config.use_cases_path {
        Some(path) => match load_use_cases(path) {
            Ok(cases) => cases,
            Err(e) => {
                tracing::error!("Failed to load {}: {e}", path.display());
                return Ok(exit_codes::INVALID_INPUT);
            }
        },
        None => Vec::new(),
    };

    let assessment: Option<AssessmentResult> = match &config.assessment_path {
        Some(path) => match AssessmentResult::from_file(path) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!("Failed to load {}: {e}", path.display());
                return Ok(exit_codes::INVALID_INPUT);
            }
        },
        None => None,
    };

    // CLI flag beats the saved assessment, which beats the configured default
    let sector = config
        .sector
        .as_deref()
        .map(Sector::from_input)
        .or(assessment.as_ref().map(|a| a.sector))
        .unwrap_or_else(|| Sector::from_input(&config.app.assessment.default_sector));

    let prioritizer = UseCasePrioritizer::with_weights(config.app.prioritization.weights)?;
    let result = prioritizer.prioritize(sector, assessment.as_ref(), custom_use_cases);

    tracing::info!(
        sector = %sector,
        cases = result.ranked.len(),
        "Prioritized use cases"
    );

    let target = OutputTarget::from_option(config.app.output.file.clone());
    let format = resolve_format(config.app.output.format);
    let use_color = should_use_color(config.app.output.no_color, &target);
    let reporter = create_reporter_with_options(format, use_color);

    let mut metadata = ReportMetadata::new();
    metadata.input_path = config
        .use_cases_path
        .as_ref()
        .or(config.assessment_path.as_ref())
        .map(|p| p.display().to_string());
    let report_config = ReportConfig {
        title: None,
        include_details: config.show_details,
        include_recommendations: true,
        metadata,
    };

    let rendered = reporter.generate_prioritization_report(&result, &report_config)?;
    write_output(&rendered, &target, config.app.behavior.quiet)?;

    Ok(exit_codes::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================
