//! Implementation of the `benchmark` command.
//!
//! Loads a previously saved assessment result, compares it against sector
//! benchmark tables, and renders the comparison.

use std::path::PathBuf;

use super::{exit_codes, resolve_format, should_use_color, write_output, OutputTarget};
use crate::benchmark;
use crate::catalog::Sector;
use crate::config::{AppConfig, Validatable};
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use crate::scoring::AssessmentResult;

/// Run the benchmark command. Returns the process exit code.
///
/// The sector defaults to the one recorded in the saved result; passing
/// one explicitly compares the same scores against a different table.
pub fn run_benchmark(
    result_path: PathBuf,
    sector: Option<String>,
    app: AppConfig,
) -> anyhow::Result<i32> {
    let config_errors = app.validate();
    if !config_errors.is_empty() {
        for error in &config_errors {
            tracing::error!("Invalid configuration: {error}");
        }
        return Ok(exit_codes::INVALID_INPUT);
    }

    let result = match AssessmentResult::from_file(&result_path) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Failed to load {}: {e}", result_path.display());
            return Ok(exit_codes::INVALID_INPUT);
        }
    };

    let sector = sector
        .as_deref()
        .map(Sector::from_input)
        .unwrap_or(result.sector);

    tracing::info!(
        organization = %result.organization_name,
        sector = %sector,
        "Comparing against sector benchmarks"
    );

    let comparison = benchmark::compare(&result, sector);
    let result = result.with_benchmark(comparison);

    let target = OutputTarget::from_option(app.output.file.clone());
    let format = resolve_format(app.output.format);
    let use_color = should_use_color(app.output.no_color, &target);
    let reporter = create_reporter_with_options(format, use_color);

    let mut metadata = ReportMetadata::new();
    metadata.input_path = Some(result_path.display().to_string());
    let report_config = ReportConfig {
        title: None,
        include_details: false,
        include_recommendations: false,
        metadata,
    };

    let rendered = reporter.generate_assessment_report(&result, &report_config)?;
    write_output(&rendered, &target, app.behavior.quiet)?;

    Ok(exit_codes::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================
