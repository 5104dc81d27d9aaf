//! Implementation of the `assess` command.
//!
//! Loads a response file, scores it against the sector catalog, optionally
//! attaches a benchmark comparison, and renders the result in the
//! configured format.

use chrono::Utc;
use indexmap::IndexMap;
use std::path::PathBuf;

use super::{exit_codes, resolve_format, should_use_color, write_output, OutputTarget};
use crate::benchmark;
use crate::catalog::{AssessmentInput, Sector};
use crate::config::{AppConfig, Validatable};
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use crate::scoring::MaturityScorer;

/// Configuration for the `assess` command, CLI arguments already merged
/// over file settings.
#[derive(Debug, Clone)]
pub struct AssessConfig {
    /// Path to the response file (.json, .yaml, .yml)
    pub input_path: PathBuf,
    /// Organization name override
    pub organization: Option<String>,
    /// Sector override
    pub sector: Option<String>,
    /// Assessment id override
    pub assessment_id: Option<String>,
    /// Attach a sector benchmark comparison to the result
    pub benchmark: bool,
    /// Include the recommendations section in the report
    pub show_recommendations: bool,
    /// Include per-dimension detail in the report
    pub show_details: bool,
    /// Merged application configuration
    pub app: AppConfig,
}

/// Run the assess command. Returns the process exit code.
pub fn run_assess(config: AssessConfig) -> anyhow::Result<i32> {
    let config_errors = config.app.validate();
    if !config_errors.is_empty() {
        for error in &config_errors {
            tracing::error!("Invalid configuration: {error}");
        }
        return Ok(exit_codes::INVALID_INPUT);
    }

    let input = match AssessmentInput::from_file(&config.input_path) {
        Ok(input) => input,
        Err(e) => {
            tracing::error!("Failed to load {}: {e}", config.input_path.display());
            return Ok(exit_codes::INVALID_INPUT);
        }
    };
    let responses = match input.validated_responses() {
        Ok(responses) => responses,
        Err(e) => {
            tracing::error!("Invalid responses in {}: {e}", config.input_path.display());
            return Ok(exit_codes::INVALID_INPUT);
        }
    };

    // CLI flag beats the input file, which beats the configured default
    let sector = config
        .sector
        .as_deref()
        .or(input.sector.as_deref())
        .map(Sector::from_input)
        .unwrap_or_else(|| Sector::from_input(&config.app.assessment.default_sector));

    let organization = config
        .organization
        .clone()
        .unwrap_or_else(|| input.organization_name.clone());
    let assessment_id = config
        .assessment_id
        .clone()
        .or_else(|| input.assessment_id.clone())
        .unwrap_or_else(generated_assessment_id);

    tracing::info!(
        organization = %organization,
        sector = %sector,
        answered = responses.len(),
        "Running assessment"
    );

    let mut scorer = MaturityScorer::new(sector)?;
    if !config.app.assessment.dimension_weights.is_empty() {
        let overrides: IndexMap<String, f64> = config
            .app
            .assessment
            .dimension_weights
            .iter()
            .map(|(id, weight)| (id.clone(), *weight))
            .collect();
        scorer = scorer.with_weight_overrides(overrides);
    }

    let mut result = scorer.score(&responses, &organization, &assessment_id);
    if config.benchmark {
        let comparison = benchmark::compare(&result, sector);
        result = result.with_benchmark(comparison);
    }

    let target = OutputTarget::from_option(config.app.output.file.clone());
    let format = resolve_format(config.app.output.format);
    let use_color = should_use_color(config.app.output.no_color, &target);
    let reporter = create_reporter_with_options(format, use_color);

    let mut metadata = ReportMetadata::new();
    metadata.input_path = Some(config.input_path.display().to_string());
    let report_config = ReportConfig {
        title: None,
        include_details: config.show_details,
        include_recommendations: config.show_recommendations,
        metadata,
    };

    let rendered = reporter.generate_assessment_report(&result, &report_config)?;
    write_output(&rendered, &target, config.app.behavior.quiet)?;

    if let Some(min_score) = config.app.behavior.min_score {
        if result.overall_score < min_score {
            tracing::warn!(
                "Overall score {:.1} is below the minimum {:.1}",
                result.overall_score,
                min_score
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}

/// Timestamp-derived id for submissions that carry none.
fn generated_assessment_id() -> String {
    format!("assess-{}", Utc::now().format("%Y%m%d%H%M%S"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn write_responses(dir: &TempDir, value: i64) -> PathBuf {
        let path = dir.path().join("responses.json");
        let responses: serde_json::Map<String, serde_json::Value> = crate::catalog::standard_catalog()
            .unwrap()
            .questions()
            .map(|q| (q.id.clone(), serde_json::json!(value)))
            .collect();
        let input = serde_json::json!({
            "organization_name": "Acme Corp",
            "responses": responses,
        });
        std::fs::write(&path, input.to_string()).unwrap();
        path
    }

    fn config_for(dir: &TempDir, input_path: PathBuf) -> AssessConfig {
        let output = dir.path().join("report.json");
        AssessConfig {
            input_path,
            organization: None,
            sector: None,
            assessment_id: Some("test-run".to_string()),
            benchmark: false,
            show_recommendations: true,
            show_details: false,
            app: AppConfig::builder()
                .output_format(ReportFormat::Json)
                .output_file(Some(output))
                .quiet(true)
                .build(),
        }
    }

    #[test]
    fn test_assess_writes_report_and_succeeds() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, write_responses(&dir, 4));

        let code = run_assess(config).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let report = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["assessment"]["organization_name"], "Acme Corp");
        assert_eq!(value["assessment"]["overall_score"], 75.0);
        assert_eq!(value["assessment"]["assessment_id"], "test-run");
    }

    #[test]
    fn test_assess_below_threshold_exit_code() {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(&dir, write_responses(&dir, 2));
        config.app.behavior.min_score = Some(50.0);

        let code = run_assess(config).unwrap();
        assert_eq!(code, exit_codes::BELOW_THRESHOLD);
        // The report is still written before the gate fires
        assert!(dir.path().join("report.json").exists());
    }

    #[test]
    fn test_assess_missing_input_is_invalid() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, dir.path().join("missing.json"));
        assert_eq!(run_assess(config).unwrap(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_assess_out_of_range_response_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("responses.json");
        std::fs::write(
            &path,
            r#"{"organization_name": "Acme", "responses": {"strategy_1": 7}}"#,
        )
        .unwrap();

        let config = config_for(&dir, path);
        assert_eq!(run_assess(config).unwrap(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_assess_rejects_invalid_configuration() {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(&dir, write_responses(&dir, 4));
        config.app.assessment.default_sector = "interstellar".to_string();

        assert_eq!(run_assess(config).unwrap(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_assess_sector_flag_beats_input_and_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("responses.json");
        std::fs::write(
            &path,
            r#"{"organization_name": "Acme", "sector": "retail", "responses": {"strategy_1": 4}}"#,
        )
        .unwrap();

        let mut config = config_for(&dir, path);
        config.sector = Some("finance".to_string());
        config.app.assessment.default_sector = "healthcare".to_string();

        assert_eq!(run_assess(config).unwrap(), exit_codes::SUCCESS);
        let report = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["assessment"]["sector"], "finance");
    }

    #[test]
    fn test_assess_benchmark_flag_attaches_comparison() {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(&dir, write_responses(&dir, 4));
        config.benchmark = true;

        assert_eq!(run_assess(config).unwrap(), exit_codes::SUCCESS);
        let report = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(
            value["assessment"]["benchmark_comparison"]["overall"]["benchmark"]["average"],
            45.0
        );
    }
}
