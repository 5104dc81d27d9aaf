//! JSON report generator.

use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::error::{MaturityError, ReportErrorKind, Result};
use crate::scoring::AssessmentResult;
use crate::usecase::PrioritizationResult;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map_err(|e| {
            MaturityError::report(
                "JSON report generation",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_assessment_report(
        &self,
        result: &AssessmentResult,
        config: &ReportConfig,
    ) -> Result<String> {
        let report = JsonAssessmentReport {
            metadata: JsonReportMetadata::from_config(config),
            assessment: result,
        };
        self.serialize(&report)
    }

    fn generate_prioritization_report(
        &self,
        result: &PrioritizationResult,
        config: &ReportConfig,
    ) -> Result<String> {
        let report = JsonPrioritizationReport {
            metadata: JsonReportMetadata::from_config(config),
            prioritization: result,
        };
        self.serialize(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonAssessmentReport<'a> {
    metadata: JsonReportMetadata,
    assessment: &'a AssessmentResult,
}

#[derive(Serialize)]
struct JsonPrioritizationReport<'a> {
    metadata: JsonReportMetadata,
    prioritization: &'a PrioritizationResult,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
}

impl JsonReportMetadata {
    fn from_config(config: &ReportConfig) -> Self {
        Self {
            tool: ToolInfo {
                name: "maturity-tools".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            generated_at: config
                .metadata
                .generated_at
                .clone()
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
            input: config.metadata.input_path.clone(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ResponseSet, Sector};
    use crate::scoring::MaturityScorer;

    fn sample_result() -> AssessmentResult {
        let scorer = MaturityScorer::new(Sector::General).unwrap();
        let responses =
            ResponseSet::from_pairs(scorer.catalog().questions().map(|q| (q.id.clone(), 4)))
                .unwrap();
        scorer.score(&responses, "Acme Corp", "a-1")
    }

    #[test]
    fn test_json_report_envelope() {
        let result = sample_result();
        let reporter = JsonReporter::new();
        let json = reporter
            .generate_assessment_report(&result, &ReportConfig::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metadata"]["tool"]["name"], "maturity-tools");
        assert_eq!(value["assessment"]["organization_name"], "Acme Corp");
        assert_eq!(value["assessment"]["overall_score"], 75.0);
        assert!(value["metadata"]["generated_at"].is_string());
    }

    #[test]
    fn test_compact_output_has_no_newlines() {
        let result = sample_result();
        let reporter = JsonReporter::new().pretty(false);
        let json = reporter
            .generate_assessment_report(&result, &ReportConfig::default())
            .unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_fixed_timestamp_from_config() {
        let result = sample_result();
        let mut config = ReportConfig::default();
        config.metadata.generated_at = Some("2024-01-01T00:00:00Z".to_string());

        let json = JsonReporter::new()
            .generate_assessment_report(&result, &config)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metadata"]["generated_at"], "2024-01-01T00:00:00Z");
    }
}
