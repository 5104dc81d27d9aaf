//! Implementation of the `catalog` command.
//!
//! Prints the question catalog for a sector so respondents can see which
//! question ids a response file should use.

use super::{exit_codes, resolve_format, write_output, OutputTarget};
use crate::catalog::{catalog_for_sector, QuestionCatalog, Sector};
use crate::config::{AppConfig, Validatable};
use crate::reports::escape::escape_markdown_table;
use crate::reports::ReportFormat;

/// Run the catalog command. Returns the process exit code.
pub fn run_catalog(sector: Option<String>, app: AppConfig) -> anyhow::Result<i32> {
    let config_errors = app.validate();
    if !config_errors.is_empty() {
        for error in &config_errors {
            tracing::error!("Invalid configuration: {error}");
        }
        return Ok(exit_codes::INVALID_INPUT);
    }

    let sector = sector
        .as_deref()
        .map(Sector::from_input)
        .unwrap_or_else(|| Sector::from_input(&app.assessment.default_sector));
    let catalog = catalog_for_sector(sector)?;

    let rendered = match resolve_format(app.output.format) {
        ReportFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "sector": sector,
            "catalog": catalog,
        }))?,
        ReportFormat::Markdown => format_markdown(&catalog, sector),
        _ => format_text(&catalog, sector),
    };

    let target = OutputTarget::from_option(app.output.file.clone());
    write_output(&rendered, &target, app.behavior.quiet)?;

    Ok(exit_codes::SUCCESS)
}

fn format_text(catalog: &QuestionCatalog, sector: Sector) -> String {
    let mut lines = Vec::new();
    lines.push("AI Maturity Question Catalog".to_string());
    lines.push(format!("Sector: {}", sector.display_name()));
    lines.push(format!(
        "Dimensions: {}   Questions: {}",
        catalog.dimension_count(),
        catalog.question_count()
    ));

    for dimension in catalog.dimensions() {
        lines.push(String::new());
        lines.push(format!(
            "{} ({}, weight {:.2})",
            dimension.name, dimension.id, dimension.weight
        ));
        let id_width = dimension
            .questions
            .iter()
            .map(|q| q.id.len())
            .max()
            .unwrap_or(0);
        for question in &dimension.questions {
            lines.push(format!("  {:<id_width$}  {}", question.id, question.text));
        }
    }

    lines.join("\n")
}

fn format_markdown(catalog: &QuestionCatalog, sector: Sector) -> String {
    let mut lines = Vec::new();
    lines.push("# AI Maturity Question Catalog".to_string());
    lines.push(String::new());
    lines.push(format!("**Sector:** {}", sector.display_name()));

    for dimension in catalog.dimensions() {
        lines.push(String::new());
        lines.push(format!("## {}", dimension.name));
        lines.push(String::new());
        lines.push(format!("Weight: {:.2}", dimension.weight));
        lines.push(String::new());
        lines.push("| Id | Question |".to_string());
        lines.push("|----|----------|".to_string());
        for question in &dimension.questions {
            lines.push(format!(
                "| {} | {} |",
                question.id,
                escape_markdown_table(&question.text)
            ));
        }
    }

    lines.join("\n")
}

// ============================================================================
// Tests
// ============================================================================
