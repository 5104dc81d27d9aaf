//! Report generation for assessment and prioritization results.
//!
//! This module provides multiple output formats:
//! - JSON: Structured data for programmatic integration
//! - Summary: Compact shell-friendly output
//! - Markdown: Human-readable documentation for sharing
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! User-controllable data (organization names, use case names, etc.)
//! should be escaped before embedding in Markdown reports.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::error::Result;
use crate::scoring::AssessmentResult;
use crate::usecase::PrioritizationResult;
use std::io::Write;

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from an assessment result
    fn generate_assessment_report(
        &self,
        result: &AssessmentResult,
        config: &ReportConfig,
    ) -> Result<String>;

    /// Generate a report from a prioritization result
    fn generate_prioritization_report(
        &self,
        result: &PrioritizationResult,
        config: &ReportConfig,
    ) -> Result<String>;

    /// Write an assessment report to a writer
    fn write_assessment_report(
        &self,
        result: &AssessmentResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let report = self.generate_assessment_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Write a prioritization report to a writer
    fn write_prioritization_report(
        &self,
        result: &PrioritizationResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let report = self.generate_prioritization_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}
