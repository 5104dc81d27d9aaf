//! Markdown report generator.
//!
//! Produces a shareable document from assessment and prioritization
//! results. User-supplied names are escaped before embedding.

use super::escape::{escape_markdown_inline, escape_markdown_list, escape_markdown_table};
use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::scoring::AssessmentResult;
use crate::usecase::PrioritizationResult;
use chrono::Utc;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn footer(config: &ReportConfig) -> String {
        let generated_at = config
            .metadata
            .generated_at
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339());
        format!(
            "*Generated by maturity-tools {} at {}*",
            env!("CARGO_PKG_VERSION"),
            generated_at
        )
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_assessment_report(
        &self,
        result: &AssessmentResult,
        config: &ReportConfig,
    ) -> Result<String> {
        let mut lines = Vec::new();

        let title = config.title.clone().unwrap_or_else(|| {
            format!(
                "AI Maturity Assessment: {}",
                escape_markdown_inline(&result.organization_name)
            )
        });
        lines.push(format!("# {title}"));
        lines.push(String::new());

        // Overview table
        lines.push("| | |".to_string());
        lines.push("|---|---|".to_string());
        lines.push(format!(
            "| Organization | {} |",
            escape_markdown_table(&result.organization_name)
        ));
        lines.push(format!("| Sector | {} |", result.sector.display_name()));
        lines.push(format!(
            "| Assessment | {} |",
            escape_markdown_table(&result.assessment_id)
        ));
        lines.push(format!("| Overall Score | {:.1}/100 |", result.overall_score));
        lines.push(format!(
            "| Maturity Level | {} |",
            result.maturity_level.name()
        ));
        lines.push(format!("| Grade | {} |", result.grade.letter()));
        lines.push(format!(
            "| Completed | {} |",
            result.completed_at.to_rfc3339()
        ));
        lines.push(String::new());
        lines.push(format!("> {}", result.maturity_level.description()));
        lines.push(String::new());

        // Dimension scores
        lines.push("## Dimension Scores".to_string());
        lines.push(String::new());
        lines.push("| Dimension | Score | Weight | Answered |".to_string());
        lines.push("|-----------|------:|-------:|---------:|".to_string());
        for scored in result.dimension_scores.values() {
            lines.push(format!(
                "| {} | {:.1} | {:.2} | {} |",
                scored.name, scored.score, scored.weight, scored.question_count
            ));
        }
        lines.push(String::new());

        // Roll-up lines: headers become list items, bullets stay nested
        if !result.top_strengths.is_empty() {
            lines.push("## Strengths".to_string());
            lines.push(String::new());
            for line in &result.top_strengths {
                lines.push(rollup_line_to_markdown(line));
            }
            lines.push(String::new());
        }
        if !result.top_improvements.is_empty() {
            lines.push("## Improvement Areas".to_string());
            lines.push(String::new());
            for line in &result.top_improvements {
                lines.push(rollup_line_to_markdown(line));
            }
            lines.push(String::new());
        }

        if config.include_details {
            lines.push("## Dimension Detail".to_string());
            lines.push(String::new());
            for scored in result.dimension_scores.values() {
                lines.push(format!("### {}", scored.name));
                lines.push(String::new());
                if scored.strengths.is_empty() && scored.improvements.is_empty() {
                    lines.push("No notable signals.".to_string());
                }
                for strength in &scored.strengths {
                    lines.push(format!("- Strength: {}", escape_markdown_list(strength)));
                }
                for improvement in &scored.improvements {
                    lines.push(format!(
                        "- Improvement: {}",
                        escape_markdown_list(improvement)
                    ));
                }
                lines.push(String::new());
            }
        }

        if let Some(comparison) = &result.benchmark_comparison {
            lines.push(format!(
                "## Benchmark ({} sector)",
                comparison.sector.display_name()
            ));
            lines.push(String::new());
            lines.push("| Score | Value | Sector Avg | Delta | Quartile |".to_string());
            lines.push("|-------|------:|-----------:|------:|----------|".to_string());
            let overall = &comparison.overall;
            lines.push(format!(
                "| Overall | {:.1} | {:.1} | {:+.1} | {} |",
                overall.score,
                overall.benchmark.average,
                overall.delta,
                overall.quartile.description()
            ));
            for (dimension_id, stat) in &comparison.dimensions {
                let name = result
                    .dimension(dimension_id)
                    .map_or(dimension_id.as_str(), |d| d.name.as_str());
                lines.push(format!(
                    "| {} | {:.1} | {:.1} | {:+.1} | {} |",
                    name,
                    stat.score,
                    stat.benchmark.average,
                    stat.delta,
                    stat.quartile.description()
                ));
            }
            lines.push(String::new());
        }

        if config.include_recommendations && !result.recommendations.is_empty() {
            lines.push("## Recommendations".to_string());
            lines.push(String::new());
            for (index, recommendation) in result.recommendations.iter().enumerate() {
                lines.push(format!(
                    "{}. {}",
                    index + 1,
                    escape_markdown_list(recommendation)
                ));
            }
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(Self::footer(config));
        lines.push(String::new());

        Ok(lines.join("\n"))
    }

    fn generate_prioritization_report(
        &self,
        result: &PrioritizationResult,
        config: &ReportConfig,
    ) -> Result<String> {
        let mut lines = Vec::new();

        let title = config
            .title
            .clone()
            .unwrap_or_else(|| "AI Use Case Prioritization".to_string());
        lines.push(format!("# {title}"));
        lines.push(String::new());
        lines.push(format!("Sector: **{}**", result.sector.display_name()));
        lines.push(String::new());

        lines.push("## Ranked Use Cases".to_string());
        lines.push(String::new());
        lines.push(
            "| # | Use Case | Score | Tier | Value | Feasibility | Readiness | Complexity | Time to Value |"
                .to_string(),
        );
        lines.push(
            "|--:|----------|------:|------|-------|-------------|----------:|-----------:|---------------|"
                .to_string(),
        );
        for (index, case) in result.ranked.iter().enumerate() {
            lines.push(format!(
                "| {} | {} | {:.1} | {} | {} | {:?} | {} | {} | {} |",
                index + 1,
                escape_markdown_table(&case.use_case.name),
                case.priority_score,
                case.priority_tier.name(),
                case.use_case.value_category.name(),
                case.use_case.feasibility,
                case.use_case.data_readiness,
                case.use_case.complexity,
                escape_markdown_table(&case.use_case.time_to_value)
            ));
        }
        lines.push(String::new());

        if config.include_details {
            lines.push("## Details".to_string());
            lines.push(String::new());
            for case in &result.ranked {
                lines.push(format!(
                    "### {}",
                    escape_markdown_inline(&case.use_case.name)
                ));
                lines.push(String::new());
                if !case.use_case.description.is_empty() {
                    lines.push(escape_markdown_list(&case.use_case.description));
                    lines.push(String::new());
                }
            }
        }

        if !result.recommended_sequence.is_empty() {
            lines.push("## Recommended Sequence".to_string());
            lines.push(String::new());
            for (index, name) in result.recommended_sequence.iter().enumerate() {
                lines.push(format!("{}. {}", index + 1, escape_markdown_list(name)));
            }
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(Self::footer(config));
        lines.push(String::new());

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

/// Convert one pre-formatted roll-up line into a Markdown list line.
///
/// Headers ("Name: 75.0/100") become bold top-level items; bullet lines
/// ("  - text") are already valid nested list items and pass through.
fn rollup_line_to_markdown(line: &str) -> String {
    if line.starts_with("  - ") {
        line.to_string()
    } else {
        format!("- **{line}**")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ResponseSet, Sector};
    use crate::scoring::MaturityScorer;
    use crate::usecase::UseCasePrioritizer;

    fn scored_result(value: i64) -> AssessmentResult {
        let scorer = MaturityScorer::new(Sector::General).unwrap();
        let responses =
            ResponseSet::from_pairs(scorer.catalog().questions().map(|q| (q.id.clone(), value)))
                .unwrap();
        scorer.score(&responses, "Acme | Partners", "a-1")
    }

    #[test]
    fn test_assessment_markdown_structure() {
        let result = scored_result(4);
        let report = MarkdownReporter::new()
            .generate_assessment_report(&result, &ReportConfig::default())
            .unwrap();

        assert!(report.starts_with("# AI Maturity Assessment:"));
        assert!(report.contains("## Dimension Scores"));
        assert!(report.contains("| Strategy & Vision | 75.0 | 0.20 | 4 |"));
        assert!(report.contains("| Overall Score | 75.0/100 |"));
        assert!(report.contains("*Generated by maturity-tools"));
    }

    #[test]
    fn test_organization_name_is_escaped_in_table() {
        let result = scored_result(3);
        let report = MarkdownReporter::new()
            .generate_assessment_report(&result, &ReportConfig::default())
            .unwrap();
        assert!(report.contains("| Organization | Acme \\| Partners |"));
    }

    #[test]
    fn test_rollup_lines_render_as_nested_list() {
        let result = scored_result(5);
        let report = MarkdownReporter::new()
            .generate_assessment_report(&result, &ReportConfig::default())
            .unwrap();
        assert!(report.contains("## Strengths"));
        assert!(report.contains("- **Strategy & Vision: 100.0/100**"));
        assert!(report.contains("  - "));
    }

    #[test]
    fn test_prioritization_markdown() {
        let ranked = UseCasePrioritizer::new().prioritize(Sector::General, None, Vec::new());
        let report = MarkdownReporter::new()
            .generate_prioritization_report(&ranked, &ReportConfig::default())
            .unwrap();

        assert!(report.starts_with("# AI Use Case Prioritization"));
        assert!(report.contains("## Ranked Use Cases"));
        assert!(report.contains("| 1 | Customer churn prediction | 81.0 | Quick Win |"));
        assert!(report.contains("## Recommended Sequence"));
    }
}
