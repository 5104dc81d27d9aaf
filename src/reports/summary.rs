//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::scoring::{AssessmentResult, DimensionScore};
use crate::usecase::{PrioritizationResult, PriorityTier};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Color name for a 0..=100 score, following the maturity level bands.
fn score_color(score: f64) -> &'static str {
    if score >= 76.0 {
        "green"
    } else if score >= 51.0 {
        "cyan"
    } else if score >= 26.0 {
        "yellow"
    } else {
        "red"
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_assessment_report(
        &self,
        result: &AssessmentResult,
        config: &ReportConfig,
    ) -> Result<String> {
        let mut lines = Vec::new();

        // Header
        let title = config
            .title
            .clone()
            .unwrap_or_else(|| format!("AI Maturity Assessment: {}", result.organization_name));
        lines.push(self.color(&title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}      {}",
            self.color("Sector:", "cyan"),
            result.sector.display_name()
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Assessment:", "cyan"),
            result.assessment_id
        ));
        lines.push(String::new());

        // Overall score
        lines.push(format!(
            "Overall Score: {} (Grade: {})",
            self.color(
                &format!("{:.1}/100", result.overall_score),
                score_color(result.overall_score)
            ),
            result.grade.letter()
        ));
        lines.push(format!(
            "Maturity Level: {}",
            result.maturity_level.name()
        ));
        lines.push(format!(
            "  {}",
            self.color(result.maturity_level.description(), "dim")
        ));
        lines.push(String::new());

        // Dimension scores
        lines.push("Dimension Scores:".to_string());
        let name_width = result
            .dimension_scores
            .values()
            .map(|d| d.name.len())
            .max()
            .unwrap_or(0);
        for scored in result.dimension_scores.values() {
            lines.push(self.dimension_line(scored, name_width));
        }
        lines.push(String::new());

        // Roll-ups: lines are already formatted as headers and bullets
        if !result.top_strengths.is_empty() {
            lines.push(self.color("Strengths:", "bold"));
            for line in &result.top_strengths {
                lines.push(format!("  {line}"));
            }
            lines.push(String::new());
        }
        if !result.top_improvements.is_empty() {
            lines.push(self.color("Improvement Areas:", "bold"));
            for line in &result.top_improvements {
                lines.push(format!("  {line}"));
            }
            lines.push(String::new());
        }

        // Per-dimension detail
        if config.include_details {
            lines.push(self.color("Dimension Detail:", "bold"));
            for scored in result.dimension_scores.values() {
                lines.push(format!(
                    "  {} (weight {:.2}, {} answered)",
                    scored.name, scored.weight, scored.question_count
                ));
                for strength in &scored.strengths {
                    lines.push(format!("    {} {}", self.color("+", "green"), strength));
                }
                for improvement in &scored.improvements {
                    lines.push(format!("    {} {}", self.color("-", "red"), improvement));
                }
            }
            lines.push(String::new());
        }

        // Benchmark positioning
        if let Some(comparison) = &result.benchmark_comparison {
            lines.push(self.color(
                &format!("Benchmark ({} sector):", comparison.sector.display_name()),
                "bold",
            ));
            let overall = &comparison.overall;
            lines.push(format!(
                "  Overall: {:.1} vs {:.1} average ({}, {})",
                overall.score,
                overall.benchmark.average,
                self.color(
                    &format!("{:+.1}", overall.delta),
                    if overall.delta >= 0.0 { "green" } else { "red" }
                ),
                overall.quartile.description()
            ));
            for (dimension_id, stat) in &comparison.dimensions {
                let name = result
                    .dimension(dimension_id)
                    .map_or(dimension_id.as_str(), |d| d.name.as_str());
                lines.push(format!(
                    "  {}: {} ({})",
                    name,
                    self.color(
                        &format!("{:+.1}", stat.delta),
                        if stat.delta >= 0.0 { "green" } else { "red" }
                    ),
                    stat.quartile.description()
                ));
            }
            lines.push(String::new());
        }

        // Recommendations
        if config.include_recommendations && !result.recommendations.is_empty() {
            lines.push(self.color("Recommendations:", "bold"));
            for (index, recommendation) in result.recommendations.iter().enumerate() {
                lines.push(format!("  {}. {}", index + 1, recommendation));
            }
            lines.push(String::new());
        }

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
        lines.push(self.color(&title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}",
            self.color("Sector:", "cyan"),
            result.sector.display_name()
        ));

        let counts = result.tier_counts();
        let count_parts: Vec<String> = counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(tier, count)| format!("{} {}", count, tier.name()))
            .collect();
        if !count_parts.is_empty() {
            lines.push(format!(
                "{}   {}",
                self.color("Tiers:", "cyan"),
                count_parts.join(", ")
            ));
        }
        lines.push(String::new());

        // Ranked table
        lines.push("Ranked Use Cases:".to_string());
        let name_width = result
            .ranked
            .iter()
            .map(|c| c.use_case.name.len())
            .max()
            .unwrap_or(0);
        for (index, case) in result.ranked.iter().enumerate() {
            let tier_label = self.color(case.priority_tier.name(), tier_color(case.priority_tier));
            lines.push(format!(
                "  {:>2}. {:<width$}  {:>5.1}  {}",
                index + 1,
                case.use_case.name,
                case.priority_score,
                tier_label,
                width = name_width
            ));
        }
        lines.push(String::new());

        if config.include_details {
            lines.push(self.color("Details:", "bold"));
            for case in &result.ranked {
                lines.push(format!("  {}", case.use_case.name));
                if !case.use_case.description.is_empty() {
                    lines.push(format!(
                        "    {}",
                        self.color(&case.use_case.description, "dim")
                    ));
                }
                lines.push(format!(
                    "    value: {}, feasibility: {:?}, readiness: {}/10, complexity: {}/10, time: {}",
                    case.use_case.value_category.name(),
                    case.use_case.feasibility,
                    case.use_case.data_readiness,
                    case.use_case.complexity,
                    case.use_case.time_to_value
                ));
            }
            lines.push(String::new());
        }

        if !result.recommended_sequence.is_empty() {
            lines.push(self.color("Recommended Sequence:", "bold"));
            for (index, name) in result.recommended_sequence.iter().enumerate() {
                lines.push(format!("  {}. {}", index + 1, name));
            }
            lines.push(String::new());
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

impl SummaryReporter {
    fn dimension_line(&self, scored: &DimensionScore, name_width: usize) -> String {
        let label = format!("{}:", scored.name);
        let score = self.color(
            &format!("{:>5.1}/100", scored.score),
            score_color(scored.score),
        );
        if scored.is_answered() {
            format!("  {label:<width$}  {score}", width = name_width + 1)
        } else {
            format!(
                "  {label:<width$}  {score} {}",
                self.color("(no responses)", "dim"),
                width = name_width + 1
            )
        }
    }
}

const fn tier_color(tier: PriorityTier) -> &'static str {
    match tier {
        PriorityTier::QuickWin => "green",
        PriorityTier::Strategic => "cyan",
        PriorityTier::FoundationBuilder => "yellow",
        PriorityTier::Future => "dim",
    }
}
