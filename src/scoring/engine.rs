//! Maturity scoring engine.
//!
//! Converts a validated response set into per-dimension scores, a weighted
//! overall score, maturity level, grade, organization-level roll-ups, and
//! recommendations. Scoring is a pure function of the responses and the
//! catalog snapshot the scorer was built with: no I/O, no hidden state,
//! and degenerate input degrades to a well-formed zero result instead of
//! an error.

use chrono::Utc;
use indexmap::IndexMap;

use super::levels::{Grade, MaturityLevel};
use super::recommendations;
use super::result::{AssessmentResult, DimensionScore};
use crate::catalog::{catalog_for_sector, Dimension, QuestionCatalog, ResponseSet, Sector};
use crate::error::Result;

/// Responses at or above this value count as strengths
const STRENGTH_RESPONSE_FLOOR: u8 = 4;

/// Responses at or below this value count as improvements
const IMPROVEMENT_RESPONSE_CEILING: u8 = 2;

/// Per-dimension cap on extracted strengths and improvements
const MAX_DIMENSION_SIGNALS: usize = 3;

/// Cap on organization-level roll-up lines, headers and bullets together
const MAX_ROLLUP_LINES: usize = 6;

/// Dimensions at or above this score feed the strength roll-up, the rest
/// feed the improvement roll-up
const ROLLUP_SCORE_THRESHOLD: f64 = 60.0;

/// Bullets carried per dimension into a roll-up
const MAX_ROLLUP_BULLETS: usize = 2;

/// Question texts longer than this are truncated with an ellipsis
const MAX_SIGNAL_TEXT_LEN: usize = 80;

/// Scoring engine for maturity assessments.
///
/// Holds an immutable catalog snapshot. Safe to share across threads and
/// to call concurrently; every call reads the same snapshot and owns its
/// own output.
#[derive(Debug, Clone)]
pub struct MaturityScorer {
    catalog: QuestionCatalog,
    sector: Sector,
    weight_overrides: IndexMap<String, f64>,
}

impl MaturityScorer {
    /// Create a scorer for a sector, using that sector's catalog.
    pub fn new(sector: Sector) -> Result<Self> {
        Ok(Self::with_catalog(catalog_for_sector(sector)?, sector))
    }

    /// Create a scorer over an already-built catalog.
    #[must_use]
    pub fn with_catalog(catalog: QuestionCatalog, sector: Sector) -> Self {
        Self {
            catalog,
            sector,
            weight_overrides: IndexMap::new(),
        }
    }

    /// Override dimension weights for the overall score.
    ///
    /// Dimensions absent from the map fall back to their catalog weight.
    #[must_use]
    pub fn with_weight_overrides(mut self, overrides: IndexMap<String, f64>) -> Self {
        self.weight_overrides = overrides;
        self
    }

    /// The catalog this scorer reads
    #[must_use]
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// The sector this scorer was built for
    #[must_use]
    pub fn sector(&self) -> Sector {
        self.sector
    }

    /// Score a response set.
    ///
    /// Missing responses never fail: an unanswered question contributes
    /// nothing to its dimension, and a fully unanswered dimension scores 0
    /// while keeping its weight in the overall denominator.
    pub fn score(
        &self,
        responses: &ResponseSet,
        organization_name: &str,
        assessment_id: &str,
    ) -> AssessmentResult {
        tracing::debug!(
            organization = organization_name,
            sector = %self.sector,
            answered = responses.len(),
            "Scoring assessment"
        );

        // Per-dimension scores in catalog order
        let mut dimension_scores: IndexMap<String, DimensionScore> =
            IndexMap::with_capacity(self.catalog.dimension_count());
        for dimension in self.catalog.dimensions() {
            let scored = score_dimension(dimension, responses);
            dimension_scores.insert(dimension.id.clone(), scored);
        }

        let overall_score = self.overall_score(&dimension_scores);
        let maturity_level = MaturityLevel::from_score(overall_score);
        let grade = Grade::from_score(overall_score);

        let dimensions: Vec<&DimensionScore> = dimension_scores.values().collect();
        let top_strengths = collect_top_strengths(&dimensions);
        let top_improvements = collect_top_improvements(&dimensions);
        let recommendations = recommendations::generate(maturity_level, &dimensions);

        AssessmentResult {
            assessment_id: assessment_id.to_string(),
            organization_name: organization_name.to_string(),
            sector: self.sector,
            overall_score,
            maturity_level,
            grade,
            dimension_scores,
            top_strengths,
            top_improvements,
            recommendations,
            benchmark_comparison: None,
            completed_at: Utc::now(),
        }
    }

    /// Weighted mean of dimension scores.
    ///
    /// Every dimension present contributes its weight to the denominator,
    /// answered or not, so unanswered dimensions dilute the overall score
    /// toward 0 rather than reweighting the rest.
    fn overall_score(&self, dimension_scores: &IndexMap<String, DimensionScore>) -> f64 {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for (dimension_id, scored) in dimension_scores {
            let weight = self
                .weight_overrides
                .get(dimension_id)
                .copied()
                .unwrap_or(scored.weight);
            weighted_sum += scored.score * weight;
            total_weight += weight;
        }

        if total_weight <= 0.0 {
            return 0.0;
        }
        round1(weighted_sum / total_weight)
    }
}

/// Score one dimension from the responses.
fn score_dimension(dimension: &Dimension, responses: &ResponseSet) -> DimensionScore {
    let mut values: Vec<f64> = Vec::with_capacity(dimension.questions.len());
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    for question in &dimension.questions {
        let Some(value) = responses.get(&question.id) else {
            continue;
        };
        values.push(f64::from(value));

        if value >= STRENGTH_RESPONSE_FLOOR && strengths.len() < MAX_DIMENSION_SIGNALS {
            strengths.push(truncate_text(&question.text, MAX_SIGNAL_TEXT_LEN));
        }
        if value <= IMPROVEMENT_RESPONSE_CEILING && improvements.len() < MAX_DIMENSION_SIGNALS {
            improvements.push(truncate_text(&question.text, MAX_SIGNAL_TEXT_LEN));
        }
    }

    let score = if values.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        round1(((mean - 1.0) / 4.0) * 100.0)
    };

    DimensionScore {
        dimension_id: dimension.id.clone(),
        name: dimension.name.clone(),
        score,
        question_count: values.len(),
        strengths,
        improvements,
        weight: dimension.weight,
    }
}

/// Organization-level strength lines.
///
/// Dimensions sorted by score descending; each qualifying dimension emits
/// a header line and up to two indented bullets. The final truncation
/// counts headers and bullets together, so the cut can land mid-dimension.
fn collect_top_strengths(dimensions: &[&DimensionScore]) -> Vec<String> {
    let mut sorted: Vec<&DimensionScore> = dimensions.to_vec();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut lines = Vec::new();
    for dimension in sorted {
        if dimension.score >= ROLLUP_SCORE_THRESHOLD {
            lines.push(format!("{}: {:.1}/100", dimension.name, dimension.score));
            for bullet in dimension.strengths.iter().take(MAX_ROLLUP_BULLETS) {
                lines.push(format!("  - {bullet}"));
            }
        }
    }
    lines.truncate(MAX_ROLLUP_LINES);
    lines
}

/// Organization-level improvement lines, mirror of the strength roll-up.
fn collect_top_improvements(dimensions: &[&DimensionScore]) -> Vec<String> {
    let mut sorted: Vec<&DimensionScore> = dimensions.to_vec();
    sorted.sort_by(|a, b| a.score.total_cmp(&b.score));

    let mut lines = Vec::new();
    for dimension in sorted {
        if dimension.score < ROLLUP_SCORE_THRESHOLD {
            lines.push(format!("{}: {:.1}/100", dimension.name, dimension.score));
            for bullet in dimension.improvements.iter().take(MAX_ROLLUP_BULLETS) {
                lines.push(format!("  - {bullet}"));
            }
        }
    }
    lines.truncate(MAX_ROLLUP_LINES);
    lines
}

/// Round to one decimal place, half away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Truncate to `max_len` characters, ellipsis-terminated when cut.
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
