//! Assessment result types.
//!
//! Results are value objects: one scoring call constructs them, nothing
//! mutates them afterwards. A re-score builds a fresh result.

use super::levels::{Grade, MaturityLevel};
use crate::benchmark::BenchmarkComparison;
use crate::catalog::Sector;
use crate::error::{MaturityError, ReportErrorKind, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Score and extracted signals for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Dimension identifier
    pub dimension_id: String,
    /// Human-readable dimension name
    pub name: String,
    /// Normalized score, 0 to 100, one decimal
    pub score: f64,
    /// Number of questions actually answered
    pub question_count: usize,
    /// Question texts answered 4 or 5, catalog order, at most 3
    pub strengths: Vec<String>,
    /// Question texts answered 1 or 2, catalog order, at most 3
    pub improvements: Vec<String>,
    /// Weight configured for this dimension
    pub weight: f64,
}

impl DimensionScore {
    /// Whether any question in this dimension was answered
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.question_count > 0
    }
}

/// Complete outcome of one scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct AssessmentResult {
    /// Caller-assigned identifier for this run
    pub assessment_id: String,
    /// Organization display name
    pub organization_name: String,
    /// Sector the catalog and benchmarks were selected for
    pub sector: Sector,
    /// Weighted overall score, 0 to 100, one decimal
    pub overall_score: f64,
    /// Maturity classification of the overall score
    pub maturity_level: MaturityLevel,
    /// Letter grade of the overall score
    pub grade: Grade,
    /// Per-dimension scores keyed by dimension id, catalog order
    pub dimension_scores: IndexMap<String, DimensionScore>,
    /// Organization-level strength lines, at most 6
    pub top_strengths: Vec<String>,
    /// Organization-level improvement lines, at most 6
    pub top_improvements: Vec<String>,
    /// Prioritized recommendations, at most 7
    pub recommendations: Vec<String>,
    /// Relative standing against sector benchmarks, when computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark_comparison: Option<BenchmarkComparison>,
    /// When the scoring run completed
    pub completed_at: DateTime<Utc>,
}

impl AssessmentResult {
    /// Look up a dimension score by id
    #[must_use]
    pub fn dimension(&self, dimension_id: &str) -> Option<&DimensionScore> {
        self.dimension_scores.get(dimension_id)
    }

    /// Attach a benchmark comparison
    pub fn with_benchmark(mut self, comparison: BenchmarkComparison) -> Self {
        self.benchmark_comparison = Some(comparison);
        self
    }

    /// Lowest-scoring dimension, if any were configured
    #[must_use]
    pub fn weakest_dimension(&self) -> Option<&DimensionScore> {
        self.dimension_scores
            .values()
            .min_by(|a, b| a.score.total_cmp(&b.score))
    }

    /// Highest-scoring dimension, if any were configured
    #[must_use]
    pub fn strongest_dimension(&self) -> Option<&DimensionScore> {
        self.dimension_scores
            .values()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }

    /// Serialize to pretty JSON for interchange with external layers.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            MaturityError::report(
                "serializing assessment result",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }

    /// Parse a previously saved result from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a previously saved result from a JSON file.
    ///
    /// Accepts both a bare result and the report envelope written by the
    /// JSON reporter, whose payload sits under an `assessment` key.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MaturityError::io(path, e))?;

        let value: serde_json::Value = serde_json::from_str(&content)?;
        let payload = value.get("assessment").cloned().unwrap_or(value);
        Ok(serde_json::from_value(payload)?)
    }
}
