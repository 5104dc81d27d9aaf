//! Sector benchmark comparison.
//!
//! Positions an assessment result against fixed per-sector reference
//! statistics. Benchmarks are a static table, never derived from observed
//! assessments. Sector tables override only the dimensions where the
//! sector meaningfully differs; everything else falls back to the general
//! table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Sector};
use crate::scoring::{round1, AssessmentResult};

/// Reference statistics for one score, overall or per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkStats {
    /// Sector average score
    pub average: f64,
    /// Score at the top of the upper quartile
    pub top_quartile: f64,
    /// Score at the bottom of the lower quartile
    pub bottom_quartile: f64,
}

impl BenchmarkStats {
    const fn new(average: f64, top_quartile: f64, bottom_quartile: f64) -> Self {
        Self {
            average,
            top_quartile,
            bottom_quartile,
        }
    }
}

/// Position relative to the sector average.
///
/// Decided on the delta after rounding to one decimal, so a score within
/// 0.05 of the average reads as at-average rather than flapping on float
/// noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RelativeStanding {
    AboveAverage,
    AtAverage,
    BelowAverage,
}

impl RelativeStanding {
    fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::AboveAverage
        } else if delta < 0.0 {
            Self::BelowAverage
        } else {
            Self::AtAverage
        }
    }

    /// Short phrase for reports
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AboveAverage => "above the sector average",
            Self::AtAverage => "at the sector average",
            Self::BelowAverage => "below the sector average",
        }
    }
}

/// Quartile bucket relative to sector statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum QuartileBucket {
    /// At or above the top-quartile score
    Top,
    /// Between the average and the top quartile
    UpperMiddle,
    /// Between the bottom quartile and the average
    LowerMiddle,
    /// Below the bottom-quartile score
    Bottom,
}

impl QuartileBucket {
    fn from_score(score: f64, stats: &BenchmarkStats) -> Self {
        if score >= stats.top_quartile {
            Self::Top
        } else if score >= stats.average {
            Self::UpperMiddle
        } else if score >= stats.bottom_quartile {
            Self::LowerMiddle
        } else {
            Self::Bottom
        }
    }

    /// Short phrase for reports
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Top => "top quartile",
            Self::UpperMiddle => "upper middle",
            Self::LowerMiddle => "lower middle",
            Self::Bottom => "bottom quartile",
        }
    }
}

/// One score positioned against its benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatComparison {
    /// The assessed score being positioned
    pub score: f64,
    /// Reference statistics it was compared against
    pub benchmark: BenchmarkStats,
    /// Score minus average, one decimal
    pub delta: f64,
    /// Above, at, or below the average
    pub standing: RelativeStanding,
    /// Quartile bucket
    pub quartile: QuartileBucket,
}

impl StatComparison {
    fn new(score: f64, benchmark: BenchmarkStats) -> Self {
        let delta = round1(score - benchmark.average);
        Self {
            score,
            benchmark,
            delta,
            standing: RelativeStanding::from_delta(delta),
            quartile: QuartileBucket::from_score(score, &benchmark),
        }
    }
}

/// Full benchmark positioning for an assessment result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct BenchmarkComparison {
    /// Sector whose tables were used
    pub sector: Sector,
    /// Overall score positioning
    pub overall: StatComparison,
    /// Per-dimension positioning, keyed by dimension id, result order.
    /// Dimensions with no benchmark entry anywhere are omitted.
    pub dimensions: IndexMap<String, StatComparison>,
}

// ============================================================================
// Static benchmark tables
// ============================================================================

fn overall_stats(sector: Sector) -> BenchmarkStats {
    match sector {
        Sector::General => BenchmarkStats::new(45.0, 68.0, 28.0),
        Sector::Healthcare => BenchmarkStats::new(42.0, 65.0, 25.0),
        Sector::Finance => BenchmarkStats::new(52.0, 74.0, 33.0),
        Sector::Retail => BenchmarkStats::new(46.0, 69.0, 29.0),
        Sector::Manufacturing => BenchmarkStats::new(40.0, 62.0, 24.0),
        Sector::Technology => BenchmarkStats::new(58.0, 80.0, 38.0),
    }
}

/// Per-dimension rows for the general sector. Every standard dimension
/// has an entry here.
const GENERAL_DIMENSIONS: [(&str, BenchmarkStats); 6] = [
    (catalog::STRATEGY_VISION, BenchmarkStats::new(47.0, 70.0, 29.0)),
    (catalog::DATA_INFRASTRUCTURE, BenchmarkStats::new(43.0, 66.0, 26.0)),
    (catalog::TECHNOLOGY_TOOLS, BenchmarkStats::new(45.0, 68.0, 27.0)),
    (catalog::TALENT_SKILLS, BenchmarkStats::new(41.0, 64.0, 25.0)),
    (catalog::GOVERNANCE_ETHICS, BenchmarkStats::new(36.0, 58.0, 21.0)),
    (catalog::CULTURE_ADOPTION, BenchmarkStats::new(44.0, 67.0, 27.0)),
];

/// Sector overrides for dimensions that diverge from the general table.
fn sector_dimension_overrides(sector: Sector) -> &'static [(&'static str, BenchmarkStats)] {
    const HEALTHCARE: &[(&str, BenchmarkStats)] = &[
        (catalog::GOVERNANCE_ETHICS, BenchmarkStats::new(44.0, 67.0, 27.0)),
        (catalog::DATA_INFRASTRUCTURE, BenchmarkStats::new(39.0, 61.0, 23.0)),
        (catalog::TALENT_SKILLS, BenchmarkStats::new(37.0, 59.0, 22.0)),
    ];
    const FINANCE: &[(&str, BenchmarkStats)] = &[
        (catalog::GOVERNANCE_ETHICS, BenchmarkStats::new(51.0, 73.0, 32.0)),
        (catalog::DATA_INFRASTRUCTURE, BenchmarkStats::new(54.0, 76.0, 34.0)),
        (catalog::STRATEGY_VISION, BenchmarkStats::new(53.0, 75.0, 33.0)),
    ];
    const RETAIL: &[(&str, BenchmarkStats)] = &[
        (catalog::DATA_INFRASTRUCTURE, BenchmarkStats::new(48.0, 71.0, 30.0)),
        (catalog::TECHNOLOGY_TOOLS, BenchmarkStats::new(47.0, 70.0, 29.0)),
    ];
    const MANUFACTURING: &[(&str, BenchmarkStats)] = &[
        (catalog::DATA_INFRASTRUCTURE, BenchmarkStats::new(37.0, 59.0, 22.0)),
        (catalog::TALENT_SKILLS, BenchmarkStats::new(35.0, 56.0, 20.0)),
        (catalog::TECHNOLOGY_TOOLS, BenchmarkStats::new(41.0, 63.0, 24.0)),
    ];
    const TECHNOLOGY: &[(&str, BenchmarkStats)] = &[
        (catalog::STRATEGY_VISION, BenchmarkStats::new(60.0, 82.0, 40.0)),
        (catalog::TECHNOLOGY_TOOLS, BenchmarkStats::new(64.0, 85.0, 43.0)),
        (catalog::TALENT_SKILLS, BenchmarkStats::new(59.0, 81.0, 39.0)),
        (catalog::GOVERNANCE_ETHICS, BenchmarkStats::new(48.0, 70.0, 30.0)),
    ];

    match sector {
        Sector::General => &[],
        Sector::Healthcare => HEALTHCARE,
        Sector::Finance => FINANCE,
        Sector::Retail => RETAIL,
        Sector::Manufacturing => MANUFACTURING,
        Sector::Technology => TECHNOLOGY,
    }
}

/// Look up dimension stats for a sector, falling back to the general table.
fn dimension_stats(sector: Sector, dimension_id: &str) -> Option<BenchmarkStats> {
    sector_dimension_overrides(sector)
        .iter()
        .chain(GENERAL_DIMENSIONS.iter())
        .find(|(id, _)| *id == dimension_id)
        .map(|(_, stats)| *stats)
}

// ============================================================================
// Comparison
// ============================================================================

/// Position a result against its sector's benchmarks.
///
/// Pure lookup and arithmetic; the same result and sector always produce
/// the same comparison.
pub fn compare(result: &AssessmentResult, sector: Sector) -> BenchmarkComparison {
    let overall = StatComparison::new(result.overall_score, overall_stats(sector));

    let mut dimensions = IndexMap::with_capacity(result.dimension_scores.len());
    for (dimension_id, scored) in &result.dimension_scores {
        if let Some(stats) = dimension_stats(sector, dimension_id) {
            dimensions.insert(dimension_id.clone(), StatComparison::new(scored.score, stats));
        }
    }

    BenchmarkComparison {
        sector,
        overall,
        dimensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResponseSet;
    use crate::scoring::MaturityScorer;

    fn result_with_overall(target_response: i64) -> AssessmentResult {
        let scorer = MaturityScorer::new(Sector::General).unwrap();
        let responses = ResponseSet::from_pairs(
            scorer
                .catalog()
                .questions()
                .map(|q| (q.id.clone(), target_response)),
        )
        .unwrap();
        scorer.score(&responses, "Acme", "bench-test")
    }

    #[test]
    fn test_standing_from_delta() {
        assert_eq!(
            RelativeStanding::from_delta(0.1),
            RelativeStanding::AboveAverage
        );
        assert_eq!(
            RelativeStanding::from_delta(-0.1),
            RelativeStanding::BelowAverage
        );
        assert_eq!(RelativeStanding::from_delta(0.0), RelativeStanding::AtAverage);
    }

    #[test]
    fn test_quartile_boundaries() {
        let stats = BenchmarkStats::new(45.0, 68.0, 28.0);
        assert_eq!(QuartileBucket::from_score(68.0, &stats), QuartileBucket::Top);
        assert_eq!(
            QuartileBucket::from_score(67.9, &stats),
            QuartileBucket::UpperMiddle
        );
        assert_eq!(
            QuartileBucket::from_score(45.0, &stats),
            QuartileBucket::UpperMiddle
        );
        assert_eq!(
            QuartileBucket::from_score(44.9, &stats),
            QuartileBucket::LowerMiddle
        );
        assert_eq!(
            QuartileBucket::from_score(28.0, &stats),
            QuartileBucket::LowerMiddle
        );
        assert_eq!(
            QuartileBucket::from_score(27.9, &stats),
            QuartileBucket::Bottom
        );
    }

    #[test]
    fn test_every_sector_covers_all_standard_dimensions() {
        for sector in Sector::ALL {
            for (dimension_id, _) in GENERAL_DIMENSIONS {
                assert!(
                    dimension_stats(sector, dimension_id).is_some(),
                    "{sector} missing {dimension_id}"
                );
            }
        }
    }

    #[test]
    fn test_sector_override_beats_general() {
        let general = dimension_stats(Sector::General, catalog::GOVERNANCE_ETHICS).unwrap();
        let healthcare = dimension_stats(Sector::Healthcare, catalog::GOVERNANCE_ETHICS).unwrap();
        assert_ne!(general.average, healthcare.average);

        // Retail has no governance override, so it reads the general row
        let retail = dimension_stats(Sector::Retail, catalog::GOVERNANCE_ETHICS).unwrap();
        assert_eq!(retail.average, general.average);
    }

    #[test]
    fn test_compare_all_fives() {
        let result = result_with_overall(5);
        let comparison = compare(&result, Sector::General);

        assert_eq!(comparison.overall.score, 100.0);
        assert_eq!(comparison.overall.standing, RelativeStanding::AboveAverage);
        assert_eq!(comparison.overall.quartile, QuartileBucket::Top);
        assert_eq!(comparison.dimensions.len(), 6);
        for dim in comparison.dimensions.values() {
            assert_eq!(dim.quartile, QuartileBucket::Top);
        }
    }

    #[test]
    fn test_compare_all_ones() {
        let result = result_with_overall(1);
        let comparison = compare(&result, Sector::Technology);

        assert_eq!(comparison.overall.standing, RelativeStanding::BelowAverage);
        assert_eq!(comparison.overall.quartile, QuartileBucket::Bottom);
        assert_eq!(comparison.overall.delta, -58.0);
    }

    #[test]
    fn test_unknown_dimension_omitted() {
        let mut result = result_with_overall(3);
        let mut stray = result.dimension_scores[0].clone();
        stray.dimension_id = "bespoke_dimension".to_string();
        result
            .dimension_scores
            .insert("bespoke_dimension".to_string(), stray);

        let comparison = compare(&result, Sector::General);
        assert!(!comparison.dimensions.contains_key("bespoke_dimension"));
        assert_eq!(comparison.dimensions.len(), 6);
    }

    #[test]
    fn test_comparison_is_deterministic() {
        let result = result_with_overall(3);
        let first = compare(&result, Sector::Finance);
        let second = compare(&result, Sector::Finance);
        assert_eq!(first, second);
    }

    #[test]
    fn test_at_average_when_delta_rounds_to_zero() {
        let mut result = result_with_overall(3);
        // General average is 45.0; 45.04 rounds to a zero delta
        result.overall_score = 45.04;
        let comparison = compare(&result, Sector::General);
        assert_eq!(comparison.overall.standing, RelativeStanding::AtAverage);
    }
}
