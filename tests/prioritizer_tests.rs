//! Integration tests for use case prioritization
//!
//! Covers the built-in sector templates, custom use case files, the
//! assessment-derived data readiness signal, weight configuration, and
//! prioritization reports.

use maturity_tools::{
    catalog::{ResponseSet, Sector},
    reports::{create_reporter, create_reporter_with_options, ReportConfig, ReportFormat},
    scoring::{AssessmentResult, MaturityScorer},
    usecase::{
        load_use_cases, templates_for_sector, Feasibility, PrioritizationResult, PriorityTier,
        PriorityWeights, UseCase, UseCasePrioritizer, ValueCategory,
    },
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

/// General-sector assessment with every question answered `value`.
fn uniform_assessment(value: i64) -> AssessmentResult {
    let scorer = MaturityScorer::new(Sector::General).expect("Catalog should build");
    let responses =
        ResponseSet::from_pairs(scorer.catalog().questions().map(|q| (q.id.clone(), value)))
            .expect("Uniform responses should validate");
    scorer.score(&responses, "Acme", "uc-fixture")
}

// ============================================================================
// Template Tests
// ============================================================================

mod template_tests {
    use super::*;

    #[test]
    fn test_template_counts_per_sector() {
        assert_eq!(templates_for_sector(Sector::General).len(), 6);
        for sector in [
            Sector::Healthcare,
            Sector::Finance,
            Sector::Retail,
            Sector::Manufacturing,
            Sector::Technology,
        ] {
            assert_eq!(templates_for_sector(sector).len(), 5, "{sector}");
        }
    }

    #[test]
    fn test_general_ranking_order() {
        let result = UseCasePrioritizer::new().prioritize(Sector::General, None, Vec::new());

        assert_eq!(result.sector, Sector::General);
        assert_eq!(result.ranked.len(), 6);
        assert_eq!(result.ranked[0].use_case.name, "Customer churn prediction");
        assert_eq!(result.ranked[0].priority_score, 81.0);
        for window in result.ranked.windows(2) {
            assert!(
                window[0].priority_score >= window[1].priority_score,
                "{} ranked above {}",
                window[1].use_case.name,
                window[0].use_case.name
            );
        }
    }

    #[test]
    fn test_sector_rankings_surface_sector_cases() {
        let prioritizer = UseCasePrioritizer::new();

        let technology = prioritizer.prioritize(Sector::Technology, None, Vec::new());
        assert_eq!(technology.ranked[0].use_case.name, "Support ticket triage");
        assert_eq!(technology.ranked[0].priority_score, 83.3);
        assert_eq!(technology.ranked[0].priority_tier, PriorityTier::QuickWin);

        let retail = prioritizer.prioritize(Sector::Retail, None, Vec::new());
        assert_eq!(retail.ranked[0].use_case.name, "Product recommendations");
        assert_eq!(retail.ranked[0].priority_score, 82.5);

        let manufacturing = prioritizer.prioritize(Sector::Manufacturing, None, Vec::new());
        assert_eq!(
            manufacturing.ranked[0].use_case.name,
            "Energy consumption optimization"
        );
        assert_eq!(manufacturing.ranked[0].priority_score, 76.5);
    }

    #[test]
    fn test_recommended_sequence_uses_tier_order() {
        let result = UseCasePrioritizer::new().prioritize(Sector::General, None, Vec::new());

        assert!(!result.recommended_sequence.is_empty());
        assert!(result.recommended_sequence.len() <= 5);
        // Sequence entries come from the ranked list
        for name in &result.recommended_sequence {
            assert!(
                result.ranked.iter().any(|c| &c.use_case.name == name),
                "{name} not in ranked output"
            );
        }
        assert_eq!(result.recommended_sequence[0], "Customer churn prediction");
    }

    #[test]
    fn test_tier_accessors_agree() {
        let result = UseCasePrioritizer::new().prioritize(Sector::Finance, None, Vec::new());

        let counts = result.tier_counts();
        let total: usize = counts.values().sum();
        assert_eq!(total, result.ranked.len());

        for (tier, count) in &counts {
            assert_eq!(result.in_tier(*tier).count(), *count);
        }
    }
}

// ============================================================================
// Custom Use Case Tests
// ============================================================================

mod custom_case_tests {
    use super::*;

    #[test]
    fn test_load_and_rank_custom_file() {
        let cases = load_use_cases(&fixture_path("use_cases/custom.json"))
            .expect("Fixture should load");
        assert_eq!(cases.len(), 2);

        let result = UseCasePrioritizer::new().prioritize(Sector::General, None, cases);

        assert_eq!(result.ranked.len(), 2, "Custom cases replace the templates");
        assert_eq!(result.ranked[0].use_case.name, "Invoice matching");
        assert_eq!(result.ranked[0].priority_score, 81.8);
        assert_eq!(result.ranked[0].priority_tier, PriorityTier::QuickWin);

        assert_eq!(result.ranked[1].use_case.name, "Contract risk review");
        assert_eq!(result.ranked[1].priority_score, 42.8);
        assert_eq!(result.ranked[1].priority_tier, PriorityTier::Future);
    }

    #[test]
    fn test_custom_sequence_skips_future_tier() {
        let cases = load_use_cases(&fixture_path("use_cases/custom.json")).unwrap();
        let result = UseCasePrioritizer::new().prioritize(Sector::General, None, cases);

        assert_eq!(result.recommended_sequence, vec!["Invoice matching"]);
    }

    #[test]
    fn test_corrupt_use_case_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.json");
        std::fs::write(&path, "{\"use_cases\": [{\"name\": \"No fields\"}]}").unwrap();

        assert!(load_use_cases(&path).is_err());
    }
}

// ============================================================================
// Assessment Signal Tests
// ============================================================================

mod assessment_signal_tests {
    use super::*;

    #[test]
    fn test_low_maturity_rewrites_template_readiness() {
        let assessment = uniform_assessment(1);
        let result =
            UseCasePrioritizer::new().prioritize(Sector::General, Some(&assessment), Vec::new());

        assert!(result.ranked.iter().all(|c| c.use_case.data_readiness == 1));
        // Low readiness reshuffles the ranking toward low-complexity work
        assert_eq!(
            result.ranked[0].use_case.name,
            "Document processing automation"
        );
        assert_eq!(result.ranked[0].priority_score, 72.8);
    }

    #[test]
    fn test_high_maturity_raises_template_readiness() {
        let assessment = uniform_assessment(5);
        let result =
            UseCasePrioritizer::new().prioritize(Sector::General, Some(&assessment), Vec::new());

        assert!(result.ranked.iter().all(|c| c.use_case.data_readiness == 10));

        let stock_max = templates_for_sector(Sector::General)
            .iter()
            .map(|c| c.data_readiness)
            .max()
            .unwrap();
        assert!(stock_max < 10, "Derived readiness exceeds every template default");
    }

    #[test]
    fn test_custom_cases_keep_author_readiness() {
        let assessment = uniform_assessment(1);
        let cases = load_use_cases(&fixture_path("use_cases/custom.json")).unwrap();

        let result =
            UseCasePrioritizer::new().prioritize(Sector::General, Some(&assessment), cases);

        let invoice = &result.ranked[0];
        assert_eq!(invoice.use_case.name, "Invoice matching");
        assert_eq!(invoice.use_case.data_readiness, 7);
    }
}

// ============================================================================
// Weight Configuration Tests
// ============================================================================

mod weights_tests {
    use super::*;

    #[test]
    fn test_default_weights_accepted() {
        let prioritizer = UseCasePrioritizer::with_weights(PriorityWeights::default())
            .expect("Defaults should validate");
        assert_eq!(prioritizer.weights().business_value, 0.30);
    }

    #[test]
    fn test_bad_weight_sums_rejected() {
        let mut weights = PriorityWeights::default();
        weights.feasibility = 0.50;
        assert!(UseCasePrioritizer::with_weights(weights).is_err());

        let negative = PriorityWeights {
            business_value: 0.60,
            feasibility: 0.60,
            data_readiness: -0.20,
            complexity: 0.0,
            time_to_value: 0.0,
        };
        assert!(UseCasePrioritizer::with_weights(negative).is_err());
    }

    #[test]
    fn test_value_heavy_weights_shift_scores() {
        let value_heavy = UseCasePrioritizer::with_weights(PriorityWeights {
            business_value: 0.50,
            feasibility: 0.20,
            data_readiness: 0.10,
            complexity: 0.10,
            time_to_value: 0.10,
        })
        .unwrap();

        let churn = UseCase::new(
            "Churn",
            "",
            ValueCategory::RevenueGrowth,
            Feasibility::High,
            7,
            4,
            "3-6 months",
        );
        assert_eq!(value_heavy.priority_score(&churn), 84.0);
        assert!(value_heavy.priority_score(&churn) > UseCasePrioritizer::new().priority_score(&churn));
    }
}

// ============================================================================
// Prioritization Report Tests
// ============================================================================

mod report_tests {
    use super::*;

    fn ranked_general() -> PrioritizationResult {
        UseCasePrioritizer::new().prioritize(Sector::General, None, Vec::new())
    }

    #[test]
    fn test_summary_report_lists_rankings() {
        let report = create_reporter_with_options(ReportFormat::Summary, false)
            .generate_prioritization_report(&ranked_general(), &ReportConfig::default())
            .unwrap();

        assert!(report.contains("AI Use Case Prioritization"));
        assert!(report.contains("Ranked Use Cases:"));
        assert!(report.contains("1. Customer churn prediction"));
        assert!(report.contains("Quick Win"));
        assert!(report.contains("Recommended Sequence:"));
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_json_report_envelope() {
        let report = create_reporter(ReportFormat::Json)
            .generate_prioritization_report(&ranked_general(), &ReportConfig::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["metadata"]["tool"]["name"], "maturity-tools");
        assert_eq!(value["prioritization"]["sector"], "general");
        assert_eq!(
            value["prioritization"]["ranked"][0]["name"],
            "Customer churn prediction"
        );
        assert_eq!(
            value["prioritization"]["ranked"][0]["priority_tier"],
            "quick_win"
        );
    }

    #[test]
    fn test_markdown_report_table() {
        let report = create_reporter(ReportFormat::Markdown)
            .generate_prioritization_report(&ranked_general(), &ReportConfig::default())
            .unwrap();

        assert!(report.starts_with("# AI Use Case Prioritization"));
        assert!(report.contains("## Ranked Use Cases"));
        assert!(report.contains("| 1 | Customer churn prediction | 81.0 | Quick Win |"));
        assert!(report.contains("## Recommended Sequence"));
    }

    #[test]
    fn test_details_section_toggle() {
        let brief = create_reporter_with_options(ReportFormat::Summary, false)
            .generate_prioritization_report(&ranked_general(), &ReportConfig::default())
            .unwrap();
        assert!(!brief.contains("Details:"));

        let full = create_reporter_with_options(ReportFormat::Summary, false)
            .generate_prioritization_report(&ranked_general(), &ReportConfig::full())
            .unwrap();
        assert!(full.contains("Details:"));
        assert!(full.contains("readiness: 7/10"));
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serde_tests {
    use super::*;

    #[test]
    fn test_prioritization_result_round_trip() {
        let result = UseCasePrioritizer::new().prioritize(Sector::Healthcare, None, Vec::new());

        let json = serde_json::to_string(&result).unwrap();
        let parsed: PrioritizationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_use_case_fields_flatten_into_ranked_entries() {
        let result = UseCasePrioritizer::new().prioritize(Sector::General, None, Vec::new());
        let json = serde_json::to_value(&result).unwrap();

        let first = &json["ranked"][0];
        assert!(first.get("use_case").is_none(), "Fields flatten to the top");
        assert_eq!(first["name"], "Customer churn prediction");
        assert_eq!(first["value_category"], "revenue_growth");
        assert!(first["priority_score"].is_number());
    }
}
