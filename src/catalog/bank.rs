//! The built-in question bank.
//!
//! Six weighted dimensions, four questions each, plus two extra questions
//! per non-general sector that slot into existing dimensions. Weights sum
//! to 1.0 for the standard set.

use super::{Dimension, Question, QuestionCatalog, Sector};
use crate::error::Result;

/// Dimension id for strategy questions
pub const STRATEGY_VISION: &str = "strategy_vision";
/// Dimension id for data questions
pub const DATA_INFRASTRUCTURE: &str = "data_infrastructure";
/// Dimension id for tooling questions
pub const TECHNOLOGY_TOOLS: &str = "technology_tools";
/// Dimension id for skills questions
pub const TALENT_SKILLS: &str = "talent_skills";
/// Dimension id for governance questions
pub const GOVERNANCE_ETHICS: &str = "governance_ethics";
/// Dimension id for culture questions
pub const CULTURE_ADOPTION: &str = "culture_adoption";

fn standard_dimensions() -> Vec<Dimension> {
    vec![
        Dimension::new(STRATEGY_VISION, "Strategy & Vision", 0.20)
            .with_question(
                "strategy_1",
                "Our organization has a clearly defined AI strategy that is aligned with overall business objectives",
            )
            .with_question(
                "strategy_2",
                "Executive leadership actively sponsors and funds AI initiatives",
            )
            .with_question(
                "strategy_3",
                "We maintain a prioritized roadmap of AI use cases with measurable success criteria",
            )
            .with_question(
                "strategy_4",
                "AI investment decisions are tied to quantified business outcomes",
            ),
        Dimension::new(DATA_INFRASTRUCTURE, "Data & Infrastructure", 0.20)
            .with_question(
                "data_1",
                "Critical business data is centralized, cataloged, and accessible to the teams that need it",
            )
            .with_question(
                "data_2",
                "We have established data quality standards with active monitoring and remediation processes",
            )
            .with_question(
                "data_3",
                "Our infrastructure can scale to support machine learning workloads",
            )
            .with_question(
                "data_4",
                "Data pipelines are automated and reliable rather than manual and ad hoc",
            ),
        Dimension::new(TECHNOLOGY_TOOLS, "Technology & Tools", 0.15)
            .with_question(
                "technology_1",
                "We use modern machine learning platforms or services in production",
            )
            .with_question(
                "technology_2",
                "Model deployment and monitoring follow a standardized path shared across teams",
            )
            .with_question(
                "technology_3",
                "We can move a model from prototype to production in weeks rather than months",
            )
            .with_question(
                "technology_4",
                "Our technology stack supports experimentation without long procurement cycles",
            ),
        Dimension::new(TALENT_SKILLS, "Talent & Skills", 0.15)
            .with_question(
                "talent_1",
                "We employ dedicated data science or machine learning practitioners",
            )
            .with_question(
                "talent_2",
                "Technical teams receive ongoing training in AI tools and techniques",
            )
            .with_question(
                "talent_3",
                "Business staff understand where AI can and cannot help their work",
            )
            .with_question(
                "talent_4",
                "We can attract and retain specialized AI talent in competition with our peers",
            ),
        Dimension::new(GOVERNANCE_ETHICS, "Governance & Ethics", 0.15)
            .with_question(
                "governance_1",
                "AI initiatives follow a documented review process covering risk, privacy, and compliance",
            )
            .with_question(
                "governance_2",
                "Decisions made by our models that affect customers can be explained and audited",
            )
            .with_question(
                "governance_3",
                "We monitor production models for bias, drift, and degradation",
            )
            .with_question(
                "governance_4",
                "Accountability for AI system outcomes is clearly assigned",
            ),
        Dimension::new(CULTURE_ADOPTION, "Culture & Adoption", 0.15)
            .with_question(
                "culture_1",
                "Teams across the organization actively propose AI use cases",
            )
            .with_question(
                "culture_2",
                "Experimentation is encouraged and unsuccessful pilots are treated as learning",
            )
            .with_question(
                "culture_3",
                "Adoption of AI tools is measured and supported with change management",
            )
            .with_question(
                "culture_4",
                "Data-informed decision making is the norm rather than the exception",
            ),
    ]
}

/// Extra questions layered onto the standard set for a sector.
///
/// Each entry is `(dimension id, question id, text)`. The general sector
/// adds nothing.
fn sector_questions(sector: Sector) -> &'static [(&'static str, &'static str, &'static str)] {
    match sector {
        Sector::General => &[],
        Sector::Healthcare => &[
            (
                GOVERNANCE_ETHICS,
                "healthcare_1",
                "Clinical AI applications undergo validation consistent with patient safety and regulatory requirements",
            ),
            (
                DATA_INFRASTRUCTURE,
                "healthcare_2",
                "Protected health information used in AI workflows is governed with auditable access controls",
            ),
        ],
        Sector::Finance => &[
            (
                GOVERNANCE_ETHICS,
                "finance_1",
                "Our model risk management practices satisfy regulatory expectations for financial institutions",
            ),
            (
                DATA_INFRASTRUCTURE,
                "finance_2",
                "Transaction and customer data are available for modeling under appropriate controls",
            ),
        ],
        Sector::Retail => &[
            (
                DATA_INFRASTRUCTURE,
                "retail_1",
                "Customer behavior data from every sales channel is unified for personalization and forecasting",
            ),
            (
                TECHNOLOGY_TOOLS,
                "retail_2",
                "We can run AI-driven pricing or recommendation experiments directly in production",
            ),
        ],
        Sector::Manufacturing => &[
            (
                DATA_INFRASTRUCTURE,
                "manufacturing_1",
                "Sensor and equipment data is collected at a quality sufficient for predictive maintenance",
            ),
            (
                TECHNOLOGY_TOOLS,
                "manufacturing_2",
                "Edge or plant-floor systems can host models close to the production processes they serve",
            ),
        ],
        Sector::Technology => &[
            (
                STRATEGY_VISION,
                "techsector_1",
                "AI capabilities are treated as product differentiators with dedicated roadmap investment",
            ),
            (
                TALENT_SKILLS,
                "techsector_2",
                "Engineers across product teams routinely embed machine learning capabilities into features",
            ),
        ],
    }
}

/// Build the standard six-dimension catalog.
pub fn standard_catalog() -> Result<QuestionCatalog> {
    QuestionCatalog::new(standard_dimensions())
}

/// Build the catalog for a sector, appending its extra questions to the
/// dimensions they belong to.
pub fn catalog_for_sector(sector: Sector) -> Result<QuestionCatalog> {
    let mut dimensions = standard_dimensions();
    for (dimension_id, question_id, text) in sector_questions(sector) {
        if let Some(dimension) = dimensions.iter_mut().find(|d| d.id == *dimension_id) {
            let owner = dimension.id.clone();
            dimension
                .questions
                .push(Question::new(*question_id, *text, owner));
        }
    }
    QuestionCatalog::new(dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = standard_catalog().unwrap();
        assert_eq!(catalog.dimension_count(), 6);
        assert_eq!(catalog.question_count(), 24);
        assert!((catalog.total_weight() - 1.0).abs() < 1e-9);

        for dimension in catalog.dimensions() {
            assert_eq!(dimension.question_count(), 4, "{}", dimension.id);
        }
    }

    #[test]
    fn test_all_sector_catalogs_validate() {
        for sector in Sector::ALL {
            let catalog = catalog_for_sector(sector).unwrap();
            let expected = if sector == Sector::General { 24 } else { 26 };
            assert_eq!(catalog.question_count(), expected, "{sector}");
        }
    }

    #[test]
    fn test_sector_questions_land_in_their_dimension() {
        let catalog = catalog_for_sector(Sector::Healthcare).unwrap();
        let q = catalog.find_question("healthcare_1").unwrap();
        assert_eq!(q.dimension_id, GOVERNANCE_ETHICS);

        let governance = catalog.dimension(GOVERNANCE_ETHICS).unwrap();
        assert_eq!(governance.question_count(), 5);
        // Augmented questions come after the standard four
        assert_eq!(governance.questions[4].id, "healthcare_1");
    }

    #[test]
    fn test_general_sector_matches_standard() {
        let standard = standard_catalog().unwrap();
        let general = catalog_for_sector(Sector::General).unwrap();
        assert_eq!(standard.question_count(), general.question_count());
    }

    #[test]
    fn test_question_ids_are_unique_per_sector() {
        // QuestionCatalog::new would reject duplicates; this documents the
        // id convention instead.
        let catalog = catalog_for_sector(Sector::Technology).unwrap();
        assert!(catalog.find_question("techsector_1").is_some());
        assert!(catalog.find_question("techsector_2").is_some());
    }
}
