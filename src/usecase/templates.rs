//! Built-in use case templates per sector.

use super::{Feasibility, UseCase, ValueCategory};
use crate::catalog::Sector;

/// Template use cases for a sector.
///
/// Every sector has its own list; `General` doubles as the fallback set
/// for callers that coerced an unknown sector upstream.
#[must_use]
pub fn templates_for_sector(sector: Sector) -> Vec<UseCase> {
    match sector {
        Sector::General => vec![
            UseCase::new(
                "Customer churn prediction",
                "Identify customers at risk of leaving and trigger targeted retention offers",
                ValueCategory::RevenueGrowth,
                Feasibility::High,
                7,
                4,
                "3-6 months",
            ),
            UseCase::new(
                "Document processing automation",
                "Extract structured data from invoices, contracts, and inbound forms",
                ValueCategory::CostReduction,
                Feasibility::High,
                6,
                3,
                "0-3 months",
            ),
            UseCase::new(
                "Demand forecasting",
                "Forecast demand to optimize inventory and staffing decisions",
                ValueCategory::OperationalEfficiency,
                Feasibility::Medium,
                6,
                5,
                "3-6 months",
            ),
            UseCase::new(
                "Customer support assistant",
                "Deflect routine support questions with a conversational assistant",
                ValueCategory::CustomerExperience,
                Feasibility::High,
                5,
                4,
                "3-6 months",
            ),
            UseCase::new(
                "Transaction anomaly detection",
                "Flag unusual transaction patterns for human review",
                ValueCategory::RiskMitigation,
                Feasibility::Medium,
                6,
                6,
                "6-12 months",
            ),
            UseCase::new(
                "Personalized recommendations",
                "Recommend products or content based on observed behavior",
                ValueCategory::RevenueGrowth,
                Feasibility::Medium,
                7,
                6,
                "6-12 months",
            ),
        ],
        Sector::Healthcare => vec![
            UseCase::new(
                "Patient no-show prediction",
                "Predict missed appointments and overbook or remind accordingly",
                ValueCategory::OperationalEfficiency,
                Feasibility::High,
                6,
                3,
                "0-3 months",
            ),
            UseCase::new(
                "Clinical documentation assistance",
                "Draft visit summaries from encounter notes for clinician review",
                ValueCategory::CostReduction,
                Feasibility::Medium,
                5,
                5,
                "3-6 months",
            ),
            UseCase::new(
                "Readmission risk scoring",
                "Score discharge cohorts for thirty-day readmission risk",
                ValueCategory::RiskMitigation,
                Feasibility::Medium,
                6,
                6,
                "6-12 months",
            ),
            UseCase::new(
                "Imaging study triage",
                "Route urgent findings in radiology worklists to the front of the queue",
                ValueCategory::CustomerExperience,
                Feasibility::Low,
                5,
                8,
                "12-18 months",
            ),
            UseCase::new(
                "Claims denial prediction",
                "Predict payer denials before submission and fix root causes",
                ValueCategory::RevenueGrowth,
                Feasibility::High,
                7,
                4,
                "3-6 months",
            ),
        ],
        Sector::Finance => vec![
            UseCase::new(
                "Transaction fraud detection",
                "Score transactions in real time and hold suspicious ones for review",
                ValueCategory::RiskMitigation,
                Feasibility::High,
                8,
                5,
                "3-6 months",
            ),
            UseCase::new(
                "Credit risk scoring",
                "Augment underwriting with behavioral and alternative data signals",
                ValueCategory::RevenueGrowth,
                Feasibility::Medium,
                7,
                6,
                "6-12 months",
            ),
            UseCase::new(
                "AML alert triage",
                "Rank anti-money-laundering alerts so investigators clear queues faster",
                ValueCategory::CostReduction,
                Feasibility::High,
                7,
                4,
                "3-6 months",
            ),
            UseCase::new(
                "Customer lifetime value modeling",
                "Estimate long-run account value to steer acquisition spend",
                ValueCategory::RevenueGrowth,
                Feasibility::Medium,
                6,
                5,
                "6-12 months",
            ),
            UseCase::new(
                "Loan document intelligence",
                "Extract covenants and terms from loan documentation automatically",
                ValueCategory::CostReduction,
                Feasibility::High,
                6,
                3,
                "0-3 months",
            ),
        ],
        Sector::Retail => vec![
            UseCase::new(
                "Store-level demand forecasting",
                "Forecast sales per store and SKU to cut stockouts and markdowns",
                ValueCategory::OperationalEfficiency,
                Feasibility::High,
                7,
                4,
                "3-6 months",
            ),
            UseCase::new(
                "Dynamic pricing",
                "Adjust prices within guardrails based on demand and competition",
                ValueCategory::RevenueGrowth,
                Feasibility::Medium,
                7,
                6,
                "6-12 months",
            ),
            UseCase::new(
                "Product recommendations",
                "Personalize product placement across site, app, and email",
                ValueCategory::RevenueGrowth,
                Feasibility::High,
                8,
                4,
                "3-6 months",
            ),
            UseCase::new(
                "Inventory rebalancing",
                "Move stock between locations ahead of predicted local demand",
                ValueCategory::CostReduction,
                Feasibility::Medium,
                6,
                6,
                "6-12 months",
            ),
            UseCase::new(
                "Visual product search",
                "Let shoppers search the catalog with photos instead of keywords",
                ValueCategory::CustomerExperience,
                Feasibility::Low,
                5,
                7,
                "12-18 months",
            ),
        ],
        Sector::Manufacturing => vec![
            UseCase::new(
                "Predictive maintenance",
                "Predict equipment failures from sensor data before they stop the line",
                ValueCategory::CostReduction,
                Feasibility::High,
                6,
                5,
                "3-6 months",
            ),
            UseCase::new(
                "Visual quality inspection",
                "Catch surface defects with camera-based inspection at line speed",
                ValueCategory::OperationalEfficiency,
                Feasibility::Medium,
                5,
                6,
                "6-12 months",
            ),
            UseCase::new(
                "Supply chain disruption alerts",
                "Detect supplier and logistics risks early enough to reroute",
                ValueCategory::RiskMitigation,
                Feasibility::Medium,
                5,
                6,
                "6-12 months",
            ),
            UseCase::new(
                "Energy consumption optimization",
                "Tune plant energy usage against production schedules and tariffs",
                ValueCategory::CostReduction,
                Feasibility::High,
                6,
                4,
                "3-6 months",
            ),
            UseCase::new(
                "Production scheduling optimization",
                "Sequence orders across lines to raise throughput without new capacity",
                ValueCategory::OperationalEfficiency,
                Feasibility::Low,
                5,
                8,
                "12-18 months",
            ),
        ],
        Sector::Technology => vec![
            UseCase::new(
                "Support ticket triage",
                "Classify and route inbound tickets with suggested responses",
                ValueCategory::CostReduction,
                Feasibility::High,
                8,
                3,
                "0-3 months",
            ),
            UseCase::new(
                "Code assistant rollout",
                "Deploy AI pair-programming tools with adoption and quality tracking",
                ValueCategory::OperationalEfficiency,
                Feasibility::High,
                7,
                3,
                "0-3 months",
            ),
            UseCase::new(
                "Churn early-warning",
                "Score accounts on usage decay and alert customer success",
                ValueCategory::RevenueGrowth,
                Feasibility::High,
                8,
                4,
                "3-6 months",
            ),
            UseCase::new(
                "Telemetry anomaly detection",
                "Surface abnormal service behavior before customers report it",
                ValueCategory::RiskMitigation,
                Feasibility::Medium,
                7,
                6,
                "6-12 months",
            ),
            UseCase::new(
                "In-product usage insights",
                "Mine feature usage to steer roadmap and onboarding flows",
                ValueCategory::CustomerExperience,
                Feasibility::Medium,
                7,
                5,
                "6-12 months",
            ),
        ],
    }
}
