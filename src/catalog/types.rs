//! Core catalog data structures.

use crate::error::{CatalogErrorKind, MaturityError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single assessment question.
///
/// Questions are immutable once the catalog is built. Respondents answer
/// each question on a 1 to 5 agreement scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique across the whole catalog
    pub id: String,
    /// Statement the respondent rates from 1 (strongly disagree) to 5
    pub text: String,
    /// Identifier of the dimension this question belongs to
    pub dimension_id: String,
}

impl Question {
    /// Create a new question
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        dimension_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            dimension_id: dimension_id.into(),
        }
    }
}

/// A named category of related questions with an aggregation weight.
///
/// Weights lie in `(0, 1]`. The full standard set sums to 1.0, but the
/// scorer normalizes by the sum of weights actually present, so a subset
/// of dimensions still yields a valid 0 to 100 overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Stable identifier, e.g. `strategy_vision`
    pub id: String,
    /// Human-readable name, e.g. `Strategy & Vision`
    pub name: String,
    /// Contribution weight for the overall score
    pub weight: f64,
    /// Questions in catalog order
    pub questions: Vec<Question>,
}

impl Dimension {
    /// Create a dimension with no questions yet
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            questions: Vec::new(),
        }
    }

    /// Append a question, stamping it with this dimension's id
    #[must_use]
    pub fn with_question(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        let dimension_id = self.id.clone();
        self.questions.push(Question::new(id, text, dimension_id));
        self
    }

    /// Number of questions in this dimension
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Validated, immutable collection of dimensions.
///
/// Construction fails fast on malformed weights, duplicate question ids,
/// or questions pointing at a dimension other than their container. Once
/// built, the catalog is read-only; hot-swapping a catalog means building
/// a fresh one and replacing the whole snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCatalog {
    dimensions: IndexMap<String, Dimension>,
}

impl QuestionCatalog {
    /// Build a catalog from dimensions, validating invariants.
    pub fn new(dimensions: Vec<Dimension>) -> Result<Self> {
        if dimensions.is_empty() {
            return Err(MaturityError::catalog(
                "building catalog",
                CatalogErrorKind::Empty,
            ));
        }

        let mut seen_questions: HashSet<String> = HashSet::new();
        let mut map = IndexMap::with_capacity(dimensions.len());

        for dimension in dimensions {
            if dimension.weight <= 0.0 {
                return Err(MaturityError::catalog(
                    "building catalog",
                    CatalogErrorKind::NonPositiveWeight {
                        dimension: dimension.id,
                        weight: dimension.weight,
                    },
                ));
            }
            if dimension.weight > 1.0 {
                return Err(MaturityError::catalog(
                    "building catalog",
                    CatalogErrorKind::WeightAboveOne {
                        dimension: dimension.id,
                        weight: dimension.weight,
                    },
                ));
            }
            for question in &dimension.questions {
                if question.dimension_id != dimension.id {
                    return Err(MaturityError::catalog(
                        "building catalog",
                        CatalogErrorKind::OrphanQuestion {
                            id: question.id.clone(),
                            dimension: question.dimension_id.clone(),
                        },
                    ));
                }
                if !seen_questions.insert(question.id.clone()) {
                    return Err(MaturityError::catalog(
                        "building catalog",
                        CatalogErrorKind::DuplicateQuestion {
                            id: question.id.clone(),
                        },
                    ));
                }
            }
            map.insert(dimension.id.clone(), dimension);
        }

        Ok(Self { dimensions: map })
    }

    /// Dimensions in catalog order
    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.dimensions.values()
    }

    /// Look up a dimension by id
    #[must_use]
    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.dimensions.get(id)
    }

    /// Number of dimensions
    #[must_use]
    pub fn dimension_count(&self) -> usize {
        self.dimensions.len()
    }

    /// Total number of questions across all dimensions
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.dimensions.values().map(Dimension::question_count).sum()
    }

    /// Sum of all dimension weights
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.dimensions.values().map(|d| d.weight).sum()
    }

    /// Look up a question anywhere in the catalog
    #[must_use]
    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.dimensions
            .values()
            .flat_map(|d| d.questions.iter())
            .find(|q| q.id == question_id)
    }

    /// All questions in catalog order
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.dimensions.values().flat_map(|d| d.questions.iter())
    }
}
