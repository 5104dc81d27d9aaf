//! Response sets and assessment input files.
//!
//! A [`ResponseSet`] is the validated form the scorer consumes: every value
//! is already an integer in 1..=5. Validation happens here, at the edge,
//! so the scoring engine can assume its precondition instead of checking it.

use super::Sector;
use crate::error::{InputErrorKind, MaturityError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Validated mapping from question id to a 1..=5 response.
///
/// Unanswered questions are simply absent. Insertion order is preserved,
/// though the scorer walks the catalog rather than this map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseSet {
    responses: IndexMap<String, u8>,
}

impl ResponseSet {
    /// Create an empty response set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a response, rejecting values outside 1..=5.
    ///
    /// Re-answering a question overwrites the previous value.
    pub fn insert(&mut self, question_id: impl Into<String>, value: i64) -> Result<()> {
        let question_id = question_id.into();
        if !(1..=5).contains(&value) {
            return Err(MaturityError::response_out_of_range(question_id, value));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        self.responses.insert(question_id, value as u8);
        Ok(())
    }

    /// Build from `(question id, value)` pairs, validating each.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (id, value) in pairs {
            set.insert(id, value)?;
        }
        Ok(set)
    }

    /// Validate raw parsed values into a response set.
    ///
    /// Non-integer values (floats, strings, booleans) are rejected before
    /// range checking, so `3.5` reads as "not an integer" rather than
    /// "out of range".
    pub fn from_raw(raw: &IndexMap<String, serde_json::Value>) -> Result<Self> {
        let mut set = Self::new();
        for (question_id, value) in raw {
            let Some(int_value) = value.as_i64() else {
                return Err(MaturityError::input(
                    "response validation",
                    InputErrorKind::ResponseNotInteger {
                        question: question_id.clone(),
                    },
                ));
            };
            set.insert(question_id.clone(), int_value)?;
        }
        Ok(set)
    }

    /// Response for a question, if answered
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.responses.get(question_id).copied()
    }

    /// Number of answered questions
    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Whether no questions were answered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Iterate over `(question id, value)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.responses.iter().map(|(id, v)| (id.as_str(), *v))
    }
}

/// A complete assessment submission as read from a JSON or YAML file.
///
/// The `responses` field stays raw until [`AssessmentInput::validated_responses`]
/// turns it into a [`ResponseSet`], so a malformed value reports the question
/// it belongs to rather than a serde type error.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentInput {
    /// Organization display name
    pub organization_name: String,
    /// Sector string, coerced with [`Sector::from_input`]
    #[serde(default)]
    pub sector: Option<String>,
    /// Caller-assigned assessment id; one is generated when absent
    #[serde(default)]
    pub assessment_id: Option<String>,
    /// Raw question id to value mapping
    #[serde(default)]
    pub responses: IndexMap<String, serde_json::Value>,
}

impl AssessmentInput {
    /// Parse from a JSON document
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse from a YAML document
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Load from a file, dispatching on extension (.json, .yaml, .yml).
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| MaturityError::io(path, e))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            other => Err(MaturityError::input(
                format!("loading {}", path.display()),
                InputErrorKind::UnsupportedFormat(other.to_string()),
            )),
        }
    }

    /// Sector after lossy coercion, `General` when absent or unknown
    #[must_use]
    pub fn resolved_sector(&self) -> Sector {
        self.sector
            .as_deref()
            .map(Sector::from_input)
            .unwrap_or_default()
    }

    /// Validate the raw responses into a [`ResponseSet`].
    pub fn validated_responses(&self) -> Result<ResponseSet> {
        ResponseSet::from_raw(&self.responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_validates_range() {
        let mut set = ResponseSet::new();
        set.insert("q1", 1).unwrap();
        set.insert("q2", 5).unwrap();
        assert!(set.insert("q3", 0).is_err());
        assert!(set.insert("q4", 6).is_err());
        assert!(set.insert("q5", -2).is_err());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut set = ResponseSet::new();
        set.insert("q1", 2).unwrap();
        set.insert("q1", 4).unwrap();
        assert_eq!(set.get("q1"), Some(4));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_raw_rejects_non_integers() {
        let mut raw: IndexMap<String, serde_json::Value> = IndexMap::new();
        raw.insert("q1".to_string(), serde_json::json!(3.5));
        let err = ResponseSet::from_raw(&raw).unwrap_err();
        assert!(matches!(
            err,
            MaturityError::Input {
                source: InputErrorKind::ResponseNotInteger { .. },
                ..
            }
        ));

        raw.clear();
        raw.insert("q1".to_string(), serde_json::json!("4"));
        assert!(ResponseSet::from_raw(&raw).is_err());
    }

    #[test]
    fn test_assessment_input_from_json() {
        let input = AssessmentInput::from_json_str(
            r#"{
                "organization_name": "Acme Corp",
                "sector": "retail",
                "responses": {"strategy_1": 4, "data_1": 2}
            }"#,
        )
        .unwrap();

        assert_eq!(input.organization_name, "Acme Corp");
        assert_eq!(input.resolved_sector(), Sector::Retail);
        assert!(input.assessment_id.is_none());

        let responses = input.validated_responses().unwrap();
        assert_eq!(responses.get("strategy_1"), Some(4));
        assert_eq!(responses.get("data_1"), Some(2));
    }

    #[test]
    fn test_assessment_input_from_yaml() {
        let input = AssessmentInput::from_yaml_str(
            "organization_name: Acme Corp\nresponses:\n  strategy_1: 5\n  culture_3: 1\n",
        )
        .unwrap();

        assert_eq!(input.resolved_sector(), Sector::General);
        let responses = input.validated_responses().unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses.get("culture_3"), Some(1));
    }

    #[test]
    fn test_out_of_range_reports_question() {
        let input = AssessmentInput::from_json_str(
            r#"{"organization_name": "X", "responses": {"strategy_1": 7}}"#,
        )
        .unwrap();

        let err = input.validated_responses().unwrap_err();
        assert!(err.to_string().contains("strategy_1") || format!("{err:?}").contains("strategy_1"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.toml");
        std::fs::write(&path, "organization_name = \"X\"").unwrap();

        let err = AssessmentInput::from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            MaturityError::Input {
                source: InputErrorKind::UnsupportedFormat(_),
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AssessmentInput::from_file(Path::new("/nonexistent/responses.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/responses.json"));
    }

    #[test]
    fn test_response_order_preserved() {
        let set = ResponseSet::from_pairs([("b", 3), ("a", 4), ("c", 2)]).unwrap();
        let ids: Vec<&str> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
