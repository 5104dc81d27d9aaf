//! Unified error types for maturity-tools.
//!
//! The scoring engine itself is total: degenerate input yields a degenerate
//! result, never an error. Errors arise at the edges, where catalogs are
//! built, responses validated, configuration loaded, and reports written.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for maturity-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MaturityError {
    /// Errors while building or validating a question catalog
    #[error("Invalid question catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors while validating raw assessment input
    #[error("Invalid assessment input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Dimension '{dimension}' has non-positive weight {weight}")]
    NonPositiveWeight { dimension: String, weight: f64 },

    #[error("Dimension '{dimension}' weight {weight} exceeds 1.0")]
    WeightAboveOne { dimension: String, weight: f64 },

    #[error("Duplicate question id '{id}'")]
    DuplicateQuestion { id: String },

    #[error("Question '{id}' references unknown dimension '{dimension}'")]
    OrphanQuestion { id: String, dimension: String },

    #[error("Catalog has no dimensions")]
    Empty,
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Response for '{question}' is {value}, expected an integer in 1..=5")]
    ResponseOutOfRange { question: String, value: i64 },

    #[error("Response for '{question}' is not an integer")]
    ResponseNotInteger { question: String },

    #[error("Use case '{name}': {field} is {value}, expected 1..=10")]
    UseCaseFieldOutOfRange {
        name: String,
        field: &'static str,
        value: i64,
    },

    #[error("Unsupported response file format: {0} (expected .json or .yaml)")]
    UnsupportedFormat(String),

    #[error("Malformed response file: {0}")]
    Malformed(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for maturity-tools operations
pub type Result<T> = std::result::Result<T, MaturityError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MaturityError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create an input error for an out-of-range response value
    pub fn response_out_of_range(question: impl Into<String>, value: i64) -> Self {
        Self::input(
            "response validation",
            InputErrorKind::ResponseOutOfRange {
                question: question.into(),
                value,
            },
        )
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for MaturityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MaturityError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::Malformed(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for MaturityError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::input(
            "YAML deserialization",
            InputErrorKind::Malformed(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, creating
/// a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MaturityError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: MaturityError, new_ctx: &str) -> MaturityError {
    match err {
        MaturityError::Catalog {
            context: existing,
            source,
        } => MaturityError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MaturityError::Input {
            context: existing,
            source,
        } => MaturityError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MaturityError::Report {
            context: existing,
            source,
        } => MaturityError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MaturityError::Io {
            path,
            message,
            source,
        } => MaturityError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MaturityError::Config(msg) => MaturityError::Config(chain_context(new_ctx, &msg)),
        MaturityError::Validation(msg) => MaturityError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MaturityError::response_out_of_range("strategy_1", 9);
        let display = err.to_string();
        assert!(
            display.contains("input"),
            "Error message should mention input: {}",
            display
        );

        let err = MaturityError::catalog(
            "loading standard catalog",
            CatalogErrorKind::NonPositiveWeight {
                dimension: "data_infrastructure".to_string(),
                weight: 0.0,
            },
        );
        assert!(err.to_string().contains("catalog"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = MaturityError::io("/path/to/responses.json", io_err);
        assert!(err.to_string().contains("/path/to/responses.json"));
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(MaturityError::input(
            "initial context",
            InputErrorKind::ResponseNotInteger {
                question: "q1".to_string(),
            },
        ));

        match initial.context("outer context") {
            Err(MaturityError::Input { context, .. }) => {
                assert!(context.contains("outer context"), "got: {}", context);
                assert!(context.contains("initial context"), "got: {}", context);
            }
            _ => panic!("Expected Input error"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(MaturityError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
