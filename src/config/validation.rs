//! Configuration validation for maturity-tools.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::*;
use crate::catalog::Sector;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.assessment.validate());
        errors.extend(self.prioritization.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for AssessmentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.default_sector.parse::<Sector>().is_err() {
            let valid: Vec<&str> = Sector::ALL.iter().map(|s| s.as_str()).collect();
            errors.push(ConfigError {
                field: "assessment.default_sector".to_string(),
                message: format!(
                    "Invalid sector '{}'. Valid options: {}",
                    self.default_sector,
                    valid.join(", ")
                ),
            });
        }

        for (dimension_id, weight) in &self.dimension_weights {
            if *weight <= 0.0 {
                errors.push(ConfigError {
                    field: format!("assessment.dimension_weights.{dimension_id}"),
                    message: format!("Weight must be positive, got {weight}"),
                });
            } else if *weight > 1.0 {
                errors.push(ConfigError {
                    field: format!("assessment.dimension_weights.{dimension_id}"),
                    message: format!("Weight must be at most 1.0, got {weight}"),
                });
            }
        }

        errors
    }
}

impl Validatable for PrioritizationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Err(e) = self.weights.validate() {
            errors.push(ConfigError {
                field: "prioritization.weights".to_string(),
                message: e.to_string(),
            });
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(min_score) = self.min_score {
            if !(0.0..=100.0).contains(&min_score) {
                errors.push(ConfigError {
                    field: "behavior.min_score".to_string(),
                    message: format!("Minimum score must be between 0 and 100, got {min_score}"),
                });
            }
        }

        errors
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_config_validation() {
        let config = AssessmentConfig {
            default_sector: "finance".to_string(),
            ..AssessmentConfig::default()
        };
        assert!(config.is_valid());

        let invalid = AssessmentConfig {
            default_sector: "aerospace".to_string(),
            ..AssessmentConfig::default()
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_dimension_weight_validation() {
        let mut config = AssessmentConfig::default();
        config
            .dimension_weights
            .insert("strategy_vision".to_string(), 0.4);
        assert!(config.is_valid());

        config
            .dimension_weights
            .insert("data_infrastructure".to_string(), 0.0);
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].field,
            "assessment.dimension_weights.data_infrastructure"
        );
    }

    #[test]
    fn test_prioritization_config_validation() {
        let valid = PrioritizationConfig::default();
        assert!(valid.is_valid());

        let mut invalid = PrioritizationConfig::default();
        invalid.weights.business_value = 0.9;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_behavior_config_validation() {
        let valid = BehaviorConfig {
            min_score: Some(60.0),
            quiet: false,
        };
        assert!(valid.is_valid());

        let invalid = BehaviorConfig {
            min_score: Some(150.0),
            quiet: false,
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError {
            field: "test_field".to_string(),
            message: "test error message".to_string(),
        };
        assert_eq!(error.to_string(), "test_field: test error message");
    }

    #[test]
    fn test_app_config_validation() {
        let valid = AppConfig::default();
        assert!(valid.is_valid());

        let mut invalid = AppConfig::default();
        invalid.assessment.default_sector = "invalid".to_string();
        assert!(!invalid.is_valid());
    }
}
