//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".maturity-tools.yaml",
    ".maturity-tools.yml",
    "maturity-tools.yaml",
    "maturity-tools.yml",
    ".maturity-toolsrc",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/maturity-tools/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // 1. Use explicit path if provided
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    // 2. Search current directory
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    // 3. Search git root (if in a repo)
    if let Some(git_root) = find_git_root() {
        if let Some(path) = find_config_in_dir(&git_root) {
            return Some(path);
        }
    }

    // 4. Search user config directory
    if let Some(config_dir) = dirs::config_dir() {
        let app_config_dir = config_dir.join("maturity-tools");
        if let Some(path) = find_config_in_dir(&app_config_dir) {
            return Some(path);
        }
    }

    // 5. Search home directory
    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        let git_dir = current.join(".git");
        if git_dir.exists() {
            return Some(current.to_path_buf());
        }

        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from a discovered file, or return the default when no
/// file exists.
///
/// A file that exists but cannot be read or parsed is an error, never a
/// silent fallback: scoring with weights other than the ones the user
/// wrote would be worse than refusing to run.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    match discover_config_file(explicit_path) {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok((config, Some(path)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// This is useful for layering CLI args over file config.
    pub fn merge(&mut self, other: &Self) {
        // Assessment config
        if other.assessment.default_sector != "general" {
            self.assessment
                .default_sector
                .clone_from(&other.assessment.default_sector);
        }
        if !other.assessment.dimension_weights.is_empty() {
            self.assessment.dimension_weights.extend(
                other
                    .assessment
                    .dimension_weights
                    .iter()
                    .map(|(id, weight)| (id.clone(), *weight)),
            );
        }

        // Prioritization config
        if other.prioritization.weights != crate::usecase::PriorityWeights::default() {
            self.prioritization.weights = other.prioritization.weights;
        }

        // Output config - only override if explicitly set
        if other.output.format != crate::reports::ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.min_score.is_some() {
            self.behavior.min_score = other.behavior.min_score;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (mut config, loaded_from) = load_or_default(config_path)?;
        config.merge(cli_overrides);
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# AI Maturity Tools Configuration
# Place this file at .maturity-tools.yaml in your project root or ~/.config/maturity-tools/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# AI Maturity Tools Configuration File
# =====================================
#
# This file configures maturity-tools behavior. Place it at:
#   - .maturity-tools.yaml in your project root
#   - ~/.config/maturity-tools/maturity-tools.yaml for global config
#
# CLI arguments always override file settings.

# Assessment configuration
assessment:
  # Sector used when none is given: general, healthcare, finance,
  # retail, manufacturing, technology
  default_sector: general
  # Dimension weight overrides (each 0-1; unlisted dimensions keep
  # their catalog weight)
  # dimension_weights:
  #   strategy_vision: 0.30
  #   governance_ethics: 0.10
  dimension_weights: {}

# Use case prioritization
prioritization:
  # Sub-score weights, must sum to 1.0
  weights:
    business_value: 0.30
    feasibility: 0.25
    data_readiness: 0.15
    complexity: 0.15
    time_to_value: 0.15

# Output configuration
output:
  # Format: auto, summary, json, markdown
  format: auto
  # Output file path (omit for stdout)
  # file: report.json
  # Disable colored output
  no_color: false

# Behavior flags
behavior:
  # Exit with code 1 if the overall score is below this threshold
  # min_score: 50
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".maturity-tools.yaml");
        std::fs::write(&config_path, "assessment:\n  default_sector: finance\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
assessment:
  default_sector: healthcare
  dimension_weights:
    strategy_vision: 0.3
behavior:
  min_score: 60
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.assessment.default_sector, "healthcare");
        assert_eq!(
            config.assessment.dimension_weights.get("strategy_vision"),
            Some(&0.3)
        );
        assert_eq!(config.behavior.min_score, Some(60.0));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_malformed_config_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".maturity-tools.yaml");
        std::fs::write(&config_path, "assessment: [not, a, mapping]\n").unwrap();

        let result = load_or_default(Some(&config_path));
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::default();
        base.assessment.default_sector = "retail".to_string();

        let override_config = AppConfig::builder()
            .default_sector("finance")
            .min_score(Some(70.0))
            .quiet(true)
            .build();

        base.merge(&override_config);

        assert_eq!(base.assessment.default_sector, "finance");
        assert_eq!(base.behavior.min_score, Some(70.0));
        assert!(base.behavior.quiet);
    }

    #[test]
    fn test_merge_keeps_file_settings_when_cli_is_default() {
        let mut base = AppConfig::builder()
            .default_sector("healthcare")
            .min_score(Some(40.0))
            .build();

        base.merge(&AppConfig::default());

        assert_eq!(base.assessment.default_sector, "healthcare");
        assert_eq!(base.behavior.min_score, Some(40.0));
    }

    #[test]
    fn test_generate_example_config() {
        let example = generate_example_config();
        assert!(example.contains("assessment:"));
        assert!(example.contains("default_sector"));
    }

    #[test]
    fn test_full_example_config_parses() {
        let example = generate_full_example_config();
        let stripped: String = example
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let config: AppConfig = serde_yaml::from_str(&stripped).unwrap();
        assert_eq!(config.assessment.default_sector, "general");
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "assessment:\n  default_sector: finance").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
