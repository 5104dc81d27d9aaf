//! Command-line interface handlers.
//!
//! Each subcommand lives in its own module and exposes a `run_*` function
//! returning a process exit code. Handlers log failures and map them to
//! exit codes rather than bubbling panics; only unexpected I/O or
//! serialization failures propagate as errors.

mod assess;
mod benchmark;
mod catalog;
mod prioritize;

pub use assess::{run_assess, AssessConfig};
pub use benchmark::run_benchmark;
pub use catalog::run_catalog;
pub use prioritize::{run_prioritize, PrioritizeConfig};

use anyhow::Context;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::reports::ReportFormat;

/// Process exit codes. Scripted callers branch on these.
pub mod exit_codes {
    /// Run completed
    pub const SUCCESS: i32 = 0;
    /// Run completed but the overall score fell below the configured minimum
    pub const BELOW_THRESHOLD: i32 = 1;
    /// Input file or configuration failed validation
    pub const INVALID_INPUT: i32 = 2;
    /// Unexpected error
    pub const ERROR: i32 = 3;
}

/// Where a report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Pick a target from an optional `--output-file` path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }

    /// Whether the target is an interactive terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Stdout => std::io::stdout().is_terminal(),
            Self::File(_) => false,
        }
    }
}

/// Resolve `Auto` to the human-readable default.
#[must_use]
pub fn resolve_format(format: ReportFormat) -> ReportFormat {
    match format {
        ReportFormat::Auto => ReportFormat::Summary,
        other => other,
    }
}

/// Whether ANSI colors should be emitted.
///
/// Color is off when the flag says so, when the `NO_COLOR` environment
/// variable is set, or when output is not going to a terminal.
#[must_use]
pub fn should_use_color(no_color: bool, target: &OutputTarget) -> bool {
    !no_color && std::env::var("NO_COLOR").is_err() && target.is_terminal()
}

/// Write a rendered report to its target.
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> anyhow::Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Output written to {}", path.display());
            }
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_option(Some(PathBuf::from("report.json"))),
            OutputTarget::File(PathBuf::from("report.json"))
        );
    }

    #[test]
    fn test_file_target_is_never_a_terminal() {
        let target = OutputTarget::File(PathBuf::from("report.md"));
        assert!(!target.is_terminal());
        assert!(!should_use_color(false, &target));
    }

    #[test]
    fn test_resolve_format_defaults_auto_to_summary() {
        assert_eq!(resolve_format(ReportFormat::Auto), ReportFormat::Summary);
        assert_eq!(resolve_format(ReportFormat::Json), ReportFormat::Json);
        assert_eq!(
            resolve_format(ReportFormat::Markdown),
            ReportFormat::Markdown
        );
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output("hello", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_output_reports_unwritable_path() {
        let target = OutputTarget::File(PathBuf::from("/nonexistent/dir/out.txt"));
        let err = write_output("hello", &target, true).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/out.txt"));
    }
}
