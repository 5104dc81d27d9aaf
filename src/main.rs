//! maturity-tools: AI maturity scoring and use case prioritization
//!
//! Scores questionnaire responses across six maturity dimensions, compares
//! organizations against sector benchmarks, and ranks candidate AI use cases.

#![allow(
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::needless_pass_by_value
)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use maturity_tools::{
    cli::{self, exit_codes, AssessConfig, PrioritizeConfig},
    config::AppConfig,
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with sector and format info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSectors:",
        "\n  general, healthcare, finance, retail, manufacturing, technology",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown",
        "\n\nFeatures:",
        "\n  Weighted dimension scoring, maturity classification, sector",
        "\n  benchmarks, use case prioritization"
    )
}

#[derive(Parser)]
#[command(name = "maturity-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "AI maturity scoring and use case prioritization", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Overall score below --min-score
    2  Invalid input or configuration
    3  Error occurred

EXAMPLES:
    # Score a response file with a human-readable summary
    maturity-tools assess responses.json

    # CI/CD maturity gate with benchmarks
    maturity-tools assess responses.json --benchmark --min-score 50 -o summary

    # Export JSON for processing
    maturity-tools assess responses.json -o json > result.json

    # Compare a saved result against another sector's benchmarks
    maturity-tools benchmark result.json --sector technology

    # Rank the retail use case templates, informed by an assessment
    maturity-tools prioritize --sector retail --assessment result.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "MATURITY_TOOLS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs (extracted for readability)
// ============================================================================

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    /// Path to the response file (.json, .yaml, .yml)
    input: PathBuf,

    /// Organization name (overrides the one in the input file)
    #[arg(long)]
    org: Option<String>,

    /// Sector catalog and benchmarks to use
    #[arg(short, long)]
    sector: Option<String>,

    /// Assessment identifier (one is generated when absent)
    #[arg(long)]
    assessment_id: Option<String>,

    /// Attach a sector benchmark comparison
    #[arg(short, long)]
    benchmark: bool,

    /// Exit with code 1 when the overall score is below this value
    #[arg(long, value_name = "SCORE")]
    min_score: Option<f64>,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Include the recommendations section in the report
    #[arg(short, long)]
    recommendations: bool,

    /// Include per-dimension strength and improvement detail
    #[arg(short, long)]
    detail: bool,
}

/// Arguments for the `benchmark` subcommand
#[derive(Parser)]
struct BenchmarkArgs {
    /// Path to a saved assessment result (JSON)
    result: PathBuf,

    /// Sector to compare against (defaults to the one in the saved result)
    #[arg(short, long)]
    sector: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `prioritize` subcommand
#[derive(Parser)]
struct PrioritizeArgs {
    /// Sector whose use case templates to rank
    #[arg(short, long)]
    sector: Option<String>,

    /// Path to a custom use case file (.json, .yaml, .yml)
    #[arg(short, long, value_name = "FILE")]
    use_cases: Option<PathBuf>,

    /// Path to a saved assessment result used as a data readiness signal
    #[arg(short, long, value_name = "FILE")]
    assessment: Option<PathBuf>,

    /// Include per-case scoring detail
    #[arg(short, long)]
    detail: bool,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `catalog` subcommand
#[derive(Parser)]
struct CatalogArgs {
    /// Sector whose question catalog to print
    #[arg(short, long)]
    sector: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Top-level commands
#[derive(Subcommand)]
enum Commands {
    /// Score an assessment response file
    Assess(AssessArgs),

    /// Compare a saved assessment result against sector benchmarks
    Benchmark(BenchmarkArgs),

    /// Rank AI use cases by priority
    Prioritize(PrioritizeArgs),

    /// Print the question catalog for a sector
    Catalog(CatalogArgs),

    /// Generate shell completion scripts (bash, zsh, fish, powershell, elvish)
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for config file validation
    ConfigSchema {
        /// Output file path (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect and manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .maturity-tools.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Assess(args) => {
            let app = load_merged_config(
                cli.config.as_deref(),
                args.output,
                args.output_file,
                args.min_score,
                cli.no_color,
                cli.quiet,
            );
            let config = AssessConfig {
                input_path: args.input,
                organization: args.org,
                sector: args.sector,
                assessment_id: args.assessment_id,
                benchmark: args.benchmark,
                show_recommendations: args.recommendations,
                show_details: args.detail,
                app,
            };

            let exit_code = cli::run_assess(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Benchmark(args) => {
            let app = load_merged_config(
                cli.config.as_deref(),
                args.output,
                args.output_file,
                None,
                cli.no_color,
                cli.quiet,
            );

            let exit_code = cli::run_benchmark(args.result, args.sector, app)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Prioritize(args) => {
            let app = load_merged_config(
                cli.config.as_deref(),
                args.output,
                args.output_file,
                None,
                cli.no_color,
                cli.quiet,
            );
            let config = PrioritizeConfig {
                sector: args.sector,
                use_cases_path: args.use_cases,
                assessment_path: args.assessment,
                show_details: args.detail,
                app,
            };

            let exit_code = cli::run_prioritize(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Catalog(args) => {
            let app = load_merged_config(
                cli.config.as_deref(),
                args.output,
                args.output_file,
                None,
                cli.no_color,
                cli.quiet,
            );

            let exit_code = cli::run_catalog(args.sector, app)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "maturity-tools",
                &mut io::stdout(),
            );
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = maturity_tools::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    match maturity_tools::config::load_or_default(cli.config.as_deref()) {
                        Ok(loaded) => loaded,
                        Err(e) => {
                            tracing::error!("{e}");
                            std::process::exit(exit_codes::INVALID_INPUT);
                        }
                    };
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("maturity-tools").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".maturity-tools.yaml",
                    ".maturity-tools.yml",
                    "maturity-tools.yaml",
                    "maturity-tools.yml",
                    ".maturity-toolsrc",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match maturity_tools::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".maturity-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = maturity_tools::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}

/// Load the config file (failing fast when one exists but is malformed)
/// and layer CLI arguments over it.
fn load_merged_config(
    config_path: Option<&Path>,
    output: ReportFormat,
    output_file: Option<PathBuf>,
    min_score: Option<f64>,
    no_color: bool,
    quiet: bool,
) -> AppConfig {
    let overrides = AppConfig::builder()
        .output_format(output)
        .output_file(output_file)
        .min_score(min_score)
        .no_color(no_color)
        .quiet(quiet)
        .build();

    match AppConfig::from_file_with_overrides(config_path, &overrides) {
        Ok((config, _)) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(exit_codes::INVALID_INPUT);
        }
    }
}
