//! stubgen command-line interface.
//!
//! Generates JavaScript call-forwarding stubs from a JSON bindings manifest.
//!
//! # Examples
//!
//! ```bash
//! # Generate modules into frontend/bindings
//! stubgen generate --input bindings.json --output frontend/bindings
//!
//! # Show package display names and method layout
//! stubgen inspect --input bindings.json --format text
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stubgen_cli::OutputFormat;
use stubgen_cli::commands;
use stubgen_cli::formatters::format_output;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate JavaScript bindings for bound backend methods.
#[derive(Parser, Debug)]
#[command(name = "stubgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format of the command report
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one module per package from a bindings manifest.
    Generate {
        /// Path to the JSON bindings manifest
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write modules to
        #[arg(short, long, default_value = "bindings")]
        output: PathBuf,

        /// Path to a TOML generator configuration
        #[arg(short, long, env = "STUBGEN_CONFIG")]
        config: Option<PathBuf>,

        /// Report what would be written without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Show package display names and the sorted service layout.
    Inspect {
        /// Path to the JSON bindings manifest
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let report = match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            dry_run,
        } => {
            let report = commands::generate::run(&input, &output, config.as_deref(), dry_run)?;
            format_output(&report, cli.format)?
        }
        Commands::Inspect { input } => {
            let report = commands::inspect::run(&input)?;
            format_output(&report, cli.format)?
        }
    };

    println!("{report}");
    Ok(())
}

/// Initializes logging to stderr.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, defaulting
/// to info.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "stubgen",
            "generate",
            "--input",
            "bindings.json",
            "--output",
            "out",
            "--dry-run",
            "--format",
            "text",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Text);
        match cli.command {
            Commands::Generate {
                input,
                output,
                dry_run,
                ..
            } => {
                assert_eq!(input, PathBuf::from("bindings.json"));
                assert_eq!(output, PathBuf::from("out"));
                assert!(dry_run);
            }
            Commands::Inspect { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_generate_default_output() {
        let cli = Cli::try_parse_from(["stubgen", "generate", "-i", "b.json"]).unwrap();
        match cli.command {
            Commands::Generate { output, .. } => assert_eq!(output, PathBuf::from("bindings")),
            Commands::Inspect { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn test_generate_requires_input() {
        assert!(Cli::try_parse_from(["stubgen", "generate"]).is_err());
    }
}
