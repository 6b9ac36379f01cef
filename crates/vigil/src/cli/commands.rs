//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Vigil - check text against a content-moderation service
#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(about = "Check text against a content-moderation service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Additional configuration file layered over the defaults
    #[arg(long, global = true, env = "VIGIL_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Moderate the contents of a text file
    Moderate {
        /// Path to the text file
        file: PathBuf,

        /// Moderation model (overrides configuration)
        #[arg(long)]
        model: Option<String>,

        /// API root (overrides configuration)
        #[arg(long)]
        base_url: Option<String>,

        /// Sleep for the advised rate limit wait before exiting
        #[arg(long)]
        respect_rate_limit: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the effective configuration
    Config {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
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
    fn test_parse_moderate() {
        let cli = Cli::try_parse_from([
            "vigil",
            "-v",
            "moderate",
            "input.txt",
            "--model",
            "text-moderation-stable",
            "--format",
            "json",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Moderate {
                file,
                model,
                respect_rate_limit,
                format,
                ..
            } => {
                assert_eq!(file, PathBuf::from("input.txt"));
                assert_eq!(model.as_deref(), Some("text-moderation-stable"));
                assert!(!respect_rate_limit);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_moderate_requires_file() {
        assert!(Cli::try_parse_from(["vigil", "moderate"]).is_err());
    }
}
