//! Vigil CLI binary.
//!
//! Reads a text file, submits it to the moderation service and prints the
//! flagged categories and top confidence scores.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vigil::VigilConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, ModerateOptions, run_moderate, show_config};

    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn,vigil=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = VigilConfig::load_with(cli.config.as_deref())?;

    match cli.command {
        Commands::Moderate {
            file,
            model,
            base_url,
            respect_rate_limit,
            format,
        } => {
            let options = ModerateOptions {
                file,
                model,
                base_url,
                respect_rate_limit,
                format,
            };
            run_moderate(&config, options).await?;
        }

        Commands::Config { format } => {
            show_config(&config, format)?;
        }
    }

    Ok(())
}
