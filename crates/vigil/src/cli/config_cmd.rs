//! `vigil config` handler.

use super::OutputFormat;
use vigil::{JsonError, VigilConfig, VigilResult};

/// Print the effective configuration.
pub fn show_config(config: &VigilConfig, format: OutputFormat) -> VigilResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(config)
                .map_err(|e| JsonError::new(format!("Failed to serialize configuration: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("[moderation]");
            println!("  model        = {}", config.moderation.model);
            println!("  base_url     = {}", config.moderation.base_url);
            match config.moderation.timeout_secs {
                Some(secs) => println!("  timeout_secs = {}", secs),
                None => println!("  timeout_secs = none"),
            }
            println!("[rate_limit]");
            println!("  threshold      = {}", config.rate_limit.threshold);
            println!("  respect_advice = {}", config.rate_limit.respect_advice);
            println!("[analysis]");
            println!("  score_threshold = {}", config.analysis.score_threshold);
            println!("  top_n           = {}", config.analysis.top_n);
        }
    }
    Ok(())
}
