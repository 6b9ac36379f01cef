//! `vigil moderate` handler.

use super::OutputFormat;
use std::path::PathBuf;
use tracing::{info, instrument, warn};
use vigil::{
    OpenAiModerationClient, Report, RetryableError, VigilConfig, VigilErrorKind, VigilResult,
    moderate_text, read_content,
};

/// Options for a single moderation run.
#[derive(Debug, Clone)]
pub struct ModerateOptions {
    /// File whose contents are moderated
    pub file: PathBuf,
    /// Model override
    pub model: Option<String>,
    /// API root override
    pub base_url: Option<String>,
    /// Sleep for the advised wait before returning
    pub respect_rate_limit: bool,
    /// Output format
    pub format: OutputFormat,
}

/// Read the file, moderate it and print the report.
#[instrument(skip(config), fields(file = %options.file.display()))]
pub async fn run_moderate(config: &VigilConfig, options: ModerateOptions) -> VigilResult<()> {
    let text = read_content(&options.file)?;

    let model = options
        .model
        .as_deref()
        .unwrap_or(&config.moderation.model);
    let base_url = options
        .base_url
        .as_deref()
        .unwrap_or(&config.moderation.base_url);

    let mut client = OpenAiModerationClient::from_env(model)?.with_base_url(base_url);
    if let Some(timeout) = config.moderation.timeout() {
        client = client.with_timeout(timeout)?;
    }

    let analyzer = config.analyzer()?;
    let advisor = config.advisor()?;

    let run = match moderate_text(&client, &text, &analyzer, &advisor).await {
        Ok(run) => run,
        Err(e) => {
            if let VigilErrorKind::Moderation(inner) = e.kind() {
                if inner.is_retryable() {
                    warn!("Moderation service error looks transient; retrying later may succeed");
                }
            }
            return Err(e);
        }
    };

    let report = Report::new(&run.analysis)
        .with_model(&run.response.model)
        .with_advised_wait(run.advised_wait);
    match options.format {
        OutputFormat::Human => print!("{}", report.to_human()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if (options.respect_rate_limit || config.rate_limit.respect_advice)
        && !run.advised_wait.is_zero()
    {
        info!(
            wait_ms = run.advised_wait.as_millis() as u64,
            "Waiting for rate limit reset"
        );
        tokio::time::sleep(run.advised_wait).await;
    }

    Ok(())
}
