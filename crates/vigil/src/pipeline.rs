//! Single-shot moderation: submit, analyze, advise.

use std::time::Duration;
use tracing::{info, instrument, warn};
use vigil_analysis::{Analysis, Analyzer};
use vigil_core::{ModerationRequest, ModerationResponse};
use vigil_error::{ModerationError, ModerationErrorKind, VigilResult};
use vigil_models::ModerationDriver;
use vigil_rate_limit::{RateLimitAdvisor, RateLimitInfo};

/// Everything one moderation call produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationRun {
    /// Raw service response
    pub response: ModerationResponse,
    /// Analysis of the first verdict
    pub analysis: Analysis,
    /// Quota state reported with the response
    pub rate_limits: RateLimitInfo,
    /// Wait recommended before the next call
    pub advised_wait: Duration,
}

/// Moderate `text` with `driver`, then analyze the verdict and the quota headers.
///
/// # Errors
///
/// Propagates driver failures, and returns `InvalidPayload` if the response
/// holds no verdict.
#[instrument(skip_all, fields(provider = driver.provider_name(), model = driver.model_name()))]
pub async fn moderate_text(
    driver: &dyn ModerationDriver,
    text: &str,
    analyzer: &Analyzer,
    advisor: &RateLimitAdvisor,
) -> VigilResult<ModerationRun> {
    let request = ModerationRequest::new(driver.model_name(), text);
    let outcome = driver.moderate(&request).await?;

    let result = outcome.response().results.first().ok_or_else(|| {
        ModerationError::new(ModerationErrorKind::InvalidPayload(
            "response contains no results".to_string(),
        ))
    })?;
    let analysis = analyzer.analyze(result);

    let flagged: Vec<&str> = analysis
        .flagged_categories()
        .iter()
        .map(|c| c.as_str())
        .collect();
    info!(
        flagged = *analysis.flagged(),
        categories = ?flagged,
        "Moderation complete"
    );

    let advised_wait = advisor.advise(outcome.rate_limits());
    if !advised_wait.is_zero() {
        warn!(
            wait_ms = advised_wait.as_millis() as u64,
            "Rate limit headroom is low"
        );
    }

    Ok(ModerationRun {
        response: outcome.response().clone(),
        analysis,
        rate_limits: outcome.rate_limits().clone(),
        advised_wait,
    })
}
