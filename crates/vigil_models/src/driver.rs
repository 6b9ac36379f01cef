//! Moderation driver trait.

use async_trait::async_trait;
use vigil_core::{ModerationRequest, ModerationResponse};
use vigil_error::VigilResult;
use vigil_rate_limit::RateLimitInfo;

/// Verdicts for one request plus the quota state the service reported with them.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct ModerationOutcome {
    /// Parsed moderation response
    response: ModerationResponse,
    /// Rate limit headers from the same response
    rate_limits: RateLimitInfo,
}

impl ModerationOutcome {
    /// Pair a response with its rate limit state.
    pub fn new(response: ModerationResponse, rate_limits: RateLimitInfo) -> Self {
        Self {
            response,
            rate_limits,
        }
    }
}

/// Core trait every moderation backend implements.
#[async_trait]
pub trait ModerationDriver: Send + Sync {
    /// Classify the request input.
    async fn moderate(&self, request: &ModerationRequest) -> VigilResult<ModerationOutcome>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Moderation model identifier (e.g., "omni-moderation-latest").
    fn model_name(&self) -> &str;
}
