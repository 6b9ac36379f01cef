//! Mock moderation driver for deterministic tests.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use vigil::{
    ModerationDriver, ModerationError, ModerationErrorKind, ModerationOutcome, ModerationRequest,
    ModerationResponse, ModerationResult, RateLimitInfo, VigilResult,
};

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return these results and rate limits
    Success(Vec<ModerationResult>, RateLimitInfo),
    /// Fail with this error kind
    Error(ModerationErrorKind),
}

/// Moderation driver that records calls and returns a canned response.
#[derive(Debug, Clone)]
pub struct MockModerationDriver {
    response: MockResponse,
    calls: Arc<AtomicUsize>,
}

impl MockModerationDriver {
    pub fn new_success(result: ModerationResult, rate_limits: RateLimitInfo) -> Self {
        Self::new(MockResponse::Success(vec![result], rate_limits))
    }

    pub fn new_error(kind: ModerationErrorKind) -> Self {
        Self::new(MockResponse::Error(kind))
    }

    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModerationDriver for MockModerationDriver {
    async fn moderate(&self, request: &ModerationRequest) -> VigilResult<ModerationOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            MockResponse::Success(results, rate_limits) => Ok(ModerationOutcome::new(
                ModerationResponse {
                    id: "modr-mock".to_string(),
                    model: request.model.clone(),
                    results: results.clone(),
                },
                rate_limits.clone(),
            )),
            MockResponse::Error(kind) => Err(ModerationError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-moderation"
    }
}
