//! OpenAI moderation endpoint client.

use crate::{ModerationDriver, ModerationOutcome};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};
use vigil_core::{ModerationRequest, ModerationResponse};
use vigil_error::{ModerationError, ModerationErrorKind, VigilResult};
use vigil_rate_limit::RateLimitInfo;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default moderation model.
pub const DEFAULT_MODEL: &str = "omni-moderation-latest";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI moderation client.
#[derive(Clone)]
pub struct OpenAiModerationClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OpenAiModerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiModerationClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiModerationClient {
    /// Creates a new client against the public API.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `model` - Moderation model identifier (e.g., "omni-moderation-latest")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new OpenAI moderation client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Creates a client with the key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the variable is unset or empty.
    #[track_caller]
    pub fn from_env(model: impl Into<String>) -> Result<Self, ModerationError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim(), model)),
            _ => Err(ModerationError::new(ModerationErrorKind::MissingApiKey)),
        }
    }

    /// Point the client at a different API root (e.g., a proxy or test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound the total time of each request.
    ///
    /// # Errors
    ///
    /// Returns `ClientCreation` if the HTTP client cannot be built.
    #[track_caller]
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ModerationError> {
        self.client = Client::builder().timeout(timeout).build().map_err(|e| {
            ModerationError::new(ModerationErrorKind::ClientCreation(e.to_string()))
        })?;
        Ok(self)
    }

    /// API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/moderations", self.base_url)
    }

    /// Validate and decode a moderation response body.
    fn parse_response(body: &str) -> Result<ModerationResponse, ModerationError> {
        let raw: serde_json::Value = serde_json::from_str(body).map_err(|e| {
            error!(error = ?e, "Moderation response is not JSON");
            ModerationError::new(ModerationErrorKind::Parse(e.to_string()))
        })?;

        let response: ModerationResponse = serde_json::from_value(raw).map_err(|e| {
            error!(error = ?e, "Moderation response does not match the expected shape");
            ModerationError::new(ModerationErrorKind::InvalidPayload(e.to_string()))
        })?;

        if response.results.is_empty() {
            return Err(ModerationError::new(ModerationErrorKind::InvalidPayload(
                "response contains no results".to_string(),
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl ModerationDriver for OpenAiModerationClient {
    #[instrument(skip(self, request), fields(model = %request.model, input_len = request.input.len()))]
    async fn moderate(&self, request: &ModerationRequest) -> VigilResult<ModerationOutcome> {
        debug!("Sending request to OpenAI moderation API");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send moderation request");
                ModerationError::new(ModerationErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let rate_limits = RateLimitInfo::from_headers(response.headers());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Moderation API returned error");
            return Err(ModerationError::new(ModerationErrorKind::HttpError {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read moderation response body");
            ModerationError::new(ModerationErrorKind::Transport(e.to_string()))
        })?;
        let parsed = Self::parse_response(&body)?;

        debug!(
            id = %parsed.id,
            results = parsed.results.len(),
            "Received moderation response"
        );
        Ok(ModerationOutcome::new(parsed, rate_limits))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
