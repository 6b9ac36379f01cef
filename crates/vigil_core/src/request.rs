//! Request and response envelopes for the moderation endpoint.

use crate::ModerationResult;
use serde::{Deserialize, Serialize};

/// Moderation request for a single text input.
///
/// # Examples
///
/// ```
/// use vigil_core::ModerationRequest;
///
/// let request = ModerationRequest::new("omni-moderation-latest", "hello");
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["model"], "omni-moderation-latest");
/// assert_eq!(json["input"], "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationRequest {
    /// Moderation model identifier
    pub model: String,
    /// Text to classify
    pub input: String,
}

impl ModerationRequest {
    /// Creates a request for `input` against `model`.
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
        }
    }
}

/// Moderation response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResponse {
    /// Service-assigned identifier
    pub id: String,
    /// Model that produced the verdicts
    pub model: String,
    /// One verdict per submitted input
    pub results: Vec<ModerationResult>,
}
