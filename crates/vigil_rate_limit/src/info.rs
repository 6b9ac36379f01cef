//! Rate limit state reported by the moderation service.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Request quota for the current window.
pub const LIMIT_REQUESTS_HEADER: &str = "x-ratelimit-limit-requests";
/// Requests left in the current window.
pub const REMAINING_REQUESTS_HEADER: &str = "x-ratelimit-remaining-requests";
/// Time until the request quota refills.
pub const RESET_REQUESTS_HEADER: &str = "x-ratelimit-reset-requests";
/// Token quota for the current window.
pub const LIMIT_TOKENS_HEADER: &str = "x-ratelimit-limit-tokens";
/// Tokens left in the current window.
pub const REMAINING_TOKENS_HEADER: &str = "x-ratelimit-remaining-tokens";
/// Time until the token quota refills.
pub const RESET_TOKENS_HEADER: &str = "x-ratelimit-reset-tokens";

/// Snapshot of the request and token quotas from one response.
///
/// Every field is independently optional since the service may omit any
/// header. Reset fields keep the raw header text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateLimitInfo {
    /// Request quota for the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_requests: Option<u64>,
    /// Requests remaining in the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_requests: Option<u64>,
    /// Raw request reset duration (e.g. `30s`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_requests: Option<String>,
    /// Token quota for the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_tokens: Option<u64>,
    /// Tokens remaining in the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_tokens: Option<u64>,
    /// Raw token reset duration (e.g. `1h`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_tokens: Option<String>,
}

impl RateLimitInfo {
    /// Extract rate limit state from HTTP response headers.
    ///
    /// Numeric headers that are not base-10 integers are treated as absent.
    #[instrument(skip(headers))]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let info = Self {
            limit_requests: parse_header_u64(headers, LIMIT_REQUESTS_HEADER),
            remaining_requests: parse_header_u64(headers, REMAINING_REQUESTS_HEADER),
            reset_requests: header_string(headers, RESET_REQUESTS_HEADER),
            limit_tokens: parse_header_u64(headers, LIMIT_TOKENS_HEADER),
            remaining_tokens: parse_header_u64(headers, REMAINING_TOKENS_HEADER),
            reset_tokens: header_string(headers, RESET_TOKENS_HEADER),
        };
        debug!(?info, "Extracted rate limit headers");
        info
    }

    /// Extract rate limit state from header-style key/value pairs.
    ///
    /// Keys match case-insensitively; unknown keys are ignored and a later
    /// duplicate overrides an earlier one.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigil_rate_limit::RateLimitInfo;
    ///
    /// let info = RateLimitInfo::from_pairs([
    ///     ("X-RateLimit-Limit-Requests", "100"),
    ///     ("x-ratelimit-remaining-requests", "99"),
    ///     ("x-ratelimit-reset-requests", "1s"),
    /// ]);
    /// assert_eq!(info.limit_requests, Some(100));
    /// assert_eq!(info.remaining_requests, Some(99));
    /// assert_eq!(info.reset_requests.as_deref(), Some("1s"));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut info = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref().trim();
            if key.eq_ignore_ascii_case(LIMIT_REQUESTS_HEADER) {
                info.limit_requests = value.parse().ok();
            } else if key.eq_ignore_ascii_case(REMAINING_REQUESTS_HEADER) {
                info.remaining_requests = value.parse().ok();
            } else if key.eq_ignore_ascii_case(RESET_REQUESTS_HEADER) {
                info.reset_requests = Some(value.to_string());
            } else if key.eq_ignore_ascii_case(LIMIT_TOKENS_HEADER) {
                info.limit_tokens = value.parse().ok();
            } else if key.eq_ignore_ascii_case(REMAINING_TOKENS_HEADER) {
                info.remaining_tokens = value.parse().ok();
            } else if key.eq_ignore_ascii_case(RESET_TOKENS_HEADER) {
                info.reset_tokens = Some(value.to_string());
            }
        }
        info
    }

    /// True when the response carried none of the rate limit headers.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fraction of the request quota still available, if both counts are known.
    pub fn request_ratio(&self) -> Option<f64> {
        ratio(self.remaining_requests, self.limit_requests)
    }

    /// Fraction of the token quota still available, if both counts are known.
    pub fn token_ratio(&self) -> Option<f64> {
        ratio(self.remaining_tokens, self.limit_tokens)
    }
}

/// A zero limit has no meaningful ratio.
fn ratio(remaining: Option<u64>, limit: Option<u64>) -> Option<f64> {
    match (remaining, limit) {
        (Some(remaining), Some(limit)) if limit > 0 => Some(remaining as f64 / limit as f64),
        _ => None,
    }
}

/// Helper to parse u64 from header value.
fn parse_header_u64(headers: &HeaderMap, key: &str) -> Option<u64> {
    headers.get(key)?.to_str().ok()?.trim().parse().ok()
}

/// Helper to read a header value as an owned string.
fn header_string(headers: &HeaderMap, key: &str) -> Option<String> {
    Some(headers.get(key)?.to_str().ok()?.trim().to_string())
}
