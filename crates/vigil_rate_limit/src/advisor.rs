//! Pre-emptive wait advice from remaining quota.
//!
//! Requests and tokens are tracked independently since either can run out
//! first. A dimension triggers once its remaining/limit ratio drops strictly
//! below the threshold, and the advised wait is the longest triggered reset.

use crate::{RateLimitInfo, parse_duration};
use std::time::Duration;
use tracing::{debug, instrument};
use vigil_error::ConfigError;

/// Fraction of quota below which a wait is advised.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Recommended wait in milliseconds before the next call.
///
/// Returns `0` when neither dimension is below `threshold`, when a
/// dimension lacks its counts or reset, or when the reset cannot be parsed.
///
/// # Examples
///
/// ```
/// use vigil_rate_limit::{advise_wait, RateLimitInfo};
///
/// let info = RateLimitInfo {
///     limit_requests: Some(100),
///     remaining_requests: Some(50),
///     reset_requests: Some("30s".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(advise_wait(&info, 0.1), 0);
/// ```
pub fn advise_wait(info: &RateLimitInfo, threshold: f64) -> u64 {
    let requests = candidate_wait(info.request_ratio(), info.reset_requests.as_deref(), threshold);
    let tokens = candidate_wait(info.token_ratio(), info.reset_tokens.as_deref(), threshold);
    requests.max(tokens)
}

fn candidate_wait(ratio: Option<f64>, reset: Option<&str>, threshold: f64) -> u64 {
    match (ratio, reset) {
        (Some(ratio), Some(reset)) if ratio < threshold => parse_duration(reset),
        _ => 0,
    }
}

/// Rate limit advisor bound to a quota threshold.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vigil_rate_limit::{RateLimitAdvisor, RateLimitInfo};
///
/// let advisor = RateLimitAdvisor::new(0.25).unwrap();
/// let info = RateLimitInfo {
///     limit_tokens: Some(1000),
///     remaining_tokens: Some(200),
///     reset_tokens: Some("2m".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(advisor.advise(&info), Duration::from_secs(120));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, derive_getters::Getters)]
pub struct RateLimitAdvisor {
    /// Remaining-quota fraction below which a wait is advised
    threshold: f64,
}

impl RateLimitAdvisor {
    /// Create an advisor with the given threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is not in `(0.0, 1.0]`.
    #[track_caller]
    pub fn new(threshold: f64) -> Result<Self, ConfigError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::new(format!(
                "Rate limit threshold must be in (0.0, 1.0], got {}",
                threshold
            )));
        }
        Ok(Self { threshold })
    }

    /// Recommended wait before the next call.
    #[instrument(skip(self, info), fields(threshold = self.threshold))]
    pub fn advise(&self, info: &RateLimitInfo) -> Duration {
        let wait = advise_wait(info, self.threshold);
        debug!(
            request_ratio = ?info.request_ratio(),
            token_ratio = ?info.token_ratio(),
            wait_ms = wait,
            "Computed rate limit advice"
        );
        Duration::from_millis(wait)
    }
}

impl Default for RateLimitAdvisor {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
