//! Moderation service error types and retry classification.

/// Moderation service error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ModerationErrorKind {
    /// API key not found in environment
    #[display("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to build the HTTP client
    #[display("Failed to create moderation client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or the connection failed
    #[display("Moderation request failed: {}", _0)]
    Transport(String),
    /// Service answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Response body was not valid moderation JSON
    #[display("Failed to parse moderation response: {}", _0)]
    Parse(String),
    /// Response parsed but violates the moderation payload contract
    #[display("Invalid moderation payload: {}", _0)]
    InvalidPayload(String),
}

impl ModerationErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ModerationErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ModerationErrorKind::Transport(_) => true,
            _ => false,
        }
    }
}

/// Moderation error with source location tracking.
///
/// # Examples
///
/// ```
/// use vigil_error::{ModerationError, ModerationErrorKind};
///
/// let err = ModerationError::new(ModerationErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Moderation Error: {} at line {} in {}", kind, line, file)]
pub struct ModerationError {
    /// The kind of error that occurred
    pub kind: ModerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModerationError {
    /// Create a new ModerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use vigil_error::{ModerationError, ModerationErrorKind, RetryableError};
///
/// let err = ModerationError::new(ModerationErrorKind::HttpError {
///     status_code: 429,
///     message: "Rate limit reached".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503, 429 or connection failures return true.
    /// Permanent errors like 401 or 400 return false.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for ModerationError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
