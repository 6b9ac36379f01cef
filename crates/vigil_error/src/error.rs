//! Top-level error wrapper types.

use crate::{ConfigError, ContentError, JsonError, ModerationError, ValidationError};

/// Every failure the Vigil crates can surface.
///
/// # Examples
///
/// ```
/// use vigil_error::{VigilError, ConfigError};
///
/// let err: VigilError = ConfigError::new("bad threshold").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VigilErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Content source error
    #[from(ContentError)]
    Content(ContentError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Moderation service error
    #[from(ModerationError)]
    Moderation(ModerationError),
    /// Data validation error
    #[from(ValidationError)]
    Validation(ValidationError),
}

/// Vigil error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vigil Error: {}", _0)]
pub struct VigilError(Box<VigilErrorKind>);

impl VigilError {
    /// Create a new error from a kind.
    pub fn new(kind: VigilErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VigilErrorKind {
        &self.0
    }
}

impl<T> From<T> for VigilError
where
    T: Into<VigilErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vigil operations.
pub type VigilResult<T> = std::result::Result<T, VigilError>;
