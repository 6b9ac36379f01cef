//! Content source error types.

/// Kinds of content source errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ContentErrorKind {
    /// Failed to read the content file
    #[display("Failed to read {}: {}", path, reason)]
    Read {
        /// Path that could not be read
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// Content was empty after trimming whitespace
    #[display("No content to moderate in {}", _0)]
    Empty(String),
}

/// Content source error with location tracking.
///
/// # Examples
///
/// ```
/// use vigil_error::{ContentError, ContentErrorKind};
///
/// let err = ContentError::new(ContentErrorKind::Empty("input.txt".to_string()));
/// assert!(format!("{}", err).contains("No content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Content Error: {} at line {} in {}", kind, line, file)]
pub struct ContentError {
    /// The kind of error that occurred
    pub kind: ContentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContentError {
    /// Create a new content error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
