//! Content source for moderation input.

use std::path::Path;
use tracing::{debug, instrument};
use vigil_error::{ContentError, ContentErrorKind};

/// Read a UTF-8 text file and trim surrounding whitespace.
///
/// # Errors
///
/// Returns `Read` if the file cannot be read as UTF-8, and `Empty` if
/// nothing remains after trimming.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_content(path: impl AsRef<Path>) -> Result<String, ContentError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ContentError::new(ContentErrorKind::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    let text = raw.trim();
    if text.is_empty() {
        return Err(ContentError::new(ContentErrorKind::Empty(
            path.display().to_string(),
        )));
    }

    debug!(chars = text.chars().count(), "Read moderation content");
    Ok(text.to_string())
}
