//! Tests for error construction, conversion and retry classification.

use vigil_error::{
    ConfigError, ContentError, ContentErrorKind, ModerationError, ModerationErrorKind,
    RetryableError, ValidationError, VigilError, VigilErrorKind,
};

#[test]
fn test_location_is_captured() {
    let err = ConfigError::new("bad");
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_conversion_into_vigil_error() {
    let err: VigilError = ContentError::new(ContentErrorKind::Empty("a.txt".into())).into();
    assert!(matches!(err.kind(), VigilErrorKind::Content(_)));
    assert!(err.to_string().contains("No content to moderate in a.txt"));
}

#[test]
fn test_retryable_statuses() {
    for status in [408, 429, 500, 502, 503, 504] {
        let err = ModerationError::new(ModerationErrorKind::HttpError {
            status_code: status,
            message: String::new(),
        });
        assert!(err.is_retryable(), "status {} should retry", status);
    }

    for status in [400, 401, 403, 404] {
        let err = ModerationError::new(ModerationErrorKind::HttpError {
            status_code: status,
            message: String::new(),
        });
        assert!(!err.is_retryable(), "status {} should not retry", status);
    }
}

#[test]
fn test_non_http_kinds() {
    assert!(ModerationErrorKind::Transport("reset".into()).is_retryable());
    assert!(!ModerationErrorKind::MissingApiKey.is_retryable());
    assert!(!ModerationErrorKind::Parse("eof".into()).is_retryable());
    assert!(!ModerationErrorKind::InvalidPayload("no results".into()).is_retryable());
}

#[test]
fn test_validation_error_converts() {
    let err: VigilError = ValidationError::new("expected 13 categories, got 12").into();
    assert!(matches!(err.kind(), VigilErrorKind::Validation(_)));
    assert!(err.to_string().contains("Validation Error: expected 13 categories"));
}
