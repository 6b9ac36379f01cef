//! Tests for the layered configuration system.

use std::io::Write;
use tempfile::Builder;
use vigil::{VigilConfig, VigilErrorKind};

fn temp_config(contents: &str) -> tempfile::NamedTempFile {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "{}", contents).unwrap();
    temp_file
}

#[test]
fn test_load_bundled_defaults() {
    let config = VigilConfig::load().unwrap();

    assert_eq!(config.moderation.model, "omni-moderation-latest");
    assert_eq!(config.moderation.base_url, "https://api.openai.com/v1");
    assert_eq!(config.rate_limit.threshold, 0.1);
    assert!(!config.rate_limit.respect_advice);
    assert_eq!(config.analysis.score_threshold, 0.1);
    assert_eq!(config.analysis.top_n, 3);
}

#[test]
fn test_config_from_file_overrides_defaults() {
    let temp_file = temp_config(
        r#"
[moderation]
model = "text-moderation-stable"

[rate_limit]
threshold = 0.25
"#,
    );

    let config = VigilConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(config.moderation.model, "text-moderation-stable");
    assert_eq!(config.moderation.base_url, "https://api.openai.com/v1");
    assert_eq!(config.rate_limit.threshold, 0.25);
    assert_eq!(config.analysis.top_n, 3);
}

#[test]
fn test_load_with_explicit_file() {
    let temp_file = temp_config(
        r#"
[analysis]
score_threshold = 0.5
top_n = 5
"#,
    );

    let config = VigilConfig::load_with(Some(temp_file.path())).unwrap();
    assert_eq!(config.analysis.score_threshold, 0.5);
    assert_eq!(config.analysis.top_n, 5);
    assert_eq!(*config.analyzer().unwrap().top_n(), 5);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = VigilConfig::load_with(Some(std::path::Path::new("/nonexistent/vigil.toml")));
    assert!(result.is_err());
}

#[test]
fn test_invalid_threshold_is_rejected() {
    let temp_file = temp_config(
        r#"
[rate_limit]
threshold = 1.5
"#,
    );

    let err = VigilConfig::from_file(temp_file.path()).unwrap_err();
    assert!(matches!(err.kind(), VigilErrorKind::Config(_)));
    assert!(err.to_string().contains("threshold"));
}

#[test]
fn test_zero_top_n_is_rejected() {
    let temp_file = temp_config(
        r#"
[analysis]
top_n = 0
"#,
    );

    assert!(VigilConfig::from_file(temp_file.path()).is_err());
}

#[test]
fn test_timeout_conversion() {
    let config = VigilConfig::load().unwrap();
    assert_eq!(
        config.moderation.timeout(),
        Some(std::time::Duration::from_secs(30))
    );
}
