//! Tests for report rendering.

use std::time::Duration;
use vigil_analysis::{Report, analyze};
use vigil_core::ModerationResult;

#[test]
fn test_human_report_for_clean_content() {
    let analysis = analyze(&ModerationResult::uniform(false, 0.01).unwrap());
    let text = Report::new(&analysis).to_human();

    assert!(text.contains("Flagged: no"));
    assert!(text.contains("Flagged categories: none"));
    assert!(text.contains("Top scores: none above threshold"));
    assert!(!text.contains("Rate limit"));
}

#[test]
fn test_human_report_for_flagged_content() {
    let analysis = analyze(&ModerationResult::uniform(true, 0.75).unwrap());
    let text = Report::new(&analysis)
        .with_model("omni-moderation-latest")
        .with_advised_wait(Duration::from_secs(30))
        .to_human();

    assert!(text.contains("Model: omni-moderation-latest"));
    assert!(text.contains("Flagged: yes"));
    assert!(text.contains("sexual, sexual/minors, harassment"));
    assert!(text.contains("75.00%"));
    assert!(text.contains("wait 30.0s"));
}

#[test]
fn test_json_report() {
    let analysis = analyze(&ModerationResult::uniform(true, 0.5).unwrap());
    let json = Report::new(&analysis)
        .with_advised_wait(Duration::from_millis(1500))
        .to_json()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["flagged"], true);
    assert_eq!(value["flagged_categories"].as_array().unwrap().len(), 13);
    assert_eq!(value["flagged_categories"][0], "sexual");
    assert_eq!(value["top_scores"][0]["category"], "sexual");
    assert_eq!(value["top_scores"][0]["score"], 0.5);
    assert_eq!(value["advised_wait_ms"], 1500);
    assert!(value.get("model").is_none());
}

#[test]
fn test_zero_wait_is_omitted() {
    let analysis = analyze(&ModerationResult::uniform(false, 0.0).unwrap());
    let json = Report::new(&analysis)
        .with_advised_wait(Duration::ZERO)
        .to_json()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("advised_wait_ms").is_none());
}

#[test]
fn test_human_report_layout() {
    let analysis = analyze(&ModerationResult::uniform(false, 0.0).unwrap());
    let text = Report::new(&analysis).with_model("omni-moderation-latest").to_human();

    assert_eq!(
        text,
        "Moderation results\n\
         \x20 Model: omni-moderation-latest\n\
         \x20 Flagged: no\n\
         \x20 Flagged categories: none\n\
         \x20 Top scores: none above threshold\n"
    );
}
