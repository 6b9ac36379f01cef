//! Tests for the moderation data model.

use std::str::FromStr;
use strum::{EnumCount, IntoEnumIterator};
use vigil_core::{CategoryMap, InputType, ModerationCategory, ModerationResponse, ModerationResult};

fn omni_payload() -> serde_json::Value {
    serde_json::json!({
        "id": "modr-970d409ef3bef3b70c73d8232df86e7d",
        "model": "omni-moderation-latest",
        "results": [{
            "flagged": true,
            "categories": {
                "sexual": false,
                "sexual/minors": false,
                "harassment": false,
                "harassment/threatening": false,
                "hate": false,
                "hate/threatening": false,
                "illicit": false,
                "illicit/violent": false,
                "self-harm": false,
                "self-harm/intent": false,
                "self-harm/instructions": false,
                "violence": true,
                "violence/graphic": false
            },
            "category_scores": {
                "sexual": 2.34e-7,
                "sexual/minors": 1.6e-7,
                "harassment": 0.0011,
                "harassment/threatening": 0.0022,
                "hate": 3.2e-6,
                "hate/threatening": 4.6e-7,
                "illicit": 0.0017,
                "illicit/violent": 0.0012,
                "self-harm": 0.0017,
                "self-harm/intent": 0.0006,
                "self-harm/instructions": 0.0002,
                "violence": 0.8623,
                "violence/graphic": 0.0371
            },
            "category_applied_input_types": {
                "sexual": ["text"],
                "sexual/minors": ["text"],
                "harassment": ["text"],
                "harassment/threatening": ["text"],
                "hate": ["text"],
                "hate/threatening": ["text"],
                "illicit": ["text"],
                "illicit/violent": ["text"],
                "self-harm": ["text"],
                "self-harm/intent": ["text"],
                "self-harm/instructions": ["text"],
                "violence": ["text", "image"],
                "violence/graphic": ["text"]
            }
        }]
    })
}

#[test]
fn test_category_set_is_fixed() {
    assert_eq!(ModerationCategory::COUNT, 13);
    let tags: Vec<&str> = ModerationCategory::iter().map(|c| c.as_str()).collect();
    assert_eq!(
        tags,
        vec![
            "sexual",
            "sexual/minors",
            "harassment",
            "harassment/threatening",
            "hate",
            "hate/threatening",
            "illicit",
            "illicit/violent",
            "self-harm",
            "self-harm/intent",
            "self-harm/instructions",
            "violence",
            "violence/graphic",
        ]
    );
}

#[test]
fn test_category_string_conversions() {
    for category in ModerationCategory::iter() {
        assert_eq!(category.to_string(), category.as_str());
        assert_eq!(ModerationCategory::from_str(category.as_str()).unwrap(), category);
    }
    assert!(ModerationCategory::from_str("spam").is_err());
}

#[test]
fn test_deserialize_omni_response() -> anyhow::Result<()> {
    let response: ModerationResponse = serde_json::from_value(omni_payload())?;
    assert_eq!(response.model, "omni-moderation-latest");
    assert_eq!(response.results.len(), 1);

    let result = &response.results[0];
    assert!(*result.flagged());
    assert!(result.is_flagged(ModerationCategory::Violence));
    assert!(!result.is_flagged(ModerationCategory::Hate));
    assert_eq!(result.score(ModerationCategory::Violence), 0.8623);
    assert_eq!(
        result.category_applied_input_types()[&ModerationCategory::Violence],
        vec![InputType::Text, InputType::Image]
    );
    Ok(())
}

#[test]
fn test_missing_category_is_rejected() {
    let mut payload = omni_payload();
    payload["results"][0]["categories"]
        .as_object_mut()
        .unwrap()
        .remove("illicit");
    assert!(serde_json::from_value::<ModerationResponse>(payload).is_err());
}

#[test]
fn test_unknown_category_is_rejected() {
    let mut payload = omni_payload();
    payload["results"][0]["category_scores"]["spam"] = serde_json::json!(0.5);
    assert!(serde_json::from_value::<ModerationResponse>(payload).is_err());
}

#[test]
fn test_out_of_range_score_is_rejected() {
    let mut payload = omni_payload();
    payload["results"][0]["category_scores"]["hate"] = serde_json::json!(1.5);
    assert!(serde_json::from_value::<ModerationResponse>(payload).is_err());
}

#[test]
fn test_missing_applied_input_types_default_to_empty() -> anyhow::Result<()> {
    let mut payload = omni_payload();
    payload["results"][0]
        .as_object_mut()
        .unwrap()
        .remove("category_applied_input_types");

    let response: ModerationResponse = serde_json::from_value(payload)?;
    let applied = response.results[0].category_applied_input_types();
    assert_eq!(applied.len(), ModerationCategory::COUNT);
    assert!(applied.values().all(Vec::is_empty));
    Ok(())
}

#[test]
fn test_new_rejects_partial_maps() {
    let categories: CategoryMap<bool> = [(ModerationCategory::Hate, true)].into_iter().collect();
    let scores: CategoryMap<f64> = ModerationCategory::iter().map(|c| (c, 0.0)).collect();
    assert!(ModerationResult::new(true, categories, scores, CategoryMap::new()).is_err());
}

#[test]
fn test_uniform_covers_every_category() {
    let result = ModerationResult::uniform(true, 0.5).unwrap();
    assert_eq!(result.categories().len(), ModerationCategory::COUNT);
    assert!(ModerationCategory::iter().all(|c| result.is_flagged(c)));
    assert!(ModerationCategory::iter().all(|c| result.score(c) == 0.5));
}

#[test]
fn test_uniform_rejects_out_of_range_scores() {
    for score in [1.5, -0.1, f64::NAN, f64::INFINITY] {
        assert!(
            ModerationResult::uniform(true, score).is_err(),
            "score {} should be rejected",
            score
        );
    }
}

#[test]
fn test_uniform_output_deserializes() -> anyhow::Result<()> {
    let result = ModerationResult::uniform(true, 1.0)?;
    let restored: ModerationResult = serde_json::from_value(serde_json::to_value(&result)?)?;
    assert_eq!(restored, result);
    Ok(())
}

#[test]
fn test_validation_error_reports_caller_location() {
    let err = ModerationResult::uniform(false, 2.5).unwrap_err();
    assert!(err.message.contains("out of range: 2.5"));
    assert!(err.file.ends_with("result_test.rs"));
}

#[test]
fn test_input_type_display_matches_wire_tag() -> anyhow::Result<()> {
    assert_eq!(InputType::Image.to_string(), "image");
    assert_eq!(
        serde_json::to_value(InputType::Text)?,
        serde_json::json!(InputType::Text.to_string())
    );
    Ok(())
}
