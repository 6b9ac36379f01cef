//! Moderation category enumeration.

use serde::{Deserialize, Serialize};

/// Content-policy category reported by the moderation service.
///
/// Variant order is the canonical enumeration order: iteration, `Ord` and
/// every map keyed by category follow it.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use strum::IntoEnumIterator;
/// use vigil_core::ModerationCategory;
///
/// assert_eq!(ModerationCategory::SelfHarmIntent.as_str(), "self-harm/intent");
/// assert_eq!(
///     ModerationCategory::from_str("hate/threatening").unwrap(),
///     ModerationCategory::HateThreatening
/// );
/// assert_eq!(ModerationCategory::iter().next(), Some(ModerationCategory::Sexual));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
pub enum ModerationCategory {
    /// Sexual content
    #[serde(rename = "sexual")]
    #[strum(serialize = "sexual")]
    Sexual,
    /// Sexual content involving minors
    #[serde(rename = "sexual/minors")]
    #[strum(serialize = "sexual/minors")]
    SexualMinors,
    /// Harassment
    #[serde(rename = "harassment")]
    #[strum(serialize = "harassment")]
    Harassment,
    /// Harassment that includes threats
    #[serde(rename = "harassment/threatening")]
    #[strum(serialize = "harassment/threatening")]
    HarassmentThreatening,
    /// Hate speech
    #[serde(rename = "hate")]
    #[strum(serialize = "hate")]
    Hate,
    /// Hate speech that includes threats
    #[serde(rename = "hate/threatening")]
    #[strum(serialize = "hate/threatening")]
    HateThreatening,
    /// Advice or instruction for wrongdoing
    #[serde(rename = "illicit")]
    #[strum(serialize = "illicit")]
    Illicit,
    /// Illicit content that also references violence or weapons
    #[serde(rename = "illicit/violent")]
    #[strum(serialize = "illicit/violent")]
    IllicitViolent,
    /// Self-harm
    #[serde(rename = "self-harm")]
    #[strum(serialize = "self-harm")]
    SelfHarm,
    /// Stated intent to self-harm
    #[serde(rename = "self-harm/intent")]
    #[strum(serialize = "self-harm/intent")]
    SelfHarmIntent,
    /// Instructions for self-harm
    #[serde(rename = "self-harm/instructions")]
    #[strum(serialize = "self-harm/instructions")]
    SelfHarmInstructions,
    /// Violence
    #[serde(rename = "violence")]
    #[strum(serialize = "violence")]
    Violence,
    /// Graphic depictions of violence
    #[serde(rename = "violence/graphic")]
    #[strum(serialize = "violence/graphic")]
    ViolenceGraphic,
}

impl ModerationCategory {
    /// Wire tag for this category.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
