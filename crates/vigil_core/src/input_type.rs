//! Input modality tags.

use serde::{Deserialize, Serialize};

/// Input modality a category score was computed from.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InputType {
    /// Text input
    Text,
    /// Image input
    Image,
}
