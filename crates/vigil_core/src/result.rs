//! Per-input moderation verdicts.

use crate::{InputType, ModerationCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::EnumCount;
use vigil_error::ValidationError;

/// Map keyed by category, iterated in canonical category order.
pub type CategoryMap<T> = BTreeMap<ModerationCategory, T>;

/// Moderation verdict for a single input.
///
/// Every map holds exactly one entry per [`ModerationCategory`]. Construction
/// (including deserialization) rejects verdicts that omit a category from
/// `categories` or `category_scores`, or carry a score outside `[0, 1]`.
/// Categories missing from `category_applied_input_types` get an empty list.
///
/// # Examples
///
/// ```
/// use vigil_core::{ModerationCategory, ModerationResult};
///
/// let result = ModerationResult::uniform(false, 0.0).unwrap();
/// assert!(!*result.flagged());
/// assert_eq!(result.score(ModerationCategory::Hate), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(try_from = "RawModerationResult")]
pub struct ModerationResult {
    /// Whether the service judged the input to violate any category
    flagged: bool,
    /// Per-category violation flags
    categories: CategoryMap<bool>,
    /// Per-category confidence scores in `[0, 1]`
    category_scores: CategoryMap<f64>,
    /// Input modalities each category score was computed from
    category_applied_input_types: CategoryMap<Vec<InputType>>,
}

#[derive(Deserialize)]
struct RawModerationResult {
    flagged: bool,
    categories: CategoryMap<bool>,
    category_scores: CategoryMap<f64>,
    #[serde(default)]
    category_applied_input_types: CategoryMap<Vec<InputType>>,
}

impl TryFrom<RawModerationResult> for ModerationResult {
    type Error = ValidationError;

    fn try_from(raw: RawModerationResult) -> Result<Self, Self::Error> {
        Self::new(
            raw.flagged,
            raw.categories,
            raw.category_scores,
            raw.category_applied_input_types,
        )
    }
}

impl ModerationResult {
    /// Creates a verdict, enforcing the full-category-set invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if `categories` or `category_scores` does not cover
    /// every category, or if any score is not a finite value in `[0, 1]`.
    #[track_caller]
    pub fn new(
        flagged: bool,
        categories: CategoryMap<bool>,
        category_scores: CategoryMap<f64>,
        mut category_applied_input_types: CategoryMap<Vec<InputType>>,
    ) -> Result<Self, ValidationError> {
        if categories.len() != ModerationCategory::COUNT {
            return Err(ValidationError::new(format!(
                "expected {} categories, got {}",
                ModerationCategory::COUNT,
                categories.len()
            )));
        }
        if category_scores.len() != ModerationCategory::COUNT {
            return Err(ValidationError::new(format!(
                "expected {} category scores, got {}",
                ModerationCategory::COUNT,
                category_scores.len()
            )));
        }
        if let Some((category, score)) = category_scores
            .iter()
            .find(|(_, score)| !score.is_finite() || **score < 0.0 || **score > 1.0)
        {
            return Err(ValidationError::new(format!(
                "score for {} out of range: {}",
                category, score
            )));
        }

        for category in categories.keys() {
            category_applied_input_types.entry(*category).or_default();
        }

        Ok(Self {
            flagged,
            categories,
            category_scores,
            category_applied_input_types,
        })
    }

    /// Creates a verdict with the same flag and score for every category.
    ///
    /// Every category is marked as scored from text input.
    ///
    /// # Errors
    ///
    /// Returns an error if `score` is not a finite value in `[0, 1]`.
    #[track_caller]
    pub fn uniform(flagged: bool, score: f64) -> Result<Self, ValidationError> {
        use strum::IntoEnumIterator;

        Self::new(
            flagged,
            ModerationCategory::iter().map(|c| (c, flagged)).collect(),
            ModerationCategory::iter().map(|c| (c, score)).collect(),
            ModerationCategory::iter()
                .map(|c| (c, vec![InputType::Text]))
                .collect(),
        )
    }

    /// Whether a single category was flagged.
    pub fn is_flagged(&self, category: ModerationCategory) -> bool {
        self.categories.get(&category).copied().unwrap_or(false)
    }

    /// Confidence score for a single category.
    pub fn score(&self, category: ModerationCategory) -> f64 {
        self.category_scores.get(&category).copied().unwrap_or(0.0)
    }
}
