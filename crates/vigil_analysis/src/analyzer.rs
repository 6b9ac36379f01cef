//! Flagged-category and top-score extraction.

use serde::Serialize;
use tracing::{debug, instrument};
use vigil_core::{ModerationCategory, ModerationResult};
use vigil_error::ConfigError;

/// Scores at or below this value are left out of the top scores.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.1;

/// Number of top scores kept.
pub const DEFAULT_TOP_N: usize = 3;

/// A category paired with its confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredCategory {
    /// The category
    pub category: ModerationCategory,
    /// Confidence score in `[0, 1]`
    pub score: f64,
}

/// Summary of one moderation verdict.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct Analysis {
    /// Overall verdict, copied from the result
    flagged: bool,
    /// Flagged categories in canonical order
    flagged_categories: Vec<ModerationCategory>,
    /// Highest scores above the threshold, descending
    top_scores: Vec<ScoredCategory>,
}

/// Analyze a verdict with the default threshold and top-N.
///
/// # Examples
///
/// ```
/// use vigil_analysis::analyze;
/// use vigil_core::ModerationResult;
///
/// let analysis = analyze(&ModerationResult::uniform(false, 0.05).unwrap());
/// assert!(analysis.flagged_categories().is_empty());
/// assert!(analysis.top_scores().is_empty());
/// ```
pub fn analyze(result: &ModerationResult) -> Analysis {
    Analyzer::default().analyze(result)
}

/// Verdict analyzer with a configurable score threshold and result count.
#[derive(Debug, Clone, Copy, PartialEq, derive_getters::Getters)]
pub struct Analyzer {
    /// Scores must be strictly greater than this to be reported
    score_threshold: f64,
    /// Maximum number of top scores reported
    top_n: usize,
}

impl Analyzer {
    /// Create an analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if `score_threshold` is outside `[0.0, 1.0]` or
    /// `top_n` is zero.
    #[track_caller]
    pub fn new(score_threshold: f64, top_n: usize) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&score_threshold) {
            return Err(ConfigError::new(format!(
                "Score threshold must be in [0.0, 1.0], got {}",
                score_threshold
            )));
        }
        if top_n == 0 {
            return Err(ConfigError::new("Top score count must be at least 1"));
        }
        Ok(Self {
            score_threshold,
            top_n,
        })
    }

    /// Extract flagged categories and top scores from a verdict.
    #[instrument(skip(self, result), fields(flagged = *result.flagged()))]
    pub fn analyze(&self, result: &ModerationResult) -> Analysis {
        let flagged_categories: Vec<ModerationCategory> = result
            .categories()
            .iter()
            .filter(|(_, flagged)| **flagged)
            .map(|(category, _)| *category)
            .collect();

        let mut top_scores: Vec<ScoredCategory> = result
            .category_scores()
            .iter()
            .filter(|(_, score)| **score > self.score_threshold)
            .map(|(category, score)| ScoredCategory {
                category: *category,
                score: *score,
            })
            .collect();
        // Stable sort keeps canonical order among equal scores.
        top_scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        top_scores.truncate(self.top_n);

        debug!(
            flagged = flagged_categories.len(),
            top = top_scores.len(),
            "Analyzed moderation result"
        );

        Analysis {
            flagged: *result.flagged(),
            flagged_categories,
            top_scores,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            top_n: DEFAULT_TOP_N,
        }
    }
}
