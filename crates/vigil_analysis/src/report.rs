//! Terminal and JSON rendering of an analysis.

use crate::Analysis;
use serde::Serialize;
use std::time::Duration;
use vigil_error::JsonError;

/// Renderable moderation report.
///
/// # Examples
///
/// ```
/// use vigil_analysis::{analyze, Report};
/// use vigil_core::ModerationResult;
///
/// let analysis = analyze(&ModerationResult::uniform(false, 0.0).unwrap());
/// let text = Report::new(&analysis).with_model("omni-moderation-latest").to_human();
/// assert!(text.contains("Flagged: no"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    #[serde(flatten)]
    analysis: &'a Analysis,
    #[serde(
        rename = "advised_wait_ms",
        serialize_with = "serialize_wait",
        skip_serializing_if = "Option::is_none"
    )]
    advised_wait: Option<Duration>,
}

fn serialize_wait<S>(wait: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match wait {
        Some(wait) => serializer.serialize_u64(wait.as_millis() as u64),
        None => serializer.serialize_none(),
    }
}

impl<'a> Report<'a> {
    /// Start a report for an analysis.
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            model: None,
            analysis,
            advised_wait: None,
        }
    }

    /// Name the model that produced the verdict.
    pub fn with_model(mut self, model: &'a str) -> Self {
        self.model = Some(model);
        self
    }

    /// Attach the rate limit advice. A zero wait is not reported.
    pub fn with_advised_wait(mut self, wait: Duration) -> Self {
        self.advised_wait = (!wait.is_zero()).then_some(wait);
        self
    }

    /// Human-readable multi-line report.
    pub fn to_human(&self) -> String {
        let mut output = String::from("Moderation results\n");
        if let Some(model) = self.model {
            output.push_str(&format!("  Model: {}\n", model));
        }
        output.push_str(&format!(
            "  Flagged: {}\n",
            if *self.analysis.flagged() { "yes" } else { "no" }
        ));

        if self.analysis.flagged_categories().is_empty() {
            output.push_str("  Flagged categories: none\n");
        } else {
            let names: Vec<&str> = self
                .analysis
                .flagged_categories()
                .iter()
                .map(|c| c.as_str())
                .collect();
            output.push_str(&format!("  Flagged categories: {}\n", names.join(", ")));
        }

        if self.analysis.top_scores().is_empty() {
            output.push_str("  Top scores: none above threshold\n");
        } else {
            output.push_str("  Top scores:\n");
            for scored in self.analysis.top_scores() {
                output.push_str(&format!(
                    "    {:<24} {:>6.2}%\n",
                    scored.category.as_str(),
                    scored.score * 100.0
                ));
            }
        }

        if let Some(wait) = self.advised_wait {
            output.push_str(&format!(
                "  Rate limit: wait {:.1}s before the next request\n",
                wait.as_secs_f64()
            ));
        }
        output
    }

    /// Pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, JsonError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JsonError::new(format!("Failed to serialize report: {}", e)))
    }
}
