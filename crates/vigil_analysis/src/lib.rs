//! Analysis of moderation verdicts.
//!
//! [`analyze`] reduces a [`vigil_core::ModerationResult`] to the categories that
//! were flagged and the highest-confidence scores; [`Report`] renders that
//! analysis for the terminal or as JSON.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod report;

pub use analyzer::{
    Analysis, Analyzer, DEFAULT_SCORE_THRESHOLD, DEFAULT_TOP_N, ScoredCategory, analyze,
};
pub use report::Report;
