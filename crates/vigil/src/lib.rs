//! Vigil - command-line content moderation.
//!
//! Vigil sends a piece of text to a content-moderation service, reports which
//! policy categories were flagged along with the highest confidence scores,
//! and advises how long to wait when the service's quota runs low.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vigil::{moderate_text, read_content, OpenAiModerationClient, VigilConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VigilConfig::load()?;
//!     let client = OpenAiModerationClient::from_env(&config.moderation.model)?;
//!     let text = read_content("input.txt")?;
//!
//!     let run = moderate_text(&client, &text, &config.analyzer()?, &config.advisor()?).await?;
//!     println!("{:?}", run.analysis.flagged_categories());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `vigil-error` - Error types
//! - `vigil-core` - Moderation data model
//! - `vigil-rate-limit` - Reset duration parsing, header extraction, wait advice
//! - `vigil-analysis` - Flagged categories, top scores, reports
//! - `vigil-models` - Moderation service clients
//!
//! This crate (`vigil`) re-exports everything for convenience and adds
//! configuration, the content source and the CLI binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod content;
mod pipeline;

pub use config::{AnalysisSettings, ModerationConfig, RateLimitSettings, VigilConfig};
pub use content::read_content;
pub use pipeline::{ModerationRun, moderate_text};

pub use vigil_analysis::*;
pub use vigil_core::*;
pub use vigil_error::*;
pub use vigil_models::*;
pub use vigil_rate_limit::*;
