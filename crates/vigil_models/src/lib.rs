//! Moderation service clients for Vigil.
//!
//! The [`ModerationDriver`] trait is the seam between the application and the
//! remote moderation model. [`OpenAiModerationClient`] implements it against
//! the OpenAI `/v1/moderations` endpoint.
//!
//! ```no_run
//! use vigil_core::ModerationRequest;
//! use vigil_models::{ModerationDriver, OpenAiModerationClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiModerationClient::from_env("omni-moderation-latest")?;
//! let request = ModerationRequest::new(client.model_name(), "some text");
//! let outcome = client.moderate(&request).await?;
//! println!("flagged: {}", outcome.response().results[0].flagged());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod openai;

pub use driver::{ModerationDriver, ModerationOutcome};
pub use openai::{API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiModerationClient};
