//! Error types for Vigil.
//!
//! This crate provides the foundation error types used throughout the Vigil workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vigil_error::{ConfigError, VigilResult};
//!
//! fn load() -> VigilResult<String> {
//!     Err(ConfigError::new("missing model"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod content;
mod error;
mod json;
mod moderation;
mod validation;

pub use config::ConfigError;
pub use content::{ContentError, ContentErrorKind};
pub use error::{VigilError, VigilErrorKind, VigilResult};
pub use json::JsonError;
pub use moderation::{ModerationError, ModerationErrorKind, RetryableError};
pub use validation::ValidationError;
