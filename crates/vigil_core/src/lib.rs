//! Core data types for the Vigil content moderation tool.
//!
//! This crate provides the moderation data model shared across the Vigil crates:
//! the fixed category set, per-input verdicts and the request/response envelopes
//! exchanged with the moderation service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod input_type;
mod request;
mod result;

pub use category::ModerationCategory;
pub use input_type::InputType;
pub use request::{ModerationRequest, ModerationResponse};
pub use result::{CategoryMap, ModerationResult};
