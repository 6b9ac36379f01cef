//! Rate limit awareness for the moderation service.
//!
//! The moderation endpoint reports its remaining quota in `x-ratelimit-*`
//! response headers. This crate turns those headers into a [`RateLimitInfo`]
//! and decides, with [`advise_wait`], whether the caller should pause before
//! its next request.
//!
//! ```
//! use vigil_rate_limit::{advise_wait, RateLimitInfo, DEFAULT_THRESHOLD};
//!
//! let info = RateLimitInfo {
//!     limit_requests: Some(100),
//!     remaining_requests: Some(5),
//!     reset_requests: Some("30s".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(advise_wait(&info, DEFAULT_THRESHOLD), 30_000);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod advisor;
mod duration;
mod info;

pub use advisor::{DEFAULT_THRESHOLD, RateLimitAdvisor, advise_wait};
pub use duration::{parse_duration, try_parse_duration};
pub use info::{
    LIMIT_REQUESTS_HEADER, LIMIT_TOKENS_HEADER, REMAINING_REQUESTS_HEADER,
    REMAINING_TOKENS_HEADER, RESET_REQUESTS_HEADER, RESET_TOKENS_HEADER, RateLimitInfo,
};
