//! Error Handling Module
//!
//! Every failing call surfaces exactly one `BotError`, categorized by the stage
//! that produced it:
//! - building the request (local file reads, encoding)
//! - sending it (connection, timeout, body read)
//! - parsing the response envelope or payload
//! - the remote API reporting `ok=false`
//!
//! # Example
//!
//! ```rust,ignore
//! use tgbot_api::error::{BotError, ErrorKind};
//!
//! let error = BotError::api("Bad Request: chat not found");
//! assert_eq!(error.kind(), ErrorKind::Api);
//! assert!(!error.is_retryable());
//! ```

mod conversions;
pub mod types;

pub use types::*;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BotError>;
