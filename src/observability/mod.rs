//! Observability
//!
//! Structured logging helpers built on `tracing`. The library only emits
//! events; installing a subscriber is left to the application, optionally
//! through [`tracing::init_tracing`].

pub mod tracing;

pub use self::tracing::{OutputFormat, TracingConfig, init_tracing, mask_token, mask_url};
