//! tgbot-api
//!
//! Typed client for the Telegram Bot HTTP API. The interesting part is the
//! marshalling engine: parameters are sent as JSON unless a local file is
//! attached, in which case they are flattened into a multipart form; every
//! response goes through the `{ok, result|description}` envelope before being
//! decoded into the caller's type.
//!
//! # Example
//!
//! ```rust,ignore
//! use tgbot_api::prelude::*;
//!
//! let client = BotClient::builder().token("123:abc").build()?;
//! let me = client.get_me().await?;
//! client
//!     .send_message(&SendMessageParams::new(ChatId::from(42), "hello"))
//!     .await?;
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod methods;
pub mod observability;
pub mod params;
pub mod types;
pub mod utils;

pub use client::{BotClient, BotClientBuilder};
pub use error::{BotError, ErrorKind, Result};

/// Commonly used types, re-exported for `use tgbot_api::prelude::*`.
pub mod prelude {
    pub use crate::client::{BotClient, BotClientBuilder, BotConfig, HttpConfig};
    pub use crate::error::{BotError, ErrorKind};
    pub use crate::execution::{Outcome, RawPayload};
    pub use crate::methods::*;
    pub use crate::params::{FieldSpec, FieldValue, FormSchema, MethodParams, OMIT};
    pub use crate::types::*;
}
