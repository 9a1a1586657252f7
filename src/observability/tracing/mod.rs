//! Tracing Module - Logging setup and redaction helpers
//!
//! Events emitted by the client use the targets `tgbot::http` (transport and
//! interceptors) and `tgbot::request` (request building and decoding).

use crate::error::BotError;
use tracing_subscriber::EnvFilter;

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// Single-line output.
    #[default]
    Compact,
    /// Newline-delimited JSON.
    Json,
}

/// Subscriber configuration for [`init_tracing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Filter directive used when `RUST_LOG` is not set, e.g. `tgbot=debug`.
    pub level: String,
    pub format: OutputFormat,
    /// Print event targets.
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: OutputFormat::default(),
            with_target: true,
        }
    }
}

impl TracingConfig {
    /// Debug-level logging for this crate only.
    pub fn debug() -> Self {
        Self {
            level: "tgbot=debug".to_string(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    fn filter(&self) -> Result<EnvFilter, BotError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level).map_err(|e| {
            BotError::ConfigurationError(format!("Invalid log filter '{}': {e}", self.level))
        })
    }
}

/// Install a global `fmt` subscriber. `RUST_LOG` takes precedence over
/// [`TracingConfig::level`].
///
/// Fails when the filter is invalid or a global subscriber is already set.
pub fn init_tracing(config: &TracingConfig) -> Result<(), BotError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter()?)
        .with_target(config.with_target);

    let installed = match config.format {
        OutputFormat::Pretty => builder.pretty().try_init(),
        OutputFormat::Compact => builder.compact().try_init(),
        OutputFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| BotError::ConfigurationError(format!("Failed to install subscriber: {e}")))
}

/// Mask a bot token, keeping only the numeric bot id before the colon.
///
/// `123456:ABC-DEF` becomes `123456:***`; anything else becomes `***`.
pub fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((bot_id, _)) if !bot_id.is_empty() && bot_id.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{bot_id}:***")
        }
        _ => "***".to_string(),
    }
}

/// Replace every occurrence of `token` in `url` with its masked form.
pub fn mask_url(url: &str, token: &str) -> String {
    if token.is_empty() {
        return url.to_string();
    }
    url.replace(token, &mask_token(token))
}
