//! Utility modules for tgbot-api

pub mod mime;
