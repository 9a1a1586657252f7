//! MIME type detection utilities

use crate::defaults::FALLBACK_MIME;
use std::path::Path;

/// Guess MIME by inspecting bytes (magic numbers)
pub fn guess_mime_from_bytes(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|k| k.mime_type().to_string())
}

/// Guess MIME by file extension
pub fn guess_mime_from_path(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first_raw()
        .map(|s| s.to_string())
}

/// Combined guess: prefer bytes, fall back to extension, otherwise octet-stream
pub fn guess_mime(bytes: Option<&[u8]>, path: Option<&Path>) -> String {
    if let Some(b) = bytes
        && let Some(m) = guess_mime_from_bytes(b)
    {
        return m;
    }
    if let Some(p) = path
        && let Some(m) = guess_mime_from_path(p)
    {
        return m;
    }
    FALLBACK_MIME.to_string()
}
