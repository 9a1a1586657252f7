//! Per-call deadlines.

use crate::defaults::http::LONG_POLL_DEADLINE_SLACK;
use std::time::Duration;

/// Deadline of a long-poll call asking the server to wait `poll_secs` seconds.
///
/// The local deadline ends just short of the requested duration. Zero or a
/// negative value means no long polling and yields `fallback`.
pub fn long_poll_timeout(poll_secs: i64, fallback: Duration) -> Duration {
    match u64::try_from(poll_secs) {
        Ok(secs) if secs > 0 => Duration::from_secs(secs).saturating_sub(LONG_POLL_DEADLINE_SLACK),
        _ => fallback,
    }
}
