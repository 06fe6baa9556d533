//! Typed access to the IRCv3 `server-time` tag.

use chrono::{DateTime, Utc};

use crate::message::Message;

/// Tag key carrying the server timestamp.
pub const TIME_TAG: &str = "time";

/// Parse an IRCv3 server-time value such as `2023-01-01T12:00:00.000Z`.
///
/// Returns `None` if the value is not RFC 3339.
pub fn parse_server_time(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// The timestamp carried by a message's `time` tag.
pub fn server_time(msg: &Message) -> Option<DateTime<Utc>> {
    msg.tag_value(TIME_TAG).and_then(parse_server_time)
}
