//! Database query modules.
//!
//! - users: attendee registration and lookup
//! - webinars: webinar metadata and seat accounting
//! - chat: chat message persistence

pub mod chat;
pub mod users;
pub mod webinars;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Current time at the precision timestamps are stored with, so a row handed
/// back from an insert equals the same row read later.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage.
///
/// Fixed-width microsecond precision keeps lexical and chronological order
/// identical, which `ORDER BY timestamp` relies on.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp column, reporting a conversion failure on bad data.
pub(crate) fn parse_timestamp(idx: usize, value: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
