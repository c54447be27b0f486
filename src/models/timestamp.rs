//! Timestamp parsing and normalization
//!
//! Every timestamp accepted from a caller is parsed into a `DateTime<Utc>`
//! before it is stored or compared, so two textually different
//! representations of the same instant end up identical.
//!
//! Accepted forms:
//! - RFC 3339 with an offset (`2025-01-15T09:30:00Z`, `2025-01-15T10:30:00+01:00`)
//! - Bare date-time without an offset, treated as UTC (`2025-01-15T09:30:00`)
//! - Bare date, treated as UTC midnight (`2025-01-15`)

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::LedgerError;

/// Parse an ISO-8601 timestamp string into a normalized UTC instant
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, LedgerError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(LedgerError::DateParse(format!(
        "not a valid ISO-8601 timestamp: {input:?}"
    )))
}
