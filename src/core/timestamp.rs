//! Timestamp prefix for log lines
//!
//! Lines carry local wall-clock time as `YYYY/MM/DD HH:MM:SS ` (24-hour,
//! zero-padded, trailing space included).

use chrono::{DateTime, Local, TimeZone};
use std::fmt;

/// strftime pattern for the prefix, including the separating space.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S ";

/// Width in characters of a rendered prefix.
pub const TIMESTAMP_WIDTH: usize = 20;

/// Render `datetime` as a line prefix.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use leveled_log::core::timestamp::format_timestamp;
///
/// let dt = Utc.with_ymd_and_hms(2018, 3, 9, 7, 5, 3).unwrap();
/// assert_eq!(format_timestamp(&dt), "2018/03/09 07:05:03 ");
/// ```
#[must_use]
pub fn format_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time as a line prefix.
#[must_use]
pub fn now_prefix() -> String {
    format_timestamp(&Local::now())
}
