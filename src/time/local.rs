//! Conversion of API timestamps into the caller's time zone.

use crate::time::error::TimeError;
use chrono::{DateTime, Local, TimeZone, Utc};

/// Parses an API timestamp such as `2020-02-10T03:00:00+00:00/PT3H` as a UTC instant.
///
/// Any `/duration` suffix is ignored.
pub fn parse_utc(iso_time: &str) -> Result<DateTime<Utc>, TimeError> {
    let start = iso_time
        .split_once('/')
        .map_or(iso_time, |(start, _duration)| start);
    DateTime::parse_from_rfc3339(start)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| TimeError::InvalidTimestamp {
            input: iso_time.to_string(),
            source: e,
        })
}

/// Converts an API timestamp into `zone`.
pub fn to_timezone<Tz: TimeZone>(iso_time: &str, zone: &Tz) -> Result<DateTime<Tz>, TimeError> {
    Ok(parse_utc(iso_time)?.with_timezone(zone))
}

/// Converts an API timestamp into the system's local time zone.
///
/// # Examples
///
/// ```
/// let local = nws::to_local("2020-02-10T03:00:00+00:00/PT1H").unwrap();
/// assert_eq!(local.timestamp(), 1_581_303_600);
/// ```
pub fn to_local(iso_time: &str) -> Result<DateTime<Local>, TimeError> {
    to_timezone(iso_time, &Local)
}

/// Converts an API timestamp into local time and renders it as `HH:MM`.
pub fn to_local_simple(iso_time: &str) -> Result<String, TimeError> {
    Ok(simple_time(&to_local(iso_time)?))
}

/// Renders the hour and minute of `time` as `HH:MM`.
pub fn simple_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%H:%M").to_string()
}
