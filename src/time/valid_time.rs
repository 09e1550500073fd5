//! Validity windows as served by the gridpoint API.
//!
//! Every sample carries a `validTime` of the form `2020-02-10T03:00:00+00:00/PT3H`:
//! an RFC 3339 start instant followed by an ISO-8601 duration.

use crate::time::error::TimeError;
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

/// A parsed `start/duration` validity window.
///
/// The window covers `[start, start + duration)`. A zero duration describes a single
/// instant, which is how hydrograph rows are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidTime {
    /// Start of the window, with the offset the server sent.
    pub start: DateTime<FixedOffset>,
    /// Length of the window.
    pub duration: TimeDelta,
}

impl ValidTime {
    /// Parses `start/duration`. A bare timestamp without `/duration` is an instant.
    ///
    /// # Examples
    ///
    /// ```
    /// use nws::ValidTime;
    /// use chrono::TimeDelta;
    ///
    /// let window = ValidTime::parse("2020-02-10T03:00:00+00:00/PT3H").unwrap();
    /// assert_eq!(window.duration, TimeDelta::hours(3));
    /// ```
    pub fn parse(input: &str) -> Result<Self, TimeError> {
        let (start, duration) = match input.split_once('/') {
            Some((start, duration)) => (start, parse_iso_duration(duration)?),
            None => (input, TimeDelta::zero()),
        };
        let start =
            DateTime::parse_from_rfc3339(start).map_err(|e| TimeError::InvalidTimestamp {
                input: input.to_string(),
                source: e,
            })?;
        Ok(Self { start, duration })
    }

    /// A zero-length window at `start`.
    pub fn instant(start: DateTime<FixedOffset>) -> Self {
        Self {
            start,
            duration: TimeDelta::zero(),
        }
    }

    pub fn start_utc(&self) -> DateTime<Utc> {
        self.start.with_timezone(&Utc)
    }

    pub fn end_utc(&self) -> DateTime<Utc> {
        self.start_utc() + self.duration
    }

    /// Whether `time` falls inside the window. An instant only contains itself.
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        let start = self.start_utc();
        if self.duration.is_zero() {
            return start == time;
        }
        start <= time && time < self.end_utc()
    }
}

/// Parses the fixed-length subset of ISO-8601 durations: `PnW`, `PnDTnHnMnS` and
/// any combination of those designators.
///
/// Years and months have no fixed length and are rejected.
pub fn parse_iso_duration(input: &str) -> Result<TimeDelta, TimeError> {
    let invalid = || TimeError::InvalidDuration(input.to_string());

    let body = input.strip_prefix('P').ok_or_else(invalid)?;
    if body.is_empty() {
        return Err(invalid());
    }

    let mut total = TimeDelta::zero();
    let mut in_time = false;
    let mut digits = String::new();
    let mut saw_component = false;
    let mut saw_time_component = false;

    for c in body.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'T' if !in_time && digits.is_empty() => in_time = true,
            designator => {
                let amount: i64 = digits.parse().map_err(|_| invalid())?;
                digits.clear();
                let part = match (in_time, designator) {
                    (false, 'W') => TimeDelta::try_weeks(amount),
                    (false, 'D') => TimeDelta::try_days(amount),
                    (false, 'Y') | (false, 'M') => {
                        return Err(TimeError::CalendarDuration(input.to_string()))
                    }
                    (true, 'H') => TimeDelta::try_hours(amount),
                    (true, 'M') => TimeDelta::try_minutes(amount),
                    (true, 'S') => TimeDelta::try_seconds(amount),
                    _ => None,
                }
                .ok_or_else(invalid)?;
                total = total.checked_add(&part).ok_or_else(invalid)?;
                saw_component = true;
                saw_time_component |= in_time;
            }
        }
    }

    // Trailing digits without a designator, or a "T" with nothing after it.
    if !digits.is_empty() || !saw_component || (in_time && !saw_time_component) {
        return Err(invalid());
    }
    Ok(total)
}
