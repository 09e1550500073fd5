use crate::time::rounding::round_to_hour;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Anything that can name the hour a series should be resolved at.
///
/// Zoned datetimes are converted to UTC, naive datetimes are taken to be UTC already,
/// and the result is rounded with [`round_to_hour`].
pub trait IntoTargetHour {
    fn into_target_hour(self) -> DateTime<Utc>;
}

impl<Tz: TimeZone> IntoTargetHour for DateTime<Tz> {
    fn into_target_hour(self) -> DateTime<Utc> {
        round_to_hour(self.with_timezone(&Utc))
    }
}

impl IntoTargetHour for NaiveDateTime {
    fn into_target_hour(self) -> DateTime<Utc> {
        round_to_hour(Utc.from_utc_datetime(&self))
    }
}
