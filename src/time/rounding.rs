use chrono::{DateTime, DurationRound, SecondsFormat, TimeDelta, Timelike, Utc};

/// Rounds a UTC time to an hour boundary.
///
/// Minutes past 30 round up to the next hour, anything else rounds down, so
/// `10:30:59` becomes `10:00` and `10:31` becomes `11:00`. Seconds and sub-seconds are
/// always dropped.
pub fn round_to_hour(time: DateTime<Utc>) -> DateTime<Utc> {
    let truncated = time
        .duration_trunc(TimeDelta::hours(1))
        .unwrap_or_else(|_| {
            // Only reachable at the edges of the representable range.
            time.with_nanosecond(0)
                .and_then(|t| t.with_second(0))
                .and_then(|t| t.with_minute(0))
                .unwrap_or(time)
        });
    if time.minute() > 30 {
        truncated + TimeDelta::hours(1)
    } else {
        truncated
    }
}

/// The current UTC time, rounded with [`round_to_hour`].
pub fn current_hour() -> DateTime<Utc> {
    round_to_hour(Utc::now())
}

/// Formats an hour as the API writes it: `2020-02-10T03:00:00+00:00`.
pub fn format_hour(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rounds_down_at_or_below_half_hour() {
        let time = Utc.with_ymd_and_hms(2020, 2, 10, 10, 30, 59).unwrap();
        assert_eq!(
            round_to_hour(time),
            Utc.with_ymd_and_hms(2020, 2, 10, 10, 0, 0).unwrap()
        );
        let time = Utc.with_ymd_and_hms(2020, 2, 10, 10, 0, 0).unwrap();
        assert_eq!(round_to_hour(time), time);
    }

    #[test]
    fn test_rounds_up_past_half_hour() {
        let time = Utc.with_ymd_and_hms(2020, 2, 10, 10, 31, 0).unwrap();
        assert_eq!(
            round_to_hour(time),
            Utc.with_ymd_and_hms(2020, 2, 10, 11, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_round_up_rolls_over_year() {
        let time = Utc.with_ymd_and_hms(2019, 12, 31, 23, 45, 0).unwrap();
        assert_eq!(
            round_to_hour(time),
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_drops_subseconds() {
        let time = Utc.with_ymd_and_hms(2020, 2, 10, 10, 5, 0).unwrap()
            + TimeDelta::milliseconds(250);
        assert_eq!(
            round_to_hour(time),
            Utc.with_ymd_and_hms(2020, 2, 10, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_format_hour() {
        let time = Utc.with_ymd_and_hms(2020, 2, 10, 3, 0, 0).unwrap();
        assert_eq!(format_hour(time), "2020-02-10T03:00:00+00:00");
    }

    #[test]
    fn test_current_hour_is_aligned() {
        let hour = current_hour();
        assert_eq!(hour.minute(), 0);
        assert_eq!(hour.second(), 0);
        assert_eq!(hour.nanosecond(), 0);
    }
}
