//! Resolution of sparse, irregular time series to a single point in time.
//!
//! A series is scanned for the entry whose validity window contains the target hour.
//! When none does, the entry on the same UTC day whose start hour is closest to the
//! target hour is taken instead. An offset then steps forward through the series in
//! server order, which may cross into the next day.

use crate::series::error::SeriesError;
use crate::time::error::TimeError;
use crate::time::rounding::current_hour;
use crate::time::target_hour::IntoTargetHour;
use crate::time::valid_time::ValidTime;
use crate::types::sample::Sample;
use chrono::{DateTime, Timelike, Utc};
use log::debug;

/// An entry of a series that covers some span of time.
pub trait Timestamped {
    fn valid_time(&self) -> Result<ValidTime, TimeError>;
}

/// A [`Timestamped`] entry that carries one numeric value, possibly missing.
pub trait Valued: Timestamped {
    fn value(&self) -> Option<f64>;
}

impl Timestamped for Sample {
    fn valid_time(&self) -> Result<ValidTime, TimeError> {
        self.window()
    }
}

impl Valued for Sample {
    fn value(&self) -> Option<f64> {
        self.value
    }
}

/// How the anchor entry of a resolution was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The entry's window contains the target hour.
    Exact,
    /// No window contains the target; this is the closest start hour on the same day.
    NearestHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub index: usize,
    pub kind: MatchKind,
}

/// Where an offset lands relative to the anchor entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Index(usize),
    OutOfRange {
        matched: usize,
        offset: usize,
        len: usize,
    },
}

/// The value found for a target time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPoint {
    /// Index into the series as given.
    pub index: usize,
    pub valid_time: ValidTime,
    pub value: f64,
}

/// Outcome of [`TimeSeriesResolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Found(ResolvedPoint),
    /// The entry exists but its value is missing.
    NoData { index: usize, valid_time: ValidTime },
    /// `matched + offset` is past the end of the series.
    OutOfRange {
        matched: usize,
        offset: usize,
        len: usize,
    },
}

impl Resolution {
    pub fn value(&self) -> Option<f64> {
        match self {
            Resolution::Found(point) => Some(point.value),
            _ => None,
        }
    }
}

/// Resolves series at a fixed target hour.
///
/// # Examples
///
/// ```
/// use nws::{Sample, TimeSeriesResolver};
/// use chrono::{TimeZone, Utc};
///
/// let samples = vec![
///     Sample::new("2020-02-10T03:00:00+00:00/PT1H", Some(5.0)),
///     Sample::new("2020-02-10T09:00:00+00:00/PT1H", Some(8.0)),
/// ];
/// let resolver = TimeSeriesResolver::new(Utc.with_ymd_and_hms(2020, 2, 10, 12, 0, 0).unwrap());
///
/// let resolution = resolver.resolve(&samples, 0).unwrap();
/// assert_eq!(resolution.value(), Some(8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSeriesResolver {
    target: DateTime<Utc>,
}

impl TimeSeriesResolver {
    /// Uses `target` as given. Callers normally pass an hour-aligned time.
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// Rounds `time` to the hour (see [`crate::round_to_hour`]) and uses that.
    pub fn at(time: impl IntoTargetHour) -> Self {
        Self::new(time.into_target_hour())
    }

    /// Resolves at the current hour.
    pub fn now() -> Self {
        Self::new(current_hour())
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Finds the anchor entry for the target hour.
    ///
    /// The scan stops at the first entry whose window contains the target. Otherwise
    /// the entry on the target's UTC day with the smallest hour distance wins, the
    /// earliest one in series order on ties.
    pub fn locate<T: Timestamped>(&self, series: &[T]) -> Result<Match, SeriesError> {
        let mut windows = Vec::with_capacity(series.len());
        for (index, entry) in series.iter().enumerate() {
            let window = entry
                .valid_time()
                .map_err(|source| SeriesError::InvalidSample { index, source })?;
            if window.contains(self.target) {
                debug!("Exact match for {} at index {}", self.target, index);
                return Ok(Match {
                    index,
                    kind: MatchKind::Exact,
                });
            }
            windows.push(window);
        }

        let target_day = self.target.date_naive();
        let target_hour = i64::from(self.target.hour());

        let nearest = windows
            .iter()
            .enumerate()
            .filter(|(_, window)| window.start_utc().date_naive() == target_day)
            .min_by_key(|(_, window)| (i64::from(window.start_utc().hour()) - target_hour).abs())
            .map(|(index, _)| Match {
                index,
                kind: MatchKind::NearestHour,
            })
            .ok_or(SeriesError::NoCandidates {
                target: self.target,
            })?;

        debug!(
            "No exact match for {}, nearest hour is at index {}",
            self.target, nearest.index
        );
        Ok(nearest)
    }

    /// Locates the anchor entry and steps `offset` entries further in series order.
    pub fn position<T: Timestamped>(
        &self,
        series: &[T],
        offset: usize,
    ) -> Result<Position, SeriesError> {
        let matched = self.locate(series)?.index;
        let len = series.len();
        Ok(match matched.checked_add(offset) {
            Some(index) if index < len => Position::Index(index),
            _ => Position::OutOfRange {
                matched,
                offset,
                len,
            },
        })
    }

    /// Resolves the value at the target hour, `offset` entries ahead.
    pub fn resolve<T: Valued>(&self, series: &[T], offset: usize) -> Result<Resolution, SeriesError> {
        let index = match self.position(series, offset)? {
            Position::Index(index) => index,
            Position::OutOfRange {
                matched,
                offset,
                len,
            } => {
                return Ok(Resolution::OutOfRange {
                    matched,
                    offset,
                    len,
                })
            }
        };

        // `position` only yields in-bounds indices.
        let entry = &series[index];
        let valid_time = entry
            .valid_time()
            .map_err(|source| SeriesError::InvalidSample { index, source })?;

        Ok(match entry.value() {
            Some(value) => Resolution::Found(ResolvedPoint {
                index,
                valid_time,
                value,
            }),
            None => {
                debug!("Null value at index {} ({:?})", index, valid_time.start);
                Resolution::NoData { index, valid_time }
            }
        })
    }
}
