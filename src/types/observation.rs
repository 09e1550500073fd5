use crate::units::Unit;
use chrono::{DateTime, FixedOffset, TimeDelta};

/// A resolved gridpoint value, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Start of the sample's validity window, in UTC or the local zone.
    pub time: DateTime<FixedOffset>,
    /// Length of the validity window.
    pub duration: TimeDelta,
    pub value: f64,
    /// Unit of `value` after any conversion. `None` for unitless channels.
    pub unit: Option<Unit>,
}

/// The answer to "what is this channel at this time".
///
/// A gap in the forecast is reported as [`Reading::NoData`] rather than as an error,
/// so it can't be mistaken for a missing channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Value(Observation),
    NoData { time: DateTime<FixedOffset> },
}

impl Reading {
    pub fn value(&self) -> Option<f64> {
        self.observation().map(|o| o.value)
    }

    pub fn observation(&self) -> Option<&Observation> {
        match self {
            Reading::Value(observation) => Some(observation),
            Reading::NoData { .. } => None,
        }
    }

    pub fn time(&self) -> DateTime<FixedOffset> {
        match self {
            Reading::Value(observation) => observation.time,
            Reading::NoData { time } => *time,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Reading::NoData { .. })
    }
}

/// The conditions a gridpoint reports for the current hour, converted to imperial
/// units where applicable.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: Reading,
    pub dew_point: Reading,
    pub relative_humidity: Reading,
    pub wind_chill: Reading,
    pub wind_speed: Reading,
    pub wind_direction: Reading,
}
