//! Gridpoint time series as they appear in the `properties` of a gridpoint document.

use crate::time::error::TimeError;
use crate::time::valid_time::ValidTime;
use crate::units::Unit;
use serde::{Deserialize, Serialize};

/// One timestamped value of a channel.
///
/// `value` is `None` where the forecast has a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// ISO-8601 interval, e.g. `2020-02-10T03:00:00+00:00/PT1H`.
    pub valid_time: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl Sample {
    pub fn new(valid_time: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            valid_time: valid_time.into(),
            value,
        }
    }

    /// Parses [`Sample::valid_time`].
    pub fn window(&self) -> Result<ValidTime, TimeError> {
        ValidTime::parse(&self.valid_time)
    }
}

/// A named gridpoint property such as `temperature` or `windSpeed`.
///
/// Samples are kept in the order the server sent them, which is usually but not
/// necessarily chronological.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Channel {
    /// Unit-of-measure code, e.g. `wmoUnit:degC`. Absent for unitless channels.
    #[serde(default)]
    pub uom: Option<String>,
    pub values: Vec<Sample>,
}

impl Channel {
    pub fn unit(&self) -> Option<Unit> {
        self.uom.as_deref().map(Unit::from_uom)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
