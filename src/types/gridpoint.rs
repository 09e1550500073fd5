//! Snapshot of a gridpoint document (`/gridpoints/{wfo}/{x},{y}`).

use crate::error::NwsError;
use crate::fetch::error::SchemaError;
use crate::series::resolver::{Resolution, ResolvedPoint, TimeSeriesResolver};
use crate::types::observation::{CurrentConditions, Observation, Reading};
use crate::types::sample::Channel;
use crate::units::Unit;
use chrono::{DateTime, FixedOffset, Local, Utc};
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Raw gridpoint document as served. Only `properties` is of interest.
#[derive(Debug, Clone, Deserialize)]
pub struct GridpointDocument {
    pub properties: Map<String, Value>,
}

/// How a channel value should be resolved and presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingOptions {
    /// Number of samples to step past the one matching the target hour.
    pub offset: usize,
    /// Report times in the system's local zone instead of UTC.
    pub local_time: bool,
    /// Convert temperatures and speeds to imperial units.
    pub convert_units: bool,
    /// Resolve at this time instead of now. Rounded to the hour.
    pub at: Option<DateTime<Utc>>,
}

impl Default for ReadingOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            local_time: false,
            convert_units: true,
            at: None,
        }
    }
}

/// Every numeric channel of one gridpoint, as fetched.
///
/// Properties that are not `{uom, values: [{validTime, value}]}` series with numeric
/// values (for example `weather` or `hazards`) are left out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridpointData {
    pub update_time: Option<DateTime<FixedOffset>>,
    channels: BTreeMap<String, Channel>,
}

impl GridpointData {
    /// Collects every property that holds a `values` series.
    ///
    /// Properties without a `uom` whose samples aren't numeric (`weather`, `hazards`)
    /// are skipped. A property with a `uom` whose samples don't parse is an error.
    pub fn from_document(document: GridpointDocument) -> Result<Self, SchemaError> {
        let update_time = document
            .properties
            .get("updateTime")
            .and_then(Value::as_str)
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok());

        let mut channels = BTreeMap::new();
        for (name, property) in document.properties {
            let is_series = property.get("values").is_some_and(Value::is_array);
            if !is_series {
                continue;
            }
            let has_unit = property.get("uom").is_some();
            match serde_json::from_value::<Channel>(property) {
                Ok(channel) => {
                    channels.insert(name, channel);
                }
                Err(source) if has_unit => {
                    return Err(SchemaError::MalformedChannel { name, source });
                }
                Err(e) => debug!("Skipping non-numeric gridpoint property '{}': {}", name, e),
            }
        }

        Ok(Self {
            update_time,
            channels,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let document = serde_json::from_str(json).map_err(|e| SchemaError::Json {
            url: "<inline>".to_string(),
            source: e,
        })?;
        Self::from_document(document)
    }

    pub fn channel(&self, name: &str) -> Result<&Channel, SchemaError> {
        self.channels
            .get(name)
            .ok_or_else(|| SchemaError::MissingChannel(name.to_string()))
    }

    /// Names of the numeric channels, sorted.
    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    /// Resolves `channel` at the target hour and renders the result.
    pub fn reading(&self, channel: &str, options: &ReadingOptions) -> Result<Reading, NwsError> {
        let series = self.channel(channel)?;
        let resolver = match options.at {
            Some(at) => TimeSeriesResolver::at(at),
            None => TimeSeriesResolver::now(),
        };

        match resolver.resolve(&series.values, options.offset)? {
            Resolution::Found(point) => Ok(Reading::Value(observe(series.unit(), point, options))),
            Resolution::NoData { valid_time, .. } => Ok(Reading::NoData {
                time: present_time(valid_time.start, options.local_time),
            }),
            Resolution::OutOfRange {
                matched,
                offset,
                len,
            } => Err(NwsError::OffsetOutOfRange {
                series: channel.to_string(),
                matched,
                offset,
                len,
            }),
        }
    }

    /// Temperature, dew point, humidity, wind chill, wind speed and direction at the
    /// target hour, in imperial units.
    pub fn current_conditions(&self, at: Option<DateTime<Utc>>) -> Result<CurrentConditions, NwsError> {
        let options = ReadingOptions {
            at,
            ..ReadingOptions::default()
        };
        Ok(CurrentConditions {
            temperature: self.reading("temperature", &options)?,
            dew_point: self.reading("dewpoint", &options)?,
            relative_humidity: self.reading("relativeHumidity", &options)?,
            wind_chill: self.reading("windChill", &options)?,
            wind_speed: self.reading("windSpeed", &options)?,
            wind_direction: self.reading("windDirection", &options)?,
        })
    }
}

fn observe(unit: Option<Unit>, point: ResolvedPoint, options: &ReadingOptions) -> Observation {
    let (value, unit) = match unit {
        Some(unit) if options.convert_units => {
            let (value, unit) = unit.to_imperial(point.value);
            (value, Some(unit))
        }
        unit => (point.value, unit),
    };
    Observation {
        time: present_time(point.valid_time.start, options.local_time),
        duration: point.valid_time.duration,
        value,
        unit,
    }
}

pub(crate) fn present_time(time: DateTime<FixedOffset>, local_time: bool) -> DateTime<FixedOffset> {
    if local_time {
        time.with_timezone(&Local).fixed_offset()
    } else {
        time
    }
}
