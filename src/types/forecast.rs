//! The narrative forecast served at `<gridpoint>/forecast`.

use crate::error::NwsError;
use crate::fetch::error::SchemaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDocument {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastProperties {
    /// Forecast periods, soonest first ("Tonight", "Tuesday", ...).
    pub periods: Vec<ForecastPeriod>,
    #[serde(default)]
    pub elevation: Option<QuantitativeValue>,
    #[serde(default)]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    #[serde(default)]
    pub number: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_daytime: Option<bool>,
    #[serde(default)]
    pub short_forecast: Option<String>,
    pub detailed_forecast: String,
}

/// A `{value, unitCode}` pair as used throughout the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit_code: Option<String>,
}

impl ForecastDocument {
    pub fn period(&self, index: usize) -> Result<&ForecastPeriod, NwsError> {
        let periods = &self.properties.periods;
        periods.get(index).ok_or(NwsError::PeriodOutOfRange {
            index,
            len: periods.len(),
        })
    }

    /// Renders period `index` as `"{name}|{detailedForecast}"`, followed by
    /// `" Elevation: {value}"` when `include_elevation` is set.
    pub fn period_text(&self, index: usize, include_elevation: bool) -> Result<String, NwsError> {
        let period = self.period(index)?;
        let text = format!("{}|{}", period.name, period.detailed_forecast);
        if !include_elevation {
            return Ok(text);
        }

        let elevation = self
            .properties
            .elevation
            .as_ref()
            .and_then(|e| e.value)
            .ok_or(SchemaError::MissingField("properties.elevation.value"))?;
        Ok(format!("{} Elevation: {}", text, elevation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST_JSON: &str = r#"{
        "type": "Feature",
        "properties": {
            "updated": "2020-02-10T02:41:12+00:00",
            "elevation": {"unitCode": "wmoUnit:m", "value": 176.1768},
            "periods": [
                {
                    "number": 1,
                    "name": "Tonight",
                    "startTime": "2020-02-09T20:00:00-06:00",
                    "endTime": "2020-02-10T06:00:00-06:00",
                    "isDaytime": false,
                    "temperature": 41,
                    "temperatureUnit": "F",
                    "shortForecast": "Mostly Cloudy",
                    "detailedForecast": "Mostly cloudy, with a low around 41."
                },
                {
                    "number": 2,
                    "name": "Monday",
                    "isDaytime": true,
                    "detailedForecast": "A chance of rain after noon."
                }
            ]
        }
    }"#;

    fn document() -> ForecastDocument {
        serde_json::from_str(FORECAST_JSON).unwrap()
    }

    #[test]
    fn test_period_text() {
        let doc = document();
        assert_eq!(
            doc.period_text(0, false).unwrap(),
            "Tonight|Mostly cloudy, with a low around 41."
        );
        assert_eq!(
            doc.period_text(1, false).unwrap(),
            "Monday|A chance of rain after noon."
        );
    }

    #[test]
    fn test_period_text_with_elevation() {
        assert_eq!(
            document().period_text(0, true).unwrap(),
            "Tonight|Mostly cloudy, with a low around 41. Elevation: 176.1768"
        );
    }

    #[test]
    fn test_period_out_of_range() {
        assert!(matches!(
            document().period_text(2, false),
            Err(NwsError::PeriodOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_missing_elevation() {
        let mut doc = document();
        doc.properties.elevation = None;
        assert!(doc.period_text(0, false).is_ok());
        assert!(matches!(
            doc.period_text(0, true),
            Err(NwsError::Schema(SchemaError::MissingField(_)))
        ));
    }

    #[test]
    fn test_period_fields() {
        let doc = document();
        let period = doc.period(0).unwrap();
        assert_eq!(period.number, Some(1));
        assert_eq!(period.is_daytime, Some(false));
        assert_eq!(period.short_forecast.as_deref(), Some("Mostly Cloudy"));
    }
}
