//! Provides [`Gridpoint`], a snapshot of the raw forecast grid for one 2.5 km cell.
//!
//! Obtain one via [`Nws::gridpoint()`](crate::Nws::gridpoint) or
//! [`Nws::gridpoint_from_url()`](crate::Nws::gridpoint_from_url). The snapshot is
//! fetched once; call [`Gridpoint::update()`] to replace it with fresh data.

use crate::error::NwsError;
use crate::fetch::fetcher::Fetcher;
use crate::types::forecast::ForecastDocument;
use crate::types::gridpoint::{GridpointData, GridpointDocument, ReadingOptions};
use crate::types::observation::{CurrentConditions, Reading};
use bon::bon;
use chrono::{DateTime, Utc};
use log::{debug, info};

/// Forecast grid data for a single gridpoint, e.g. `https://api.weather.gov/gridpoints/FWD/71,102`.
///
/// Every numeric property of the gridpoint (temperature, dewpoint, windSpeed, ...) is
/// available as a channel. Values are looked up per hour with
/// [`TimeSeriesResolver`](crate::TimeSeriesResolver).
#[derive(Debug, Clone)]
pub struct Gridpoint {
    fetcher: Fetcher,
    grid_url: String,
    data: GridpointData,
}

#[bon]
impl Gridpoint {
    pub(crate) fn fetch(fetcher: Fetcher, grid_url: impl Into<String>) -> Result<Self, NwsError> {
        let grid_url = grid_url.into();
        let data = load(&fetcher, &grid_url)?;
        Ok(Self {
            fetcher,
            grid_url,
            data,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(fetcher: Fetcher, grid_url: &str, data: GridpointData) -> Self {
        Self {
            fetcher,
            grid_url: grid_url.to_string(),
            data,
        }
    }

    /// The gridpoint URL this snapshot was fetched from.
    pub fn url(&self) -> &str {
        &self.grid_url
    }

    pub fn data(&self) -> &GridpointData {
        &self.data
    }

    /// Names of the numeric channels in the current snapshot, sorted.
    pub fn channels(&self) -> Vec<&str> {
        self.data.channel_names().collect()
    }

    /// Re-fetches the gridpoint and replaces the snapshot.
    ///
    /// On failure the previous snapshot is kept.
    pub fn update(&mut self) -> Result<(), NwsError> {
        info!("Refreshing gridpoint {}", self.grid_url);
        self.data = load(&self.fetcher, &self.grid_url)?;
        Ok(())
    }

    /// Looks up a channel value for the current hour.
    ///
    /// Starts a builder; finish it with `.call()`.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.offset(usize)`: step this many samples past the matched one (default `0`).
    /// * `.local_time(bool)`: report the sample time in the local zone (default `false`).
    /// * `.convert_units(bool)`: convert °C to °F and km/h or m/s to mph (default `true`).
    /// * `.at(DateTime<Utc>)`: resolve for this hour instead of the current one.
    ///
    /// # Errors
    ///
    /// * [`NwsError::Schema`] if the channel doesn't exist.
    /// * [`NwsError::Series`] if the channel is empty or holds a malformed validity window.
    /// * [`NwsError::OffsetOutOfRange`] if `offset` steps past the end of the channel.
    ///
    /// A sample whose value is `null` yields [`Reading::NoData`], not an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nws::{LatLon, Nws, NwsError};
    /// # fn main() -> Result<(), NwsError> {
    /// let nws = Nws::new()?;
    /// let gridpoint = nws.gridpoint(LatLon(32.7767, -96.7970))?;
    ///
    /// let now = gridpoint.get("temperature").call()?;
    /// let in_two = gridpoint.get("windSpeed").offset(2).local_time(true).call()?;
    ///
    /// println!("{:?} / {:?}", now.value(), in_two.value());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = get)]
    #[doc(hidden)]
    pub fn build_get(
        &self,
        #[builder(start_fn)] channel: &str,
        offset: Option<usize>,
        local_time: Option<bool>,
        convert_units: Option<bool>,
        at: Option<DateTime<Utc>>,
    ) -> Result<Reading, NwsError> {
        let options = ReadingOptions {
            offset: offset.unwrap_or(0),
            local_time: local_time.unwrap_or(false),
            convert_units: convert_units.unwrap_or(true),
            at,
        };
        self.data.reading(channel, &options)
    }

    /// Temperature, dew point, humidity, wind chill, wind speed and direction for the
    /// current hour (or `.at(..)`), converted to imperial units.
    #[builder]
    pub fn current_conditions(
        &self,
        at: Option<DateTime<Utc>>,
    ) -> Result<CurrentConditions, NwsError> {
        self.data.current_conditions(at)
    }

    /// Fetches the narrative forecast for this gridpoint.
    pub fn forecast_document(&self) -> Result<ForecastDocument, NwsError> {
        self.fetcher.json(&self.forecast_url())
    }

    /// Fetches the narrative forecast and renders one period as
    /// `"{name}|{detailedForecast}"`.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.period(usize)`: which period, `0` being the soonest (default `0`).
    /// * `.include_elevation(bool)`: append `" Elevation: {meters}"` (default `false`).
    ///
    /// # Errors
    ///
    /// [`NwsError::PeriodOutOfRange`] when `period` is past the last period, plus the
    /// usual fetch and schema errors.
    #[builder]
    pub fn forecast(
        &self,
        period: Option<usize>,
        include_elevation: Option<bool>,
    ) -> Result<String, NwsError> {
        let document = self.forecast_document()?;
        document.period_text(period.unwrap_or(0), include_elevation.unwrap_or(false))
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.grid_url.trim_end_matches('/'))
    }
}

fn load(fetcher: &Fetcher, grid_url: &str) -> Result<GridpointData, NwsError> {
    let document: GridpointDocument = fetcher.json(grid_url)?;
    let data = GridpointData::from_document(document)?;
    debug!(
        "Gridpoint {} has {} numeric channels",
        grid_url,
        data.channel_names().count()
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NwsConfig;
    use crate::fetch::error::{FetchError, SchemaError};
    use crate::types::gridpoint::tests::GRIDPOINT_JSON;
    use chrono::TimeZone;
    use std::time::Duration;

    const GRID_URL: &str = "https://api.weather.gov/gridpoints/FWD/71,102";

    fn gridpoint() -> Gridpoint {
        let fetcher = Fetcher::new(NwsConfig::default()).unwrap();
        let data = GridpointData::from_json(GRIDPOINT_JSON).unwrap();
        Gridpoint::from_parts(fetcher, GRID_URL, data)
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 2, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_failed_update_keeps_snapshot() {
        let config = NwsConfig::builder()
            .timeout(Duration::from_secs(2))
            .build();
        let fetcher = Fetcher::new(config).unwrap();
        let data = GridpointData::from_json(GRIDPOINT_JSON).unwrap();
        let mut gridpoint =
            Gridpoint::from_parts(fetcher, "http://127.0.0.1:9/gridpoints/FWD/71,102", data.clone());

        let err = gridpoint.update().unwrap_err();
        assert!(matches!(err, NwsError::Fetch(FetchError::NetworkRequest(..))));
        assert_eq!(gridpoint.data(), &data);
        let reading = gridpoint.get("temperature").at(noon()).call().unwrap();
        assert!((reading.value().unwrap() - 46.4).abs() < 1e-9);
    }

    #[test]
    fn test_get_defaults_convert_units() {
        let reading = gridpoint().get("temperature").at(noon()).call().unwrap();
        let value = reading.value().unwrap();
        assert!((value - 46.4).abs() < 1e-9);
    }

    #[test]
    fn test_get_raw_units() {
        let reading = gridpoint()
            .get("temperature")
            .at(noon())
            .convert_units(false)
            .call()
            .unwrap();
        assert_eq!(reading.value(), Some(8.0));
    }

    #[test]
    fn test_get_offset_out_of_range() {
        let err = gridpoint()
            .get("windSpeed")
            .at(noon())
            .offset(1)
            .call()
            .unwrap_err();
        assert!(matches!(err, NwsError::OffsetOutOfRange { .. }));
    }

    #[test]
    fn test_get_unknown_channel() {
        let err = gridpoint().get("snowfall").at(noon()).call().unwrap_err();
        assert!(matches!(err, NwsError::Schema(SchemaError::MissingChannel(_))));
    }

    #[test]
    fn test_channels_and_url() {
        let gridpoint = gridpoint();
        assert_eq!(gridpoint.url(), GRID_URL);
        assert!(gridpoint.channels().contains(&"windSpeed"));
        assert!(!gridpoint.channels().contains(&"weather"));
        assert_eq!(
            gridpoint.forecast_url(),
            "https://api.weather.gov/gridpoints/FWD/71,102/forecast"
        );
    }

    #[test]
    fn test_current_conditions_builder() {
        let conditions = gridpoint().current_conditions().at(noon()).call().unwrap();
        assert!(conditions.dew_point.is_no_data());
        assert_eq!(conditions.wind_direction.value(), Some(180.0));
    }

    #[test]
    #[ignore = "requires network access to api.weather.gov"]
    fn test_live_forecast() {
        let fetcher = Fetcher::new(NwsConfig::default()).unwrap();
        let gridpoint = Gridpoint::fetch(fetcher, GRID_URL).unwrap();
        let text = gridpoint.forecast().call().unwrap();
        assert!(text.contains('|'));
    }
}
