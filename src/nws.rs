//! The main entry point: an [`Nws`] client that resolves locations to gridpoints
//! and opens river gauges.

use crate::clients::gridpoint_client::Gridpoint;
use crate::clients::hydrograph_client::Hydrograph;
use crate::config::NwsConfig;
use crate::error::NwsError;
use crate::fetch::fetcher::Fetcher;
use crate::types::points::PointsDocument;
use log::debug;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// The NWS API only covers the United States and its territories.
///
/// # Examples
///
/// ```
/// use nws::LatLon;
///
/// let dallas = LatLon(32.7767, -96.7970);
/// assert_eq!(dallas.0, 32.7767); // Latitude
/// assert_eq!(dallas.1, -96.7970); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The client for the National Weather Service APIs.
///
/// Holds one HTTP client (with the configured user agent and timeout) that is shared
/// with every [`Gridpoint`] and [`Hydrograph`] it opens.
///
/// # Examples
///
/// ```no_run
/// # use nws::{LatLon, Nws, NwsError};
/// # fn main() -> Result<(), NwsError> {
/// let nws = Nws::new()?;
/// let gridpoint = nws.gridpoint(LatLon(32.7767, -96.7970))?;
/// let temperature = gridpoint.get("temperature").call()?;
/// println!("{:?}", temperature.value());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Nws {
    fetcher: Fetcher,
}

impl Nws {
    /// Creates a client with the default endpoints, user agent and a 30 s timeout.
    ///
    /// # Errors
    ///
    /// Returns [`NwsError::Fetch`] if the HTTP client can't be built.
    pub fn new() -> Result<Self, NwsError> {
        Self::with_config(NwsConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nws::{Nws, NwsConfig, NwsError};
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), NwsError> {
    /// let config = NwsConfig::builder()
    ///     .user_agent("my-weather-app (me@example.com)")
    ///     .timeout(Duration::from_secs(10))
    ///     .build();
    /// let nws = Nws::with_config(config)?;
    /// assert_eq!(nws.config().timeout, Duration::from_secs(10));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: NwsConfig) -> Result<Self, NwsError> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }

    pub fn config(&self) -> &NwsConfig {
        self.fetcher.config()
    }

    /// Looks up which forecast office and grid cell cover `coordinate`.
    pub fn points(&self, coordinate: LatLon) -> Result<PointsDocument, NwsError> {
        let url = points_url(&self.config().api_url, coordinate);
        self.fetcher.json(&url)
    }

    /// Opens the forecast gridpoint covering `coordinate`.
    ///
    /// Costs two requests: the points lookup and the gridpoint itself.
    ///
    /// # Errors
    ///
    /// * [`NwsError::Fetch`] on transport failures or non-success statuses (the API
    ///   answers `404` for locations outside its coverage).
    /// * [`NwsError::Schema`] if either response is malformed.
    pub fn gridpoint(&self, coordinate: LatLon) -> Result<Gridpoint, NwsError> {
        let points = self.points(coordinate)?;
        let grid_url = points.properties.forecast_grid_data;
        debug!("{:?} is served by {}", coordinate, grid_url);
        Gridpoint::fetch(self.fetcher.clone(), grid_url)
    }

    /// Opens a gridpoint by URL, e.g. `https://api.weather.gov/gridpoints/FWD/71,102`,
    /// skipping the points lookup.
    pub fn gridpoint_from_url(&self, grid_url: &str) -> Result<Gridpoint, NwsError> {
        Gridpoint::fetch(self.fetcher.clone(), grid_url)
    }

    /// Opens the hydrograph of an AHPS gauge, e.g. `dllt2`.
    pub fn hydrograph(&self, station: &str) -> Result<Hydrograph, NwsError> {
        Hydrograph::fetch(self.fetcher.clone(), station)
    }
}

fn points_url(api_url: &str, coordinate: LatLon) -> String {
    format!(
        "{}/points/{:.4},{:.4}",
        api_url.trim_end_matches('/'),
        coordinate.0,
        coordinate.1
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::error::FetchError;

    #[test]
    fn test_points_url() {
        assert_eq!(
            points_url("https://api.weather.gov", LatLon(32.7767, -96.797)),
            "https://api.weather.gov/points/32.7767,-96.7970"
        );
        assert_eq!(
            points_url("http://localhost:8080/", LatLon(40.0, -105.25)),
            "http://localhost:8080/points/40.0000,-105.2500"
        );
    }

    #[test]
    fn test_unreachable_api_is_network_error() {
        let config = NwsConfig::builder().api_url("http://127.0.0.1:9").build();
        let nws = Nws::with_config(config).unwrap();
        let err = nws.gridpoint(LatLon(32.7767, -96.797)).unwrap_err();
        assert!(err.is_network());
        assert!(matches!(err, NwsError::Fetch(FetchError::NetworkRequest(..))));
    }

    #[test]
    #[ignore = "requires network access to api.weather.gov"]
    fn test_live_gridpoint() {
        let nws = Nws::new().unwrap();
        let gridpoint = nws.gridpoint(LatLon(32.7767, -96.797)).unwrap();
        assert!(gridpoint.url().contains("/gridpoints/"));
        assert!(gridpoint.channels().contains(&"temperature"));
    }

    #[test]
    #[ignore = "requires network access to api.weather.gov"]
    fn test_live_gridpoint_from_url() {
        let nws = Nws::new().unwrap();
        let gridpoint = nws
            .gridpoint_from_url("https://api.weather.gov/gridpoints/FWD/71,102")
            .unwrap();
        let reading = gridpoint.get("temperature").call().unwrap();
        assert!(reading.value().is_some() || reading.is_no_data());
    }
}
