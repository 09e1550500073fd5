use serde::{Deserialize, Serialize};

/// Response of `/points/{lat},{lon}`: which forecast office and grid cell cover a
/// location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsDocument {
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsProperties {
    /// URL of the raw gridpoint time series, e.g. `https://api.weather.gov/gridpoints/FWD/71,102`.
    pub forecast_grid_data: String,
    /// Forecast office identifier, e.g. `FWD`.
    #[serde(default)]
    pub grid_id: Option<String>,
    #[serde(default)]
    pub grid_x: Option<u32>,
    #[serde(default)]
    pub grid_y: Option<u32>,
}
