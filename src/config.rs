//! Endpoint and transport settings for [`crate::Nws`].

use bon::Builder;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.weather.gov";
pub const DEFAULT_HYDROGRAPH_URL: &str = "https://water.weather.gov/ahps2/hydrograph_to_xml.php";
pub const DEFAULT_USER_AGENT: &str = concat!("nws_rs/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every request a client makes.
///
/// api.weather.gov rejects requests without a `User-Agent`; the default identifies this
/// crate, but applications should set one that includes a contact address.
///
/// # Examples
///
/// ```
/// use nws::NwsConfig;
/// use std::time::Duration;
///
/// let config = NwsConfig::builder()
///     .user_agent("my-weather-app (ops@example.com)")
///     .timeout(Duration::from_secs(10))
///     .build();
/// assert_eq!(config.api_url, "https://api.weather.gov");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct NwsConfig {
    /// Base URL of the gridpoint API, without a trailing slash.
    #[builder(into, default = DEFAULT_API_URL.to_string())]
    pub api_url: String,

    /// Full URL of the AHPS `hydrograph_to_xml.php` endpoint.
    #[builder(into, default = DEFAULT_HYDROGRAPH_URL.to_string())]
    pub hydrograph_url: String,

    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,

    /// Applies to each request as a whole, from connect until the body is read.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl Default for NwsConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
