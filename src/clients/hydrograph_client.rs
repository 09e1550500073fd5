//! Provides [`Hydrograph`], observed and forecast river levels for one AHPS gauge.
//!
//! Obtain one via [`Nws::hydrograph()`](crate::Nws::hydrograph).

use crate::error::NwsError;
use crate::fetch::fetcher::Fetcher;
use crate::series::resolver::TimeSeriesResolver;
use crate::types::gridpoint::present_time;
use crate::types::hydrograph::{HydrographData, Level, SiteXml};
use bon::bon;
use chrono::{DateTime, Utc};
use log::{debug, info};

/// River stage and flow for a gauge such as `dllt2` (Trinity River at Dallas).
#[derive(Debug, Clone)]
pub struct Hydrograph {
    fetcher: Fetcher,
    station: String,
    data: HydrographData,
}

#[bon]
impl Hydrograph {
    pub(crate) fn fetch(fetcher: Fetcher, station: &str) -> Result<Self, NwsError> {
        let data = load(&fetcher, station)?;
        Ok(Self {
            fetcher,
            station: station.to_string(),
            data,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(fetcher: Fetcher, data: HydrographData) -> Self {
        Self {
            fetcher,
            station: data.station.clone(),
            data,
        }
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn data(&self) -> &HydrographData {
        &self.data
    }

    /// Observed rows, newest first.
    pub fn observed_levels(&self) -> &[Level] {
        self.data.observed_levels()
    }

    /// Forecast rows, oldest first.
    pub fn forecast_levels(&self) -> &[Level] {
        self.data.forecast_levels()
    }

    /// Re-fetches the gauge and replaces the snapshot.
    pub fn update(&mut self) -> Result<(), NwsError> {
        info!("Refreshing hydrograph {}", self.station);
        self.data = load(&self.fetcher, &self.station)?;
        Ok(())
    }

    /// An observed level, counting back from the newest.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.historical_index(usize)`: `0` is the latest observation (default `0`).
    /// * `.local_time(bool)`: report the time in the local zone (default `true`).
    ///
    /// # Errors
    ///
    /// [`NwsError::LevelOutOfRange`] if the gauge has fewer observations.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nws::{Nws, NwsError};
    /// # fn main() -> Result<(), NwsError> {
    /// let river = Nws::new()?.hydrograph("dllt2")?;
    /// let latest = river.level().call()?;
    /// let earlier = river.level().historical_index(4).call()?;
    /// println!("{:?} ft, was {:?} ft", latest.stage, earlier.stage);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn level(
        &self,
        historical_index: Option<usize>,
        local_time: Option<bool>,
    ) -> Result<Level, NwsError> {
        let mut level = self.data.level(historical_index.unwrap_or(0))?.clone();
        level.time = present_time(level.time, local_time.unwrap_or(true));
        Ok(level)
    }

    /// The row for the current hour (or `.at(..)`), looking across observations and
    /// forecast alike.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.offset(usize)`: step this many rows later in time (default `0`).
    /// * `.local_time(bool)`: report the time in the local zone (default `true`).
    /// * `.at(DateTime<Utc>)`: resolve for this hour instead of the current one.
    #[builder]
    pub fn nearest_level(
        &self,
        offset: Option<usize>,
        local_time: Option<bool>,
        at: Option<DateTime<Utc>>,
    ) -> Result<Level, NwsError> {
        let resolver = match at {
            Some(at) => TimeSeriesResolver::at(at),
            None => TimeSeriesResolver::now(),
        };
        let mut level = self.data.nearest(&resolver, offset.unwrap_or(0))?;
        level.time = present_time(level.time, local_time.unwrap_or(true));
        Ok(level)
    }
}

fn load(fetcher: &Fetcher, station: &str) -> Result<HydrographData, NwsError> {
    let site: SiteXml = fetcher.xml(
        &fetcher.config().hydrograph_url,
        &[("gage", station), ("output", "xml")],
    )?;
    let data = HydrographData::from_site(station, site)?;
    debug!(
        "Gauge {}: {} observed, {} forecast rows",
        station,
        data.observed_levels().len(),
        data.forecast_levels().len()
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NwsConfig;
    use crate::fetch::error::FetchError;
    use crate::types::hydrograph::tests::HYDROGRAPH_XML;
    use chrono::TimeZone;
    use std::time::Duration;

    fn hydrograph() -> Hydrograph {
        let fetcher = Fetcher::new(NwsConfig::default()).unwrap();
        let data = HydrographData::from_xml("dllt2", HYDROGRAPH_XML).unwrap();
        Hydrograph::from_parts(fetcher, data)
    }

    #[test]
    fn test_failed_update_keeps_snapshot() {
        let config = NwsConfig::builder()
            .hydrograph_url("http://127.0.0.1:9/ahps2/hydrograph_to_xml.php")
            .timeout(Duration::from_secs(2))
            .build();
        let fetcher = Fetcher::new(config).unwrap();
        let data = HydrographData::from_xml("dllt2", HYDROGRAPH_XML).unwrap();
        let mut river = Hydrograph::from_parts(fetcher, data.clone());

        let err = river.update().unwrap_err();
        match err {
            NwsError::Fetch(FetchError::NetworkRequest(url, _)) => assert_eq!(
                url,
                "http://127.0.0.1:9/ahps2/hydrograph_to_xml.php?gage=dllt2&output=xml"
            ),
            other => panic!("expected a network error, got {:?}", other),
        }
        assert_eq!(river.data(), &data);
        assert_eq!(river.level().call().unwrap().stage, Some(5.21));
    }

    #[test]
    fn test_level_defaults() {
        let river = hydrograph();
        let latest = river.level().call().unwrap();
        assert_eq!(latest.stage, Some(5.21));
        assert_eq!(
            latest.time.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2020, 2, 10, 4, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_level_utc() {
        let level = hydrograph()
            .level()
            .historical_index(2)
            .local_time(false)
            .call()
            .unwrap();
        assert_eq!(level.stage, Some(5.10));
        assert_eq!(level.time.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_level_out_of_range() {
        let err = hydrograph().level().historical_index(10).call().unwrap_err();
        assert!(matches!(err, NwsError::LevelOutOfRange { index: 10, len: 3 }));
    }

    #[test]
    fn test_nearest_level_reaches_forecast() {
        let level = hydrograph()
            .nearest_level()
            .at(Utc.with_ymd_and_hms(2020, 2, 10, 4, 0, 0).unwrap())
            .offset(1)
            .call()
            .unwrap();
        assert_eq!(level.stage, Some(5.40));
    }

    #[test]
    fn test_raw_rows() {
        let river = hydrograph();
        assert_eq!(river.station(), "dllt2");
        assert_eq!(river.observed_levels().len(), 3);
        assert_eq!(river.forecast_levels()[1].stage, Some(5.90));
    }

    #[test]
    #[ignore = "requires network access to water.weather.gov"]
    fn test_live_gauge() {
        let fetcher = Fetcher::new(NwsConfig::default()).unwrap();
        let river = Hydrograph::fetch(fetcher, "dllt2").unwrap();
        assert!(!river.observed_levels().is_empty());
    }
}
