//! River gauge data from the AHPS `hydrograph_to_xml.php` service.
//!
//! The document looks like this (trimmed):
//!
//! ```xml
//! <site id="DLLT2" name="Trinity River at Dallas" ...>
//!   <observed>
//!     <datum>
//!       <valid timezone="UTC">2020-02-10T03:00:00-00:00</valid>
//!       <primary name="Stage" units="ft">5.21</primary>
//!       <secondary name="Flow" units="kcfs">0.52</secondary>
//!     </datum>
//!     ...
//!   </observed>
//!   <forecast timezone="UTC" issued="...">
//!     <datum>...</datum>
//!   </forecast>
//! </site>
//! ```
//!
//! Observed rows are served newest first, forecast rows oldest first.

use crate::error::NwsError;
use crate::fetch::error::SchemaError;
use crate::series::resolver::{Position, TimeSeriesResolver, Timestamped};
use crate::time::error::TimeError;
use crate::time::valid_time::ValidTime;
use crate::units::Unit;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// AHPS writes `-999` for a missing stage or flow.
const MISSING_VALUE: f64 = -999.0;

#[derive(Debug, Deserialize)]
pub(crate) struct SiteXml {
    #[serde(rename = "@name", default)]
    name: Option<String>,
    #[serde(default)]
    observed: DatumListXml,
    #[serde(default)]
    forecast: DatumListXml,
}

#[derive(Debug, Default, Deserialize)]
struct DatumListXml {
    #[serde(default)]
    datum: Vec<DatumXml>,
}

#[derive(Debug, Deserialize)]
struct DatumXml {
    valid: TextXml,
    #[serde(default)]
    primary: Option<MeasureXml>,
    #[serde(default)]
    secondary: Option<MeasureXml>,
}

#[derive(Debug, Deserialize)]
struct TextXml {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct MeasureXml {
    #[serde(rename = "@units", default)]
    units: Option<String>,
    #[serde(rename = "$text", default)]
    value: String,
}

/// One hydrograph row.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub time: DateTime<FixedOffset>,
    /// River stage, usually in feet.
    pub stage: Option<f64>,
    pub stage_unit: Option<Unit>,
    /// Discharge, usually in kcfs.
    pub flow: Option<f64>,
    pub flow_unit: Option<Unit>,
}

impl Timestamped for Level {
    fn valid_time(&self) -> Result<ValidTime, TimeError> {
        Ok(ValidTime::instant(self.time))
    }
}

/// Everything one gauge reported, as fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct HydrographData {
    pub station: String,
    pub name: Option<String>,
    observed: Vec<Level>,
    forecast: Vec<Level>,
}

impl HydrographData {
    pub fn from_xml(station: &str, xml: &str) -> Result<Self, NwsError> {
        let site: SiteXml = quick_xml::de::from_str(xml).map_err(|e| SchemaError::Xml {
            url: station.to_string(),
            source: e,
        })?;
        Self::from_site(station, site)
    }

    pub(crate) fn from_site(station: &str, site: SiteXml) -> Result<Self, NwsError> {
        let observed = parse_levels(site.observed)?;
        let forecast = parse_levels(site.forecast)?;
        Ok(Self {
            station: station.to_string(),
            name: site.name,
            observed,
            forecast,
        })
    }

    /// Observed rows, newest first.
    pub fn observed_levels(&self) -> &[Level] {
        &self.observed
    }

    /// Forecast rows, oldest first.
    pub fn forecast_levels(&self) -> &[Level] {
        &self.forecast
    }

    /// The observed row `historical_index` steps back from the newest one.
    pub fn level(&self, historical_index: usize) -> Result<&Level, NwsError> {
        self.observed
            .get(historical_index)
            .ok_or(NwsError::LevelOutOfRange {
                index: historical_index,
                len: self.observed.len(),
            })
    }

    /// Observed and forecast rows in chronological order.
    pub fn chronological(&self) -> Vec<Level> {
        let mut levels: Vec<Level> = self
            .observed
            .iter()
            .chain(self.forecast.iter())
            .cloned()
            .collect();
        levels.sort_by_key(|level| level.time);
        levels
    }

    /// Resolves the row for the resolver's target hour, `offset` rows later in time.
    pub fn nearest(&self, resolver: &TimeSeriesResolver, offset: usize) -> Result<Level, NwsError> {
        let mut levels = self.chronological();
        match resolver.position(&levels, offset)? {
            Position::Index(index) => Ok(levels.swap_remove(index)),
            Position::OutOfRange {
                matched,
                offset,
                len,
            } => Err(NwsError::OffsetOutOfRange {
                series: self.station.clone(),
                matched,
                offset,
                len,
            }),
        }
    }
}

fn parse_levels(list: DatumListXml) -> Result<Vec<Level>, NwsError> {
    list.datum.into_iter().map(parse_level).collect()
}

fn parse_level(datum: DatumXml) -> Result<Level, NwsError> {
    let time = parse_valid(&datum.valid.value)?;
    let (stage, stage_unit) = parse_measure(datum.primary)?;
    let (flow, flow_unit) = parse_measure(datum.secondary)?;
    Ok(Level {
        time,
        stage,
        stage_unit,
        flow,
        flow_unit,
    })
}

/// AHPS writes UTC as `-00:00`, which RFC 3339 reserves for "offset unknown".
fn parse_valid(text: &str) -> Result<DateTime<FixedOffset>, TimeError> {
    let text = text.trim();
    let normalized = match text.strip_suffix("-00:00") {
        Some(stripped) => format!("{}+00:00", stripped),
        None => text.to_string(),
    };
    DateTime::parse_from_rfc3339(&normalized).map_err(|e| TimeError::InvalidTimestamp {
        input: text.to_string(),
        source: e,
    })
}

fn parse_measure(measure: Option<MeasureXml>) -> Result<(Option<f64>, Option<Unit>), SchemaError> {
    let Some(measure) = measure else {
        return Ok((None, None));
    };
    let unit = measure.units.as_deref().map(Unit::from_uom);
    let text = measure.value.trim();
    if text.is_empty() {
        return Ok((None, unit));
    }
    let value: f64 = text
        .parse()
        .map_err(|_| SchemaError::InvalidNumber(text.to_string()))?;
    if value <= MISSING_VALUE {
        return Ok((None, unit));
    }
    Ok((Some(value), unit))
}
