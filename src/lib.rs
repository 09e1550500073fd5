mod clients;
mod config;
mod error;
mod fetch;
mod nws;
mod series;
mod time;
mod types;
mod units;

pub use error::NwsError;
pub use nws::*;

pub use config::*;

pub use clients::gridpoint_client::Gridpoint;
pub use clients::hydrograph_client::Hydrograph;

pub use series::resolver::*;
pub use time::local::{parse_utc, simple_time, to_local, to_local_simple, to_timezone};
pub use time::rounding::{current_hour, format_hour, round_to_hour};
pub use time::target_hour::IntoTargetHour;
pub use time::valid_time::{parse_iso_duration, ValidTime};
pub use units::*;

pub use types::forecast::{ForecastDocument, ForecastPeriod, ForecastProperties, QuantitativeValue};
pub use types::gridpoint::{GridpointData, GridpointDocument, ReadingOptions};
pub use types::hydrograph::{HydrographData, Level};
pub use types::observation::{CurrentConditions, Observation, Reading};
pub use types::points::{PointsDocument, PointsProperties};
pub use types::sample::{Channel, Sample};

pub use fetch::error::{FetchError, SchemaError};
pub use series::error::SeriesError;
pub use time::error::TimeError;
