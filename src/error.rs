use crate::fetch::error::{FetchError, SchemaError};
use crate::series::error::SeriesError;
use crate::time::error::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NwsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error("Offset {offset} from index {matched} exceeds available series length {len} for '{series}'")]
    OffsetOutOfRange {
        series: String,
        matched: usize,
        offset: usize,
        len: usize,
    },

    #[error("Forecast period {index} out of range ({len} periods available)")]
    PeriodOutOfRange { index: usize, len: usize },

    #[error("Historical level {index} out of range ({len} observations available)")]
    LevelOutOfRange { index: usize, len: usize },
}

impl NwsError {
    /// Whether the failure happened before any payload was received.
    pub fn is_network(&self) -> bool {
        matches!(self, NwsError::Fetch(_))
    }
}
