use crate::time::error::TimeError;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("No samples on the same UTC day as {target}")]
    NoCandidates { target: DateTime<Utc> },

    #[error("Sample {index} has an unreadable validity window")]
    InvalidSample {
        index: usize,
        #[source]
        source: TimeError,
    },
}
