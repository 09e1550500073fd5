use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Invalid ISO-8601 timestamp '{input}'")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid ISO-8601 duration '{0}'")]
    InvalidDuration(String),

    #[error("Calendar duration '{0}' has no fixed length")]
    CalendarDuration(String),
}
