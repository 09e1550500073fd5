use thiserror::Error;

/// The request never produced a usable response body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },
}

/// A response arrived but did not have the expected shape.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to parse JSON from {url}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse XML from {url}")]
    Xml {
        url: String,
        #[source]
        source: quick_xml::de::DeError,
    },

    #[error("Channel '{0}' is not a numeric series in the gridpoint data")]
    MissingChannel(String),

    #[error("Channel '{name}' has malformed samples")]
    MalformedChannel {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}
