use crate::config::NwsConfig;
use crate::error::NwsError;
use crate::fetch::error::{FetchError, SchemaError};
use log::{info, warn};
use reqwest::blocking::{Client, Request};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

const GEO_JSON: &str = "application/geo+json";
const XML: &str = "application/xml";

/// Blocking HTTP access to the NWS endpoints.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: NwsConfig,
}

impl Fetcher {
    pub fn new(config: NwsConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &NwsConfig {
        &self.config
    }

    /// Downloads `url` and deserializes it as JSON.
    pub fn json<T: DeserializeOwned>(&self, url: &str) -> Result<T, NwsError> {
        let body = self.text(url, &[], GEO_JSON)?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Unexpected JSON from {}: {}", url, e);
            NwsError::from(SchemaError::Json {
                url: url.to_string(),
                source: e,
            })
        })
    }

    /// Downloads `url` with the url-encoded `query` appended and deserializes it as XML.
    pub fn xml<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, NwsError> {
        let body = self.text(url, query, XML)?;
        quick_xml::de::from_str(&body).map_err(|e| {
            warn!("Unexpected XML from {}: {}", url, e);
            NwsError::from(SchemaError::Xml {
                url: url.to_string(),
                source: e,
            })
        })
    }

    pub(crate) fn request(
        &self,
        url: &str,
        query: &[(&str, &str)],
        accept: &str,
    ) -> Result<Request, FetchError> {
        let mut builder = self.client.get(url).header(ACCEPT, accept);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        builder
            .build()
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))
    }

    fn text(&self, url: &str, query: &[(&str, &str)], accept: &str) -> Result<String, FetchError> {
        let request = self.request(url, query, accept)?;
        let url = request.url().to_string();
        info!("Fetching {}", url);

        let response = self
            .client
            .execute(request)
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let body = response
            .text()
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;
        info!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
