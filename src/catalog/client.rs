use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::catalog::error::FetchError;
use crate::config::CatalogConfig;

/// Raw catalog payload: the top-level JSON array, entries untouched.
pub type RawPayload = Vec<Value>;

/// Read side of the remote catalog.
///
/// One call is one request. Implementations must not retry.
pub trait CatalogSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<RawPayload, FetchError>> + Send;

    /// Human readable location, used in logs and the header.
    fn describe(&self) -> String;
}

/// Timeouts applied to the catalog request.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub request: Duration,
}

impl From<&CatalogConfig> for TimeoutConfig {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            connect: Duration::from_secs(config.connect_timeout_seconds as u64),
            request: Duration::from_secs(config.timeout_seconds as u64),
        }
    }
}

/// `GET <url>` over reqwest.
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self, reqwest::Error> {
        let timeouts = TimeoutConfig::from(config);
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch(&self) -> Result<RawPayload, FetchError> {
        tracing::debug!(url = %self.url, "Requesting catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::transport(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(&self.url, e))?;

        decode_payload(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Parse a response body into the top-level array of entries.
pub fn decode_payload(body: &[u8]) -> Result<RawPayload, FetchError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(entries) => Ok(entries),
        other => Err(FetchError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
