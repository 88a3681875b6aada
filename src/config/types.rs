use serde::Deserialize;

use crate::catalog::FieldCandidates;

pub const DEFAULT_CATALOG_URL: &str =
    "https://countries-search-data-prod-812920491762.asia-south1.run.app/countries";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Candidate upstream keys for each record attribute.
    #[serde(default)]
    pub fields: FieldCandidates,
}

/// Remote catalog endpoint settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogConfig {
    /// Endpoint answering `GET` with a JSON array of countries.
    #[serde(default = "default_catalog_url")]
    pub url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}
