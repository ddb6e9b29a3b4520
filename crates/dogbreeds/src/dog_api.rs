//! dog.ceo REST client
//!
//! Endpoint: `GET {base}/api/breed/{breed}/list`
//!
//! Response body (any HTTP status):
//! ```text
//! {"message": ["afghan", "basset"], "status": "success"}
//! {"message": "Breed not found (main breed does not exist)", "status": "error", "code": 404}
//! ```

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{BreedNotFound, ClientError, Result};
use crate::fetcher::BreedFetcher;

/// Public dog.ceo endpoint
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`DogApiFetcher`]
#[derive(Debug, Clone)]
pub struct DogApiConfig {
    /// Scheme and host of the API, optionally with a path prefix
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for DogApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    status: Value,
    #[serde(default)]
    message: Value,
}

/// [`BreedFetcher`] backed by the dog.ceo API
pub struct DogApiFetcher {
    client: Client,
    base_url: Url,
}

impl DogApiFetcher {
    /// Create a fetcher for the public API with default settings
    pub fn new() -> std::result::Result<Self, ClientError> {
        Self::with_config(DogApiConfig::default())
    }

    /// Create a fetcher with custom configuration
    ///
    /// # Returns
    /// * `Err(ClientError::InvalidBaseUrl)` - base URL unparsable or not hierarchical
    /// * `Err(ClientError::Http)` - HTTP client could not be built
    pub fn with_config(config: DogApiConfig) -> std::result::Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(config.base_url));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are built from
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn list_url(&self, breed: &str) -> Url {
        let mut url = self.base_url.clone();
        // Hierarchy was checked in with_config
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "breed", breed, "list"]);
        }
        url
    }
}

impl BreedFetcher for DogApiFetcher {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let name = breed.trim();
        if name.is_empty() {
            return Err(BreedNotFound::blank());
        }

        let url = self.list_url(&name.to_lowercase());
        debug!(%url, "fetching sub-breeds");

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.text())
            .map_err(|e| {
                warn!(error = %e, breed = name, "dog API request failed");
                BreedNotFound::fetch_failed()
            })?;

        parse_body(&body)
    }
}

fn parse_body(body: &str) -> Result<Vec<String>> {
    let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "malformed dog API response");
        BreedNotFound::fetch_failed()
    })?;

    if field_text(response.status).as_deref() != Some("success") {
        return Err(match field_text(response.message) {
            Some(message) => BreedNotFound::new(message),
            None => BreedNotFound::unknown(),
        });
    }

    serde_json::from_value(response.message).map_err(|e| {
        warn!(error = %e, "dog API message is not a list of names");
        BreedNotFound::fetch_failed()
    })
}

/// Text of a loosely typed field: strings as-is, other values as their JSON
/// text, missing or null as `None`.
fn field_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
