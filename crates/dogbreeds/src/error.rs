//! Error types for dogbreeds

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for sub-breed lookups
pub type Result<T> = std::result::Result<T, BreedNotFound>;

/// Message for blank or empty breed names
pub(crate) const BLANK_BREED: &str = "Breed cannot be null or blank.";

/// Message for breeds the catalog does not know
pub(crate) const UNKNOWN_BREED: &str = "Breed not found (main breed does not exist)";

/// Message for transport and decoding failures
pub(crate) const FETCH_FAILED: &str = "Could not fetch breed list from API.";

/// The single failure kind of a lookup.
///
/// Unknown breeds, blank names and upstream failures all collapse into
/// this error so callers only ever have to decide "found or not".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BreedNotFound {
    message: String,
}

impl BreedNotFound {
    /// Create an error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn blank() -> Self {
        Self::new(BLANK_BREED)
    }

    pub(crate) fn unknown() -> Self {
        Self::new(UNKNOWN_BREED)
    }

    pub(crate) fn fetch_failed() -> Self {
        Self::new(FETCH_FAILED)
    }

    /// Human-readable reason
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while building a [`DogApiFetcher`](crate::DogApiFetcher)
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL could not be parsed or cannot carry path segments
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors raised while loading a [`StaticCatalog`](crate::StaticCatalog) file
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Catalog file is not a JSON object of string arrays
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
