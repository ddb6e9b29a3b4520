//! # dogbreeds
//!
//! Sub-breed lookups for named dog breeds.
//!
//! ## Sources
//! - **DogApiFetcher**: blocking HTTP client for the dog.ceo REST API
//! - **StaticCatalog**: in-memory catalog, optionally loaded from JSON
//!
//! Every source implements [`BreedFetcher`] and reports every failure as
//! [`BreedNotFound`], so decorators such as a cache can wrap any of them.

#![warn(missing_docs)]

mod catalog;
mod dog_api;
mod error;
mod fetcher;

pub use catalog::StaticCatalog;
pub use dog_api::{DogApiConfig, DogApiFetcher, DEFAULT_BASE_URL};
pub use error::{BreedNotFound, CatalogError, ClientError, Result};
pub use fetcher::BreedFetcher;
