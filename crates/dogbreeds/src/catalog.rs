//! In-memory breed catalog
//!
//! File format is a JSON object mapping breed to sub-breeds, the same shape
//! as the `message` of dog.ceo's `/api/breeds/list/all`:
//! ```text
//! {"hound": ["afghan", "basset"], "pug": []}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{BreedNotFound, CatalogError, Result};
use crate::fetcher::BreedFetcher;

/// [`BreedFetcher`] answering from a fixed set of breeds
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    breeds: BTreeMap<String, Vec<String>>,
}

impl StaticCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a breed, replacing any previous entry with the same name
    pub fn insert<I, S>(&mut self, breed: &str, sub_breeds: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breeds.insert(
            normalize(breed),
            sub_breeds.into_iter().map(Into::into).collect(),
        );
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_breed<I, S>(mut self, breed: &str, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(breed, sub_breeds);
        self
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> std::result::Result<Self, CatalogError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for (breed, subs) in raw {
            catalog.insert(&breed, subs);
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        debug!(path = %path.display(), breeds = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Known breed names, sorted
    pub fn breeds(&self) -> impl Iterator<Item = &str> {
        self.breeds.keys().map(String::as_str)
    }

    /// Number of breeds
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Check if the catalog has no breeds
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

impl BreedFetcher for StaticCatalog {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let key = normalize(breed);
        if key.is_empty() {
            return Err(BreedNotFound::blank());
        }
        self.breeds
            .get(&key)
            .cloned()
            .ok_or_else(BreedNotFound::unknown)
    }
}

fn normalize(breed: &str) -> String {
    breed.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BLANK_BREED, UNKNOWN_BREED};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_catalog_lookup() {
        let catalog = StaticCatalog::new()
            .with_breed("hound", ["afghan", "basset"])
            .with_breed("pug", Vec::<String>::new());

        assert_eq!(catalog.sub_breeds("hound").unwrap(), vec!["afghan", "basset"]);
        assert_eq!(catalog.sub_breeds(" HOUND ").unwrap(), vec!["afghan", "basset"]);
        assert!(catalog.sub_breeds("pug").unwrap().is_empty());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_unknown_and_blank() {
        let catalog = StaticCatalog::new().with_breed("hound", ["afghan"]);

        assert_eq!(catalog.sub_breeds("unicorn").unwrap_err().message(), UNKNOWN_BREED);
        assert_eq!(catalog.sub_breeds(" ").unwrap_err().message(), BLANK_BREED);
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog =
            StaticCatalog::from_json_str(r#"{"Hound": ["afghan", "basset"], "pug": []}"#).unwrap();

        let breeds: Vec<_> = catalog.breeds().collect();
        assert_eq!(breeds, vec!["hound", "pug"]);
        assert_eq!(catalog.sub_breeds("hound").unwrap(), vec!["afghan", "basset"]);
    }

    #[test]
    fn test_catalog_invalid_json() {
        let result = StaticCatalog::from_json_str(r#"{"hound": "afghan"}"#);
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_catalog_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"terrier": ["border", "cairn"]}}"#).unwrap();

        let catalog = StaticCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.sub_breeds("terrier").unwrap(), vec!["border", "cairn"]);
    }

    #[test]
    fn test_catalog_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = StaticCatalog::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
