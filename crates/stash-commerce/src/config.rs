//! Storefront configuration.
//!
//! Everything has a default matching the stock storefront, so an empty file
//! (or no file) is a valid configuration.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{default_groups, CategoryGroup, CategoryGroups, DEFAULT_FALLBACK_SECTION};
use crate::error::CommerceError;
use crate::search::{FilterSortEngine, SearchBox, SearchEngine, DEFAULT_MIN_QUERY_LEN};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Storage slot holding the persisted cart.
    pub storage_key: String,
    /// Label shown before every amount.
    pub currency: String,
    /// Search input behaviour.
    pub search: SearchConfig,
    /// Category grouping and badges.
    pub catalog: CatalogConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_key: "hustlz-cart".to_string(),
            currency: "EGP".to_string(),
            search: SearchConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a query runs.
    pub debounce_ms: u64,
    /// Shortest normalized query that runs.
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Section for categories no group covers.
    pub fallback_section: String,
    /// Product names flagged as trending.
    pub trending: Vec<String>,
    /// Coarse category groups, in precedence order.
    pub groups: Vec<CategoryGroup>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fallback_section: DEFAULT_FALLBACK_SECTION.to_string(),
            trending: vec!["Graphic Tee".to_string(), "Urban Sneakers".to_string()],
            groups: default_groups(),
        }
    }
}

impl StorefrontConfig {
    /// Load and validate a config file. `.json` files are read as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommerceError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content).map_err(|e| {
                CommerceError::Config(format!("failed to parse {}: {}", path.display(), e))
            })?
        } else {
            Self::from_toml_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML text without validating.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        toml::from_str(content).map_err(|e| CommerceError::Config(e.to_string()))
    }

    /// Reject settings the engine cannot work with.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.storage_key.trim().is_empty() {
            return Err(CommerceError::Config("storage_key must not be empty".into()));
        }
        stash_cache::validate_key(&self.storage_key).map_err(|e| {
            CommerceError::Config(format!("invalid storage_key {:?}: {}", self.storage_key, e))
        })?;
        if self.search.min_query_len == 0 {
            return Err(CommerceError::Config(
                "search.min_query_len must be at least 1".into(),
            ));
        }
        let mut seen = HashSet::new();
        for group in &self.catalog.groups {
            if !seen.insert(group.selector.as_str()) {
                return Err(CommerceError::Config(format!(
                    "duplicate category group selector: {}",
                    group.selector
                )));
            }
        }
        Ok(())
    }

    /// Category groups as configured.
    pub fn category_groups(&self) -> CategoryGroups {
        CategoryGroups::new(
            self.catalog.groups.clone(),
            self.catalog.fallback_section.clone(),
        )
    }

    /// Search debounce period.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    /// Listing engine over the configured groups.
    pub fn filter_engine(&self) -> FilterSortEngine {
        FilterSortEngine::new(self.category_groups())
    }

    /// Search engine over the configured groups.
    pub fn search_engine(&self) -> SearchEngine {
        SearchEngine::new(self.search.min_query_len, self.category_groups())
    }

    /// Debounced search input.
    pub fn search_box(&self) -> SearchBox {
        SearchBox::new(self.search_engine(), self.debounce())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_override() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            currency = "USD"

            [search]
            debounce_ms = 150

            [[catalog.groups]]
            selector = "kids"
            section = "kids-collection"
            members = ["onesies"]
            "#,
        )
        .unwrap();

        assert_eq!(config.currency, "USD");
        assert_eq!(config.storage_key, "hustlz-cart");
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.catalog.groups.len(), 1);
        assert_eq!(config.category_groups().section_for("onesies"), "kids-collection");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = StorefrontConfig::default();
        config.search.min_query_len = 0;
        assert!(matches!(config.validate(), Err(CommerceError::Config(_))));

        let mut config = StorefrontConfig::default();
        config.storage_key = " ".into();
        assert!(config.validate().is_err());

        for key in ["my cart", ".hidden", "carts/guest"] {
            let mut config = StorefrontConfig::default();
            config.storage_key = key.into();
            assert!(matches!(config.validate(), Err(CommerceError::Config(_))), "{key}");
        }

        let mut config = StorefrontConfig::default();
        config.catalog.groups.push(CategoryGroup::new("mens", "x", &[]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_json_and_toml_files() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("stash.toml");
        std::fs::write(&toml_path, "storage_key = \"cart-v2\"\n").unwrap();
        assert_eq!(StorefrontConfig::load(&toml_path).unwrap().storage_key, "cart-v2");

        let json_path = dir.path().join("stash.json");
        std::fs::write(&json_path, r#"{"currency":"EUR"}"#).unwrap();
        assert_eq!(StorefrontConfig::load(&json_path).unwrap().currency, "EUR");

        assert!(StorefrontConfig::load(dir.path().join("missing.toml")).is_err());
    }
}
