//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stash_commerce::config::StorefrontConfig;

/// CLI configuration file: storefront settings plus where the CLI finds its files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront settings.
    #[serde(flatten)]
    pub storefront: StorefrontConfig,

    /// File locations.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// File locations, relative to the config file's directory when not absolute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    /// Catalog file.
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Directory for the persisted cart.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_catalog() -> String {
    "catalog.json".to_string()
}

fn default_data_dir() -> String {
    ".stash".to_string()
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .storefront
            .validate()
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if path.extension().is_some_and(|e| e == "json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Get a config value by dot-separated key, rendered as JSON.
    pub fn get(&self, key: &str) -> Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        for part in key.split('.') {
            value = match value {
                serde_json::Value::Object(mut map) => map
                    .remove(part)
                    .with_context(|| format!("Unknown config key: {}", key))?,
                _ => anyhow::bail!("Unknown config key: {}", key),
            };
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_toml_with_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stash.toml");
        std::fs::write(
            &path,
            r#"
currency = "USD"

[paths]
catalog = "demos/catalog.json"

[search]
debounce_ms = 200
"#,
        )
        .unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.paths.catalog, "demos/catalog.json");
        assert_eq!(config.paths.data_dir, ".stash");
        assert_eq!(config.storefront.currency, "USD");
        assert_eq!(config.storefront.search.debounce_ms, 200);
        assert_eq!(config.storefront.storage_key, "hustlz-cart");
    }

    #[test]
    fn test_invalid_storefront_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stash.json");
        std::fs::write(&path, r#"{"search": {"min_query_len": 0}}"#).unwrap();
        assert!(CliConfig::load(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_storage_key_with_space_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stash.toml");
        std::fs::write(&path, "storage_key = \"my cart\"\n").unwrap();
        let err = CliConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("storage_key"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stash.toml");
        CliConfig::default().save(&path).unwrap();

        let loaded = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.storefront, StorefrontConfig::default());
        assert_eq!(loaded.paths, PathsConfig::default());
    }

    #[test]
    fn test_get_dotted_key() {
        let config = CliConfig::default();
        assert_eq!(config.get("search.debounce_ms").unwrap(), 300);
        assert_eq!(config.get("currency").unwrap(), "EGP");
        assert!(config.get("search.nope").is_err());
    }
}
