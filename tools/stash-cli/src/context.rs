//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use stash_cache::FileStore;
use stash_commerce::catalog::{CatalogEntry, CatalogIndex};
use stash_commerce::config::StorefrontConfig;
use stash_commerce::Storefront;

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["stash.toml", ".stash.toml", "stash.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Directory relative paths resolve against.
    pub base_dir: PathBuf,
    /// Catalog file.
    pub catalog_path: PathBuf,
    /// Cart storage directory.
    pub data_dir: PathBuf,
}

impl Context {
    /// Load context from config file and command-line overrides.
    pub fn load(
        config_path: Option<&str>,
        catalog: Option<&str>,
        data_dir: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let base_dir = config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone());

        // Flags resolve against the working directory, config values against the config file
        let catalog_path = match catalog {
            Some(path) => resolve(&cwd, path),
            None => resolve(&base_dir, &config.paths.catalog),
        };
        let data_dir = match data_dir {
            Some(path) => resolve(&cwd, path),
            None => resolve(&base_dir, &config.paths.data_dir),
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            output,
            config_path,
            base_dir,
            catalog_path,
            data_dir,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "skipping config")
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Storefront settings.
    pub fn storefront_config(&self) -> &StorefrontConfig {
        &self.config.storefront
    }

    /// Read and index the catalog file.
    pub fn load_catalog(&self) -> Result<CatalogIndex> {
        let content = std::fs::read_to_string(&self.catalog_path).with_context(|| {
            format!(
                "Failed to read catalog file: {} (pass --catalog or set paths.catalog)",
                self.catalog_path.display()
            )
        })?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse catalog file: {}", self.catalog_path.display())
        })?;

        let catalog = CatalogIndex::build(&entries);
        self.output.debug(&format!(
            "Indexed {} of {} catalog entries",
            catalog.len(),
            entries.len()
        ));
        Ok(catalog)
    }

    /// Open the storefront: catalog, persisted cart and views.
    pub fn storefront(&self) -> Result<Storefront<FileStore>> {
        let catalog = self.load_catalog()?;
        let store = FileStore::open(&self.data_dir).with_context(|| {
            format!("Failed to open cart storage: {}", self.data_dir.display())
        })?;
        Ok(Storefront::new(
            self.storefront_config(),
            catalog,
            store,
            self.output.clone(),
        ))
    }

    /// Currency label for rendering amounts.
    pub fn currency(&self) -> &str {
        &self.config.storefront.currency
    }
}

/// Resolve a path relative to `base`.
fn resolve(base: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let base = Path::new("/srv/shop");
        assert_eq!(resolve(base, "catalog.json"), PathBuf::from("/srv/shop/catalog.json"));
        assert_eq!(resolve(base, "/data/cart"), PathBuf::from("/data/cart"));
    }

    #[test]
    fn test_config_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("stash.toml");
        std::fs::write(&config_path, "[paths]\ncatalog = \"demos/catalog.json\"\n").unwrap();

        let ctx = Context::load(
            config_path.to_str(),
            None,
            Some("/tmp/stash-data"),
            Output::new(false, true),
        )
        .unwrap();

        assert_eq!(ctx.catalog_path, dir.path().join("demos/catalog.json"));
        assert_eq!(ctx.data_dir, PathBuf::from("/tmp/stash-data"));
        assert_eq!(ctx.currency(), "EGP");
    }

    #[test]
    fn test_storefront_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        std::fs::write(
            &catalog_path,
            r#"[
                {"name": "Graphic Tee", "price": "100", "image": "/t.jpg", "category": "tees"},
                {"name": "", "price": "5", "image": "/x.jpg", "category": "tees"},
                {"name": "Bucket Hat", "price": "80 EGP", "image": "/h.jpg", "category": "hats"}
            ]"#,
        )
        .unwrap();
        let data_dir = dir.path().join("data");

        let ctx = Context::load(
            None,
            catalog_path.to_str(),
            data_dir.to_str(),
            Output::new(false, true),
        )
        .unwrap();

        {
            let mut shop = ctx.storefront().unwrap();
            assert_eq!(shop.catalog().len(), 2);
            shop.add_to_cart("Bucket Hat").unwrap();
        }

        let shop = ctx.storefront().unwrap();
        assert_eq!(shop.cart().count(), 1);
        assert!(data_dir.join("hustlz-cart.json").exists());
    }
}
