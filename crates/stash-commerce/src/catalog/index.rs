//! Read-only product index built once from the rendered page.

use std::collections::HashSet;

use crate::catalog::{CatalogEntry, Product};
use crate::error::CommerceError;

/// The storefront catalog, in page order.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    products: Vec<Product>,
    trending: HashSet<String>,
}

impl CatalogIndex {
    /// Index the rendered product entries.
    ///
    /// Entries missing a required field are skipped, as are later entries
    /// reusing a name already indexed. Never fails: an unusable page simply
    /// yields an empty catalog.
    pub fn build(entries: &[CatalogEntry]) -> Self {
        let mut index = Self::default();
        let mut skipped = 0usize;

        for (position, entry) in entries.iter().enumerate() {
            match Product::from_entry(entry, position) {
                Ok(product) => {
                    if !index.insert(product) {
                        skipped += 1;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping catalog entry");
                    skipped += 1;
                }
            }
        }

        tracing::debug!(products = index.len(), skipped, "catalog indexed");
        index
    }

    /// Mark products as trending by name.
    pub fn with_trending<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trending = names.into_iter().map(Into::into).collect();
        self
    }

    fn insert(&mut self, product: Product) -> bool {
        if self.products.iter().any(|p| p.name == product.name) {
            tracing::warn!(name = %product.name, "duplicate product name in catalog");
            return false;
        }
        self.products.push(product);
        true
    }

    /// Look up a product by name.
    pub fn get(&self, name: &str) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| CommerceError::ProductNotFound(name.to_string()))
    }

    /// All products in page order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in page order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of indexed products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether the named product carries the trending badge.
    pub fn is_trending(&self, name: &str) -> bool {
        self.trending.contains(name) && self.products.iter().any(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("Graphic Tee", "450", "/img/tee.jpg", "tees"),
            CatalogEntry {
                name: None,
                ..CatalogEntry::new("", "100", "/img/x.jpg", "hats")
            },
            CatalogEntry::new("Urban Sneakers", "1200 EGP", "/img/sneakers.jpg", "shoes"),
            CatalogEntry::new("Graphic Tee", "999", "/img/dup.jpg", "tees"),
        ]
    }

    #[test]
    fn test_build_skips_bad_and_duplicate_entries() {
        let index = CatalogIndex::build(&entries());
        let names: Vec<&str> = index.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Graphic Tee", "Urban Sneakers"]);
        // First occurrence wins.
        assert_eq!(index.get("Graphic Tee").unwrap().price.amount(), 450);
    }

    #[test]
    fn test_build_empty_page() {
        let index = CatalogIndex::build(&[]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_get_not_found() {
        let index = CatalogIndex::build(&entries());
        assert!(matches!(
            index.get("Missing"),
            Err(CommerceError::ProductNotFound(name)) if name == "Missing"
        ));
    }

    #[test]
    fn test_trending() {
        let index = CatalogIndex::build(&entries()).with_trending(["Graphic Tee", "Ghost Item"]);
        assert!(index.is_trending("Graphic Tee"));
        assert!(!index.is_trending("Urban Sneakers"));
        assert!(!index.is_trending("Ghost Item"));
    }
}
