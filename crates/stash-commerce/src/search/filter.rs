//! Category filtering and price sorting over a catalog snapshot.

use std::cmp::Reverse;
use std::fmt;

use crate::catalog::{CategoryGroups, Product};
use serde::{Deserialize, Serialize};

/// Sort options offered by the listing controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep page order.
    #[default]
    None,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortKey {
    /// Read a sort selector value.
    ///
    /// Accepts the listing control values (`price-low`, `price-high`) and the
    /// canonical names. Anything unrecognized keeps page order.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "price-low" | "price-asc" => SortKey::PriceAsc,
            "price-high" | "price-desc" => SortKey::PriceDesc,
            _ => SortKey::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::None => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces filtered, ordered views of a catalog.
#[derive(Debug, Clone, Default)]
pub struct FilterSortEngine {
    groups: CategoryGroups,
}

impl FilterSortEngine {
    /// Create an engine resolving selectors against `groups`.
    pub fn new(groups: CategoryGroups) -> Self {
        Self { groups }
    }

    /// Select the products admitted by `category` and order them by `sort`.
    ///
    /// The input is never reordered. Both sorts are stable, so products with
    /// equal prices keep their relative page order.
    pub fn apply<'a>(
        &self,
        catalog: &'a [Product],
        category: &str,
        sort: SortKey,
    ) -> Vec<&'a Product> {
        let selector = category.trim();
        let mut selected: Vec<&Product> = catalog
            .iter()
            .filter(|p| self.groups.selects(selector, &p.category))
            .collect();

        match sort {
            SortKey::None => {}
            SortKey::PriceAsc => selected.sort_by_key(|p| p.price),
            SortKey::PriceDesc => selected.sort_by_key(|p| Reverse(p.price)),
        }
        selected
    }

    /// The category groups in use.
    pub fn groups(&self) -> &CategoryGroups {
        &self.groups
    }
}
