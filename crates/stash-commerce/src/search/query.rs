//! Free-text product search.

use crate::catalog::{CategoryGroups, Product};

/// Shortest normalized query that runs a search.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Result of running a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Query too short: hide the results panel entirely.
    Inactive,
    /// Query ran. May be empty, which is a "nothing found" state, not a hidden one.
    Results(Vec<&'a Product>),
}

impl<'a> SearchOutcome<'a> {
    /// Whether a search actually ran.
    pub fn is_active(&self) -> bool {
        matches!(self, SearchOutcome::Results(_))
    }

    /// Matching products; empty when inactive.
    pub fn results(&self) -> &[&'a Product] {
        match self {
            SearchOutcome::Inactive => &[],
            SearchOutcome::Results(results) => results,
        }
    }
}

/// Case-insensitive substring search over product names.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    min_query_len: usize,
    groups: CategoryGroups,
}

impl SearchEngine {
    /// Create an engine.
    pub fn new(min_query_len: usize, groups: CategoryGroups) -> Self {
        Self {
            min_query_len,
            groups,
        }
    }

    /// Trim and lowercase raw input.
    pub fn normalize(text: &str) -> String {
        text.trim().to_lowercase()
    }

    /// Run `text` against `catalog`. Matches keep catalog order.
    pub fn query<'a>(&self, catalog: &'a [Product], text: &str) -> SearchOutcome<'a> {
        let needle = Self::normalize(text);
        if needle.chars().count() < self.min_query_len {
            return SearchOutcome::Inactive;
        }

        let results: Vec<&Product> = catalog
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect();
        tracing::debug!(query = %needle, matches = results.len(), "search ran");
        SearchOutcome::Results(results)
    }

    /// Page section holding `product`, for navigating from a result.
    pub fn section_for(&self, product: &Product) -> &str {
        self.groups.section_for(&product.category)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_QUERY_LEN, CategoryGroups::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Graphic Tee", 300, "/t.jpg", "tees"),
            Product::new("Urban Sneakers", 1200, "/s.jpg", "shoes"),
            Product::new("Oversized Tee", 350, "/o.jpg", "tees"),
            Product::new("Denim Jeans", 600, "/j.jpg", "jeans"),
        ]
    }

    #[test]
    fn test_short_query_is_inactive() {
        let catalog = catalog();
        let engine = SearchEngine::default();
        assert_eq!(engine.query(&catalog, "t"), SearchOutcome::Inactive);
        assert_eq!(engine.query(&catalog, "  t  "), SearchOutcome::Inactive);
        assert_eq!(engine.query(&catalog, ""), SearchOutcome::Inactive);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let catalog = catalog();
        let engine = SearchEngine::default();
        let outcome = engine.query(&catalog, "  TEE ");
        let names: Vec<&str> = outcome.results().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Graphic Tee", "Oversized Tee"]);
    }

    #[test]
    fn test_no_matches_is_active_and_empty() {
        let catalog = catalog();
        let engine = SearchEngine::default();
        let outcome = engine.query(&catalog, "xyz");
        assert!(outcome.is_active());
        assert!(outcome.results().is_empty());
    }

    #[test]
    fn test_section_for_result() {
        let catalog = catalog();
        let engine = SearchEngine::default();
        assert_eq!(engine.section_for(&catalog[0]), "mens-collection");
        assert_eq!(engine.section_for(&catalog[1]), "accessories-collection");
        assert_eq!(engine.section_for(&catalog[3]), "womens-collection");
    }
}
