//! Coarse category groups.
//!
//! Products carry a single leaf category ("tees", "bags", ...). Shoppers filter
//! by either a leaf or a coarse group ("mens"), and each group owns the page
//! section its products are listed under.

use serde::{Deserialize, Serialize};

/// A coarse selector and the leaf categories it subsumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryGroup {
    /// Selector value as offered by the category filter (e.g. "mens").
    pub selector: String,
    /// Page section listing this group's products (e.g. "mens-collection").
    pub section: String,
    /// Leaf categories belonging to the group.
    pub members: Vec<String>,
}

impl CategoryGroup {
    /// Create a group from string slices.
    pub fn new(selector: &str, section: &str, members: &[&str]) -> Self {
        Self {
            selector: selector.to_string(),
            section: section.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Whether `category` is the group itself or one of its leaves.
    pub fn covers(&self, category: &str) -> bool {
        self.selector == category || self.members.iter().any(|m| m == category)
    }
}

/// The fixed set of category groups, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroups {
    groups: Vec<CategoryGroup>,
    fallback_section: String,
}

impl CategoryGroups {
    /// Build from explicit groups. Earlier groups win when a leaf belongs to several.
    pub fn new(groups: Vec<CategoryGroup>, fallback_section: impl Into<String>) -> Self {
        Self {
            groups,
            fallback_section: fallback_section.into(),
        }
    }

    /// Look up a group by its selector.
    pub fn get(&self, selector: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.selector == selector)
    }

    /// Filter predicate: does `selector` admit a product in `category`?
    ///
    /// An empty selector admits everything. Otherwise the selector must equal
    /// the category, or name a group containing it.
    pub fn selects(&self, selector: &str, category: &str) -> bool {
        selector.is_empty()
            || selector == category
            || self
                .get(selector)
                .is_some_and(|g| g.members.iter().any(|m| m == category))
    }

    /// First group covering `category`.
    pub fn group_for(&self, category: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.covers(category))
    }

    /// Section a product in `category` is listed under.
    pub fn section_for(&self, category: &str) -> &str {
        self.group_for(category)
            .map(|g| g.section.as_str())
            .unwrap_or(&self.fallback_section)
    }

    /// Iterate groups in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter()
    }
}

impl Default for CategoryGroups {
    fn default() -> Self {
        Self::new(default_groups(), DEFAULT_FALLBACK_SECTION)
    }
}

/// Section for products outside every group.
pub const DEFAULT_FALLBACK_SECTION: &str = "accessories-collection";

/// The storefront's built-in grouping.
pub fn default_groups() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup::new(
            "mens",
            "mens-collection",
            &["tees", "hoodies", "jackets", "pants", "shorts"],
        ),
        CategoryGroup::new(
            "womens",
            "womens-collection",
            &["hoodies", "pants", "dresses", "tops", "jeans"],
        ),
        CategoryGroup::new(
            "accessories",
            "accessories-collection",
            &["shoes", "hats", "bags", "wallets", "sunglasses"],
        ),
    ]
}
