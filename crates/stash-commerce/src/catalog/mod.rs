//! Product catalog module.
//!
//! Contains the product type, the rendered-entry intake, category groups and
//! the read-only catalog index.

mod category;
mod index;
mod product;

pub use category::{default_groups, CategoryGroup, CategoryGroups, DEFAULT_FALLBACK_SECTION};
pub use index::CatalogIndex;
pub use product::{parse_leading_int, CatalogEntry, Product};
