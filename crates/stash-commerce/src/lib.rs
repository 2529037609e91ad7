//! Storefront state engine for the stash shop.
//!
//! Keeps one cart consistent across every view that shows it, persists it to
//! a key-value slot, and answers catalog listing and search queries:
//!
//! - **Catalog**: products indexed from the rendered page, category groups
//! - **Cart**: the cart model and the store that owns, persists and publishes it
//! - **Search**: category/price listings, free-text search, debounced input
//! - **View**: badge, cart panel and checkout summary kept in step with the cart
//! - **Checkout**: simulated order submission
//!
//! # Example
//!
//! ```rust
//! use stash_cache::MemoryStore;
//! use stash_commerce::prelude::*;
//!
//! let catalog = CatalogIndex::build(&[
//!     CatalogEntry::new("Graphic Tee", "100", "/img/tee.jpg", "tees"),
//!     CatalogEntry::new("Zip Hoodie", "50", "/img/hoodie.jpg", "hoodies"),
//! ]);
//! let config = StorefrontConfig::default();
//! let mut shop = Storefront::new(&config, catalog, MemoryStore::new(), TracingNotifier);
//!
//! shop.add_to_cart("Graphic Tee").unwrap();
//! shop.add_to_cart("Zip Hoodie").unwrap();
//! shop.add_to_cart("Graphic Tee").unwrap();
//!
//! assert_eq!(shop.cart().total(), Price::new(250));
//! assert_eq!(shop.views().badge().count, 3);
//! ```

pub mod error;
pub mod messages;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod search;
pub mod storefront;
pub mod surface;
pub mod view;

pub use error::CommerceError;
pub use money::Price;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::Price;
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{CatalogEntry, CatalogIndex, CategoryGroup, CategoryGroups, Product};

    // Cart
    pub use crate::cart::{Cart, CartChange, CartItem, CartListener, CartStore};

    // Search
    pub use crate::search::{
        Debouncer, FilterSortEngine, SearchBox, SearchEngine, SearchOutcome, SortKey,
    };

    // Views
    pub use crate::view::{Badge, CartPanel, CartRow, CheckoutSummary, SummaryRow, ViewSync};

    // Checkout
    pub use crate::checkout::{CheckoutForm, OrderConfirmation};

    // Config and collaborators
    pub use crate::config::StorefrontConfig;
    pub use crate::surface::{Notifier, RecordingNotifier, ScrollSurface, TracingNotifier};
}
