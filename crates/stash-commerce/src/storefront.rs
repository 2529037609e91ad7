//! Wiring of the storefront components around one cart store.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use stash_cache::KeyValueStore;

use crate::cart::CartStore;
use crate::catalog::{CatalogIndex, Product};
use crate::checkout::{self, CheckoutForm, OrderConfirmation};
use crate::config::StorefrontConfig;
use crate::error::CommerceError;
use crate::search::{FilterSortEngine, SearchBox, SearchOutcome, SortKey};
use crate::surface::Notifier;
use crate::view::ViewSync;

/// A storefront page's state: catalog, cart, views and search.
pub struct Storefront<S> {
    catalog: CatalogIndex,
    cart: CartStore<S>,
    views: Rc<RefCell<ViewSync>>,
    listing: FilterSortEngine,
    search: SearchBox,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Assemble a storefront, loading the cart from `store` and subscribing
    /// the views to it.
    pub fn new(
        config: &StorefrontConfig,
        catalog: CatalogIndex,
        store: S,
        notifier: impl Notifier + 'static,
    ) -> Self {
        let mut cart = CartStore::open(store, config.storage_key.clone(), notifier);
        let views = ViewSync::shared(config.currency.clone());
        cart.subscribe(Rc::clone(&views));

        Self {
            catalog: catalog.with_trending(config.catalog.trending.iter().cloned()),
            cart,
            views,
            listing: config.filter_engine(),
            search: config.search_box(),
        }
    }

    /// Add one unit of the named catalog product.
    pub fn add_to_cart(&mut self, name: &str) -> Result<(), CommerceError> {
        let product = self.catalog.get(name)?;
        self.cart.add(product);
        Ok(())
    }

    /// Listing for a category selector and sort key.
    pub fn browse(&self, category: &str, sort: SortKey) -> Vec<&Product> {
        self.listing.apply(self.catalog.products(), category, sort)
    }

    /// Run a query immediately, bypassing the debounce.
    pub fn search(&self, text: &str) -> SearchOutcome<'_> {
        self.search.engine().query(self.catalog.products(), text)
    }

    /// Submit the checkout form.
    pub fn checkout(&mut self, form: &CheckoutForm) -> Result<OrderConfirmation, CommerceError> {
        checkout::submit(&mut self.cart, form)
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    /// Current derived views.
    pub fn views(&self) -> Ref<'_, ViewSync> {
        self.views.borrow()
    }

    /// Split borrow of the debounced search box and the catalog it searches.
    pub fn search_box(&mut self) -> (&mut SearchBox, &CatalogIndex) {
        (&mut self.search, &self.catalog)
    }
}
