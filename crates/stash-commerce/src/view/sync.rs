//! Keeps the derived views in step with the cart.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cart::{Cart, CartChange, CartListener};
use crate::view::{Badge, CartPanel, CheckoutSummary};

/// Projection of the cart into badge, cart panel and checkout summary.
///
/// Subscribe it to a [`CartStore`](crate::cart::CartStore); it recomputes all
/// three views, in that order, on every change. It never touches the cart.
#[derive(Debug, Clone)]
pub struct ViewSync {
    currency: String,
    badge: Badge,
    panel: CartPanel,
    summary: CheckoutSummary,
    refreshes: u64,
}

impl ViewSync {
    /// Views for an empty cart, with amounts labelled in `currency`.
    pub fn new(currency: impl Into<String>) -> Self {
        let currency = currency.into();
        let empty = Cart::new();
        Self {
            badge: Badge::for_cart(&empty),
            panel: CartPanel::for_cart(&empty, &currency),
            summary: CheckoutSummary::for_cart(&empty, &currency),
            currency,
            refreshes: 0,
        }
    }

    /// Shared handle, for subscribing while keeping read access.
    pub fn shared(currency: impl Into<String>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(currency)))
    }

    /// Recompute every view from `cart`.
    pub fn refresh(&mut self, cart: &Cart) {
        self.badge = Badge::for_cart(cart);
        self.panel = CartPanel::for_cart(cart, &self.currency);
        self.summary = CheckoutSummary::for_cart(cart, &self.currency);
        self.refreshes += 1;
    }

    pub fn badge(&self) -> Badge {
        self.badge
    }

    pub fn panel(&self) -> &CartPanel {
        &self.panel
    }

    pub fn summary(&self) -> &CheckoutSummary {
        &self.summary
    }

    /// How many times the views have been recomputed.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl CartListener for ViewSync {
    fn cart_changed(&mut self, change: &CartChange, cart: &Cart) {
        tracing::trace!(?change, "refreshing views");
        self.refresh(cart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::Product;
    use crate::money::Price;
    use crate::surface::TracingNotifier;
    use stash_cache::MemoryStore;

    fn store_with_views() -> (CartStore<MemoryStore>, Rc<RefCell<ViewSync>>) {
        let mut store = CartStore::open(MemoryStore::new(), "cart", TracingNotifier);
        let views = ViewSync::shared("EGP");
        store.subscribe(Rc::clone(&views));
        (store, views)
    }

    #[test]
    fn test_initial_views_are_empty() {
        let (_store, views) = store_with_views();
        let views = views.borrow();
        assert_eq!(views.badge(), Badge { visible: false, count: 0 });
        assert!(matches!(views.panel(), CartPanel::Empty { .. }));
        assert!(matches!(views.summary(), CheckoutSummary::Empty { .. }));
        assert_eq!(views.refreshes(), 1);
    }

    #[test]
    fn test_views_follow_mutations() {
        let (mut store, views) = store_with_views();
        let tee = Product::new("Graphic Tee", 100, "/t.jpg", "tees");
        let hoodie = Product::new("Zip Hoodie", 50, "/h.jpg", "hoodies");

        store.add(&tee);
        store.add(&hoodie);
        store.add(&tee);

        {
            let views = views.borrow();
            assert_eq!(views.badge(), Badge { visible: true, count: 3 });

            match views.panel() {
                CartPanel::Items { rows, total_label, .. } => {
                    assert_eq!(rows.len(), 2);
                    assert_eq!(rows[0].key, "Graphic Tee");
                    assert_eq!(rows[0].quantity, 2);
                    assert_eq!(rows[0].price_label, "EGP 100");
                    assert_eq!(total_label, "EGP 250");
                }
                other => panic!("expected items, got {:?}", other),
            }

            match views.summary() {
                CheckoutSummary::Items { rows, total, .. } => {
                    assert_eq!(rows[0].label, "Graphic Tee (x2)");
                    assert_eq!(rows[0].subtotal, Price::new(200));
                    assert_eq!(rows[1].subtotal_label, "EGP 50");
                    assert_eq!(*total, store.total());
                }
                other => panic!("expected items, got {:?}", other),
            }
        }

        store.clear();
        let views = views.borrow();
        assert!(!views.badge().visible);
        assert_eq!(
            views.panel(),
            &CartPanel::Empty {
                message: "Your stash is empty 😎".to_string()
            }
        );
        assert_eq!(views.summary().total(), Price::zero());
        assert_eq!(views.refreshes(), 5);
    }
}
