//! Checkout submission.
//!
//! Orders are not transmitted anywhere: a valid submission empties the cart
//! and confirms. Field formats are the form's business; here a field only has
//! to be filled in.

use serde::{Deserialize, Serialize};
use stash_cache::KeyValueStore;

use crate::cart::CartStore;
use crate::error::CommerceError;
use crate::messages;
use crate::money::Price;

/// Values collected by the checkout form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutForm {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}

impl CheckoutForm {
    /// Names of the fields left empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("full_name", &self.full_name),
            ("address", &self.address),
            ("city", &self.city),
            ("phone", &self.phone),
            ("card_number", &self.card_number),
            ("card_expiry", &self.card_expiry),
            ("card_cvc", &self.card_cvc),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// What the simulated order covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    /// Distinct lines ordered.
    pub lines: usize,
    /// Units ordered.
    pub units: u64,
    /// Amount charged.
    pub total: Price,
}

/// Submit the checkout form against the cart.
///
/// Rejects an empty cart first, then blank fields; either rejection shows a
/// notification and leaves the cart untouched. On success the cart is
/// cleared (and persisted empty) before the confirmation is shown.
pub fn submit<S: KeyValueStore>(
    store: &mut CartStore<S>,
    form: &CheckoutForm,
) -> Result<OrderConfirmation, CommerceError> {
    if store.cart().is_empty() {
        store.notifier().notify(messages::CHECKOUT_EMPTY_CART);
        return Err(CommerceError::EmptyCart);
    }

    let missing = form.missing_fields();
    if !missing.is_empty() {
        store.notifier().notify(messages::CHECKOUT_MISSING_FIELDS);
        return Err(CommerceError::MissingFields(missing));
    }

    let confirmation = OrderConfirmation {
        lines: store.items().len(),
        units: store.count(),
        total: store.total(),
    };
    store.clear();
    store.notifier().notify(messages::CHECKOUT_SUCCESS);
    tracing::info!(
        lines = confirmation.lines,
        units = confirmation.units,
        total = %confirmation.total,
        "order placed"
    );
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::surface::RecordingNotifier;
    use stash_cache::MemoryStore;
    use std::rc::Rc;

    fn filled() -> CheckoutForm {
        CheckoutForm {
            full_name: "Sam Doe".into(),
            address: "12 Nile St".into(),
            city: "Cairo".into(),
            phone: "0100000000".into(),
            card_number: "4242424242424242".into(),
            card_expiry: "12/30".into(),
            card_cvc: "123".into(),
        }
    }

    fn store() -> (CartStore<MemoryStore>, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::new());
        let store = CartStore::open(MemoryStore::new(), "cart", Rc::clone(&notifier));
        (store, notifier)
    }

    #[test]
    fn test_empty_cart_rejected() {
        let (mut store, notifier) = store();
        let err = submit(&mut store, &filled()).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
        assert_eq!(notifier.last().as_deref(), Some(messages::CHECKOUT_EMPTY_CART));
    }

    #[test]
    fn test_empty_cart_checked_before_fields() {
        let (mut store, _) = store();
        let err = submit(&mut store, &CheckoutForm::default()).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[test]
    fn test_missing_fields_rejected_without_state_change() {
        let (mut store, notifier) = store();
        store.add(&Product::new("Cap", 99, "/c.jpg", "hats"));
        let form = CheckoutForm {
            city: String::new(),
            card_cvc: String::new(),
            ..filled()
        };

        let err = submit(&mut store, &form).unwrap_err();
        match err {
            CommerceError::MissingFields(fields) => {
                assert_eq!(fields, vec!["city", "card_cvc"]);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(store.count(), 1);
        assert_eq!(
            notifier.last().as_deref(),
            Some(messages::CHECKOUT_MISSING_FIELDS)
        );
    }

    #[test]
    fn test_successful_checkout_clears_cart() {
        let (mut store, notifier) = store();
        let cap = Product::new("Cap", 99, "/c.jpg", "hats");
        store.add(&cap);
        store.add(&cap);

        let confirmation = submit(&mut store, &filled()).unwrap();
        assert_eq!(
            confirmation,
            OrderConfirmation {
                lines: 1,
                units: 2,
                total: Price::new(198)
            }
        );
        assert!(store.cart().is_empty());
        assert_eq!(store.store().get("cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(notifier.last().as_deref(), Some(messages::CHECKOUT_SUCCESS));
    }
}
