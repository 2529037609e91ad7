//! The cart store: single owner of cart state.
//!
//! Every mutation runs the same fixed sequence before returning:
//! change the in-memory cart, write it to the storage slot, then tell every
//! subscriber. Subscribers therefore never observe a cart that differs from
//! what is persisted.

use std::cell::RefCell;
use std::rc::Rc;

use stash_cache::{Cache, KeyValueStore};

use crate::cart::{Cart, CartItem};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::messages;
use crate::money::Price;
use crate::surface::Notifier;

/// What happened to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// State was (re)read from storage, or a subscriber just joined.
    Loaded,
    /// A unit of the named product was added.
    Added { name: String },
    /// A unit was added to an existing line.
    Incremented { name: String },
    /// A unit was taken from a line; `removed` if that emptied it.
    Decremented { name: String, removed: bool },
    /// A line was removed outright.
    Removed { name: String },
    /// The cart was emptied.
    Cleared,
}

/// Receives every cart change, after it has been persisted.
pub trait CartListener {
    /// Called with the change and the cart as it now stands.
    fn cart_changed(&mut self, change: &CartChange, cart: &Cart);
}

impl<L: CartListener + ?Sized> CartListener for Rc<RefCell<L>> {
    fn cart_changed(&mut self, change: &CartChange, cart: &Cart) {
        self.borrow_mut().cart_changed(change, cart);
    }
}

/// Owns the cart, its storage slot and its subscribers.
pub struct CartStore<S> {
    cart: Cart,
    cache: Cache<S>,
    storage_key: String,
    notifier: Box<dyn Notifier>,
    listeners: Vec<Box<dyn CartListener>>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the store over `store`, loading whatever the slot holds.
    pub fn open(store: S, storage_key: impl Into<String>, notifier: impl Notifier + 'static) -> Self {
        let mut cart_store = Self {
            cart: Cart::new(),
            cache: Cache::new(store),
            storage_key: storage_key.into(),
            notifier: Box::new(notifier),
            listeners: Vec::new(),
        };
        cart_store.load();
        cart_store
    }

    /// Replace in-memory state with the persisted cart.
    ///
    /// An absent, unreadable or malformed slot yields an empty cart; nothing is
    /// surfaced to the caller. Subscribers are told with [`CartChange::Loaded`].
    pub fn load(&mut self) {
        self.cart = match self.cache.get_raw(&self.storage_key) {
            Ok(Some(text)) => match serde_json::from_str::<Cart>(&text) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!(key = %self.storage_key, error = %e, "discarding malformed cart");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(key = %self.storage_key, error = %e, "cart storage unreadable");
                Cart::new()
            }
        };
        tracing::debug!(items = self.cart.len(), count = self.cart.count(), "cart loaded");
        self.publish(&CartChange::Loaded);
    }

    /// Write the current cart to its storage slot.
    pub fn save(&mut self) -> Result<(), CommerceError> {
        self.cache.set_json(&self.storage_key, &self.cart)?;
        Ok(())
    }

    /// Register a subscriber. It is called once right away with the current
    /// cart, then after every mutation.
    pub fn subscribe(&mut self, mut listener: impl CartListener + 'static) {
        listener.cart_changed(&CartChange::Loaded, &self.cart);
        self.listeners.push(Box::new(listener));
    }

    /// Add one unit of `product` and show a confirmation.
    pub fn add(&mut self, product: &Product) {
        self.cart.add(product);
        self.commit(CartChange::Added {
            name: product.name.clone(),
        });
        self.notifier.notify(&messages::added_to_cart(&product.name));
    }

    /// Add a unit to the line at `index`. Out of range is a no-op error.
    pub fn increment(&mut self, index: usize) -> Result<u32, CommerceError> {
        let quantity = self.cart.increment(index)?;
        let name = self.cart.items()[index].name.clone();
        self.commit(CartChange::Incremented { name });
        Ok(quantity)
    }

    /// Take a unit from the line at `index`; a line reaching zero is removed.
    ///
    /// Positions after a removed line shift down by one.
    pub fn decrement(&mut self, index: usize) -> Result<u32, CommerceError> {
        let name = self
            .cart
            .get(index)
            .map(|item| item.name.clone())
            .ok_or(CommerceError::IndexOutOfRange {
                index,
                len: self.cart.len(),
            })?;
        let quantity = self.cart.decrement(index)?;
        self.commit(CartChange::Decremented {
            name,
            removed: quantity == 0,
        });
        Ok(quantity)
    }

    /// Remove the line at `index`. Out of range is a no-op error.
    pub fn remove(&mut self, index: usize) -> Result<CartItem, CommerceError> {
        let item = self.cart.remove(index)?;
        self.commit(CartChange::Removed {
            name: item.name.clone(),
        });
        Ok(item)
    }

    /// Add a unit to the line for `name`.
    pub fn increment_item(&mut self, name: &str) -> Result<u32, CommerceError> {
        let index = self.position_of(name)?;
        self.increment(index)
    }

    /// Take a unit from the line for `name`.
    pub fn decrement_item(&mut self, name: &str) -> Result<u32, CommerceError> {
        let index = self.position_of(name)?;
        self.decrement(index)
    }

    /// Remove the line for `name`.
    pub fn remove_item(&mut self, name: &str) -> Result<CartItem, CommerceError> {
        let index = self.position_of(name)?;
        self.remove(index)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.commit(CartChange::Cleared);
    }

    /// Σ price × quantity.
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Σ quantity.
    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// The notification surface this store reports through.
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Storage key of the cart slot.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Mutably borrow the backing store, e.g. to clear slots out from under
    /// the cart. Call [`CartStore::load`] afterwards to resync.
    pub fn store_mut(&mut self) -> &mut S {
        self.cache.store_mut()
    }

    fn position_of(&self, name: &str) -> Result<usize, CommerceError> {
        self.cart
            .position(name)
            .ok_or_else(|| CommerceError::ItemNotInCart(name.to_string()))
    }

    fn commit(&mut self, change: CartChange) {
        if let Err(e) = self.save() {
            tracing::error!(key = %self.storage_key, error = %e, "failed to persist cart");
        }
        tracing::debug!(?change, count = self.cart.count(), total = %self.cart.total(), "cart changed");
        self.publish(&change);
    }

    fn publish(&mut self, change: &CartChange) {
        for listener in &mut self.listeners {
            listener.cart_changed(change, &self.cart);
        }
    }
}
