//! Cart and cart item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A line in the cart.
///
/// Price, image and category are snapshots taken when the product was first
/// added; later catalog changes do not reach them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product name (identity key).
    pub name: String,
    /// Unit price at add time.
    pub price: Price,
    /// Image reference at add time.
    pub image: String,
    /// Category at add time.
    pub category: String,
    /// Units in the cart, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Snapshot a product as a new single-unit line.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
        }
    }

    /// Line amount (price × quantity).
    pub fn subtotal(&self) -> Price {
        self.price * self.quantity
    }
}

/// The shopping cart: items in insertion order, at most one per name.
///
/// Serializes as a bare JSON array of items. Deserializing rejects arrays that
/// break the invariants (zero quantities, repeated names).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from items, checking the invariants.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CommerceError> {
        for (i, item) in items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(CommerceError::InvalidEntry {
                    position: i,
                    reason: format!("zero quantity for {}", item.name),
                });
            }
            if items[..i].iter().any(|other| other.name == item.name) {
                return Err(CommerceError::InvalidEntry {
                    position: i,
                    reason: format!("duplicate item {}", item.name),
                });
            }
        }
        Ok(Self { items })
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the same name gains a unit and keeps its snapshot;
    /// otherwise a new line is appended. Returns the line's position.
    pub fn add(&mut self, product: &Product) -> usize {
        if let Some(index) = self.position(&product.name) {
            let item = &mut self.items[index];
            item.quantity = item.quantity.saturating_add(1);
            return index;
        }
        self.items.push(CartItem::from_product(product));
        self.items.len() - 1
    }

    /// Add a unit to the line at `index`. Returns the new quantity.
    pub fn increment(&mut self, index: usize) -> Result<u32, CommerceError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CommerceError::IndexOutOfRange { index, len })?;
        item.quantity = item.quantity.saturating_add(1);
        Ok(item.quantity)
    }

    /// Take a unit from the line at `index`, removing the line when it runs out.
    ///
    /// Returns the remaining quantity; `0` means the line was removed and every
    /// later line moved up one position.
    pub fn decrement(&mut self, index: usize) -> Result<u32, CommerceError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CommerceError::IndexOutOfRange { index, len })?;
        if item.quantity <= 1 {
            self.items.remove(index);
            return Ok(0);
        }
        item.quantity -= 1;
        Ok(item.quantity)
    }

    /// Remove and return the line at `index`.
    pub fn remove(&mut self, index: usize) -> Result<CartItem, CommerceError> {
        if index >= self.items.len() {
            return Err(CommerceError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Position of the line for `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }

    /// Line at `index`.
    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    /// Line for `name`.
    pub fn find(&self, name: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// All lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Σ price × quantity.
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Σ quantity (the badge count).
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<CartItem>> for Cart {
    type Error = CommerceError;

    fn try_from(items: Vec<CartItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
