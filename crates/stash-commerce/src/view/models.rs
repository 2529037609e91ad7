//! View models derived from the cart.

use crate::cart::{Cart, CartItem};
use crate::messages;
use crate::money::Price;
use serde::Serialize;

/// Cart icon badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Badge {
    /// Shown only when the cart holds something.
    pub visible: bool,
    /// Total units in the cart.
    pub count: u64,
}

impl Badge {
    pub fn for_cart(cart: &Cart) -> Self {
        let count = cart.count();
        Self {
            visible: count > 0,
            count,
        }
    }
}

/// One line in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    /// Identity key for wiring row controls (the product name).
    pub key: String,
    pub name: String,
    pub image: String,
    pub price: Price,
    pub price_label: String,
    pub quantity: u32,
}

/// Body of the cart panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CartPanel {
    /// Nothing in the cart.
    Empty { message: String },
    /// Itemized rows with a footer total.
    Items {
        rows: Vec<CartRow>,
        total: Price,
        total_label: String,
    },
}

impl CartPanel {
    pub fn for_cart(cart: &Cart, currency: &str) -> Self {
        if cart.is_empty() {
            return CartPanel::Empty {
                message: messages::CART_EMPTY.to_string(),
            };
        }
        let rows = cart
            .items()
            .iter()
            .map(|item| CartRow {
                key: item.name.clone(),
                name: item.name.clone(),
                image: item.image.clone(),
                price: item.price,
                price_label: item.price.display(currency),
                quantity: item.quantity,
            })
            .collect();
        let total = cart.total();
        CartPanel::Items {
            rows,
            total,
            total_label: total.display(currency),
        }
    }
}

/// One line in the checkout summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub key: String,
    /// Heading, e.g. `"Graphic Tee (x2)"`.
    pub label: String,
    pub image: String,
    pub subtotal: Price,
    pub subtotal_label: String,
}

impl SummaryRow {
    fn for_item(item: &CartItem, currency: &str) -> Self {
        let subtotal = item.subtotal();
        Self {
            key: item.name.clone(),
            label: format!("{} (x{})", item.name, item.quantity),
            image: item.image.clone(),
            subtotal,
            subtotal_label: subtotal.display(currency),
        }
    }
}

/// Checkout page order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CheckoutSummary {
    Empty {
        message: String,
    },
    Items {
        rows: Vec<SummaryRow>,
        total: Price,
        total_label: String,
    },
}

impl CheckoutSummary {
    pub fn for_cart(cart: &Cart, currency: &str) -> Self {
        if cart.is_empty() {
            return CheckoutSummary::Empty {
                message: messages::SUMMARY_EMPTY.to_string(),
            };
        }
        let rows = cart
            .items()
            .iter()
            .map(|item| SummaryRow::for_item(item, currency))
            .collect();
        let total = cart.total();
        CheckoutSummary::Items {
            rows,
            total,
            total_label: total.display(currency),
        }
    }

    /// Grand total; zero when empty.
    pub fn total(&self) -> Price {
        match self {
            CheckoutSummary::Empty { .. } => Price::zero(),
            CheckoutSummary::Items { total, .. } => *total,
        }
    }
}
