//! Commerce error types.

use stash_cache::CacheError;
use thiserror::Error;

/// Errors that can occur in storefront state operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Positional cart access past the end of the cart.
    #[error("Cart index {index} out of range (cart has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout attempted with required fields left blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A rendered catalog entry could not be turned into a product.
    #[error("Invalid catalog entry at position {position}: {reason}")]
    InvalidEntry { position: usize, reason: String },

    /// Persistence layer failure.
    #[error("Storage error: {0}")]
    Cache(#[from] CacheError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
