//! User-facing copy.

/// Cart panel body when the cart is empty.
pub const CART_EMPTY: &str = "Your stash is empty 😎";

/// Checkout summary body when the cart is empty.
pub const SUMMARY_EMPTY: &str = "No items in your stash 😎";

/// Search ran but nothing matched.
pub const SEARCH_NO_RESULTS: &str = "No drip found 😢";

/// Checkout attempted with an empty cart.
pub const CHECKOUT_EMPTY_CART: &str = "Your stash is empty! Add some heat 🔥";

/// Checkout attempted with blank fields.
pub const CHECKOUT_MISSING_FIELDS: &str = "Fill in all the deets, fam! 🙌";

/// Simulated order accepted.
pub const CHECKOUT_SUCCESS: &str = "Order locked in! You're a legend 🔥";

/// Confirmation after adding a product.
pub fn added_to_cart(name: &str) -> String {
    format!("{} added to your stash!", name)
}
