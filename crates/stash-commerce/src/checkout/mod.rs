//! Checkout module.

mod form;

pub use form::{submit, CheckoutForm, OrderConfirmation};
