//! Shopping cart module.
//!
//! [`Cart`] is the plain data model and its invariants; [`CartStore`] owns a
//! cart together with its storage slot and subscribers.

mod cart;
mod store;

pub use cart::{Cart, CartItem};
pub use store::{CartChange, CartListener, CartStore};
