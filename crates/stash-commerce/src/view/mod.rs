//! Derived views: badge, cart panel and checkout summary.

mod models;
mod sync;

pub use models::{Badge, CartPanel, CartRow, CheckoutSummary, SummaryRow};
pub use sync::ViewSync;
