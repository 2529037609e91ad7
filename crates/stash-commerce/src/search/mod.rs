//! Search module.
//!
//! Contains category/price listing views, free-text search, and the debounced
//! search input.

mod debounce;
mod filter;
mod query;
mod search_box;

pub use debounce::Debouncer;
pub use filter::{FilterSortEngine, SortKey};
pub use query::{SearchEngine, SearchOutcome, DEFAULT_MIN_QUERY_LEN};
pub use search_box::SearchBox;
