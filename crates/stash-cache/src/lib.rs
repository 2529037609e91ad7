//! Key-value persistence for the stash storefront.
//!
//! Plays the role a browser's local storage plays for a storefront page: a set of
//! named string slots, each overwritten wholesale on every write. The [`Cache`]
//! wrapper adds JSON (de)serialization on top of any [`KeyValueStore`].
//!
//! # Example
//!
//! ```rust
//! use stash_cache::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Item {
//!     name: String,
//!     quantity: u32,
//! }
//!
//! let mut cache = Cache::new(MemoryStore::new());
//! let items = vec![Item { name: "Graphic Tee".into(), quantity: 2 }];
//!
//! cache.set_json("hustlz-cart", &items).unwrap();
//! let restored: Option<Vec<Item>> = cache.get_json("hustlz-cart").unwrap();
//! assert_eq!(restored, Some(items));
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{validate_key, FileStore, KeyValueStore, MemoryStore};
