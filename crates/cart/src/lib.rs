//! Takeaway Cart - the persisted takeaway cart.
//!
//! The cart is an ordered list of [`CartLineItem`]s stored as JSON text under a
//! single key in a [`StorageArea`]. Every mutation re-reads the stored list,
//! applies the change, and writes the full list back.
//!
//! # Failure policy
//!
//! [`CartStore`] never returns errors. A missing or unreadable cart reads as
//! empty, an out-of-range position is a no-op, and storage failures are
//! reported as `tracing` warnings instead of being handed to the caller.
//!
//! # Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use takeaway_cart::{CartStore, MemoryStorage};
//! use takeaway_core::{CartLineItem, DishId};
//!
//! let cart = CartStore::new(MemoryStorage::new());
//! cart.add_or_merge(CartLineItem::dish(DishId::new(1), "Pho", Decimal::new(1200, 2), 1));
//! cart.add_or_merge(CartLineItem::dish(DishId::new(1), "Pho", Decimal::new(1200, 2), 2));
//!
//! let items = cart.read();
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].quantity, 3);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod storage;
pub mod store;

pub use error::StorageError;
pub use storage::{FileStorage, MemoryStorage, StorageArea};
pub use store::{CartStore, DEFAULT_CART_KEY};
pub use takeaway_core::{CartLineItem, CartSummary, IdentityPolicy};
