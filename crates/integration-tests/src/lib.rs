//! Integration tests for the takeaway cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p takeaway-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart store behaviour over in-memory storage
//! - `file_storage` - Cart persistence through the file-backed storage area
//!
//! Shared fixtures live in this crate so both suites build line items the
//! same way.

use rust_decimal::Decimal;
use takeaway_core::{CartLineItem, ComboId, DishId};

/// A dish line priced at `cents` per unit.
#[must_use]
pub fn dish(id: i64, cents: i64, quantity: u32) -> CartLineItem {
    CartLineItem::dish(
        DishId::new(id),
        format!("Dish {id}"),
        Decimal::new(cents, 2),
        quantity,
    )
}

/// A combo line priced at `cents` per unit.
#[must_use]
pub fn combo(id: i64, cents: i64, quantity: u32) -> CartLineItem {
    CartLineItem::combo(
        ComboId::new(id),
        format!("Combo {id}"),
        Decimal::new(cents, 2),
        quantity,
    )
}
