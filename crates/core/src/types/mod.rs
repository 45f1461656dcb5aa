//! Core types for the takeaway cart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line_item;
pub mod price;
pub mod summary;

pub use id::*;
pub use line_item::{CartLineItem, IdentityPolicy, LineIdentity, ParsePolicyError};
pub use price::{PriceError, format_price, parse_price};
pub use summary::CartSummary;
