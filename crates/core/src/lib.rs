//! Takeaway Core - Shared types library.
//!
//! This crate provides the types shared by all takeaway components:
//! - `cart` - The persisted takeaway cart store
//! - `cli` - Command-line tool for inspecting and editing the cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, cart line items, identities and totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
