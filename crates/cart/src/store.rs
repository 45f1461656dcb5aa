//! The takeaway cart store.

use takeaway_core::{CartLineItem, CartSummary, IdentityPolicy};
use tracing::instrument;

use crate::storage::StorageArea;

/// Storage key the cart is kept under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "takeaway_cart";

/// The takeaway cart, persisted as a JSON array under one storage key.
///
/// Every operation reads the stored list, applies its change and writes the
/// full list back. There is no in-memory copy, so two stores sharing one
/// storage area always agree.
///
/// No method returns an error. Unreadable contents read as an empty cart,
/// out-of-range positions are ignored, and storage failures are logged.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    policy: IdentityPolicy,
}

impl<S: StorageArea> CartStore<S> {
    /// Create a store over `storage` using [`DEFAULT_CART_KEY`] and the
    /// default identity policy.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: DEFAULT_CART_KEY.to_owned(),
            policy: IdentityPolicy::default(),
        }
    }

    /// Use a different storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Use a different identity policy for merging additions.
    #[must_use]
    pub const fn with_policy(mut self, policy: IdentityPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn policy(&self) -> IdentityPolicy {
        self.policy
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Read the current cart.
    ///
    /// A missing key, malformed stored text or a storage failure all read as
    /// an empty cart.
    pub fn read(&self) -> Vec<CartLineItem> {
        let text = match self.storage.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read cart from storage");
                return Vec::new();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "Stored cart is malformed, treating as empty");
            Vec::new()
        })
    }

    /// Replace the stored cart with `items`.
    pub fn write(&self, items: &[CartLineItem]) {
        let text = match serde_json::to_string(items) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &text) {
            tracing::warn!(key = %self.key, error = %e, "Failed to write cart to storage");
        }
    }

    /// Add `item` to the cart, merging it into an existing line with the same
    /// identity.
    ///
    /// A merge only increases the existing line's quantity; its name, price,
    /// notes and position are kept. Otherwise `item` is appended. Returns the
    /// position of the affected line.
    #[instrument(level = "debug", skip_all, fields(key = %self.key, quantity = item.quantity))]
    pub fn add_or_merge(&self, item: CartLineItem) -> usize {
        let mut items = self.read();
        let identity = item.identity();

        let position = match items
            .iter()
            .position(|line| line.identity().matches(&identity, self.policy))
        {
            Some(position) => {
                if let Some(line) = items.get_mut(position) {
                    line.quantity = line.quantity.saturating_add(item.quantity);
                    tracing::debug!(position, total = line.quantity, "Merged into existing line");
                }
                position
            }
            None => {
                items.push(item);
                let position = items.len() - 1;
                tracing::debug!(position, "Appended new line");
                position
            }
        };

        self.write(&items);
        position
    }

    /// Set the quantity of the line at `position`.
    ///
    /// Quantities below 1 are raised to 1. An out-of-range position is a no-op
    /// and nothing is written. Returns whether a line was updated.
    #[instrument(level = "debug", skip(self), fields(key = %self.key))]
    pub fn update_quantity(&self, position: usize, quantity: i64) -> bool {
        let mut items = self.read();
        let Some(line) = items.get_mut(position) else {
            tracing::debug!(lines = items.len(), "Position out of range, ignoring update");
            return false;
        };

        line.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        self.write(&items);
        true
    }

    /// Remove the line at `position`, shifting later lines down by one.
    ///
    /// An out-of-range position is a no-op and nothing is written. Returns the
    /// removed line.
    #[instrument(level = "debug", skip(self), fields(key = %self.key))]
    pub fn remove_at(&self, position: usize) -> Option<CartLineItem> {
        let mut items = self.read();
        if position >= items.len() {
            tracing::debug!(lines = items.len(), "Position out of range, ignoring removal");
            return None;
        }

        let removed = items.remove(position);
        self.write(&items);
        Some(removed)
    }

    /// Empty the cart by removing its storage key.
    #[instrument(level = "debug", skip(self), fields(key = %self.key))]
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::warn!(error = %e, "Failed to clear cart from storage");
        }
    }

    /// Line count, item count and subtotal of the current cart.
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.read())
    }

    /// Whether the cart key is present in storage.
    ///
    /// `false` after [`clear`](Self::clear), `true` after any write, even of an
    /// empty list. A storage failure reports `false`.
    pub fn is_persisted(&self) -> bool {
        self.storage.contains(&self.key).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "Failed to check cart key");
            false
        })
    }
}
