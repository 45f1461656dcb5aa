//! Cart totals derived from the stored line items.

use rust_decimal::Decimal;
use serde::Serialize;

use super::line_item::CartLineItem;

/// Counts and subtotal for a cart. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of quantities across all lines.
    pub item_count: u64,
    /// Sum of `unit_price * quantity` across all lines.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

impl CartSummary {
    /// Compute the summary of a sequence of lines.
    ///
    /// Totals saturate rather than overflow, so any readable cart has a
    /// summary.
    #[must_use]
    pub fn of(items: &[CartLineItem]) -> Self {
        items.iter().fold(
            Self {
                line_count: items.len(),
                ..Self::default()
            },
            |acc, item| Self {
                item_count: acc.item_count.saturating_add(u64::from(item.quantity)),
                subtotal: acc.subtotal.saturating_add(item.line_total()),
                ..acc
            },
        )
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}
