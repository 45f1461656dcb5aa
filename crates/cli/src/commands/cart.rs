//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! takeaway show
//! takeaway show --json
//! takeaway add --dish 12 --name "Green Curry" --price 11.50 --quantity 2
//! takeaway update 0 4
//! takeaway remove 0
//! takeaway clear
//! takeaway import cart.json
//! ```

use std::fmt::Write as _;
use std::path::Path;

use takeaway_cart::{CartStore, StorageArea};
use takeaway_core::{CartLineItem, CartSummary, format_price};

use super::CommandError;

/// Render the cart as a table, or as the stored JSON array when `json` is set.
///
/// # Errors
///
/// Returns an error if the JSON rendering fails.
pub fn show<S: StorageArea>(cart: &CartStore<S>, json: bool) -> Result<String, CommandError> {
    let items = cart.read();
    if json {
        return Ok(serde_json::to_string_pretty(&items)?);
    }
    Ok(render_table(&items))
}

/// Add a line, merging with an existing line of the same identity.
pub fn add<S: StorageArea>(cart: &CartStore<S>, item: CartLineItem) -> String {
    let name = item.name.clone();
    let quantity = item.quantity;
    let position = cart.add_or_merge(item);

    let total = cart
        .read()
        .get(position)
        .map_or(quantity, |line| line.quantity);
    tracing::info!(position, quantity, total, "Added to cart");

    format!("Added {quantity}x {name} (line {position}, now {total})")
}

/// Set the quantity of the line at `position`.
pub fn update<S: StorageArea>(cart: &CartStore<S>, position: usize, quantity: i64) -> String {
    if !cart.update_quantity(position, quantity) {
        return format!("No line at position {position}");
    }

    let quantity = cart
        .read()
        .get(position)
        .map_or(1, |line| line.quantity);
    format!("Line {position} quantity set to {quantity}")
}

/// Remove the line at `position`.
pub fn remove<S: StorageArea>(cart: &CartStore<S>, position: usize) -> String {
    cart.remove_at(position).map_or_else(
        || format!("No line at position {position}"),
        |line| format!("Removed {}x {}", line.quantity, line.name),
    )
}

/// Empty the cart.
pub fn clear<S: StorageArea>(cart: &CartStore<S>) -> String {
    cart.clear();
    "Cart cleared".to_owned()
}

/// Replace the cart with the line items in `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of line
/// items. The stored cart is left untouched in that case.
pub fn import<S: StorageArea>(cart: &CartStore<S>, path: &Path) -> Result<String, CommandError> {
    let text = std::fs::read_to_string(path).map_err(|source| CommandError::ReadImport {
        path: path.to_path_buf(),
        source,
    })?;

    let items: Vec<CartLineItem> =
        serde_json::from_str(&text).map_err(|source| CommandError::ParseImport {
            path: path.to_path_buf(),
            source,
        })?;

    cart.write(&items);
    tracing::info!(lines = items.len(), path = %path.display(), "Imported cart");

    Ok(format!("Imported {} line(s)", items.len()))
}

fn render_table(items: &[CartLineItem]) -> String {
    if items.is_empty() {
        return "Cart is empty".to_owned();
    }

    let mut out = String::new();
    for (position, item) in items.iter().enumerate() {
        let _ = write!(
            out,
            "{position:>3}  {:>4}x  {:<32} {:>10}",
            item.quantity,
            item.name,
            format_price(item.line_total())
        );
        if let Some(notes) = item.notes.as_deref().filter(|n| !n.is_empty()) {
            let _ = write!(out, "  ({notes})");
        }
        out.push('\n');
    }

    let summary = CartSummary::of(items);
    let _ = write!(
        out,
        "{} item(s) in {} line(s), subtotal {}",
        summary.item_count,
        summary.line_count,
        format_price(summary.subtotal)
    );
    out
}
