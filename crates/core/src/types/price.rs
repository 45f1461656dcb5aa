//! Price helpers using decimal arithmetic.
//!
//! Prices are plain [`Decimal`] amounts in the restaurant's currency. The cart
//! stores them as JSON numbers, so parsing and display live here rather than
//! on a wrapper type.

use rust_decimal::{Decimal, RoundingStrategy};

/// Errors that can occur when parsing a price.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price is not a number: {0}")]
    NotANumber(String),
    /// The input is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// Parse a price from user input such as `"12.50"` or `"$12.50"`.
///
/// # Errors
///
/// Returns an error if the input is empty, not a decimal number, or negative.
pub fn parse_price(s: &str) -> Result<Decimal, PriceError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(PriceError::Empty);
    }

    let amount: Decimal = digits
        .parse()
        .map_err(|_| PriceError::NotANumber(trimmed.to_owned()))?;

    if amount < Decimal::ZERO {
        return Err(PriceError::Negative);
    }

    Ok(amount)
}

/// Format an amount for display (e.g., "$19.99").
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!(
        "${:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
