//! Cart line items and the identity rule that decides when two lines merge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ComboId, DishId};

/// A single entry in the takeaway cart.
///
/// Serialized with camelCase field names (`dishId`, `comboId`, `unitPrice`, ...)
/// so the stored JSON matches what the ordering front-end writes. Absent
/// optional fields are omitted on output and accepted as missing or `null` on
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// The dish this line orders, if it is a single dish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<DishId>,
    /// The combo this line orders, if it is a bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combo_id: Option<ComboId>,
    /// Display label. Not part of the line identity.
    pub name: String,
    /// Price per unit, stored as an exact JSON number.
    #[serde(with = "unit_price")]
    pub unit_price: Decimal,
    /// Number of units. Kept at 1 or more by the cart store.
    pub quantity: u32,
    /// Free-text customization ("no onions").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CartLineItem {
    /// Create a line for a single dish.
    #[must_use]
    pub fn dish(id: DishId, name: impl Into<String>, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            dish_id: Some(id),
            combo_id: None,
            name: name.into(),
            unit_price,
            quantity,
            notes: None,
        }
    }

    /// Create a line for a combo.
    #[must_use]
    pub fn combo(
        id: ComboId,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            dish_id: None,
            combo_id: Some(id),
            name: name.into(),
            unit_price,
            quantity,
            notes: None,
        }
    }

    /// Attach customization notes to the line.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The identity used to decide whether two lines merge.
    #[must_use]
    pub const fn identity(&self) -> LineIdentity {
        LineIdentity {
            dish_id: self.dish_id,
            combo_id: self.combo_id,
        }
    }

    /// `unit_price * quantity`, saturating at [`Decimal::MAX`] (or
    /// [`Decimal::MIN`] for a negative price).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Serde adapter writing prices as JSON numbers with every digit kept.
///
/// The decimal text goes straight into the number token (no `f64` in
/// between), normalized so `12.50` is written as `12.5`.
mod unit_price {
    use rust_decimal::Decimal;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&value.normalize(), serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        rust_decimal::serde::arbitrary_precision::deserialize(deserializer)
    }
}

/// The `(dishId, comboId)` pair of a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineIdentity {
    pub dish_id: Option<DishId>,
    pub combo_id: Option<ComboId>,
}

impl LineIdentity {
    /// Whether two identities denote the same cart line under `policy`.
    #[must_use]
    pub fn matches(&self, other: &Self, policy: IdentityPolicy) -> bool {
        match policy {
            IdentityPolicy::Tagged => self == other,
            IdentityPolicy::ZeroNormalized => {
                self.dish_id.unwrap_or_default() == other.dish_id.unwrap_or_default()
                    && self.combo_id.unwrap_or_default() == other.combo_id.unwrap_or_default()
            }
        }
    }
}

/// How line identities are compared when merging additions.
///
/// `ZeroNormalized` treats a missing `dishId`/`comboId` as `0`, the rule the
/// browser ordering front-end uses for its carts. It means a line
/// with no dish ID and a line with an explicit dish ID of `0` merge.
/// `Tagged` compares the optional IDs as-is so those lines stay apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdentityPolicy {
    #[default]
    Tagged,
    ZeroNormalized,
}

/// Error returned when parsing an unknown [`IdentityPolicy`] name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid identity policy: {0} (expected `tagged` or `zero_normalized`)")]
pub struct ParsePolicyError(pub String);

impl std::fmt::Display for IdentityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tagged => write!(f, "tagged"),
            Self::ZeroNormalized => write!(f, "zero_normalized"),
        }
    }
}

impl std::str::FromStr for IdentityPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tagged" => Ok(Self::Tagged),
            "zero_normalized" => Ok(Self::ZeroNormalized),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}
