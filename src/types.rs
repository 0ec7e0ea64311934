//! Records supplied by the embedding application.
//!
//! DESIGN
//! ======
//! Field names follow the camelCase JSON the storefront backend emits, so the
//! parent can deserialize API payloads straight into these types. They are
//! read-only inputs: nothing in this crate validates or mutates them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A sellable and optionally rentable catalog item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier, used as the row key.
    pub id: String,
    pub name: String,
    /// Display image URL.
    pub image: String,
    /// Current selling price.
    pub price: f64,
    /// Pre-discount price; rendered struck through when present.
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Rental price; the card offers renting only when present.
    #[serde(default)]
    pub rent_price: Option<f64>,
    /// Units on hand.
    #[serde(default)]
    pub stock: u32,
    /// Stock status label, e.g. `"Active"` or `"Low Stock"`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub category: String,
    /// Whether stock-dependent actions (buy, rent, add to cart) are offered.
    #[serde(default)]
    pub in_stock: bool,
}

/// Identity fields of the signed-in user, as exposed by the auth provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Account tier label, e.g. `"customer"` or `"vendor"`.
    #[serde(default)]
    pub account_type: Option<String>,
}

impl User {
    /// First and last name joined by a space, skipping missing parts.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
