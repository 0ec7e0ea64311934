//! Display formatting for prices and user names.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::types::User;

/// Format a price with two decimals behind the currency symbol.
///
/// Halfway cents round away from zero (`10.125` -> `10.13`), matching how the
/// storefront backend and its JS clients display prices.
pub fn format_price(symbol: &str, amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    format!("{symbol}{rounded:.2}")
}

/// Avatar initials: first letter of the first and last name, when present.
pub fn user_initials(user: &User) -> String {
    [user.first_name.as_deref(), user.last_name.as_deref()]
        .into_iter()
        .flatten()
        .filter_map(|part| part.chars().next())
        .collect()
}
