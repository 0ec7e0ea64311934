//! Storefront presentation settings and page-embedded seed data.
//!
//! The embedding page may ship a JSON blob in
//! `<script type="application/json" id="storefront-config">`; any field it
//! omits keeps its default. It may likewise embed the initial catalog
//! (`storefront-catalog`) and signed-in user (`storefront-user`). Loading
//! never fails the UI: a bad blob is logged and the defaults are used instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::types::{Product, User};

/// DOM id of the optional config element.
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";
/// DOM id of the optional initial catalog (a JSON array of products).
pub const CATALOG_ELEMENT_ID: &str = "storefront-catalog";
/// DOM id of the optional signed-in user.
pub const USER_ELEMENT_ID: &str = "storefront-user";

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_ADD_TO_CART_RESET_MS: u32 = 1_000;
const DEFAULT_LOGOUT_REDIRECT: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Prefix for every rendered price.
    pub currency_symbol: String,
    /// How long the "adding to cart" indicator stays lit.
    pub add_to_cart_reset_ms: u32,
    /// Path navigated to after logout.
    pub logout_redirect: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            add_to_cart_reset_ms: DEFAULT_ADD_TO_CART_RESET_MS,
            logout_redirect: DEFAULT_LOGOUT_REDIRECT.to_owned(),
        }
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed storefront config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("currency symbol must not be empty")]
    EmptyCurrencySymbol,
}

impl StorefrontConfig {
    /// Parse and validate a JSON config blob.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyCurrencySymbol`] for a blank currency symbol.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.currency_symbol.trim().is_empty() {
            return Err(ConfigError::EmptyCurrencySymbol);
        }
        Ok(config)
    }
}

/// Load the config from the page, falling back to defaults.
pub fn load() -> StorefrontConfig {
    let Some(raw) = read_json_element(CONFIG_ELEMENT_ID) else {
        return StorefrontConfig::default();
    };
    match StorefrontConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("ignoring storefront config: {e}");
            StorefrontConfig::default()
        }
    }
}

// =============================================================================
// PAGE SEED DATA
// =============================================================================

/// Initial catalog embedded in the page; empty when absent or malformed.
pub fn load_catalog() -> Vec<Product> {
    load_seed(CATALOG_ELEMENT_ID).unwrap_or_default()
}

/// Signed-in user embedded in the page, if any.
pub fn load_user() -> Option<User> {
    load_seed(USER_ELEMENT_ID)
}

fn load_seed<T: DeserializeOwned>(id: &str) -> Option<T> {
    let raw = read_json_element(id)?;
    parse_seed(id, &raw)
}

/// Parse a seed blob, logging and discarding it when malformed.
pub(crate) fn parse_seed<T: DeserializeOwned>(id: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("ignoring #{id}: {e}");
            None
        }
    }
}

fn read_json_element(id: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .text_content()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}
