use super::*;

#[test]
fn default_config_values() {
    let config = StorefrontConfig::default();
    assert_eq!(config.currency_symbol, "$");
    assert_eq!(config.add_to_cart_reset_ms, 1_000);
    assert_eq!(config.logout_redirect, "/");
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = StorefrontConfig::from_json(r#"{ "currencySymbol": "€" }"#).unwrap();
    assert_eq!(config.currency_symbol, "€");
    assert_eq!(config.add_to_cart_reset_ms, 1_000);
    assert_eq!(config.logout_redirect, "/");
}

#[test]
fn from_json_reads_all_fields() {
    let config = StorefrontConfig::from_json(
        r#"{ "currencySymbol": "£", "addToCartResetMs": 250, "logoutRedirect": "/goodbye" }"#,
    )
    .unwrap();
    assert_eq!(config.currency_symbol, "£");
    assert_eq!(config.add_to_cart_reset_ms, 250);
    assert_eq!(config.logout_redirect, "/goodbye");
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = StorefrontConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_blank_currency_symbol() {
    let err = StorefrontConfig::from_json(r#"{ "currencySymbol": "  " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyCurrencySymbol));
    assert_eq!(err.to_string(), "currency symbol must not be empty");
}

#[test]
fn load_without_browser_returns_defaults() {
    assert_eq!(load(), StorefrontConfig::default());
}

#[test]
fn seed_loaders_without_browser_are_empty() {
    assert!(load_catalog().is_empty());
    assert!(load_user().is_none());
}

#[test]
fn parse_seed_reads_catalog_array() {
    let raw = r#"[{ "id": "p-1", "name": "Lamp", "image": "/img/lamp.jpg", "price": 30.0, "inStock": true }]"#;
    let catalog: Vec<Product> = parse_seed(CATALOG_ELEMENT_ID, raw).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].name, "Lamp");
}

#[test]
fn parse_seed_discards_malformed_blob() {
    assert!(parse_seed::<User>(USER_ELEMENT_ID, "{ nope").is_none());
}
