use super::*;

// =============================================================
// Product
// =============================================================

#[test]
fn product_deserializes_camel_case_fields() {
    let json = serde_json::json!({
        "id": "p-1",
        "name": "Trail Jacket",
        "image": "/img/jacket.jpg",
        "price": 89.5,
        "originalPrice": 120.0,
        "rentPrice": 15.0,
        "stock": 4,
        "status": "Low Stock",
        "category": "Outerwear",
        "inStock": true
    });
    let product: Product = serde_json::from_value(json).unwrap();
    assert_eq!(product.original_price, Some(120.0));
    assert_eq!(product.rent_price, Some(15.0));
    assert_eq!(product.stock, 4);
    assert!(product.in_stock);
}

#[test]
fn product_optional_fields_default_when_missing() {
    let json = serde_json::json!({
        "id": "p-2",
        "name": "Mug",
        "image": "/img/mug.jpg",
        "price": 9.0
    });
    let product: Product = serde_json::from_value(json).unwrap();
    assert_eq!(product.original_price, None);
    assert_eq!(product.rent_price, None);
    assert_eq!(product.stock, 0);
    assert!(product.status.is_empty());
    assert!(!product.in_stock);
}

// =============================================================
// User
// =============================================================

#[test]
fn user_display_name_joins_parts() {
    let user = User {
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        account_type: None,
    };
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn user_display_name_skips_missing_parts() {
    let user = User {
        first_name: None,
        last_name: Some("Lovelace".to_owned()),
        account_type: None,
    };
    assert_eq!(user.display_name(), "Lovelace");
    assert_eq!(User::default().display_name(), "");
}
