use super::*;

#[test]
fn menu_lists_profile_before_cart() {
    let labels: Vec<_> = MENU_ITEMS.iter().map(|m| m.label).collect();
    assert_eq!(
        labels,
        vec![
            "Profile",
            "My Cart",
            "Wishlist",
            "My Rentals",
            "My Orders",
            "Reviews",
            "Messages",
            "Settings",
        ]
    );
}

#[test]
fn menu_paths_are_unique_and_under_user() {
    for (i, a) in MENU_ITEMS.iter().enumerate() {
        assert!(a.path.starts_with("/user/"), "{} not under /user/", a.path);
        for b in &MENU_ITEMS[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn active_on_exact_match() {
    assert!(is_active_path("/user/cart", "/user/cart"));
    assert!(is_active_path("/user/cart/", "/user/cart"));
}

#[test]
fn active_on_nested_route() {
    assert!(is_active_path("/user/orders/42", "/user/orders"));
}

#[test]
fn inactive_on_sibling_with_shared_prefix() {
    assert!(!is_active_path("/user/cartography", "/user/cart"));
    assert!(!is_active_path("/user/wishlist", "/user/cart"));
}

#[test]
fn exactly_one_item_active_for_menu_route() {
    let active: Vec<_> = MENU_ITEMS
        .iter()
        .filter(|m| is_active_path("/user/reviews", m.path))
        .map(|m| m.label)
        .collect();
    assert_eq!(active, vec!["Reviews"]);
}

#[test]
fn nothing_active_outside_account_area() {
    assert!(MENU_ITEMS.iter().all(|m| !is_active_path("/", m.path)));
    assert!(MENU_ITEMS.iter().all(|m| !is_active_path(ACCOUNT_HOME_PATH, m.path)));
}
