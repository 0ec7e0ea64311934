//! Account sidebar menu definition and route matching.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

pub const PROFILE_PATH: &str = "/user/profile";
pub const ACCOUNT_HOME_PATH: &str = "/user/home";

/// One navigation entry in the account sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { label: "Profile", path: PROFILE_PATH, icon: "\u{1F464}" },
    MenuItem { label: "My Cart", path: "/user/cart", icon: "\u{1F6D2}" },
    MenuItem { label: "Wishlist", path: "/user/wishlist", icon: "\u{2661}" },
    MenuItem { label: "My Rentals", path: "/user/rentals", icon: "\u{1F4C5}" },
    MenuItem { label: "My Orders", path: "/user/orders", icon: "\u{1F4E6}" },
    MenuItem { label: "Reviews", path: "/user/reviews", icon: "\u{2606}" },
    MenuItem { label: "Messages", path: "/user/chats", icon: "\u{1F4AC}" },
    MenuItem { label: "Settings", path: "/user/settings", icon: "\u{2699}" },
];

/// Whether `item_path` should be highlighted for the current location.
///
/// Matches the path itself and anything nested below it, but not siblings
/// sharing a prefix (`/user/cart` does not match `/user/cartography`).
pub fn is_active_path(current: &str, item_path: &str) -> bool {
    let current = current.trim_end_matches('/');
    let item_path = item_path.trim_end_matches('/');
    match current.strip_prefix(item_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
