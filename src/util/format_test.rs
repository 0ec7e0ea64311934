use super::*;

#[test]
fn format_price_uses_two_decimals() {
    assert_eq!(format_price("$", 12.0), "$12.00");
    assert_eq!(format_price("$", 49.999), "$50.00");
    assert_eq!(format_price("€", 0.5), "€0.50");
}

#[test]
fn format_price_rounds_halfway_cents_up() {
    assert_eq!(format_price("$", 10.125), "$10.13");
    assert_eq!(format_price("$", 0.125), "$0.13");
    assert_eq!(format_price("$", 19.625), "$19.63");
}

#[test]
fn user_initials_takes_first_letters() {
    let user = User {
        first_name: Some("grace".to_owned()),
        last_name: Some("Hopper".to_owned()),
        account_type: None,
    };
    assert_eq!(user_initials(&user), "gH");
}

#[test]
fn user_initials_skips_missing_and_empty_names() {
    let user = User {
        first_name: Some(String::new()),
        last_name: Some("Hopper".to_owned()),
        account_type: None,
    };
    assert_eq!(user_initials(&user), "H");
    assert_eq!(user_initials(&User::default()), "");
}
