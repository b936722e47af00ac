//! Input validation for user-entered strings and amounts
//!
//! The presentation layer screens input with these before it reaches the
//! services; the services keep their own minimal guards as a second line
//! of defense.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Largest amount accepted from user input.
pub const MAX_AMOUNT: Decimal = dec!(999_999_999.99);

/// 4-20 characters, letters, digits and underscore.
pub fn is_valid_username(username: &str) -> bool {
    (4..=20).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// At least 6 characters.
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= 6
}

/// 2-50 characters, letters and spaces.
pub fn is_valid_full_name(full_name: &str) -> bool {
    (2..=50).contains(&full_name.len())
        && !full_name.trim().is_empty()
        && full_name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Deliberately loose shape check: `local@domain` with plausible
/// characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'));
    let domain_ok = !domain.is_empty()
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    local_ok && domain_ok && !domain.contains('@')
}

/// Positive and within the accepted range.
pub fn is_valid_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount <= MAX_AMOUNT
}

/// Parse a user-entered amount string. `None` when it is not a number or
/// falls outside the accepted range.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let amount = Decimal::from_str(input.trim()).ok()?;
    is_valid_amount(amount).then_some(amount)
}

/// 8-16 alphanumeric characters.
pub fn is_valid_account_number(account_number: &str) -> bool {
    (8..=16).contains(&account_number.len())
        && account_number.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(is_valid_username("alice_01"));
        assert!(!is_valid_username("abc"));
        assert!(!is_valid_username("way_too_long_username_x"));
        assert!(!is_valid_username("bad name"));
    }

    #[test]
    fn full_name_rules() {
        assert!(is_valid_full_name("Alice Smith"));
        assert!(!is_valid_full_name("A"));
        assert!(!is_valid_full_name("R2-D2"));
    }

    #[test]
    fn email_rules() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.example-bank.org"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@"));
    }

    #[test]
    fn amount_parsing() {
        assert_eq!(parse_amount("12.50"), Some(dec!(12.50)));
        assert_eq!(parse_amount(" 7 "), Some(dec!(7)));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("1000000000"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn account_number_shape() {
        assert!(is_valid_account_number("ACC12345678"));
        assert!(!is_valid_account_number("ACC-123"));
        assert!(!is_valid_account_number("short"));
    }
}
