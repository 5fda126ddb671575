//! Acceptance matrix for the built-in rule catalog.

use chrono::{Local, Months};
use field_validator::prelude::*;
use pretty_assertions::assert_eq;

/// A date `years` years in the past, in the default `%d.%m.%Y` format.
fn years_ago(years: u32) -> String {
    let date = Local::now()
        .date_naive()
        .checked_sub_months(Months::new(years * 12))
        .unwrap();
    date.format("%d.%m.%Y").to_string()
}

#[test]
fn test_required() {
    assert!(required().is_valid("x"));
    assert!(required().is_valid(" "));
    assert!(!required().is_valid(""));
}

#[test]
fn test_charset_rules() {
    assert!(letters().is_valid("Проверка"));
    assert!(letters().is_valid("Check"));
    assert!(!letters().is_valid("Check1"));

    assert!(alphanumeric().is_valid("Логин7"));
    assert!(!alphanumeric().is_valid("Логин 7"));
    assert!(alphanumeric_whitespaces().is_valid("Логин 7"));

    assert!(latin().is_valid("Check"));
    assert!(!latin().is_valid("Проверка"));
    assert!(latin_whitespaces().is_valid("two words"));
    assert!(!latin_whitespaces().is_valid("two words 2"));
    assert!(latin_digits().is_valid("user7"));
    assert!(!latin_digits().is_valid("user 7"));

    assert!(digits().is_valid("0123456789"));
    assert!(!digits().is_valid("12 34"));
    assert!(digits_whitespaces().is_valid("12 34"));
    assert!(!digits_whitespaces().is_valid("12a34"));
}

#[test]
fn test_email() {
    assert_eq!(email().is_valid("user@example.com"), true);
    assert_eq!(email().is_valid("a@b.com"), true);
    assert_eq!(email().is_valid("first.last+tag@sub.example.co"), true);

    assert_eq!(email().is_valid("not-an-email"), false);
    assert_eq!(email().is_valid("user@"), false);
    assert_eq!(email().is_valid("user@domain"), false);
    assert_eq!(email().is_valid("@example.com"), false);
}

#[test]
fn test_phone_mask() {
    assert!(phone().is_valid("+7 (123) 456-78-90"));
    assert!(phone().is_valid("+7(123)456-78-90"));
    assert!(phone().is_valid("+7 (123) 456 78 90"));
    // Anchored at the start only; trailing content is not rejected.
    assert!(phone().is_valid("+7 (123) 456-78-90 ext. 5"));

    assert!(!phone().is_valid("12345"));
    assert!(!phone().is_valid("call +7 (123) 456-78-90"));
    assert!(!phone().is_valid("+8 (123) 456-78-90"));
    assert!(!phone().is_valid("+7 (123) 456-7890"));
}

#[test]
fn test_password_strength() {
    assert!(password().is_valid("Abc1"));
    assert!(password().is_valid("pa55Word"));

    assert!(!password().is_valid("abc1")); // no uppercase
    assert!(!password().is_valid("ABC1")); // no lowercase
    assert!(!password().is_valid("Abcdef")); // no digit
    assert!(!password().is_valid(""));
}

#[test]
fn test_birthday_mask() {
    assert!(birthday().is_valid("01.01.1990"));
    assert!(birthday().is_valid("31/12/2005"));
    assert!(birthday().is_valid("29-02-2000"));

    assert!(!birthday().is_valid("32.01.1990"));
    assert!(!birthday().is_valid("01.13.1990"));
    assert!(!birthday().is_valid("01.01.1890"));
    assert!(!birthday().is_valid("1.1.1990"));
}

#[test]
fn test_birthday18plus() {
    assert!(birthday18plus().is_valid(&years_ago(19)));
    assert!(!birthday18plus().is_valid(&years_ago(17)));
    // Turning 18 today is not yet over 18.
    assert!(!birthday18plus().is_valid(&years_ago(18)));
    assert!(!birthday18plus().is_valid("not a date"));
}

#[test]
fn test_birthday18plus_custom_format() {
    let rule = birthday18plus_format("%Y-%m-%d");
    let date = Local::now()
        .date_naive()
        .checked_sub_months(Months::new(20 * 12))
        .unwrap();
    assert!(rule.is_valid(&date.format("%Y-%m-%d").to_string()));
    // The default dotted format no longer parses.
    assert!(!rule.is_valid(&years_ago(20)));
}

#[test]
fn test_snils_mask() {
    assert!(snils().is_valid("123-456-789 01"));
    assert!(!snils().is_valid("123-456-78901"));
    assert!(!snils().is_valid("12345678901"));
    assert!(!snils().is_valid("123-456-789-01"));
}

#[test]
fn test_length_boundaries() {
    assert!(min_length(3).is_valid("abc"));
    assert!(!min_length(3).is_valid("ab"));
    assert!(max_length(3).is_valid("abc"));
    assert!(!max_length(3).is_valid("abcd"));
    // Zero-length bounds still hold for empty text.
    assert!(min_length(0).is_valid(""));
    assert!(max_length(0).is_valid(""));
}

#[test]
fn test_regex_rule() {
    let hex = regex("^[0-9a-f]+$").unwrap();
    assert!(hex.is_valid("c0ffee"));
    assert!(!hex.is_valid("C0FFEE"));

    let err = regex("[unterminated").unwrap_err();
    assert_eq!(err.pattern(), "[unterminated");
}

#[test]
fn test_custom_rule_in_list_wins_by_position() {
    let always_fail = custom(|_: &str| false);
    let rules = RuleList::from(vec![always_fail.clone(), required()]);
    assert_eq!(rules.first_failure("anything"), Some(&always_fail));
}

#[test]
fn test_fail_fast_over_catalog_rules() {
    let rules = RuleList::from(vec![required(), email(), max_length(64)]);
    assert_eq!(rules.first_failure(""), Some(&required()));
    assert_eq!(rules.first_failure("nope"), Some(&email()));
    let long = format!("{}@example.com", "a".repeat(80));
    assert_eq!(rules.first_failure(&long), Some(&max_length(64)));
    assert_eq!(rules.first_failure("user@example.com"), None);
}

#[test]
fn test_empty_rule_list_accepts_everything() {
    let rules = RuleList::new();
    assert_eq!(rules.first_failure(""), None);
    assert_eq!(rules.first_failure("anything at all"), None);
}
