//! Character-class checks backing the charset rules
//!
//! Each function answers "does every character of `text` belong to the
//! class" — empty text is vacuously valid, which is deliberate: pair a
//! charset rule with [`Rule::Required`](super::Rule::Required) when empty
//! input must also be rejected.

/// Unicode decimal digit. One definition shared by every digit-bearing
/// class so `Digits`, `DigitsWhitespaces` and `LatinDigits` agree.
fn is_digit(c: char) -> bool {
    c.is_numeric()
}

fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub(super) fn letters(text: &str) -> bool {
    text.chars().all(char::is_alphabetic)
}

pub(super) fn alphanumeric(text: &str) -> bool {
    text.chars().all(char::is_alphanumeric)
}

pub(super) fn alphanumeric_whitespaces(text: &str) -> bool {
    text.chars().all(|c| c.is_alphanumeric() || c.is_whitespace())
}

pub(super) fn latin(text: &str) -> bool {
    text.chars().all(is_latin_letter)
}

pub(super) fn latin_whitespaces(text: &str) -> bool {
    text.chars().all(|c| is_latin_letter(c) || c.is_whitespace())
}

pub(super) fn latin_digits(text: &str) -> bool {
    text.chars().all(|c| is_latin_letter(c) || is_digit(c))
}

pub(super) fn digits(text: &str) -> bool {
    text.chars().all(is_digit)
}

pub(super) fn digits_whitespaces(text: &str) -> bool {
    text.chars().all(|c| is_digit(c) || c.is_whitespace())
}

/// At least one ASCII uppercase, one ASCII lowercase and one ASCII digit.
///
/// A character scan rather than a regex: the upstream pattern leaned on
/// lookaheads, which the `regex` crate does not support.
pub(super) fn password(text: &str) -> bool {
    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    for c in text.chars() {
        has_upper |= c.is_ascii_uppercase();
        has_lower |= c.is_ascii_lowercase();
        has_digit |= c.is_ascii_digit();
        if has_upper && has_lower && has_digit {
            return true;
        }
    }
    false
}

// ============================================================================
// TESTS
// ============================================================================
