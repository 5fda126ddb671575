//! The rule catalog
//!
//! [`Rule`] is a tagged union of named validation presets plus two escape
//! hatches: [`Rule::Regex`] for a caller-supplied pattern and
//! [`Rule::Custom`] for an injected [`TextRule`] capability. Every variant
//! evaluates as a pure, total function of the field's text.
//!
//! [`RuleList`] holds an ordered sequence of rules for one field.
//! Evaluation is fail-fast: [`RuleList::first_failure`] stops at and
//! reports the first violated rule, never the full set.
//!
//! # Examples
//!
//! ```
//! use field_validator::rules::{required, min_length, RuleList};
//!
//! let rules = RuleList::from(vec![required(), min_length(3)]);
//! assert_eq!(rules.first_failure("ab"), Some(&min_length(3)));
//! assert_eq!(rules.first_failure("abc"), None);
//! ```

mod charset;
mod date;
mod patterns;

use std::borrow::Cow;
use std::fmt;
use std::mem;
use std::rc::Rc;

use crate::core::{PatternError, TextRule};

// ============================================================================
// RULE
// ============================================================================

/// A named, pure predicate over a field's text value.
///
/// Cloning is cheap: pattern and capability variants share their inner
/// state by reference count.
///
/// # Examples
///
/// ```
/// use field_validator::Rule;
///
/// assert!(Rule::Required.is_valid("x"));
/// assert!(!Rule::Required.is_valid(""));
///
/// let hex = Rule::regex("^[0-9a-f]+$").unwrap();
/// assert!(hex.is_valid("c0ffee"));
///
/// let no_admin = Rule::custom(|text: &str| text != "admin");
/// assert!(!no_admin.is_valid("admin"));
/// ```
#[derive(Clone)]
pub enum Rule {
    /// Text must not be empty.
    Required,
    /// Only letters, any alphabet.
    Letters,
    /// Only letters and digits.
    Alphanumeric,
    /// Only letters, digits and whitespace.
    AlphanumericWhitespaces,
    /// Only ASCII A-Z/a-z.
    Latin,
    /// Only ASCII A-Z/a-z and whitespace.
    LatinWhitespaces,
    /// Only ASCII A-Z/a-z and digits.
    LatinDigits,
    /// Only digits.
    Digits,
    /// Only digits and whitespace.
    DigitsWhitespaces,
    /// Email address.
    Email,
    /// Russian phone mask `+7 (DDD) DDD-DD-DD`.
    Phone,
    /// At least one uppercase letter, one lowercase letter and one digit.
    /// No minimum length; combine with [`Rule::MinLength`] for that.
    Password,
    /// Date mask `DD[-/.]MM[-/.]YYYY`, year 19xx/20xx.
    Birthday,
    /// Date under `format` must be over 18 years in the past.
    Birthday18Plus {
        /// `chrono` format string the text is parsed with.
        format: Cow<'static, str>,
    },
    /// SNILS mask `DDD-DDD-DDD DD`.
    Snils,
    /// At least this many characters (Unicode scalar values).
    MinLength(usize),
    /// At most this many characters (Unicode scalar values).
    MaxLength(usize),
    /// Any substring of the text matches the pattern.
    Regex(regex::Regex),
    /// Delegates to an injected [`TextRule`] capability.
    Custom(Rc<dyn TextRule>),
}

impl Rule {
    /// Creates a rule from a caller-supplied regular expression.
    ///
    /// The pattern is compiled here so a malformed one is rejected up
    /// front instead of surfacing on every keystroke.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern does not compile.
    pub fn regex(pattern: &str) -> Result<Self, PatternError> {
        regex::Regex::new(pattern)
            .map(Rule::Regex)
            .map_err(|source| PatternError::new(pattern, source))
    }

    /// Wraps an externally supplied [`TextRule`] capability.
    ///
    /// Closures `Fn(&str) -> bool` qualify directly.
    pub fn custom(rule: impl TextRule + 'static) -> Self {
        Rule::Custom(Rc::new(rule))
    }

    /// The 18-plus birthday rule with the default `%d.%m.%Y` format.
    #[must_use]
    pub fn birthday18plus() -> Self {
        Rule::Birthday18Plus {
            format: Cow::Borrowed(date::DEFAULT_BIRTHDAY_FORMAT),
        }
    }

    /// The 18-plus birthday rule parsing with a caller-chosen `chrono`
    /// format string.
    #[must_use]
    pub fn birthday18plus_format(format: impl Into<Cow<'static, str>>) -> Self {
        Rule::Birthday18Plus {
            format: format.into(),
        }
    }

    /// Evaluates this rule against `text`. `true` means valid.
    #[must_use]
    pub fn is_valid(&self, text: &str) -> bool {
        match self {
            Rule::Required => !text.is_empty(),
            Rule::Letters => charset::letters(text),
            Rule::Alphanumeric => charset::alphanumeric(text),
            Rule::AlphanumericWhitespaces => charset::alphanumeric_whitespaces(text),
            Rule::Latin => charset::latin(text),
            Rule::LatinWhitespaces => charset::latin_whitespaces(text),
            Rule::LatinDigits => charset::latin_digits(text),
            Rule::Digits => charset::digits(text),
            Rule::DigitsWhitespaces => charset::digits_whitespaces(text),
            Rule::Email => patterns::EMAIL.is_match(text),
            Rule::Phone => patterns::PHONE.is_match(text),
            Rule::Password => charset::password(text),
            Rule::Birthday => patterns::BIRTHDAY.is_match(text),
            Rule::Birthday18Plus { format } => date::over_18(text, format),
            Rule::Snils => patterns::SNILS.is_match(text),
            Rule::MinLength(min) => text.chars().count() >= *min,
            Rule::MaxLength(max) => text.chars().count() <= *max,
            Rule::Regex(pattern) => pattern.is_match(text),
            Rule::Custom(rule) => rule.is_valid(text),
        }
    }

    /// The rule's name, for logging and diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Rule::Required => "required",
            Rule::Letters => "letters",
            Rule::Alphanumeric => "alphanumeric",
            Rule::AlphanumericWhitespaces => "alphanumeric_whitespaces",
            Rule::Latin => "latin",
            Rule::LatinWhitespaces => "latin_whitespaces",
            Rule::LatinDigits => "latin_digits",
            Rule::Digits => "digits",
            Rule::DigitsWhitespaces => "digits_whitespaces",
            Rule::Email => "email",
            Rule::Phone => "phone",
            Rule::Password => "password",
            Rule::Birthday => "birthday",
            Rule::Birthday18Plus { .. } => "birthday18plus",
            Rule::Snils => "snils",
            Rule::MinLength(_) => "min_length",
            Rule::MaxLength(_) => "max_length",
            Rule::Regex(_) => "regex",
            Rule::Custom(rule) => rule.name(),
        }
    }
}

impl TextRule for Rule {
    fn is_valid(&self, text: &str) -> bool {
        Rule::is_valid(self, text)
    }

    fn name(&self) -> &str {
        Rule::name(self)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("Required"),
            Rule::Letters => f.write_str("Letters"),
            Rule::Alphanumeric => f.write_str("Alphanumeric"),
            Rule::AlphanumericWhitespaces => f.write_str("AlphanumericWhitespaces"),
            Rule::Latin => f.write_str("Latin"),
            Rule::LatinWhitespaces => f.write_str("LatinWhitespaces"),
            Rule::LatinDigits => f.write_str("LatinDigits"),
            Rule::Digits => f.write_str("Digits"),
            Rule::DigitsWhitespaces => f.write_str("DigitsWhitespaces"),
            Rule::Email => f.write_str("Email"),
            Rule::Phone => f.write_str("Phone"),
            Rule::Password => f.write_str("Password"),
            Rule::Birthday => f.write_str("Birthday"),
            Rule::Snils => f.write_str("Snils"),
            Rule::Birthday18Plus { format } => f
                .debug_struct("Birthday18Plus")
                .field("format", format)
                .finish(),
            Rule::MinLength(min) => f.debug_tuple("MinLength").field(min).finish(),
            Rule::MaxLength(max) => f.debug_tuple("MaxLength").field(max).finish(),
            Rule::Regex(pattern) => f.debug_tuple("Regex").field(&pattern.as_str()).finish(),
            Rule::Custom(rule) => f.debug_tuple("Custom").field(&rule.name()).finish(),
        }
    }
}

/// Structural equality. `Regex` compares by pattern text; `Custom`
/// compares by capability identity, since two distinct capabilities may
/// disagree even when their names match.
impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Rule::MinLength(a), Rule::MinLength(b)) => a == b,
            (Rule::MaxLength(a), Rule::MaxLength(b)) => a == b,
            (Rule::Birthday18Plus { format: a }, Rule::Birthday18Plus { format: b }) => a == b,
            (Rule::Regex(a), Rule::Regex(b)) => a.as_str() == b.as_str(),
            (Rule::Custom(a), Rule::Custom(b)) => Rc::ptr_eq(a, b),
            (a, b) => mem::discriminant(a) == mem::discriminant(b),
        }
    }
}

// ============================================================================
// CONSTRUCTOR HELPERS
// ============================================================================

/// Creates the non-empty rule.
#[must_use]
pub fn required() -> Rule {
    Rule::Required
}

/// Creates the any-alphabet letters rule.
#[must_use]
pub fn letters() -> Rule {
    Rule::Letters
}

/// Creates the letters-and-digits rule.
#[must_use]
pub fn alphanumeric() -> Rule {
    Rule::Alphanumeric
}

/// Creates the letters, digits and whitespace rule.
#[must_use]
pub fn alphanumeric_whitespaces() -> Rule {
    Rule::AlphanumericWhitespaces
}

/// Creates the ASCII-letters rule.
#[must_use]
pub fn latin() -> Rule {
    Rule::Latin
}

/// Creates the ASCII letters and whitespace rule.
#[must_use]
pub fn latin_whitespaces() -> Rule {
    Rule::LatinWhitespaces
}

/// Creates the ASCII letters and digits rule.
#[must_use]
pub fn latin_digits() -> Rule {
    Rule::LatinDigits
}

/// Creates the digits-only rule.
#[must_use]
pub fn digits() -> Rule {
    Rule::Digits
}

/// Creates the digits and whitespace rule.
#[must_use]
pub fn digits_whitespaces() -> Rule {
    Rule::DigitsWhitespaces
}

/// Creates the email rule.
#[must_use]
pub fn email() -> Rule {
    Rule::Email
}

/// Creates the `+7 (DDD) DDD-DD-DD` phone rule.
#[must_use]
pub fn phone() -> Rule {
    Rule::Phone
}

/// Creates the password-strength rule.
#[must_use]
pub fn password() -> Rule {
    Rule::Password
}

/// Creates the `DD[-/.]MM[-/.]YYYY` birthday rule.
#[must_use]
pub fn birthday() -> Rule {
    Rule::Birthday
}

/// Creates the 18-plus birthday rule (`%d.%m.%Y`).
#[must_use]
pub fn birthday18plus() -> Rule {
    Rule::birthday18plus()
}

/// Creates the 18-plus birthday rule with a custom `chrono` format.
#[must_use]
pub fn birthday18plus_format(format: impl Into<Cow<'static, str>>) -> Rule {
    Rule::birthday18plus_format(format)
}

/// Creates the SNILS rule.
#[must_use]
pub fn snils() -> Rule {
    Rule::Snils
}

/// Creates a minimum character-count rule.
#[must_use]
pub fn min_length(min: usize) -> Rule {
    Rule::MinLength(min)
}

/// Creates a maximum character-count rule.
#[must_use]
pub fn max_length(max: usize) -> Rule {
    Rule::MaxLength(max)
}

/// Creates a rule from a caller-supplied pattern.
///
/// # Errors
///
/// Returns [`PatternError`] when the pattern does not compile.
pub fn regex(pattern: &str) -> Result<Rule, PatternError> {
    Rule::regex(pattern)
}

/// Wraps an external [`TextRule`] capability.
pub fn custom(rule: impl TextRule + 'static) -> Rule {
    Rule::custom(rule)
}

// ============================================================================
// RULE LIST
// ============================================================================

/// An ordered sequence of rules attached to one field.
///
/// Order is significant: evaluation stops at, and reports, the first
/// failing rule. An empty list accepts everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleList {
    rules: Vec<Rule>,
}

impl RuleList {
    /// Creates an empty rule list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule at the end of the evaluation order.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Number of rules in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the list holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates the rules in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Evaluates the rules in order against `text` and returns the first
    /// one that fails, or `None` when every rule passes.
    #[must_use]
    pub fn first_failure(&self, text: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| !rule.is_valid(text))
    }
}

impl From<Vec<Rule>> for RuleList {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for RuleList {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleList {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
