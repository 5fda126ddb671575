//! The text-validation capability trait

// ============================================================================
// TEXT RULE TRAIT
// ============================================================================

/// The capability every validation rule satisfies: a pure predicate over a
/// field's text value.
///
/// Implement this trait to extend the rule catalog without touching it —
/// wrap the implementor in [`Rule::custom`](crate::rules::Rule::custom) and
/// it participates in ordered, fail-fast evaluation like any built-in rule.
///
/// Any closure `Fn(&str) -> bool` implements `TextRule` automatically, so
/// one-off checks need no named type.
///
/// # Contract
///
/// `is_valid` must be pure and total: no hidden state, no side effects,
/// same answer for the same text every time. The engine never catches
/// panics; a panicking implementation unwinds to whoever called
/// [`Binding::validate`](crate::binding::Binding::validate).
///
/// # Examples
///
/// ```
/// use field_validator::TextRule;
///
/// struct NoLeadingSpace;
///
/// impl TextRule for NoLeadingSpace {
///     fn is_valid(&self, text: &str) -> bool {
///         !text.starts_with(' ')
///     }
/// }
///
/// assert!(NoLeadingSpace.is_valid("hello"));
/// assert!(!NoLeadingSpace.is_valid(" hello"));
///
/// // Closures work too:
/// let shouty = |text: &str| text == text.to_uppercase();
/// assert!(shouty.is_valid("LOUD"));
/// ```
pub trait TextRule {
    /// Returns `true` when `text` satisfies this rule.
    fn is_valid(&self, text: &str) -> bool;

    /// Returns the name of this rule.
    ///
    /// Used for logging and error reporting. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> TextRule for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, text: &str) -> bool {
        self(text)
    }
}

// ============================================================================
// TESTS
// ============================================================================
