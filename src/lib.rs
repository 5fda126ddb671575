//! Declarative, event-driven validation for text input fields.
//!
//! Attach an ordered list of [`Rule`]s to any field that satisfies the
//! [`ObservableField`] capability and the resulting [`Binding`]
//! re-validates automatically whenever the field's content changes or
//! editing ends, reporting the first violated rule — or `None` — to your
//! callback. Rendering the outcome (error text, border color) stays with
//! the embedding UI; the engine only ever says *which rule failed*.
//!
//! # Quick start
//!
//! ```
//! use std::rc::Rc;
//! use field_validator::prelude::*;
//!
//! let field = Rc::new(SingleLineInput::new());
//! let mut binding = bind(Rc::clone(&field), vec![required(), min_length(3)]);
//!
//! binding.set_on_content_changed(|outcome| match outcome {
//!     Some(rule) => println!("invalid: {}", rule.name()),
//!     None => println!("ok"),
//! });
//!
//! field.set_text("ab");
//! assert_eq!(binding.validate(), Some(min_length(3)));
//!
//! field.set_text("abc");
//! assert_eq!(binding.validate(), None);
//! ```
//!
//! # Design
//!
//! - **Fail-fast**: a [`RuleList`] reports the first failing rule only;
//!   order the list accordingly (`required()` first is typical).
//! - **Open catalog**: implement [`TextRule`] (any `Fn(&str) -> bool`
//!   already does) and wrap it with [`custom`](rules::custom) to extend
//!   the built-in catalog.
//! - **Explicit lifecycle**: a binding owns its subscriptions and drops
//!   them on [`release`](Binding::release) or `Drop`; re-registering a
//!   callback replaces the old subscription instead of stacking a second
//!   one.
//! - **Single-threaded**: evaluation and callback delivery run
//!   synchronously on the thread that fires the field event. Handles are
//!   `Rc`-based; there is no cross-thread story by design.
//!
//! Malformed caller-supplied patterns are rejected when the rule is
//! constructed ([`Rule::regex`] returns [`PatternError`]), keeping
//! evaluation itself total and panic-free. A panicking custom capability
//! is the one exception: the engine does not catch it, so it unwinds to
//! whoever triggered validation.

pub mod binding;
pub mod core;
pub mod field;
pub mod rules;

pub use crate::binding::{bind, Binding};
pub use crate::core::{PatternError, TextRule};
pub use crate::field::{
    EventHandler, EventSource, FieldEvent, MultiLineInput, ObservableField, SingleLineInput,
    SubscriptionId,
};
pub use crate::rules::{Rule, RuleList};

/// Everything needed to declare and bind validated fields.
///
/// # Examples
///
/// ```
/// use field_validator::prelude::*;
///
/// let rules = RuleList::from(vec![required(), email()]);
/// assert_eq!(rules.first_failure("user@example.com"), None);
/// ```
pub mod prelude {
    pub use crate::binding::{bind, Binding};
    pub use crate::core::{PatternError, TextRule};
    pub use crate::field::{
        EventSource, FieldEvent, MultiLineInput, ObservableField, SingleLineInput, SubscriptionId,
    };
    pub use crate::rules::{
        alphanumeric, alphanumeric_whitespaces, birthday, birthday18plus, birthday18plus_format,
        custom, digits, digits_whitespaces, email, latin, latin_digits, latin_whitespaces,
        letters, max_length, min_length, password, phone, regex, required, snils, Rule, RuleList,
    };
}
