//! The field binder
//!
//! A [`Binding`] associates one observable field with one ordered rule
//! list and at most one outcome callback per event kind. It owns its
//! subscription handles outright; the callbacks only borrow into the
//! binding's lifetime through the handlers it installs.
//!
//! Subscriptions are lazy: binding a field costs nothing until a callback
//! is registered, so fields that are only validated on explicit submit
//! generate no notification traffic.

use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::field::{FieldEvent, ObservableField, SubscriptionId};
use crate::rules::{Rule, RuleList};

/// Binds a field to its rules.
///
/// Convenience front door for [`Binding::bind`].
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use field_validator::prelude::*;
///
/// let field = Rc::new(SingleLineInput::new());
/// let binding = bind(Rc::clone(&field), vec![required(), min_length(3)]);
///
/// assert_eq!(binding.validate(), Some(required()));
/// field.set_text("abc");
/// assert_eq!(binding.validate(), None);
/// ```
pub fn bind<F: ObservableField>(field: Rc<F>, rules: impl Into<RuleList>) -> Binding<F> {
    Binding::bind(field, rules)
}

/// The live association between one field, its rules, and outcome
/// callbacks.
///
/// Each registered callback receives the result of a fresh
/// [`validate`](Binding::validate) run every time its event fires:
/// `Some(rule)` naming the first violated rule, or `None` when the text
/// passes every rule. Delivery is synchronous, on whatever thread fired
/// the field event; one firing means exactly one validation and one
/// callback invocation.
///
/// Dropping the binding — or calling [`release`](Binding::release) —
/// tears down every live subscription, after which the field may keep
/// firing without reaching any callback.
pub struct Binding<F: ObservableField> {
    field: Rc<F>,
    rules: Rc<RuleList>,
    content_changed: Option<SubscriptionId>,
    editing_ended: Option<SubscriptionId>,
}

impl<F: ObservableField> Binding<F> {
    /// Binds `field` to `rules`. No subscriptions are made yet.
    pub fn bind(field: Rc<F>, rules: impl Into<RuleList>) -> Self {
        Self {
            field,
            rules: Rc::new(rules.into()),
            content_changed: None,
            editing_ended: None,
        }
    }

    /// The bound field.
    #[must_use]
    pub fn field(&self) -> &Rc<F> {
        &self.field
    }

    /// The bound rules, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &RuleList {
        &self.rules
    }

    /// Evaluates the rule list against the field's current text.
    ///
    /// Returns the first failing rule, or `None` when all pass. Safe to
    /// call at any time — an explicit submit path needs no subscription.
    #[must_use]
    pub fn validate(&self) -> Option<Rule> {
        let outcome = self.rules.first_failure(&self.field.current_text()).cloned();
        match &outcome {
            Some(rule) => trace!(rule = rule.name(), "validation failed"),
            None => trace!("validation passed"),
        }
        outcome
    }

    /// Releases the content-changed subscription, if any. The callback
    /// registered for that slot stops firing.
    pub fn clear_on_content_changed(&mut self) {
        Self::release_slot(&self.field, &mut self.content_changed, FieldEvent::ContentChanged);
    }

    /// Releases the editing-ended subscription, if any.
    pub fn clear_on_editing_ended(&mut self) {
        Self::release_slot(&self.field, &mut self.editing_ended, FieldEvent::EditingEnded);
    }

    /// Releases every live subscription. Idempotent: releasing an
    /// already-released binding does nothing.
    pub fn release(&mut self) {
        self.clear_on_content_changed();
        self.clear_on_editing_ended();
    }

    fn release_slot(field: &Rc<F>, slot: &mut Option<SubscriptionId>, event: FieldEvent) {
        if let Some(id) = slot.take() {
            field.unsubscribe(id);
            debug!(event = event.name(), "subscription released");
        }
    }
}

impl<F: ObservableField + 'static> Binding<F> {
    /// Registers `callback` for the field's content-changed event.
    ///
    /// A previous registration for this slot is released first, so the
    /// latest callback is the only one that fires — re-registering
    /// replaces, never accumulates. The subscription itself is created
    /// here, on first registration.
    pub fn set_on_content_changed(&mut self, callback: impl Fn(Option<Rule>) + 'static) {
        self.clear_on_content_changed();
        self.content_changed = Some(self.install(FieldEvent::ContentChanged, Rc::new(callback)));
    }

    /// Registers `callback` for the field's editing-ended event.
    /// Symmetric to [`set_on_content_changed`](Self::set_on_content_changed).
    pub fn set_on_editing_ended(&mut self, callback: impl Fn(Option<Rule>) + 'static) {
        self.clear_on_editing_ended();
        self.editing_ended = Some(self.install(FieldEvent::EditingEnded, Rc::new(callback)));
    }

    fn install(&self, event: FieldEvent, callback: Rc<dyn Fn(Option<Rule>)>) -> SubscriptionId {
        // The handler holds the field weakly: the field already owns the
        // handler through its registry, and a strong backreference would
        // cycle. An upgrade failure means the field is mid-teardown; the
        // firing is dropped rather than validated against freed state.
        let field = Rc::downgrade(&self.field);
        let rules = Rc::clone(&self.rules);
        let id = self.field.subscribe(
            event,
            Box::new(move || {
                let Some(field) = Weak::upgrade(&field) else {
                    return;
                };
                callback(rules.first_failure(&field.current_text()).cloned());
            }),
        );
        debug!(event = event.name(), "subscription installed");
        id
    }
}

impl<F: ObservableField> Drop for Binding<F> {
    fn drop(&mut self) {
        self.release();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::SingleLineInput;
    use crate::rules::{min_length, required};
    use std::cell::RefCell;

    fn recording_callback(
        log: &Rc<RefCell<Vec<Option<Rule>>>>,
    ) -> impl Fn(Option<Rule>) + 'static {
        let log = Rc::clone(log);
        move |outcome| log.borrow_mut().push(outcome)
    }

    #[test]
    fn test_validate_on_demand_without_subscriptions() {
        let field = Rc::new(SingleLineInput::with_text("ab"));
        let binding = bind(Rc::clone(&field), vec![required(), min_length(3)]);

        assert_eq!(binding.validate(), Some(min_length(3)));
        field.set_text("abc");
        assert_eq!(binding.validate(), None);
    }

    #[test]
    fn test_no_callback_means_no_subscription() {
        let field = Rc::new(SingleLineInput::new());
        let _binding = bind(Rc::clone(&field), vec![required()]);
        assert_eq!(field.events().listener_count(FieldEvent::ContentChanged), 0);
        assert_eq!(field.events().listener_count(FieldEvent::EditingEnded), 0);
    }

    #[test]
    fn test_content_changed_drives_callback() {
        let field = Rc::new(SingleLineInput::new());
        let mut binding = bind(Rc::clone(&field), vec![required()]);
        let log = Rc::new(RefCell::new(Vec::new()));
        binding.set_on_content_changed(recording_callback(&log));

        field.set_text("x");
        field.clear_text();
        assert_eq!(*log.borrow(), vec![None, Some(required())]);
    }

    #[test]
    fn test_editing_ended_drives_its_own_callback() {
        let field = Rc::new(SingleLineInput::new());
        let mut binding = bind(Rc::clone(&field), vec![required()]);
        let log = Rc::new(RefCell::new(Vec::new()));
        binding.set_on_editing_ended(recording_callback(&log));

        field.set_text("x"); // content change: not subscribed
        field.end_editing();
        assert_eq!(*log.borrow(), vec![None]);
    }

    #[test]
    fn test_release_is_idempotent() {
        let field = Rc::new(SingleLineInput::new());
        let mut binding = bind(Rc::clone(&field), vec![required()]);
        binding.set_on_content_changed(|_| {});
        binding.set_on_editing_ended(|_| {});

        binding.release();
        binding.release();
        assert_eq!(field.events().listener_count(FieldEvent::ContentChanged), 0);
        assert_eq!(field.events().listener_count(FieldEvent::EditingEnded), 0);
    }
}
