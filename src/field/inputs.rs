//! Built-in field adapters
//!
//! Each adapter bridges one widget kind to the [`ObservableField`]
//! capability: it stores the backing text, owns a private [`EventSource`],
//! and fires the two field events from its own mutation methods — the
//! in-crate stand-in for a host widget's native notifications.
//!
//! The backing value is `Option<String>` on purpose: a widget with no
//! text yet reads as `""`, never as an error.

use std::cell::RefCell;

use super::{EventHandler, EventSource, FieldEvent, ObservableField, SubscriptionId};

// ============================================================================
// SINGLE-LINE INPUT
// ============================================================================

/// Adapter for a single-line text widget.
///
/// Line breaks cannot occur in a single-line widget, so `set_text` strips
/// them; everything else is stored verbatim.
///
/// # Examples
///
/// ```
/// use field_validator::field::{ObservableField, SingleLineInput};
///
/// let field = SingleLineInput::new();
/// assert_eq!(field.current_text(), "");
///
/// field.set_text("one\ntwo");
/// assert_eq!(field.current_text(), "onetwo");
/// ```
#[derive(Default)]
pub struct SingleLineInput {
    text: RefCell<Option<String>>,
    events: EventSource,
}

impl SingleLineInput {
    /// Creates an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input holding `text` (no event fires for the initial
    /// value).
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let input = Self::new();
        *input.text.borrow_mut() = Some(strip_line_breaks(&text.into()));
        input
    }

    /// Replaces the text and fires [`FieldEvent::ContentChanged`].
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = Some(strip_line_breaks(&text.into()));
        self.events.emit(FieldEvent::ContentChanged);
    }

    /// Drops the backing value and fires [`FieldEvent::ContentChanged`].
    /// The field then reads as `""`.
    pub fn clear_text(&self) {
        *self.text.borrow_mut() = None;
        self.events.emit(FieldEvent::ContentChanged);
    }

    /// Ends the editing session and fires [`FieldEvent::EditingEnded`].
    pub fn end_editing(&self) {
        self.events.emit(FieldEvent::EditingEnded);
    }

    /// The widget's own notification registry.
    ///
    /// Lets a host fire or inspect the native events directly, the way a
    /// toolkit would.
    #[must_use]
    pub fn events(&self) -> &EventSource {
        &self.events
    }
}

impl ObservableField for SingleLineInput {
    fn current_text(&self) -> String {
        self.text.borrow().clone().unwrap_or_default()
    }

    fn subscribe(&self, event: FieldEvent, handler: EventHandler) -> SubscriptionId {
        self.events.subscribe(event, handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.events.unsubscribe(id);
    }
}

fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

// ============================================================================
// MULTI-LINE INPUT
// ============================================================================

/// Adapter for a multi-line text widget. Line breaks are preserved.
#[derive(Default)]
pub struct MultiLineInput {
    text: RefCell<Option<String>>,
    events: EventSource,
}

impl MultiLineInput {
    /// Creates an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input holding `text` (no event fires for the initial
    /// value).
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let input = Self::new();
        *input.text.borrow_mut() = Some(text.into());
        input
    }

    /// Replaces the text and fires [`FieldEvent::ContentChanged`].
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = Some(text.into());
        self.events.emit(FieldEvent::ContentChanged);
    }

    /// Drops the backing value and fires [`FieldEvent::ContentChanged`].
    pub fn clear_text(&self) {
        *self.text.borrow_mut() = None;
        self.events.emit(FieldEvent::ContentChanged);
    }

    /// Ends the editing session and fires [`FieldEvent::EditingEnded`].
    pub fn end_editing(&self) {
        self.events.emit(FieldEvent::EditingEnded);
    }

    /// The widget's own notification registry.
    #[must_use]
    pub fn events(&self) -> &EventSource {
        &self.events
    }
}

impl ObservableField for MultiLineInput {
    fn current_text(&self) -> String {
        self.text.borrow().clone().unwrap_or_default()
    }

    fn subscribe(&self, event: FieldEvent, handler: EventHandler) -> SubscriptionId {
        self.events.subscribe(event, handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.events.unsubscribe(id);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_absent_value_reads_as_empty() {
        let field = SingleLineInput::new();
        assert_eq!(field.current_text(), "");

        field.set_text("abc");
        assert_eq!(field.current_text(), "abc");

        field.clear_text();
        assert_eq!(field.current_text(), "");
    }

    #[test]
    fn test_single_line_strips_line_breaks() {
        let field = SingleLineInput::with_text("a\r\nb");
        assert_eq!(field.current_text(), "ab");
    }

    #[test]
    fn test_multi_line_keeps_line_breaks() {
        let field = MultiLineInput::with_text("a\nb");
        assert_eq!(field.current_text(), "a\nb");

        field.set_text("x\ny\nz");
        assert_eq!(field.current_text(), "x\ny\nz");
    }

    #[test]
    fn test_mutations_fire_events() {
        let field = SingleLineInput::new();
        let changed = Rc::new(Cell::new(0));
        let ended = Rc::new(Cell::new(0));

        let counter = Rc::clone(&changed);
        field.subscribe(
            FieldEvent::ContentChanged,
            Box::new(move || counter.set(counter.get() + 1)),
        );
        let counter = Rc::clone(&ended);
        field.subscribe(
            FieldEvent::EditingEnded,
            Box::new(move || counter.set(counter.get() + 1)),
        );

        field.set_text("a");
        field.clear_text();
        field.end_editing();

        assert_eq!(changed.get(), 2);
        assert_eq!(ended.get(), 1);
    }

    #[test]
    fn test_initial_value_fires_nothing() {
        let field = SingleLineInput::with_text("seed");
        let counter = Rc::new(Cell::new(0));
        let fired = Rc::clone(&counter);
        field.subscribe(
            FieldEvent::ContentChanged,
            Box::new(move || fired.set(fired.get() + 1)),
        );
        assert_eq!(field.current_text(), "seed");
        assert_eq!(counter.get(), 0);
    }
}
