//! The observable-field capability and its adapters
//!
//! [`ObservableField`] is the seam between the validation engine and a
//! host input widget: current text plus two subscribable event kinds. The
//! binder is written once against this trait, never against a widget.
//!
//! [`EventSource`] is a per-instance subscriber registry — each field owns
//! its own event dispatch, so subscription lifetime is scoped to the field
//! and its binding rather than to a process-wide bus.
//!
//! Two adapters ship with the crate: [`SingleLineInput`] and
//! [`MultiLineInput`]. They double as minimal in-crate widgets, which
//! keeps the engine exercisable without any host toolkit.

mod events;
mod inputs;

pub use events::EventSource;
pub use inputs::{MultiLineInput, SingleLineInput};

// ============================================================================
// EVENT KINDS
// ============================================================================

/// The two notifications a validated field must surface.
///
/// Both are read from the host widget's own change-notification facility;
/// the engine only cares that they fired, never about a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEvent {
    /// The field's text changed.
    ContentChanged,
    /// The field stopped being edited (lost focus, editing session ended).
    EditingEnded,
}

impl FieldEvent {
    /// Stable name for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FieldEvent::ContentChanged => "content_changed",
            FieldEvent::EditingEnded => "editing_ended",
        }
    }
}

// ============================================================================
// SUBSCRIPTION HANDLE
// ============================================================================

/// Opaque handle identifying one live subscription on one field.
///
/// Returned by [`ObservableField::subscribe`] and redeemed by
/// [`ObservableField::unsubscribe`]. Handles are never reused by an
/// [`EventSource`], so a stale handle unsubscribes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Callback invoked when a subscribed event fires.
///
/// Carries no payload: the subscriber reads whatever state it needs from
/// the field itself.
pub type EventHandler = Box<dyn Fn()>;

// ============================================================================
// OBSERVABLE FIELD TRAIT
// ============================================================================

/// Capability a host input widget must satisfy to be validated.
///
/// One adapter per widget kind implements this; different widgets use
/// their own native notification plumbing but expose identical semantics
/// here.
///
/// # Contract
///
/// - `current_text` returns the empty string when the widget has no
///   backing value; absence is not an error.
/// - `subscribe` registers a handler for one event kind and returns a
///   handle owned by the caller.
/// - `unsubscribe` releases that handle; releasing an unknown or
///   already-released handle is a no-op.
pub trait ObservableField {
    /// The field's current text, `""` when absent.
    fn current_text(&self) -> String;

    /// Registers `handler` to run each time `event` fires.
    fn subscribe(&self, event: FieldEvent, handler: EventHandler) -> SubscriptionId;

    /// Releases a previously returned subscription handle.
    fn unsubscribe(&self, id: SubscriptionId);
}
