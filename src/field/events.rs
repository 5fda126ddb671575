//! Per-instance event dispatch for field adapters

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

use super::{EventHandler, FieldEvent, SubscriptionId};

struct Listener {
    id: SubscriptionId,
    event: FieldEvent,
    handler: Rc<dyn Fn()>,
}

/// A subscriber registry owned by one field adapter.
///
/// Each adapter embeds its own `EventSource`, so notification traffic is
/// strictly per-field: no global registry, no name-based lookup, and
/// subscription lifetime ends with the field.
///
/// Handler ids are monotonically increasing and never reused. Emission
/// snapshots the matching handlers before invoking any of them, so a
/// handler may subscribe or unsubscribe on the same source reentrantly.
///
/// # Examples
///
/// ```
/// use field_validator::field::{EventSource, FieldEvent};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let source = EventSource::new();
/// let fired = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&fired);
/// let id = source.subscribe(
///     FieldEvent::ContentChanged,
///     Box::new(move || counter.set(counter.get() + 1)),
/// );
///
/// source.emit(FieldEvent::ContentChanged);
/// source.emit(FieldEvent::EditingEnded); // different kind, not delivered
/// assert_eq!(fired.get(), 1);
///
/// source.unsubscribe(id);
/// source.emit(FieldEvent::ContentChanged);
/// assert_eq!(fired.get(), 1);
/// ```
#[derive(Default)]
pub struct EventSource {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<Listener>>,
}

impl EventSource {
    /// Creates an empty event source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `event` and returns its handle.
    pub fn subscribe(&self, event: FieldEvent, handler: EventHandler) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            event,
            handler: Rc::from(handler),
        });
        trace!(event = event.name(), ?id, "listener registered");
        id
    }

    /// Removes the listener behind `id`. Unknown ids are ignored, so
    /// releasing twice is a no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|l| l.id != id);
    }

    /// Invokes, in registration order, every handler subscribed to `event`.
    pub fn emit(&self, event: FieldEvent) {
        let snapshot: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.event == event)
            .map(|l| Rc::clone(&l.handler))
            .collect();
        trace!(event = event.name(), listeners = snapshot.len(), "emit");
        for handler in snapshot {
            handler();
        }
    }

    /// Number of live listeners for `event`.
    #[must_use]
    pub fn listener_count(&self, event: FieldEvent) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.event == event)
            .count()
    }
}

// ============================================================================
// TESTS
// ============================================================================
