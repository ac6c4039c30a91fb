//! # Observers
//!
//! A small subscribe/unsubscribe registry. `Store` publishes state changes
//! through it and `StackNavigator` publishes path changes through it.
//!
//! Notification snapshots the observer list before calling out, so an
//! observer may subscribe, unsubscribe, or trigger another notification
//! without tripping a `RefCell` borrow. A nested notification publishes the
//! newer value to everyone, so the outer one stops as soon as its value is
//! no longer current.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Token returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

type Callback<T> = Rc<dyn Fn(&T)>;

pub(crate) struct Observers<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(SubscriptionId, Callback<T>)>>,
}

impl<T> Observers<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn add(&self, observer: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.entries.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    pub(crate) fn remove(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(existing, _)| *existing != id);
        entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Calls each observer with `value` while `is_current` holds.
    pub(crate) fn notify_while(&self, value: &T, is_current: impl Fn() -> bool) {
        let snapshot: Vec<Callback<T>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in snapshot {
            if !is_current() {
                break;
            }
            callback(value);
        }
    }
}
