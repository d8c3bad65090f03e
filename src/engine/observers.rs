//! Observer Registry - Explicit property-change subscriptions.
//!
//! Widgets do not intercept attribute writes. Instead the array setters call
//! [`notify`] after a value actually changed, and anything interested in a
//! widget's properties registers a callback here with [`subscribe`].
//!
//! # Example
//!
//! ```ignore
//! use spark_float::engine::observers::{subscribe, unsubscribe};
//! use spark_float::Property;
//!
//! let id = subscribe(index, Property::SIZE | Property::CHILDREN, |index, property| {
//!     println!("{index} changed {property:?}");
//! });
//!
//! unsubscribe(id);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::types::Property;

/// Observer callback: receives the widget index and the property that changed.
pub type Observer = Rc<dyn Fn(usize, Property)>;

/// Handle returned by [`subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    index: usize,
    serial: u64,
}

impl SubscriptionId {
    /// Index of the widget this subscription watches.
    pub fn index(&self) -> usize {
        self.index
    }
}

struct Subscription {
    serial: u64,
    properties: Property,
    callback: Observer,
}

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Subscriptions per widget index, in registration order.
    static SUBSCRIPTIONS: RefCell<HashMap<usize, Vec<Subscription>>> = RefCell::new(HashMap::new());

    static NEXT_SERIAL: Cell<u64> = const { Cell::new(0) };
}

// =============================================================================
// Subscribe / Unsubscribe
// =============================================================================

/// Watch `properties` on the widget at `index`.
pub fn subscribe<F>(index: usize, properties: Property, callback: F) -> SubscriptionId
where
    F: Fn(usize, Property) + 'static,
{
    let serial = NEXT_SERIAL.with(|next| {
        let serial = next.get();
        next.set(serial + 1);
        serial
    });

    SUBSCRIPTIONS.with(|subs| {
        subs.borrow_mut().entry(index).or_default().push(Subscription {
            serial,
            properties,
            callback: Rc::new(callback),
        });
    });

    SubscriptionId { index, serial }
}

/// Remove a subscription. Returns false if it was already gone.
pub fn unsubscribe(id: SubscriptionId) -> bool {
    SUBSCRIPTIONS.with(|subs| {
        let mut subs = subs.borrow_mut();
        let Some(list) = subs.get_mut(&id.index) else {
            return false;
        };
        let before = list.len();
        list.retain(|sub| sub.serial != id.serial);
        let removed = list.len() != before;
        if list.is_empty() {
            subs.remove(&id.index);
        }
        removed
    })
}

/// Drop every subscription on a widget. Called when the index is released.
pub fn unsubscribe_index(index: usize) {
    SUBSCRIPTIONS.with(|subs| {
        subs.borrow_mut().remove(&index);
    });
}

// =============================================================================
// Notification
// =============================================================================

/// Invoke every observer on `index` that watches `property`.
///
/// The matching callbacks are collected before any runs, so a callback may
/// freely subscribe, unsubscribe or write geometry.
pub fn notify(index: usize, property: Property) {
    let callbacks: Vec<Observer> = SUBSCRIPTIONS.with(|subs| {
        subs.borrow()
            .get(&index)
            .map(|list| {
                list.iter()
                    .filter(|sub| sub.properties.intersects(property))
                    .map(|sub| sub.callback.clone())
                    .collect()
            })
            .unwrap_or_default()
    });

    if callbacks.is_empty() {
        return;
    }

    tracing::trace!(index, ?property, observers = callbacks.len(), "notify");
    for callback in callbacks {
        callback(index, property);
    }
}

// =============================================================================
// Introspection / Reset
// =============================================================================

/// Number of live subscriptions on a widget.
pub fn subscription_count(index: usize) -> usize {
    SUBSCRIPTIONS.with(|subs| subs.borrow().get(&index).map_or(0, Vec::len))
}

/// Clear all subscriptions (for testing).
pub fn reset_observers() {
    SUBSCRIPTIONS.with(|subs| subs.borrow_mut().clear());
    NEXT_SERIAL.with(|next| next.set(0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_matches_flags() {
        reset_observers();

        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        subscribe(3, Property::SIZE | Property::CHILDREN, move |_, _| {
            hits_clone.set(hits_clone.get() + 1);
        });

        notify(3, Property::SIZE);
        notify(3, Property::CHILDREN);
        notify(3, Property::POSITION);
        notify(4, Property::SIZE);

        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        reset_observers();

        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        let id = subscribe(0, Property::SIZE, move |_, _| {
            hits_clone.set(hits_clone.get() + 1);
        });

        assert_eq!(id.index(), 0);
        assert_eq!(subscription_count(0), 1);
        assert!(unsubscribe(id));
        assert!(!unsubscribe(id));
        assert_eq!(subscription_count(0), 0);

        notify(0, Property::SIZE);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_callback_can_unsubscribe_itself() {
        reset_observers();

        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
        let slot_clone = slot.clone();
        let id = subscribe(1, Property::SIZE, move |_, _| {
            if let Some(id) = slot_clone.get() {
                unsubscribe(id);
            }
        });
        slot.set(Some(id));

        notify(1, Property::SIZE);
        assert_eq!(subscription_count(1), 0);
    }

    #[test]
    fn test_callback_receives_index_and_property() {
        reset_observers();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        subscribe(7, Property::all(), move |index, property| {
            seen_clone.borrow_mut().push((index, property));
        });

        notify(7, Property::POS_HINT);
        assert_eq!(*seen.borrow(), vec![(7, Property::POS_HINT)]);
    }
}
