//! Single-threaded store.
//!
//! The store owns the current state snapshot and the subscriber list.
//! State only changes through [`Store::dispatch`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use super::action::Action;
use super::error::StoreError;
use super::reducer::Reducer;

type Listener<R> = Rc<dyn Fn(&Store<R>)>;

/// A registered subscriber. `active` is cleared by `unsubscribe`, so a
/// notification pass already under way skips it.
struct Entry<R: Reducer> {
    id: u64,
    active: Rc<Cell<bool>>,
    listener: Listener<R>,
}

struct Listeners<R: Reducer> {
    next_id: u64,
    entries: Vec<Entry<R>>,
}

/// Holds the current state and applies the root reducer on dispatch.
///
/// Dispatch is synchronous. A dispatch issued while another one is still
/// running on the same store (typically from a subscriber) is rejected
/// with [`StoreError::ReentrantDispatch`] and leaves state untouched.
pub struct Store<R: Reducer> {
    state: RefCell<Rc<R::State>>,
    listeners: Rc<RefCell<Listeners<R>>>,
    dispatching: Cell<bool>,
}

impl<R: Reducer> Store<R> {
    /// Create a store starting from `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial)),
            listeners: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
            dispatching: Cell::new(false),
        }
    }

    /// Create a store seeded by running the root reducer once with the
    /// default state and the no-op action.
    pub fn with_defaults() -> Self {
        trace!(action = <R::Action as Action>::noop().kind(), "seeding store defaults");
        Self::new(R::init())
    }

    /// Current state snapshot.
    ///
    /// Snapshots are never mutated: a later dispatch publishes a new one.
    pub fn get_state(&self) -> Rc<R::State> {
        Rc::clone(&self.state.borrow())
    }

    /// Apply `action` through the root reducer, then notify subscribers in
    /// registration order.
    ///
    /// Returns the dispatched action so callers can read back generated
    /// fields.
    pub fn dispatch(&self, action: R::Action) -> Result<R::Action, StoreError> {
        if self.dispatching.replace(true) {
            warn!(action = action.kind(), "rejecting reentrant dispatch");
            return Err(StoreError::ReentrantDispatch {
                action: action.kind(),
            });
        }
        scopeguard::defer! {
            self.dispatching.set(false);
        }

        // The published snapshot stays in place until the reducer returns.
        let current = self.get_state();
        let next = R::reduce((*current).clone(), &action);
        *self.state.borrow_mut() = Rc::new(next);

        // Subscribers added while notifying run from the next dispatch;
        // unsubscribed ones are skipped immediately.
        let listeners: Vec<(Rc<Cell<bool>>, Listener<R>)> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|entry| (Rc::clone(&entry.active), Rc::clone(&entry.listener)))
            .collect();

        debug!(
            action = action.kind(),
            subscribers = listeners.len(),
            "dispatched action"
        );

        for (active, listener) in listeners {
            if active.get() {
                listener(self);
            }
        }

        Ok(action)
    }

    /// Register `listener` to run after every dispatch.
    ///
    /// The returned handle removes it again; dropping the handle does not.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<R>
    where
        F: Fn(&Store<R>) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        let active = Rc::new(Cell::new(true));
        listeners.entries.push(Entry {
            id,
            active: Rc::clone(&active),
            listener: Rc::new(listener),
        });

        Subscription {
            id,
            active,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Handle returned by [`Store::subscribe`].
pub struct Subscription<R: Reducer> {
    id: u64,
    active: Rc<Cell<bool>>,
    listeners: Weak<RefCell<Listeners<R>>>,
}

impl<R: Reducer> Subscription<R> {
    /// Remove the subscriber. Calling this more than once is a no-op.
    pub fn unsubscribe(&self) {
        self.active.set(false);
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|entry| entry.id != self.id);
        }
    }
}
