//! Thread-safe store.
//!
//! Dispatches are serialized behind a single writer lock while readers
//! keep loading the last published snapshot.

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{ReentrantMutex, RwLock};
use tracing::{debug, warn};

use super::action::Action;
use super::error::StoreError;
use super::reducer::Reducer;

type SyncListener<S> = Arc<dyn Fn(&Arc<S>) + Send + Sync>;

struct SyncEntry<S> {
    id: u64,
    active: Arc<AtomicBool>,
    listener: SyncListener<S>,
}

struct SyncListeners<S> {
    next_id: u64,
    entries: Vec<SyncEntry<S>>,
}

/// Store that can be shared across threads.
///
/// `dispatch` calls from different threads run one at a time. A dispatch
/// issued from a subscriber on the dispatching thread is rejected with
/// [`StoreError::ReentrantDispatch`].
pub struct SyncStore<R: Reducer> {
    /// Held for the whole dispatch; the flag marks an active dispatch on the
    /// owning thread.
    writer: ReentrantMutex<Cell<bool>>,
    state: RwLock<Arc<R::State>>,
    listeners: Arc<RwLock<SyncListeners<R::State>>>,
}

impl<R: Reducer> SyncStore<R> {
    /// Create a store starting from `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            writer: ReentrantMutex::new(Cell::new(false)),
            state: RwLock::new(Arc::new(initial)),
            listeners: Arc::new(RwLock::new(SyncListeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Create a store seeded by running the root reducer once with the
    /// default state and the no-op action.
    pub fn with_defaults() -> Self {
        Self::new(R::init())
    }

    /// Last published snapshot. Never blocks on a running reducer.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&self.state.read())
    }

    /// Apply `action` through the root reducer, publish the new snapshot,
    /// then notify subscribers in registration order.
    ///
    /// Waits for a dispatch running on another thread to finish first.
    pub fn dispatch(&self, action: R::Action) -> Result<R::Action, StoreError> {
        let writer = self.writer.lock();
        if writer.replace(true) {
            warn!(action = action.kind(), "rejecting reentrant dispatch");
            return Err(StoreError::ReentrantDispatch {
                action: action.kind(),
            });
        }
        scopeguard::defer! {
            writer.set(false);
        }

        let current = self.get_state();
        let next = Arc::new(R::reduce((*current).clone(), &action));
        *self.state.write() = Arc::clone(&next);

        // Subscribers added while notifying run from the next dispatch;
        // unsubscribed ones are skipped immediately.
        let listeners: Vec<(Arc<AtomicBool>, SyncListener<R::State>)> = self
            .listeners
            .read()
            .entries
            .iter()
            .map(|entry| (Arc::clone(&entry.active), Arc::clone(&entry.listener)))
            .collect();

        debug!(
            action = action.kind(),
            subscribers = listeners.len(),
            "dispatched action"
        );

        for (active, listener) in listeners {
            if active.load(Ordering::Acquire) {
                listener(&next);
            }
        }

        Ok(action)
    }

    /// Register `listener` to run after every dispatch with the new snapshot.
    ///
    /// The returned handle removes it again; dropping the handle does not.
    pub fn subscribe<F>(&self, listener: F) -> SyncSubscription<R>
    where
        F: Fn(&Arc<R::State>) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.write();
        let id = listeners.next_id;
        listeners.next_id += 1;
        let active = Arc::new(AtomicBool::new(true));
        listeners.entries.push(SyncEntry {
            id,
            active: Arc::clone(&active),
            listener: Arc::new(listener),
        });

        SyncSubscription {
            id,
            active,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.read().entries.len()
    }
}

impl<R: Reducer> Default for SyncStore<R> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Handle returned by [`SyncStore::subscribe`].
pub struct SyncSubscription<R: Reducer> {
    id: u64,
    active: Arc<AtomicBool>,
    listeners: Weak<RwLock<SyncListeners<R::State>>>,
}

impl<R: Reducer> SyncSubscription<R> {
    /// Remove the subscriber. Calling this more than once is a no-op.
    pub fn unsubscribe(&self) {
        self.active.store(false, Ordering::Release);
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.write().entries.retain(|entry| entry.id != self.id);
        }
    }
}
