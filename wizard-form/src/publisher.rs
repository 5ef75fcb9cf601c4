//! Synchronous fan-out of values to registered subscribers.
//!
//! Sending a value calls every subscriber, in registration order, before
//! `send` returns. A value sent from inside a subscriber is queued and
//! delivered after the current pass completes, so every subscriber sees
//! values in the same order and the last value each one sees is the newest.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Identifies a subscription so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Whether a subscriber wants further deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delivery {
    Keep,
    Drop,
}

type Callback<T> = Arc<dyn Fn(&T) -> Delivery + Send + Sync>;

/// Values waiting for delivery, and whether a drain loop is running.
struct Pending<T> {
    queue: VecDeque<T>,
    delivering: bool,
}

struct Subscribers<T> {
    next_id: AtomicU64,
    entries: Mutex<Vec<(SubscriptionId, Callback<T>)>>,
    pending: Mutex<Pending<T>>,
}

/// A multicast channel that delivers each value to all current subscribers.
///
/// Cloning a `Publisher` yields another handle to the same subscriber list.
pub struct Publisher<T> {
    inner: Arc<Subscribers<T>>,
}

impl<T> Publisher<T> {
    /// Create a publisher with no subscribers.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Subscribers {
                next_id: AtomicU64::new(0),
                entries: Mutex::new(Vec::new()),
                pending: Mutex::new(Pending {
                    queue: VecDeque::new(),
                    delivering: false,
                }),
            }),
        }
    }

    /// Register a subscriber. It is called for every value sent afterwards.
    pub fn subscribe<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribe_while(move |value| {
            f(value);
            Delivery::Keep
        })
    }

    /// Register a subscriber that removes itself by returning `Delivery::Drop`.
    pub(crate) fn subscribe_while<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&T) -> Delivery + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries().push((id, Arc::new(f)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.entries().len()
    }

    /// Deliver `value` to every subscriber.
    ///
    /// If a delivery is already in progress (a subscriber is sending), the
    /// value is queued and this call returns immediately; the outer `send`
    /// delivers it once the current pass is over.
    pub fn send(&self, value: &T)
    where
        T: Clone,
    {
        {
            let mut pending = self.pending();
            pending.queue.push_back(value.clone());
            if pending.delivering {
                return;
            }
            pending.delivering = true;
        }

        let _drain = DrainGuard { publisher: self };
        while let Some(next) = self.next_pending() {
            self.deliver(&next);
        }
    }

    /// Pop the next queued value, ending the drain loop when none is left.
    fn next_pending(&self) -> Option<T> {
        let mut pending = self.pending();
        let next = pending.queue.pop_front();
        if next.is_none() {
            pending.delivering = false;
        }
        next
    }

    /// One pass over a snapshot of the subscriber list.
    fn deliver(&self, value: &T) {
        let snapshot: Vec<(SubscriptionId, Callback<T>)> = self.entries().clone();

        let finished: Vec<SubscriptionId> = snapshot
            .iter()
            .filter(|(_, callback)| callback(value) == Delivery::Drop)
            .map(|(id, _)| *id)
            .collect();

        if !finished.is_empty() {
            self.entries().retain(|(id, _)| !finished.contains(id));
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Callback<T>)>> {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn pending(&self) -> MutexGuard<'_, Pending<T>> {
        self.inner
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Resets the drain state if a subscriber panics mid-delivery.
struct DrainGuard<'a, T> {
    publisher: &'a Publisher<T>,
}

impl<T> Drop for DrainGuard<'_, T> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut pending = self.publisher.pending();
            pending.queue.clear();
            pending.delivering = false;
        }
    }
}

impl<T> Clone for Publisher<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
