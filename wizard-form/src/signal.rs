//! Read-only, current-value streams.

use futures::Stream;
use tokio::sync::mpsc;

use crate::publisher::{Delivery, SubscriptionId};
use crate::state::State;

/// A read-only view of a value that changes over time.
///
/// Unlike a bare [`Publisher`](crate::publisher::Publisher), a signal always
/// has a current value, so a late subscriber can start from it with
/// [`Signal::watch`]. Only the code that created the signal can emit.
#[derive(Debug)]
pub struct Signal<T> {
    state: State<T>,
}

impl<T> Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(initial: T) -> Self {
        Self {
            state: State::new(initial),
        }
    }

    pub(crate) fn emit(&self, value: T) {
        self.state.set(value);
    }

    /// The most recently emitted value (or the seed).
    pub fn get(&self) -> T {
        self.state.get()
    }

    /// Borrow the most recently emitted value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.state.with(f)
    }

    /// Call `f` for every later emission.
    pub fn subscribe<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.state.subscribe(f)
    }

    /// Call `f` with the current value now, then for every later emission.
    pub fn watch<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.state.with(&f);
        self.state.subscribe(f)
    }

    /// Remove a subscription created by [`Signal::subscribe`] or [`Signal::watch`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Derive a signal whose value is `f` applied to this one.
    ///
    /// The derived signal is seeded immediately and re-emits once per
    /// emission of `self`.
    pub fn map<U, F>(&self, f: F) -> Signal<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let mapped = Signal::new(self.state.with(&f));
        let target = mapped.clone();
        self.state.subscribe(move |value| target.emit(f(value)));
        mapped
    }

    /// Receive the current value and every later emission over a channel.
    ///
    /// The subscription is dropped on the first emission after the receiver
    /// is closed.
    pub fn channel(&self) -> mpsc::UnboundedReceiver<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        // Receiver is alive, so priming cannot fail.
        let _ = tx.send(self.get());
        self.state.publisher().subscribe_while(move |value| {
            if tx.send(value.clone()).is_ok() {
                Delivery::Keep
            } else {
                Delivery::Drop
            }
        });
        rx
    }

    /// [`Signal::channel`] as a `futures::Stream`.
    pub fn stream(&self) -> impl Stream<Item = T> + Send + 'static {
        futures::stream::unfold(self.channel(), |mut rx| async move {
            rx.recv().await.map(|value| (value, rx))
        })
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.state.publisher().subscriber_count()
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
