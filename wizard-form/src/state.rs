use std::sync::{Arc, RwLock};

use crate::publisher::{Publisher, SubscriptionId};

/// Observable state cell with interior mutability.
///
/// `State<T>` uses `Arc<RwLock<T>>` internally, so it is cheap to clone and
/// every clone refers to the same value. Each write is published to the
/// cell's subscribers after the lock has been released.
///
/// # Example
///
/// ```
/// use wizard_form::state::State;
///
/// let name = State::new(String::new());
/// name.subscribe(|value| println!("name is now {value}"));
/// name.set("Wizard1".to_string());
/// assert_eq!(name.get(), "Wizard1");
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    changes: Publisher<T>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            changes: Publisher::new(),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value and notify subscribers
    pub fn set(&self, value: T)
    where
        T: Clone,
    {
        self.update(|current| *current = value);
    }

    /// Update the value using a closure, then notify subscribers
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
        T: Clone,
    {
        let snapshot = {
            let mut guard = self
                .inner
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            f(&mut guard);
            guard.clone()
        };
        self.changes.send(&snapshot);
    }

    /// Register a callback for every later write
    pub fn subscribe<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.changes.subscribe(f)
    }

    /// Remove a callback registered with [`State::subscribe`]
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.changes.unsubscribe(id)
    }

    pub(crate) fn publisher(&self) -> &Publisher<T> {
        &self.changes
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            changes: self.changes.clone(),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
