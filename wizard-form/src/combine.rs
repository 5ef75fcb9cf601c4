//! Combine-latest over three state cells.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::signal::Signal;
use crate::state::State;

/// Joins the latest values of three [`State`] cells into one [`Signal`].
///
/// The output is seeded with the cells' values at construction time and
/// re-emits whenever a write produces a tuple different from the last one
/// emitted. While a [`HoldGuard`] is alive, writes only update the cached
/// tuple; the guard flushes at most one emission when the last hold ends.
pub struct CombineLatest3<A, B, C> {
    latest: Arc<Mutex<(A, B, C)>>,
    holds: Arc<AtomicUsize>,
    output: Signal<(A, B, C)>,
}

/// Combine three cells; see [`CombineLatest3`].
pub fn combine_latest3<A, B, C>(a: &State<A>, b: &State<B>, c: &State<C>) -> CombineLatest3<A, B, C>
where
    A: Clone + PartialEq + Send + Sync + 'static,
    B: Clone + PartialEq + Send + Sync + 'static,
    C: Clone + PartialEq + Send + Sync + 'static,
{
    let seed = (a.get(), b.get(), c.get());
    let combined = CombineLatest3 {
        latest: Arc::new(Mutex::new(seed.clone())),
        holds: Arc::new(AtomicUsize::new(0)),
        output: Signal::new(seed),
    };

    let on_a = combined.clone();
    a.subscribe(move |value| {
        on_a.latest().0 = value.clone();
        on_a.flush();
    });
    let on_b = combined.clone();
    b.subscribe(move |value| {
        on_b.latest().1 = value.clone();
        on_b.flush();
    });
    let on_c = combined.clone();
    c.subscribe(move |value| {
        on_c.latest().2 = value.clone();
        on_c.flush();
    });

    combined
}

impl<A, B, C> CombineLatest3<A, B, C>
where
    A: Clone + PartialEq + Send + Sync + 'static,
    B: Clone + PartialEq + Send + Sync + 'static,
    C: Clone + PartialEq + Send + Sync + 'static,
{
    /// The combined stream.
    pub fn signal(&self) -> Signal<(A, B, C)> {
        self.output.clone()
    }

    /// Suspend emissions until the returned guard (and any other live
    /// guard) is dropped.
    pub fn hold(&self) -> HoldGuard<A, B, C> {
        self.holds.fetch_add(1, Ordering::SeqCst);
        HoldGuard {
            combined: self.clone(),
        }
    }

    fn flush(&self) {
        if self.holds.load(Ordering::SeqCst) > 0 {
            log::trace!("combine_latest3: write deferred by hold");
            return;
        }
        let snapshot = self.latest().clone();
        let changed = self.output.with(|last| *last != snapshot);
        if changed {
            self.output.emit(snapshot);
        }
    }

    fn latest(&self) -> std::sync::MutexGuard<'_, (A, B, C)> {
        self.latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<A, B, C> Clone for CombineLatest3<A, B, C> {
    fn clone(&self) -> Self {
        Self {
            latest: Arc::clone(&self.latest),
            holds: Arc::clone(&self.holds),
            output: self.output.clone(),
        }
    }
}

/// Keeps a [`CombineLatest3`] from emitting while alive.
pub struct HoldGuard<A, B, C>
where
    A: Clone + PartialEq + Send + Sync + 'static,
    B: Clone + PartialEq + Send + Sync + 'static,
    C: Clone + PartialEq + Send + Sync + 'static,
{
    combined: CombineLatest3<A, B, C>,
}

impl<A, B, C> Drop for HoldGuard<A, B, C>
where
    A: Clone + PartialEq + Send + Sync + 'static,
    B: Clone + PartialEq + Send + Sync + 'static,
    C: Clone + PartialEq + Send + Sync + 'static,
{
    fn drop(&mut self) {
        if self.combined.holds.fetch_sub(1, Ordering::SeqCst) == 1 {
            log::trace!("combine_latest3: last hold released");
            self.combined.flush();
        }
    }
}
