//! Single-slot observer registration shared by the feature services and the
//! location tracker.
//!
//! Every service holds exactly one observer at a time. Subscribing replaces
//! the current observer (last writer wins), but registration is explicit: it
//! returns a [`Subscription`] handle, and dropping or cancelling the handle
//! clears only its own registration, so a later subscriber is never knocked
//! out by an earlier handle going away.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// Receives a feature's tagged events.
///
/// Events arrive on whatever task completed the underlying operation, never
/// necessarily on the thread that submitted it. Implementations must hand
/// off to the UI layer themselves if they need thread affinity.
pub trait Observer<E>: Send + Sync + 'static {
    fn notify(&self, event: E);
}

impl<E, F> Observer<E> for F
where
    F: Fn(E) + Send + Sync + 'static,
{
    fn notify(&self, event: E) {
        self(event)
    }
}

struct CellInner<E> {
    slot: Mutex<Option<(u64, Arc<dyn Observer<E>>)>>,
    next_token: AtomicU64,
}

/// The single observer slot a service owns.
#[derive(Clone)]
pub(crate) struct ObserverCell<E> {
    inner: Arc<CellInner<E>>,
}

impl<E: 'static> ObserverCell<E> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(CellInner {
                slot: Mutex::new(None),
                next_token: AtomicU64::new(0),
            }),
        }
    }

    /// Installs `observer`, replacing any current registration.
    pub(crate) fn subscribe(&self, observer: Arc<dyn Observer<E>>) -> Subscription {
        let token = self.inner.next_token.fetch_add(1, Ordering::Relaxed);
        *self.inner.slot.lock() = Some((token, observer));

        let weak: Weak<CellInner<E>> = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut slot = inner.slot.lock();
                    if matches!(*slot, Some((current, _)) if current == token) {
                        *slot = None;
                    }
                }
            })),
        }
    }

    /// Delivers `event` to the current observer, if any.
    ///
    /// The observer reference is cloned out before invocation so a callback
    /// can re-subscribe without deadlocking on the slot.
    pub(crate) fn emit(&self, event: E) {
        let observer = self.inner.slot.lock().as_ref().map(|(_, o)| Arc::clone(o));
        if let Some(observer) = observer {
            observer.notify(event);
        }
    }
}

/// Handle for one observer registration.
///
/// Dropping it unsubscribes, unless a newer subscriber has already taken the
/// slot. Call [`Subscription::cancel`] to unsubscribe explicitly.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
