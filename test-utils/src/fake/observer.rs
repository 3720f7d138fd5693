//! Observer that forwards every event into a channel for assertions.

use std::sync::Arc;

use courier_bridge::observer::Observer;
use tokio::sync::mpsc;

/// Captures a service's events for a test to receive in order.
pub struct CapturingObserver<E> {
    tx: mpsc::UnboundedSender<E>,
}

impl<E: Send + 'static> CapturingObserver<E> {
    /// Builds the observer and the receiving end of its event stream.
    pub fn channel() -> (Arc<Self>, mpsc::UnboundedReceiver<E>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

impl<E: Send + 'static> Observer<E> for CapturingObserver<E> {
    fn notify(&self, event: E) {
        // The receiver may already be gone when a test only cares about the
        // first few events.
        let _ = self.tx.send(event);
    }
}
