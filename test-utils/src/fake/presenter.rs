//! Recording notification presenter with correlation-id replacement.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use courier_bridge::notify::{NotificationPresenter, Presentation};
use parking_lot::Mutex;

/// Presenter that records what a real notification surface would show.
///
/// Honors the presenter contract: presenting a correlation id again replaces
/// the visible entry instead of stacking a second one.
pub struct RecordingPresenter {
    visible: Mutex<Vec<Presentation>>,
    total: AtomicUsize,
}

impl RecordingPresenter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            visible: Mutex::new(Vec::new()),
            total: AtomicUsize::new(0),
        })
    }

    /// Currently visible presentations, after replacement.
    pub fn visible(&self) -> Vec<Presentation> {
        self.visible.lock().clone()
    }

    /// Total number of `present` calls, including replacements.
    pub fn presented_count(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

impl NotificationPresenter for RecordingPresenter {
    fn present(&self, presentation: Presentation) {
        self.total.fetch_add(1, Ordering::SeqCst);
        let mut visible = self.visible.lock();
        if let Some(existing) = visible
            .iter_mut()
            .find(|shown| shown.correlation_id == presentation.correlation_id)
        {
            *existing = presentation;
        } else {
            visible.push(presentation);
        }
    }
}
