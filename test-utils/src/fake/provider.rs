//! Scriptable location provider.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use courier_bridge::location::provider::{
    LocationProvider, ProviderUpdate, TrackerSettings,
};
use courier_bridge::model::location::{LocationFix, ProviderKind};
use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Provider whose fixes and availability are driven by the test.
pub struct ScriptedProvider {
    kind: ProviderKind,
    enabled: AtomicBool,
    last_known: Mutex<Option<LocationFix>>,
    senders: Mutex<Vec<mpsc::Sender<ProviderUpdate>>>,
}

impl ScriptedProvider {
    pub fn new(kind: ProviderKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            enabled: AtomicBool::new(true),
            last_known: Mutex::new(None),
            senders: Mutex::new(Vec::new()),
        })
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn set_last_known(&self, fix: LocationFix) {
        *self.last_known.lock() = Some(fix);
    }

    /// Delivers a fix to every active subscription and remembers it as the
    /// platform's cached last-known fix.
    pub fn push_fix(&self, fix: LocationFix) {
        *self.last_known.lock() = Some(fix);
        for sender in self.senders.lock().iter() {
            let _ = sender.try_send(ProviderUpdate::Fix(fix));
        }
    }

    /// Switches the source off mid-session and tells subscribers.
    pub fn disable(&self) {
        self.set_enabled(false);
        for sender in self.senders.lock().iter() {
            let _ = sender.try_send(ProviderUpdate::Disabled(self.kind));
        }
    }
}

impl LocationProvider for ScriptedProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn last_known(&self) -> Option<LocationFix> {
        *self.last_known.lock()
    }

    fn subscribe(&self, _settings: TrackerSettings) -> mpsc::Receiver<ProviderUpdate> {
        let (tx, rx) = mpsc::channel(32);
        self.senders.lock().push(tx);
        rx
    }
}
