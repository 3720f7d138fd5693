//! Scriptable permission probe.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use courier_bridge::location::provider::PermissionProbe;

/// Permission probe answering from a flag tests can flip.
pub struct StaticPermissions {
    granted: AtomicBool,
}

impl StaticPermissions {
    pub fn granted() -> Arc<Self> {
        Arc::new(Self {
            granted: AtomicBool::new(true),
        })
    }

    pub fn denied() -> Arc<Self> {
        Arc::new(Self {
            granted: AtomicBool::new(false),
        })
    }

    pub fn set_granted(&self, granted: bool) {
        self.granted.store(granted, Ordering::SeqCst);
    }
}

impl PermissionProbe for StaticPermissions {
    fn location_granted(&self) -> bool {
        self.granted.load(Ordering::SeqCst)
    }
}
