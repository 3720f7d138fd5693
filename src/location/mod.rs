//! Location tracking with cross-provider arbitration.
//!
//! The tracker subscribes to every enabled provider concurrently and funnels
//! their updates through one arbitration task. A fix is surfaced only when
//! it is strictly newer than the last fix surfaced from *any* provider in
//! this session: last-fix-wins across providers, not per-provider
//! buffering. A fix captured at the same instant as the watermark is
//! dropped; the fix already surfaced wins the tie.
//!
//! Every surfaced fix goes to the registered observer and onward to the
//! backend as a location-update row. A failed upstream write is logged and
//! surfaced as a non-fatal error event; it never stops the session.

pub mod provider;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::backend::{self, BackendClient};
use crate::error::location::LocationError;
use crate::model::location::{LocationFix, LocationUpdate};
use crate::observer::{Observer, ObserverCell, Subscription};
use crate::session::SessionContext;
use provider::{LocationProvider, PermissionProbe, ProviderUpdate, TrackerSettings};

/// Lifecycle of a tracking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Stopped,
    Requesting,
    Active,
    /// A provider dropped out mid-session. The tracker stays here, without
    /// retrying, until `stop()` is called.
    Error,
}

/// Events delivered to the tracker's observer.
#[derive(Debug, Clone)]
pub enum LocationEvent {
    Fix(LocationFix),
    /// Non-fatal unless the state moved to [`TrackerState::Error`]; the
    /// message is user-presentable.
    Error(String),
}

struct TrackerInner {
    providers: Vec<Arc<dyn LocationProvider>>,
    permissions: Arc<dyn PermissionProbe>,
    backend: BackendClient,
    session: SessionContext,
    settings: TrackerSettings,
    observer: ObserverCell<LocationEvent>,
    state: Mutex<TrackerState>,
    /// Freshest fix surfaced this session; the arbitration watermark.
    watermark: Mutex<Option<LocationFix>>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

#[derive(Clone)]
pub struct LocationTracker {
    inner: Arc<TrackerInner>,
}

impl LocationTracker {
    pub fn new(
        providers: Vec<Arc<dyn LocationProvider>>,
        permissions: Arc<dyn PermissionProbe>,
        backend: BackendClient,
        session: SessionContext,
    ) -> Self {
        Self::with_settings(
            providers,
            permissions,
            backend,
            session,
            TrackerSettings::default(),
        )
    }

    pub fn with_settings(
        providers: Vec<Arc<dyn LocationProvider>>,
        permissions: Arc<dyn PermissionProbe>,
        backend: BackendClient,
        session: SessionContext,
        settings: TrackerSettings,
    ) -> Self {
        Self {
            inner: Arc::new(TrackerInner {
                providers,
                permissions,
                backend,
                session,
                settings,
                observer: ObserverCell::new(),
                state: Mutex::new(TrackerState::Stopped),
                watermark: Mutex::new(None),
                tasks: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Registers the observer that receives fixes and errors, replacing any
    /// previous registration.
    pub fn subscribe(&self, observer: Arc<dyn Observer<LocationEvent>>) -> Subscription {
        self.inner.observer.subscribe(observer)
    }

    pub fn state(&self) -> TrackerState {
        *self.inner.state.lock()
    }

    /// Starts a tracking session.
    ///
    /// Fails fast, with no state transition and no provider subscription,
    /// when permission is missing or no provider is enabled. A start while a
    /// session is already running is a no-op.
    pub fn start(&self) -> Result<(), LocationError> {
        {
            let state = self.inner.state.lock();
            if matches!(*state, TrackerState::Requesting | TrackerState::Active) {
                tracing::debug!("location tracking already running");
                return Ok(());
            }
        }

        // A session that ended in Error leaves its tasks behind; clear them
        // before subscribing fresh.
        for task in self.inner.tasks.lock().drain(..) {
            task.abort();
        }

        if !self.inner.permissions.location_granted() {
            return Err(LocationError::PermissionDenied);
        }

        let enabled: Vec<Arc<dyn LocationProvider>> = self
            .inner
            .providers
            .iter()
            .filter(|provider| provider.is_enabled())
            .cloned()
            .collect();
        if enabled.is_empty() {
            return Err(LocationError::ProvidersUnavailable);
        }

        *self.inner.state.lock() = TrackerState::Requesting;

        // One funnel channel; each provider gets a forwarder task so a slow
        // provider cannot starve the others.
        let (funnel, updates) = mpsc::channel::<ProviderUpdate>(16);
        let mut tasks = Vec::with_capacity(enabled.len() + 1);
        for provider in enabled {
            let mut subscription = provider.subscribe(self.inner.settings);
            let funnel = funnel.clone();
            tasks.push(tokio::spawn(async move {
                while let Some(update) = subscription.recv().await {
                    if funnel.send(update).await.is_err() {
                        break;
                    }
                }
            }));
        }
        drop(funnel);

        tasks.push(tokio::spawn(arbitrate(Arc::clone(&self.inner), updates)));
        *self.inner.tasks.lock() = tasks;
        *self.inner.state.lock() = TrackerState::Active;
        tracing::info!("location tracking started");

        Ok(())
    }

    /// Ends the session and unsubscribes from all providers. Idempotent.
    ///
    /// An upstream location write already in flight is not cancelled; its
    /// late outcome may still reach the observer.
    pub fn stop(&self) {
        for task in self.inner.tasks.lock().drain(..) {
            task.abort();
        }

        let mut state = self.inner.state.lock();
        if *state != TrackerState::Stopped {
            *state = TrackerState::Stopped;
            tracing::info!("location tracking stopped");
        }
    }

    /// The most recent fix known to the session or any provider, without
    /// waiting for a new update.
    ///
    /// Returns `None` when permission is missing or no fix was ever
    /// recorded.
    pub fn last_known_fix(&self) -> Option<LocationFix> {
        if !self.inner.permissions.location_granted() {
            return None;
        }

        let mut best = *self.inner.watermark.lock();
        for provider in &self.inner.providers {
            if let Some(fix) = provider.last_known() {
                if best.map_or(true, |current| fix.is_newer_than(&current)) {
                    best = Some(fix);
                }
            }
        }
        best
    }
}

async fn arbitrate(inner: Arc<TrackerInner>, mut updates: mpsc::Receiver<ProviderUpdate>) {
    while let Some(update) = updates.recv().await {
        match update {
            ProviderUpdate::Fix(fix) => {
                {
                    let mut watermark = inner.watermark.lock();
                    if let Some(last) = *watermark {
                        if !fix.is_newer_than(&last) {
                            tracing::debug!(provider = %fix.provider, "dropping stale fix");
                            continue;
                        }
                    }
                    *watermark = Some(fix);
                }

                tracing::debug!(
                    provider = %fix.provider,
                    latitude = fix.latitude,
                    longitude = fix.longitude,
                    "location fix"
                );
                inner.observer.emit(LocationEvent::Fix(fix));

                let upload = Arc::clone(&inner);
                tokio::spawn(async move {
                    let update = LocationUpdate::new(upload.session.user_id.clone(), &fix);
                    match backend::location::update(&upload.backend, &update).await {
                        Ok(_) => tracing::debug!("location update uploaded"),
                        Err(err) => {
                            tracing::warn!(%err, "location update failed");
                            upload.observer.emit(LocationEvent::Error(
                                "Could not update your location".to_string(),
                            ));
                        }
                    }
                });
            }
            ProviderUpdate::Disabled(kind) => {
                tracing::warn!(provider = %kind, "location provider disabled");
                *inner.state.lock() = TrackerState::Error;
                inner
                    .observer
                    .emit(LocationEvent::Error(LocationError::ProviderDisabled(kind).to_string()));
            }
        }
    }
}
