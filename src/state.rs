//! Shared bridge state.
//!
//! This module defines the `Bridge` struct which holds the resources every
//! feature service shares: the backend client, the notification router, and
//! the session identity. It is initialized once after sign-in and cloned
//! (cheaply, all fields are reference-counted or small) into whatever hosts
//! the services.

use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::error::BridgeError;
use crate::location::provider::{LocationProvider, PermissionProbe};
use crate::location::LocationTracker;
use crate::notify::{NotificationPresenter, NotificationRouter};
use crate::service::chat::ChatService;
use crate::service::document::DocumentService;
use crate::service::gamification::GamificationService;
use crate::service::rating::RatingService;
use crate::session::SessionContext;

/// Shared resources and the factory for feature services.
///
/// Feature services hold one observer slot each, so hosts should build each
/// service once per session and keep it, rather than calling the accessors
/// per operation.
#[derive(Clone)]
pub struct Bridge {
    backend: BackendClient,
    notifier: NotificationRouter,
    session: SessionContext,
    document_cache_dir: Option<PathBuf>,
}

impl Bridge {
    pub fn new(
        config: &Config,
        presenter: Arc<dyn NotificationPresenter>,
        session: SessionContext,
    ) -> Result<Self, BridgeError> {
        Ok(Self {
            backend: BackendClient::new(config)?,
            notifier: NotificationRouter::new(presenter),
            session,
            document_cache_dir: config.document_cache_dir.clone(),
        })
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    pub fn notifier(&self) -> &NotificationRouter {
        &self.notifier
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn chat(&self) -> ChatService {
        ChatService::new(
            self.backend.clone(),
            self.notifier.clone(),
            self.session.clone(),
        )
    }

    pub fn rating(&self) -> RatingService {
        RatingService::new(
            self.backend.clone(),
            self.notifier.clone(),
            self.session.clone(),
        )
    }

    pub fn documents(&self) -> DocumentService {
        DocumentService::new(
            self.backend.clone(),
            self.notifier.clone(),
            self.session.clone(),
            self.document_cache_dir.clone(),
        )
    }

    pub fn gamification(&self) -> GamificationService {
        GamificationService::new(self.notifier.clone())
    }

    /// Builds a location tracker over the given platform providers.
    pub fn tracker(
        &self,
        providers: Vec<Arc<dyn LocationProvider>>,
        permissions: Arc<dyn PermissionProbe>,
    ) -> LocationTracker {
        LocationTracker::new(
            providers,
            permissions,
            self.backend.clone(),
            self.session.clone(),
        )
    }
}
