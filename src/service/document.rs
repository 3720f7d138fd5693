//! Verification document capture and upload.

use std::path::PathBuf;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::backend::{self, BackendClient};
use crate::error::validation::{DecodeError, ValidationError};
use crate::error::BridgeError;
use crate::model::document::{DocumentKind, ImageFormat};
use crate::notify::{NotificationEvent, NotificationRouter, Severity};
use crate::observer::{Observer, ObserverCell, Subscription};
use crate::session::SessionContext;

/// Upper bound on a decoded document image.
pub const MAX_DOCUMENT_BYTES: usize = 5 * 1024 * 1024;
const MAX_DOCUMENT_MB: u32 = 5;

/// Events delivered to the document observer.
#[derive(Debug, Clone)]
pub enum DocumentEvent {
    /// Upload progress, 0-100.
    Progress { percent: u8 },
    /// Terminal success: the document's public object URL.
    Uploaded { kind: DocumentKind, url: String },
    Error { message: String },
}

struct DocumentInner {
    backend: BackendClient,
    notifier: NotificationRouter,
    session: SessionContext,
    observer: ObserverCell<DocumentEvent>,
    cache_dir: Option<PathBuf>,
}

#[derive(Clone)]
pub struct DocumentService {
    inner: Arc<DocumentInner>,
}

impl DocumentService {
    pub fn new(
        backend: BackendClient,
        notifier: NotificationRouter,
        session: SessionContext,
        cache_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            inner: Arc::new(DocumentInner {
                backend,
                notifier,
                session,
                observer: ObserverCell::new(),
                cache_dir,
            }),
        }
    }

    /// Registers the document observer, replacing any previous registration.
    pub fn subscribe(&self, observer: Arc<dyn Observer<DocumentEvent>>) -> Subscription {
        self.inner.observer.subscribe(observer)
    }

    /// Validates and uploads one captured document image.
    ///
    /// Format, size, and image-signature problems fail immediately, without
    /// a network call. A valid image is uploaded with progress events; the
    /// terminal event is `Uploaded` (plus a confirmation notification) or a
    /// generic `Error`.
    pub fn upload(&self, kind: DocumentKind, base64_data: &str, format_ext: &str) {
        let (format, bytes) = match self.validate(base64_data, format_ext) {
            Ok(validated) => validated,
            Err(message) => {
                self.inner.observer.emit(DocumentEvent::Error { message });
                return;
            }
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let progress_observer = inner.observer.clone();
            let progress = move |percent: u8| {
                progress_observer.emit(DocumentEvent::Progress { percent });
            };

            let outcome = backend::storage::upload_document(
                &inner.backend,
                &inner.session.user_id,
                kind,
                format,
                bytes,
                progress,
            )
            .await;

            match outcome {
                Ok(url) => {
                    inner.observer.emit(DocumentEvent::Uploaded {
                        kind,
                        url,
                    });
                    inner.notifier.present(NotificationEvent {
                        title: "📄 Document uploaded".to_string(),
                        body: format!("{} uploaded successfully", kind.label()),
                        correlation_id: format!("document_{}", kind.wire_name()),
                        severity: Severity::High,
                        sticky: false,
                        service_id: None,
                    });
                }
                Err(err) => {
                    tracing::error!(%err, kind = kind.wire_name(), "document upload failed");
                    inner.observer.emit(DocumentEvent::Error {
                        message: "Could not upload the document".to_string(),
                    });
                }
            }
        });
    }

    fn validate(&self, base64_data: &str, format_ext: &str) -> Result<(ImageFormat, Vec<u8>), String> {
        let format = ImageFormat::from_extension(format_ext).ok_or_else(|| {
            let err = ValidationError::UnsupportedFormat(format_ext.to_string());
            tracing::warn!(%err, "rejected document");
            err.to_string()
        })?;

        let bytes = BASE64.decode(base64_data).map_err(|source| {
            let err = DecodeError::Base64(source);
            tracing::warn!(%err, "rejected document");
            err.to_string()
        })?;

        if bytes.len() > MAX_DOCUMENT_BYTES {
            let err = ValidationError::DocumentTooLarge {
                limit_mb: MAX_DOCUMENT_MB,
            };
            tracing::warn!(size = bytes.len(), "rejected oversized document");
            return Err(err.to_string());
        }

        if !format.matches_signature(&bytes) {
            let err = DecodeError::UnrecognizedImage {
                expected: format.extension(),
            };
            tracing::warn!(%err, "rejected document");
            return Err(err.to_string());
        }

        Ok((format, bytes))
    }

    /// Saves a validated document image to the local cache.
    pub fn cache_document(
        &self,
        kind: DocumentKind,
        format: ImageFormat,
        bytes: &[u8],
    ) -> Result<PathBuf, BridgeError> {
        let dir = self
            .inner
            .cache_dir
            .as_ref()
            .ok_or(BridgeError::CacheDisabled)?
            .join("documents");
        std::fs::create_dir_all(&dir).map_err(|source| BridgeError::CacheIo {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(format!(
            "{}_{}.{}",
            self.inner.session.user_id,
            kind.wire_name(),
            format.extension()
        ));
        std::fs::write(&path, bytes).map_err(|source| BridgeError::CacheIo {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }

    /// Reads a previously cached document image, if one exists.
    pub fn cached_document(&self, kind: DocumentKind, format: ImageFormat) -> Option<Vec<u8>> {
        let path = self.inner.cache_dir.as_ref()?.join("documents").join(format!(
            "{}_{}.{}",
            self.inner.session.user_id,
            kind.wire_name(),
            format.extension()
        ));

        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                tracing::debug!(%err, path = %path.display(), "no cached document");
                None
            }
        }
    }
}
