use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use courier_bridge::backend::BackendClient;
use courier_bridge::error::BridgeError;
use courier_bridge::model::document::{DocumentKind, ImageFormat};
use courier_bridge::notify::NotificationRouter;
use courier_bridge::observer::Subscription;
use courier_bridge::service::document::{DocumentEvent, DocumentService, MAX_DOCUMENT_BYTES};
use courier_bridge::session::SessionContext;
use test_utils::backend::{client_for, spawn_backend, unreachable_client};
use test_utils::fake::observer::CapturingObserver;
use test_utils::fake::presenter::RecordingPresenter;
use tokio::sync::mpsc::UnboundedReceiver;

/// Waits out the gap between the terminal observer event and the
/// notification handoff, which happen on the uploading task.
async fn await_presented(presenter: &RecordingPresenter, count: usize) {
    for _ in 0..100 {
        if presenter.presented_count() >= count {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    panic!("expected {count} notifications, got {}", presenter.presented_count());
}

struct DocumentHarness {
    service: DocumentService,
    events: UnboundedReceiver<DocumentEvent>,
    presenter: Arc<RecordingPresenter>,
    _subscription: Subscription,
}

fn harness(backend: BackendClient, cache_dir: Option<PathBuf>) -> DocumentHarness {
    let presenter = RecordingPresenter::new();
    let service = DocumentService::new(
        backend,
        NotificationRouter::new(presenter.clone()),
        SessionContext::new("courier-1"),
        cache_dir,
    );
    let (observer, events) = CapturingObserver::channel();
    let _subscription = service.subscribe(observer);
    DocumentHarness {
        service,
        events,
        presenter,
        _subscription,
    }
}

fn jpeg_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len.max(4)];
    bytes[0] = 0xFF;
    bytes[1] = 0xD8;
    bytes[2] = 0xFF;
    bytes[3] = 0xE0;
    bytes
}

fn storage_router(hits: Arc<AtomicUsize>) -> Router {
    Router::new().route(
        "/storage/v1/object/documents/{user}/{file}",
        post(move || {
            let hits = Arc::clone(&hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                "{}"
            }
        }),
    )
}

/// Tests that an unsupported format is rejected locally.
///
/// Expected: error naming the format, zero backend calls
#[tokio::test]
async fn unsupported_format_fails_validation_without_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let mut h = harness(client_for(spawn_backend(storage_router(hits.clone())).await), None);

    let data = BASE64.encode(jpeg_bytes(64));
    h.service.upload(DocumentKind::DriverLicense, &data, "webp");

    match h.events.recv().await {
        Some(DocumentEvent::Error { message }) => {
            assert_eq!(message, "Unsupported image format: webp");
        }
        other => panic!("expected an error event, got {other:?}"),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(h.presenter.presented_count(), 0);
}

/// Tests that garbage base64 is rejected locally.
///
/// Expected: decode error event, zero backend calls
#[tokio::test]
async fn invalid_base64_fails_decoding_without_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let mut h = harness(client_for(spawn_backend(storage_router(hits.clone())).await), None);

    h.service.upload(DocumentKind::Selfie, "!!not-base64!!", "png");

    match h.events.recv().await {
        Some(DocumentEvent::Error { message }) => {
            assert!(message.starts_with("Document data is not valid base64"));
        }
        other => panic!("expected an error event, got {other:?}"),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

/// Tests the size cap on decoded bytes.
///
/// Expected: 5 MB limit named in the error, zero backend calls
#[tokio::test]
async fn oversized_document_fails_validation_without_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let mut h = harness(client_for(spawn_backend(storage_router(hits.clone())).await), None);

    let data = BASE64.encode(jpeg_bytes(MAX_DOCUMENT_BYTES + 1));
    h.service.upload(DocumentKind::VehiclePhoto, &data, "jpg");

    match h.events.recv().await {
        Some(DocumentEvent::Error { message }) => {
            assert_eq!(message, "Document exceeds the 5 MB size limit");
        }
        other => panic!("expected an error event, got {other:?}"),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

/// Tests signature sniffing against the declared format.
///
/// Expected: PNG-declared JPEG bytes rejected, zero backend calls
#[tokio::test]
async fn mismatched_signature_fails_validation_without_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let mut h = harness(client_for(spawn_backend(storage_router(hits.clone())).await), None);

    let data = BASE64.encode(jpeg_bytes(64));
    h.service.upload(DocumentKind::Selfie, &data, "png");

    match h.events.recv().await {
        Some(DocumentEvent::Error { message }) => {
            assert_eq!(message, "Document data is not a valid png image");
        }
        other => panic!("expected an error event, got {other:?}"),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

/// Tests the upload happy path.
///
/// Expected: progress ends at 100, Uploaded carries the public URL, one
/// confirmation notification keyed by document kind
#[tokio::test]
async fn upload_reports_progress_url_and_confirmation() {
    let hits = Arc::new(AtomicUsize::new(0));
    let mut h = harness(client_for(spawn_backend(storage_router(hits.clone())).await), None);

    let data = BASE64.encode(jpeg_bytes(150_000));
    h.service.upload(DocumentKind::DriverLicense, &data, "jpg");

    let mut last_progress = None;
    let url = loop {
        match h.events.recv().await {
            Some(DocumentEvent::Progress { percent }) => last_progress = Some(percent),
            Some(DocumentEvent::Uploaded { kind, url }) => {
                assert_eq!(kind, DocumentKind::DriverLicense);
                break url;
            }
            other => panic!("expected progress or uploaded, got {other:?}"),
        }
    };

    assert_eq!(last_progress, Some(100));
    assert!(url.contains("/storage/v1/object/public/documents/courier-1/cnh_"));
    assert!(url.ends_with(".jpg"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    await_presented(&h.presenter, 1).await;
    let visible = h.presenter.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].correlation_id, "document_cnh");
    assert_eq!(visible[0].body, "Driver's license uploaded successfully");
}

/// Tests the upload failure path.
///
/// Expected: generic error event, no notification
#[tokio::test]
async fn failed_upload_reports_generic_error() {
    let mut h = harness(unreachable_client().await, None);

    let data = BASE64.encode(jpeg_bytes(64));
    h.service.upload(DocumentKind::DriverLicense, &data, "jpg");

    loop {
        match h.events.recv().await {
            Some(DocumentEvent::Progress { .. }) => continue,
            Some(DocumentEvent::Error { message }) => {
                assert_eq!(message, "Could not upload the document");
                break;
            }
            other => panic!("expected an error event, got {other:?}"),
        }
    }
    assert_eq!(h.presenter.presented_count(), 0);
}

/// Tests the local cache round trip.
///
/// Expected: bytes written under the user/kind name and read back; the cache
/// misses for other kinds
#[tokio::test]
async fn cache_round_trip() {
    let cache_dir = std::env::temp_dir().join(format!(
        "courier-bridge-test-{}-{}",
        std::process::id(),
        line!()
    ));
    let h = harness(unreachable_client().await, Some(cache_dir.clone()));

    let bytes = jpeg_bytes(64);
    let path = h
        .service
        .cache_document(DocumentKind::DriverLicense, ImageFormat::Jpg, &bytes)
        .unwrap();
    assert!(path.ends_with("courier-1_cnh.jpg"));

    let cached = h
        .service
        .cached_document(DocumentKind::DriverLicense, ImageFormat::Jpg)
        .unwrap();
    assert_eq!(cached, bytes);

    assert!(h
        .service
        .cached_document(DocumentKind::Selfie, ImageFormat::Jpg)
        .is_none());

    std::fs::remove_dir_all(&cache_dir).ok();
}

/// Tests the cache without a configured directory.
///
/// Expected: Err CacheDisabled
#[tokio::test]
async fn cache_requires_configuration() {
    let h = harness(unreachable_client().await, None);

    let err = h
        .service
        .cache_document(DocumentKind::Selfie, ImageFormat::Png, &[1, 2, 3])
        .unwrap_err();
    assert!(matches!(err, BridgeError::CacheDisabled));
}
