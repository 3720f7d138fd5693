//! Raw-byte document upload against the storage endpoint.
//!
//! Unlike the REST endpoints this posts the image bytes directly, with the
//! image media type on the wire, and reports upload progress as the body
//! stream is consumed.

use chrono::Utc;
use futures::stream;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Body;

use crate::backend::{BackendClient, Outcome};
use crate::error::outcome::OutcomeError;
use crate::model::document::{DocumentKind, ImageFormat};

const UPLOAD_CHUNK_BYTES: usize = 64 * 1024;

/// Uploads one document image and resolves to its public object URL.
///
/// The object lands at `documents/{user}/{kind}_{millis}.{ext}`; the
/// timestamp keeps re-uploads of the same document kind from colliding.
/// `progress` is invoked with a 0-100 percentage as chunks leave the client.
pub async fn upload_document(
    client: &BackendClient,
    user_id: &str,
    kind: DocumentKind,
    format: ImageFormat,
    bytes: Vec<u8>,
    progress: impl Fn(u8) + Send + Sync + 'static,
) -> Outcome {
    let object_name = format!(
        "{user_id}/{}_{}.{}",
        kind.wire_name(),
        Utc::now().timestamp_millis(),
        format.extension()
    );
    let url = client.endpoint(&format!("/storage/v1/object/documents/{object_name}"))?;
    let public_url = client
        .endpoint(&format!("/storage/v1/object/public/documents/{object_name}"))?
        .to_string();

    let total = bytes.len().max(1);
    let chunks: Vec<Vec<u8>> = bytes
        .chunks(UPLOAD_CHUNK_BYTES)
        .map(|chunk| chunk.to_vec())
        .collect();
    let mut sent = 0usize;
    let body_stream = stream::iter(chunks.into_iter().map(move |chunk| {
        sent += chunk.len();
        progress(((sent * 100) / total).min(100) as u8);
        Ok::<Vec<u8>, std::convert::Infallible>(chunk)
    }));

    let response = client
        .http()
        .post(url)
        .header(AUTHORIZATION, format!("Bearer {}", client.api_key()))
        .header(CONTENT_TYPE, format.media_type())
        .body(Body::wrap_stream(body_stream))
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        tracing::debug!(object_name, "document upload completed");
        Ok(public_url)
    } else {
        tracing::error!(%status, object_name, body = %body, "document upload rejected");
        Err(OutcomeError::Backend { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_for, spawn_backend};
    use axum::body::Bytes;
    use axum::extract::Path;
    use axum::http::HeaderMap;
    use axum::routing::post;
    use axum::Router;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Tests a successful raw-byte upload.
    ///
    /// Expected: image media type on the wire, public URL returned, progress
    /// reaches exactly 100
    #[tokio::test]
    async fn uploads_bytes_and_reports_progress() {
        async fn handler(
            Path((user, file)): Path<(String, String)>,
            headers: HeaderMap,
            body: Bytes,
        ) -> String {
            assert_eq!(user, "u1");
            assert!(file.starts_with("cnh_") && file.ends_with(".jpg"));
            assert_eq!(headers.get("content-type").unwrap(), "image/jpg");
            assert_eq!(headers.get("authorization").unwrap(), "Bearer test-key");
            assert_eq!(body.len(), 200_000);
            "{}".to_string()
        }

        let router = Router::new().route(
            "/storage/v1/object/documents/{user}/{file}",
            post(handler),
        );
        let addr = spawn_backend(router).await;
        let client = client_for(addr);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let progress = {
            let seen = Arc::clone(&seen);
            move |percent: u8| seen.lock().push(percent)
        };

        let url = upload_document(
            &client,
            "u1",
            DocumentKind::DriverLicense,
            ImageFormat::Jpg,
            vec![0xAB; 200_000],
            progress,
        )
        .await
        .unwrap();

        assert!(url.contains("/storage/v1/object/public/documents/u1/cnh_"));
        assert!(url.ends_with(".jpg"));

        let seen = seen.lock();
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    /// Tests that a rejected upload surfaces the status and body.
    ///
    /// Expected: Err backend with status 403
    #[tokio::test]
    async fn rejected_upload_maps_to_backend_error() {
        let router = Router::new().route(
            "/storage/v1/object/documents/{user}/{file}",
            post(|| async { (axum::http::StatusCode::FORBIDDEN, "bucket policy") }),
        );
        let addr = spawn_backend(router).await;
        let client = client_for(addr);

        let err = upload_document(
            &client,
            "u1",
            DocumentKind::Selfie,
            ImageFormat::Png,
            vec![0x89; 64],
            |_| {},
        )
        .await
        .unwrap_err();

        match err {
            OutcomeError::Backend { status, body } => {
                assert_eq!(status, axum::http::StatusCode::FORBIDDEN);
                assert_eq!(body, "bucket policy");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }
}
