//! Asynchronous client for the remote backend.
//!
//! One [`BackendClient`] serves every feature. It issues requests against a
//! single base URL, attaches the fixed bearer credential, and maps each round
//! trip to exactly one [`Outcome`]: the raw response body on a success
//! status, or an [`OutcomeError`] otherwise. The client performs no payload
//! interpretation and no retries; both are the caller's job. Concurrent
//! requests are independent; there is no affinity state between calls.
//!
//! Typed endpoint builders live in the submodules, one per feature area.

pub mod auth;
pub mod chat;
pub mod location;
pub mod profile;
pub mod rating;
pub mod storage;

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::{outcome::OutcomeError, BridgeError};

/// HTTP verb subset the backend surface uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// The single result of one asynchronous backend request: the raw response
/// body, verbatim, or the reason it failed.
pub type Outcome = Result<String, OutcomeError>;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self, BridgeError> {
        let http = reqwest::Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(BridgeError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.backend_url.clone(),
            api_key: config.backend_api_key.clone(),
        })
    }

    /// Issues one request and resolves it to its [`Outcome`].
    ///
    /// Success means the transport completed AND the status is in the 2xx
    /// range; the body is forwarded untouched. A response outside that range
    /// becomes [`OutcomeError::Backend`] carrying the status and raw body; no
    /// response at all becomes [`OutcomeError::Transport`].
    ///
    /// POST bodies are serialized JSON and ask the backend to echo the
    /// created row (`Prefer: return=representation`) so callers can read the
    /// authoritative row id from the payload.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Outcome {
        let url = self.endpoint(path)?;

        let mut request = match method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        }
        .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
        .header("apikey", &self.api_key)
        .header(CONTENT_TYPE, "application/json");

        if method == Method::Post {
            request = request.header("Prefer", "return=representation");
            if let Some(body) = body {
                request = request.json(&body);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        let payload = response.text().await?;

        if status.is_success() {
            tracing::debug!(%status, path, "backend request completed");
            Ok(payload)
        } else {
            tracing::error!(%status, path, body = %payload, "backend request rejected");
            Err(OutcomeError::Backend {
                status,
                body: payload,
            })
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, OutcomeError> {
        self.base_url
            .join(path)
            .map_err(|source| OutcomeError::Endpoint {
                path: path.to_string(),
                source,
            })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Decodes a REST payload of rows into typed values.
pub fn parse_rows<T: DeserializeOwned>(payload: &str) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Extracts the backend-assigned `id` from an echoed row payload.
///
/// The REST layer answers a `Prefer: return=representation` POST with the
/// created row, either bare or wrapped in a one-element array. Returns `None`
/// when the body carries no id; callers fall back to a locally generated
/// receipt id.
pub fn row_id(payload: &str) -> Option<String> {
    let value: Value = serde_json::from_str(payload).ok()?;
    let row = match &value {
        Value::Array(rows) => rows.first()?,
        other => other,
    };
    match row.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
