use reqwest::StatusCode;
use thiserror::Error;

/// Failure half of a backend request outcome.
///
/// Exactly one of these (or a success payload) reaches the caller per issued
/// request. The raw backend detail carried here is for logs; feature services
/// convert it to a generic user-presentable message before it reaches an
/// observer.
#[derive(Error, Debug)]
pub enum OutcomeError {
    /// No response was received: network unreachable, timeout, DNS failure,
    /// connection refused.
    #[error("connection error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. The raw response body
    /// is kept verbatim.
    #[error("backend error: {status} - {body}")]
    Backend { status: StatusCode, body: String },

    /// A request payload could not be serialized before transmission.
    #[error("failed to serialize request: {0}")]
    Encode(#[from] serde_json::Error),

    /// A relative endpoint path did not join onto the base URL.
    #[error("invalid endpoint path '{path}': {source}")]
    Endpoint {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

impl OutcomeError {
    /// Whether the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
