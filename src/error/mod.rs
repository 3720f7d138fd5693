//! Error types for the bridge core.
//!
//! The hierarchy mirrors how failures travel: [`outcome::OutcomeError`] is
//! the async half (one per backend round trip), while validation and
//! location errors are caught synchronously before any network call. Nothing
//! in this tree is treated as process-fatal; every failure path ends in an
//! error event on the relevant observer, never an unhandled fault.

pub mod config;
pub mod location;
pub mod outcome;
pub mod validation;

use std::path::PathBuf;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level error for the synchronous bridge surface (startup, cache).
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be constructed (TLS backend init, resolver).
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A document cache operation was requested with no cache directory
    /// configured.
    #[error("document cache is not configured")]
    CacheDisabled,

    /// Filesystem failure in the local document cache.
    #[error("document cache I/O on {path}: {source}")]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
