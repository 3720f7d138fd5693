use thiserror::Error;

use crate::model::location::ProviderKind;

/// Pre-flight and in-session failures of the location tracker.
///
/// Permission and availability are checked synchronously before any provider
/// subscription; they never reach the platform location stack.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Location permission is not currently granted.
    #[error("Location permission denied")]
    PermissionDenied,

    /// No location provider is enabled on the device.
    #[error("Location is disabled")]
    ProvidersUnavailable,

    /// A provider was switched off while a session was active.
    #[error("{0} provider disabled")]
    ProviderDisabled(ProviderKind),
}
