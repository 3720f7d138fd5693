//! Platform boundary for location sources.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::model::location::{LocationFix, ProviderKind};

/// Subscription parameters applied to every provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerSettings {
    /// Minimum interval between provider updates.
    pub min_interval: Duration,
    /// Minimum displacement between provider updates, in meters.
    pub min_displacement_m: f64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_secs(5),
            min_displacement_m: 10.0,
        }
    }
}

/// One message from a subscribed provider.
#[derive(Debug, Clone)]
pub enum ProviderUpdate {
    Fix(LocationFix),
    /// The source was switched off mid-session.
    Disabled(ProviderKind),
}

/// One platform location source (GPS chip, network positioning).
///
/// Implementations live in the platform adapter layer; the tracker only ever
/// talks to this trait.
pub trait LocationProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Whether the platform currently has this source switched on.
    fn is_enabled(&self) -> bool;

    /// Most recent fix the platform has cached for this source, if any.
    fn last_known(&self) -> Option<LocationFix>;

    /// Starts update delivery with the given settings. Dropping the receiver
    /// ends the subscription.
    fn subscribe(&self, settings: TrackerSettings) -> mpsc::Receiver<ProviderUpdate>;
}

/// Reports whether the user has granted location access.
pub trait PermissionProbe: Send + Sync {
    fn location_granted(&self) -> bool;
}
