//! Factory for creating test location fixes.

use std::time::Instant;

use courier_bridge::model::location::{LocationFix, ProviderKind};

/// Factory for location fixes with customizable fields.
///
/// Defaults to a GPS fix in central São Paulo captured now; override what a
/// test cares about.
///
/// # Example
///
/// ```rust,ignore
/// let fix = FixFactory::new()
///     .provider(ProviderKind::Network)
///     .captured_at(base + Duration::from_secs(5))
///     .build();
/// ```
pub struct FixFactory {
    latitude: f64,
    longitude: f64,
    accuracy_m: f32,
    provider: ProviderKind,
    captured_at: Instant,
}

impl FixFactory {
    pub fn new() -> Self {
        Self {
            latitude: -23.5505,
            longitude: -46.6333,
            accuracy_m: 12.0,
            provider: ProviderKind::Gps,
            captured_at: Instant::now(),
        }
    }

    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = latitude;
        self
    }

    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = longitude;
        self
    }

    pub fn accuracy_m(mut self, accuracy_m: f32) -> Self {
        self.accuracy_m = accuracy_m;
        self
    }

    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = provider;
        self
    }

    pub fn captured_at(mut self, captured_at: Instant) -> Self {
        self.captured_at = captured_at;
        self
    }

    pub fn build(self) -> LocationFix {
        LocationFix {
            latitude: self.latitude,
            longitude: self.longitude,
            accuracy_m: self.accuracy_m,
            provider: self.provider,
            captured_at: self.captured_at,
        }
    }
}

impl Default for FixFactory {
    fn default() -> Self {
        Self::new()
    }
}
