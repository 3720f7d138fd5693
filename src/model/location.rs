//! Location fix values and the location-update wire DTO.

use std::fmt;
use std::time::Instant;

use serde::Serialize;

/// Which platform source produced a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Gps,
    Network,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gps => write!(f, "GPS"),
            Self::Network => write!(f, "network"),
        }
    }
}

/// One location reading.
///
/// Ordered by `captured_at`; the tracker only ever surfaces the most recent
/// fix across all active providers. Fixes are transient values, superseded
/// on each provider callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Estimated horizontal accuracy radius, in meters.
    pub accuracy_m: f32,
    pub provider: ProviderKind,
    /// Monotonic capture instant, used for cross-provider arbitration.
    pub captured_at: Instant,
}

impl LocationFix {
    /// Strictly-newer comparison used for last-fix-wins arbitration. A fix
    /// captured at the same instant as `other` is NOT newer; the fix already
    /// surfaced wins the tie.
    pub fn is_newer_than(&self, other: &LocationFix) -> bool {
        self.captured_at > other.captured_at
    }
}

/// Wire payload for the location-update endpoint.
#[derive(Serialize, Debug, Clone)]
pub struct LocationUpdate {
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f32,
    /// Literal `"now()"` so the backend stamps the row server-side.
    pub updated_at: &'static str,
}

impl LocationUpdate {
    pub fn new(user_id: impl Into<String>, fix: &LocationFix) -> Self {
        Self {
            user_id: user_id.into(),
            latitude: fix.latitude,
            longitude: fix.longitude,
            accuracy: fix.accuracy_m,
            updated_at: "now()",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Tests the location-update wire shape.
    ///
    /// Expected: fix fields under their column names, server-side timestamp
    /// literal
    #[test]
    fn location_update_serializes_row_columns() {
        let fix = LocationFix {
            latitude: -23.5505,
            longitude: -46.6333,
            accuracy_m: 8.5,
            provider: ProviderKind::Gps,
            captured_at: Instant::now(),
        };
        let update = LocationUpdate::new("courier-1", &fix);
        let value = serde_json::to_value(&update).unwrap();

        assert_eq!(value["user_id"], "courier-1");
        assert_eq!(value["latitude"], -23.5505);
        assert_eq!(value["longitude"], -46.6333);
        assert_eq!(value["accuracy"], 8.5);
        assert_eq!(value["updated_at"], "now()");
    }

    /// Tests the strict-newer arbitration comparison.
    ///
    /// Expected: later instants are newer, equal instants are not
    #[test]
    fn newer_comparison_is_strict() {
        let base = Instant::now();
        let earlier = LocationFix {
            latitude: 0.0,
            longitude: 0.0,
            accuracy_m: 1.0,
            provider: ProviderKind::Network,
            captured_at: base,
        };
        let later = LocationFix {
            captured_at: base + Duration::from_secs(1),
            ..earlier
        };
        let tied = LocationFix {
            provider: ProviderKind::Gps,
            ..earlier
        };

        assert!(later.is_newer_than(&earlier));
        assert!(!earlier.is_newer_than(&later));
        assert!(!tied.is_newer_than(&earlier));
    }
}
