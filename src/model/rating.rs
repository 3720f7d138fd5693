//! Rating domain values and wire DTOs.

use serde::{Deserialize, Serialize};

/// Wire payload for submitting a rating.
#[derive(Serialize, Debug, Clone)]
pub struct NewRating {
    pub service_id: String,
    pub rater_id: String,
    pub rated_id: String,
    pub rating: u8,
    pub comment: String,
}

/// Lifecycle status of a delivery service, as the backend reports it.
///
/// Ratings are only accepted once a service reaches a terminal delivered
/// state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Pending,
    Accepted,
    InTransit,
    Completed,
    Delivered,
    Cancelled,
}
