//! User location endpoints.

use crate::backend::{BackendClient, Method, Outcome};
use crate::model::location::LocationUpdate;

/// Posts one location-update row.
pub async fn update(client: &BackendClient, location: &LocationUpdate) -> Outcome {
    let body = serde_json::to_value(location)?;
    client
        .request(Method::Post, "/rest/v1/user_locations", Some(body))
        .await
}

/// Fetches the last uploaded location of one user.
pub async fn fetch(client: &BackendClient, user_id: &str) -> Outcome {
    let path = format!("/rest/v1/user_locations?user_id=eq.{user_id}");
    client.request(Method::Get, &path, None).await
}
