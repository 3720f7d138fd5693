//! Profile endpoints.

use crate::backend::{BackendClient, Method, Outcome};

/// Fetches the profile row for one user.
pub async fn fetch(client: &BackendClient, user_id: &str) -> Outcome {
    let path = format!("/rest/v1/profiles?id=eq.{user_id}");
    client.request(Method::Get, &path, None).await
}
