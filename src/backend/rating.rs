//! Rating endpoints.

use crate::backend::{BackendClient, Method, Outcome};
use crate::model::rating::NewRating;

/// Posts one rating row.
pub async fn submit(client: &BackendClient, rating: &NewRating) -> Outcome {
    let body = serde_json::to_value(rating)?;
    client
        .request(Method::Post, "/rest/v1/ratings", Some(body))
        .await
}
