//! Chat message endpoints.

use crate::backend::{BackendClient, Method, Outcome};
use crate::model::message::NewMessage;

/// Posts one chat message row.
pub async fn send_message(client: &BackendClient, message: &NewMessage) -> Outcome {
    let body = serde_json::to_value(message)?;
    client
        .request(Method::Post, "/rest/v1/messages", Some(body))
        .await
}

/// Fetches the message history of one service, oldest first.
pub async fn list_messages(client: &BackendClient, service_id: &str) -> Outcome {
    let path = format!("/rest/v1/messages?service_id=eq.{service_id}&order=created_at.asc");
    client.request(Method::Get, &path, None).await
}
