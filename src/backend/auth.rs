//! Authentication endpoints.

use crate::backend::{BackendClient, Method, Outcome};
use crate::model::profile::{Credentials, NewAccount};

/// Exchanges email/password credentials for a session token payload.
pub async fn sign_in(client: &BackendClient, credentials: &Credentials) -> Outcome {
    let body = serde_json::to_value(credentials)?;
    client
        .request(Method::Post, "/auth/v1/token?grant_type=password", Some(body))
        .await
}

/// Registers a new account with its profile metadata.
pub async fn sign_up(client: &BackendClient, account: &NewAccount) -> Outcome {
    let body = serde_json::to_value(account)?;
    client
        .request(Method::Post, "/auth/v1/signup", Some(body))
        .await
}
