//! Account and profile wire DTOs for the auth endpoints.

use serde::{Deserialize, Serialize};

/// Role a user signs up with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Company,
    Motoboy,
}

/// Wire payload for password sign-in.
#[derive(Serialize, Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Wire payload for account creation. `data` becomes the user's profile
/// metadata on the backend.
#[derive(Serialize, Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub data: AccountMetadata,
}

#[derive(Serialize, Debug, Clone)]
pub struct AccountMetadata {
    pub full_name: String,
    pub role: Role,
}

/// One profile row as returned by the profile endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    pub role: Role,
}
