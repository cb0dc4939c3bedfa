//! Client-related DTOs
//!
//! Auth response types shared between the API client and the desk
//! application.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Payload returned by `loginWithPin`: bearer token + minimal profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinLoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Minimal authenticated-user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub username: String,
    pub role: Role,
}
