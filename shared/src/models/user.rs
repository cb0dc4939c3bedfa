//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access role, drives path-prefix routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

/// Minimal user reference as embedded in games, rosters and bets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Full user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_active")]
    pub active: bool,
    /// User who absorbs this user's cost share, when any
    #[serde(rename = "sponsoredBy", default)]
    pub sponsored_by: Option<UserRef>,
    /// Users this user pays for
    #[serde(default)]
    pub sponsors: Vec<UserRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Create/update payload for a user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub role: Role,
    /// 4-digit login PIN, only sent when (re)setting it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(rename = "sponsoredBy", skip_serializing_if = "Option::is_none")]
    pub sponsored_by: Option<String>,
}
