//! Session model
//!
//! A calendar-day block of court usage. Open while `end` is null;
//! closing is a UI-reversible toggle, not a one-way transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::court::Court;
use super::game::Game;
use super::shuttle::Shuttle;
use super::user::UserRef;

/// Minimal session reference as embedded in summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "_id")]
    pub id: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    /// Roster of players available for the day
    #[serde(rename = "availablePlayers", default)]
    pub available_players: Vec<UserRef>,
    /// Courts attached to the session (one or more)
    #[serde(rename = "court", default)]
    pub courts: Vec<Court>,
    /// Default shuttle for new games
    #[serde(default)]
    pub shuttle: Option<Shuttle>,
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// A session is ongoing while no end timestamp is recorded.
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }
}

/// Create/update payload for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInput {
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(rename = "court")]
    pub courts: Vec<String>,
    pub shuttle: String,
    #[serde(rename = "availablePlayers")]
    pub available_players: Vec<String>,
}
