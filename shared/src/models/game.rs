//! Game model
//!
//! One match inside a session: up to four player slots, a court, and
//! the shuttles consumed. `winner` is only meaningful once `end` is set.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::court::Court;
use super::shuttle::Shuttle;
use super::user::UserRef;

/// Winning side of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    A,
    B,
}

/// Game lifecycle, driven solely by explicit user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Pending,
    Ongoing,
    Completed,
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A shuttle type with the quantity consumed during the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShuttleUsage {
    pub shuttle: Shuttle,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "_id")]
    pub id: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    /// Side A players; `a2` is absent for singles
    #[serde(rename = "A1")]
    pub a1: UserRef,
    #[serde(rename = "A2", default)]
    pub a2: Option<UserRef>,
    #[serde(rename = "B1")]
    pub b1: UserRef,
    #[serde(rename = "B2", default)]
    pub b2: Option<UserRef>,
    pub court: Court,
    #[serde(rename = "shuttlesUsed", default)]
    pub shuttles_used: Vec<ShuttleUsage>,
    #[serde(default)]
    pub winner: Option<Winner>,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Game {
    /// A game is closed once an end timestamp is recorded.
    pub fn is_closed(&self) -> bool {
        self.end.is_some()
    }

    /// Elapsed time between start and end; `None` while the game is open.
    pub fn duration(&self) -> Option<Duration> {
        self.end.map(|end| end - self.start)
    }

    /// The recorded winner, ignoring any value set on an open game.
    pub fn resolved_winner(&self) -> Option<Winner> {
        if self.is_closed() { self.winner } else { None }
    }

    /// Distinct players occupying the four slots.
    pub fn players(&self) -> Vec<&UserRef> {
        let mut players = vec![&self.a1, &self.b1];
        if let Some(a2) = &self.a2 {
            players.push(a2);
        }
        if let Some(b2) = &self.b2 {
            players.push(b2);
        }
        players
    }
}

/// Shuttle usage as sent in game create/update payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShuttleUsageInput {
    pub shuttle: String,
    pub quantity: u32,
}

/// Create/update payload for a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInput {
    pub session: String,
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(rename = "A1")]
    pub a1: String,
    #[serde(rename = "A2", skip_serializing_if = "Option::is_none")]
    pub a2: Option<String>,
    #[serde(rename = "B1")]
    pub b1: String,
    #[serde(rename = "B2", skip_serializing_if = "Option::is_none")]
    pub b2: Option<String>,
    pub court: String,
    #[serde(rename = "shuttlesUsed")]
    pub shuttles_used: Vec<ShuttleUsageInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
    pub status: GameStatus,
}
