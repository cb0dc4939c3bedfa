//! Bet model
//!
//! A side wager on a game's outcome between one or more bettor pairs.
//! Either side of a pair may be null; a null side simply contributes no
//! entry for that side when tallying.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::game::Game;
use super::user::UserRef;

/// One bettor backing side A against one backing side B
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BettorPair {
    #[serde(rename = "bettorForA", default)]
    pub bettor_for_a: Option<UserRef>,
    #[serde(rename = "bettorForB", default)]
    pub bettor_for_b: Option<UserRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bet {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub bettors: Vec<BettorPair>,
    pub game: Game,
    /// Free-text wager label, filtered by exact match
    #[serde(rename = "betType")]
    pub bet_type: String,
    #[serde(rename = "betAmount")]
    pub bet_amount: Decimal,
    #[serde(default)]
    pub paid: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Bettor pair as sent in bet create/update payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BettorPairInput {
    #[serde(rename = "bettorForA")]
    pub bettor_for_a: Option<String>,
    #[serde(rename = "bettorForB")]
    pub bettor_for_b: Option<String>,
}

/// Create/update payload for a bet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetInput {
    pub bettors: Vec<BettorPairInput>,
    pub game: String,
    #[serde(rename = "betType")]
    pub bet_type: String,
    #[serde(rename = "betAmount")]
    pub bet_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
}
