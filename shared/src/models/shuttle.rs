//! Shuttle model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A consumable shuttlecock type, billed per unit used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shuttle {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Unit price in currency units
    pub price: Decimal,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Create/update payload for a shuttle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShuttleInput {
    pub name: String,
    pub price: Decimal,
}
