//! Court model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rentable court with an hourly price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Hourly rate in currency units
    pub price: Decimal,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Create/update payload for a court
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtInput {
    pub name: String,
    pub price: Decimal,
}
