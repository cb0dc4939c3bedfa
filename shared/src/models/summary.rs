//! Summary DTOs
//!
//! Shapes shared by the server's derived summary queries
//! (`fetchSessionSummary`, `fetchGameSummary`, `fetchSessionBetsSummary`)
//! and by the desk-side aggregation that recomputes the same figures
//! from already-fetched records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::court::Court;
use super::session::SessionRef;
use super::user::UserRef;

/// Per-shuttle-name usage rollup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShuttleDetail {
    #[serde(rename = "shuttleName")]
    pub shuttle_name: String,
    pub quantity: u32,
    #[serde(rename = "totalPrice")]
    pub total_price: Decimal,
}

/// A player's cost share across a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRate {
    #[serde(rename = "_id")]
    pub id: String,
    /// Number of games this player appeared in
    #[serde(rename = "game", default)]
    pub games_played: u32,
    pub name: String,
    #[serde(rename = "totalRate")]
    pub total_rate: Decimal,
    /// Explicit sponsor relation; preferred over the legacy
    /// name-convention grouping when present
    #[serde(rename = "sponsoredBy", default)]
    pub sponsored_by: Option<UserRef>,
}

/// Total minutes of play per court
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtDuration {
    #[serde(rename = "totalDuration")]
    pub total_minutes: i64,
    pub court: Court,
}

/// Session-level billing rollup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    #[serde(rename = "totalShuttlesUsed")]
    pub total_shuttles_used: u32,
    #[serde(rename = "shuttleTotal")]
    pub shuttle_total: Decimal,
    #[serde(rename = "courtTotal")]
    pub court_total: Decimal,
    /// Opaque adjustment handed down by the external aggregation
    /// service, displayed rounded to the nearest 5
    #[serde(rename = "otherIncome", default)]
    pub other_income: Decimal,
    #[serde(rename = "playerTotal")]
    pub player_total: Decimal,
    #[serde(rename = "shuttleDetails", default)]
    pub shuttle_details: Vec<ShuttleDetail>,
    #[serde(rename = "playerSummaryRates", default)]
    pub player_rates: Vec<PlayerRate>,
    #[serde(rename = "durationPerCourt", default)]
    pub duration_per_court: Vec<CourtDuration>,
}

impl SessionSummary {
    /// Court + shuttle + other income.
    pub fn overall_total(&self) -> Decimal {
        self.court_total + self.shuttle_total + self.other_income
    }
}

/// Per-game cost breakdown with even per-player splits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(rename = "courtRate")]
    pub court_rate: Decimal,
    #[serde(rename = "courtRatePerPlayer")]
    pub court_rate_per_player: Decimal,
    #[serde(rename = "shuttleRate")]
    pub shuttle_rate: Decimal,
    #[serde(rename = "shuttleRatePerPlayer")]
    pub shuttle_rate_per_player: Decimal,
    #[serde(rename = "totalRate")]
    pub total_rate: Decimal,
    #[serde(rename = "totalRatePerPlayer")]
    pub total_rate_per_player: Decimal,
    pub players: Vec<UserRef>,
}

/// Win/loss tally against one specific opposing bettor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorStats {
    pub user: UserRef,
    pub wins: u32,
    pub losses: u32,
    pub total: u32,
}

/// A bettor's session tally with the pairwise head-to-head ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBetStats {
    pub user: UserRef,
    pub wins: u32,
    pub losses: u32,
    pub total: u32,
    #[serde(default)]
    pub competitors: Vec<CompetitorStats>,
}

/// Session-level bet rollup, optionally filtered by bet type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionBetsSummary {
    pub session: Option<SessionRef>,
    #[serde(rename = "playerStats", default)]
    pub player_stats: Vec<PlayerBetStats>,
    #[serde(rename = "totalBets")]
    pub total_bets: u32,
    #[serde(rename = "totalAmount")]
    pub total_amount: Decimal,
    #[serde(rename = "totalWins")]
    pub total_wins: u32,
    #[serde(rename = "totalLosses")]
    pub total_losses: u32,
}
