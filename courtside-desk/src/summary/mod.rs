//! Desk-side aggregation
//!
//! Recomputes the session billing and bet figures from already-fetched
//! records. Pure functions over the inputs; no I/O, nothing mutated.

pub mod bets;
pub mod billing;
pub mod game;

pub use bets::compute_session_bets;
pub use billing::{SessionBilling, SponsorGroup, SponsorRow};
pub use game::compute_game_summary;
