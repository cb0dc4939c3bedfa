//! Domain models
//!
//! Plain records owned by the external GraphQL API. Field names follow
//! the server schema (`_id`, camelCase); this crate never persists them.

pub mod bet;
pub mod court;
pub mod game;
pub mod session;
pub mod shuttle;
pub mod summary;
pub mod user;

pub use bet::{Bet, BetInput, BettorPair, BettorPairInput};
pub use court::{Court, CourtInput};
pub use game::{Game, GameInput, GameStatus, ShuttleUsage, ShuttleUsageInput, Winner};
pub use session::{Session, SessionInput, SessionRef};
pub use shuttle::{Shuttle, ShuttleInput};
pub use user::{Role, User, UserInput, UserRef};
