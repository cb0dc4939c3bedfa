//! Per-game cost breakdown

use rust_decimal::Decimal;

use shared::models::summary::GameSummary;
use shared::models::Game;
use shared::util::{hours_between, round_money};

/// Court, shuttle and total rates for one game with even per-player
/// splits. `None` while the game is still open.
pub fn compute_game_summary(game: &Game) -> Option<GameSummary> {
    let end = game.end?;

    let court_rate = game.court.price * hours_between(game.start, end);
    let shuttle_rate: Decimal = game
        .shuttles_used
        .iter()
        .map(|u| u.shuttle.price * Decimal::from(u.quantity))
        .sum();
    let total_rate = court_rate + shuttle_rate;

    let players: Vec<_> = game.players().into_iter().cloned().collect();
    let count = Decimal::from(players.len());

    Some(GameSummary {
        court_rate,
        court_rate_per_player: round_money(court_rate / count),
        shuttle_rate,
        shuttle_rate_per_player: round_money(shuttle_rate / count),
        total_rate,
        total_rate_per_player: round_money(total_rate / count),
        players,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::game::ShuttleUsage;
    use shared::models::{Court, GameStatus, Shuttle, UserRef};

    fn user(name: &str) -> UserRef {
        UserRef {
            id: name.to_lowercase(),
            name: name.into(),
        }
    }

    fn doubles_game() -> Game {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        Game {
            id: "g1".into(),
            start,
            end: Some(start + chrono::Duration::minutes(90)),
            a1: user("Ann"),
            a2: Some(user("Bob")),
            b1: user("Cid"),
            b2: Some(user("Dan")),
            court: Court {
                id: "c1".into(),
                name: "Court 1".into(),
                price: Decimal::new(200, 0),
                active: true,
            },
            shuttles_used: vec![ShuttleUsage {
                shuttle: Shuttle {
                    id: "s1".into(),
                    name: "AS-50".into(),
                    price: Decimal::new(12, 0),
                    active: true,
                },
                quantity: 3,
            }],
            winner: None,
            status: GameStatus::Completed,
            active: true,
        }
    }

    #[test]
    fn splits_rates_evenly_across_players() {
        let summary = compute_game_summary(&doubles_game()).unwrap();

        assert_eq!(summary.court_rate, Decimal::new(300, 0)); // 200 * 1.5h
        assert_eq!(summary.shuttle_rate, Decimal::new(36, 0)); // 12 * 3
        assert_eq!(summary.total_rate, Decimal::new(336, 0));

        assert_eq!(summary.court_rate_per_player, Decimal::new(75, 0));
        assert_eq!(summary.shuttle_rate_per_player, Decimal::new(9, 0));
        assert_eq!(summary.total_rate_per_player, Decimal::new(84, 0));
        assert_eq!(summary.players.len(), 4);
    }

    #[test]
    fn uneven_split_rounds_to_two_decimals() {
        let mut game = doubles_game();
        game.a2 = None;
        game.b2 = None;
        game.court.price = Decimal::new(100, 0);
        // 150 court / 2 players = 75; shuttles 36 / 2 = 18
        let summary = compute_game_summary(&game).unwrap();
        assert_eq!(summary.court_rate_per_player, Decimal::new(75, 0));

        game.shuttles_used[0].quantity = 1; // 12 + 150 = 162 over 2
        let summary = compute_game_summary(&game).unwrap();
        assert_eq!(summary.total_rate_per_player, Decimal::new(81, 0));
    }

    #[test]
    fn open_game_has_no_summary() {
        let mut game = doubles_game();
        game.end = None;
        assert!(compute_game_summary(&game).is_none());
    }
}
