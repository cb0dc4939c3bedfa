//! Session bet aggregation
//!
//! Win/loss tallies per bettor over a session's bets, with the pairwise
//! head-to-head ledger. Only games with a recorded winner feed the
//! stats; unresolved bets are excluded entirely.

use rust_decimal::Decimal;

use shared::models::summary::{CompetitorStats, PlayerBetStats, SessionBetsSummary};
use shared::models::{Bet, UserRef, Winner};

/// Aggregate a session's bets, optionally filtered by exact
/// case-sensitive bet type.
pub fn compute_session_bets(bets: &[Bet], bet_type: Option<&str>) -> SessionBetsSummary {
    let filtered: Vec<&Bet> = bets
        .iter()
        .filter(|b| bet_type.map_or(true, |t| b.bet_type == t))
        .collect();

    let total_bets = filtered.len() as u32;
    let total_amount: Decimal = filtered.iter().map(|b| b.bet_amount).sum();

    let mut players: Vec<PlayerBetStats> = Vec::new();
    for bet in &filtered {
        let Some(winner) = bet.game.resolved_winner() else {
            continue;
        };
        for pair in &bet.bettors {
            let (won, lost) = match winner {
                Winner::A => (pair.bettor_for_a.as_ref(), pair.bettor_for_b.as_ref()),
                Winner::B => (pair.bettor_for_b.as_ref(), pair.bettor_for_a.as_ref()),
            };
            if let Some(user) = won {
                record(&mut players, user, lost, true);
            }
            if let Some(user) = lost {
                record(&mut players, user, won, false);
            }
        }
    }

    for stats in &mut players {
        stats.competitors.sort_by(|a, b| a.user.name.cmp(&b.user.name));
    }
    players.sort_by(|a, b| a.user.name.cmp(&b.user.name));

    let total_wins = players.iter().map(|p| p.wins).sum();
    let total_losses = players.iter().map(|p| p.losses).sum();

    SessionBetsSummary {
        session: None,
        player_stats: players,
        total_bets,
        total_amount,
        total_wins,
        total_losses,
    }
}

/// Credit one outcome to `user`, and to the head-to-head ledger when
/// the opposing side is populated.
fn record(
    players: &mut Vec<PlayerBetStats>,
    user: &UserRef,
    opponent: Option<&UserRef>,
    won: bool,
) {
    let idx = match players.iter().position(|p| p.user.id == user.id) {
        Some(idx) => idx,
        None => {
            players.push(PlayerBetStats {
                user: user.clone(),
                wins: 0,
                losses: 0,
                total: 0,
                competitors: Vec::new(),
            });
            players.len() - 1
        }
    };
    let stats = &mut players[idx];
    if won {
        stats.wins += 1;
    } else {
        stats.losses += 1;
    }
    stats.total += 1;

    let Some(opponent) = opponent else { return };
    let idx = match stats
        .competitors
        .iter()
        .position(|c| c.user.id == opponent.id)
    {
        Some(idx) => idx,
        None => {
            stats.competitors.push(CompetitorStats {
                user: opponent.clone(),
                wins: 0,
                losses: 0,
                total: 0,
            });
            stats.competitors.len() - 1
        }
    };
    let entry = &mut stats.competitors[idx];
    if won {
        entry.wins += 1;
    } else {
        entry.losses += 1;
    }
    entry.total += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::{BettorPair, Court, Game, GameStatus};

    fn user(name: &str) -> UserRef {
        UserRef {
            id: name.to_lowercase(),
            name: name.into(),
        }
    }

    fn game(winner: Option<Winner>, closed: bool) -> Game {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        Game {
            id: "g1".into(),
            start,
            end: closed.then(|| start + chrono::Duration::hours(1)),
            a1: user("P1"),
            a2: None,
            b1: user("P2"),
            b2: None,
            court: Court {
                id: "c1".into(),
                name: "Court 1".into(),
                price: Decimal::new(200, 0),
                active: true,
            },
            shuttles_used: vec![],
            winner,
            status: GameStatus::Completed,
            active: true,
        }
    }

    fn bet(
        winner: Option<Winner>,
        closed: bool,
        bet_type: &str,
        amount: i64,
        pairs: Vec<(Option<&str>, Option<&str>)>,
    ) -> Bet {
        Bet {
            id: "b1".into(),
            bettors: pairs
                .into_iter()
                .map(|(a, b)| BettorPair {
                    bettor_for_a: a.map(user),
                    bettor_for_b: b.map(user),
                })
                .collect(),
            game: game(winner, closed),
            bet_type: bet_type.into(),
            bet_amount: Decimal::new(amount, 0),
            paid: false,
            active: true,
        }
    }

    #[test]
    fn winner_a_credits_a_side_with_a_win() {
        let bets = vec![bet(
            Some(Winner::A),
            true,
            "friendly",
            50,
            vec![(Some("Ann"), Some("Bob"))],
        )];
        let summary = compute_session_bets(&bets, None);

        let ann = &summary.player_stats[0];
        assert_eq!(ann.user.name, "Ann");
        assert_eq!((ann.wins, ann.losses, ann.total), (1, 0, 1));

        let bob = &summary.player_stats[1];
        assert_eq!(bob.user.name, "Bob");
        assert_eq!((bob.wins, bob.losses, bob.total), (0, 1, 1));

        assert_eq!(summary.total_wins, 1);
        assert_eq!(summary.total_losses, 1);
    }

    #[test]
    fn head_to_head_ledger_tracks_each_opponent() {
        let bets = vec![
            bet(Some(Winner::A), true, "friendly", 50, vec![(Some("Ann"), Some("Bob"))]),
            bet(Some(Winner::B), true, "friendly", 50, vec![(Some("Ann"), Some("Bob"))]),
            bet(Some(Winner::A), true, "friendly", 20, vec![(Some("Ann"), Some("Cid"))]),
        ];
        let summary = compute_session_bets(&bets, None);

        let ann = summary
            .player_stats
            .iter()
            .find(|p| p.user.name == "Ann")
            .unwrap();
        assert_eq!((ann.wins, ann.losses), (2, 1));
        assert_eq!(ann.competitors.len(), 2);

        let vs_bob = ann.competitors.iter().find(|c| c.user.name == "Bob").unwrap();
        assert_eq!((vs_bob.wins, vs_bob.losses, vs_bob.total), (1, 1, 2));
        let vs_cid = ann.competitors.iter().find(|c| c.user.name == "Cid").unwrap();
        assert_eq!((vs_cid.wins, vs_cid.losses, vs_cid.total), (1, 0, 1));
    }

    #[test]
    fn null_side_contributes_nothing_for_that_side() {
        let bets = vec![bet(
            Some(Winner::B),
            true,
            "friendly",
            50,
            vec![(None, Some("Bob"))],
        )];
        let summary = compute_session_bets(&bets, None);

        assert_eq!(summary.player_stats.len(), 1);
        let bob = &summary.player_stats[0];
        assert_eq!((bob.wins, bob.losses), (1, 0));
        // Nobody on the other side: no head-to-head entry either.
        assert!(bob.competitors.is_empty());
    }

    #[test]
    fn unresolved_game_is_excluded_from_stats() {
        // Winner recorded but the game never closed: not resolved.
        let bets = vec![
            bet(Some(Winner::A), false, "friendly", 50, vec![(Some("Ann"), Some("Bob"))]),
            bet(None, true, "friendly", 30, vec![(Some("Ann"), Some("Bob"))]),
        ];
        let summary = compute_session_bets(&bets, None);

        assert!(summary.player_stats.is_empty());
        assert_eq!(summary.total_wins, 0);
        // The bets themselves still count toward the money totals.
        assert_eq!(summary.total_bets, 2);
        assert_eq!(summary.total_amount, Decimal::new(80, 0));
    }

    #[test]
    fn filter_is_exact_and_case_sensitive() {
        let bets = vec![
            bet(Some(Winner::A), true, "Friendly", 50, vec![(Some("Ann"), Some("Bob"))]),
            bet(Some(Winner::A), true, "friendly", 20, vec![(Some("Cid"), Some("Dan"))]),
        ];
        let summary = compute_session_bets(&bets, Some("friendly"));

        assert_eq!(summary.total_bets, 1);
        assert_eq!(summary.total_amount, Decimal::new(20, 0));
        assert_eq!(summary.player_stats.len(), 2);
        assert!(summary.player_stats.iter().all(|p| p.user.name != "Ann"));
    }

    #[test]
    fn filter_matching_nothing_yields_empty_summary() {
        let bets = vec![bet(
            Some(Winner::A),
            true,
            "friendly",
            50,
            vec![(Some("Ann"), Some("Bob"))],
        )];
        let summary = compute_session_bets(&bets, Some("no-such-type"));

        assert_eq!(summary.total_bets, 0);
        assert_eq!(summary.total_amount, Decimal::ZERO);
        assert_eq!(summary.total_wins, 0);
        assert_eq!(summary.total_losses, 0);
        assert!(summary.player_stats.is_empty());
    }

    #[test]
    fn player_without_opponents_has_empty_ledger_but_real_tallies() {
        let bets = vec![
            bet(Some(Winner::A), true, "friendly", 10, vec![(Some("Ann"), None)]),
            bet(Some(Winner::B), true, "friendly", 10, vec![(Some("Ann"), None)]),
        ];
        let summary = compute_session_bets(&bets, None);

        let ann = &summary.player_stats[0];
        assert_eq!((ann.wins, ann.losses, ann.total), (1, 1, 2));
        assert!(ann.competitors.is_empty());
    }
}
